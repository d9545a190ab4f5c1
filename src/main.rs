//! credcheck - concurrent AWS credential validation
//!
//! Reads `key:secret` pairs from `-k` and/or `-f`, checks each one against
//! STS and prints the live ones.

use clap::Parser;
use credcheck::utils::logging::init_logging;
use credcheck::{Cli, CredCheck};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level, cli.log_format) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let result = match cli.into_config().and_then(CredCheck::new) {
        Ok(check) => check.run(&mut std::io::stdout().lock()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to keep the message readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! Command-line surface

use clap::Parser;
use std::path::PathBuf;

use super::models::ValidatorConfig;
use crate::core::providers::AwsConfig;
use crate::core::providers::aws::DEFAULT_REGION;
use crate::utils::error::Result;
use crate::utils::logging::LogFormat;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CREDCHECK_GIT_HASH"),
    ")"
);

/// Validate AWS access-key/secret-key pairs
#[derive(Debug, Clone, Parser)]
#[command(name = "credcheck", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// AWS_KEY:secret pair to validate
    #[arg(short = 'k', long = "key", value_name = "KEY:SECRET")]
    pub key: Option<String>,

    /// File containing AWS_KEY:secret pairs (one per line)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Number of concurrent workers
    #[arg(
        short = 't',
        long = "threads",
        env = "CREDCHECK_THREADS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub threads: u32,

    /// Show invalid credentials and the invalid count
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Signing region for STS
    #[arg(long, env = "CREDCHECK_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Override the STS endpoint
    #[arg(long, env = "CREDCHECK_STS_ENDPOINT", value_name = "URL")]
    pub sts_endpoint: Option<String>,

    /// Override the IAM endpoint
    #[arg(long, env = "CREDCHECK_IAM_ENDPOINT", value_name = "URL")]
    pub iam_endpoint: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "CREDCHECK_TIMEOUT", default_value_t = 30, value_name = "SECS")]
    pub timeout: u64,

    /// Skip the IAM account-detail lookup
    #[arg(long)]
    pub no_details: bool,

    /// Disable ANSI colors (also disabled when NO_COLOR is set)
    #[arg(long)]
    pub no_color: bool,

    /// Diagnostic log filter, written to stderr
    #[arg(long, env = "CREDCHECK_LOG", default_value = "warn", value_name = "FILTER")]
    pub log_level: String,

    /// Diagnostic log format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Resolve into a validated [`ValidatorConfig`]
    pub fn into_config(self) -> Result<ValidatorConfig> {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());

        let config = ValidatorConfig {
            key: self.key,
            file: self.file,
            workers: self.threads as usize,
            debug: self.debug,
            fetch_details: !self.no_details,
            color: !self.no_color && !no_color_env,
            aws: AwsConfig {
                region: self.region,
                sts_endpoint: self.sts_endpoint,
                iam_endpoint: self.iam_endpoint,
                timeout_seconds: self.timeout,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

//! Configuration management
//!
//! Command-line flags (with environment fallbacks) are parsed into [`Cli`]
//! and resolved into a validated [`ValidatorConfig`].

pub mod cli;
pub mod models;

pub use cli::Cli;
pub use models::ValidatorConfig;

//! Error types for credcheck

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for credcheck
pub type Result<T> = std::result::Result<T, CheckError>;

/// Main error type
///
/// Only the input variants ever end a run. Everything raised by the remote
/// calls is absorbed into a credential's validity flag by the validator.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The credentials file could not be opened
    #[error("Error opening file {}: {source}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credentials file was opened but could not be read to the end
    #[error("Error reading file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written
    #[error("Failed to write report: {0}")]
    Output(#[source] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request signing errors
    #[error("Signing error: {0}")]
    Signing(String),

    /// The remote service rejected the credentials
    #[error("Authentication failed for {service}: {message}")]
    Authentication {
        service: &'static str,
        message: String,
    },

    /// The remote service throttled the request
    #[error("Request throttled by {service}: {message}")]
    Throttled {
        service: &'static str,
        message: String,
    },

    /// Any other error response from the remote service
    #[error("{service} API error {status} ({code}): {message}")]
    Api {
        service: &'static str,
        status: u16,
        code: String,
        message: String,
    },

    /// A success response whose body could not be understood
    #[error("Failed to parse {service} response: {message}")]
    ResponseParsing {
        service: &'static str,
        message: String,
    },

    /// Transport-level failures (connect, timeout, reset)
    #[error("Network error for {service}: {message}")]
    Network {
        service: &'static str,
        message: String,
    },
}

impl CheckError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn authentication(service: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            service,
            message: message.into(),
        }
    }

    pub fn throttled(service: &'static str, message: impl Into<String>) -> Self {
        Self::Throttled {
            service,
            message: message.into(),
        }
    }

    pub fn api(
        service: &'static str,
        status: u16,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Api {
            service,
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn response_parsing(service: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            service,
            message: message.into(),
        }
    }

    pub fn network(service: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            service,
            message: message.into(),
        }
    }

    /// Whether this error belongs to the fatal input class
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InputOpen { .. } | Self::InputRead { .. })
    }

    /// Short category label used in debug logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InputOpen { .. } | Self::InputRead { .. } => "input",
            Self::Config(_) => "config",
            Self::Output(_) => "output",
            Self::Network { .. } => "network",
            Self::ResponseParsing { .. } => "parsing",
            Self::Signing(_) => "signing",
            Self::Authentication { .. } => "authentication",
            Self::Throttled { .. } => "throttled",
            Self::Api { .. } => "api",
        }
    }
}

//! Resolved run configuration

use std::path::PathBuf;

use crate::core::providers::AwsConfig;
use crate::core::report::RenderOptions;
use crate::utils::error::{CheckError, Result};

/// Everything a validation run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Single `key:secret` entry
    pub key: Option<String>,
    /// Line-delimited file of entries
    pub file: Option<PathBuf>,
    pub workers: usize,
    pub debug: bool,
    /// Call IAM for extended details on live credentials
    pub fetch_details: bool,
    pub color: bool,
    pub aws: AwsConfig,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            key: None,
            file: None,
            workers: 1,
            debug: false,
            fetch_details: true,
            color: true,
            aws: AwsConfig::default(),
        }
    }
}

impl ValidatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(CheckError::config("Worker count must be at least 1"));
        }
        self.aws.validate()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            debug: self.debug,
            color: self.color,
        }
    }
}

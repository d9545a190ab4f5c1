//! AWS client configuration

use serde::{Deserialize, Serialize};

use super::region::{DEFAULT_REGION, Partition, sts_endpoint, validate_region};
use crate::utils::error::{CheckError, Result};

/// Settings for [`AwsClient`](super::AwsClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Signing region for STS
    pub region: String,
    /// Overrides the regional STS endpoint
    pub sts_endpoint: Option<String>,
    /// Overrides the partition's IAM endpoint
    pub iam_endpoint: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            sts_endpoint: None,
            iam_endpoint: None,
            timeout_seconds: 30,
        }
    }
}

impl AwsConfig {
    pub fn validate(&self) -> Result<()> {
        validate_region(&self.region)?;
        if self.timeout_seconds == 0 {
            return Err(CheckError::config("Timeout must be greater than 0"));
        }
        for endpoint in [&self.sts_endpoint, &self.iam_endpoint].into_iter().flatten() {
            validate_endpoint(endpoint)?;
        }
        Ok(())
    }

    pub fn resolved_sts_endpoint(&self) -> String {
        self.sts_endpoint
            .clone()
            .unwrap_or_else(|| sts_endpoint(&self.region))
    }

    pub fn resolved_iam_endpoint(&self) -> String {
        self.iam_endpoint
            .clone()
            .unwrap_or_else(|| Partition::of(&self.region).iam_endpoint().to_string())
    }

    pub fn iam_signing_region(&self) -> &'static str {
        Partition::of(&self.region).iam_signing_region()
    }
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = url::Url::parse(endpoint)
        .map_err(|e| CheckError::config(format!("Invalid endpoint '{}': {}", endpoint, e)))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(CheckError::config(format!(
            "Endpoint must be an http(s) URL: {}",
            endpoint
        )));
    }
    Ok(())
}

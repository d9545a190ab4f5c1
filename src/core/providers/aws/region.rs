//! AWS region handling
//!
//! Region validation and the default STS/IAM endpoints per partition.

use crate::utils::error::{CheckError, Result};

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "us-east-1";

/// AWS partitions that have distinct endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Aws,
    China,
    GovCloud,
}

impl Partition {
    pub fn of(region: &str) -> Self {
        if region.starts_with("cn-") {
            Partition::China
        } else if region.starts_with("us-gov-") {
            Partition::GovCloud
        } else {
            Partition::Aws
        }
    }

    /// Region IAM requests are signed for; IAM is global per partition
    pub fn iam_signing_region(self) -> &'static str {
        match self {
            Partition::Aws => "us-east-1",
            Partition::China => "cn-north-1",
            Partition::GovCloud => "us-gov-west-1",
        }
    }

    pub fn iam_endpoint(self) -> &'static str {
        match self {
            Partition::Aws => "https://iam.amazonaws.com/",
            Partition::China => "https://iam.cn-north-1.amazonaws.com.cn/",
            Partition::GovCloud => "https://iam.us-gov.amazonaws.com/",
        }
    }

    fn domain(self) -> &'static str {
        match self {
            Partition::China => "amazonaws.com.cn",
            Partition::Aws | Partition::GovCloud => "amazonaws.com",
        }
    }
}

/// Check that `region` looks like `us-east-1` or `us-gov-west-1`
pub fn validate_region(region: &str) -> Result<()> {
    let parts: Vec<&str> = region.split('-').collect();
    let well_formed = (3..=4).contains(&parts.len())
        && parts[..parts.len() - 1]
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_lowercase()))
        && parts
            .last()
            .is_some_and(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));

    if well_formed {
        Ok(())
    } else {
        Err(CheckError::config(format!("Invalid AWS region: {}", region)))
    }
}

/// Default STS endpoint for `region`
///
/// `us-east-1` keeps the historical global endpoint.
pub fn sts_endpoint(region: &str) -> String {
    if region == DEFAULT_REGION {
        return "https://sts.amazonaws.com/".to_string();
    }
    format!("https://sts.{}.{}/", region, Partition::of(region).domain())
}

//! AWS identity provider
//!
//! STS `GetCallerIdentity` decides whether a credential is live; IAM
//! `GetAccountAuthorizationDetails` supplies the optional details. Both are
//! signed with SigV4.

mod client;
mod config;
mod error;
mod region;
mod sigv4;
mod types;

pub use client::AwsClient;
pub use config::AwsConfig;
pub use error::AwsErrorMapper;
pub use region::{DEFAULT_REGION, Partition, sts_endpoint, validate_region};
pub use sigv4::SigV4Signer;

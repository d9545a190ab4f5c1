//! Remote identity providers

pub mod aws;

pub use aws::{AwsClient, AwsConfig};

//! Seam between the validator and the remote identity services

use async_trait::async_trait;

use crate::core::types::{AuthorizationDetails, CallerIdentity, CredentialPair};
use crate::utils::error::Result;

/// Remote identity and account-detail lookups for a credential pair
///
/// Implementations report every failure as an error; the validator decides
/// what a failure means for the credential.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// "Who am I" call: succeeds only for live credentials
    async fn caller_identity(&self, credentials: &CredentialPair) -> Result<CallerIdentity>;

    /// Extended account and authorization information
    async fn authorization_details(
        &self,
        credentials: &CredentialPair,
    ) -> Result<AuthorizationDetails>;
}

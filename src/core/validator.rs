//! Validator worker
//!
//! Turns each raw entry into a [`CredentialRecord`] by asking the identity
//! service about it. All per-credential failures end up in the record's
//! validity flag; nothing here is fatal.

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::core::traits::IdentityService;
use crate::core::types::{CredentialPair, CredentialRecord, render_details};
use crate::utils::logging::mask_access_key;

/// Validates entries against an [`IdentityService`]
#[derive(Clone)]
pub struct Validator {
    service: Arc<dyn IdentityService>,
    fetch_details: bool,
}

impl Validator {
    pub fn new(service: Arc<dyn IdentityService>) -> Self {
        Self {
            service,
            fetch_details: true,
        }
    }

    /// Skip the account-detail call when `false`
    pub fn with_details(mut self, fetch_details: bool) -> Self {
        self.fetch_details = fetch_details;
        self
    }

    /// Evaluate a single raw entry
    pub async fn validate_entry(&self, entry: &str) -> CredentialRecord {
        let Some(credentials) = CredentialPair::parse(entry) else {
            debug!("Skipping malformed entry ({} chars)", entry.chars().count());
            return CredentialRecord::invalid(entry);
        };
        let masked = mask_access_key(&credentials.access_key);

        let identity = match self.service.caller_identity(&credentials).await {
            Ok(identity) => identity,
            Err(e) => {
                debug!(key = %masked, kind = e.kind(), "Identity check failed: {}", e);
                return CredentialRecord::invalid(credentials.access_key);
            }
        };
        debug!(key = %masked, account = %identity.account, "Credential is live");

        if !self.fetch_details {
            return CredentialRecord::valid(credentials.access_key, identity.summary());
        }

        let details = match self.service.authorization_details(&credentials).await {
            Ok(details) => Some(details),
            Err(e) => {
                debug!(key = %masked, kind = e.kind(), "Detail fetch failed: {}", e);
                None
            }
        };

        CredentialRecord::valid(
            credentials.access_key,
            render_details(&identity, details.as_ref()),
        )
    }

    /// Validate a chunk in order, sending each record as soon as it exists
    pub async fn process_chunk(&self, chunk: Vec<String>, results: UnboundedSender<CredentialRecord>) {
        for entry in chunk {
            let record = self.validate_entry(&entry).await;
            if results.send(record).is_err() {
                warn!("Result channel closed; abandoning the rest of the chunk");
                return;
            }
        }
    }
}

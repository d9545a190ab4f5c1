//! Credential data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of validating one input entry
///
/// Built exactly once by a validator worker, already evaluated, and moved
/// to the aggregator by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialRecord {
    /// Access key, or the raw entry when it could not be split
    pub access_key: String,
    pub valid: bool,
    /// Present only on valid records
    pub details: Option<String>,
}

impl CredentialRecord {
    pub fn invalid(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            valid: false,
            details: None,
        }
    }

    pub fn valid(access_key: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            valid: true,
            details: Some(details.into()),
        }
    }
}

/// An access-key/secret-key pair parsed from an entry
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub access_key: String,
    pub secret_key: String,
}

impl CredentialPair {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Parse `accessKey:secretKey`
    ///
    /// Returns `None` unless the entry holds exactly one `:` with a
    /// non-empty value on each side.
    pub fn parse(entry: &str) -> Option<Self> {
        let mut parts = entry.split(':');
        let access_key = parts.next()?;
        let secret_key = parts.next()?;
        if parts.next().is_some() || access_key.is_empty() || secret_key.is_empty() {
            return None;
        }
        Some(Self::new(access_key, secret_key))
    }
}

// Keep the secret out of any `{:?}` that ends up in a log line.
impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Identity returned by the "who am I" call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallerIdentity {
    pub user_id: String,
    pub account: String,
    pub arn: String,
}

impl CallerIdentity {
    pub fn new(
        user_id: impl Into<String>,
        account: impl Into<String>,
        arn: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            account: account.into(),
            arn: arn.into(),
        }
    }

    /// Human-readable three-field summary
    pub fn summary(&self) -> String {
        format!(
            "Caller Identity: {}, Account: {}, ARN: {}",
            self.user_id, self.account, self.arn
        )
    }
}

/// Account authorization details returned by the detail call
///
/// Only the first page of the remote listing is kept; `is_truncated`
/// records whether more existed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorizationDetails {
    pub users: Vec<String>,
    pub groups: Vec<String>,
    pub roles: Vec<String>,
    pub policies: Vec<String>,
    pub is_truncated: bool,
}

impl fmt::Display for AuthorizationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IAM Details:")?;
        for (label, names) in [
            ("Users", &self.users),
            ("Groups", &self.groups),
            ("Roles", &self.roles),
            ("Policies", &self.policies),
        ] {
            write!(f, "\n  {} ({}): {}", label, names.len(), names.join(", "))?;
        }
        if self.is_truncated {
            write!(f, "\n  (truncated)")?;
        }
        Ok(())
    }
}

/// Details text for a valid credential
pub fn render_details(identity: &CallerIdentity, details: Option<&AuthorizationDetails>) -> String {
    match details {
        Some(details) => format!("{}\n{}", identity.summary(), details),
        None => identity.summary(),
    }
}

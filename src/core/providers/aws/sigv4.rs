//! AWS SigV4 Authentication
//!
//! Implementation of the AWS Signature Version 4 signing process for the
//! query-protocol services (STS, IAM).

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::core::types::CredentialPair;
use crate::utils::error::{CheckError, Result};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// SigV4 signer bound to one region and service
#[derive(Debug, Clone)]
pub struct SigV4Signer {
    region: String,
    service: &'static str,
}

impl SigV4Signer {
    pub fn new(region: impl Into<String>, service: &'static str) -> Self {
        Self {
            region: region.into(),
            service,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    /// Sign a request
    ///
    /// Returns every header that was signed (lowercase names), including
    /// `host`, `x-amz-date` and `authorization`.
    pub fn sign_request(
        &self,
        credentials: &CredentialPair,
        method: &str,
        url: &str,
        headers: &BTreeMap<String, String>,
        body: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<BTreeMap<String, String>> {
        let parsed_url =
            url::Url::parse(url).map_err(|e| CheckError::Signing(format!("Invalid URL: {}", e)))?;

        let host = parsed_url
            .host_str()
            .ok_or_else(|| CheckError::Signing("Missing host in URL".to_string()))?;
        // Url::port() is None for the scheme's default port
        let host = match parsed_url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        let path = parsed_url.path();
        let query = parsed_url.query().unwrap_or("");

        let amz_date = timestamp.format("%Y%m%dT%H%M%SZ").to_string();
        let date_stamp = timestamp.format("%Y%m%d").to_string();

        // BTreeMap keeps the canonical headers sorted
        let mut canonical_headers: BTreeMap<String, String> = headers
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.trim().to_string()))
            .collect();
        canonical_headers.insert("host".to_string(), host);
        canonical_headers.insert("x-amz-date".to_string(), amz_date.clone());

        let canonical_headers_str = canonical_headers
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join("\n");

        let signed_headers = canonical_headers
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";");

        let payload_hash = hex::encode(Sha256::digest(body.as_bytes()));
        let canonical_request = format!(
            "{}\n{}\n{}\n{}\n\n{}\n{}",
            method.to_uppercase(),
            path,
            query,
            canonical_headers_str,
            signed_headers,
            payload_hash
        );

        let credential_scope = format!(
            "{}/{}/{}/aws4_request",
            date_stamp, self.region, self.service
        );
        let canonical_request_hash = hex::encode(Sha256::digest(canonical_request.as_bytes()));

        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM, amz_date, credential_scope, canonical_request_hash
        );

        let signature =
            self.calculate_signature(&credentials.secret_key, &string_to_sign, &date_stamp)?;

        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM, credentials.access_key, credential_scope, signed_headers, signature
        );

        let mut final_headers = canonical_headers;
        final_headers.insert("authorization".to_string(), authorization);

        Ok(final_headers)
    }

    /// Derive the signing key and sign `string_to_sign`
    fn calculate_signature(
        &self,
        secret_key: &str,
        string_to_sign: &str,
        date_stamp: &str,
    ) -> Result<String> {
        let k_date = hmac_sha256(
            format!("AWS4{}", secret_key).as_bytes(),
            date_stamp.as_bytes(),
        )?;

        let k_region = hmac_sha256(&k_date, self.region.as_bytes())?;
        let k_service = hmac_sha256(&k_region, self.service.as_bytes())?;
        let k_signing = hmac_sha256(&k_service, b"aws4_request")?;

        let signature = hmac_sha256(&k_signing, string_to_sign.as_bytes())?;
        Ok(hex::encode(signature))
    }
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| CheckError::Signing(format!("HMAC key error: {}", e)))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

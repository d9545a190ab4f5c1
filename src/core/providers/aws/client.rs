//! AWS HTTP Client
//!
//! Signs query-protocol requests with SigV4 and asks for JSON responses.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use super::config::AwsConfig;
use super::error::AwsErrorMapper;
use super::sigv4::SigV4Signer;
use super::types::{GetAccountAuthorizationDetailsEnvelope, GetCallerIdentityEnvelope};
use crate::core::traits::IdentityService;
use crate::core::types::{AuthorizationDetails, CallerIdentity, CredentialPair};
use crate::utils::error::{CheckError, Result};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";
const GET_CALLER_IDENTITY: &str = "Action=GetCallerIdentity&Version=2011-06-15";
const GET_ACCOUNT_AUTHORIZATION_DETAILS: &str =
    "Action=GetAccountAuthorizationDetails&Version=2010-05-08";

/// One signed query-protocol endpoint
#[derive(Debug, Clone)]
struct ServiceEndpoint {
    url: String,
    signer: SigV4Signer,
    errors: AwsErrorMapper,
}

impl ServiceEndpoint {
    fn new(url: String, region: &str, service: &'static str) -> Self {
        Self {
            url,
            signer: SigV4Signer::new(region, service),
            errors: AwsErrorMapper::new(service),
        }
    }
}

/// STS/IAM client implementing [`IdentityService`]
#[derive(Debug, Clone)]
pub struct AwsClient {
    http: Client,
    sts: ServiceEndpoint,
    iam: ServiceEndpoint,
}

impl AwsClient {
    pub fn new(config: &AwsConfig) -> Result<Self> {
        config.validate()?;

        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds.min(10)))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| CheckError::config(format!("Failed to create HTTP client: {}", e)))?;

        let sts = ServiceEndpoint::new(config.resolved_sts_endpoint(), &config.region, "sts");
        let iam = ServiceEndpoint::new(
            config.resolved_iam_endpoint(),
            config.iam_signing_region(),
            "iam",
        );
        debug!("STS endpoint {}, IAM endpoint {}", sts.url, iam.url);

        Ok(Self { http, sts, iam })
    }

    pub fn sts_endpoint(&self) -> &str {
        &self.sts.url
    }

    pub fn iam_endpoint(&self) -> &str {
        &self.iam.url
    }

    fn signed_headers(
        &self,
        endpoint: &ServiceEndpoint,
        credentials: &CredentialPair,
        body: &str,
    ) -> Result<HeaderMap> {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), FORM_CONTENT_TYPE.to_string());
        headers.insert("accept".to_string(), "application/json".to_string());

        let signed = endpoint.signer.sign_request(
            credentials,
            "POST",
            &endpoint.url,
            &headers,
            body,
            chrono::Utc::now(),
        )?;

        let mut header_map = HeaderMap::new();
        // reqwest derives Host from the URL, matching what was signed
        for (key, value) in signed.into_iter().filter(|(k, _)| k != "host") {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| CheckError::Signing(format!("Invalid header name {}: {}", key, e)))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|e| CheckError::Signing(format!("Invalid value for {}: {}", key, e)))?;
            header_map.insert(name, value);
        }
        Ok(header_map)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &ServiceEndpoint,
        credentials: &CredentialPair,
        body: &'static str,
    ) -> Result<T> {
        let headers = self.signed_headers(endpoint, credentials, body)?;

        let response = self
            .http
            .post(&endpoint.url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| endpoint.errors.map_network_error(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| endpoint.errors.map_network_error(&e))?;

        if !status.is_success() {
            return Err(endpoint.errors.map_http_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| endpoint.errors.map_parsing_error(&e))
    }
}

#[async_trait]
impl IdentityService for AwsClient {
    async fn caller_identity(&self, credentials: &CredentialPair) -> Result<CallerIdentity> {
        let envelope: GetCallerIdentityEnvelope = self
            .call(&self.sts, credentials, GET_CALLER_IDENTITY)
            .await?;
        Ok(envelope.into())
    }

    async fn authorization_details(
        &self,
        credentials: &CredentialPair,
    ) -> Result<AuthorizationDetails> {
        let envelope: GetAccountAuthorizationDetailsEnvelope = self
            .call(&self.iam, credentials, GET_ACCOUNT_AUTHORIZATION_DETAILS)
            .await?;
        Ok(envelope.into())
    }
}

//! AWS error response mapping
//!
//! Query-protocol services answer errors with an envelope such as
//! `{"Error":{"Code":"InvalidClientTokenId","Message":"..."}}` when asked
//! for JSON, and with the XML equivalent otherwise.

use serde::Deserialize;

use crate::utils::error::CheckError;

const AUTH_CODES: &[&str] = &[
    "InvalidClientTokenId",
    "SignatureDoesNotMatch",
    "IncompleteSignature",
    "ExpiredToken",
    "AccessDenied",
    "AccessDeniedException",
    "UnrecognizedClientException",
    "NotAuthorized",
];

const THROTTLE_CODES: &[&str] = &["Throttling", "ThrottlingException", "RequestLimitExceeded"];

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "Error")]
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Message", default)]
    message: Option<String>,
}

/// Maps AWS failures to [`CheckError`]
#[derive(Debug, Clone, Copy)]
pub struct AwsErrorMapper {
    service: &'static str,
}

impl AwsErrorMapper {
    pub fn new(service: &'static str) -> Self {
        Self { service }
    }

    /// Map a non-success HTTP response
    pub fn map_http_error(&self, status: u16, body: &str) -> CheckError {
        let (code, message) = extract_error(body)
            .unwrap_or_else(|| ("Unknown".to_string(), truncate(body, 256).to_string()));

        if THROTTLE_CODES.contains(&code.as_str()) || status == 429 {
            return CheckError::throttled(self.service, format!("{}: {}", code, message));
        }
        if AUTH_CODES.contains(&code.as_str()) || status == 401 || status == 403 {
            return CheckError::authentication(self.service, format!("{}: {}", code, message));
        }
        CheckError::api(self.service, status, code, message)
    }

    /// Map a transport failure
    pub fn map_network_error(&self, error: &reqwest::Error) -> CheckError {
        if error.is_timeout() {
            CheckError::network(self.service, format!("Request timed out: {}", error))
        } else {
            CheckError::network(self.service, error.to_string())
        }
    }

    pub fn map_parsing_error(&self, error: &dyn std::error::Error) -> CheckError {
        CheckError::response_parsing(self.service, error.to_string())
    }
}

fn extract_error(body: &str) -> Option<(String, String)> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return Some((
            envelope.error.code,
            envelope.error.message.unwrap_or_default(),
        ));
    }

    let code = xml_element(body, "Code")?;
    let message = xml_element(body, "Message").unwrap_or_default();
    Some((code, message))
}

fn xml_element(body: &str, name: &str) -> Option<String> {
    let open = format!("<{}>", name);
    let close = format!("</{}>", name);
    let start = body.find(&open)? + open.len();
    let end = start + body[start..].find(&close)?;
    Some(body[start..end].trim().to_string())
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

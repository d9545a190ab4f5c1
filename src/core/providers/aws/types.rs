//! Wire types for the STS and IAM JSON responses

use serde::Deserialize;

use crate::core::types::{AuthorizationDetails, CallerIdentity};

#[derive(Debug, Deserialize)]
pub struct GetCallerIdentityEnvelope {
    #[serde(rename = "GetCallerIdentityResponse")]
    pub response: GetCallerIdentityResponse,
}

#[derive(Debug, Deserialize)]
pub struct GetCallerIdentityResponse {
    #[serde(rename = "GetCallerIdentityResult")]
    pub result: CallerIdentity,
}

impl From<GetCallerIdentityEnvelope> for CallerIdentity {
    fn from(envelope: GetCallerIdentityEnvelope) -> Self {
        envelope.response.result
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAccountAuthorizationDetailsEnvelope {
    #[serde(rename = "GetAccountAuthorizationDetailsResponse")]
    pub response: GetAccountAuthorizationDetailsResponse,
}

#[derive(Debug, Deserialize)]
pub struct GetAccountAuthorizationDetailsResponse {
    #[serde(rename = "GetAccountAuthorizationDetailsResult")]
    pub result: AuthorizationDetailsResult,
}

// IAM sends `null` rather than `[]` for empty lists
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizationDetailsResult {
    #[serde(default)]
    pub user_detail_list: Option<Vec<UserDetail>>,
    #[serde(default)]
    pub group_detail_list: Option<Vec<GroupDetail>>,
    #[serde(default)]
    pub role_detail_list: Option<Vec<RoleDetail>>,
    #[serde(default)]
    pub policies: Option<Vec<ManagedPolicyDetail>>,
    #[serde(default)]
    pub is_truncated: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDetail {
    pub user_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupDetail {
    pub group_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoleDetail {
    pub role_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagedPolicyDetail {
    pub policy_name: String,
}

fn names<T>(list: Option<Vec<T>>, name: impl Fn(T) -> String) -> Vec<String> {
    list.unwrap_or_default().into_iter().map(name).collect()
}

impl From<GetAccountAuthorizationDetailsEnvelope> for AuthorizationDetails {
    fn from(envelope: GetAccountAuthorizationDetailsEnvelope) -> Self {
        let result = envelope.response.result;
        AuthorizationDetails {
            users: names(result.user_detail_list, |u| u.user_name),
            groups: names(result.group_detail_list, |g| g.group_name),
            roles: names(result.role_detail_list, |r| r.role_name),
            policies: names(result.policies, |p| p.policy_name),
            is_truncated: result.is_truncated.unwrap_or(false),
        }
    }
}

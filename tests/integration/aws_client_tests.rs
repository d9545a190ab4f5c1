//! Signed STS/IAM client against a fake endpoint

#[cfg(test)]
mod tests {
    use crate::common::FakeAws;
    use crate::common::aws::error_body;
    use crate::{assert_err, assert_ok};
    use credcheck::core::CredentialPair;
    use credcheck::core::providers::AwsClient;
    use credcheck::{CheckError, IdentityService};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, ResponseTemplate};

    fn pair(access_key: &str) -> CredentialPair {
        CredentialPair::new(access_key, "secret1")
    }

    #[tokio::test]
    async fn test_caller_identity_success() {
        let aws = FakeAws::start().await;
        aws.caller_identity("AKIA1", "u1", "111", "arn:aws:iam::111:user/u1")
            .await;
        let client = assert_ok!(AwsClient::new(&aws.aws_config()));

        let identity = assert_ok!(client.caller_identity(&pair("AKIA1")).await);
        assert_eq!(identity.user_id, "u1");
        assert_eq!(identity.account, "111");
        assert_eq!(identity.arn, "arn:aws:iam::111:user/u1");
    }

    #[tokio::test]
    async fn test_rejected_credentials_are_authentication_errors() {
        let aws = FakeAws::start().await;
        aws.reject_unknown_identities().await;
        let client = assert_ok!(AwsClient::new(&aws.aws_config()));

        let err = assert_err!(client.caller_identity(&pair("AKIABAD")).await);
        match err {
            CheckError::Authentication { service, message } => {
                assert_eq!(service, "sts");
                assert!(message.contains("InvalidClientTokenId"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_throttling_is_reported() {
        let aws = FakeAws::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(error_body("Throttling", "Rate exceeded")),
            )
            .mount(&aws.server)
            .await;
        let client = assert_ok!(AwsClient::new(&aws.aws_config()));

        let err = assert_err!(client.caller_identity(&pair("AKIA1")).await);
        assert!(matches!(err, CheckError::Throttled { service: "sts", .. }));
    }

    #[tokio::test]
    async fn test_garbled_success_body_is_parsing_error() {
        let aws = FakeAws::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>captive portal</html>"))
            .mount(&aws.server)
            .await;
        let client = assert_ok!(AwsClient::new(&aws.aws_config()));

        let err = assert_err!(client.caller_identity(&pair("AKIA1")).await);
        assert!(matches!(err, CheckError::ResponseParsing { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let aws = FakeAws::start().await;
        let mut config = aws.aws_config();
        // Port 9 (discard) is not listening in test environments
        config.sts_endpoint = Some("http://127.0.0.1:9/".to_string());
        let client = assert_ok!(AwsClient::new(&config));

        let err = assert_err!(client.caller_identity(&pair("AKIA1")).await);
        assert!(matches!(err, CheckError::Network { service: "sts", .. }));
    }

    #[tokio::test]
    async fn test_authorization_details_success() {
        let aws = FakeAws::start().await;
        aws.authorization_details(json!({
            "UserDetailList": [{"UserName": "u1"}, {"UserName": "ci-bot"}],
            "GroupDetailList": [{"GroupName": "admins"}],
            "RoleDetailList": null,
            "Policies": [{"PolicyName": "AdministratorAccess"}],
            "IsTruncated": false
        }))
        .await;
        let client = assert_ok!(AwsClient::new(&aws.aws_config()));

        let details = assert_ok!(client.authorization_details(&pair("AKIA1")).await);
        assert_eq!(details.users, vec!["u1", "ci-bot"]);
        assert_eq!(details.groups, vec!["admins"]);
        assert!(details.roles.is_empty());
        assert_eq!(details.policies, vec!["AdministratorAccess"]);
        assert!(!details.is_truncated);
    }

    #[tokio::test]
    async fn test_authorization_details_denied() {
        let aws = FakeAws::start().await;
        aws.deny_authorization_details().await;
        let client = assert_ok!(AwsClient::new(&aws.aws_config()));

        let err = assert_err!(client.authorization_details(&pair("AKIA1")).await);
        assert!(matches!(err, CheckError::Authentication { service: "iam", .. }));
    }

    #[tokio::test]
    async fn test_requests_are_signed_form_posts() {
        let aws = FakeAws::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("Version=2011-06-15"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                crate::common::aws::caller_identity_body("u1", "111", "arn"),
            ))
            .expect(1)
            .mount(&aws.server)
            .await;
        let client = assert_ok!(AwsClient::new(&aws.aws_config()));
        assert_ok!(client.caller_identity(&pair("AKIA1")).await);

        let requests = aws.server.received_requests().await.unwrap();
        let request = &requests[0];
        let authorization = request.headers["authorization"].to_str().unwrap();
        assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIA1/"));
        assert!(authorization.contains("/us-east-1/sts/aws4_request"));
        assert!(!authorization.contains("secret1"));
        assert_eq!(
            request.headers["content-type"].to_str().unwrap(),
            "application/x-www-form-urlencoded; charset=utf-8"
        );
        assert_eq!(
            String::from_utf8_lossy(&request.body),
            "Action=GetCallerIdentity&Version=2011-06-15"
        );
    }
}

//! The `credcheck` binary: output and exit status

#[cfg(test)]
mod tests {
    use crate::common::{FakeAws, credentials_file};
    use std::process::Output;
    use tokio::process::Command;

    const ENV_OVERRIDES: &[&str] = &[
        "CREDCHECK_THREADS",
        "CREDCHECK_REGION",
        "CREDCHECK_STS_ENDPOINT",
        "CREDCHECK_IAM_ENDPOINT",
        "CREDCHECK_TIMEOUT",
        "CREDCHECK_LOG",
        "RUST_LOG",
        "NO_COLOR",
    ];

    async fn credcheck(args: &[&str]) -> Output {
        // Run from an empty directory so no stray .env is picked up
        let workdir = tempfile::tempdir().unwrap();
        let mut command = Command::new(env!("CARGO_BIN_EXE_credcheck"));
        command.args(args).current_dir(workdir.path());
        for var in ENV_OVERRIDES {
            command.env_remove(var);
        }
        command.output().await.expect("failed to run credcheck")
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    #[tokio::test]
    async fn test_missing_file_exits_non_zero() {
        let output = credcheck(&["-f", "/definitely/not/here/creds.txt", "-d"]).await;

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Error"));
        assert!(stderr.contains("/definitely/not/here/creds.txt"));
        assert!(output.stdout.is_empty());
    }

    #[tokio::test]
    async fn test_no_input_is_an_empty_successful_run() {
        let output = credcheck(&["--no-color"]).await;

        assert!(output.status.success());
        assert_eq!(stdout(&output), "Number of valid credentials: 0\n");
    }

    #[tokio::test]
    async fn test_default_output_is_colored() {
        let output = credcheck(&["-d"]).await;

        assert!(output.status.success());
        assert_eq!(
            stdout(&output),
            "\x1b[32mNumber of valid credentials:\x1b[0m 0\n\
             \x1b[31mNumber of invalid credentials:\x1b[0m 0\n"
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_malformed_entries_make_no_requests() {
        let aws = FakeAws::start().await;
        aws.expect_no_requests().await;
        let file = credentials_file(&["bad-entry", "also:bad:entry", ":nokey"]);
        let url = aws.url();

        let output = credcheck(&[
            "-f",
            file.path().to_str().unwrap(),
            "-d",
            "-t",
            "3",
            "--no-color",
            "--sts-endpoint",
            &url,
            "--iam-endpoint",
            &url,
        ])
        .await;

        assert!(output.status.success());
        let text = stdout(&output);
        assert!(text.contains("Invalid: bad-entry\n"));
        assert!(text.contains("Invalid: also:bad:entry\n"));
        assert!(text.contains("Invalid: :nokey\n"));
        assert!(text.ends_with("Number of valid credentials: 0\nNumber of invalid credentials: 3\n"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_live_credential_without_details() {
        let aws = FakeAws::start().await;
        aws.caller_identity("AKIA1", "u1", "111", "arn:aws:iam::111:user/u1")
            .await;
        aws.deny_authorization_details().await;
        let url = aws.url();

        let output = credcheck(&[
            "-k",
            "AKIA1:secret1",
            "-d",
            "--no-color",
            "--sts-endpoint",
            &url,
            "--iam-endpoint",
            &url,
        ])
        .await;

        assert!(output.status.success());
        assert_eq!(
            stdout(&output),
            "Valid: AKIA1\n\
             Details:\n\
             Caller Identity: u1, Account: 111, ARN: arn:aws:iam::111:user/u1\n\
             \n\
             Number of valid credentials: 1\n\
             Number of invalid credentials: 0\n"
        );
    }

    #[tokio::test]
    async fn test_invalid_credentials_still_exit_zero() {
        let aws = FakeAws::start().await;
        aws.reject_unknown_identities().await;
        let url = aws.url();

        let output = credcheck(&[
            "-k",
            "AKIANOPE:secret",
            "--no-color",
            "--sts-endpoint",
            &url,
        ])
        .await;

        assert!(output.status.success());
        assert_eq!(stdout(&output), "Number of valid credentials: 0\n");
    }

    #[tokio::test]
    async fn test_zero_threads_is_a_usage_error() {
        let output = credcheck(&["-t", "0"]).await;
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
    }
}

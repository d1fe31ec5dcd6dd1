#[cfg(test)]
mod tests {
    use super::super::*;

    #[tokio::test]
    async fn test_production_runner_success() {
        let runner = runner::TokioProcessRunner;
        let command = ProcessCommandBuilder::new("echo")
            .arg("hello world")
            .build();

        let output = runner.run(command).await.unwrap();
        assert!(output.status.success());
        assert_eq!(output.stdout.trim(), "hello world");
        assert!(output.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_production_runner_captures_stderr() {
        let runner = runner::TokioProcessRunner;
        let command = ProcessCommandBuilder::new("sh")
            .args(["-c", "echo oops >&2"])
            .build();

        let output = runner.run(command).await.unwrap();
        assert!(output.status.success());
        assert_eq!(output.stderr.trim(), "oops");
    }

    #[tokio::test]
    async fn test_production_runner_failure() {
        let runner = runner::TokioProcessRunner;
        let command = ProcessCommandBuilder::new("false").build();

        let output = runner.run(command).await.unwrap();
        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(1));
    }

    #[tokio::test]
    async fn test_production_runner_command_not_found() {
        let runner = runner::TokioProcessRunner;
        let command = ProcessCommandBuilder::new("nonexistent-command-12345").build();

        let result = runner.run(command).await;
        assert!(matches!(
            result.unwrap_err(),
            ProcessError::CommandNotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_mock_runner_basic() {
        let mut mock = MockProcessRunner::new();

        mock.expect_command("zowe")
            .with_args(|args| args == &["ops", "show", "resource", "CICSA"])
            .returns_stdout("current: UP\n")
            .returns_success()
            .finish();

        let output = mock
            .run(
                ProcessCommandBuilder::new("zowe")
                    .args(["ops", "show", "resource", "CICSA"])
                    .build(),
            )
            .await
            .unwrap();

        assert!(output.status.success());
        assert_eq!(output.stdout, "current: UP\n");
        assert!(mock.verify_called("zowe", 1));
    }

    #[tokio::test]
    async fn test_mock_runner_replays_sequence() {
        let mut mock = MockProcessRunner::new();

        for state in ["DOWN", "STARTING", "UP"] {
            mock.expect_command("zowe")
                .returns_stdout(&format!("current: {state}"))
                .times(1)
                .finish();
        }

        let mut seen = Vec::new();
        for _ in 0..3 {
            let output = mock
                .run(ProcessCommandBuilder::new("zowe").build())
                .await
                .unwrap();
            seen.push(output.stdout);
        }
        assert_eq!(seen, ["current: DOWN", "current: STARTING", "current: UP"]);

        // Every scripted response is used up
        let result = mock.run(ProcessCommandBuilder::new("zowe").build()).await;
        assert!(matches!(
            result.unwrap_err(),
            ProcessError::MockExpectationNotMet(_)
        ));
    }

    #[tokio::test]
    async fn test_mock_runner_spawn_failure() {
        let mut mock = MockProcessRunner::new();
        mock.expect_command("zowe").fails_to_spawn().finish();

        let result = mock.run(ProcessCommandBuilder::new("zowe").build()).await;
        assert!(matches!(
            result.unwrap_err(),
            ProcessError::CommandNotFound(program) if program == "zowe"
        ));
    }

    #[tokio::test]
    async fn test_subprocess_manager() {
        let (manager, mut mock) = SubprocessManager::mock();

        mock.expect_command("ls")
            .returns_stdout("file1.txt\nfile2.txt\n")
            .returns_success()
            .finish();

        let output = manager
            .runner()
            .run(ProcessCommandBuilder::new("ls").build())
            .await
            .unwrap();

        assert!(output.status.success());
        assert_eq!(output.stdout, "file1.txt\nfile2.txt\n");
        assert_eq!(mock.command_lines(), ["ls"]);
    }

    #[test]
    fn test_process_command_builder() {
        let command = ProcessCommandBuilder::new("zowe")
            .arg("jobs")
            .args(["submit", "data-set"])
            .build();

        assert_eq!(command.program, "zowe");
        assert_eq!(command.args, vec!["jobs", "submit", "data-set"]);
    }
}

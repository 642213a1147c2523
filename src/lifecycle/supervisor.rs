//! Top-level supervision of the bootstrap task.
//!
//! The bootstrap runs on its own task so that both returned errors and
//! panics end up here. Failures are printed to the error stream and map to
//! exit code 1. Nothing is retried.

use std::future::Future;
use std::io::{self, Write};

use crate::lifecycle::startup::StartupError;
use crate::lifecycle::BootState;

/// Run `task` to completion, reporting failures on stderr.
pub async fn supervise<F>(task: F) -> BootState
where
    F: Future<Output = Result<(), StartupError>> + Send + 'static,
{
    supervise_with(task, io::stderr()).await
}

/// Run `task` to completion, reporting failures on `err`.
pub async fn supervise_with<F, E>(task: F, mut err: E) -> BootState
where
    F: Future<Output = Result<(), StartupError>> + Send + 'static,
    E: Write,
{
    let result = match tokio::spawn(task).await {
        Ok(result) => result,
        Err(join_err) => Err(StartupError::Task(join_err.to_string())),
    };

    match result {
        Ok(()) => BootState::Ready,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            let _ = writeln!(err, "Failed to start: {}", e);
            let _ = err.flush();
            BootState::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::ConfigError;
    use std::process::ExitCode;

    #[tokio::test]
    async fn test_success_is_ready() {
        let mut err = Vec::new();
        let state = supervise_with(async { Ok(()) }, &mut err).await;
        assert_eq!(state, BootState::Ready);
        assert_eq!(state.exit_code(), 0);
        assert!(err.is_empty());
    }

    #[tokio::test]
    async fn test_error_is_reported_and_fails() {
        let mut err = Vec::new();
        let state = supervise_with(
            async {
                Err(StartupError::Config(ConfigError::Validation(Vec::new())))
            },
            &mut err,
        )
        .await;
        assert_eq!(state, BootState::Failed);
        assert_eq!(state.exit_code(), 1);

        let text = String::from_utf8(err).unwrap();
        assert!(text.starts_with("Failed to start: Validation failed"));
        assert!(text.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_panic_is_a_failure() {
        let mut err = Vec::new();
        let state = supervise_with(
            async {
                if true {
                    panic!("database unreachable");
                }
                Ok(())
            },
            &mut err,
        )
        .await;
        assert_eq!(state, BootState::Failed);
        let text = String::from_utf8(err).unwrap();
        assert!(text.contains("bootstrap task aborted"));
        assert!(text.contains("panicked"));
    }

    #[test]
    fn test_exit_code_conversion() {
        assert_eq!(
            format!("{:?}", ExitCode::from(BootState::Failed)),
            format!("{:?}", ExitCode::from(1))
        );
        assert_eq!(
            format!("{:?}", ExitCode::from(BootState::Ready)),
            format!("{:?}", ExitCode::SUCCESS)
        );
    }
}

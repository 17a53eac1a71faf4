//! Error types for aicommit modules using thiserror.

use thiserror::Error;

/// Errors from git command invocations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found on PATH. Install git and try again.")]
    NotInstalled,

    #[error("Not a git repository. Run aicommit from within a git repository.")]
    NotARepository(#[source] git2::Error),

    #[error("Repository at {0} is bare and has no working tree")]
    BareRepository(String),

    #[error("Failed to spawn git process")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {operation} exited with code {code}: {stderr}")]
    CommandFailed {
        operation: String,
        code: i32,
        stderr: String,
    },
}

/// Errors from the model service.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Failed to call model service")]
    Transport(#[source] reqwest::Error),

    #[error("Model service returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Model service returned an unexpected response: {0}")]
    InvalidResponse(String),
}

/// Errors that abort a commit-message pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Model chose unrecognized category '{tag}' (expected one of: {known})")]
    UnrecognizedCategory { tag: String, known: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_errors_do_not_repeat_cause() {
        let err = GitError::SpawnFailed(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file or directory",
        ));
        assert_eq!(err.to_string(), "Failed to spawn git process");

        let report = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(report.matches("no such file or directory").count(), 1);
    }

    #[test]
    fn test_not_a_repository_reports_cause_once() {
        let dir = tempfile::tempdir().unwrap();
        let source = git2::Repository::open(dir.path()).err().unwrap();
        let cause = source.message().to_string();

        let report = format!("{:#}", anyhow::Error::from(GitError::NotARepository(source)));
        assert_eq!(report.matches(cause.as_str()).count(), 1);
        assert!(report.starts_with("Not a git repository."));
    }
}

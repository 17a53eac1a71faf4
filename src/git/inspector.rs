//! Repository state queries and commit creation.
//!
//! Every operation maps to exactly one git invocation. A non-zero exit is
//! turned into [`GitError::CommandFailed`] so callers can abort the run with `?`.

use crate::error::GitError;

use super::runner::CommandRunner;

/// Stages, inspects and commits changes through a [`CommandRunner`].
pub struct RepositoryInspector<R> {
    runner: R,
}

impl<R: CommandRunner> RepositoryInspector<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// `git add .`
    pub async fn stage_all(&self) -> Result<String, GitError> {
        self.run_checked(&["add", "."], "add").await
    }

    /// `git status --short`
    pub async fn status(&self) -> Result<String, GitError> {
        self.run_checked(&["status", "--short"], "status").await
    }

    /// `git diff --staged`
    pub async fn staged_diff(&self) -> Result<String, GitError> {
        self.run_checked(&["diff", "--staged"], "diff --staged").await
    }

    /// `git diff HEAD~1 HEAD`, the change introduced by the latest commit.
    pub async fn last_commit_diff(&self) -> Result<String, GitError> {
        self.run_checked(&["diff", "HEAD~1", "HEAD"], "diff HEAD~1 HEAD")
            .await
    }

    /// `git commit [--amend] -m <message>`
    pub async fn commit(&self, message: &str, amend: bool) -> Result<String, GitError> {
        let mut args = vec!["commit"];
        if amend {
            args.push("--amend");
        }
        args.extend(["-m", message]);

        let operation = if amend { "commit --amend" } else { "commit" };
        self.run_checked(&args, operation).await
    }

    async fn run_checked(&self, args: &[&str], operation: &str) -> Result<String, GitError> {
        let result = self.runner.run(args).await?;

        if !result.success() {
            return Err(GitError::CommandFailed {
                operation: operation.to_string(),
                code: result.code,
                stderr: result.stderr.trim().to_string(),
            });
        }

        Ok(result.stdout)
    }
}

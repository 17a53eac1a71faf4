//! Spawning `git` and capturing its output.
//!
//! Commands inherit the user's git config, hooks and credential setup, since
//! they run through the real binary rather than a library.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use git2::Repository;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// Exit code and captured output of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Process exit code, or -1 when the process was killed by a signal.
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Trait for executing git commands.
///
/// This abstraction allows scripting git responses in tests.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `git <args>` and return its exit code and output.
    ///
    /// Only a failure to start the process is an `Err`; a non-zero exit is
    /// reported through [`CommandResult::code`].
    async fn run(&self, args: &[&str]) -> Result<CommandResult, GitError>;
}

/// Runner that calls the real `git` binary inside a working directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

#[async_trait]
impl CommandRunner for SystemGit {
    async fn run(&self, args: &[&str]) -> Result<CommandResult, GitError> {
        debug!("Running git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(GitError::SpawnFailed)?;

        Ok(CommandResult {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Check that a `git` executable is available on PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git")
        .map(|_| ())
        .map_err(|_| GitError::NotInstalled)
}

/// Find the working tree of the repository containing `path`.
pub fn discover_workdir(path: impl AsRef<Path>) -> Result<PathBuf, GitError> {
    let path = path.as_ref();
    let repo = Repository::discover(path).map_err(GitError::NotARepository)?;
    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or_else(|| GitError::BareRepository(repo.path().display().to_string()))
}

//! Git operations via the system `git` binary.

pub mod inspector;
pub mod runner;

pub use inspector::RepositoryInspector;
pub use runner::{CommandResult, CommandRunner, SystemGit, check_git_installed, discover_workdir};

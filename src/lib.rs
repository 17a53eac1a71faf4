//! aicommit - A CLI tool that writes git commit messages using a local LLM.
//!
//! # Overview
//!
//! aicommit reads the pending changes of a git repository, asks an Ollama
//! model to describe them, classifies the description into a commit category,
//! condenses it into a one-line summary and commits with
//! `<category>: <summary>`.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod logging;

// Re-export commonly used types
pub use commit::{CategoryTable, ChangeContext, Outcome, Pipeline, RunOptions};
pub use config::Config;
pub use error::{GitError, LlmError, PipelineError};
pub use git::{RepositoryInspector, SystemGit};
pub use llm::{ChatModel, OllamaClient};
pub use logging::Verbosity;

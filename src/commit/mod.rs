//! AI-generated commit messages from pending repository changes.

pub mod category;
pub mod context;
pub mod message;
pub mod pipeline;
pub mod prompt;

pub use category::{Category, CategoryTable, Classification};
pub use context::ChangeContext;
pub use message::compose_commit_message;
pub use pipeline::{Outcome, Pipeline, RunOptions};
pub use prompt::{classify_prompt, regenerate_prompt, summary_prompt};

//! Summarize, classify and regenerate: the commit message pipeline.
//!
//! A run is strictly sequential. Repository state is read first, then three
//! model exchanges turn it into a message, and finally one commit is made.
//! Any git or model failure aborts the run before the commit step.

use tracing::{debug, info};

use crate::commit::category::{CategoryTable, Classification};
use crate::commit::context::ChangeContext;
use crate::commit::message::compose_commit_message;
use crate::commit::prompt::{classify_prompt, regenerate_prompt, summary_prompt};
use crate::error::PipelineError;
use crate::git::{CommandRunner, RepositoryInspector};
use crate::llm::{ChatModel, strip_leading_marker};

/// Options for a single run, derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Seed message prepended to the generated one.
    pub message: Option<String>,
    /// Run `git add .` before inspecting the repository.
    pub stage_all: bool,
    /// Amend the latest commit instead of creating a new one.
    pub amend: bool,
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The working tree had no changes and no amend was requested.
    NothingToCommit,
    Committed { message: String },
}

pub struct Pipeline<R, M> {
    inspector: RepositoryInspector<R>,
    model: M,
    categories: CategoryTable,
}

impl<R: CommandRunner, M: ChatModel> Pipeline<R, M> {
    pub fn new(inspector: RepositoryInspector<R>, model: M, categories: CategoryTable) -> Self {
        Self {
            inspector,
            model,
            categories,
        }
    }

    pub fn inspector(&self) -> &RepositoryInspector<R> {
        &self.inspector
    }

    /// Run the full flow and commit the generated message.
    pub async fn run(&self, options: &RunOptions) -> Result<Outcome, PipelineError> {
        let Some(context) = self.gather_context(options).await? else {
            info!("No files to commit, exiting");
            return Ok(Outcome::NothingToCommit);
        };

        let message = self.generate_message(&context).await?;
        info!("Commit message: {message}");

        info!("Committing...");
        self.inspector.commit(&message, options.amend).await?;

        Ok(Outcome::Committed { message })
    }

    /// Read repository state into a [`ChangeContext`].
    ///
    /// Returns `Ok(None)` when the status listing is empty and the run is not
    /// amending.
    pub async fn gather_context(
        &self,
        options: &RunOptions,
    ) -> Result<Option<ChangeContext>, PipelineError> {
        let user_message = options.message.clone().filter(|m| !m.is_empty());
        if let Some(ref m) = user_message {
            debug!("User message: {m}");
        }

        if options.stage_all {
            info!("Staging all changes...");
            self.inspector.stage_all().await?;
        }

        let status = self.inspector.status().await?;
        if status.trim().is_empty() && !options.amend {
            return Ok(None);
        }
        info!("Files to commit:\n{}", status.trim_end());

        let staged_diff = self.inspector.staged_diff().await?;
        debug!("Staged diff:\n{staged_diff}");

        let last_commit_diff = if options.amend {
            info!("Amending: reading the last commit's diff...");
            let diff = self.inspector.last_commit_diff().await?;
            debug!("Last commit diff:\n{diff}");
            Some(diff)
        } else {
            None
        };

        Ok(Some(ChangeContext {
            user_message,
            status,
            staged_diff,
            last_commit_diff,
        }))
    }

    /// Produce the final commit message for `context` via three model exchanges.
    pub async fn generate_message(&self, context: &ChangeContext) -> Result<String, PipelineError> {
        info!("Generating change summary...");
        let summary = self
            .model
            .exchange(&summary_prompt(), &context.render())
            .await?;
        info!("Summary: {}", summary.trim());

        info!("Classifying change...");
        let reply = self
            .model
            .exchange(&classify_prompt(&self.categories), &summary)
            .await?;
        let classification = Classification::from_reply(&reply);
        debug!("Classification reasoning: {}", classification.reasoning);

        let category = self
            .categories
            .resolve(&classification.tag)
            .ok_or_else(|| PipelineError::UnrecognizedCategory {
                tag: classification.tag.clone(),
                known: self.categories.tags().join(", "),
            })?;
        info!("Selected category: {}", category.tag);

        let regenerated = self
            .model
            .exchange(&regenerate_prompt(&category.description), &summary)
            .await?;
        let short_summary = strip_leading_marker(&regenerated);

        Ok(compose_commit_message(
            context.user_message.as_deref(),
            &category.tag,
            &short_summary,
        ))
    }
}

//! Repository state gathered for the summary stage.

/// Everything the summary prompt gets to see about the pending change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeContext {
    pub user_message: Option<String>,
    /// `git status --short` output.
    pub status: String,
    /// `git diff --staged` output.
    pub staged_diff: String,
    /// `git diff HEAD~1 HEAD` output, only collected when amending.
    pub last_commit_diff: Option<String>,
}

impl ChangeContext {
    /// Render as the user content of the summary exchange.
    pub fn render(&self) -> String {
        let mut out = format!(
            "User message:\n{}\nFiles:\n{}\nDiff:\n{}",
            self.user_message.as_deref().unwrap_or(""),
            self.status.trim_end(),
            self.staged_diff.trim_end(),
        );

        if let Some(last) = &self.last_commit_diff {
            out.push('\n');
            out.push_str(last.trim_end());
        }

        out.push('\n');
        out
    }
}

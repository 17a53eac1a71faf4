//! Commit categories and classification replies.

use crate::llm::extract_tag;

/// A commit category tag with its human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Lowercase tag used as the commit message prefix (e.g. `feature`).
    pub tag: String,
    /// Description shown to the model and used as the regeneration hint.
    pub description: String,
}

/// Ordered, closed set of categories the classifier may choose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// Build a table from `(tag, description)` pairs. Tags are stored
    /// trimmed and lowercased; order is preserved.
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let categories = entries
            .into_iter()
            .map(|(tag, description)| Category {
                tag: normalize_tag(tag),
                description: description.to_string(),
            })
            .collect();
        Self { categories }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn tags(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.tag.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a tag as the model wrote it (surrounding whitespace and case
    /// are ignored).
    pub fn resolve(&self, raw_tag: &str) -> Option<&Category> {
        let tag = normalize_tag(raw_tag);
        self.categories.iter().find(|c| c.tag == tag)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new([
            ("feature", "功能修改"),
            ("fix", "bug修复"),
            ("optimize", "性能优化"),
            ("doc", "文档修改或新增"),
            ("log", "添加日志"),
            ("comment", "添加注释"),
        ])
    }
}

/// Parsed reply of the classification stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Model's explanation, informational only.
    pub reasoning: String,
    /// Normalized tag; empty when the reply had no `<type>` block.
    pub tag: String,
}

impl Classification {
    pub fn from_reply(reply: &str) -> Self {
        Self {
            reasoning: extract_tag(reply, "reasoning").trim().to_string(),
            tag: normalize_tag(&extract_tag(reply, "type")),
        }
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

//! Final commit message assembly.

/// Compose `<tag>: <summary>`, preceded by the user's own message on its
/// own line when one was given.
///
/// Produces:
/// ```text
/// WIP
/// feature: 添加了登录功能
/// ```
pub fn compose_commit_message(user_message: Option<&str>, tag: &str, summary: &str) -> String {
    let generated = format!("{tag}: {summary}");

    let message = match user_message {
        Some(m) if !m.is_empty() => format!("{m}\n{generated}"),
        _ => generated,
    };

    message.trim().to_string()
}

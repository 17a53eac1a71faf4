//! Text extraction helpers for free-form model replies.
//!
//! Models are asked to wrap structured parts of a reply in XML-like tags
//! (`<type>feature</type>`). Nothing here validates a schema: a missing tag is
//! an empty string, and callers decide what an empty value means.

const FENCE: &str = "```";

/// Return the content of the first `<tag>...</tag>` pair in `text`.
///
/// The match is non-greedy and may span lines. Returns an empty string when
/// the tag is absent or unclosed.
pub fn extract_tag(text: &str, tag: &str) -> String {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let Some(start) = text.find(&open) else {
        return String::new();
    };
    let rest = &text[start + open.len()..];

    rest.find(&close)
        .map(|end| rest[..end].to_string())
        .unwrap_or_default()
}

/// Remove a leading run of `-` and space characters, then trim.
///
/// Models often answer with a markdown list item (`- add login`).
pub fn strip_leading_marker(text: &str) -> String {
    text.trim_start_matches(['-', ' ']).trim().to_string()
}

/// Remove every triple-backtick fence from a reply.
///
/// A line holding nothing but a fence is dropped together with its line
/// break; fences sharing a line with other text are cut out in place.
pub fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if line.trim() == FENCE {
            continue;
        }
        out.push_str(&line.replace(FENCE, ""));
    }
    out
}

//! Markdown fragments and whitespace cleanup for rendered documents.

use crate::text::{has_visible_value, normalize_text};
use regex::Regex;
use std::sync::LazyLock;

static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid blank line regex"));

/// `## header` followed by the normalized body, or `""` when the body is
/// blank or the "not provided" sentinel.
pub fn optional_section(header: &str, body: &str) -> String {
    let normalized = normalize_text(body, "");
    if !has_visible_value(&normalized) {
        return String::new();
    }
    format!("## {}\n\n{}", header, normalized)
}

/// Trim, collapse runs of 3+ newlines to one blank line, end with one newline.
pub fn normalize_markdown_spacing(content: &str) -> String {
    let collapsed = EXCESS_BLANK_LINES.replace_all(content.trim(), "\n\n");
    format!("{}\n", collapsed)
}

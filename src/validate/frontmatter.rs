//! Minimal frontmatter reader.

use crate::error::{Result, SubmitError};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static FRONTMATTER_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\n(.*?)\n---\n").expect("Invalid frontmatter regex"));

/// Raw frontmatter values keyed by name. Values keep their quotes.
pub type Frontmatter = BTreeMap<String, String>;

/// Extract the `---`-delimited block at the very start of `content`.
///
/// Each line is split at its first colon into a trimmed key and value;
/// lines without a colon are ignored.
pub fn parse_frontmatter(content: &str) -> Result<Frontmatter> {
    let block = FRONTMATTER_BLOCK
        .captures(content)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| {
            SubmitError::Validation("Document does not include valid YAML frontmatter.".to_string())
        })?;

    let mut data = Frontmatter::new();
    for line in block.as_str().lines() {
        if let Some((key, value)) = line.split_once(':') {
            data.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(data)
}

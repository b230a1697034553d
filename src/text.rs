//! Text normalization helpers shared by the renderer and the artifact writer.
//!
//! Everything here is pure: no I/O, no clock reads.

use regex::Regex;
use sha1::{Digest, Sha1};
use std::sync::LazyLock;

/// Sentinel rendered in place of a blank field ("not provided").
pub const NOT_PROVIDED: &str = "미기재";

static WHITESPACE_OR_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("static regex"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w-]+").expect("static regex"));
static REPEATED_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("static regex"));
static HTTP_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("static regex"));

/// Derive a path-safe identifier from a display name.
///
/// Lowercases, turns whitespace, underscores and any other non-word runs into
/// single hyphens, and trims edge hyphens. Word characters are Unicode-aware,
/// so Hangul names keep their letters. When nothing survives, the slug is
/// `item-` followed by the first 8 hex digits of the SHA-1 of the trimmed input.
pub fn slugify(text: &str) -> String {
    let source = text.trim();
    let lowered = source.to_lowercase();
    let value = WHITESPACE_OR_UNDERSCORE.replace_all(&lowered, "-");
    let value = NON_WORD.replace_all(&value, "-");
    let value = REPEATED_HYPHENS.replace_all(&value, "-");
    let value = value.trim_matches(|c| c == '-' || c == '_');

    if value.is_empty() {
        let digest = Sha1::digest(source.as_bytes());
        let hex = format!("{:x}", digest);
        return format!("item-{}", &hex[..8]);
    }
    value.to_string()
}

/// Turn literal `\n` sequences into line breaks and trim; blank becomes `default`.
pub fn normalize_text(value: &str, default: &str) -> String {
    let trimmed = value.replace("\\n", "\n");
    let trimmed = trimmed.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalize with the [`NOT_PROVIDED`] sentinel as the default.
pub fn normalize_or_sentinel(value: &str) -> String {
    normalize_text(value, NOT_PROVIDED)
}

/// True when the normalized value is non-empty and not the sentinel.
pub fn has_visible_value(value: &str) -> bool {
    let candidate = value.replace("\\n", "\n");
    let candidate = candidate.trim();
    !candidate.is_empty() && candidate != NOT_PROVIDED
}

/// Collapse to one line and escape for a double-quoted frontmatter scalar.
pub fn sanitize_frontmatter_value(value: &str) -> String {
    let one_line = value
        .replace("\r\n", "\n")
        .split(is_line_break)
        .collect::<Vec<_>>()
        .join(" ");
    one_line
        .trim()
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Whether the value starts with `http://` or `https://` (any case).
pub fn is_http_url(value: &str) -> bool {
    HTTP_SCHEME.is_match(value.trim())
}

/// The trimmed URL, or `None` when blank or not http(s).
pub fn as_optional_url(value: &str) -> Option<String> {
    let candidate = value.trim();
    if candidate.is_empty() || !is_http_url(candidate) {
        return None;
    }
    Some(candidate.to_string())
}

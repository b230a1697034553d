//! Navigation metadata (`meta.json`) maintenance.
//!
//! Each file is a JSON object with a `title` and an ordered `pages` list.
//! Updates append the page once, keep an existing title, and leave any
//! other keys untouched and in their original order.

use crate::error::{Result, SubmitError};
use crate::fs::atomic_write_file;
use serde_json::{Map, Value};
use std::path::Path;

/// Title of `contents/docs/meta.json` when it has none.
pub const DOCS_META_TITLE: &str = "해카톤 문서";

/// Title of `contents/docs/vibe-coding/meta.json` when it has none.
pub const SECTION_META_TITLE: &str = "바이브 코딩 결과";

fn load_object(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        SubmitError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(SubmitError::UserError(format!(
            "Invalid JSON object at {}",
            path.display()
        ))),
        Err(e) => Err(SubmitError::UserError(format!(
            "failed to parse '{}': {}",
            path.display(),
            e
        ))),
    }
}

/// Whether a JSON value counts as unset.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Make sure `page` is listed in the meta file at `path`.
///
/// Creates the file when absent. Returns whether the page was newly added.
pub fn ensure_meta_page(path: &Path, title: &str, page: &str) -> Result<bool> {
    let mut payload = load_object(path)?;

    if payload.get("title").is_none_or(is_blank) {
        payload.insert("title".to_string(), Value::String(title.to_string()));
    }

    let mut pages: Vec<Value> = match payload.get_mut("pages").map(Value::take) {
        Some(Value::Array(items)) => items.into_iter().filter(Value::is_string).collect(),
        _ => Vec::new(),
    };
    let added = !pages.iter().any(|p| p.as_str() == Some(page));
    if added {
        pages.push(Value::String(page.to_string()));
    }
    payload.insert("pages".to_string(), Value::Array(pages));

    let mut json = serde_json::to_string_pretty(&payload).map_err(|e| {
        SubmitError::UserError(format!("failed to serialize '{}': {}", path.display(), e))
    })?;
    json.push('\n');
    atomic_write_file(path, &json)?;

    Ok(added)
}

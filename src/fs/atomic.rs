//! Atomic file replacement.
//!
//! Content goes to a temporary sibling of the target, is synced, then
//! renamed over the target. A reader never observes a half-written
//! document, card, or `meta.json`. Sibling placement keeps the rename on
//! one filesystem.

use crate::error::{Result, SubmitError};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Atomically replace `path` with `content`, creating parent directories.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| {
            SubmitError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SubmitError::UserError(format!("invalid file path '{}'", path.display())))?;

    let mut temp = tempfile::Builder::new()
        .prefix(&format!(".{}.", file_name))
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| {
            SubmitError::UserError(format!(
                "failed to create temporary file in '{}': {}",
                parent.display(),
                e
            ))
        })?;

    temp.write_all(content)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| {
            SubmitError::UserError(format!(
                "failed to write temporary file for '{}': {}",
                path.display(),
                e
            ))
        })?;

    temp.persist(path).map_err(|e| {
        SubmitError::UserError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e.error
        ))
    })?;

    Ok(())
}

/// String form of [`atomic_write`].
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

//! Git command runner for subpr.
//!
//! Thin wrappers over `git` invoked through [`crate::process`]. All git
//! operations should go through this module.

use crate::error::Result;
use crate::process::{self, CommandOutput};
use std::path::Path;

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(CommandOutput)` - On successful execution (exit code 0)
/// * `Err(SubmitError::ExternalCommand)` - On non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<CommandOutput> {
    process::run("git", Some(cwd.as_ref()), args)
}

/// Run git without a working directory (used for `clone`).
pub fn run_git_detached(args: &[&str]) -> Result<CommandOutput> {
    process::run("git", None, args)
}

/// Read a config value; unset or unreadable keys come back as `None`.
pub fn config_get<P: AsRef<Path>>(cwd: P, key: &str) -> Result<Option<String>> {
    let output = process::run_unchecked("git", Some(cwd.as_ref()), &["config", "--get", key])?;
    if output.success() && !output.stdout.is_empty() {
        Ok(Some(output.stdout))
    } else {
        Ok(None)
    }
}

/// Current HEAD commit SHA.
pub fn head_sha<P: AsRef<Path>>(cwd: P) -> Result<String> {
    Ok(run_git(cwd, &["rev-parse", "HEAD"])?.stdout)
}

/// Whether the index differs from HEAD.
pub fn has_staged_changes<P: AsRef<Path>>(cwd: P) -> Result<bool> {
    let output = run_git(cwd, &["diff", "--cached", "--name-only"])?;
    Ok(!output.is_empty())
}

/// Number of paths git reports as changed, counting each untracked file.
pub fn changed_file_count<P: AsRef<Path>>(cwd: P) -> Result<usize> {
    let output = run_git(cwd, &["status", "--porcelain", "--untracked-files=all"])?;
    Ok(output.lines().len())
}

//! Per-invocation orchestration state.

use super::FallbackSummary;
use crate::config::SubmissionConfig;
use crate::error::{Result, SubmitError};
use crate::git;
use std::fmt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Progress of one publish run, in the order stages are reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Unauthenticated,
    Authenticated,
    Forked,
    Branched,
    Rendered,
    Committed,
    Pushed,
    PrOpen,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Unauthenticated => "unauthenticated",
            Stage::Authenticated => "authenticated",
            Stage::Forked => "forked",
            Stage::Branched => "branched",
            Stage::Rendered => "rendered",
            Stage::Committed => "committed",
            Stage::Pushed => "pushed",
            Stage::PrOpen => "pr-open",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a run has learned so far, plus the temporary working tree it
/// owns.
///
/// The working tree is removed by [`OrchestrationState::finish`], or by drop
/// if a run unwinds, unless retention was requested.
#[derive(Debug)]
pub struct OrchestrationState {
    temp_dir: TempDir,
    keep_temp: bool,
    stage: Stage,
    pub login: Option<String>,
    pub fork: Option<String>,
    pub branch: Option<String>,
    pub checkout: Option<PathBuf>,
    pub commit_sha: Option<String>,
    pub pr_url: Option<String>,
}

impl OrchestrationState {
    pub fn new(temp_prefix: &str, keep_temp: bool) -> Result<Self> {
        let temp_dir = tempfile::Builder::new()
            .prefix(temp_prefix)
            .tempdir()
            .map_err(|e| {
                SubmitError::UserError(format!("failed to create temporary directory: {}", e))
            })?;
        tracing::debug!(path = %temp_dir.path().display(), "created working directory");

        Ok(Self {
            temp_dir,
            keep_temp,
            stage: Stage::Unauthenticated,
            login: None,
            fork: None,
            branch: None,
            checkout: None,
            commit_sha: None,
            pr_url: None,
        })
    }

    pub fn work_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn advance(&mut self, next: Stage) {
        debug_assert!(next > self.stage, "{} -> {}", self.stage, next);
        tracing::info!(from = %self.stage, to = %next, "stage");
        self.stage = next;
    }

    /// Fill in `commit_sha` from the checkout's HEAD when this run recorded
    /// no commit of its own. Failures are logged and ignored.
    pub fn resolve_head_sha(&mut self) {
        if self.commit_sha.is_some() {
            return;
        }
        let Some(checkout) = self.checkout.as_deref() else {
            return;
        };
        match git::head_sha(checkout) {
            Ok(sha) if !sha.is_empty() => self.commit_sha = Some(sha),
            Ok(_) => {}
            Err(e) => tracing::debug!(error = %e, "no HEAD in checkout"),
        }
    }

    /// Recovery details, once both the login and the branch are known.
    pub fn fallback(&self, config: &SubmissionConfig) -> Option<FallbackSummary> {
        let login = self.login.as_deref()?;
        let branch = self.branch.as_deref()?;
        Some(FallbackSummary {
            branch: branch.to_string(),
            commit_sha: self.commit_sha.clone(),
            compare_url: config.compare_url(login, branch),
        })
    }

    /// Remove the working directory, or keep it and report where it is.
    pub fn finish(self) -> Option<PathBuf> {
        if self.keep_temp {
            let kept = self.temp_dir.keep();
            println!("[INFO] Temporary directory kept: {}", kept.display());
            return Some(kept);
        }

        let path = self.temp_dir.path().to_path_buf();
        if let Err(e) = self.temp_dir.close() {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove working directory");
        }
        None
    }
}

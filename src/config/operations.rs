//! Config loading, validation, and URL helpers.

use super::model::SubmissionConfig;
use crate::error::{Result, SubmitError};
use crate::text::is_http_url;
use chrono::{FixedOffset, Offset, Utc};
use std::path::Path;

impl SubmissionConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(SubmissionConfig)` - Successfully loaded and validated config
    /// * `Err(SubmitError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SubmitError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SubmissionConfig = serde_yaml::from_str(yaml)
            .map_err(|e| SubmitError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the base branch (the `--base-branch` override).
    pub fn with_base_branch(mut self, base_branch: Option<&str>) -> Result<Self> {
        if let Some(branch) = base_branch {
            self.base_branch = branch.trim().to_string();
            self.validate()?;
        }
        Ok(self)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `upstream_repo` is `owner/name` with both parts non-empty
    /// - `base_branch` is non-empty
    /// - `web_base_url` is an http(s) URL
    /// - `git_base_url` is non-empty
    /// - `utc_offset_hours` is within ±23
    pub fn validate(&self) -> Result<()> {
        let parts: Vec<&str> = self.upstream_repo.split('/').collect();
        if parts.len() != 2 || parts.iter().any(|p| p.trim().is_empty()) {
            return Err(SubmitError::UserError(format!(
                "config validation failed: upstream_repo must look like 'owner/name' (found '{}')",
                self.upstream_repo
            )));
        }

        if self.base_branch.trim().is_empty() {
            return Err(SubmitError::UserError(
                "config validation failed: base_branch must not be empty".to_string(),
            ));
        }

        if !is_http_url(&self.web_base_url) {
            return Err(SubmitError::UserError(format!(
                "config validation failed: web_base_url must be an http(s) URL (found '{}')",
                self.web_base_url
            )));
        }

        if self.git_base_url.trim().is_empty() {
            return Err(SubmitError::UserError(
                "config validation failed: git_base_url must not be empty".to_string(),
            ));
        }

        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(SubmitError::UserError(format!(
                "config validation failed: utc_offset_hours must be between -23 and 23 (found {})",
                self.utc_offset_hours
            )));
        }

        Ok(())
    }

    /// Repository name without the owner.
    pub fn upstream_name(&self) -> &str {
        self.upstream_repo
            .rsplit('/')
            .next()
            .unwrap_or(&self.upstream_repo)
    }

    /// `login/<upstream name>`.
    pub fn fork_repo(&self, login: &str) -> String {
        format!("{}/{}", login, self.upstream_name())
    }

    /// Clone URL for `owner/name`.
    pub fn clone_url(&self, repo: &str) -> String {
        format!("{}/{}.git", self.git_base_url.trim_end_matches('/'), repo)
    }

    /// Browser URL for `owner/name`.
    pub fn web_url(&self, repo: &str) -> String {
        format!("{}/{}", self.web_base_url.trim_end_matches('/'), repo)
    }

    /// Compare page a human can use to open the pull request by hand.
    pub fn compare_url(&self, login: &str, branch: &str) -> String {
        format!(
            "{}/compare/{}...{}:{}?expand=1",
            self.web_url(&self.upstream_repo),
            self.base_branch,
            login,
            branch
        )
    }

    /// Fixed offset for default submission timestamps.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .unwrap_or_else(|| Utc.fix())
    }
}

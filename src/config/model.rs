//! SubmissionConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a submission run.
///
/// Everything defaults to the production hackathon repository; a YAML file
/// can retarget it (for rehearsals against a private mirror, or tests).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// `owner/name` of the repository pull requests are opened against.
    #[serde(default = "default_upstream_repo")]
    pub upstream_repo: String,

    /// Base branch of the upstream repository.
    #[serde(default = "default_base_branch")]
    pub base_branch: String,

    /// Prefix for clone URLs: `<git_base_url>/<owner>/<repo>.git`.
    #[serde(default = "default_host_url")]
    pub git_base_url: String,

    /// Prefix for browser links (fork page, compare URL).
    #[serde(default = "default_host_url")]
    pub web_base_url: String,

    /// Document template on disk; the embedded template is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,

    /// Offset applied to the default `submittedAt` timestamp.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,

    /// Prefix of the temporary working directory.
    #[serde(default = "default_temp_prefix")]
    pub temp_prefix: String,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            upstream_repo: default_upstream_repo(),
            base_branch: default_base_branch(),
            git_base_url: default_host_url(),
            web_base_url: default_host_url(),
            template_path: None,
            utc_offset_hours: default_utc_offset_hours(),
            temp_prefix: default_temp_prefix(),
        }
    }
}

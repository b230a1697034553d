//! Default values and fixed names used by [`super::SubmissionConfig`].

/// Upstream repository every submission targets.
pub const DEFAULT_UPSTREAM_REPO: &str = "okky-lab/vibe-coding-hackathon";

/// Branch pull requests are opened against.
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Host used for clone URLs and for browser links.
pub const DEFAULT_HOST_URL: &str = "https://github.com";

/// File name of the embedded document template.
pub const TEMPLATE_FILENAME: &str = "vibecoding-result.mdx";

/// Prefix for the per-invocation temporary directory.
pub const DEFAULT_TEMP_PREFIX: &str = "hackathon-submission-";

/// Submission timestamps default to KST.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

pub fn default_upstream_repo() -> String {
    DEFAULT_UPSTREAM_REPO.to_string()
}

pub fn default_base_branch() -> String {
    DEFAULT_BASE_BRANCH.to_string()
}

pub fn default_host_url() -> String {
    DEFAULT_HOST_URL.to_string()
}

pub fn default_temp_prefix() -> String {
    DEFAULT_TEMP_PREFIX.to_string()
}

pub fn default_utc_offset_hours() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}

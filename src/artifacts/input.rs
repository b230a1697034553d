//! Submission fields as supplied by the operator.

use crate::error::{Result, SubmitError};
use crate::text::is_http_url;
use chrono::{DateTime, FixedOffset, Utc};

/// Whether AI tools were used to build the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiUsage {
    #[default]
    Used,
    NotUsed,
}

impl AiUsage {
    /// Label rendered into the document.
    pub fn label(self) -> &'static str {
        match self {
            AiUsage::Used => "사용함",
            AiUsage::NotUsed => "사용하지 않음",
        }
    }
}

/// Flat record of every field a submission can carry.
///
/// Narrative fields are stored raw; normalization happens at render time so
/// the same input renders identically into the document and the team card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    pub team_name: String,
    pub project_name: String,
    pub repo_url: String,
    pub demo_url_or_run_method: String,
    pub problem_definition: String,
    pub one_liner: String,
    pub team_roles: String,
    pub solution: String,
    pub tech_stack: String,
    pub run_verify: String,
    pub demo_summary: String,
    pub license_sources: String,
    pub ai_used: AiUsage,
    pub ai_validation_notes: String,
    pub presentation_url: String,
    pub extra_links: String,
    pub project_url: String,
    pub team_role_label: String,
    pub team_bio: String,
    pub team_image_url: String,
    pub submitted_at: String,
    pub team_order: Option<i64>,
}

impl SubmissionInput {
    /// Check the fields that identity and paths depend on.
    ///
    /// Team and project names feed the slugs and must not be blank; the
    /// repository URL is the one URL that is required rather than dropped.
    pub fn validate(&self) -> Result<()> {
        if self.team_name.trim().is_empty() {
            return Err(SubmitError::Validation(
                "--team-name must not be empty.".to_string(),
            ));
        }
        if self.project_name.trim().is_empty() {
            return Err(SubmitError::Validation(
                "--project-name must not be empty.".to_string(),
            ));
        }
        if !is_http_url(&self.repo_url) {
            return Err(SubmitError::Validation(
                "--repo-url must be a valid http(s) URL.".to_string(),
            ));
        }
        Ok(())
    }

    /// The supplied timestamp, or `now` in `offset` at second precision.
    pub fn submitted_at_or(&self, now: DateTime<Utc>, offset: FixedOffset) -> String {
        let candidate = self.submitted_at.trim();
        if !candidate.is_empty() {
            return candidate.to_string();
        }
        now.with_timezone(&offset)
            .format("%Y-%m-%dT%H:%M:%S%:z")
            .to_string()
    }
}

//! Error types for the subpr CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::publish::FallbackSummary;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for subpr operations.
///
/// Every variant is fatal: nothing is retried, and re-running the tool is the
/// recovery path.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Mutually exclusive execution modes were requested together.
    #[error("{0}")]
    UsageConflict(String),

    /// Rendered document, template, or input failed a contract check.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Target artifact already exists and `--update` was not given.
    #[error("{what} already exists at {}. Re-run with --update to overwrite.", path.display())]
    ConflictExists { what: &'static str, path: PathBuf },

    /// `git` or `gh` exited non-zero (or could not be spawned).
    #[error("Command failed ({code}): {command}\n{stderr}")]
    ExternalCommand {
        command: String,
        code: i32,
        stderr: String,
    },

    /// No local commit identity; authorship is never guessed.
    #[error(
        "Git user identity is missing. Set user.name and user.email before running this tool:\n\
         git config --global user.name \"Your Name\"\n\
         git config --global user.email \"you@example.com\""
    )]
    IdentityMissing,

    /// Nothing was staged after rendering.
    #[error("No staged changes were found. Nothing to commit.")]
    EmptyCommit,

    /// Filesystem, configuration, or other environment problem.
    #[error("{0}")]
    UserError(String),
}

impl SubmitError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SubmitError::UsageConflict(_)
            | SubmitError::Validation(_)
            | SubmitError::ConflictExists { .. }
            | SubmitError::ExternalCommand { .. }
            | SubmitError::IdentityMissing
            | SubmitError::EmptyCommit
            | SubmitError::UserError(_) => exit_codes::FAILURE,
        }
    }

    /// Whether a recovery summary should accompany this error.
    ///
    /// Usage conflicts are raised before anything runs, so there is nothing
    /// to recover.
    pub fn wants_fallback(&self) -> bool {
        !matches!(self, SubmitError::UsageConflict(_))
    }
}

/// Result type alias for subpr operations.
pub type Result<T> = std::result::Result<T, SubmitError>;

/// A failed invocation as seen by `main`: the error plus whatever recovery
/// details the orchestrator had collected when it stopped.
#[derive(Debug)]
pub struct Failure {
    pub error: SubmitError,
    pub fallback: Option<FallbackSummary>,
}

impl Failure {
    pub fn new(error: SubmitError, fallback: Option<FallbackSummary>) -> Self {
        Self { error, fallback }
    }

    /// The fallback to print, if the error kind calls for one.
    pub fn recovery(&self) -> Option<&FallbackSummary> {
        if self.error.wants_fallback() {
            self.fallback.as_ref()
        } else {
            None
        }
    }
}

impl From<SubmitError> for Failure {
    fn from(error: SubmitError) -> Self {
        Self {
            error,
            fallback: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_kind_exits_with_failure() {
        let errors = [
            SubmitError::UsageConflict("both".to_string()),
            SubmitError::Validation("bad".to_string()),
            SubmitError::ConflictExists {
                what: "Document",
                path: PathBuf::from("a.mdx"),
            },
            SubmitError::ExternalCommand {
                command: "git push".to_string(),
                code: 128,
                stderr: "denied".to_string(),
            },
            SubmitError::IdentityMissing,
            SubmitError::EmptyCommit,
            SubmitError::UserError("io".to_string()),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), exit_codes::FAILURE, "{err}");
        }
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SubmitError::Validation("Missing required section: ## 한 줄 소개".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: Missing required section: ## 한 줄 소개"
        );

        let err = SubmitError::ConflictExists {
            what: "Team submission card",
            path: PathBuf::from("contents/team/submission-a-b.mdx"),
        };
        assert_eq!(
            err.to_string(),
            "Team submission card already exists at contents/team/submission-a-b.mdx. \
             Re-run with --update to overwrite."
        );

        let err = SubmitError::ExternalCommand {
            command: "gh auth status".to_string(),
            code: 1,
            stderr: "not logged in".to_string(),
        };
        assert_eq!(err.to_string(), "Command failed (1): gh auth status\nnot logged in");
    }

    #[test]
    fn usage_conflict_never_requests_fallback() {
        let fallback = FallbackSummary {
            branch: "submission/a-b".to_string(),
            commit_sha: None,
            compare_url: "https://example.com/compare".to_string(),
        };
        let failure = Failure::new(
            SubmitError::UsageConflict("both".to_string()),
            Some(fallback.clone()),
        );
        assert!(failure.recovery().is_none());

        let failure = Failure::new(SubmitError::EmptyCommit, Some(fallback));
        assert!(failure.recovery().is_some());
    }

    #[test]
    fn failure_from_error_has_no_fallback() {
        let failure: Failure = SubmitError::IdentityMissing.into();
        assert!(failure.fallback.is_none());
    }
}

//! CLI argument parsing for subpr.
//!
//! One flat argument set, parsed with clap derive. Submission fields are
//! grouped in [`SubmissionArgs`] and converted into a
//! [`SubmissionInput`]; run options stay here and are folded into an
//! execution mode by the `commands` module.

use crate::artifacts::team_card::DEFAULT_ROLE_LABEL;
use crate::artifacts::{AiUsage, SubmissionInput};
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Render a hackathon submission document and team card, then publish them
/// through a fork-based pull request.
#[derive(Parser, Debug)]
#[command(name = "subpr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub submission: SubmissionArgs,

    /// Base branch of the upstream repository [default: main].
    #[arg(long)]
    pub base_branch: Option<String>,

    /// Overwrite an existing document and team card.
    #[arg(long)]
    pub update: bool,

    /// Keep the temporary working directory after the run.
    #[arg(long)]
    pub keep_temp: bool,

    /// Check auth, fork, clone, and render without commit, push, or PR.
    #[arg(long = "github-dry-run", visible_alias = "dry-run")]
    pub github_dry_run: bool,

    /// Render into this local directory and skip every git and GitHub step.
    #[arg(long, value_name = "DIR")]
    pub render_only_dir: Option<PathBuf>,

    /// YAML config file (upstream repository, URLs, template override).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log external commands and stage transitions to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Whether AI tools were used, as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiUsedArg {
    #[default]
    #[value(name = "used", alias = "사용함")]
    Used,
    #[value(name = "not-used", alias = "사용하지 않음")]
    NotUsed,
}

impl From<AiUsedArg> for AiUsage {
    fn from(value: AiUsedArg) -> Self {
        match value {
            AiUsedArg::Used => AiUsage::Used,
            AiUsedArg::NotUsed => AiUsage::NotUsed,
        }
    }
}

/// Fields rendered into the document and the team card.
///
/// Multi-line values may use a literal `\n`.
#[derive(Args, Debug, Clone)]
pub struct SubmissionArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub team_name: String,

    #[arg(long, allow_hyphen_values = true)]
    pub project_name: String,

    /// Public http(s) URL of the project repository.
    #[arg(long, allow_hyphen_values = true)]
    pub repo_url: String,

    /// Demo URL, or how to run the project.
    #[arg(long, allow_hyphen_values = true)]
    pub demo_url_or_run_method: String,

    #[arg(long, allow_hyphen_values = true)]
    pub problem_definition: String,

    #[arg(long, allow_hyphen_values = true)]
    pub one_liner: String,

    /// Members and roles, e.g. "- Alex: backend\n- Sam: frontend".
    #[arg(long, allow_hyphen_values = true)]
    pub team_roles: String,

    #[arg(long, allow_hyphen_values = true)]
    pub solution: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub tech_stack: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub run_verify: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub demo_summary: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub license_sources: Option<String>,

    #[arg(long, value_enum, default_value_t = AiUsedArg::Used)]
    pub ai_used: AiUsedArg,

    /// How AI-generated output was checked.
    #[arg(long, allow_hyphen_values = true)]
    pub ai_validation_notes: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub presentation_url: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub extra_links: Option<String>,

    /// Project URL for the team card (falls back to the demo URL).
    #[arg(long, allow_hyphen_values = true)]
    pub project_url: Option<String>,

    #[arg(long, default_value = DEFAULT_ROLE_LABEL, allow_hyphen_values = true)]
    pub team_role_label: String,

    /// Team bio for the card (falls back to the one-liner).
    #[arg(long, allow_hyphen_values = true)]
    pub team_bio: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub team_image_url: Option<String>,

    /// Submission timestamp [default: now, UTC+9, ISO 8601].
    #[arg(long, allow_hyphen_values = true)]
    pub submitted_at: Option<String>,

    /// Display order on the team page.
    #[arg(long, allow_hyphen_values = true)]
    pub team_order: Option<i64>,
}

impl From<SubmissionArgs> for SubmissionInput {
    fn from(args: SubmissionArgs) -> Self {
        SubmissionInput {
            team_name: args.team_name,
            project_name: args.project_name,
            repo_url: args.repo_url,
            demo_url_or_run_method: args.demo_url_or_run_method,
            problem_definition: args.problem_definition,
            one_liner: args.one_liner,
            team_roles: args.team_roles,
            solution: args.solution.unwrap_or_default(),
            tech_stack: args.tech_stack.unwrap_or_default(),
            run_verify: args.run_verify.unwrap_or_default(),
            demo_summary: args.demo_summary.unwrap_or_default(),
            license_sources: args.license_sources.unwrap_or_default(),
            ai_used: args.ai_used.into(),
            ai_validation_notes: args.ai_validation_notes.unwrap_or_default(),
            presentation_url: args.presentation_url.unwrap_or_default(),
            extra_links: args.extra_links.unwrap_or_default(),
            project_url: args.project_url.unwrap_or_default(),
            team_role_label: args.team_role_label,
            team_bio: args.team_bio.unwrap_or_default(),
            team_image_url: args.team_image_url.unwrap_or_default(),
            submitted_at: args.submitted_at.unwrap_or_default(),
            team_order: args.team_order,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! Command implementation for subpr.
//!
//! Resolves configuration and the execution mode, then hands the submission
//! to the publisher and prints its report.

use crate::artifacts::{ArtifactPaths, SubmissionInput};
use crate::cli::Cli;
use crate::config::SubmissionConfig;
use crate::error::{Failure, Result};
use crate::publish::{
    self, DryRunReport, ExecutionMode, GhCli, PublishReport, SubmissionRequest,
};
use std::path::Path;

/// Run one invocation.
///
/// The mode is resolved before any file or external command is touched.
pub fn dispatch(cli: Cli) -> std::result::Result<(), Failure> {
    let mode = ExecutionMode::from_flags(cli.render_only_dir, cli.github_dry_run)?;
    let config = load_config(cli.config.as_deref(), cli.base_branch.as_deref())?;
    let input = SubmissionInput::from(cli.submission);

    let request = SubmissionRequest {
        input: &input,
        config: &config,
        update: cli.update,
        keep_temp: cli.keep_temp,
    };
    tracing::debug!(?mode, upstream = %config.upstream_repo, "dispatching");

    match mode {
        ExecutionMode::RenderOnly(dir) => {
            let paths = publish::render_only(&dir, &request)?;
            print_render_only(&paths);
        }
        ExecutionMode::DryRun => {
            let report = publish::run_dry_run(&GhCli, &request)?;
            print_dry_run(&report);
        }
        ExecutionMode::Full => {
            let report = publish::run_full(&GhCli, &request)?;
            print_published(&report);
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>, base_branch: Option<&str>) -> Result<SubmissionConfig> {
    let config = match path {
        Some(path) => SubmissionConfig::load(path)?,
        None => SubmissionConfig::default(),
    };
    config.with_base_branch(base_branch)
}

fn print_render_only(paths: &ArtifactPaths) {
    println!("[OK] Render-only mode completed.");
    println!("[OK] Document path: {}", paths.document.display());
    println!("[OK] Team card path: {}", paths.team_card.display());
}

fn print_dry_run(report: &DryRunReport) {
    println!("[OK] GitHub dry-run completed.");
    println!("[OK] No commit/push/PR was created.");
    println!("[OK] Authenticated as: {}", report.login);
    println!("[OK] Fork repository: {}", report.fork_url);
    println!("[OK] Planned branch: {}", report.branch);
    println!(
        "[OK] Rendered document path (temp clone): {}",
        report.document.display()
    );
    println!(
        "[OK] Rendered team card path (temp clone): {}",
        report.team_card.display()
    );
    println!("[OK] Changed files in dry-run: {}", report.changed_files);
    println!("[OK] Manual compare URL preview: {}", report.compare_url);
}

fn print_published(report: &PublishReport) {
    if report.pr_reused {
        println!("[OK] Submission document generated; existing PR reused.");
    } else {
        println!("[OK] Submission document generated and PR created.");
    }
    println!("[OK] Document path: {}", report.document.display());
    println!("[OK] Team card path: {}", report.team_card.display());
    println!("[OK] Commit SHA: {}", report.commit_sha);
    println!("[OK] Branch: {}", report.branch);
    println!("[OK] PR URL: {}", report.pr_url);
}

//! Publishing a submission through a fork-based pull request.
//!
//! A run walks the stages of [`Stage`] in order: authenticate, make sure the
//! fork exists, clone it onto a fresh branch from the upstream base, render
//! the artifacts into the checkout, then commit, push, and open (or reuse) a
//! pull request. Dry runs stop after rendering; render-only runs skip the
//! hosting side entirely.
//!
//! Input and template problems are caught by a preflight render before the
//! first hosting call. A failure after that point carries a
//! [`FallbackSummary`] so the operator can finish by hand.

pub mod branch;
mod checkout;
pub mod hosting;
mod state;


pub use hosting::{GhCli, Hosting, PullRequestSpec};
pub use state::{OrchestrationState, Stage};

use crate::artifacts::{
    ArtifactPaths, Slugs, SubmissionInput, create_submission_artifacts, document, team_card,
};
use crate::config::SubmissionConfig;
use crate::error::{Failure, Result, SubmitError};
use crate::git::changed_file_count;
use crate::template::load_template;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// How far a run goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Fork, branch, render, commit, push, pull request.
    Full,
    /// Everything up to rendering in a temporary clone; no commit, push, or PR.
    DryRun,
    /// Render into a local directory; no git or hosting calls.
    RenderOnly(PathBuf),
}

impl ExecutionMode {
    /// Fold the mode flags into one mode. Both at once is a usage conflict.
    pub fn from_flags(render_only_dir: Option<PathBuf>, dry_run: bool) -> Result<Self> {
        match (render_only_dir, dry_run) {
            (Some(_), true) => Err(SubmitError::UsageConflict(
                "--render-only-dir and --github-dry-run cannot be used together.".to_string(),
            )),
            (Some(dir), false) => Ok(ExecutionMode::RenderOnly(dir)),
            (None, true) => Ok(ExecutionMode::DryRun),
            (None, false) => Ok(ExecutionMode::Full),
        }
    }
}

/// What a human needs to open the pull request manually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackSummary {
    pub branch: String,
    pub commit_sha: Option<String>,
    pub compare_url: String,
}

impl FallbackSummary {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            "[FALLBACK] Automatic pull request creation did not finish. Use the details below."
                .to_string(),
        ];
        if let Some(sha) = &self.commit_sha {
            lines.push(format!("[FALLBACK] Commit SHA: {}", sha));
        }
        lines.push(format!("[FALLBACK] Branch: {}", self.branch));
        lines.push(format!("[FALLBACK] Manual PR URL: {}", self.compare_url));
        lines
    }

    pub fn print(&self) {
        for line in self.lines() {
            eprintln!("{}", line);
        }
    }
}

/// One submission to publish.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionRequest<'a> {
    pub input: &'a SubmissionInput,
    pub config: &'a SubmissionConfig,
    pub update: bool,
    pub keep_temp: bool,
}

/// Outcome of a full run.
#[derive(Debug, Clone)]
pub struct PublishReport {
    pub document: PathBuf,
    pub team_card: PathBuf,
    pub commit_sha: String,
    pub branch: String,
    pub pr_url: String,
    pub pr_reused: bool,
}

/// Outcome of a dry run.
#[derive(Debug, Clone)]
pub struct DryRunReport {
    pub login: String,
    pub fork_url: String,
    pub branch: String,
    pub document: PathBuf,
    pub team_card: PathBuf,
    pub changed_files: usize,
    pub compare_url: String,
}

/// Render everything in memory so bad input or a broken template fails
/// before any external call.
fn preflight(request: &SubmissionRequest<'_>) -> Result<()> {
    request.input.validate()?;
    let template = load_template(request.config)?;
    document::render_document(&template, request.input)?;
    team_card::render_team_card(request.input, &request.input.submitted_at)?;
    Ok(())
}

fn authenticate(hosting: &dyn Hosting, state: &mut OrchestrationState) -> Result<String> {
    hosting.check_cli_and_auth()?;
    let login = hosting.current_login()?;
    if login.trim().is_empty() {
        return Err(SubmitError::UserError(
            "Could not determine the authenticated account login.".to_string(),
        ));
    }
    state.login = Some(login.clone());
    state.advance(Stage::Authenticated);
    Ok(login)
}

/// Resolve `login/<upstream name>`, forking when allowed and missing.
fn ensure_fork(
    hosting: &dyn Hosting,
    config: &SubmissionConfig,
    login: &str,
    create_if_missing: bool,
    state: &mut OrchestrationState,
) -> Result<String> {
    let fork = config.fork_repo(login);
    if !hosting.repo_exists(&fork)? {
        if !create_if_missing {
            return Err(SubmitError::UserError(format!(
                "Fork repository does not exist: {}. Create it first with: gh repo fork {} --clone=false --remote=false",
                fork, config.upstream_repo
            )));
        }
        tracing::info!(upstream = %config.upstream_repo, "creating fork");
        hosting.fork_repo(&config.upstream_repo)?;
    }
    state.fork = Some(fork.clone());
    state.advance(Stage::Forked);
    Ok(fork)
}

fn checkout_branch(
    config: &SubmissionConfig,
    input: &SubmissionInput,
    fork: &str,
    state: &mut OrchestrationState,
) -> Result<(PathBuf, String)> {
    let branch = branch::create_branch_name(&Slugs::from_input(input), Utc::now());
    state.branch = Some(branch.clone());

    let repo = checkout::prepare_checkout(config, state.work_dir(), fork, &branch)?;
    state.checkout = Some(repo.clone());
    state.advance(Stage::Branched);
    Ok((repo, branch))
}

fn pull_request_spec(config: &SubmissionConfig, input: &SubmissionInput, head: String) -> PullRequestSpec {
    let team = input.team_name.trim();
    let project = input.project_name.trim();
    let body = [
        format!("Team: {}", team),
        format!("Project: {}", project),
        String::new(),
        "Why:".to_string(),
        "- 해카톤 제출 결과 문서를 공개 저장소에 등록합니다.".to_string(),
        String::new(),
        "What:".to_string(),
        "- 제출 문서, 팀 카드, assets 안내 파일을 생성/갱신했습니다.".to_string(),
        String::new(),
        "Verify:".to_string(),
        "- frontmatter 필수 필드 검증".to_string(),
        "- 요구 섹션 존재 검증".to_string(),
        "- docs meta.json 네비게이션 반영 검증".to_string(),
    ]
    .join("\n");

    PullRequestSpec {
        upstream: config.upstream_repo.clone(),
        base: config.base_branch.clone(),
        head,
        title: format!("[Submission] {}", project),
        body,
    }
}

/// Run `steps` with a fresh state, then tear the state down on every path.
fn with_state<T>(
    request: &SubmissionRequest<'_>,
    steps: impl FnOnce(&mut OrchestrationState) -> Result<T>,
) -> std::result::Result<T, Failure> {
    let mut state = OrchestrationState::new(&request.config.temp_prefix, request.keep_temp)?;
    let outcome = steps(&mut state);
    if outcome.is_err() {
        state.resolve_head_sha();
    }
    let fallback = state.fallback(request.config);
    match &outcome {
        Ok(_) => tracing::debug!(
            stage = %state.stage(),
            fork = ?state.fork,
            checkout = ?state.checkout,
            pr_url = ?state.pr_url,
            "run finished"
        ),
        Err(e) => tracing::info!(stage = %state.stage(), error = %e, "run stopped"),
    }
    state.finish();
    outcome.map_err(|error| Failure::new(error, fallback))
}

/// Fork, branch, render, commit, push, and open or reuse the pull request.
pub fn run_full(
    hosting: &dyn Hosting,
    request: &SubmissionRequest<'_>,
) -> std::result::Result<PublishReport, Failure> {
    preflight(request)?;
    let SubmissionRequest { input, config, update, .. } = *request;

    with_state(request, |state| {
        let login = authenticate(hosting, state)?;
        let fork = ensure_fork(hosting, config, &login, true, state)?;
        let (repo, branch) = checkout_branch(config, input, &fork, state)?;
        checkout::ensure_git_identity(&repo)?;

        let paths = create_submission_artifacts(&repo, input, config, update, Utc::now())?;
        state.advance(Stage::Rendered);

        let commit_sha = checkout::commit_changes(&repo, input, &Slugs::from_input(input))?;
        state.commit_sha = Some(commit_sha.clone());
        state.advance(Stage::Committed);

        checkout::push_branch(&repo, &branch)?;
        state.advance(Stage::Pushed);

        let head = format!("{}:{}", login, branch);
        let (pr_url, pr_reused) = match hosting.find_open_pr(&config.upstream_repo, &head)? {
            Some(url) => (url, true),
            None => (
                hosting.create_pr(&pull_request_spec(config, input, head))?,
                false,
            ),
        };
        state.pr_url = Some(pr_url.clone());
        state.advance(Stage::PrOpen);

        Ok(PublishReport {
            document: paths.document,
            team_card: paths.team_card,
            commit_sha,
            branch,
            pr_url,
            pr_reused,
        })
    })
}

/// Exercise the hosting path up to rendering, without committing.
///
/// The fork must already exist; a dry run never creates one.
pub fn run_dry_run(
    hosting: &dyn Hosting,
    request: &SubmissionRequest<'_>,
) -> std::result::Result<DryRunReport, Failure> {
    preflight(request)?;
    let SubmissionRequest { input, config, update, .. } = *request;

    with_state(request, |state| {
        let login = authenticate(hosting, state)?;
        if !hosting.repo_exists(&config.upstream_repo)? {
            return Err(SubmitError::UserError(format!(
                "Upstream repository is not accessible: {}",
                config.upstream_repo
            )));
        }
        let fork = ensure_fork(hosting, config, &login, false, state)?;
        let (repo, branch) = checkout_branch(config, input, &fork, state)?;

        let paths = create_submission_artifacts(&repo, input, config, update, Utc::now())?;
        state.advance(Stage::Rendered);

        Ok(DryRunReport {
            changed_files: changed_file_count(&repo)?,
            fork_url: config.web_url(&fork),
            compare_url: config.compare_url(&login, &branch),
            document: paths.document,
            team_card: paths.team_card,
            login,
            branch,
        })
    })
}

/// Write the artifacts under `dir` without touching git or the host.
pub fn render_only(dir: &Path, request: &SubmissionRequest<'_>) -> Result<ArtifactPaths> {
    let root = std::path::absolute(dir).map_err(|e| {
        SubmitError::UserError(format!("invalid output directory '{}': {}", dir.display(), e))
    })?;
    create_submission_artifacts(
        &root,
        request.input,
        request.config,
        request.update,
        Utc::now(),
    )
}

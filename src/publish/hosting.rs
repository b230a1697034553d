//! Code-hosting operations, behind a trait so orchestration can run against
//! a fake host.

use crate::error::Result;
use crate::process;

/// Pull request to open against the upstream repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSpec {
    pub upstream: String,
    pub base: String,
    /// `login:branch`
    pub head: String,
    pub title: String,
    pub body: String,
}

/// Operations the orchestrator needs from the hosting service.
pub trait Hosting {
    /// Fail unless the hosting CLI is installed and authenticated.
    fn check_cli_and_auth(&self) -> Result<()>;

    /// Login of the authenticated account.
    fn current_login(&self) -> Result<String>;

    /// Whether `owner/name` exists and is visible.
    fn repo_exists(&self, repo: &str) -> Result<bool>;

    /// Fork `upstream` into the authenticated account without cloning.
    fn fork_repo(&self, upstream: &str) -> Result<()>;

    /// URL of an open pull request from `head` (`login:branch`), if any.
    fn find_open_pr(&self, upstream: &str, head: &str) -> Result<Option<String>>;

    /// Open a pull request and return its URL.
    fn create_pr(&self, spec: &PullRequestSpec) -> Result<String>;
}

/// [`Hosting`] backed by the GitHub CLI (`gh`).
#[derive(Debug, Default, Clone, Copy)]
pub struct GhCli;

impl GhCli {
    fn gh(&self, args: &[&str]) -> Result<process::CommandOutput> {
        process::run("gh", None, args)
    }
}

impl Hosting for GhCli {
    fn check_cli_and_auth(&self) -> Result<()> {
        self.gh(&["--version"])?;
        self.gh(&["auth", "status"])?;
        Ok(())
    }

    fn current_login(&self) -> Result<String> {
        Ok(self.gh(&["api", "user", "--jq", ".login"])?.stdout)
    }

    fn repo_exists(&self, repo: &str) -> Result<bool> {
        let output = process::run_unchecked("gh", None, &["repo", "view", repo])?;
        Ok(output.success())
    }

    fn fork_repo(&self, upstream: &str) -> Result<()> {
        self.gh(&["repo", "fork", upstream, "--clone=false", "--remote=false"])?;
        Ok(())
    }

    fn find_open_pr(&self, upstream: &str, head: &str) -> Result<Option<String>> {
        let output = self.gh(&[
            "pr", "list", "--repo", upstream, "--state", "open", "--head", head, "--json", "url",
            "--jq", ".[0].url",
        ])?;
        // `--jq` prints an empty line, or "null" on some versions, when nothing matches.
        match output.stdout.as_str() {
            "" | "null" => Ok(None),
            url => Ok(Some(url.to_string())),
        }
    }

    fn create_pr(&self, spec: &PullRequestSpec) -> Result<String> {
        let output = self.gh(&[
            "pr",
            "create",
            "--repo",
            &spec.upstream,
            "--base",
            &spec.base,
            "--head",
            &spec.head,
            "--title",
            &spec.title,
            "--body",
            &spec.body,
        ])?;
        Ok(output
            .lines()
            .last()
            .map(|line| line.trim().to_string())
            .unwrap_or_default())
    }
}

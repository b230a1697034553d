use crate::artifacts::{AiUsage, SubmissionInput};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Once;
use tempfile::TempDir;

static GIT_IDENTITY: Once = Once::new();

/// Point git at a global config file carrying a commit identity, so clones
/// made by the code under test can commit on machines without one. Local
/// repository config still takes precedence.
///
/// Every test that spawns git is `#[serial]`, so no other test thread reads
/// the environment while it is being written.
pub(crate) fn ensure_global_git_identity() {
    GIT_IDENTITY.call_once(|| {
        let path = global_identity_path();
        std::fs::write(
            &path,
            "[user]\n\tname = Global Tester\n\temail = global-tester@example.com\n",
        )
        .unwrap();
        set_global_git_config(&path);
    });
}

fn global_identity_path() -> PathBuf {
    std::env::temp_dir().join("subpr-test-global.gitconfig")
}

fn set_global_git_config(path: &Path) {
    // SAFETY: only called from `#[serial]` tests, while no other test thread
    // is reading the environment or spawning processes.
    unsafe {
        std::env::set_var("GIT_CONFIG_GLOBAL", path);
    }
}

/// Restores the shared global identity when dropped.
pub(crate) struct GlobalGitConfig {
    _file: tempfile::NamedTempFile,
}

impl Drop for GlobalGitConfig {
    fn drop(&mut self) {
        set_global_git_config(&global_identity_path());
    }
}

/// Replace the global git config with `contents` until the guard drops.
/// Callers must be `#[serial]`.
pub(crate) fn override_global_git_config(contents: &str) -> GlobalGitConfig {
    ensure_global_git_identity();
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), contents).unwrap();
    set_global_git_config(file.path());
    GlobalGitConfig { _file: file }
}

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    temp_dir
}

fn init_repo(path: &Path) {
    git(path, &["init"]);
    // Deterministic default branch across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
}

/// Hosting layout served from local bare repositories.
///
/// `root` plays the role of the git host: `<root>/<owner>/<repo>.git`.
pub(crate) struct FakeRemote {
    pub root: TempDir,
}

impl FakeRemote {
    /// Create an upstream bare repository with a `main` branch and a docs tree.
    pub(crate) fn with_upstream(upstream: &str) -> Self {
        let root = TempDir::new().unwrap();
        let seed = TempDir::new().unwrap();
        init_repo(seed.path());

        let docs = seed.path().join("contents").join("docs");
        std::fs::create_dir_all(&docs).unwrap();
        std::fs::write(
            docs.join("meta.json"),
            "{\n  \"title\": \"Docs\",\n  \"pages\": [\n    \"index\"\n  ]\n}\n",
        )
        .unwrap();
        git(seed.path(), &["add", "."]);
        git(seed.path(), &["commit", "-m", "Add docs"]);

        let bare = root.path().join(format!("{}.git", upstream));
        std::fs::create_dir_all(bare.parent().unwrap()).unwrap();
        git(
            root.path(),
            &[
                "clone",
                "--bare",
                &seed.path().to_string_lossy(),
                &bare.to_string_lossy(),
            ],
        );

        Self { root }
    }

    /// Create `<owner>/<name>` as a bare clone of the upstream.
    pub(crate) fn add_fork(&self, upstream: &str, fork: &str) {
        let source = self.root.path().join(format!("{}.git", upstream));
        let target = self.root.path().join(format!("{}.git", fork));
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        git(
            self.root.path(),
            &[
                "clone",
                "--bare",
                &source.to_string_lossy(),
                &target.to_string_lossy(),
            ],
        );
    }

    /// Commit `contents` at `rel_path` on the `main` branch of `repo`.
    pub(crate) fn commit_file(&self, repo: &str, rel_path: &str, contents: &str) {
        let bare = self.root.path().join(format!("{}.git", repo));
        let work = TempDir::new().unwrap();
        git(
            work.path(),
            &["clone", &bare.to_string_lossy(), "."],
        );
        git(work.path(), &["config", "user.email", "test@example.com"]);
        git(work.path(), &["config", "user.name", "Test User"]);

        let target = work.path().join(rel_path);
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, contents).unwrap();
        git(work.path(), &["add", "."]);
        git(work.path(), &["commit", "-m", "Seed file"]);
        git(work.path(), &["push", "origin", "HEAD:main"]);
    }

    /// SHA of `main` in a bare repository.
    pub(crate) fn main_sha(&self, repo: &str) -> String {
        let path = self.root.path().join(format!("{}.git", repo));
        let output = Command::new("git")
            .current_dir(&path)
            .args(["rev-parse", "main"])
            .output()
            .unwrap();
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    pub(crate) fn base_url(&self) -> String {
        self.root.path().to_string_lossy().to_string()
    }

    /// Branch names present in a bare repository.
    pub(crate) fn branches(&self, repo: &str) -> Vec<String> {
        let path = self.root.path().join(format!("{}.git", repo));
        let output = Command::new("git")
            .current_dir(&path)
            .args(["for-each-ref", "--format=%(refname:short)", "refs/heads"])
            .output()
            .unwrap();
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// A fully populated input matching the "Team Orbit" scenario.
pub(crate) fn sample_input() -> SubmissionInput {
    SubmissionInput {
        team_name: "Team Orbit".to_string(),
        project_name: "Orbit Sync".to_string(),
        repo_url: "https://github.com/x/y".to_string(),
        demo_url_or_run_method: "https://orbit.example.com/demo".to_string(),
        problem_definition: "Calendars drift apart across tools.".to_string(),
        one_liner: "Keeps every team calendar in lockstep.".to_string(),
        team_roles: "- Alex: backend\\n- Sam: frontend".to_string(),
        solution: String::new(),
        tech_stack: "Rust, SQLite".to_string(),
        run_verify: String::new(),
        demo_summary: String::new(),
        license_sources: String::new(),
        ai_used: AiUsage::Used,
        ai_validation_notes: String::new(),
        presentation_url: String::new(),
        extra_links: String::new(),
        project_url: String::new(),
        team_role_label: "참가팀".to_string(),
        team_bio: String::new(),
        team_image_url: String::new(),
        submitted_at: "2026-10-19T10:00:00+09:00".to_string(),
        team_order: None,
    }
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

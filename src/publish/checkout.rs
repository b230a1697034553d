//! Git steps of a publish run: clone, identity check, commit, push.

use crate::artifacts::{STAGED_PATHS, Slugs, SubmissionInput};
use crate::artifacts::layout::team_card_file_name;
use crate::config::SubmissionConfig;
use crate::error::{Result, SubmitError};
use crate::git::{config_get, has_staged_changes, head_sha, run_git, run_git_detached};
use std::path::{Path, PathBuf};

/// Clone the fork into `work_dir/repo` and check out `branch` from the
/// upstream base branch tip.
pub(super) fn prepare_checkout(
    config: &SubmissionConfig,
    work_dir: &Path,
    fork: &str,
    branch: &str,
) -> Result<PathBuf> {
    let repo_path = work_dir.join("repo");
    let repo_arg = repo_path.to_string_lossy();

    run_git_detached(&["clone", &config.clone_url(fork), &repo_arg])?;
    run_git(
        &repo_path,
        &["remote", "add", "upstream", &config.clone_url(&config.upstream_repo)],
    )?;
    run_git(&repo_path, &["fetch", "origin"])?;
    run_git(&repo_path, &["fetch", "upstream", &config.base_branch])?;
    run_git(
        &repo_path,
        &[
            "checkout",
            "-B",
            branch,
            &format!("upstream/{}", config.base_branch),
        ],
    )?;

    Ok(repo_path)
}

/// Refuse to commit without a configured author.
pub(super) fn ensure_git_identity(repo: &Path) -> Result<()> {
    let name = config_get(repo, "user.name")?;
    let email = config_get(repo, "user.email")?;
    match (name, email) {
        (Some(_), Some(_)) => Ok(()),
        _ => Err(SubmitError::IdentityMissing),
    }
}

/// Stage the submission paths and commit them. Returns the new HEAD SHA.
pub(super) fn commit_changes(repo: &Path, input: &SubmissionInput, slugs: &Slugs) -> Result<String> {
    let present: Vec<&str> = STAGED_PATHS
        .iter()
        .copied()
        .filter(|path| repo.join(path).exists())
        .collect();
    if !present.is_empty() {
        let mut args = vec!["add", "--"];
        args.extend(present);
        run_git(repo, &args)?;
    }

    if !has_staged_changes(repo)? {
        return Err(SubmitError::EmptyCommit);
    }

    run_git(repo, &["commit", "-m", &commit_message(input, slugs)])?;
    head_sha(repo)
}

pub(super) fn push_branch(repo: &Path, branch: &str) -> Result<()> {
    run_git(repo, &["push", "--set-upstream", "origin", branch])?;
    Ok(())
}

fn commit_message(input: &SubmissionInput, slugs: &Slugs) -> String {
    [
        format!(
            "docs(submission): add {} result document",
            input.project_name.trim()
        ),
        String::new(),
        "Why:".to_string(),
        "- 해카톤 제출 결과를 단일 문서로 공개".to_string(),
        String::new(),
        "What:".to_string(),
        format!("- contents/docs/vibe-coding/{}.mdx 생성", slugs.project),
        format!("- contents/team/{} 팀 카드 생성", team_card_file_name(slugs)),
        "- assets 안내 파일 및 docs meta.json 갱신".to_string(),
        String::new(),
        "Verify:".to_string(),
        "- frontmatter 키와 필수 섹션 검증 통과".to_string(),
        "- 기존 제출물 덮어쓰기 방지 규칙 적용".to_string(),
        String::new(),
        "AI:".to_string(),
        format!(
            "- AI 사용 여부: {} ({} 팀 제출 흐름 기준으로 검증)",
            input.ai_used.label(),
            input.team_name.trim()
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_repo, sample_input};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_identity_present() {
        let repo = create_test_repo();
        assert!(ensure_git_identity(repo.path()).is_ok());
    }

    #[test]
    #[serial]
    fn test_identity_missing_is_refused() {
        let repo = create_test_repo();
        run_git(repo.path(), &["config", "user.name", ""]).unwrap();

        let err = ensure_git_identity(repo.path()).unwrap_err();
        assert!(matches!(err, SubmitError::IdentityMissing));
    }

    #[test]
    #[serial]
    fn test_commit_without_changes_is_empty() {
        let repo = create_test_repo();
        let input = sample_input();
        let err = commit_changes(repo.path(), &input, &Slugs::from_input(&input)).unwrap_err();
        assert!(matches!(err, SubmitError::EmptyCommit));
    }

    #[test]
    #[serial]
    fn test_commit_stages_only_submission_paths() {
        let repo = create_test_repo();
        let team = repo.path().join("contents").join("team");
        std::fs::create_dir_all(&team).unwrap();
        std::fs::write(team.join("card.mdx"), "card").unwrap();
        std::fs::write(repo.path().join("notes.txt"), "scratch").unwrap();
        let docs = repo.path().join("contents").join("docs").join("vibe-coding");
        std::fs::create_dir_all(&docs).unwrap();
        std::fs::write(docs.join("orbit-sync.mdx"), "doc").unwrap();
        std::fs::write(docs.parent().unwrap().join("meta.json"), "{}\n").unwrap();

        let input = sample_input();
        let before = head_sha(repo.path()).unwrap();
        let sha = commit_changes(repo.path(), &input, &Slugs::from_input(&input)).unwrap();
        assert_ne!(sha, before);

        let committed = run_git(repo.path(), &["show", "--name-only", "--format=%s", "HEAD"]).unwrap();
        assert!(committed.stdout.contains("contents/team/card.mdx"));
        assert!(committed.stdout.contains("contents/docs/meta.json"));
        assert!(!committed.stdout.contains("notes.txt"));
        assert!(
            committed
                .stdout
                .starts_with("docs(submission): add Orbit Sync result document")
        );
    }

    #[test]
    fn test_commit_message_sections() {
        let input = sample_input();
        let message = commit_message(&input, &Slugs::from_input(&input));
        for heading in ["\nWhy:\n", "\nWhat:\n", "\nVerify:\n", "\nAI:\n"] {
            assert!(message.contains(heading), "{heading:?}");
        }
        assert!(message.contains("contents/team/submission-team-orbit-orbit-sync.mdx"));
    }
}

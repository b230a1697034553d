//! End-to-end tests for artifact creation.

use super::*;
use crate::test_support::sample_input;
use chrono::TimeZone;
use tempfile::TempDir;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 1, 0, 0).unwrap()
}

fn create(root: &Path, input: &SubmissionInput, update: bool) -> Result<ArtifactPaths> {
    create_submission_artifacts(root, input, &SubmissionConfig::default(), update, now())
}

#[test]
fn test_orbit_scenario_writes_every_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let paths = create(temp_dir.path(), &sample_input(), false).unwrap();

    assert!(paths.document.ends_with("contents/docs/vibe-coding/orbit-sync.mdx"));
    assert!(
        paths
            .team_card
            .ends_with("contents/team/submission-team-orbit-orbit-sync.mdx")
    );

    let card = std::fs::read_to_string(&paths.team_card).unwrap();
    assert!(card.contains("repositoryUrl: \"https://github.com/x/y\"\n"));

    let document = std::fs::read_to_string(&paths.document).unwrap();
    assert!(document.starts_with("---\ntitle: \"Orbit Sync\"\n"));

    for folder in ["demo", "evidence", "team"] {
        assert!(paths.asset_root.join(folder).join("README.md").is_file());
    }

    let docs_meta = std::fs::read_to_string(&paths.docs_meta).unwrap();
    assert!(docs_meta.contains("\"vibe-coding\""));
    let section_meta = std::fs::read_to_string(&paths.section_meta).unwrap();
    assert!(section_meta.contains("\"orbit-sync\""));
}

#[test]
fn test_default_submitted_at_uses_configured_offset() {
    let temp_dir = TempDir::new().unwrap();
    let mut input = sample_input();
    input.submitted_at = String::new();

    let paths = create(temp_dir.path(), &input, false).unwrap();
    let card = std::fs::read_to_string(&paths.team_card).unwrap();
    assert!(card.contains("submittedAt: \"2026-10-19T10:00:00+09:00\"\n"));
}

#[test]
fn test_second_write_without_update_conflicts() {
    let temp_dir = TempDir::new().unwrap();
    create(temp_dir.path(), &sample_input(), false).unwrap();

    let err = create(temp_dir.path(), &sample_input(), false).unwrap_err();
    match err {
        SubmitError::ConflictExists { what, path } => {
            assert_eq!(what, "Document");
            assert!(path.ends_with("orbit-sync.mdx"));
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn test_update_replaces_content() {
    let temp_dir = TempDir::new().unwrap();
    let first = create(temp_dir.path(), &sample_input(), false).unwrap();

    let mut input = sample_input();
    input.one_liner = "Calendars that agree.".to_string();
    let second = create(temp_dir.path(), &input, true).unwrap();

    assert_eq!(first, second);
    let document = std::fs::read_to_string(&second.document).unwrap();
    assert!(document.contains("summary: \"Calendars that agree.\""));
    assert!(!document.contains("lockstep"));
    let card = std::fs::read_to_string(&second.team_card).unwrap();
    assert!(card.contains("projectSummary: \"Calendars that agree.\""));

    let section_meta = std::fs::read_to_string(&second.section_meta).unwrap();
    assert_eq!(section_meta.matches("\"orbit-sync\"").count(), 1);
}

#[test]
fn test_existing_team_card_blocks_without_partial_write() {
    let temp_dir = TempDir::new().unwrap();
    let paths = ArtifactPaths::new(temp_dir.path(), &Slugs::from_input(&sample_input()));
    std::fs::create_dir_all(paths.team_card.parent().unwrap()).unwrap();
    std::fs::write(&paths.team_card, "existing card").unwrap();

    let err = create(temp_dir.path(), &sample_input(), false).unwrap_err();
    assert!(err.to_string().starts_with("Team submission card already exists at"));

    assert!(!paths.document.exists());
    assert!(!paths.docs_meta.exists());
    assert_eq!(
        std::fs::read_to_string(&paths.team_card).unwrap(),
        "existing card"
    );
}

#[test]
fn test_invalid_input_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut input = sample_input();
    input.repo_url = "not a url".to_string();

    let err = create(temp_dir.path(), &input, false).unwrap_err();
    assert!(matches!(err, SubmitError::Validation(_)));
    assert!(!temp_dir.path().join("contents").exists());
}

#[test]
fn test_missing_template_override_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = SubmissionConfig {
        template_path: Some(temp_dir.path().join("missing.mdx")),
        ..SubmissionConfig::default()
    };

    let err =
        create_submission_artifacts(temp_dir.path(), &sample_input(), &config, false, now())
            .unwrap_err();
    assert!(err.to_string().contains("Template not found"));
    assert!(!temp_dir.path().join("contents").exists());
}

#[test]
fn test_template_override_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("custom.mdx");
    std::fs::write(
        &template_path,
        format!(
            "{}\n## 심사 메모\n",
            crate::template::EMBEDDED_TEMPLATE.trim_end()
        ),
    )
    .unwrap();
    let config = SubmissionConfig {
        template_path: Some(template_path),
        ..SubmissionConfig::default()
    };

    let out = temp_dir.path().join("out");
    let paths =
        create_submission_artifacts(&out, &sample_input(), &config, false, now()).unwrap();
    let document = std::fs::read_to_string(paths.document).unwrap();
    assert!(document.ends_with("## 심사 메모\n"));
}

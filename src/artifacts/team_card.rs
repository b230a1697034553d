//! Team profile card shown on the hackathon team page.

use super::input::SubmissionInput;
use crate::error::{Result, SubmitError};
use crate::text::{as_optional_url, normalize_or_sentinel, normalize_text, sanitize_frontmatter_value};

/// Role label used when none is supplied.
pub const DEFAULT_ROLE_LABEL: &str = "참가팀";

/// Render the card. `submitted_at` is already resolved by the caller.
pub fn render_team_card(input: &SubmissionInput, submitted_at: &str) -> Result<String> {
    let repository_url = as_optional_url(&input.repo_url).ok_or_else(|| {
        SubmitError::Validation("--repo-url must be a valid http(s) URL.".to_string())
    })?;

    let name = normalize_or_sentinel(&input.team_name);
    let project_name = normalize_or_sentinel(&input.project_name);
    let one_liner = normalize_or_sentinel(&input.one_liner);
    let problem = normalize_or_sentinel(&input.problem_definition);
    let roles = normalize_or_sentinel(&input.team_roles);
    let role_label = normalize_text(&input.team_role_label, DEFAULT_ROLE_LABEL);
    let bio = normalize_text(&input.team_bio, &one_liner);

    let demo_url = as_optional_url(&input.demo_url_or_run_method);
    let project_url = as_optional_url(&input.project_url).or_else(|| demo_url.clone());
    let image_url = as_optional_url(&input.team_image_url);

    let quoted = |key: &str, value: &str| format!("{}: \"{}\"", key, sanitize_frontmatter_value(value));

    let mut lines = vec![
        "---".to_string(),
        quoted("name", &name),
        quoted("role", &role_label),
        quoted("bio", &bio),
        quoted("projectName", &project_name),
        quoted("projectSummary", &one_liner),
        quoted("repositoryUrl", &repository_url),
        quoted("submittedAt", submitted_at.trim()),
    ];
    if let Some(url) = &project_url {
        lines.push(quoted("projectUrl", url));
    }
    if let Some(url) = &demo_url {
        lines.push(quoted("demoUrl", url));
    }
    if let Some(url) = &image_url {
        lines.push(quoted("imageUrl", url));
    }
    if let Some(order) = input.team_order {
        lines.push(format!("order: {}", order));
    }
    lines.push("---".to_string());
    lines.push(String::new());

    let body = [
        "## 팀 소개".to_string(),
        String::new(),
        bio.clone(),
        String::new(),
        "## 제출 프로젝트".to_string(),
        String::new(),
        format!("### {}", project_name),
        String::new(),
        format!("- 한 줄 소개: {}", one_liner),
        format!("- 해결하려는 문제: {}", problem),
        "- 팀 구성:".to_string(),
        roles,
        String::new(),
    ];

    Ok(format!("{}{}", lines.join("\n"), body.join("\n")))
}

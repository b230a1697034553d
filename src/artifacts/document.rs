//! Main submission document: replacements, render, and contract check.

use super::input::SubmissionInput;
use crate::error::Result;
use crate::template::{
    Placeholder, Replacements, normalize_markdown_spacing, optional_section, render_template,
};
use crate::text::{has_visible_value, normalize_or_sentinel, normalize_text, sanitize_frontmatter_value};
use crate::validate::validate_document;

/// Rendered when no solution is supplied.
const DEFAULT_SOLUTION: &str = "핵심 구현 아이디어와 접근 방식을 정리했습니다.";

/// Build the value of every placeholder from the input.
pub fn build_replacements(input: &SubmissionInput) -> Replacements {
    let mut values = Replacements::new();
    let mut set = |placeholder: Placeholder, value: String| {
        values.insert(placeholder, value);
    };

    set(
        Placeholder::FrontmatterTitle,
        sanitize_frontmatter_value(&input.project_name),
    );
    set(
        Placeholder::FrontmatterSummary,
        sanitize_frontmatter_value(&input.one_liner),
    );
    set(
        Placeholder::FrontmatterDescription,
        sanitize_frontmatter_value(&format!("{} 프로젝트 요약", input.project_name.trim())),
    );
    set(Placeholder::TeamName, normalize_or_sentinel(&input.team_name));
    set(Placeholder::ProjectName, normalize_or_sentinel(&input.project_name));
    set(Placeholder::RepoUrl, normalize_or_sentinel(&input.repo_url));
    set(
        Placeholder::DemoUrlOrRunMethod,
        normalize_or_sentinel(&input.demo_url_or_run_method),
    );
    set(
        Placeholder::ProblemDefinition,
        normalize_or_sentinel(&input.problem_definition),
    );
    set(
        Placeholder::Solution,
        normalize_text(&input.solution, DEFAULT_SOLUTION),
    );
    set(Placeholder::OneLiner, normalize_or_sentinel(&input.one_liner));
    set(Placeholder::TeamRoles, normalize_or_sentinel(&input.team_roles));
    set(
        Placeholder::DemoSummarySection,
        optional_section("데모 설명 (3분 이내 기준)", &input.demo_summary),
    );
    set(
        Placeholder::TechStackSection,
        optional_section("기술 스택", &input.tech_stack),
    );
    set(
        Placeholder::RunVerifySection,
        optional_section("실행/검증 방법", &input.run_verify),
    );
    set(Placeholder::AiUsageSection, ai_usage_section(input));
    set(
        Placeholder::LicenseSourcesSection,
        optional_section("라이선스/출처", &input.license_sources),
    );
    set(
        Placeholder::PresentationSection,
        optional_section("발표 자료", &input.presentation_url),
    );
    set(
        Placeholder::ExtraLinksSection,
        optional_section("추가 링크", &input.extra_links),
    );

    values
}

fn ai_usage_section(input: &SubmissionInput) -> String {
    let mut body = format!("- AI 사용 여부: {}", input.ai_used.label());
    if has_visible_value(&input.ai_validation_notes) {
        body.push_str("\n- 검증 방법: ");
        body.push_str(&normalize_text(&input.ai_validation_notes, ""));
    }
    optional_section("AI 활용", &body)
}

/// Render the document and verify it against the publishing contract.
pub fn render_document(template: &str, input: &SubmissionInput) -> Result<String> {
    let rendered = render_template(template, &build_replacements(input))?;
    let rendered = normalize_markdown_spacing(&rendered);
    validate_document(&rendered)?;
    Ok(rendered)
}

//! The closed set of placeholders the document template must declare.

use std::fmt;

/// A `__NAME__` token in the document template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    FrontmatterTitle,
    FrontmatterSummary,
    FrontmatterDescription,
    TeamName,
    ProjectName,
    RepoUrl,
    DemoUrlOrRunMethod,
    ProblemDefinition,
    Solution,
    OneLiner,
    TeamRoles,
    DemoSummarySection,
    TechStackSection,
    RunVerifySection,
    AiUsageSection,
    LicenseSourcesSection,
    PresentationSection,
    ExtraLinksSection,
}

impl Placeholder {
    /// Every placeholder, in template order.
    pub const ALL: [Placeholder; 18] = [
        Placeholder::FrontmatterTitle,
        Placeholder::FrontmatterSummary,
        Placeholder::FrontmatterDescription,
        Placeholder::TeamName,
        Placeholder::ProjectName,
        Placeholder::RepoUrl,
        Placeholder::DemoUrlOrRunMethod,
        Placeholder::ProblemDefinition,
        Placeholder::Solution,
        Placeholder::OneLiner,
        Placeholder::TeamRoles,
        Placeholder::DemoSummarySection,
        Placeholder::TechStackSection,
        Placeholder::RunVerifySection,
        Placeholder::AiUsageSection,
        Placeholder::LicenseSourcesSection,
        Placeholder::PresentationSection,
        Placeholder::ExtraLinksSection,
    ];

    /// Bare name, e.g. `TEAM_NAME`.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::FrontmatterTitle => "FRONTMATTER_TITLE",
            Placeholder::FrontmatterSummary => "FRONTMATTER_SUMMARY",
            Placeholder::FrontmatterDescription => "FRONTMATTER_DESCRIPTION",
            Placeholder::TeamName => "TEAM_NAME",
            Placeholder::ProjectName => "PROJECT_NAME",
            Placeholder::RepoUrl => "REPO_URL",
            Placeholder::DemoUrlOrRunMethod => "DEMO_URL_OR_RUN_METHOD",
            Placeholder::ProblemDefinition => "PROBLEM_DEFINITION",
            Placeholder::Solution => "SOLUTION",
            Placeholder::OneLiner => "ONE_LINER",
            Placeholder::TeamRoles => "TEAM_ROLES",
            Placeholder::DemoSummarySection => "DEMO_SUMMARY_SECTION",
            Placeholder::TechStackSection => "TECH_STACK_SECTION",
            Placeholder::RunVerifySection => "RUN_VERIFY_SECTION",
            Placeholder::AiUsageSection => "AI_USAGE_SECTION",
            Placeholder::LicenseSourcesSection => "LICENSE_SOURCES_SECTION",
            Placeholder::PresentationSection => "PRESENTATION_SECTION",
            Placeholder::ExtraLinksSection => "EXTRA_LINKS_SECTION",
        }
    }

    /// Token as it appears in the template, e.g. `__TEAM_NAME__`.
    pub fn token(self) -> String {
        format!("__{}__", self.name())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

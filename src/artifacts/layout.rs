//! Slugs and the on-disk layout of a submission inside the docs repository.
//!
//! ```text
//! contents/
//!   docs/
//!     meta.json
//!     vibe-coding/
//!       meta.json
//!       <project-slug>.mdx
//!       assets/<project-slug>/{demo,evidence,team}/README.md
//!   team/
//!     submission-<team-slug>-<project-slug>.mdx
//! ```

use super::input::SubmissionInput;
use crate::text::slugify;
use std::path::{Path, PathBuf};

/// Prefix of team card file names.
pub const TEAM_CARD_PREFIX: &str = "submission";

/// Docs section holding submission documents.
pub const DOCS_SECTION: &str = "vibe-coding";

/// Path-safe identifiers for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slugs {
    pub team: String,
    pub project: String,
}

impl Slugs {
    pub fn from_input(input: &SubmissionInput) -> Self {
        Self {
            team: slugify(&input.team_name),
            project: slugify(&input.project_name),
        }
    }
}

/// Every path a submission writes, rooted at a repository checkout or a
/// render-only output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub docs_root: PathBuf,
    pub document: PathBuf,
    pub team_card: PathBuf,
    pub asset_root: PathBuf,
    pub docs_meta: PathBuf,
    pub section_meta: PathBuf,
}

impl ArtifactPaths {
    pub fn new(repo_root: &Path, slugs: &Slugs) -> Self {
        let docs_root = repo_root.join("contents").join("docs");
        let section = docs_root.join(DOCS_SECTION);
        let team_card = repo_root
            .join("contents")
            .join("team")
            .join(team_card_file_name(slugs));

        Self {
            document: section.join(format!("{}.mdx", slugs.project)),
            asset_root: section.join("assets").join(&slugs.project),
            docs_meta: docs_root.join("meta.json"),
            section_meta: section.join("meta.json"),
            team_card,
            docs_root,
        }
    }
}

/// `submission-<team-slug>-<project-slug>.mdx`
pub fn team_card_file_name(slugs: &Slugs) -> String {
    format!("{}-{}-{}.mdx", TEAM_CARD_PREFIX, slugs.team, slugs.project)
}

/// Paths staged for commit, relative to the repository root.
pub const STAGED_PATHS: &[&str] = &[
    "contents/docs/meta.json",
    "contents/docs/vibe-coding",
    "contents/team",
];

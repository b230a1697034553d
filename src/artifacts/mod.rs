//! Submission artifacts: the document, the team card, asset scaffolding, and
//! navigation metadata, written under a repository root.

pub mod assets;
pub mod document;
pub mod input;
pub mod layout;
pub mod meta;
pub mod team_card;

#[cfg(test)]
mod tests;

pub use input::{AiUsage, SubmissionInput};
pub use layout::{ArtifactPaths, STAGED_PATHS, Slugs};

use crate::config::SubmissionConfig;
use crate::error::{Result, SubmitError};
use crate::fs::atomic_write_file;
use crate::template::load_template;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Render and write every artifact of one submission under `repo_root`.
///
/// Nothing is written until the input, template, and both rendered files
/// have passed their checks and no conflicting file blocks the write. The
/// document and team card are guarded together by `update`; asset READMEs
/// and metadata are always refreshed.
pub fn create_submission_artifacts(
    repo_root: &Path,
    input: &SubmissionInput,
    config: &SubmissionConfig,
    update: bool,
    now: DateTime<Utc>,
) -> Result<ArtifactPaths> {
    input.validate()?;

    let template = load_template(config)?;

    let slugs = Slugs::from_input(input);
    let paths = ArtifactPaths::new(repo_root, &slugs);

    if !update {
        for (what, path) in [
            ("Document", &paths.document),
            ("Team submission card", &paths.team_card),
        ] {
            if path.exists() {
                return Err(SubmitError::ConflictExists {
                    what,
                    path: path.clone(),
                });
            }
        }
    }

    let rendered = document::render_document(&template, input)?;
    let submitted_at = input.submitted_at_or(now, config.utc_offset());
    let card = team_card::render_team_card(input, &submitted_at)?;

    atomic_write_file(&paths.document, &rendered)?;
    atomic_write_file(&paths.team_card, &card)?;
    assets::write_asset_placeholders(&paths.asset_root)?;
    meta::ensure_meta_page(
        &paths.docs_meta,
        meta::DOCS_META_TITLE,
        layout::DOCS_SECTION,
    )?;
    meta::ensure_meta_page(
        &paths.section_meta,
        meta::SECTION_META_TITLE,
        &slugs.project,
    )?;

    tracing::info!(
        document = %paths.document.display(),
        team_card = %paths.team_card.display(),
        "artifacts written"
    );

    Ok(paths)
}

//! Document template loading and placeholder substitution.
//!
//! The template is a fixed MDX document containing `__NAME__` tokens drawn
//! from the closed [`Placeholder`] set. Rendering is exhaustive: every token
//! must be supplied, and any `__UPPER_CASE__` token left after substitution
//! fails the render instead of leaking into the published document.
//!
//! # Contract
//!
//! - [`ensure_required_placeholders`] runs once after loading: a template
//!   that forgot a token is rejected before any input is rendered.
//! - [`render_template`] replaces each supplied token literally and then
//!   scans for leftovers.

mod placeholder;
mod sections;

pub use placeholder::Placeholder;
pub use sections::{normalize_markdown_spacing, optional_section};

use crate::config::SubmissionConfig;
use crate::config::types::TEMPLATE_FILENAME;
use crate::error::SubmitError;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Template shipped with the binary.
pub const EMBEDDED_TEMPLATE: &str = include_str!("../../assets/templates/vibecoding-result.mdx");

static LEFTOVER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__[A-Z0-9_]+__").expect("Invalid placeholder regex"));

/// Values keyed by placeholder.
pub type Replacements = BTreeMap<Placeholder, String>;

/// Error type for template loading and rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The configured template file does not exist.
    NotFound { path: PathBuf },
    /// The configured template file exists but could not be read.
    Unreadable { path: PathBuf, reason: String },
    /// The template does not declare some required placeholders.
    MissingPlaceholders { names: Vec<String> },
    /// Tokens still present after substitution.
    UnresolvedPlaceholders { tokens: Vec<String> },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::NotFound { path } => {
                write!(f, "Template not found: {}", path.display())
            }
            TemplateError::Unreadable { path, reason } => {
                write!(f, "failed to read template '{}': {}", path.display(), reason)
            }
            TemplateError::MissingPlaceholders { names } => {
                write!(f, "Template missing placeholder(s): {}", names.join(", "))
            }
            TemplateError::UnresolvedPlaceholders { tokens } => {
                write!(f, "Unresolved template placeholder(s): {}", tokens.join(", "))
            }
        }
    }
}

impl std::error::Error for TemplateError {}

impl From<TemplateError> for SubmitError {
    fn from(err: TemplateError) -> Self {
        SubmitError::Validation(err.to_string())
    }
}

/// Load the document template and check that it declares every placeholder.
///
/// Uses `config.template_path` when set, otherwise the embedded template.
pub fn load_template(config: &SubmissionConfig) -> Result<String, TemplateError> {
    let template = match &config.template_path {
        Some(path) => {
            if !path.exists() {
                return Err(TemplateError::NotFound { path: path.clone() });
            }
            std::fs::read_to_string(path).map_err(|e| TemplateError::Unreadable {
                path: path.clone(),
                reason: e.to_string(),
            })?
        }
        None => {
            tracing::debug!(template = TEMPLATE_FILENAME, "using embedded template");
            EMBEDDED_TEMPLATE.to_string()
        }
    };

    ensure_required_placeholders(&template, &Placeholder::ALL)?;
    Ok(template)
}

/// Fail if any of `placeholders` has no token in `template`.
pub fn ensure_required_placeholders(
    template: &str,
    placeholders: &[Placeholder],
) -> Result<(), TemplateError> {
    let names: Vec<String> = placeholders
        .iter()
        .filter(|p| !template.contains(&p.token()))
        .map(|p| p.name().to_string())
        .collect();

    if names.is_empty() {
        Ok(())
    } else {
        Err(TemplateError::MissingPlaceholders { names })
    }
}

/// Substitute every supplied token, then reject any token left over.
///
/// Leftovers are reported sorted and de-duplicated.
pub fn render_template(template: &str, replacements: &Replacements) -> Result<String, TemplateError> {
    let mut rendered = template.to_string();
    for (placeholder, value) in replacements {
        rendered = rendered.replace(&placeholder.token(), value);
    }

    let tokens: BTreeSet<String> = LEFTOVER_TOKEN
        .find_iter(&rendered)
        .map(|m| m.as_str().to_string())
        .collect();

    if tokens.is_empty() {
        Ok(rendered)
    } else {
        Err(TemplateError::UnresolvedPlaceholders {
            tokens: tokens.into_iter().collect(),
        })
    }
}

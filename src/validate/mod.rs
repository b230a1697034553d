//! Structural checks on rendered submission documents.
//!
//! - Frontmatter parsing: the leading `---` block as flat `key: value` pairs
//! - Document contract: allowed/required frontmatter keys and required sections
//!
//! These are contract checks on shape, not a schema for values.

pub mod document;
pub mod frontmatter;

pub use document::validate_document;
#[cfg(test)]
pub use frontmatter::parse_frontmatter;

//! Document contract: frontmatter key whitelist plus required sections.

use super::frontmatter::parse_frontmatter;
use crate::error::{Result, SubmitError};
use std::collections::BTreeSet;

/// Keys a document may carry in its frontmatter.
pub const ALLOWED_FRONTMATTER_KEYS: &[&str] = &["title", "summary", "description", "full"];

/// Keys a document must carry in its frontmatter.
pub const REQUIRED_FRONTMATTER_KEYS: &[&str] = &["title", "summary", "description"];

/// Section headers that must appear verbatim in the body.
pub const REQUIRED_SECTION_HEADERS: &[&str] = &[
    "## 프로젝트/팀 기본정보",
    "## 제품 링크 또는 실행 방법",
    "## 문제 정의 (Problem)",
    "## 해결 방식 (Solution)",
    "## 한 줄 소개",
    "## 팀 소개 및 역할",
];

/// Check a rendered document against the publishing contract.
///
/// Fails on the first of: unexpected frontmatter keys, missing required
/// keys, or a missing section header (in declaration order).
pub fn validate_document(content: &str) -> Result<()> {
    let frontmatter = parse_frontmatter(content)?;
    let keys: BTreeSet<&str> = frontmatter.keys().map(String::as_str).collect();

    let unexpected: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|k| !ALLOWED_FRONTMATTER_KEYS.contains(k))
        .collect();
    if !unexpected.is_empty() {
        return Err(SubmitError::Validation(format!(
            "Unexpected frontmatter keys: {}",
            unexpected.join(", ")
        )));
    }

    let mut missing: Vec<&str> = REQUIRED_FRONTMATTER_KEYS
        .iter()
        .copied()
        .filter(|k| !keys.contains(k))
        .collect();
    missing.sort_unstable();
    if !missing.is_empty() {
        return Err(SubmitError::Validation(format!(
            "Missing required frontmatter keys: {}",
            missing.join(", ")
        )));
    }

    for header in REQUIRED_SECTION_HEADERS {
        if !content.contains(header) {
            return Err(SubmitError::Validation(format!(
                "Missing required section: {}",
                header
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(frontmatter: &str) -> String {
        let mut doc = format!("---\n{}\n---\n\n", frontmatter);
        for header in REQUIRED_SECTION_HEADERS {
            doc.push_str(header);
            doc.push_str("\n\nbody\n\n");
        }
        doc
    }

    const REQUIRED: &str = "title: \"a\"\nsummary: \"b\"\ndescription: \"c\"";

    #[test]
    fn test_accepts_required_keys() {
        assert!(validate_document(&document(REQUIRED)).is_ok());
    }

    #[test]
    fn test_accepts_optional_full_key() {
        let fm = format!("{}\nfull: true", REQUIRED);
        assert!(validate_document(&document(&fm)).is_ok());
    }

    #[test]
    fn test_rejects_unexpected_keys() {
        let fm = format!("{}\nzeta: 1\nauthor: me", REQUIRED);
        let err = validate_document(&document(&fm)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Unexpected frontmatter keys: author, zeta"
        );
    }

    #[test]
    fn test_rejects_missing_required_keys() {
        let err = validate_document(&document("title: \"a\"")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Missing required frontmatter keys: description, summary"
        );
    }

    #[test]
    fn test_removing_any_header_names_that_header() {
        let full = document(REQUIRED);
        for header in REQUIRED_SECTION_HEADERS {
            let content = full.replace(header, "## 다른 제목");
            let err = validate_document(&content).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Validation failed: Missing required section: {}", header)
            );
        }
    }

    #[test]
    fn test_rejects_document_without_frontmatter() {
        let err = validate_document("## 한 줄 소개\n").unwrap_err();
        assert!(matches!(err, SubmitError::Validation(_)));
    }
}

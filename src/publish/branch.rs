//! Submission branch names.

use crate::artifacts::Slugs;
use chrono::{DateTime, Utc};

/// Prefix shared by every submission branch.
pub const BRANCH_PREFIX: &str = "submission/";

/// `submission/<team>-<project>-<UTC %Y%m%d%H%M%S>-<6 hex>`
pub fn create_branch_name(slugs: &Slugs, now: DateTime<Utc>) -> String {
    let suffix: [u8; 3] = rand::random();
    format_branch_name(slugs, now, suffix)
}

fn format_branch_name(slugs: &Slugs, now: DateTime<Utc>, suffix: [u8; 3]) -> String {
    let hex: String = suffix.iter().map(|b| format!("{:02x}", b)).collect();
    format!(
        "{}{}-{}-{}-{}",
        BRANCH_PREFIX,
        slugs.team,
        slugs.project,
        now.format("%Y%m%d%H%M%S"),
        hex
    )
}

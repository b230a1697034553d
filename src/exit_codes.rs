//! Exit code constants for the subpr CLI.
//!
//! - 0: Success
//! - 1: Any handled failure (usage conflict, validation, git/gh failure, ...)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Handled failure. Every error kind maps here; the `[ERROR]` line says which.
pub const FAILURE: i32 = 1;

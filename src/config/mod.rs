//! Fixed configuration for subpr.
//!
//! One immutable [`SubmissionConfig`] is built at startup (defaults, an
//! optional YAML file, then CLI overrides) and passed by reference to every
//! component. Unknown YAML fields are ignored for forward compatibility.

mod model;
mod operations;
pub mod types;


pub use model::SubmissionConfig;

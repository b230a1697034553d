//! Filesystem helpers for submission artifacts.

pub mod atomic;

pub use atomic::atomic_write_file;

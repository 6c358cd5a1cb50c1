//! Core utilities and types for barrelgen.
//!
//! This crate provides the string helpers and the file writer used by
//! the barrel generator.

mod file;
mod utils;

// File operations
pub use file::File;
// String utilities
pub use utils::{capitalize_first, to_forward_slashes};

//! Core operations.
//!
//! This module contains the business logic for barrel commands,
//! separated from CLI argument parsing and output rendering.

pub mod build;

pub use build::build;

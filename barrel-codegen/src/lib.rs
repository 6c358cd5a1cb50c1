//! Barrel module generation for barrelgen.
//!
//! This crate finds meta definition files in a directory, derives an
//! import name for each of them and renders a JavaScript module that
//! re-exports them all.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`ast`] - JavaScript syntax nodes (imports, default exports, literals)
//! - [`discovery`] - Directory traversal and file name filters
//! - [`naming`] - Import name derivation
//! - [`generator`] - Barrel assembly, rendering and persistence

pub mod ast;
pub mod builder;
pub mod discovery;
mod error;
pub mod generator;
pub mod naming;

pub use discovery::{DiscoveryOptions, FilterSpec, find_meta_files};
pub use error::{Error, Result};
pub use generator::{Barrel, BarrelEntry, BarrelOptions, BuildOutcome, Destination, build};
pub use naming::import_name;

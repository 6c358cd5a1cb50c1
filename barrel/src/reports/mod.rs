//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod build;
mod output;

pub use build::{BuildReport, BuildResult, ExportShape, ReportEntry};
pub use output::{Report, TerminalOutput};

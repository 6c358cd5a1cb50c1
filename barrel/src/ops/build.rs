//! Build operation - generate the barrel module.

use barrelgen_codegen::{BarrelOptions, Destination};
use tracing::info;

use crate::reports::{BuildReport, BuildResult, ExportShape, ReportEntry};

/// Execute the build operation.
///
/// Discovers meta definition files, renders the barrel and writes it unless
/// the output path is empty.
pub fn build(options: BarrelOptions) -> barrelgen_codegen::Result<BuildReport> {
    info!(directory = %options.discovery.directory.display(), "building barrel");
    let outcome = barrelgen_codegen::build(&options)?;

    let shape = match options.definition_key {
        Some(key) => ExportShape::Object { key },
        None => ExportShape::Array,
    };

    let entries = outcome
        .entries
        .iter()
        .map(|e| ReportEntry {
            import_name: e.import_name.clone(),
            path: e.path.display().to_string(),
        })
        .collect();

    let result = match outcome.destination {
        Destination::Returned(text) => BuildResult::Rendered(text),
        Destination::Written(path) => BuildResult::Written(path),
    };

    Ok(BuildReport {
        directory: options.discovery.directory,
        shape,
        warnings: outcome.warnings,
        entries,
        result,
    })
}

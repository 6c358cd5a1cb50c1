//! Build command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a barrel build.
#[derive(Debug)]
pub struct BuildReport {
    /// Scanned directory.
    pub directory: PathBuf,
    /// Shape of the default export.
    pub shape: ExportShape,
    /// Problems with derived import names.
    pub warnings: Vec<String>,
    /// Imported files in barrel order.
    pub entries: Vec<ReportEntry>,
    /// Where the barrel went.
    pub result: BuildResult,
}

#[derive(Debug)]
pub enum ExportShape {
    Array,
    Object { key: String },
}

#[derive(Debug)]
pub struct ReportEntry {
    pub import_name: String,
    pub path: String,
}

#[derive(Debug)]
pub enum BuildResult {
    /// Barrel text, for printing.
    Rendered(String),
    /// Barrel written to this path.
    Written(PathBuf),
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        let path = match &self.result {
            BuildResult::Rendered(text) => {
                out.preformatted(text);
                return;
            }
            BuildResult::Written(path) => path,
        };

        out.key_value("Generated", &path.display().to_string());
        let export = match &self.shape {
            ExportShape::Array => "array".to_string(),
            ExportShape::Object { key } => format!("object keyed by '{}'", key),
        };
        out.key_value("Export", &export);
        out.newline();

        if self.entries.is_empty() {
            out.preformatted(&format!(
                "No meta definition files found in {}",
                self.directory.display()
            ));
            return;
        }

        out.section(&format!("Definitions ({})", self.entries.len()));
        for entry in &self.entries {
            out.added_item(&format!("{} ({})", entry.import_name, entry.path));
        }
    }
}

//! Barrel module generation.
//!
//! A barrel imports every discovered meta definition file and default-exports
//! them, either as an array or, with a definition key, as an object keyed by
//! each definition's `<key>` field:
//!
//! ```text
//! import A from "./defs/a.js"
//! import B from "./defs/b.js"
//!
//! export default {
//!     [A.id]: A,
//!     [B.id]: B
//! }
//! ```

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use barrelgen_core::{File, to_forward_slashes};
use path_absolutize::Absolutize;
use tracing::{debug, info, warn};

use crate::{
    DiscoveryOptions, Error, Result,
    ast::{ExportDefault, Import, JsArray, JsObject},
    builder::CodeBuilder,
    discovery::find_meta_files,
    naming::{import_name, is_valid_identifier},
};

/// Options for a single barrel build.
#[derive(Debug, Clone)]
pub struct BarrelOptions {
    pub discovery: DiscoveryOptions,
    /// Where to write the barrel. Empty means render only.
    pub output_path: PathBuf,
    /// Field of each definition used as its key in the exported object.
    /// `None` exports an array instead.
    pub definition_key: Option<String>,
    /// Fail instead of emitting colliding import bindings.
    pub deny_duplicates: bool,
}

impl BarrelOptions {
    pub fn new(discovery: DiscoveryOptions) -> Self {
        Self {
            discovery,
            output_path: PathBuf::new(),
            definition_key: None,
            deny_duplicates: false,
        }
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn definition_key(mut self, key: impl Into<String>) -> Self {
        self.definition_key = Some(key.into());
        self
    }

    pub fn deny_duplicates(mut self, deny: bool) -> Self {
        self.deny_duplicates = deny;
        self
    }

    fn writes_file(&self) -> bool {
        !self.output_path.as_os_str().is_empty()
    }
}

/// One imported meta definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarrelEntry {
    /// Path as returned by discovery.
    pub path: PathBuf,
    /// Binding name used in the import statement.
    pub import_name: String,
    /// Module specifier, relative to the barrel's directory.
    pub import_path: String,
}

/// A barrel module ready to be rendered.
#[derive(Debug, Clone)]
pub struct Barrel {
    entries: Vec<BarrelEntry>,
    definition_key: Option<String>,
}

impl Barrel {
    pub fn new(entries: Vec<BarrelEntry>, definition_key: Option<String>) -> Self {
        Self {
            entries,
            definition_key,
        }
    }

    /// Discover the files for `options` and resolve their import names and paths.
    pub fn collect(options: &BarrelOptions) -> Result<Self> {
        let root = &options.discovery.directory;
        let files = find_meta_files(&options.discovery)?;

        let base = import_base(&options.output_path)?;
        let entries = files
            .into_iter()
            .map(|path| -> Result<BarrelEntry> {
                let relative = path.strip_prefix(root).unwrap_or(&path);
                let import_name = import_name(&to_forward_slashes(relative));
                let import_path = import_path(&base, &path)?;
                debug!(%import_name, %import_path, "resolved barrel entry");
                Ok(BarrelEntry {
                    path,
                    import_name,
                    import_path,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(entries, options.definition_key.clone()))
    }

    pub fn entries(&self) -> &[BarrelEntry] {
        &self.entries
    }

    /// Human-readable problems with the derived import names.
    ///
    /// Nothing here stops rendering; the generated module may not load.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut seen: HashMap<&str, &Path> = HashMap::new();

        for entry in &self.entries {
            let file = entry.path.display();
            if entry.import_name.is_empty() {
                warnings.push(format!("'{file}' produces an empty import name"));
            } else if !is_valid_identifier(&entry.import_name) {
                warnings.push(format!(
                    "'{file}' produces '{}', which is not a valid identifier",
                    entry.import_name
                ));
            }

            if let Some(first) = seen.insert(&entry.import_name, &entry.path) {
                warnings.push(format!(
                    "'{file}' and '{}' both import as '{}'",
                    first.display(),
                    entry.import_name
                ));
            }
        }

        warnings
    }

    /// Fail on the first import name shared by two files.
    pub fn check_duplicates(&self) -> Result<()> {
        let mut seen: HashMap<&str, &Path> = HashMap::new();
        for entry in &self.entries {
            if let Some(first) = seen.insert(&entry.import_name, &entry.path) {
                return Err(Box::new(Error::DuplicateImportName {
                    name: entry.import_name.clone(),
                    first: first.display().to_string(),
                    second: entry.path.display().to_string(),
                }));
            }
        }
        Ok(())
    }

    fn export(&self) -> ExportDefault {
        let names = self.entries.iter().map(|e| e.import_name.as_str());
        match &self.definition_key {
            Some(key) => ExportDefault::new(
                names.fold(JsObject::new(), |obj, name| {
                    obj.computed(format!("{name}.{key}"), name)
                }),
            ),
            None => ExportDefault::new(JsArray::from_raw(names)),
        }
    }

    /// Render the module text: imports, a blank line, the default export.
    /// There is no trailing newline.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();
        for entry in &self.entries {
            builder.emit(&Import::new(&entry.import_name, &entry.import_path));
        }
        builder.push_blank();
        builder.emit(&self.export());

        let mut code = builder.build();
        if code.ends_with('\n') {
            code.pop();
        }
        code
    }
}

/// What [`build`] did with the rendered barrel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// No output path was given; here is the text.
    Returned(String),
    /// The text was written to this path.
    Written(PathBuf),
}

/// Result of a barrel build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub entries: Vec<BarrelEntry>,
    pub warnings: Vec<String>,
    pub destination: Destination,
}

impl BuildOutcome {
    /// The rendered text, when it was not written to disk.
    pub fn text(&self) -> Option<&str> {
        match &self.destination {
            Destination::Returned(text) => Some(text.as_str()),
            Destination::Written(_) => None,
        }
    }
}

/// Discover, render and (when `output_path` is set) write a barrel module.
///
/// Writing fully replaces any existing file. Nothing is written when
/// discovery or the duplicate check fails.
pub fn build(options: &BarrelOptions) -> Result<BuildOutcome> {
    let barrel = Barrel::collect(options)?;
    if options.deny_duplicates {
        barrel.check_duplicates()?;
    }

    let warnings = barrel.warnings();
    for warning in &warnings {
        warn!("{warning}");
    }
    let text = barrel.render();

    let destination = if options.writes_file() {
        let file = File::new(&options.output_path, text);
        file.write()
            .map_err(|e| Error::write(&options.output_path, e))?;
        info!(
            path = %options.output_path.display(),
            entries = barrel.entries().len(),
            "wrote barrel"
        );
        Destination::Written(options.output_path.clone())
    } else {
        Destination::Returned(text)
    };

    Ok(BuildOutcome {
        entries: barrel.entries,
        warnings,
        destination,
    })
}

/// Directory the barrel's import specifiers are relative to: the parent of
/// `output_path`, or the working directory when it has none.
fn import_base(output_path: &Path) -> Result<PathBuf> {
    let dir = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    dir.absolutize()
        .map(|p| p.into_owned())
        .map_err(|e| Error::resolve(dir, e))
}

fn import_path(base: &Path, file: &Path) -> Result<String> {
    let absolute = file.absolutize().map_err(|e| Error::resolve(file, e))?;
    let relative = pathdiff::diff_paths(&absolute, base).unwrap_or_else(|| absolute.into_owned());
    Ok(format!("./{}", to_forward_slashes(&relative)))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tracing_test::traced_test;

    use super::*;

    fn entry(name: &str, path: &str) -> BarrelEntry {
        BarrelEntry {
            path: PathBuf::from(path),
            import_name: name.to_string(),
            import_path: format!("./{path}"),
        }
    }

    #[test]
    fn test_render_empty_array() {
        let barrel = Barrel::new(Vec::new(), None);
        assert_eq!(barrel.render(), "\nexport default []");
    }

    #[test]
    fn test_render_empty_object() {
        let barrel = Barrel::new(Vec::new(), Some("id".to_string()));
        assert_eq!(barrel.render(), "\nexport default {}");
    }

    #[test]
    fn test_render_array() {
        let barrel = Barrel::new(vec![entry("A", "a.js"), entry("B", "b.js")], None);
        assert_eq!(
            barrel.render(),
            "import A from \"./a.js\"\nimport B from \"./b.js\"\n\nexport default [\n    A,\n    B\n]"
        );
    }

    #[test]
    fn test_render_keyed_object() {
        let barrel = Barrel::new(
            vec![entry("A", "a.js"), entry("B", "b.js")],
            Some("id".to_string()),
        );
        assert_eq!(
            barrel.render(),
            "import A from \"./a.js\"\nimport B from \"./b.js\"\n\nexport default {\n    [A.id]: A,\n    [B.id]: B\n}"
        );
    }

    #[test]
    fn test_render_keeps_colliding_names() {
        let barrel = Barrel::new(vec![entry("AB", "a/b.js"), entry("AB", "a-b.js")], None);
        let code = barrel.render();
        assert_eq!(code.matches("import AB from").count(), 2);
    }

    #[test]
    fn test_check_duplicates() {
        let ok = Barrel::new(vec![entry("A", "a.js"), entry("B", "b.js")], None);
        assert!(ok.check_duplicates().is_ok());

        let dup = Barrel::new(vec![entry("AB", "a/b.js"), entry("AB", "a-b.js")], None);
        match *dup.check_duplicates().unwrap_err() {
            Error::DuplicateImportName {
                name,
                first,
                second,
            } => {
                assert_eq!(name, "AB");
                assert_eq!(first, "a/b.js");
                assert_eq!(second, "a-b.js");
            }
            other => panic!("Expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_warnings() {
        let barrel = Barrel::new(
            vec![
                entry("A", "a.js"),
                entry("", "Makefile"),
                entry("1st", "1st.js"),
                entry("A", "A.js"),
            ],
            None,
        );
        let warnings = barrel.warnings();
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("empty import name"));
        assert!(warnings[1].contains("not a valid identifier"));
        assert!(warnings[2].contains("both import as 'A'"));
    }

    #[test]
    fn test_import_base_defaults_to_working_directory() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(import_base(Path::new("")).unwrap(), cwd);
        assert_eq!(import_base(Path::new("barrel.js")).unwrap(), cwd);
        assert_eq!(import_base(Path::new("out/barrel.js")).unwrap(), cwd.join("out"));
    }

    #[cfg(unix)]
    #[test]
    fn test_import_path_is_relative_with_forward_slashes() {
        let base = PathBuf::from("/project/src");
        assert_eq!(
            import_path(&base, Path::new("/project/src/defs/a.js")).unwrap(),
            "./defs/a.js"
        );
        assert_eq!(
            import_path(&base, Path::new("/project/defs/a.js")).unwrap(),
            "./../defs/a.js"
        );
    }

    #[traced_test]
    #[test]
    fn test_build_logs_name_warnings() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        fs::write(temp.path().join("a").join("b.js"), "").unwrap();
        fs::write(temp.path().join("a-b.js"), "").unwrap();
        fs::write(temp.path().join("Makefile"), "").unwrap();

        let options = BarrelOptions::new(DiscoveryOptions::new(temp.path()).recursive(true));
        let outcome = build(&options).unwrap();

        assert_eq!(outcome.warnings.len(), 2);
        assert!(logs_contain("WARN"));
        assert!(logs_contain("both import as 'AB'"));
        assert!(logs_contain("produces an empty import name"));
    }
}

//! Meta definition file discovery.
//!
//! Entries of a directory are visited sorted by file name. With
//! `recursive`, a subdirectory's matches are spliced in where the
//! subdirectory itself sorts, giving a depth-first, per-directory order.

use std::{
    io,
    path::{Path, PathBuf},
};

use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Which file names discovery keeps.
///
/// When `pattern` is set it decides alone; `prefix` and `suffix` are ignored.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub prefix: String,
    pub suffix: String,
    pub pattern: Option<Regex>,
}

impl FilterSpec {
    /// Keep file names that start with `prefix`.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Keep file names that end with `suffix`.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Keep file names matched anywhere by `pattern`.
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Check a file's base name against the filter.
    pub fn matches(&self, file_name: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(file_name),
            None => file_name.starts_with(&self.prefix) && file_name.ends_with(&self.suffix),
        }
    }
}

/// Where and how to look for meta definition files.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    pub directory: PathBuf,
    pub filter: FilterSpec,
    pub recursive: bool,
}

impl DiscoveryOptions {
    /// Match every file directly inside `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            filter: FilterSpec::default(),
            recursive: false,
        }
    }

    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filter = filter;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Find the files matching `options.filter`.
///
/// Returned paths are `directory` joined with the path below it. Symbolic
/// links are not followed and count as files. Any directory that cannot be
/// listed fails the whole search.
pub fn find_meta_files(options: &DiscoveryOptions) -> Result<Vec<PathBuf>> {
    let root = options.directory.as_path();
    let max_depth = if options.recursive { usize::MAX } else { 1 };

    let walker = WalkDir::new(root)
        .follow_links(false)
        .max_depth(max_depth)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| walk_error(root, e))?;

        if entry.depth() == 0 {
            if !entry.file_type().is_dir() {
                return Err(Error::discovery(
                    root,
                    io::Error::from(io::ErrorKind::NotADirectory),
                ));
            }
            continue;
        }

        if entry.file_type().is_dir() {
            continue;
        }

        if options.filter.matches(&entry.file_name().to_string_lossy()) {
            debug!(path = %entry.path().display(), "found meta definition file");
            files.push(entry.into_path());
        }
    }

    debug!(
        directory = %root.display(),
        count = files.len(),
        recursive = options.recursive,
        "discovery finished"
    );
    Ok(files)
}

fn walk_error(root: &Path, err: walkdir::Error) -> Box<Error> {
    let path = err.path().unwrap_or(root).to_path_buf();
    Error::discovery(path, io::Error::from(err))
}

use std::{
    io,
    path::{Path, PathBuf},
};

/// Overwrite `path` with `content`.
///
/// The parent directory must already exist.
fn write_file(path: &Path, content: &str) -> io::Result<()> {
    std::fs::write(path, content)
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, replacing whatever is on disk.
    pub fn write(&self) -> io::Result<()> {
        write_file(&self.path, &self.content)
    }
}

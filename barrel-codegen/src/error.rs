use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for barrel generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read directory '{path}'")]
    #[diagnostic(
        code(barrel::discovery),
        help("check that --directory points to an existing, readable directory")
    )]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to resolve '{path}' against the working directory")]
    #[diagnostic(code(barrel::resolve))]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write barrel to '{path}'")]
    #[diagnostic(
        code(barrel::write),
        help("make sure the parent directory of --outputPath exists and is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("import name '{name}' is derived from more than one file")]
    #[diagnostic(
        code(barrel::duplicate_import),
        help("rename either '{first}' or '{second}' so their import names differ")
    )]
    DuplicateImportName {
        name: String,
        first: String,
        second: String,
    },
}

impl Error {
    pub(crate) fn discovery(path: impl Into<PathBuf>, source: io::Error) -> Box<Self> {
        Box::new(Self::Discovery {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn resolve(path: impl Into<PathBuf>, source: io::Error) -> Box<Self> {
        Box::new(Self::Resolve {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Box<Self> {
        Box::new(Self::Write {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_error_message() {
        let err = Error::discovery(
            "defs",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "failed to read directory 'defs'");
        assert!(std::error::Error::source(&*err).is_some());
    }

    #[test]
    fn test_duplicate_error_code() {
        let err = Error::DuplicateImportName {
            name: "AB".to_string(),
            first: "a/b.js".to_string(),
            second: "a-b.js".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("barrel::duplicate_import".to_string())
        );
        assert_eq!(
            err.to_string(),
            "import name 'AB' is derived from more than one file"
        );
    }
}

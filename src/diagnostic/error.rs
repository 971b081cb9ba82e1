//! Build error type.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for token stylesheet builds.
///
/// The conversion core itself is total: malformed substructure is skipped,
/// never raised. The only failures a caller can observe come from the driver
/// layer, reading a source file or parsing it as JSON.
///
/// # Example
///
/// ```ignore
/// match build_stylesheets(path) {
///     Ok(result) => { /* success */ }
///     Err(BuildError::Parse { path, source }) => {
///         eprintln!("bad token document {path:?}: {source}");
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum BuildError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source was not valid JSON.
    #[error("invalid token document: {source}")]
    Parse {
        /// Source file path, when the document came from disk.
        path: Option<PathBuf>,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl BuildError {
    /// Create a parse error for an in-memory document.
    pub fn parse(source: serde_json::Error) -> Self {
        Self::Parse { path: None, source }
    }

    /// Create a parse error for a document read from `path`.
    pub fn parse_at(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: Some(path.into()),
            source,
        }
    }

    /// Get the source file path if this error is tied to one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Parse { path, .. } => path.as_deref(),
            Self::Io(_) => None,
        }
    }
}

//! High-level build API for token documents.
//!
//! This module provides convenient functions for the read-transform-write
//! workflow around the conversion core.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tokens_css::build_stylesheets;
//!
//! let result = build_stylesheets(Path::new("tokens.json"))?;
//! std::fs::write("tokens.css", &result.tokens_css)?;
//! std::fs::write("typography.css", &result.utilities_css)?;
//!
//! // Surface lint findings (never fatal)
//! if !result.diagnostics.is_empty() {
//!     eprintln!("{}", result.diagnostics);
//! }
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::css::{generate_css_from_tokens, generate_typography_utilities};
use crate::diagnostic::{lint_tokens, BuildError, Diagnostics};

// =============================================================================
// Result Types
// =============================================================================

/// Result of building both stylesheets from a token document.
#[derive(Debug)]
pub struct BuildResult {
    /// The custom-property stylesheet (`:root`, theme and responsive blocks).
    pub tokens_css: String,
    /// The utility-class stylesheet referencing those properties.
    pub utilities_css: String,
    /// Advisory lint findings; never fatal.
    pub diagnostics: Diagnostics,
}

// =============================================================================
// Build Functions
// =============================================================================

/// Build both stylesheets from a token document on disk.
///
/// This is the simplest API for turning a token file into CSS text.
///
/// # Arguments
///
/// * `path` - Path to the JSON token document
///
/// # Errors
///
/// Fails only on unreadable files or invalid JSON; a well-formed document of
/// any shape converts without error.
pub fn build_stylesheets(path: &Path) -> Result<BuildResult, BuildError> {
    let raw = fs::read_to_string(path)?;
    let tokens: JsonValue =
        serde_json::from_str(&raw).map_err(|source| BuildError::parse_at(path, source))?;
    Ok(build_stylesheets_from_value(&tokens))
}

/// Build both stylesheets from in-memory JSON text.
pub fn build_stylesheets_from_str(json: &str) -> Result<BuildResult, BuildError> {
    let tokens: JsonValue = serde_json::from_str(json).map_err(BuildError::parse)?;
    Ok(build_stylesheets_from_value(&tokens))
}

/// Build both stylesheets from a parsed token document.
///
/// Infallible: the converters are total over any JSON value.
pub fn build_stylesheets_from_value(tokens: &JsonValue) -> BuildResult {
    BuildResult {
        tokens_css: generate_css_from_tokens(tokens),
        utilities_css: generate_typography_utilities(tokens),
        diagnostics: lint_tokens(tokens),
    }
}

/// Build from `source` and write both artifacts to disk.
///
/// Each artifact is written once, as UTF-8 text. Returns the build result so
/// callers can still inspect diagnostics.
pub fn write_stylesheets(
    source: &Path,
    tokens_out: &Path,
    utilities_out: &Path,
) -> Result<BuildResult, BuildError> {
    let result = build_stylesheets(source)?;
    fs::write(tokens_out, &result.tokens_css)?;
    fs::write(utilities_out, &result.utilities_css)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_sample(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("tokens.json");
        let document = json!({
            "font": {"weight": {"bold": "bold"}},
            "desktop": {"text": {"lg": {"bold": {"fontSize": "24px"}}}},
            "sm": "{unit.8}",
            "unit": {"8": 8},
            "light": {"background": {"Primary": {"value": "#fff"}}}
        });
        fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_build_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = build_stylesheets(&write_sample(dir.path())).unwrap();
        assert!(result.tokens_css.contains("--font-weight-bold: 700;"));
        assert!(result.utilities_css.contains(".text-lg-bold {"));
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_parse_failure_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        let err = build_stylesheets(&path).unwrap_err();
        assert_eq!(err.path(), Some(path.as_path()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = build_stylesheets(Path::new("/nonexistent/tokens.json")).unwrap_err();
        assert!(matches!(err, BuildError::Io(_)));
    }

    #[test]
    fn test_write_stylesheets_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_sample(dir.path());
        let tokens_out = dir.path().join("tokens.css");
        let utilities_out = dir.path().join("typography.css");

        let result = write_stylesheets(&source, &tokens_out, &utilities_out).unwrap();
        assert_eq!(fs::read_to_string(&tokens_out).unwrap(), result.tokens_css);
        assert_eq!(
            fs::read_to_string(&utilities_out).unwrap(),
            result.utilities_css
        );
    }

    #[test]
    fn test_build_from_value_is_infallible() {
        let result = build_stylesheets_from_value(&json!("not an object"));
        assert_eq!(result.tokens_css, ":root {\n}\n");
        assert!(result.utilities_css.is_empty());
    }
}

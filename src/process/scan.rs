//! Token document inspection without emission.
//!
//! [`scan_tokens`] answers "what is in this document" without generating any
//! CSS: category inventory, platform and theme coverage, every embedded
//! reference with its resolved form, and the same lint findings a build
//! would report.
//!
//! # Example
//!
//! ```ignore
//! use tokens_css::scan_file;
//!
//! let scan = scan_file(Path::new("tokens.json"))?;
//! println!("{} properties, {}", scan.property_count, scan.diagnostics.summary());
//! for reference in &scan.references {
//!     println!("{} -> {}", reference.path, reference.resolved);
//! }
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::convert::{PLATFORMS, THEMES};
use crate::diagnostic::{lint_tokens, BuildError, Diagnostics};
use crate::flatten::{flatten_tokens, for_each_string_value};
use crate::resolve::{mangle_reference_path, token_references};

/// One `{dotted.path}` reference found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenReference {
    /// The reference path as written, without braces.
    pub path: String,
    /// The `var(--...)` expression the resolver emits for it.
    pub resolved: String,
    /// Dotted path of the token value containing the reference.
    pub source: String,
}

/// Result of scanning a token document.
#[derive(Debug)]
pub struct ScanResult {
    /// Number of custom properties generic flattening would produce.
    pub property_count: usize,
    /// Top-level category keys, in document order.
    pub categories: Vec<String>,
    /// Platform buckets present in the document.
    pub platforms: Vec<String>,
    /// Theme buckets present in the document.
    pub themes: Vec<String>,
    /// Every reference embedded in a string value, in document order.
    pub references: Vec<TokenReference>,
    /// The lint findings for this document.
    pub diagnostics: Diagnostics,
}

/// Scan a parsed token document.
pub fn scan_tokens(tokens: &JsonValue) -> ScanResult {
    let categories = tokens
        .as_object()
        .map(|entries| entries.keys().cloned().collect())
        .unwrap_or_default();

    let platforms = PLATFORMS
        .into_iter()
        .filter(|platform| tokens.get(platform).is_some())
        .map(str::to_string)
        .collect();

    let themes = THEMES
        .into_iter()
        .filter(|theme| tokens.get(theme).is_some())
        .map(str::to_string)
        .collect();

    let mut references = Vec::new();
    for_each_string_value(tokens, |token_path, value| {
        for reference in token_references(value) {
            references.push(TokenReference {
                path: reference.to_string(),
                resolved: format!("var(--{})", mangle_reference_path(reference)),
                source: token_path.to_string(),
            });
        }
    });

    ScanResult {
        property_count: flatten_tokens(tokens).len(),
        categories,
        platforms,
        themes,
        references,
        diagnostics: lint_tokens(tokens),
    }
}

/// Scan a token document on disk.
///
/// # Errors
///
/// Fails on unreadable files or invalid JSON, like
/// [`build_stylesheets`](crate::build_stylesheets).
pub fn scan_file(path: &Path) -> Result<ScanResult, BuildError> {
    let raw = fs::read_to_string(path)?;
    let tokens: JsonValue =
        serde_json::from_str(&raw).map_err(|source| BuildError::parse_at(path, source))?;
    Ok(scan_tokens(&tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JsonValue {
        json!({
            "blue": {"500": "#2680eb"},
            "desktop": {"text": {"lg": {"bold": {"fontSize": "24px"}}}},
            "light": {"border": {"Focus": {"value": "{blue.500}"}}},
            "sm": "{unit.8}"
        })
    }

    #[test]
    fn test_inventory() {
        let scan = scan_tokens(&sample());
        assert_eq!(scan.categories, vec!["blue", "desktop", "light", "sm"]);
        assert_eq!(scan.platforms, vec!["desktop"]);
        assert_eq!(scan.themes, vec!["light"]);
        assert!(scan.property_count > 0);
    }

    #[test]
    fn test_reference_listing() {
        let scan = scan_tokens(&sample());
        assert_eq!(scan.references.len(), 2);
        let focus = &scan.references[0];
        assert_eq!(focus.path, "blue.500");
        assert_eq!(focus.resolved, "var(--color-blue-500)");
        assert_eq!(focus.source, "light.border.Focus.value");
        assert_eq!(scan.references[1].resolved, "var(--spacing-unit-8)");
    }

    #[test]
    fn test_scan_includes_lint_findings() {
        let scan = scan_tokens(&json!({
            "mobile": {"text": {"sm": {"r": {"fontSize": "14px"}}}},
            "ios": {"text": {"sm": {"r": {"fontSize": "13px"}}}}
        }));
        assert!(scan.diagnostics.has_warnings());
    }

    #[test]
    fn test_scan_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, serde_json::to_string(&sample()).unwrap()).unwrap();
        let scan = scan_file(&path).unwrap();
        assert_eq!(scan.themes, vec!["light"]);
    }
}

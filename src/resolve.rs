//! Token reference resolution.
//!
//! Token values may embed references to other tokens using `{dotted.path}`
//! placeholders:
//!
//! - `"{blue.500}"` becomes `"var(--color-blue-500)"`
//! - `"solid 1px {blue.500}"` becomes `"solid 1px var(--color-blue-500)"`
//!
//! Resolution is purely textual. The reference path is rewritten into a CSS
//! custom-property name by a fixed set of mangling rules; the document is
//! never consulted to check that the referenced token exists. Paths that
//! match no rule still produce a `var(--...)` expression via the fallback
//! join rule, so resolution never fails.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use serde_json::Value as JsonValue;

/// Color family names that receive a `color-` prefix when referenced.
///
/// A reference like `{blue.500}` addresses the `blue` palette at the document
/// root, but the emitted property lives under the `color` namespace, so the
/// mangled name becomes `color-blue-500`.
pub const COLOR_FAMILIES: [&str; 14] = [
    "primary", "orange", "brown", "amber", "yellow", "green", "cyan", "blue", "purple", "magenta",
    "pink", "red", "neutral", "brand",
];

fn color_family_set() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| COLOR_FAMILIES.iter().copied().collect())
}

/// Whether `name` is one of the enumerated color families.
pub fn is_color_family(name: &str) -> bool {
    color_family_set().contains(name)
}

/// Resolve references in a token value.
///
/// Strings have every `{dotted.path}` placeholder rewritten to a
/// `var(--...)` expression; any other value is returned unchanged.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tokens_css::resolve_token_value;
///
/// assert_eq!(
///     resolve_token_value(&json!("{unit.16}")),
///     json!("var(--spacing-unit-16)")
/// );
/// assert_eq!(resolve_token_value(&json!(42)), json!(42));
/// ```
pub fn resolve_token_value(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::String(s) => JsonValue::String(resolve_references(s)),
        other => other.clone(),
    }
}

/// Rewrite every `{dotted.path}` placeholder in a raw value string.
///
/// Text outside placeholders passes through unchanged, and each placeholder
/// resolves independently. An unclosed `{` or an empty `{}` is not a
/// reference and is kept literally.
pub fn resolve_references(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find('{') {
        let (before, after) = rest.split_at(start);
        out.push_str(before);

        match after[1..].find('}') {
            Some(end) => {
                let path = &after[1..1 + end];
                if path.is_empty() {
                    out.push_str("{}");
                } else {
                    out.push_str("var(--");
                    out.push_str(&mangle_reference_path(path));
                    out.push(')');
                }
                rest = &after[end + 2..];
            }
            None => {
                // No closing brace; keep the remainder as-is.
                out.push_str(after);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Mangle a dot-separated reference path into a custom-property name
/// (without the `--` prefix).
///
/// Rules, applied to the first path segment:
///
/// - `font` with more than two segments total is dropped, so leaf categories
///   keep their own namespace: `font.font-size.sm` → `font-size-sm`.
/// - `unit` becomes `spacing-unit`: `unit.16` → `spacing-unit-16`.
/// - A color family name gains a `color` prefix: `blue.500` → `color-blue-500`.
/// - Anything else joins as-is: `radius.md` → `radius-md`.
pub fn mangle_reference_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('.').collect();

    let joined = match segments.as_slice() {
        ["font", rest @ ..] if rest.len() > 1 => rest.join("-"),
        ["unit", rest @ ..] => {
            let mut parts = vec!["spacing-unit"];
            parts.extend_from_slice(rest);
            parts.join("-")
        }
        [head, ..] if is_color_family(head) => {
            let mut parts = vec!["color"];
            parts.extend_from_slice(&segments);
            parts.join("-")
        }
        _ => segments.join("-"),
    };

    css_ident(&joined)
}

/// List the reference paths embedded in a raw value string.
///
/// Returns the dot-separated paths in order of appearance, unmangled.
pub fn token_references(value: &str) -> Vec<&str> {
    let mut refs = Vec::new();
    let mut rest = value;

    while let Some(start) = rest.find('{') {
        let after = &rest[start..];
        match after[1..].find('}') {
            Some(end) => {
                let path = &after[1..1 + end];
                if !path.is_empty() {
                    refs.push(path);
                }
                rest = &after[end + 2..];
            }
            None => break,
        }
    }

    refs
}

/// Normalize a path fragment for use in a custom-property name.
///
/// Spaces become hyphens so that shade names like `"light blue"` yield valid
/// property names. Every emission path goes through this, which keeps one
/// logical token mapped to one property name everywhere.
pub(crate) fn css_ident(segment: &str) -> String {
    segment.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_font_leaf_reordering() {
        assert_eq!(
            resolve_references("{font.font-size.sm}"),
            "var(--font-size-sm)"
        );
        assert_eq!(resolve_references("{font.weight.bold}"), "var(--weight-bold)");
    }

    #[test]
    fn test_font_two_segments_kept() {
        // Only deeper paths drop the `font` head.
        assert_eq!(resolve_references("{font.primary}"), "var(--font-primary)");
    }

    #[test]
    fn test_unit_rewrite() {
        assert_eq!(resolve_references("{unit.16}"), "var(--spacing-unit-16)");
    }

    #[test]
    fn test_color_family_prefix() {
        assert_eq!(resolve_references("{blue.500}"), "var(--color-blue-500)");
        assert_eq!(resolve_references("{brand.hover}"), "var(--color-brand-hover)");
    }

    #[test]
    fn test_surrounding_text() {
        assert_eq!(
            resolve_references("solid 1px {blue.500}"),
            "solid 1px var(--color-blue-500)"
        );
    }

    #[test]
    fn test_multiple_references() {
        assert_eq!(
            resolve_references("{unit.4} {unit.8}"),
            "var(--spacing-unit-4) var(--spacing-unit-8)"
        );
    }

    #[test]
    fn test_unknown_path_fallback() {
        assert_eq!(resolve_references("{shadow.lg}"), "var(--shadow-lg)");
    }

    #[test]
    fn test_idempotent_once_resolved() {
        let resolved = resolve_references("solid 1px {blue.500}");
        assert_eq!(resolve_references(&resolved), resolved);
    }

    #[test]
    fn test_malformed_braces() {
        assert_eq!(resolve_references("open {unclosed"), "open {unclosed");
        assert_eq!(resolve_references("empty {} braces"), "empty {} braces");
        assert_eq!(resolve_references("}"), "}");
    }

    #[test]
    fn test_non_string_passthrough() {
        assert_eq!(resolve_token_value(&json!(16)), json!(16));
        assert_eq!(resolve_token_value(&json!(true)), json!(true));
        assert_eq!(resolve_token_value(&json!(null)), json!(null));
    }

    #[test]
    fn test_spaces_in_path() {
        assert_eq!(
            resolve_references("{neutral.light gray}"),
            "var(--color-neutral-light-gray)"
        );
    }

    #[test]
    fn test_token_references_listing() {
        assert_eq!(
            token_references("0 {unit.2} {blue.500} solid"),
            vec!["unit.2", "blue.500"]
        );
        assert!(token_references("no references").is_empty());
    }
}

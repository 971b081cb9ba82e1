//! Spacing token conversion.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::{display_value, leaf_value, resolved_leaf};
use crate::resolve::css_ident;

/// Semantic spacing sizes recognized at the document root, smallest first.
///
/// The full-document generator and the utility-class generator enumerate this
/// ramp explicitly instead of inferring it; sizes absent from a document are
/// skipped.
pub const SPACING_SIZES: [&str; 11] = [
    "none", "xxs", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl",
];

/// Convert spacing tokens into a custom-property map.
///
/// Expects a map with an optional `unit` sub-map (base measurements, emitted
/// as `--spacing-unit-{key}` verbatim) alongside semantic size keys, each
/// emitted as `--spacing-{key}` with references resolved.
pub fn convert_spacing_tokens(tokens: &JsonValue) -> IndexMap<String, String> {
    let mut props = IndexMap::new();
    let Some(entries) = tokens.as_object() else {
        return props;
    };

    for (key, value) in entries {
        if key == "unit" {
            let Some(units) = value.as_object() else {
                continue;
            };
            for (unit, measure) in units {
                if let Some(rendered) = display_value(leaf_value(measure)) {
                    props.insert(format!("--spacing-unit-{}", css_ident(unit)), rendered);
                }
            }
        } else if let Some(resolved) = resolved_leaf(value) {
            props.insert(format!("--spacing-{}", css_ident(key)), resolved);
        }
    }

    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unit_submap() {
        let props = convert_spacing_tokens(&json!({"unit": {"4": 4, "8": 8}}));
        assert_eq!(props["--spacing-unit-4"], "4");
        assert_eq!(props["--spacing-unit-8"], "8");
    }

    #[test]
    fn test_semantic_sizes_resolved() {
        let props = convert_spacing_tokens(&json!({
            "sm": "{unit.8}",
            "md": "16px"
        }));
        assert_eq!(props["--spacing-sm"], "var(--spacing-unit-8)");
        assert_eq!(props["--spacing-md"], "16px");
    }

    #[test]
    fn test_document_order_preserved() {
        let props = convert_spacing_tokens(&json!({"md": "16px", "unit": {"4": 4}, "sm": "8px"}));
        let names: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["--spacing-md", "--spacing-unit-4", "--spacing-sm"]);
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let props = convert_spacing_tokens(&json!({"unit": "flat", "sm": {"no": "leaf"}}));
        assert!(props.is_empty());
    }
}

//! Generic token-tree flattening.
//!
//! [`flatten_tokens`] walks a token document of arbitrary depth and produces
//! a flat mapping from CSS custom-property name to resolved value. A node is
//! terminal when it is a primitive or an object carrying a `$value` field;
//! every other object is a group and extends the property-name prefix.
//!
//! The returned map preserves the document's own key order, so emission
//! driven by it is deterministic for a given input.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::resolve::{css_ident, resolve_token_value};

/// Flat mapping from custom-property name to resolved token value.
///
/// Values keep their JSON type: strings are resolved through the reference
/// resolver, numbers and booleans pass through untouched.
pub type TokenMap = IndexMap<String, JsonValue>;

/// Flatten a token document into custom-property declarations.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tokens_css::flatten_tokens;
///
/// let tokens = json!({"radius": {"card": {"$value": "{unit.2}"}}});
/// let flat = flatten_tokens(&tokens);
/// assert_eq!(flat["--radius-card"], json!("var(--spacing-unit-2)"));
/// ```
pub fn flatten_tokens(tokens: &JsonValue) -> TokenMap {
    flatten_tokens_with_prefix(tokens, None)
}

/// Flatten a token subtree, prepending `prefix` to every property name.
pub fn flatten_tokens_with_prefix(tokens: &JsonValue, prefix: Option<&str>) -> TokenMap {
    let mut flat = TokenMap::new();
    let Some(entries) = tokens.as_object() else {
        return flat;
    };

    for (key, value) in entries {
        let path = match prefix {
            Some(prefix) => format!("{prefix}-{key}"),
            None => key.clone(),
        };

        match value.as_object() {
            // A `$value` leaf stops recursion at this node.
            Some(node) => match node.get("$value") {
                Some(raw) => {
                    flat.insert(property_name(&path), resolve_token_value(raw));
                }
                None => {
                    flat.extend(flatten_tokens_with_prefix(value, Some(&path)));
                }
            },
            None => {
                flat.insert(property_name(&path), resolve_token_value(value));
            }
        }
    }

    flat
}

fn property_name(path: &str) -> String {
    format!("--{}", css_ident(path))
}

/// Visit every string value in a token document.
///
/// The callback receives the dotted token path and the raw string. Used by
/// the lint and scan passes to locate embedded references without duplicating
/// the tree walk.
pub(crate) fn for_each_string_value(tokens: &JsonValue, mut visit: impl FnMut(&str, &str)) {
    fn walk(value: &JsonValue, path: &str, visit: &mut impl FnMut(&str, &str)) {
        match value {
            JsonValue::String(s) => visit(path, s),
            JsonValue::Object(entries) => {
                for (key, child) in entries {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    walk(child, &child_path, visit);
                }
            }
            _ => {}
        }
    }

    walk(tokens, "", &mut visit);
}

//! Category-specific token converters.
//!
//! Where [`flatten_tokens`](crate::flatten_tokens) treats the document as a
//! uniform tree, the converters here know the shape of one category each and
//! emit its custom-property map directly:
//!
//! - [`convert_typography_tokens`] - font families, weights, platform type scales
//! - [`convert_color_tokens`] - palette families and theme-scoped semantic colors
//! - [`convert_spacing_tokens`] - spacing ramp and base units
//!
//! All converters are best-effort. Substructure that does not match the
//! expected shape is skipped without error.

mod color;
mod spacing;
mod typography;

pub use color::convert_color_tokens;
pub use spacing::{convert_spacing_tokens, SPACING_SIZES};
pub use typography::convert_typography_tokens;

pub(crate) use typography::{for_each_scale_entry, SCALE_PROPS};

use serde_json::Value as JsonValue;

use crate::resolve::resolve_references;

/// Platform buckets that carry a type scale, in emission order.
pub const PLATFORMS: [&str; 4] = ["desktop", "mobile", "ios", "android"];

/// Platforms whose type scale feeds the responsive override block.
///
/// Overrides are emitted in this order and write the same unprefixed
/// property names, so the last bucket present in the document wins.
pub const MOBILE_PLATFORMS: [&str; 3] = ["mobile", "ios", "android"];

/// Theme buckets, in emission order. `light` is the default theme.
pub const THEMES: [&str; 3] = ["light", "dark", "black"];

/// Unwrap a `{value: ...}` leaf object; other values pass through.
pub(crate) fn leaf_value(value: &JsonValue) -> &JsonValue {
    value.get("value").unwrap_or(value)
}

/// Render a primitive token value as CSS text.
///
/// Objects and arrays have no text form and are skipped by the emitters.
pub(crate) fn display_value(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Unwrap a leaf, render it, and resolve embedded references.
pub(crate) fn resolved_leaf(value: &JsonValue) -> Option<String> {
    display_value(leaf_value(value)).map(|raw| resolve_references(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_value_unwrapping() {
        assert_eq!(leaf_value(&json!({"value": "#fff"})), &json!("#fff"));
        assert_eq!(leaf_value(&json!("#fff")), &json!("#fff"));
        assert_eq!(leaf_value(&json!(12)), &json!(12));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("4px")), Some("4px".to_string()));
        assert_eq!(display_value(&json!(16)), Some("16".to_string()));
        assert_eq!(display_value(&json!({"nested": true})), None);
        assert_eq!(display_value(&json!(null)), None);
    }

    #[test]
    fn test_resolved_leaf() {
        assert_eq!(
            resolved_leaf(&json!({"value": "{blue.500}"})),
            Some("var(--color-blue-500)".to_string())
        );
    }
}

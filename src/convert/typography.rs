//! Typography token conversion.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::{resolved_leaf, PLATFORMS};
use crate::resolve::css_ident;

/// Type-scale sub-properties, paired with their CSS property names.
pub(crate) const SCALE_PROPS: [(&str, &str); 4] = [
    ("fontSize", "font-size"),
    ("lineHeight", "line-height"),
    ("letterSpacing", "letter-spacing"),
    ("fontWeight", "font-weight"),
];

/// Convert typography tokens into a custom-property map.
///
/// Expects a map with optional `family` and `weight` maps plus optional
/// platform buckets (`desktop`, `mobile`, `ios`, `android`), each carrying a
/// `text` scale map of the form `scale.variant.{fontSize, lineHeight,
/// letterSpacing, fontWeight}`.
///
/// Families and weights emit `--font-family-{key}` / `--font-weight-{key}`.
/// Scale entries emit `--typography-{platform}-{scale}-{variant}-{property}`;
/// the `desktop` bucket additionally emits the unprefixed
/// `--typography-{scale}-{variant}-{property}` defaults that the other
/// platforms override responsively.
pub fn convert_typography_tokens(tokens: &JsonValue) -> IndexMap<String, String> {
    let mut props = IndexMap::new();

    if let Some(families) = tokens.get("family").and_then(JsonValue::as_object) {
        for (key, value) in families {
            if let Some(resolved) = resolved_leaf(value) {
                props.insert(format!("--font-family-{}", css_ident(key)), resolved);
            }
        }
    }

    if let Some(weights) = tokens.get("weight").and_then(JsonValue::as_object) {
        for (key, value) in weights {
            if let Some(resolved) = resolved_leaf(value) {
                props.insert(format!("--font-weight-{}", css_ident(key)), resolved);
            }
        }
    }

    for platform in PLATFORMS {
        let Some(text) = tokens.get(platform).and_then(|bucket| bucket.get("text")) else {
            continue;
        };
        for_each_scale_entry(text, |scale, variant, property, value| {
            if let Some(resolved) = resolved_leaf(value) {
                let tail = format!("{}-{}-{property}", css_ident(scale), css_ident(variant));
                props.insert(format!("--typography-{platform}-{tail}"), resolved.clone());
                if platform == "desktop" {
                    props.insert(format!("--typography-{tail}"), resolved);
                }
            }
        });
    }

    props
}

/// Visit each `scale.variant.property` entry of a `text` scale map.
///
/// Entries that do not follow the two-level object shape are skipped.
pub(crate) fn for_each_scale_entry(
    text: &JsonValue,
    mut visit: impl FnMut(&str, &str, &str, &JsonValue),
) {
    let Some(scales) = text.as_object() else {
        return;
    };
    for (scale, variants) in scales {
        let Some(variants) = variants.as_object() else {
            continue;
        };
        for (variant, entry) in variants {
            let Some(entry) = entry.as_object() else {
                continue;
            };
            for (json_key, css_property) in SCALE_PROPS {
                if let Some(value) = entry.get(json_key) {
                    visit(scale, variant, css_property, value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JsonValue {
        json!({
            "family": {"primary": "Inter, sans-serif", "mono": "JetBrains Mono"},
            "weight": {"regular": "400", "bold": "700"},
            "desktop": {
                "text": {
                    "lg": {
                        "bold": {
                            "fontSize": "24px",
                            "lineHeight": "32px",
                            "letterSpacing": "-0.01em",
                            "fontWeight": "{font.weight.bold}"
                        }
                    }
                }
            },
            "mobile": {
                "text": {
                    "lg": {"bold": {"fontSize": "20px"}}
                }
            }
        })
    }

    #[test]
    fn test_family_and_weight_properties() {
        let props = convert_typography_tokens(&sample());
        assert_eq!(props["--font-family-primary"], "Inter, sans-serif");
        assert_eq!(props["--font-weight-bold"], "700");
    }

    #[test]
    fn test_platform_scale_properties() {
        let props = convert_typography_tokens(&sample());
        assert_eq!(props["--typography-desktop-lg-bold-font-size"], "24px");
        assert_eq!(props["--typography-mobile-lg-bold-font-size"], "20px");
    }

    #[test]
    fn test_desktop_default_alias() {
        let props = convert_typography_tokens(&sample());
        // Desktop aliases to the unprefixed default; mobile stays prefixed.
        assert_eq!(props["--typography-lg-bold-font-size"], "24px");
    }

    #[test]
    fn test_references_resolved_in_scales() {
        let props = convert_typography_tokens(&sample());
        assert_eq!(
            props["--typography-lg-bold-font-weight"],
            "var(--weight-bold)"
        );
    }

    #[test]
    fn test_missing_buckets_skipped() {
        let props = convert_typography_tokens(&json!({"weight": {"bold": "700"}}));
        assert_eq!(props.len(), 1);

        // A platform without `text`, and scale entries that are not objects.
        let props = convert_typography_tokens(&json!({
            "desktop": {"grid": 8},
            "ios": {"text": {"sm": "not-a-map"}}
        }));
        assert!(props.is_empty());
    }
}

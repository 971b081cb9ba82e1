//! Color token conversion.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::{resolved_leaf, THEMES};
use crate::resolve::css_ident;

/// Convert color tokens into a custom-property map.
///
/// Expects a map whose non-theme keys are palette families (each a map of
/// shade name to value) and whose `light` / `dark` / `black` keys are theme
/// buckets of semantic colors grouped by category.
///
/// Families emit `--color-{family}-{shade}`. Theme buckets emit
/// `--color-{theme}-{category}-{key}`; the `light` bucket additionally emits
/// the unprefixed `--color-{category}-{key}` defaults, since light is the
/// active theme when no `data-theme` attribute is set.
pub fn convert_color_tokens(tokens: &JsonValue) -> IndexMap<String, String> {
    let mut props = IndexMap::new();
    let Some(entries) = tokens.as_object() else {
        return props;
    };

    for (family, shades) in entries {
        if THEMES.contains(&family.as_str()) {
            continue;
        }
        let Some(shades) = shades.as_object() else {
            continue;
        };
        for (shade, value) in shades {
            if let Some(resolved) = resolved_leaf(value) {
                props.insert(
                    format!("--color-{}-{}", css_ident(family), css_ident(shade)),
                    resolved,
                );
            }
        }
    }

    for theme in THEMES {
        let Some(categories) = entries.get(theme).and_then(JsonValue::as_object) else {
            continue;
        };
        for (category, semantic) in categories {
            let Some(semantic) = semantic.as_object() else {
                continue;
            };
            for (key, value) in semantic {
                let Some(resolved) = resolved_leaf(value) else {
                    continue;
                };
                let tail = format!("{}-{}", css_ident(category), css_ident(key));
                props.insert(format!("--color-{theme}-{tail}"), resolved.clone());
                if theme == "light" {
                    props.insert(format!("--color-{tail}"), resolved);
                }
            }
        }
    }

    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JsonValue {
        json!({
            "blue": {"500": "#2680eb", "600": "#1473e6"},
            "neutral": {"light gray": "#f4f4f4"},
            "light": {
                "background": {"Primary": {"value": "#ffffff"}},
                "border": {"Focus": {"value": "{blue.500}"}}
            },
            "dark": {
                "background": {"Primary": {"value": "#1a1a1a"}}
            }
        })
    }

    #[test]
    fn test_palette_families() {
        let props = convert_color_tokens(&sample());
        assert_eq!(props["--color-blue-500"], "#2680eb");
        assert_eq!(props["--color-neutral-light-gray"], "#f4f4f4");
    }

    #[test]
    fn test_theme_scoped_properties() {
        let props = convert_color_tokens(&sample());
        assert_eq!(props["--color-light-background-Primary"], "#ffffff");
        assert_eq!(props["--color-dark-background-Primary"], "#1a1a1a");
    }

    #[test]
    fn test_light_default_alias() {
        let props = convert_color_tokens(&sample());
        assert_eq!(props["--color-background-Primary"], "#ffffff");
        // Dark does not alias to the unprefixed defaults.
        assert!(!props.contains_key("--color-background-Primary-dark"));
    }

    #[test]
    fn test_references_resolved() {
        let props = convert_color_tokens(&sample());
        assert_eq!(props["--color-border-Focus"], "var(--color-blue-500)");
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let props = convert_color_tokens(&json!({
            "blue": "not-a-map",
            "light": {"background": {"Primary": {"unexpected": true}}}
        }));
        assert!(props.is_empty());
    }
}

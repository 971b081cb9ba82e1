//! Utility-class stylesheet generation.
//!
//! Companion artifact to the custom-property stylesheet: one class per
//! typography scale, font family, font weight, and spacing size. Every
//! declaration references a `var(--...)` from the property stylesheet, so
//! the two artifacts are meant to be loaded together; no literal lengths are
//! embedded here.

use serde_json::Value as JsonValue;

use super::writer::RuleBuilder;
use crate::convert::{SCALE_PROPS, SPACING_SIZES};
use crate::resolve::css_ident;

/// Box properties targeted by each spacing utility class prefix.
const SPACING_UTILITIES: [(&str, &[&str]); 7] = [
    ("spacing", &["gap"]),
    ("p", &["padding"]),
    ("px", &["padding-left", "padding-right"]),
    ("py", &["padding-top", "padding-bottom"]),
    ("m", &["margin"]),
    ("mx", &["margin-left", "margin-right"]),
    ("my", &["margin-top", "margin-bottom"]),
];

/// Generate the utility-class stylesheet for a complete token document.
///
/// Emits `.text-{scale}-{variant}` classes for the default (desktop) type
/// scale, `.font-{weight}` and `.font-{family}` classes, and the spacing
/// class families (`.spacing-*`, `.p-*`, `.px-*`, `.py-*`, `.m-*`, `.mx-*`,
/// `.my-*`) for every spacing size present at the document root.
pub fn generate_typography_utilities(tokens: &JsonValue) -> String {
    let mut rules = Vec::new();

    if let Some(scales) = tokens
        .get("desktop")
        .and_then(|bucket| bucket.get("text"))
        .and_then(JsonValue::as_object)
    {
        for (scale, variants) in scales {
            let Some(variants) = variants.as_object() else {
                continue;
            };
            for (variant, entry) in variants {
                if !entry.is_object() {
                    continue;
                }
                let tail = format!("{}-{}", css_ident(scale), css_ident(variant));
                let mut rule = RuleBuilder::new(format!(".text-{tail}"));
                for (_, property) in SCALE_PROPS {
                    rule = rule.decl(property, format!("var(--typography-{tail}-{property})"));
                }
                rules.push(rule.build());
            }
        }
    }

    if let Some(weights) = font_submap(tokens, "weight") {
        for key in weights.keys() {
            let key = css_ident(key);
            rules.push(
                RuleBuilder::new(format!(".font-{key}"))
                    .decl("font-weight", format!("var(--font-weight-{key})"))
                    .build(),
            );
        }
    }

    if let Some(families) = font_submap(tokens, "family") {
        for key in families.keys() {
            let key = css_ident(key);
            rules.push(
                RuleBuilder::new(format!(".font-{key}"))
                    .decl("font-family", format!("var(--font-family-{key})"))
                    .build(),
            );
        }
    }

    for size in SPACING_SIZES {
        if tokens.get(size).is_none() {
            continue;
        }
        let reference = format!("var(--spacing-{size})");
        for (prefix, properties) in SPACING_UTILITIES {
            let mut rule = RuleBuilder::new(format!(".{prefix}-{size}"));
            for &property in properties {
                rule = rule.decl(property, &reference);
            }
            rules.push(rule.build());
        }
    }

    rules.join("\n")
}

fn font_submap<'a>(
    tokens: &'a JsonValue,
    key: &str,
) -> Option<&'a serde_json::Map<String, JsonValue>> {
    tokens
        .get("font")
        .and_then(|font| font.get(key))
        .and_then(JsonValue::as_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JsonValue {
        json!({
            "font": {
                "family": {"primary": "Inter, sans-serif"},
                "weight": {"bold": "bold"}
            },
            "desktop": {
                "text": {"lg": {"bold": {"fontSize": "24px"}}}
            },
            "sm": "{unit.8}"
        })
    }

    #[test]
    fn test_text_classes_reference_defaults() {
        let css = generate_typography_utilities(&sample());
        assert!(css.contains(".text-lg-bold {"));
        assert!(css.contains("  font-size: var(--typography-lg-bold-font-size);"));
        assert!(css.contains("  font-weight: var(--typography-lg-bold-font-weight);"));
    }

    #[test]
    fn test_font_classes() {
        let css = generate_typography_utilities(&sample());
        assert!(css.contains(".font-bold {\n  font-weight: var(--font-weight-bold);\n}"));
        assert!(css.contains(".font-primary {\n  font-family: var(--font-family-primary);\n}"));
    }

    #[test]
    fn test_spacing_class_family() {
        let css = generate_typography_utilities(&sample());
        assert!(css.contains(".spacing-sm {\n  gap: var(--spacing-sm);\n}"));
        assert!(css.contains(".p-sm {\n  padding: var(--spacing-sm);\n}"));
        assert!(css.contains(
            ".px-sm {\n  padding-left: var(--spacing-sm);\n  padding-right: var(--spacing-sm);\n}"
        ));
        assert!(css.contains(
            ".my-sm {\n  margin-top: var(--spacing-sm);\n  margin-bottom: var(--spacing-sm);\n}"
        ));
    }

    #[test]
    fn test_no_literal_lengths() {
        let css = generate_typography_utilities(&sample());
        for line in css.lines() {
            if line.contains(':') {
                assert!(line.contains("var(--"), "literal value in: {line}");
            }
        }
    }

    #[test]
    fn test_absent_sizes_skipped() {
        let css = generate_typography_utilities(&sample());
        assert!(!css.contains(".p-xl"));
    }
}

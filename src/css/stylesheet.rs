//! Full-document stylesheet generation.
//!
//! [`generate_css_from_tokens`] compiles a complete token document into one
//! CSS text blob:
//!
//! - a `:root` block carrying every custom property, with the `light` theme
//!   and the `desktop` type scale doubled into unprefixed defaults
//! - one `[data-theme="..."]` block per additional theme bucket present
//! - one `@media (max-width: ...)` block per mobile-like platform that
//!   defines a type scale, overriding the unprefixed typography defaults
//!
//! Output is deterministic for a given document: sections run in a fixed
//! order and each section follows the document's own key order.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde_json::Value as JsonValue;

use super::writer::{custom_property, format_block, media_block};
use crate::config;
use crate::convert::{
    display_value, for_each_scale_entry, leaf_value, resolved_leaf, MOBILE_PLATFORMS, PLATFORMS,
};
use crate::resolve::{css_ident, resolve_references, COLOR_FAMILIES};

/// Named font weights translated to their numeric CSS values.
/// Unrecognized names fall back to the literal token value.
fn named_weights() -> &'static FxHashMap<&'static str, &'static str> {
    static WEIGHTS: OnceLock<FxHashMap<&'static str, &'static str>> = OnceLock::new();
    WEIGHTS.get_or_init(|| {
        FxHashMap::from_iter([
            ("regular", "400"),
            ("medium", "500"),
            ("semi-bold", "600"),
            ("bold", "700"),
            ("black", "900"),
        ])
    })
}

/// Generate the custom-property stylesheet for a complete token document.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tokens_css::generate_css_from_tokens;
///
/// let tokens = json!({
///     "font": {"font-size": {"sm": "12"}},
///     "light": {"background": {"Primary": {"value": "#fff"}}}
/// });
/// let css = generate_css_from_tokens(&tokens);
/// assert!(css.contains("--font-size-sm: 12px;"));
/// assert!(css.contains("--color-background-Primary: #fff;"));
/// ```
pub fn generate_css_from_tokens(tokens: &JsonValue) -> String {
    let config = config::get();
    let mut sheet = String::new();

    // ======================================================================
    // :root
    // ======================================================================
    let mut root = Vec::new();
    push_font_families(tokens, &mut root);
    push_font_weights(tokens, &mut root);
    push_font_sizes(tokens, &mut root);
    push_font_metric(tokens, "line-height", &mut root);
    push_font_metric(tokens, "letter-spacing", &mut root);
    push_platform_scales(tokens, &mut root);
    push_color_palettes(tokens, &mut root);
    push_spacing(tokens, &mut root);
    push_category(tokens, "radius", &mut root);
    push_category(tokens, "width", &mut root);
    if let Some(bucket) = tokens.get("light").and_then(JsonValue::as_object) {
        push_theme_colors(bucket, Some("light"), &mut root);
    }
    sheet.push_str(&format_block(":root", &root));

    // ======================================================================
    // Theme overrides
    // ======================================================================
    for theme in ["dark", "black"] {
        let Some(bucket) = tokens.get(theme).and_then(JsonValue::as_object) else {
            continue;
        };
        let mut lines = Vec::new();
        push_theme_colors(bucket, None, &mut lines);
        let selector = format!("[{}=\"{theme}\"]", config.theme_attribute);
        sheet.push('\n');
        sheet.push_str(&format_block(&selector, &lines));
    }

    // ======================================================================
    // Responsive typography
    // ======================================================================
    // Each platform writes the same unprefixed property names; emitting the
    // blocks in a fixed order means the last platform present wins.
    for platform in MOBILE_PLATFORMS {
        let Some(text) = tokens.get(platform).and_then(|bucket| bucket.get("text")) else {
            continue;
        };
        if !text.is_object() {
            continue;
        }
        let mut lines = Vec::new();
        for_each_scale_entry(text, |scale, variant, property, value| {
            if let Some(resolved) = resolved_leaf(value) {
                let name = format!(
                    "--typography-{}-{}-{property}",
                    css_ident(scale),
                    css_ident(variant)
                );
                lines.push(custom_property(&name, &resolved));
            }
        });
        let query = format!("max-width: {}", config.mobile_breakpoint);
        sheet.push('\n');
        sheet.push_str(&media_block(&query, &format_block(":root", &lines)));
    }

    sheet
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

fn push_font_families(tokens: &JsonValue, lines: &mut Vec<String>) {
    let Some(families) = font_submap(tokens, "family") else {
        return;
    };
    for (key, value) in families {
        if let Some(resolved) = resolved_leaf(value) {
            lines.push(custom_property(
                &format!("--font-family-{}", css_ident(key)),
                &resolved,
            ));
        }
    }
}

fn push_font_weights(tokens: &JsonValue, lines: &mut Vec<String>) {
    let Some(weights) = font_submap(tokens, "weight") else {
        return;
    };
    for (key, value) in weights {
        let Some(raw) = display_value(leaf_value(value)) else {
            continue;
        };
        let value: &str = match named_weights().get(raw.as_str()) {
            Some(numeric) => numeric,
            None => raw.as_str(),
        };
        lines.push(custom_property(
            &format!("--font-weight-{}", css_ident(key)),
            value,
        ));
    }
}

fn push_font_sizes(tokens: &JsonValue, lines: &mut Vec<String>) {
    let Some(sizes) = font_submap(tokens, "font-size") else {
        return;
    };
    for (key, value) in sizes {
        if let Some(resolved) = resolved_leaf(value) {
            lines.push(custom_property(
                &format!("--font-size-{}", css_ident(key)),
                &infer_px(resolved),
            ));
        }
    }
}

fn push_font_metric(tokens: &JsonValue, category: &str, lines: &mut Vec<String>) {
    let Some(entries) = font_submap(tokens, category) else {
        return;
    };
    for (key, value) in entries {
        if let Some(resolved) = resolved_leaf(value) {
            lines.push(custom_property(
                &format!("--{category}-{}", css_ident(key)),
                &resolved,
            ));
        }
    }
}

fn push_platform_scales(tokens: &JsonValue, lines: &mut Vec<String>) {
    for platform in PLATFORMS {
        let Some(text) = tokens.get(platform).and_then(|bucket| bucket.get("text")) else {
            continue;
        };
        for_each_scale_entry(text, |scale, variant, property, value| {
            if let Some(resolved) = resolved_leaf(value) {
                let tail = format!("{}-{}-{property}", css_ident(scale), css_ident(variant));
                lines.push(custom_property(
                    &format!("--typography-{platform}-{tail}"),
                    &resolved,
                ));
                // Desktop values double as the unprefixed defaults.
                if platform == "desktop" {
                    lines.push(custom_property(&format!("--typography-{tail}"), &resolved));
                }
            }
        });
    }
}

fn push_color_palettes(tokens: &JsonValue, lines: &mut Vec<String>) {
    for family in COLOR_FAMILIES {
        let Some(shades) = tokens.get(family).and_then(JsonValue::as_object) else {
            continue;
        };
        for (shade, value) in shades {
            if let Some(resolved) = resolved_leaf(value) {
                lines.push(custom_property(
                    &format!("--color-{family}-{}", css_ident(shade)),
                    &resolved,
                ));
            }
        }
    }
}

fn push_spacing(tokens: &JsonValue, lines: &mut Vec<String>) {
    for size in crate::convert::SPACING_SIZES {
        let Some(value) = tokens.get(size) else {
            continue;
        };
        if let Some(resolved) = resolved_leaf(value) {
            lines.push(custom_property(&format!("--spacing-{size}"), &resolved));
        }
    }

    let Some(units) = tokens.get("unit").and_then(JsonValue::as_object) else {
        return;
    };
    for (unit, measure) in units {
        let Some(raw) = display_value(leaf_value(measure)) else {
            continue;
        };
        let resolved = resolve_references(&raw);
        // Bare numbers are pixel measurements.
        let value = if resolved.parse::<f64>().is_ok() {
            format!("{resolved}px")
        } else {
            resolved
        };
        lines.push(custom_property(
            &format!("--spacing-unit-{}", css_ident(unit)),
            &value,
        ));
    }
}

fn push_category(tokens: &JsonValue, category: &str, lines: &mut Vec<String>) {
    let Some(entries) = tokens.get(category).and_then(JsonValue::as_object) else {
        return;
    };
    for (key, value) in entries {
        if let Some(resolved) = resolved_leaf(value) {
            lines.push(custom_property(
                &format!("--{category}-{}", css_ident(key)),
                &resolved,
            ));
        }
    }
}

fn push_theme_colors(
    bucket: &serde_json::Map<String, JsonValue>,
    theme_prefix: Option<&str>,
    lines: &mut Vec<String>,
) {
    for (category, semantic) in bucket {
        let Some(semantic) = semantic.as_object() else {
            continue;
        };
        for (key, value) in semantic {
            let Some(resolved) = resolved_leaf(value) else {
                continue;
            };
            let tail = format!("{}-{}", css_ident(category), css_ident(key));
            if let Some(theme) = theme_prefix {
                lines.push(custom_property(&format!("--color-{theme}-{tail}"), &resolved));
            }
            lines.push(custom_property(&format!("--color-{tail}"), &resolved));
        }
    }
}

/// Append a bare `px` unit unless the value already carries one or is a
/// `var(...)` reference.
fn infer_px(value: String) -> String {
    if value.contains("px") || value.contains("var(") {
        value
    } else {
        format!("{value}px")
    }
}

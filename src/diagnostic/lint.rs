//! Advisory lints for token documents.
//!
//! The converters are deliberately best-effort and never reject input, which
//! means a structural mistake shows up as missing or overwritten output with
//! no signal. [`lint_tokens`] provides that signal separately: it inspects a
//! document for the shapes known to lose data and reports them without
//! affecting emission in any way.

use rustc_hash::FxHashSet;
use serde_json::Value as JsonValue;

use super::info::{Diagnostic, Diagnostics};
use crate::flatten::for_each_string_value;
use crate::resolve::{is_color_family, mangle_reference_path, token_references};

use crate::convert::{MOBILE_PLATFORMS, PLATFORMS, THEMES};

/// Inspect a token document and report suspicious structure.
///
/// Checks performed:
///
/// - more than one mobile-like platform defines a `text` scale map; the
///   responsive overrides all target the same unprefixed properties, so
///   only the last platform takes effect
/// - a platform bucket exists but carries no `text` map
/// - a theme bucket is not an object and will be skipped entirely
/// - a reference head matches no mangling category and no document root key,
///   so it resolves to a property nothing declares
pub fn lint_tokens(tokens: &JsonValue) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    lint_platforms(tokens, &mut diagnostics);
    lint_themes(tokens, &mut diagnostics);
    lint_references(tokens, &mut diagnostics);

    diagnostics
}

fn lint_platforms(tokens: &JsonValue, diagnostics: &mut Diagnostics) {
    let responsive: Vec<&str> = MOBILE_PLATFORMS
        .into_iter()
        .filter(|platform| {
            tokens
                .get(platform)
                .and_then(|bucket| bucket.get("text"))
                .is_some_and(JsonValue::is_object)
        })
        .collect();

    if let [.., last] = responsive.as_slice()
        && responsive.len() > 1
    {
        diagnostics.push(Diagnostic::warning(format!(
            "{} platform buckets ({}) define `text`; their responsive overrides target the \
             same properties, so only `{last}` takes effect",
            responsive.len(),
            responsive.join(", "),
        )));
    }

    for platform in PLATFORMS {
        if let Some(bucket) = tokens.get(platform).and_then(JsonValue::as_object)
            && !bucket.contains_key("text")
        {
            diagnostics.push(
                Diagnostic::note("platform bucket has no `text` scale map; no typography emitted")
                    .with_path(platform),
            );
        }
    }
}

fn lint_themes(tokens: &JsonValue, diagnostics: &mut Diagnostics) {
    for theme in THEMES {
        if let Some(bucket) = tokens.get(theme)
            && !bucket.is_object()
        {
            diagnostics.push(
                Diagnostic::warning("theme bucket is not an object and will be skipped")
                    .with_path(theme),
            );
        }
    }
}

fn lint_references(tokens: &JsonValue, diagnostics: &mut Diagnostics) {
    let mut reported: FxHashSet<String> = FxHashSet::default();

    for_each_string_value(tokens, |token_path, value| {
        for reference in token_references(value) {
            let head = reference.split('.').next().unwrap_or(reference);
            let known = head == "font"
                || head == "unit"
                || is_color_family(head)
                || tokens.get(head).is_some();
            if !known && reported.insert(reference.to_string()) {
                diagnostics.push(
                    Diagnostic::note(format!(
                        "reference `{{{reference}}}` names no known category or root key; \
                         emitted as `var(--{})`",
                        mangle_reference_path(reference)
                    ))
                    .with_path(token_path),
                );
            }
        }
    });
}

//! # tokens-css
//!
//! A design-token → CSS compilation library.
//!
//! This crate turns a hierarchical token document (colors, typography,
//! spacing, radii, per-platform type scales) into CSS custom-property
//! stylesheets:
//!
//! - **Reference resolution**: `{blue.500}` becomes `var(--color-blue-500)`
//! - **Theme scoping**: `light` is the default, `dark` / `black` become
//!   `[data-theme="..."]` override blocks
//! - **Responsive type scales**: mobile-like platforms override the desktop
//!   defaults under a `max-width` media query
//! - **Utility classes**: one class per type scale, font and spacing size,
//!   all referencing the generated properties
//!
//! ## Note
//!
//! The converters are deliberately best-effort. A token document is never
//! validated; substructure that does not match the expected shape is skipped
//! silently, and unknown references still resolve textually. Use the `scan`
//! feature or [`lint_tokens`] when you want those cases surfaced.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use tokens_css::build_stylesheets;
//!
//! let result = build_stylesheets(Path::new("tokens.json"))?;
//! std::fs::write("dist/tokens.css", &result.tokens_css)?;
//! std::fs::write("dist/typography.css", &result.utilities_css)?;
//!
//! // Advisory findings (never fatal)
//! if !result.diagnostics.is_empty() {
//!     eprintln!("{}", result.diagnostics);
//! }
//! ```
//!
//! ## High-Level API
//!
//! For most use cases, use the high-level functions:
//!
//! - [`build_stylesheets`]: read a token file and build both stylesheets
//! - [`build_stylesheets_from_value`]: build from parsed JSON (infallible)
//! - [`write_stylesheets`]: read, build, and write both artifacts
//! - [`batch_build`]: parallel builds over multiple documents (`batch` feature)
//! - [`scan_tokens`]: inspect a document without emitting CSS (`scan` feature)
//!
//! ## Low-Level API
//!
//! For advanced use cases, access the underlying modules:
//!
//! - [`resolve`]: `{path}` reference rewriting
//! - [`flatten`]: generic tree flattening to property maps
//! - [`convert`]: shape-aware category converters
//! - [`css`]: stylesheet and utility-class emission
//! - [`config`]: breakpoint and theme-attribute configuration
//! - [`diagnostic`]: lints, errors, and report formatting

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod convert;
pub mod css;
pub mod diagnostic;
pub mod flatten;
pub mod process;
pub mod resolve;

// Conversion core
pub use convert::{convert_color_tokens, convert_spacing_tokens, convert_typography_tokens};
pub use css::{generate_css_from_tokens, generate_typography_utilities};
pub use flatten::{flatten_tokens, flatten_tokens_with_prefix, TokenMap};
pub use resolve::{resolve_references, resolve_token_value};

// Pipeline
pub use process::{
    build_stylesheets, build_stylesheets_from_str, build_stylesheets_from_value,
    write_stylesheets, BuildResult,
};

#[cfg(feature = "batch")]
pub use process::{batch_build, batch_build_with};
#[cfg(feature = "scan")]
pub use process::{scan_file, scan_tokens, ScanResult, TokenReference};

// Diagnostics
pub use diagnostic::{lint_tokens, BuildError, Diagnostics};

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
///
/// ```ignore
/// use tokens_css::prelude::*;
/// ```
pub mod prelude {
    // Conversion core
    pub use crate::convert::{
        convert_color_tokens, convert_spacing_tokens, convert_typography_tokens, MOBILE_PLATFORMS,
        PLATFORMS, SPACING_SIZES, THEMES,
    };
    pub use crate::css::{generate_css_from_tokens, generate_typography_utilities};
    pub use crate::flatten::{flatten_tokens, flatten_tokens_with_prefix, TokenMap};
    pub use crate::resolve::{
        mangle_reference_path, resolve_references, resolve_token_value, token_references,
        COLOR_FAMILIES,
    };

    // Pipeline
    pub use crate::process::{
        build_stylesheets, build_stylesheets_from_str, build_stylesheets_from_value,
        write_stylesheets, BuildResult,
    };
    #[cfg(feature = "batch")]
    pub use crate::process::{batch_build, batch_build_with};
    #[cfg(feature = "scan")]
    pub use crate::process::{scan_file, scan_tokens, ScanResult, TokenReference};

    // Configuration
    pub use crate::config::{Config, ConfigBuilder};

    // Diagnostics
    pub use crate::diagnostic::{
        format_diagnostics, lint_tokens, BuildError, Diagnostic, DiagnosticOptions,
        DiagnosticSummary, Diagnostics, DisplayStyle, Severity,
    };
}

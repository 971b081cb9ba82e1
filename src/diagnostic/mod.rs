//! Diagnostics for token stylesheet builds.
//!
//! The conversion core never fails; this module carries the signals around
//! it. [`BuildError`] covers the driver layer (file reads, JSON parsing),
//! [`lint_tokens`] reports document structure that silently loses output,
//! and the remaining types render those reports for terminals and logs.

mod error;
mod format;
mod info;
mod lint;

// Re-export all public types
pub use error::BuildError;
pub use format::{format_diagnostics, DiagnosticOptions, DisplayStyle};
pub use info::{Diagnostic, DiagnosticSummary, Diagnostics, Severity};
pub use lint::lint_tokens;

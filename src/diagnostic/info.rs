//! Structured diagnostic information for token documents.

use std::fmt;

// ============================================================================
// Severity
// ============================================================================

/// How serious a diagnostic is.
///
/// The converters never fail, so there is no error severity here: a
/// `Warning` marks structure that will silently lose or overwrite output,
/// a `Note` marks structure that is merely suspicious.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Output-affecting problem (for example, colliding overrides).
    Warning,
    /// Advisory observation (for example, a reference to an unknown category).
    Note,
}

// ============================================================================
// Diagnostic
// ============================================================================

/// A single diagnostic tied to a location in the token document.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity of the diagnostic.
    pub severity: Severity,
    /// Dotted token path the diagnostic refers to, when one applies.
    pub path: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            path: None,
            message: message.into(),
        }
    }

    /// Create a note.
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Note,
            path: None,
            message: message.into(),
        }
    }

    /// Attach the dotted token path this diagnostic refers to.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Severity label for display.
    pub fn severity_str(&self) -> &'static str {
        match self.severity {
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

// ============================================================================
// Diagnostics (Collection)
// ============================================================================

/// A collection of diagnostics gathered while analyzing a token document.
///
/// # Example
///
/// ```ignore
/// let result = build_stylesheets(path)?;
/// if !result.diagnostics.is_empty() {
///     eprintln!("{}", result.diagnostics);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty diagnostics collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create from a vector of diagnostics.
    pub fn from_vec(items: Vec<Diagnostic>) -> Self {
        Self { items }
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Check if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Warning)
    }

    /// Count warnings.
    pub fn warning_count(&self) -> usize {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Count notes.
    pub fn note_count(&self) -> usize {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Note)
            .count()
    }

    /// Get a summary of diagnostic counts.
    pub fn summary(&self) -> DiagnosticSummary {
        DiagnosticSummary {
            warnings: self.warning_count(),
            notes: self.note_count(),
        }
    }

    /// Iterate over all diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Iterate over warnings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Iterate over notes only.
    pub fn notes(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.severity == Severity::Note)
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered =
            super::format::format_diagnostics(self, super::format::DiagnosticOptions::plain());
        f.write_str(&rendered)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// DiagnosticSummary
// ============================================================================

/// Summary of diagnostic counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticSummary {
    /// Number of warnings.
    pub warnings: usize,
    /// Number of notes.
    pub notes: usize,
}

impl DiagnosticSummary {
    /// Total number of diagnostics.
    pub fn total(&self) -> usize {
        self.warnings + self.notes
    }

    /// Whether there are any diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for DiagnosticSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.warnings, self.notes) {
            (0, 0) => write!(f, "no diagnostics"),
            (w, 0) => write!(f, "{w} warning{}", if w == 1 { "" } else { "s" }),
            (0, n) => write!(f, "{n} note{}", if n == 1 { "" } else { "s" }),
            (w, n) => write!(
                f,
                "{w} warning{}, {n} note{}",
                if w == 1 { "" } else { "s" },
                if n == 1 { "" } else { "s" }
            ),
        }
    }
}

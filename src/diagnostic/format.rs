//! Diagnostic formatting utilities.

use std::fmt::Write;

use super::info::{Diagnostic, Diagnostics, Severity};

// ============================================================================
// Options
// ============================================================================

/// Display style for diagnostic output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Message on one line, token path on an indented follow-up line.
    #[default]
    Rich,
    /// One `path: severity: message` line per diagnostic.
    Short,
}

/// Options for controlling diagnostic formatting.
///
/// # Example
///
/// ```
/// use tokens_css::diagnostic::{DiagnosticOptions, DisplayStyle};
///
/// // Default: colored rich output
/// let opts = DiagnosticOptions::default();
///
/// // Plain text (no ANSI colors) for logging
/// let opts = DiagnosticOptions::plain();
///
/// // Short format for CI integration
/// let opts = DiagnosticOptions::short().with_colored(false);
/// assert_eq!(opts.style, DisplayStyle::Short);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticOptions {
    /// Whether to use ANSI colors in output.
    pub colored: bool,
    /// Display style (rich or short).
    pub style: DisplayStyle,
}

impl Default for DiagnosticOptions {
    fn default() -> Self {
        Self {
            colored: true,
            style: DisplayStyle::Rich,
        }
    }
}

impl DiagnosticOptions {
    /// Create options for colored terminal output.
    pub fn colored() -> Self {
        Self::default()
    }

    /// Create options for plain text output (no ANSI colors).
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::default()
        }
    }

    /// Create options for short format.
    pub fn short() -> Self {
        Self {
            style: DisplayStyle::Short,
            ..Self::default()
        }
    }

    /// Set whether to use colors.
    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Set display style.
    pub fn with_style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }
}

// ============================================================================
// Coloring
// ============================================================================

/// Apply color to text based on severity.
#[cfg(feature = "colored-diagnostics")]
fn colorize(text: &str, severity: Severity) -> String {
    use owo_colors::OwoColorize;
    match severity {
        Severity::Warning => text.yellow().to_string(),
        Severity::Note => text.cyan().to_string(),
    }
}

#[cfg(not(feature = "colored-diagnostics"))]
fn colorize(text: &str, _severity: Severity) -> String {
    text.to_owned()
}

/// Get paint function based on options.
fn get_paint_fn(options: &DiagnosticOptions, severity: Severity) -> Box<dyn Fn(&str) -> String> {
    if options.colored {
        Box::new(move |s| colorize(s, severity))
    } else {
        Box::new(|s: &str| s.to_owned())
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Format a diagnostics collection for display.
pub fn format_diagnostics(diagnostics: &Diagnostics, options: DiagnosticOptions) -> String {
    let mut output = String::new();
    for diagnostic in diagnostics {
        format_one(&mut output, diagnostic, &options);
    }
    output
}

fn format_one(output: &mut String, diagnostic: &Diagnostic, options: &DiagnosticOptions) {
    let label = diagnostic.severity_str();
    let paint = get_paint_fn(options, diagnostic.severity);

    match options.style {
        DisplayStyle::Short => match &diagnostic.path {
            Some(path) => {
                _ = writeln!(output, "{path}: {}: {}", paint(label), diagnostic.message);
            }
            None => {
                _ = writeln!(output, "{}: {}", paint(label), diagnostic.message);
            }
        },
        DisplayStyle::Rich => {
            _ = writeln!(output, "{}: {}", paint(label), diagnostic.message);
            if let Some(path) = &diagnostic.path {
                _ = writeln!(output, "  at `{path}`");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagnostics {
        Diagnostics::from_vec(vec![
            Diagnostic::warning("overrides collide").with_path("ios.text"),
            Diagnostic::note("free-floating observation"),
        ])
    }

    #[test]
    fn test_plain_rich_format() {
        let rendered = format_diagnostics(&sample(), DiagnosticOptions::plain());
        assert_eq!(
            rendered,
            "warning: overrides collide\n  at `ios.text`\nnote: free-floating observation\n"
        );
    }

    #[test]
    fn test_short_format() {
        let rendered =
            format_diagnostics(&sample(), DiagnosticOptions::short().with_colored(false));
        assert_eq!(
            rendered,
            "ios.text: warning: overrides collide\nnote: free-floating observation\n"
        );
    }

    #[test]
    fn test_display_uses_plain_format() {
        let rendered = sample().to_string();
        assert!(rendered.starts_with("warning: overrides collide"));
        assert!(!rendered.contains('\u{1b}'));
    }
}

//! CSS text builders.
//!
//! Helpers for assembling rule blocks and custom-property declarations with
//! uniform indentation. All stylesheet emission goes through these.

/// Builder for a CSS rule block.
///
/// # Example
///
/// ```
/// use tokens_css::css::writer::RuleBuilder;
///
/// let rule = RuleBuilder::new(".font-bold")
///     .decl("font-weight", "var(--font-weight-bold)")
///     .build();
/// assert_eq!(rule, ".font-bold {\n  font-weight: var(--font-weight-bold);\n}\n");
/// ```
#[derive(Debug)]
pub struct RuleBuilder {
    selector: String,
    declarations: Vec<String>,
}

impl RuleBuilder {
    /// Create a builder for the given selector.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Add a declaration.
    pub fn decl(mut self, property: &str, value: impl AsRef<str>) -> Self {
        self.declarations
            .push(format!("  {property}: {};", value.as_ref()));
        self
    }

    /// Add a declaration when a value is present.
    pub fn decl_opt(self, property: &str, value: Option<impl AsRef<str>>) -> Self {
        match value {
            Some(value) => self.decl(property, value),
            None => self,
        }
    }

    /// Whether no declarations have been added.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Build the rule block text.
    pub fn build(self) -> String {
        format_block(&self.selector, &self.declarations)
    }
}

/// Format a single custom-property declaration line.
pub fn custom_property(name: &str, value: &str) -> String {
    format!("  {name}: {value};")
}

/// Wrap pre-indented declaration lines in a selector block.
pub fn format_block(selector: &str, lines: &[String]) -> String {
    let mut block = String::with_capacity(selector.len() + lines.len() * 32 + 8);
    block.push_str(selector);
    block.push_str(" {\n");
    for line in lines {
        block.push_str(line);
        block.push('\n');
    }
    block.push_str("}\n");
    block
}

/// Wrap a block in a media query, indenting the body by one level.
pub fn media_block(query: &str, body: &str) -> String {
    let mut block = format!("@media ({query}) {{\n");
    for line in body.lines() {
        if line.is_empty() {
            block.push('\n');
        } else {
            block.push_str("  ");
            block.push_str(line);
            block.push('\n');
        }
    }
    block.push_str("}\n");
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_builder() {
        let rule = RuleBuilder::new(".m-sm")
            .decl("margin", "var(--spacing-sm)")
            .decl_opt("gap", None::<&str>)
            .build();
        assert_eq!(rule, ".m-sm {\n  margin: var(--spacing-sm);\n}\n");
    }

    #[test]
    fn test_empty_rule() {
        let builder = RuleBuilder::new(".empty");
        assert!(builder.is_empty());
        assert_eq!(builder.build(), ".empty {\n}\n");
    }

    #[test]
    fn test_custom_property_line() {
        assert_eq!(custom_property("--spacing-sm", "8px"), "  --spacing-sm: 8px;");
    }

    #[test]
    fn test_media_block_indents_body() {
        let body = format_block(":root", &[custom_property("--a", "1")]);
        let wrapped = media_block("max-width: 768px", &body);
        assert_eq!(
            wrapped,
            "@media (max-width: 768px) {\n  :root {\n    --a: 1;\n  }\n}\n"
        );
    }
}

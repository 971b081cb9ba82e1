//! Configuration for tokens-css.
//!
//! This module provides runtime configuration for the stylesheet emitters.
//! Use [`ConfigBuilder`] at application startup to change the responsive
//! breakpoint or the theme selector attribute; the defaults match the token
//! pipeline's stock output.

use std::sync::OnceLock;

/// Global configuration, initialized via [`ConfigBuilder::init`].
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Runtime configuration for tokens-css.
#[derive(Debug, Clone)]
pub struct Config {
    /// Width at which mobile-like platform type scales take over.
    /// Interpolated into `@media (max-width: ...)`.
    pub mobile_breakpoint: String,
    /// Attribute the theme blocks select on, as `[attr="theme"]`.
    pub theme_attribute: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mobile_breakpoint: "768px".to_string(),
            theme_attribute: "data-theme".to_string(),
        }
    }
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    mobile_breakpoint: Option<String>,
    theme_attribute: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the responsive breakpoint width.
    ///
    /// Default: `768px`
    ///
    /// # Example
    ///
    /// ```
    /// use tokens_css::config::ConfigBuilder;
    ///
    /// ConfigBuilder::new()
    ///     .mobile_breakpoint("640px")
    ///     .init();
    /// ```
    pub fn mobile_breakpoint(mut self, width: impl Into<String>) -> Self {
        self.mobile_breakpoint = Some(width.into());
        self
    }

    /// Set the attribute used by theme-scoped selectors.
    ///
    /// Default: `data-theme`
    pub fn theme_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.theme_attribute = Some(attribute.into());
        self
    }

    /// Build and initialize the global configuration.
    ///
    /// This can only be called once. Subsequent calls are ignored.
    /// Returns `true` if configuration was set, `false` if already initialized.
    pub fn init(self) -> bool {
        let defaults = Config::default();
        let config = Config {
            mobile_breakpoint: self.mobile_breakpoint.unwrap_or(defaults.mobile_breakpoint),
            theme_attribute: self.theme_attribute.unwrap_or(defaults.theme_attribute),
        };
        CONFIG.set(config).is_ok()
    }
}

/// Initialize tokens-css with default configuration.
///
/// This is equivalent to `ConfigBuilder::new().init()`.
pub fn init_default() -> bool {
    ConfigBuilder::new().init()
}

/// Get the current configuration, or default if not initialized.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

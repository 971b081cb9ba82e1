//! Stylesheet emission.
//!
//! Two text artifacts are produced from a token document:
//!
//! - [`generate_css_from_tokens`] - the custom-property stylesheet
//!   (`:root`, theme-scoped blocks, responsive overrides)
//! - [`generate_typography_utilities`] - the utility-class stylesheet
//!   referencing those properties

mod stylesheet;
mod utilities;
pub mod writer;

pub use stylesheet::generate_css_from_tokens;
pub use utilities::generate_typography_utilities;

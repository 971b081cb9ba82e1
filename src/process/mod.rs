//! Token document processing pipeline.
//!
//! - [`build`] - read, convert, and optionally write stylesheets
//! - [`batch`] - parallel builds over multiple documents
//! - [`scan`] - document inspection without emission

pub mod build;

#[cfg(feature = "batch")]
pub mod batch;
#[cfg(feature = "scan")]
pub mod scan;

pub use build::{
    build_stylesheets, build_stylesheets_from_str, build_stylesheets_from_value,
    write_stylesheets, BuildResult,
};

#[cfg(feature = "batch")]
pub use batch::{batch_build, batch_build_with};
#[cfg(feature = "scan")]
pub use scan::{scan_file, scan_tokens, ScanResult, TokenReference};

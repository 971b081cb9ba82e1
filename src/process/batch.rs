//! Batch builds for multiple token documents.
//!
//! Design systems often ship several token documents (brand variants, white
//! label themes). [`batch_build`] converts them in parallel; each document is
//! independent, so failures are isolated per file and results come back in
//! input order.
//!
//! # Example
//!
//! ```ignore
//! use tokens_css::batch_build;
//!
//! let results = batch_build(&["brand-a.json", "brand-b.json"]);
//! for result in results {
//!     match result {
//!         Ok(build) => println!("{} bytes", build.tokens_css.len()),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```

use std::path::Path;

use rayon::prelude::*;

use super::build::{build_stylesheets, BuildResult};
use crate::diagnostic::BuildError;

/// Build stylesheets for multiple token documents in parallel.
///
/// Results are returned in the same order as `paths`; a failing document
/// does not affect the others.
pub fn batch_build<P: AsRef<Path> + Sync>(paths: &[P]) -> Vec<Result<BuildResult, BuildError>> {
    batch_build_with(paths, |_| {})
}

/// Build stylesheets in parallel with a callback for each finished document.
///
/// Like [`batch_build`], but invokes the callback once per input as it
/// completes. Useful for progress tracking.
pub fn batch_build_with<P, F>(paths: &[P], on_each: F) -> Vec<Result<BuildResult, BuildError>>
where
    P: AsRef<Path> + Sync,
    F: Fn(&Path) + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let result = build_stylesheets(path);
            on_each(path);
            result
        })
        .collect()
}

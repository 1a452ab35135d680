//! Crate-level error type.

use thiserror::Error;

/// Failures surfaced by the helper functions. Everything else in the crate
/// degrades gracefully instead of erroring (bad ranges, zero-length ids,
/// unmatched sanitizer input).
#[derive(Debug, Error)]
pub enum Error {
    /// Navigation target failed URL validation; the window primitive was
    /// never invoked.
    #[error("url is not valid: {url:?}")]
    InvalidUrl { url: String },

    /// A required console-intro field was empty or absent.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },
}

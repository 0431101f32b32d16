//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into `SarError`
//! via `From` impls or wrap it as one variant.  Malformed arguments are always
//! surfaced to the caller as `InvalidInput` — never silently corrected.

use thiserror::Error;

/// The top-level error type for `sar-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SarError {
    /// Malformed argument (empty cluster handed to the centroid, detection
    /// probability out of range, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sar-*` crates.
pub type SarResult<T> = Result<T, SarError>;

//! Library error type.
//!
//! Every fallible entry point in this crate reports failures through the
//! single [`Error`] enum. Validation is eager: arguments are checked before
//! any work happens, so a returned error implies no partial effects.
//!
//! Font-resolution fallback is deliberately *not* an error (see
//! [`crate::theme::build_theme`]); it is reported through the `log` facade
//! so a chart is still produced.

use thiserror::Error;

/// Errors produced by this crate's builder functions.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument failed validation (empty input, value out of range, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand used by the builders for validation failures.
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

//! Centralized error handling for scorebook queries.
//!
//! Every fallible operation in this crate fails in one of exactly two ways:
//!
//! - [`ScorebookError::InvalidInput`] — the caller named a team, batter, or
//!   venue that does not exist in the loaded data. The message is the
//!   caller-facing surface text and is never fatal: the external boundary
//!   (see the CLI) renders it as a `{"Message": …}` mapping.
//! - [`ScorebookError::DataUnavailable`] — a source dataset could not be
//!   fetched or parsed. Fatal to the calling query, never retried within
//!   the call, and no partial result is returned.
//!
//! ## The `From` Trait for Error Conversion
//!
//! I/O and CSV errors can only occur while loading a dataset, so both
//! convert into `DataUnavailable` and the `?` operator works throughout the
//! loading path:
//!
//! ```no_run
//! use scorebook::error::Result;
//! use std::fs;
//!
//! fn read_source(path: &str) -> Result<String> {
//!     // std::io::Error converts to ScorebookError::DataUnavailable
//!     let content = fs::read_to_string(path)?;
//!     Ok(content)
//! }
//! ```
//!
//! ## Context Extension Trait
//!
//! The `ResultExt` trait adds a `.context()` method that prefixes the
//! underlying failure with where it happened, typically the dataset name:
//!
//! ```no_run
//! use scorebook::error::{Result, ResultExt as _};
//! use std::fs;
//!
//! fn load_matches() -> Result<String> {
//!     fs::read_to_string("matches.csv").context("matches dataset")
//! }
//! ```

use std::fmt;

/// Main error type for scorebook operations.
#[derive(Debug)]
pub enum ScorebookError {
    /// Caller-supplied name failed validation (unknown team or batter, or
    /// an empty team/venue selection). The payload is the surface message.
    InvalidInput(String),

    /// A source dataset could not be fetched or parsed.
    DataUnavailable(String),
}

impl ScorebookError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }

    /// The bare message, without the category prefix `Display` adds.
    ///
    /// This is what crosses the external boundary as the "Message" field.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(msg) | Self::DataUnavailable(msg) => msg,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl fmt::Display for ScorebookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "{msg}"),
            Self::DataUnavailable(msg) => write!(f, "Dataset unavailable: {msg}"),
        }
    }
}

impl std::error::Error for ScorebookError {}

impl From<std::io::Error> for ScorebookError {
    fn from(err: std::io::Error) -> Self {
        Self::DataUnavailable(format!("I/O error: {err}"))
    }
}

impl From<polars::error::PolarsError> for ScorebookError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataUnavailable(format!("CSV error: {err}"))
    }
}

// No exception type crosses the external query boundary, so embedders that
// want a plain-string error can convert directly.
impl From<ScorebookError> for String {
    fn from(err: ScorebookError) -> Self {
        err.to_string()
    }
}

/// Result type alias for scorebook operations.
pub type Result<T> = std::result::Result<T, ScorebookError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Prefix the error message with context (typically the dataset name).
    ///
    /// # Errors
    ///
    /// Returns the underlying error as `DataUnavailable` with the prefix
    /// applied
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    ///
    /// # Errors
    ///
    /// Returns the underlying error as `DataUnavailable` with the prefix
    /// applied
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ScorebookError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: ScorebookError = e.into();
            ScorebookError::DataUnavailable(format!("{}: {}", msg.into(), err.message()))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: ScorebookError = e.into();
            ScorebookError::DataUnavailable(format!("{}: {}", f(), err.message()))
        })
    }
}

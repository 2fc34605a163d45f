//! Error types for the titlefetch plugin.
//!
//! Two layers of errors live here:
//!
//! - [`FetchError`]: the single failure kind a simulated fetch can report. It is
//!   borrowed from URL-loading vocabulary but never involves any I/O.
//! - [`TitleFetchError`]: the crate-wide error, which wraps [`FetchError`]
//!   transparently so `?` can lift a fetch failure without changing its text.

use thiserror::Error;

/// Failure reported by a simulated title fetch.
///
/// The description is the one URL loaders give for their bad-URL code, so the
/// UI shows `"Error: bad URL"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The resource address could not be used.
    #[error("bad URL")]
    BadUrl,
}

/// The main error type for titlefetch operations.
///
/// # Examples
///
/// ```
/// use titlefetch::domain::{FetchError, TitleFetchError};
///
/// let err: TitleFetchError = FetchError::BadUrl.into();
/// assert_eq!(err.to_string(), "bad URL");
/// ```
#[derive(Debug, Error)]
pub enum TitleFetchError {
    /// A simulated fetch failed.
    ///
    /// Transparent so the rendered message is the fetch error's own
    /// description.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for titlefetch operations.
pub type Result<T> = std::result::Result<T, TitleFetchError>;

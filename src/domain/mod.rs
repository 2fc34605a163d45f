//! Domain layer for the titlefetch plugin.
//!
//! Holds the types that describe what a fetch can produce, independent of
//! Zellij APIs or rendering.
//!
//! # Organization
//!
//! - [`error`]: Fetch failure kind, crate error type and result alias
//! - [`outcome`]: Internal tagged representation of a fetch result
//!
//! # Examples
//!
//! ```
//! use titlefetch::domain::{FetchError, FetchOutcome};
//!
//! let outcome: FetchOutcome<String> = FetchOutcome::Failure(FetchError::BadUrl);
//! assert_eq!(outcome.into_option(), None);
//! ```

pub mod error;
pub mod outcome;

pub use error::{FetchError, Result, TitleFetchError};
pub use outcome::FetchOutcome;

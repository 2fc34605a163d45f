//! Title source abstraction.
//!
//! This module defines the [`TitleSource`] trait: four ways of asking for a
//! title, one per error-representation style. The view model is generic over
//! this trait, so tests can substitute their own sources.

use crate::domain::FetchError;

/// A provider of titles exposed through four result shapes.
///
/// Implementations must keep the four methods consistent: for any fixed
/// internal state they either all succeed or all fail.
///
/// # Implementations
///
/// - [`DataManager`](crate::data::DataManager): flag-driven simulated source
pub trait TitleSource {
    /// Returns the first title, or `None` when the fetch fails.
    ///
    /// Absence carries no reason.
    fn get_optional(&self) -> Option<String>;

    /// Returns the second title as a `(value, error)` pair.
    ///
    /// Exactly one side is `Some`.
    fn get_pair(&self) -> (Option<String>, Option<FetchError>);

    /// Returns the third title as a tagged result, meant to be matched on.
    ///
    /// # Errors
    ///
    /// Returns the failure reason when the fetch fails.
    fn get_tagged(&self) -> Result<String, FetchError>;

    /// Returns the fourth title, meant to be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns the failure reason when the fetch fails.
    fn get_or_throw(&self) -> Result<String, FetchError>;
}

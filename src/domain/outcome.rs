//! The single internal representation of a fetch result.
//!
//! [`FetchOutcome`] is a two-variant tagged value. Every public shape the data
//! layer hands out (an `Option`, a value/error pair, or a `Result`) is produced
//! from it by one of the adapter methods below, so all shapes carry the same
//! information for the same input.

use super::error::FetchError;

/// Result of one simulated fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// The fetch produced a value.
    Success(T),
    /// The fetch failed with the given reason.
    Failure(FetchError),
}

impl<T> FetchOutcome<T> {
    /// Builds an outcome from a success flag, producing `value` on success and
    /// [`FetchError::BadUrl`] otherwise.
    ///
    /// `value` is only evaluated when `succeeded` is true.
    pub fn from_flag(succeeded: bool, value: impl FnOnce() -> T) -> Self {
        if succeeded {
            Self::Success(value())
        } else {
            Self::Failure(FetchError::BadUrl)
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Drops the failure reason, keeping only presence or absence.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Splits into a `(value, error)` pair with exactly one side populated.
    pub fn into_pair(self) -> (Option<T>, Option<FetchError>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failure(err) => (None, Some(err)),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure reason for [`FetchOutcome::Failure`].
    pub fn into_result(self) -> Result<T, FetchError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(err),
        }
    }
}

impl<T> From<FetchOutcome<T>> for Result<T, FetchError> {
    fn from(outcome: FetchOutcome<T>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_populates_only_value_side() {
        let outcome = FetchOutcome::from_flag(true, || "Title".to_string());
        assert!(outcome.is_success());
        assert_eq!(outcome.into_pair(), (Some("Title".to_string()), None));
    }

    #[test]
    fn failure_populates_only_error_side() {
        let outcome: FetchOutcome<String> = FetchOutcome::from_flag(false, || "unused".to_string());
        assert!(!outcome.is_success());
        assert_eq!(outcome.into_pair(), (None, Some(FetchError::BadUrl)));
    }

    #[test]
    fn adapters_agree_on_failure() {
        let outcome: FetchOutcome<&str> = FetchOutcome::Failure(FetchError::BadUrl);
        assert_eq!(outcome.clone().into_option(), None);
        assert_eq!(outcome.into_result(), Err(FetchError::BadUrl));
    }

    #[test]
    fn converts_into_std_result() {
        let result: Result<u8, FetchError> = FetchOutcome::Success(4).into();
        assert_eq!(result, Ok(4));
    }
}

//! Flag-driven simulated title source.
//!
//! [`DataManager`] answers every request from a single boolean. Each method
//! builds the same internal [`FetchOutcome`] and converts it into its own
//! public shape, so the four methods can never disagree.

use crate::data::source::TitleSource;
use crate::domain::{FetchError, FetchOutcome};

/// Simulated remote data source.
///
/// `is_active` stands in for "the remote call succeeded". It defaults to
/// `false`, so a fresh manager reports failures until switched on.
///
/// # Examples
///
/// ```
/// use titlefetch::data::{DataManager, TitleSource};
///
/// let mut manager = DataManager::default();
/// assert_eq!(manager.get_optional(), None);
///
/// manager.set_active(true);
/// assert_eq!(manager.get_optional().as_deref(), Some("Title 1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataManager {
    is_active: bool,
}

impl DataManager {
    #[must_use]
    pub const fn new(is_active: bool) -> Self {
        Self { is_active }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn set_active(&mut self, is_active: bool) {
        tracing::debug!(is_active, "simulated fetch state set");
        self.is_active = is_active;
    }

    /// Flips the simulated state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_active(!self.is_active);
        self.is_active
    }

    fn outcome(&self, index: u8) -> FetchOutcome<String> {
        FetchOutcome::from_flag(self.is_active, || format!("Title {index}"))
    }
}

impl TitleSource for DataManager {
    fn get_optional(&self) -> Option<String> {
        self.outcome(1).into_option()
    }

    fn get_pair(&self) -> (Option<String>, Option<FetchError>) {
        self.outcome(2).into_pair()
    }

    fn get_tagged(&self) -> Result<String, FetchError> {
        self.outcome(3).into_result()
    }

    fn get_or_throw(&self) -> Result<String, FetchError> {
        self.outcome(4).into()
    }
}

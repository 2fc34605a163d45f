//! Application state and view model computation.
//!
//! [`AppState`] owns the title view model (and through it the simulated data
//! source) together with the active theme. It is the single source of truth
//! the renderer reads from.
//!
//! # Example
//!
//! ```rust
//! use titlefetch::app::AppState;
//! use titlefetch::data::DataManager;
//! use titlefetch::ui::Theme;
//!
//! let mut state = AppState::new(DataManager::new(true), Theme::default());
//! state.titles.fetch_all();
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.rows[0].value, "Title 1");
//! ```

use super::titles::{TitleField, TitlesViewModel};
use crate::data::DataManager;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo, StatusInfo, TitleRow, UIViewModel};

/// Substring that marks a displayed value as a failure.
const ERROR_MARKER: &str = "Error";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Title view model wrapping the simulated data source.
    pub titles: TitlesViewModel<DataManager>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(manager: DataManager, theme: Theme) -> Self {
        Self {
            titles: TitlesViewModel::new(manager),
            theme,
        }
    }

    /// Computes a renderable UI view model from current state.
    ///
    /// Each row carries an `is_error` cue derived from whether its value
    /// contains `"Error"`, which selects the failure color when rendering.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let display = self.titles.display();

        let rows = TitleField::ALL
            .iter()
            .map(|field| {
                let value = display.get(*field);
                TitleRow {
                    label: field.label().to_string(),
                    value: value.to_string(),
                    is_error: value.contains(ERROR_MARKER),
                }
            })
            .collect();

        UIViewModel {
            header: HeaderInfo {
                title: " Fetch Titles ".to_string(),
            },
            status: self.compute_status(),
            rows,
            footer: FooterInfo {
                keybindings: "Enter/f: fetch titles  t: toggle simulated outcome  q: quit"
                    .to_string(),
            },
        }
    }

    fn compute_status(&self) -> StatusInfo {
        let is_success = self.titles.source().is_active();
        let outcome = if is_success { "success" } else { "failure" };
        StatusInfo {
            text: format!("Simulated fetch: {outcome}"),
            is_success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_field_order_and_labels() {
        let state = AppState::new(DataManager::default(), Theme::default());
        let vm = state.compute_viewmodel();

        assert_eq!(vm.rows.len(), 4);
        for (row, field) in vm.rows.iter().zip(TitleField::ALL) {
            assert_eq!(row.label, field.label());
            assert_eq!(row.value, "Loading...");
            assert!(!row.is_error);
        }
    }

    #[test]
    fn failed_rows_are_marked_as_errors() {
        let mut state = AppState::new(DataManager::new(false), Theme::default());
        state.titles.fetch_all();

        let vm = state.compute_viewmodel();
        assert!(vm.rows.iter().all(|row| row.is_error));
        assert!(!vm.status.is_success);
        assert_eq!(vm.status.text, "Simulated fetch: failure");
    }

    #[test]
    fn successful_rows_are_not_marked() {
        let mut state = AppState::new(DataManager::new(true), Theme::default());
        state.titles.fetch_all();

        let vm = state.compute_viewmodel();
        assert!(vm.rows.iter().all(|row| !row.is_error));
        assert!(vm.status.is_success);
    }
}

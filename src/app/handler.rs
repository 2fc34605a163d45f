//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place that mutates [`AppState`] in response to
//! input. It returns whether the UI needs a re-render together with any side
//! effects for the plugin runtime to perform.
//!
//! # Example
//!
//! ```rust
//! use titlefetch::app::{handle_event, AppState, Event};
//! use titlefetch::data::DataManager;
//! use titlefetch::ui::Theme;
//!
//! let mut state = AppState::new(DataManager::default(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Fetch)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), titlefetch::TitleFetchError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input or plugin lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Fetches all four titles.
    ///
    /// Sent by the "Fetch Titles" key binding and once when the plugin first
    /// loads.
    Fetch,
    /// Flips the simulated success flag without fetching.
    ToggleSimulation,
    /// Hides the plugin UI.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. A fetch that leaves every field unchanged
/// reports `should_render = false`.
///
/// # Errors
///
/// Reserved for failures in state transitions; fetch failures are always
/// recovered into display strings and never surface here.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Fetch => {
            let before = state.titles.display().clone();
            state.titles.fetch_all();

            if state.titles.display() == &before {
                tracing::debug!("titles unchanged, skipping render");
                Ok((false, vec![]))
            } else {
                Ok((true, vec![]))
            }
        }
        Event::ToggleSimulation => {
            let is_active = state.titles.source_mut().toggle();
            tracing::debug!(is_active, "simulated outcome toggled");
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataManager;
    use crate::ui::Theme;

    fn state(is_active: bool) -> AppState {
        AppState::new(DataManager::new(is_active), Theme::default())
    }

    #[test]
    fn first_fetch_renders() {
        let mut state = state(true);
        let (should_render, actions) = handle_event(&mut state, &Event::Fetch).unwrap();
        assert!(should_render);
        assert!(actions.is_empty());
        assert_eq!(state.titles.display().thrown, "Title 4");
    }

    #[test]
    fn repeated_fetch_skips_render() {
        let mut state = state(false);
        handle_event(&mut state, &Event::Fetch).unwrap();
        let (should_render, _) = handle_event(&mut state, &Event::Fetch).unwrap();
        assert!(!should_render);
    }

    #[test]
    fn toggle_does_not_refetch() {
        let mut state = state(false);
        handle_event(&mut state, &Event::Fetch).unwrap();

        let (should_render, _) = handle_event(&mut state, &Event::ToggleSimulation).unwrap();
        assert!(should_render);
        assert!(state.titles.source().is_active());
        assert_eq!(state.titles.display().optional, "Error: No Title");

        let (should_render, _) = handle_event(&mut state, &Event::Fetch).unwrap();
        assert!(should_render);
        assert_eq!(state.titles.display().optional, "Title 1");
    }

    #[test]
    fn close_emits_action() {
        let mut state = state(true);
        let (should_render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!should_render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}

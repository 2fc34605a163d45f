//! Application layer coordinating state, events, and actions.
//!
//! # Architecture
//!
//! ```text
//! Key input → Event → handle_event → TitlesViewModel::fetch_all → (render?, Actions)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: Application state container and UI view model computation
//! - [`titles`]: Title view model turning fetch outcomes into display strings

pub mod actions;
pub mod handler;
pub mod state;
pub mod titles;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
pub use titles::{DisplayState, TitleField, TitleObserver, TitlesViewModel};

//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim in `main.rs` translates each action into a Zellij API call.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user asks to leave (`q` or `Esc`).
    CloseFocus,
}

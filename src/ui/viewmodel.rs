//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title).
    pub header: HeaderInfo,

    /// Current simulated outcome.
    pub status: StatusInfo,

    /// One row per title field, in display order.
    pub rows: Vec<TitleRow>,

    /// Footer information (keybindings).
    pub footer: FooterInfo,
}

/// A labeled title row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRow {
    /// Handling-style label, e.g. `"Option Handling:"`.
    pub label: String,

    /// Title text or error message.
    pub value: String,

    /// Whether `value` should use the failure color.
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Line describing whether fetches currently succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub text: String,
    pub is_success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

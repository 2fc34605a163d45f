//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: delegate to [`components`](crate::ui::components)

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; Zellij
/// hands the plugin a fresh pane buffer on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel();
    tracing::trace!(rows, cols, "rendering titles");

    components::render_layout(&viewmodel, &state.theme, cols, rows);
}

//! Simulated-outcome status line.

use crate::ui::helpers::{fill_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders the status text with a colored marker. Returns the next row.
pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let marker = if status.is_success { "●" } else { "○" };

    position_cursor(row, 1);
    print!(" {}{marker}{} ", Theme::fg(theme.outcome_color(!status.is_success)), Theme::reset());
    print!("{}{}", Theme::fg(&theme.colors.text_dim), status.text);
    print!("{}", " ".repeat(fill_width(cols, status.text.chars().count() + 3)));
    print!("{}", Theme::reset());
    row + 1
}

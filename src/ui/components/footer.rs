//! Footer component renderer.

use crate::ui::helpers::{center_padding, fill_width, position_cursor, truncate_to};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed on `row`.
///
/// Text wider than the terminal is truncated so the layout stays intact.
/// Returns the next available row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_to(&footer.keybindings, cols);
    let text_len = help_text.chars().count();
    let padding = center_padding(cols, text_len);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(fill_width(cols, padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

//! Title row renderer.
//!
//! Each row shows a bold label on the left and the title value right-aligned,
//! colored by outcome:
//!
//! ```text
//!  Option Handling:                               Title 1
//! ```
//!
//! On narrow terminals the value is truncated first, then the label, so a
//! row never wraps past `cols`.

use crate::ui::helpers::{fill_width, position_cursor, truncate_to};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TitleRow;

const MARGIN: usize = 1;

/// Renders all title rows starting at `row`. Returns the next available row.
pub fn render_title_rows(row: usize, rows: &[TitleRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for title_row in rows {
        current_row = render_title_row(current_row, title_row, theme, cols);
    }
    current_row
}

fn render_title_row(row: usize, title_row: &TitleRow, theme: &Theme, cols: usize) -> usize {
    let layout = RowLayout::fit(&title_row.label, &title_row.value, cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN.min(cols)));

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.label_fg));
    print!("{}", layout.label);
    print!("{}", Theme::reset());

    print!("{}", " ".repeat(layout.gap));

    print!("{}", Theme::fg(theme.outcome_color(title_row.is_error)));
    print!("{}", layout.value);
    print!("{}", Theme::reset());

    print!("{}", " ".repeat(layout.trailing));
    row + 1
}

/// Label, gap and value sized to fit within one terminal line.
#[derive(Debug, PartialEq, Eq)]
struct RowLayout {
    label: String,
    gap: usize,
    value: String,
    trailing: usize,
}

impl RowLayout {
    fn fit(label: &str, value: &str, cols: usize) -> Self {
        let inner = cols.saturating_sub(MARGIN * 2);
        let label = truncate_to(label, inner);
        let label_len = label.chars().count();

        let value_room = inner.saturating_sub(label_len + 1);
        let value = truncate_to(value, value_room);
        let value_len = value.chars().count();

        let gap = if value_len == 0 {
            0
        } else {
            fill_width(inner, label_len + value_len).max(1)
        };
        let trailing = fill_width(cols, MARGIN + label_len + gap + value_len);

        Self {
            label,
            gap,
            value,
            trailing,
        }
    }

    #[cfg(test)]
    fn width(&self) -> usize {
        MARGIN + self.label.chars().count() + self.gap + self.value.chars().count() + self.trailing
    }
}

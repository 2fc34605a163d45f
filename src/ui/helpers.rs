//! Shared rendering utilities.

/// Positions the cursor at a specific row and column (both 1-indexed).
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of spaces needed to fill a line of `cols` after `used` characters.
#[must_use]
pub const fn fill_width(cols: usize, used: usize) -> usize {
    cols.saturating_sub(used)
}

/// First `width` characters of `text`.
#[must_use]
pub fn truncate_to(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Left padding that centers `len` characters within `cols`.
///
/// When the remainder is odd, the extra space goes to the right.
#[must_use]
pub const fn center_padding(cols: usize, len: usize) -> usize {
    cols.saturating_sub(len) / 2
}

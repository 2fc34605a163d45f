//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents, either built in (`themes/*.toml`) or loaded from
//! a user-supplied file.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! label_fg = "#cdd6f4"
//! success_fg = "#a6e3a1"
//! failure_fg = "#f38ba8"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! ```

use crate::domain::error::{Result, TitleFetchError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Row label color.
    pub label_fg: String,

    /// Color for successfully fetched titles.
    pub success_fg: String,
    /// Color for error messages.
    pub failure_fg: String,

    /// Dimmed text color (footer, status).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TitleFetchError::Io`] if the file cannot be read and
    /// [`TitleFetchError::Theme`] if its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| TitleFetchError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);

        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Picks the row color for a value.
    #[must_use]
    pub fn outcome_color(&self, is_error: bool) -> &str {
        if is_error {
            &self.colors.failure_fg
        } else {
            &self.colors.success_fg
        }
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name("catppuccin-mocha").unwrap().name, "catppuccin-mocha");
        assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_parsing_falls_back_to_white() {
        assert_eq!(Theme::hex_to_rgb("#a6e3a1"), (0xa6, 0xe3, 0xa1));
        assert_eq!(Theme::hex_to_rgb("f38ba8"), (0xf3, 0x8b, 0xa8));
        assert_eq!(Theme::hex_to_rgb("#fff"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#zz0000"), (255, 0, 0));
    }

    #[test]
    fn fg_formats_truecolor_sequence() {
        assert_eq!(Theme::fg("#010203"), "\u{1b}[38;2;1;2;3m");
        assert_eq!(Theme::bg("#010203"), "\u{1b}[48;2;1;2;3m");
    }

    #[test]
    fn outcome_color_selects_palette_entry() {
        let theme = Theme::default();
        assert_eq!(theme.outcome_color(true), theme.colors.failure_fg);
        assert_eq!(theme.outcome_color(false), theme.colors.success_fg);
    }

    #[test]
    fn from_file_reads_custom_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = toml::to_string(&Theme::default()).unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TitleFetchError::Theme(_)));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, TitleFetchError::Io(_)));
    }
}

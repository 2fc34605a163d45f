//! titlefetch: a Zellij plugin showing four ways to represent a fallible fetch.
//!
//! A simulated data source answers four title requests, each in a different
//! result shape:
//!
//! 1. `Option<String>`: absence without a reason
//! 2. `(Option<String>, Option<FetchError>)`: a value/error pair
//! 3. `Result<String, FetchError>` handled with `match`
//! 4. `Result<String, FetchError>` propagated with `?` and caught one level up
//!
//! A single boolean decides whether all four succeed or all four fail. The
//! title view model turns each outcome into a display string and the plugin
//! renders the four strings, colored by outcome.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                │  ← key events, render
//! └──────────────────────────────────────────────┘
//!                        │
//! ┌──────────────────────────────────────────────┐
//! │  Application Layer (app/)                    │
//! │  - Event handling                            │
//! │  - Title view model (fetch_all, observers)   │
//! └──────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐        ┌───────────────────┐
//! │ Data Layer        │        │ UI Layer          │
//! │ (data/)           │        │ (ui/)             │
//! │ - TitleSource     │        │ - View model      │
//! │ - DataManager     │        │ - Theme, rows     │
//! └───────────────────┘        └───────────────────┘
//!         │
//! ┌──────────────────────────────────────────────┐
//! │  Domain (domain/): FetchOutcome, errors      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/titlefetch.wasm" {
//!         simulate_success "true"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use titlefetch::{handle_event, initialize, Config, Event};
//!
//! let config = Config { simulate_success: true, ..Default::default() };
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::Fetch)?;
//! assert_eq!(state.titles.display().tagged, "Title 3");
//! # Ok::<(), titlefetch::TitleFetchError>(())
//! ```

pub mod app;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, TitleField};
pub use data::{DataManager, TitleSource};
pub use domain::{FetchError, FetchOutcome, Result, TitleFetchError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/titlefetch.wasm" {
///     simulate_success "false"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Initial simulated outcome: `true` makes every fetch succeed.
    ///
    /// Default: `false`.
    pub simulate_success: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `titlefetch=trace`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Malformed values fall back to their defaults with a warning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use titlefetch::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("simulate_success".to_string(), "yes".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!(config.simulate_success);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let simulate_success = config
            .get("simulate_success")
            .map_or(Ok(false), |raw| parse_flag(raw))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring simulate_success");
                false
            });

        Self {
            simulate_success,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(TitleFetchError::Config(format!(
            "expected a boolean, got {other:?}"
        ))),
    }
}

/// Creates the application state from configuration.
///
/// The theme is loaded from `theme_file`, then `theme_name`, then the
/// default; any failure falls back to the default theme. Does not fetch: the
/// plugin sends [`Event::Fetch`] once it is loaded.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(simulate_success = config.simulate_success, "initializing titlefetch plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(DataManager::new(config.simulate_success), theme);
    state.titles.subscribe(|field: TitleField, value: &str| {
        if value.starts_with("Error: ") {
            tracing::debug!(field = ?field, message = %value, "fetch failure recovered into display");
        }
    });
    state
}

//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the titlefetch library and the Zellij plugin
//! system: it maps key presses to library events, runs the resulting actions
//! and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Initial Fetch**: Fetch all titles once so the first frame shows results
//! 4. **Update**: Handle key events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! - `Enter` / `f`: Fetch titles
//! - `t`: Toggle simulated success/failure
//! - `q` / `Esc`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use titlefetch::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: titlefetch::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: titlefetch::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin and performs the initial fetch.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        titlefetch::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(simulate_success = config.simulate_success, "parsed configuration");
        self.app = titlefetch::initialize(&config);

        subscribe(&[EventType::Key]);

        self.dispatch(&Event::Fetch);
        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let span = tracing::debug_span!("plugin_update_event", bare_key = ?key.bare_key);
        let _guard = span.entered();

        Self::map_key_event(&key).is_some_and(|our_event| self.dispatch(&our_event))
    }

    fn render(&mut self, rows: usize, cols: usize) {
        titlefetch::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        if !key.key_modifiers.is_empty() {
            return None;
        }

        match key.bare_key {
            BareKey::Enter | BareKey::Char('f') => Some(Event::Fetch),
            BareKey::Char('t') => Some(Event::ToggleSimulation),
            BareKey::Esc | BareKey::Char('q') => Some(Event::CloseFocus),
            _ => None,
        }
    }

    /// Runs an event through the library and executes resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}

//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the zuggest library and the
//! Zellij plugin system. It maps Zellij key and mouse events to library
//! events, runs the resulting actions and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: `Key` and `Mouse` events
//! 3. **Update**: map events, delegate to `handle_event`
//! 4. **Render**: call the library renderer
//!
//! # Keybindings
//!
//! - `Down` / `Ctrl+n`: next suggestion
//! - `Up` / `Ctrl+p`: previous suggestion
//! - `Enter`: search for the highlighted suggestion or the typed text
//! - `Backspace`: delete the last character
//! - `Esc`: hide the plugin
//! - any printable character: type it
//! - left click: select a suggestion, Remove a recent one, or unfocus when
//!   outside the widget

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zuggest::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: zuggest::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zuggest::AppState::new(
                vec![],
                zuggest::storage::RecencyStore::volatile(zuggest::storage::DEFAULT_RECENCY_KEY),
                zuggest::Theme::default(),
            ),
        }
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.app.teardown();
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zuggest::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(
            items_file = ?config.items_file,
            store_file = %config.store_file.display(),
            max_suggestions = config.max_suggestions,
            "parsed configuration"
        );

        self.app = zuggest::initialize(&config);

        subscribe(&[EventType::Key, EventType::Mouse]);
        tracing::debug!(item_count = self.app.items.len(), "plugin load complete");
    }

    /// Returns `true` if the plugin should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => Self::map_key_event(key),
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            _ => return false,
        };

        let _guard = tracing::debug_span!("plugin_update", event = ?our_event).entered();

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                true
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zuggest::ui::render(&mut self.app, rows, cols);
    }
}

impl State {
    fn map_key_event(key: &KeyWithModifier) -> Event {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Event::KeyDown,
                BareKey::Char('p') => Event::KeyUp,
                _ => Event::OtherKey,
            };
        }

        match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::Enter,
            BareKey::Backspace => Event::Backspace,
            BareKey::Esc => Event::Close,
            BareKey::Char(c) if !c.is_control() => Event::Char(c),
            _ => Event::OtherKey,
        }
    }

    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => Some(Event::PointerDown { line, col }),
            _ => None,
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin");
                hide_self();
            }
        }
    }
}

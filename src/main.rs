//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the zemoji library and
//! the Zellij plugin system. It implements `ZellijPlugin`, translates key
//! presses into library events and library actions into Zellij API calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build an `AppState` backed by
//!    an in-memory store so the picker renders immediately
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Permissions granted**: Attach the durable store so recently used
//!    emojis are restored, keeping the current view
//! 4. **Update**: Handle key events, delegate to the library layer
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In browse mode:
//! - `h`/`l`/`Left`/`Right`: Move across the grid
//! - `j`/`k`/`Down`/`Up`: Move between grid rows
//! - `Tab`/`]`: Next section
//! - `Shift+Tab`/`[`: Previous section
//! - `Enter`: Insert the selected emoji
//! - `/`: Enter search mode
//! - `X` (shift): Clear recently used emojis
//! - `q`/`Esc`: Close plugin
//!
//! In search mode:
//! - Printable characters: Type into the search term
//! - `Backspace`: Delete the last character
//! - `Down`/`Up`: Move between results
//! - `Enter`: Insert the selected result
//! - `Esc`: Exit search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zemoji::storage::MemoryStore;
use zemoji::{handle_event, Action, AppState, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zemoji::initialize(&Config::default(), Box::new(MemoryStore::default())),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WriteToStdin`: Insert the chosen glyph into the focused pane
    /// - `ChangeApplicationState`: Hide the plugin pane
    /// - `FullHdAccess`: Persist recently used emojis under `/host`
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zemoji::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = zemoji::initialize(&config, Box::new(MemoryStore::default()));

        tracing::debug!("requesting permissions");
        request_permission(&[
            PermissionType::WriteToStdin,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                return self.handle_permission_result(permissions);
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// The grid width depends on the pane, so the viewport is recorded before
    /// delegating to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        zemoji::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorUp);
        }

        match self.app.input_mode {
            InputMode::Search => Self::map_search_key(key),
            InputMode::Browse => Self::map_browse_key(key),
        }
    }

    fn map_browse_key(key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::PreviousSection);
        }

        Some(match key.bare_key {
            BareKey::Left | BareKey::Char('h') => Event::CursorLeft,
            BareKey::Right | BareKey::Char('l') => Event::CursorRight,
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Tab | BareKey::Char(']') => Event::NextSection,
            BareKey::Char('[') => Event::PreviousSection,
            BareKey::Enter => Event::Select,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('X') => Event::ClearRecents,
            BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_search_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down => Event::CursorDown,
            BareKey::Up => Event::CursorUp,
            BareKey::Enter => Event::Select,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// On grant the durable store replaces the in-memory one and its recents are
    /// restored; search term, section and cursor carry over. Denial keeps the
    /// in-memory store for the session.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> bool {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - opening durable store");
                self.app.attach_store(zemoji::open_store());
                true
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - recents will not persist");
                false
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `InsertGlyph`: Hide the plugin pane, then write the glyph to the
    ///   pane that regains focus
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::InsertGlyph { ref glyph } => {
                tracing::debug!(glyph = %glyph, "inserting glyph");
                hide_self();
                write_chars(glyph);
            }
        }
    }
}

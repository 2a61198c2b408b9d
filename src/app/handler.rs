//! Event handling and state transition logic.
//!
//! Processes user input translated by the plugin runtime, mutates [`AppState`]
//! and returns the actions to execute.
//!
//! # Architecture
//!
//! 1. The runtime maps a key press to an [`Event`]
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations go through `AppState` and `PickerController` methods
//! 4. The handler returns whether to re-render plus the actions to run
//!
//! # Example
//!
//! ```rust
//! use zemoji::app::{handle_event, Action, AppState, Event};
//! use zemoji::picker::PickerController;
//! use zemoji::storage::MemoryStore;
//! use zemoji::ui::Theme;
//! use zemoji::EmojiRecord;
//!
//! let picker = PickerController::new(
//!     vec![EmojiRecord::new("🐶", "dog face", "Animals")],
//!     Box::new(MemoryStore::default()),
//! );
//! let mut state = AppState::new(picker, Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Select)?;
//! assert_eq!(actions, vec![Action::InsertGlyph { glyph: "🐶".to_string() }]);
//! # Ok::<(), zemoji::PickerError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor one emoji left (wraps).
    CursorLeft,
    /// Moves the cursor one emoji right (wraps).
    CursorRight,
    /// Moves the cursor up one grid row, or to the previous result.
    CursorUp,
    /// Moves the cursor down one grid row, or to the next result.
    CursorDown,
    /// Activates the next section tab.
    NextSection,
    /// Activates the previous section tab.
    PreviousSection,
    /// Selects the emoji under the cursor.
    Select,
    /// Enters search mode with an empty term.
    SearchMode,
    /// Leaves search mode and clears the term.
    ExitSearch,
    /// Appends a character to the search term.
    Char(char),
    /// Removes the last character from the search term.
    Backspace,
    /// Forgets all recently used emojis.
    ClearRecents,
    /// Hides the plugin without selecting anything.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the UI must be re-rendered.
///
/// # Errors
///
/// No current event fails; store errors are logged by the picker. The `Result`
/// keeps the runtime's error path uniform.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CursorLeft => {
            state.move_cursor_left();
            Ok((true, vec![]))
        }
        Event::CursorRight => {
            state.move_cursor_right();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::NextSection => {
            state.picker.next_section();
            state.reset_cursor();
            Ok((true, vec![]))
        }
        Event::PreviousSection => {
            state.picker.previous_section();
            state.reset_cursor();
            Ok((true, vec![]))
        }
        Event::Select => {
            let Some(record) = state.selected_emoji().cloned() else {
                tracing::debug!("no emoji under cursor");
                if state.input_mode.is_search() {
                    tracing::debug!("exiting search mode (no selection)");
                    leave_search(state);
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            let selection = state.picker.select_emoji(&record);
            state.input_mode = InputMode::Browse;
            state.clamp_cursor();

            Ok((
                true,
                vec![Action::InsertGlyph {
                    glyph: selection.glyph,
                }],
            ))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            state.picker.set_search_term(String::new());
            state.reset_cursor();
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(term = %state.picker.search_term(), "exiting search mode");
            leave_search(state);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }

            let mut term = state.picker.search_term().to_string();
            term.push(*c);
            state.picker.set_search_term(term);
            state.reset_cursor();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }

            let mut term = state.picker.search_term().to_string();
            if term.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.picker.set_search_term(term);
            state.reset_cursor();
            Ok((true, vec![]))
        }
        Event::ClearRecents => {
            if state.picker.recents().is_empty() {
                return Ok((false, vec![]));
            }
            state.picker.clear_recents();
            state.clamp_cursor();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn leave_search(state: &mut AppState) {
    state.input_mode = InputMode::Browse;
    state.picker.set_search_term(String::new());
    state.reset_cursor();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmojiRecord;
    use crate::picker::{PickerController, RECENT_SECTION_NAME};
    use crate::storage::MemoryStore;
    use crate::ui::Theme;

    fn state() -> AppState {
        let picker = PickerController::new(
            vec![
                EmojiRecord::new("😀", "grinning face", "Smileys"),
                EmojiRecord::new("🐶", "dog face", "Animals"),
                EmojiRecord::new("🐱", "cat face", "Animals"),
            ],
            Box::new(MemoryStore::default()),
        );
        AppState::new(picker, Theme::default())
    }

    fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|event| handle_event(state, event).unwrap().1)
            .collect()
    }

    #[test]
    fn select_emits_glyph_once_and_updates_recents() {
        let mut state = state();

        let actions = send(&mut state, &[Event::CursorRight, Event::Select]);

        assert_eq!(
            actions,
            vec![Action::InsertGlyph {
                glyph: "🐱".to_string()
            }]
        );
        assert_eq!(state.picker.recents()[0].glyph, "🐱");
        assert_eq!(state.picker.section_tabs()[0], RECENT_SECTION_NAME);
        assert_eq!(state.picker.active_section(), Some("Animals"));
    }

    #[test]
    fn typing_filters_and_enter_selects_result() {
        let mut state = state();

        let mut events = vec![Event::SearchMode];
        events.extend("GRIN".chars().map(Event::Char));
        events.push(Event::Select);
        let actions = send(&mut state, &events);

        assert_eq!(
            actions,
            vec![Action::InsertGlyph {
                glyph: "😀".to_string()
            }]
        );
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.picker.search_term(), "");
    }

    #[test]
    fn result_navigation_follows_catalog_order() {
        let mut state = state();

        let mut events = vec![Event::SearchMode];
        events.extend("face".chars().map(Event::Char));
        events.extend([Event::CursorDown, Event::CursorDown]);
        send(&mut state, &events);

        assert_eq!(state.selected_emoji().unwrap().glyph, "🐱");
    }

    #[test]
    fn characters_are_ignored_while_browsing() {
        let mut state = state();

        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.picker.search_term(), "");
    }

    #[test]
    fn backspace_and_exit_search_edit_the_term() {
        let mut state = state();

        send(
            &mut state,
            &[Event::SearchMode, Event::Char('d'), Event::Char('x'), Event::Backspace],
        );
        assert_eq!(state.picker.search_term(), "d");

        send(&mut state, &[Event::ExitSearch]);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.picker.search_term(), "");
    }

    #[test]
    fn select_without_results_leaves_search() {
        let mut state = state();

        let mut events = vec![Event::SearchMode];
        events.extend("zebra".chars().map(Event::Char));
        events.push(Event::Select);
        let actions = send(&mut state, &events);

        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.picker.recents().is_empty());
    }

    #[test]
    fn section_switch_resets_cursor() {
        let mut state = state();
        send(&mut state, &[Event::CursorRight]);
        assert_eq!(state.cursor, 1);

        send(&mut state, &[Event::NextSection]);
        assert_eq!(state.picker.active_section(), Some("Smileys"));
        assert_eq!(state.cursor, 0);

        send(&mut state, &[Event::PreviousSection]);
        assert_eq!(state.picker.active_section(), Some("Animals"));
    }

    #[test]
    fn clearing_recents_returns_to_first_category() {
        let mut state = state();
        send(&mut state, &[Event::Select]);
        state.picker.set_active_section(RECENT_SECTION_NAME);

        let (render, _) = handle_event(&mut state, &Event::ClearRecents).unwrap();

        assert!(render);
        assert!(state.picker.recents().is_empty());
        assert_eq!(state.picker.active_section(), Some("Animals"));

        let (render, _) = handle_event(&mut state, &Event::ClearRecents).unwrap();
        assert!(!render);
    }

    #[test]
    fn close_emits_close_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}

//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin runtime executes them in order; the handler itself never touches the
//! host.
//!
//! # Example
//!
//! ```rust
//! use zemoji::app::Action;
//!
//! let actions = vec![Action::InsertGlyph { glyph: "🐶".to_string() }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane without selecting anything.
    CloseFocus,

    /// Delivers a selected emoji to the hosting view.
    ///
    /// Emitted exactly once per selection. The runtime hides the plugin pane and
    /// writes the glyph to the pane that regains focus.
    InsertGlyph {
        /// The emoji glyph to insert.
        glyph: String,
    },
}

//! Input mode state for the application.
//!
//! The picker runs in one of two modes:
//! - **Browse**: tabbed grid navigation and commands
//! - **Search**: keystrokes edit the search term and the result list replaces
//!   the grid once the term is non-blank
//!
//! # Example
//!
//! ```rust
//! use zemoji::app::InputMode;
//!
//! let mode = InputMode::default();
//! assert_eq!(mode, InputMode::Browse);
//! assert!(!mode.is_search());
//! ```

/// Current input handling mode.
///
/// Controls which keybindings are active and how the footer and search bar are
/// rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Grid navigation and commands.
    ///
    /// Available keybindings: h/j/k/l or arrows (move), Tab/Shift+Tab or ]/[
    /// (switch section), / (search), X (clear recents), Enter (select), q (quit).
    #[default]
    Browse,

    /// Search term entry.
    ///
    /// Printable characters are appended to the term. Ctrl+n/p or arrows move
    /// through results, Enter selects, Esc returns to browsing.
    Search,
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search)
    }
}

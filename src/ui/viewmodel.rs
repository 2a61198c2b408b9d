//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry no
//! logic, only display-ready data such as the visible grid window, selection
//! flags and highlight ranges.
//!
//! # Example
//!
//! ```rust
//! use zemoji::ui::viewmodel::{Body, FooterInfo, GridCell, HeaderInfo, TabItem, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Emoji Picker (1) ".to_string() },
//!     tabs: vec![TabItem { label: "Animals".to_string(), is_active: true }],
//!     body: Body::Grid(vec![vec![GridCell { glyph: "🐶".to_string(), is_selected: true }]]),
//!     status: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     search_bar: None,
//! };
//! assert!(vm.empty_state.is_none());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title and count).
    pub header: HeaderInfo,

    /// Section tabs in display order.
    pub tabs: Vec<TabItem>,

    /// Visible window of the grid or the search result list.
    pub body: Body,

    /// Details of the emoji under the cursor, or a no-match notice.
    pub status: Option<StatusLine>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Full-screen message shown instead of everything else when no emojis exist.
    pub empty_state: Option<EmptyState>,

    /// Present while in search mode.
    pub search_bar: Option<SearchBarInfo>,
}

/// Main content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Rows of the active section's emoji grid, already windowed.
    Grid(Vec<Vec<GridCell>>),

    /// Search results, one per line, already windowed.
    Results(Vec<DisplayItem>),
}

/// One section tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub label: String,
    pub is_active: bool,
}

/// One emoji in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub glyph: String,
    pub is_selected: bool,
}

/// One search result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub glyph: String,

    /// Display name, truncated to fit.
    pub name: String,

    pub category: String,

    /// Whether this item is under the cursor.
    pub is_selected: bool,

    /// Character ranges of `name` to highlight.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Status line below the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "Enter: insert  /: search  q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No emojis available").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term, verbatim.
    pub query: String,
}

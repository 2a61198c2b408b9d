//! Application state management and view model computation.
//!
//! [`AppState`] wraps the [`PickerController`] with the transient state only the
//! terminal shell needs: the cursor, the input mode, the theme and the last
//! known viewport width. View models are computed on demand from this state.
//!
//! # Cursor
//!
//! The cursor indexes into the visible list: the search results while the
//! search term is non-blank, otherwise the active section's emojis. In the grid,
//! horizontal moves step by one and wrap, vertical moves step by a full grid
//! row and stop at the edges.
//!
//! # Example
//!
//! ```rust
//! use zemoji::app::AppState;
//! use zemoji::picker::PickerController;
//! use zemoji::storage::MemoryStore;
//! use zemoji::ui::Theme;
//! use zemoji::EmojiRecord;
//!
//! let picker = PickerController::new(
//!     vec![EmojiRecord::new("🐶", "dog face", "Animals")],
//!     Box::new(MemoryStore::default()),
//! );
//! let state = AppState::new(picker, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.tabs.len(), 1);
//! ```

use super::modes::InputMode;
use crate::domain::EmojiRecord;
use crate::picker::PickerController;
use crate::storage::KeyValueStore;
use crate::ui::helpers::{display_width, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, DisplayItem, EmptyState, FooterInfo, GridCell, HeaderInfo, SearchBarInfo, StatusLine,
    TabItem, UIViewModel,
};

/// Terminal columns taken by one grid cell (a two-column glyph plus padding).
const CELL_WIDTH: usize = 4;

/// Blank columns left of the grid and the result list.
const BODY_MARGIN: usize = 2;

/// Widest result name, in columns, shown before truncation.
const NAME_COLUMN_WIDTH: usize = 40;

/// Viewport width assumed until the host reports one.
const DEFAULT_VIEWPORT_COLS: usize = 80;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Picker state: catalog, recents, search term and active section.
    pub picker: PickerController,

    /// Zero-based index into the visible emoji list.
    pub cursor: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Why no emojis are available, shown in the empty state.
    pub load_error: Option<String>,

    /// Terminal width at the last render, used for grid-row navigation.
    viewport_cols: usize,
}

impl AppState {
    /// Creates the application state around an initialized picker.
    #[must_use]
    pub const fn new(picker: PickerController, theme: Theme) -> Self {
        Self {
            picker,
            cursor: 0,
            input_mode: InputMode::Browse,
            theme,
            load_error: None,
            viewport_cols: DEFAULT_VIEWPORT_COLS,
        }
    }

    /// Attaches the reason the catalog is empty.
    #[must_use]
    pub fn with_load_error(mut self, error: impl Into<String>) -> Self {
        self.load_error = Some(error.into());
        self
    }

    /// Records the terminal size reported by the host.
    pub fn set_viewport(&mut self, _rows: usize, cols: usize) {
        self.viewport_cols = cols;
        self.clamp_cursor();
    }

    /// Number of emojis per grid row at the current viewport width.
    #[must_use]
    pub const fn grid_columns(&self) -> usize {
        grid_columns(self.viewport_cols)
    }

    /// The list the cursor moves through.
    #[must_use]
    pub fn visible_emojis(&self) -> Vec<&EmojiRecord> {
        if self.picker.is_searching() {
            self.picker.filtered_results()
        } else {
            self.picker.current_section_emojis().iter().collect()
        }
    }

    fn visible_len(&self) -> usize {
        if self.picker.is_searching() {
            self.picker.filtered_results().len()
        } else {
            self.picker.current_section_emojis().len()
        }
    }

    /// The emoji under the cursor, if any.
    #[must_use]
    pub fn selected_emoji(&self) -> Option<&EmojiRecord> {
        self.visible_emojis().get(self.cursor).copied()
    }

    pub fn move_cursor_right(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    pub fn move_cursor_left(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    /// Moves down one grid row, or one result while searching.
    ///
    /// From the row above a partial last row, lands on the last emoji.
    pub fn move_cursor_down(&mut self) {
        if self.picker.is_searching() {
            self.move_cursor_right();
            return;
        }

        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let columns = self.grid_columns();
        if self.cursor + columns < len {
            self.cursor += columns;
        } else if self.cursor / columns < (len - 1) / columns {
            self.cursor = len - 1;
        }
    }

    /// Moves up one grid row, or one result while searching.
    pub fn move_cursor_up(&mut self) {
        if self.picker.is_searching() {
            self.move_cursor_left();
            return;
        }

        let columns = self.grid_columns();
        if self.cursor >= columns {
            self.cursor -= columns;
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Moves the picker onto a durable store without resetting the view.
    ///
    /// Recents restored from `store` may add the recents tab; the cursor is
    /// clamped to whatever list is now visible.
    pub fn attach_store(&mut self, store: Box<dyn KeyValueStore>) {
        self.picker.attach_store(store);
        self.clamp_cursor();
    }

    /// Keeps the cursor inside the visible list after it changes.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    /// Computes a renderable view model for a `rows` by `cols` terminal.
    ///
    /// # Windowing
    ///
    /// The grid is windowed by whole rows and the result list by lines. The
    /// window is centered on the cursor and shifted back when it would run past
    /// the end, so the last page is always full.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        if self.picker.records().is_empty() && self.picker.recents().is_empty() {
            return UIViewModel {
                header: HeaderInfo {
                    title: " Emoji Picker ".to_string(),
                },
                tabs: vec![],
                body: Body::Grid(vec![]),
                status: None,
                footer: self.compute_footer(),
                empty_state: Some(EmptyState {
                    message: "No emojis available".to_string(),
                    subtitle: self
                        .load_error
                        .clone()
                        .unwrap_or_else(|| "The emoji dataset is empty".to_string()),
                }),
                search_bar: None,
            };
        }

        let available_rows = self.calculate_available_rows(rows);
        let (body, status) = if self.picker.is_searching() {
            self.compute_results(available_rows)
        } else {
            self.compute_grid(available_rows, cols)
        };

        UIViewModel {
            header: self.compute_header(),
            tabs: self.compute_tabs(),
            body,
            status,
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
        }
    }

    fn compute_grid(&self, available_rows: usize, cols: usize) -> (Body, Option<StatusLine>) {
        let emojis = self.picker.current_section_emojis();
        if emojis.is_empty() {
            let status = StatusLine {
                text: "Nothing in this section".to_string(),
            };
            return (Body::Grid(vec![]), Some(status));
        }

        let columns = grid_columns(cols);
        let grid_rows: Vec<&[EmojiRecord]> = emojis.chunks(columns).collect();
        let (start, end) = visible_window(self.cursor / columns, grid_rows.len(), available_rows);

        let cells = grid_rows[start..end]
            .iter()
            .enumerate()
            .map(|(row_offset, row)| {
                let row_start = (start + row_offset) * columns;
                row.iter()
                    .enumerate()
                    .map(|(col, record)| GridCell {
                        glyph: record.glyph.clone(),
                        is_selected: row_start + col == self.cursor,
                    })
                    .collect()
            })
            .collect();

        (Body::Grid(cells), emojis.get(self.cursor).map(describe))
    }

    fn compute_results(&self, available_rows: usize) -> (Body, Option<StatusLine>) {
        let results = self.picker.filtered_results();
        if results.is_empty() {
            let status = StatusLine {
                text: format!("No emojis match \"{}\"", self.picker.search_term().trim()),
            };
            return (Body::Results(vec![]), Some(status));
        }

        let (start, end) = visible_window(self.cursor, results.len(), available_rows);
        let items = results[start..end]
            .iter()
            .enumerate()
            .map(|(offset, record)| self.compute_display_item(record, start + offset == self.cursor))
            .collect();

        (Body::Results(items), results.get(self.cursor).copied().map(describe))
    }

    fn compute_display_item(&self, record: &EmojiRecord, is_selected: bool) -> DisplayItem {
        let (name, visible_len) = if display_width(&record.name) > NAME_COLUMN_WIDTH {
            let (kept, _) = truncate_to_width(&record.name, NAME_COLUMN_WIDTH - 3);
            let visible_len = kept.chars().count();
            (format!("{kept}..."), visible_len)
        } else {
            (record.name.clone(), record.name.chars().count())
        };

        let highlight_ranges = self
            .picker
            .highlight_ranges(&record.name)
            .into_iter()
            .filter(|&(start, _)| start < visible_len)
            .map(|(start, end)| (start, end.min(visible_len)))
            .collect();

        DisplayItem {
            glyph: record.glyph.clone(),
            name,
            category: record.category.clone(),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_tabs(&self) -> Vec<TabItem> {
        let active = self.picker.active_section();
        self.picker
            .section_tabs()
            .iter()
            .map(|tab| TabItem {
                label: tab.clone(),
                is_active: active == Some(tab.as_str()),
            })
            .collect()
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.picker.is_searching() {
            format!(" Search Results ({}) ", self.picker.filtered_results().len())
        } else {
            match self.picker.active_section() {
                Some(section) => format!(
                    " Emoji Picker - {section} ({}) ",
                    self.picker.current_section_emojis().len()
                ),
                None => " Emoji Picker ".to_string(),
            }
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Browse => {
                "h/j/k/l: move  Tab/[/]: section  Enter: insert  /: search  X: clear recent  q: quit"
            }
            InputMode::Search => "Type to search  Ctrl+n/p: move  Enter: insert  Esc: back",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        self.input_mode.is_search().then(|| SearchBarInfo {
            query: self.picker.search_term().to_string(),
        })
    }

    /// Rows left for the body after the header, tabs, status line, footer,
    /// borders and (in search mode) the three-line search bar.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Browse => total_rows.saturating_sub(8),
            InputMode::Search => total_rows.saturating_sub(11),
        }
    }
}

/// Number of grid cells that fit in `cols` terminal columns, at least one.
#[must_use]
pub const fn grid_columns(cols: usize) -> usize {
    let usable = cols.saturating_sub(BODY_MARGIN * 2) / CELL_WIDTH;
    if usable == 0 {
        1
    } else {
        usable
    }
}

fn describe(record: &EmojiRecord) -> StatusLine {
    StatusLine {
        text: format!("{}  {}  ({})", record.glyph, record.name, record.category),
    }
}

/// Window `[start, end)` of `len` items showing `available` of them around `selected`.
fn visible_window(selected: usize, len: usize, available: usize) -> (usize, usize) {
    let available = available.max(1);
    let mut start = selected.saturating_sub(available / 2);
    let end = (start + available).min(len);

    if end.saturating_sub(start) < available && len >= available {
        start = end.saturating_sub(available);
    }

    (start.min(end), end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::RECENT_SECTION_NAME;
    use crate::storage::MemoryStore;

    fn animals(count: usize) -> Vec<EmojiRecord> {
        (0..count)
            .map(|n| EmojiRecord::new(format!("a{n}"), format!("animal {n}"), "Animals"))
            .collect()
    }

    fn state_with(records: Vec<EmojiRecord>) -> AppState {
        let picker = PickerController::new(records, Box::new(MemoryStore::default()));
        AppState::new(picker, Theme::default())
    }

    #[test]
    fn grid_columns_never_drop_to_zero() {
        assert_eq!(grid_columns(84), 20);
        assert_eq!(grid_columns(3), 1);
        assert_eq!(grid_columns(0), 1);
    }

    #[test]
    fn vertical_moves_step_by_grid_row() {
        let mut state = state_with(animals(10));
        // 20 columns of usable width fit 4 cells
        state.set_viewport(24, 20);
        assert_eq!(state.grid_columns(), 4);

        state.move_cursor_down();
        assert_eq!(state.cursor, 4);
        state.move_cursor_down();
        assert_eq!(state.cursor, 8);
        state.move_cursor_down();
        assert_eq!(state.cursor, 8);
        state.move_cursor_up();
        assert_eq!(state.cursor, 4);

        state.cursor = 7;
        state.move_cursor_down();
        assert_eq!(state.cursor, 9);
    }

    #[test]
    fn horizontal_moves_wrap() {
        let mut state = state_with(animals(3));
        state.move_cursor_left();
        assert_eq!(state.cursor, 2);
        state.move_cursor_right();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn viewport_change_clamps_cursor() {
        let mut state = state_with(animals(3));
        state.cursor = 10;
        state.set_viewport(24, 80);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn grid_viewmodel_marks_active_tab_and_selected_cell() {
        let mut records = animals(10);
        records.push(EmojiRecord::new("😀", "grinning face", "Smileys"));
        let mut state = state_with(records);
        state.set_viewport(24, 20);
        state.cursor = 5;

        let vm = state.compute_viewmodel(24, 20);

        let labels: Vec<(&str, bool)> = vm.tabs.iter().map(|t| (t.label.as_str(), t.is_active)).collect();
        assert_eq!(labels, [("Animals", true), ("Smileys", false)]);
        assert_eq!(vm.header.title, " Emoji Picker - Animals (10) ");

        let Body::Grid(rows) = &vm.body else {
            panic!("expected grid body");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].len(), 2);
        assert!(rows[1][1].is_selected);
        assert_eq!(rows.iter().flatten().filter(|c| c.is_selected).count(), 1);
        assert_eq!(vm.status.unwrap().text, "a5  animal 5  (Animals)");
        assert!(vm.search_bar.is_none());
    }

    #[test]
    fn grid_window_follows_cursor() {
        let mut state = state_with(animals(100));
        state.set_viewport(12, 20);
        state.cursor = 99;

        let vm = state.compute_viewmodel(12, 20);

        let Body::Grid(rows) = &vm.body else {
            panic!("expected grid body");
        };
        assert_eq!(rows.len(), 4);
        assert!(rows[3][3].is_selected);
    }

    #[test]
    fn search_viewmodel_lists_results_with_highlights() {
        let mut state = state_with(vec![
            EmojiRecord::new("🐶", "dog face", "Animals"),
            EmojiRecord::new("😀", "grinning face", "Smileys"),
            EmojiRecord::new("🍕", "pizza", "Food"),
        ]);
        state.input_mode = InputMode::Search;
        state.picker.set_search_term("Face");
        state.cursor = 1;

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.header.title, " Search Results (2) ");
        assert_eq!(vm.search_bar.unwrap().query, "Face");
        let Body::Results(items) = &vm.body else {
            panic!("expected result list");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].highlight_ranges, vec![(4, 8)]);
        assert!(items[1].is_selected);
        assert_eq!(state.selected_emoji().unwrap().glyph, "😀");
    }

    #[test]
    fn search_without_matches_reports_term() {
        let mut state = state_with(animals(2));
        state.input_mode = InputMode::Search;
        state.picker.set_search_term("  zebra ");

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.body, Body::Results(vec![]));
        assert_eq!(vm.status.unwrap().text, "No emojis match \"zebra\"");
        assert!(state.selected_emoji().is_none());
    }

    #[test]
    fn long_names_are_truncated_with_clamped_highlights() {
        let long = "a very long emoji name that keeps going past the column";
        let mut state = state_with(vec![EmojiRecord::new("🦄", long, "Animals")]);
        state.picker.set_search_term("column");

        let vm = state.compute_viewmodel(24, 80);

        let Body::Results(items) = &vm.body else {
            panic!("expected result list");
        };
        assert_eq!(display_width(&items[0].name), NAME_COLUMN_WIDTH);
        assert!(items[0].name.ends_with("..."));
        assert!(items[0].highlight_ranges.is_empty());
    }

    #[test]
    fn empty_catalog_shows_empty_state_with_reason() {
        let state = state_with(vec![]).with_load_error("dataset is malformed");

        let vm = state.compute_viewmodel(24, 80);

        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "No emojis available");
        assert_eq!(empty.subtitle, "dataset is malformed");
    }

    #[test]
    fn recents_tab_lists_selections() {
        let mut state = state_with(animals(3));
        let first = state.picker.records()[2].clone();
        let _ = state.picker.select_emoji(&first);
        state.picker.set_active_section(RECENT_SECTION_NAME);

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.tabs[0].label, RECENT_SECTION_NAME);
        assert!(vm.tabs[0].is_active);
        assert_eq!(
            vm.body,
            Body::Grid(vec![vec![GridCell {
                glyph: "a2".to_string(),
                is_selected: true
            }]])
        );
    }

    #[test]
    fn attaching_a_store_keeps_search_and_cursor() {
        let mut state = state_with(animals(5));
        state.input_mode = InputMode::Search;
        state.picker.set_search_term("animal");
        state.cursor = 3;

        let stored = r#"[{"emoji":"a1","name":"animal 1","category":"Animals"}]"#;
        state.attach_store(Box::new(MemoryStore::with_entries([(
            crate::picker::RECENTS_STORAGE_KEY,
            stored,
        )])));

        assert_eq!(state.input_mode, InputMode::Search);
        assert_eq!(state.picker.search_term(), "animal");
        assert_eq!(state.cursor, 3);
        assert_eq!(state.picker.recents()[0].glyph, "a1");
        assert_eq!(state.picker.active_section(), Some("Animals"));
    }

    #[test]
    fn window_keeps_last_page_full() {
        assert_eq!(visible_window(9, 10, 4), (6, 10));
        assert_eq!(visible_window(0, 10, 4), (0, 4));
        assert_eq!(visible_window(5, 10, 4), (3, 7));
        assert_eq!(visible_window(0, 2, 4), (0, 2));
        assert_eq!(visible_window(0, 0, 4), (0, 0));
    }
}

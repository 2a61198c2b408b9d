//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - `header`: Title bar
//! - `tabs`: Section tab bar
//! - `search`: Search input box
//! - `grid`: Emoji grid and search result list
//! - `footer`: Status line and keybinding hints
//! - `empty`: Empty state message
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Tabs]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Grid rows or result lines]
//! [Blank padding to fill screen]
//! [Status]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod grid;
mod header;
mod search;
mod tabs;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use footer::{render_footer, render_status};
use grid::{render_grid, render_results};
use header::render_header;
use search::render_search_bar;
use tabs::render_tabs;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full picker layout.
///
/// The body is drawn from the row after the tabs (and search bar) down to the
/// status line, which sits three rows above the bottom.
pub fn render_picker(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_tabs(current_row, &vm.tabs, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let _current_row = match &vm.body {
        Body::Grid(grid) => render_grid(current_row, grid, theme, cols),
        Body::Results(items) => render_results(current_row, items, theme, cols),
    };

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let status_row = border_row.saturating_sub(1);

    if let Some(status) = &vm.status {
        render_status(status_row, status, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

//! Emoji grid and search result list renderers.

use crate::ui::helpers::{self, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, GridCell};

/// Blank columns before the first cell or result.
const MARGIN: usize = 2;

/// Column where the result category starts, relative to the name.
const NAME_COLUMN: usize = 42;

/// Renders grid rows starting at `row` and returns the row after the last one.
///
/// Each cell is the glyph with one space on either side; the selected cell gets
/// the selection background.
pub fn render_grid(row: usize, grid: &[Vec<GridCell>], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for cells in grid {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(MARGIN));

        let mut used = MARGIN;
        for cell in cells {
            if cell.is_selected {
                print!("{}", Theme::fg(&theme.colors.selection_fg));
                print!("{}", Theme::bg(&theme.colors.selection_bg));
            }
            print!(" {} ", cell.glyph);
            print!("{}", Theme::reset());
            used += display_width(&cell.glyph) + 2;
        }

        print!("{}", " ".repeat(cols.saturating_sub(used)));
        current_row += 1;
    }
    current_row
}

/// Renders search results starting at `row` and returns the next free row.
pub fn render_results(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_result(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one result line.
///
/// ```text
/// [margin] GLYPH  NAME (padded to column) CATEGORY [padding to fill line]
/// ```
///
/// A selected line is painted with the selection colors across the full width
/// and skips match highlighting.
fn render_result(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!("{}", " ".repeat(MARGIN));
    print!("{}  ", item.glyph);
    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);

    let name_len = display_width(&item.name);
    print!("{}", " ".repeat(NAME_COLUMN.saturating_sub(name_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.category);

    let line_len = MARGIN
        + display_width(&item.glyph)
        + 2
        + name_len.max(NAME_COLUMN)
        + display_width(&item.category);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

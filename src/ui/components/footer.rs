//! Footer and status line renderers.

use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, StatusLine};

/// Renders the keybinding hints centered and dimmed at `row`.
///
/// Help text wider than the terminal is truncated. Returns the next row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let (help_text, text_len) = truncate_to_width(&footer.keybindings, cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the status line (emoji under the cursor or a notice) at `row`.
pub fn render_status(row: usize, status: &StatusLine, theme: &Theme, cols: usize) -> usize {
    let width = display_width(&status.text);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("  {}", status.text);
    print!("{}", " ".repeat(cols.saturating_sub(width + 2)));
    print!("{}", Theme::reset());
    row + 1
}

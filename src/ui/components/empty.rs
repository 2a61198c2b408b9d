//! Empty state component renderer.

use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message and its subtitle centered on rows 6 and 7.
///
/// Shown in place of the whole picker when there are no emojis at all, e.g.
/// when the dataset failed to load.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    let message_style = Theme::fg(&theme.colors.empty_state_fg);
    centered_line(6, &empty.message, &message_style, cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    centered_line(7, &empty.subtitle, &subtitle_style, cols);
}

fn centered_line(row: usize, text: &str, style: &str, cols: usize) {
    let (text, len) = truncate_to_width(text, cols);
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);

    position_cursor(row, 1);
    print!("{style}{}{text}{}{}", " ".repeat(left), " ".repeat(right), Theme::reset());
}

//! Shared rendering utilities.
//!
//! Low-level helpers used across components: cursor positioning, match
//! highlighting and column widths. Highlight ranges are character indices,
//! never byte indices. Every column count goes through `unicode-width`.

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Moves the cursor to a 1-indexed `row` and `col` (`\u{1b}[{row};{col}H`).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Out-of-bounds ranges are clamped. When `is_selected` is
/// `true` the text is printed plain so the selection colors stay intact.
///
/// # Example
///
/// ```rust
/// use zemoji::ui::helpers::render_highlighted_text;
/// use zemoji::ui::Theme;
///
/// let theme = Theme::default();
/// render_highlighted_text("dog face", &[(4, 8)], &theme, false);
/// ```
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    print!("{remaining}");
}

/// Terminal columns taken by `text`.
///
/// Emoji ZWJ, modifier and presentation sequences count as one two-column
/// glyph.
///
/// # Example
///
/// ```rust
/// use zemoji::ui::helpers::display_width;
///
/// assert_eq!(display_width("café"), 4);
/// assert_eq!(display_width("🐶"), 2);
/// ```
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Longest prefix of `text` that fits in `max` columns, with its width.
///
/// Cuts on char boundaries, so a sequence split at the edge keeps only its
/// leading chars.
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> (String, usize) {
    if display_width(text) <= max {
        return (text.to_string(), display_width(text));
    }

    let mut kept = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > max {
            break;
        }
        kept.push(c);
        width += char_width;
    }
    (kept, width)
}

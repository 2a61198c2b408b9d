//! Section tab bar renderer.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabItem;

/// Renders the section tabs on one line at `row` and returns the next row.
///
/// When the tabs are wider than the terminal, leading tabs are skipped until the
/// active one fits.
pub fn render_tabs(row: usize, tabs: &[TabItem], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let first = first_visible_tab(tabs, cols);
    let mut used = 1;
    print!(" ");

    for tab in &tabs[first..] {
        let width = tab_width(tab);
        if used + width > cols {
            break;
        }

        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.active_tab_fg));
            print!("{}", Theme::bg(&theme.colors.active_tab_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!(" {} ", tab.label);
        print!("{}", Theme::reset());
        print!(" ");
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

/// Label plus its padding and the separating space.
fn tab_width(tab: &TabItem) -> usize {
    display_width(&tab.label) + 3
}

/// Index of the first tab to draw so the active tab stays on screen.
fn first_visible_tab(tabs: &[TabItem], cols: usize) -> usize {
    let Some(active) = tabs.iter().position(|tab| tab.is_active) else {
        return 0;
    };

    let mut first = 0;
    let mut width: usize = tabs[..=active].iter().map(tab_width).sum::<usize>() + 1;
    while width > cols && first < active {
        width -= tab_width(&tabs[first]);
        first += 1;
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(labels: &[&str], active: usize) -> Vec<TabItem> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| TabItem {
                label: (*label).to_string(),
                is_active: i == active,
            })
            .collect()
    }

    #[test]
    fn scrolls_until_active_tab_fits() {
        let tabs = tabs(&["Animals", "Food", "Objects", "Symbols"], 3);
        // widths: 10, 7, 10, 10 plus the leading space
        assert_eq!(first_visible_tab(&tabs, 80), 0);
        assert_eq!(first_visible_tab(&tabs, 25), 2);
        assert_eq!(first_visible_tab(&tabs, 5), 3);
    }

    #[test]
    fn tab_width_uses_terminal_columns() {
        let tabs = tabs(&["Café", "Flags 🏁"], 0);
        assert_eq!(tab_width(&tabs[0]), 7);
        assert_eq!(tab_width(&tabs[1]), 11);
    }

    #[test]
    fn no_active_tab_starts_at_first() {
        let tabs = tabs(&["Animals", "Food"], 9);
        assert_eq!(first_visible_tab(&tabs, 10), 0);
    }
}

//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from `AppState`, then hand
//! it to the component renderers. Output goes to stdout, which Zellij draws
//! into the plugin pane.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI for a `rows` by `cols` pane.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders either the empty state or the full picker layout.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(empty, theme, cols);
        return;
    }

    components::render_picker(vm, theme, cols, rows);
}

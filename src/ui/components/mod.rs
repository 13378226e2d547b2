//! Composable UI component renderers.
//!
//! Each component draws one part of the widget at positions taken from the
//! frame's [`WidgetLayout`]:
//!
//! - [`header`]: title bar
//! - [`input`]: bordered input box
//! - [`dropdown`]: suggestion rows with recent markers and Remove labels
//! - [`results`]: summary line and matching items
//! - [`footer`]: keybinding hints
//! - [`empty`]: message shown when there is nothing to search

mod dropdown;
mod empty;
mod footer;
mod header;
mod input;
mod results;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cell;
use crate::ui::layout::WidgetLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use dropdown::render_dropdown;
use footer::render_footer;
use header::render_header;
use input::render_input;
use results::render_results;

/// Renders a horizontal border across the pane on `line`.
fn render_border(line: usize, color: &str, cols: usize) {
    position_cell(line, 0);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
}

/// Renders the full widget.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Input box]
/// [Dropdown rows]     (while suggesting)
/// [Results]           (after a commit with matches)
/// [Border]
/// [Footer]
/// ```
pub fn render_widget(vm: &UIViewModel, layout: &WidgetLayout, theme: &Theme) {
    let cols = layout.cols;

    render_header(layout.header_line, &vm.header, theme, cols);
    render_border(layout.header_line + 1, &theme.colors.border, cols);

    let dropdown = vm.dropdown.as_deref().filter(|rows| !rows.is_empty());
    render_input(layout.input, &vm.input, theme, dropdown.is_some());
    if let Some(items) = dropdown {
        render_dropdown(layout.container, &layout.rows, items, theme);
    }

    if let Some(results) = &vm.results {
        render_results(layout.results_top, results, theme, cols);
    }

    render_border(layout.footer_line.saturating_sub(1), &theme.colors.border, cols);
    render_footer(layout.footer_line, &vm.footer, theme, cols);
}

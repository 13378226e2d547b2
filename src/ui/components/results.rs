//! Result block component renderer.

use crate::ui::helpers::{position_cell, truncate};
use crate::ui::layout::SEARCH_BOX_MARGIN;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultsInfo;

/// Renders the summary line at `top`, then a title line and a description
/// line per result.
pub fn render_results(top: usize, results: &ResultsInfo, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);

    let summary = if results.hidden_count > 0 {
        format!("{}, {} more not shown", results.summary, results.hidden_count)
    } else {
        results.summary.clone()
    };

    position_cell(top, SEARCH_BOX_MARGIN);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate(&summary, width));
    print!("{}", Theme::reset());

    for (i, item) in results.items.iter().enumerate() {
        let line = top + 1 + i * 2;

        position_cell(line, SEARCH_BOX_MARGIN);
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.result_title_fg));
        print!("{}", truncate(&item.title, width));
        print!("{}", Theme::reset());

        position_cell(line + 1, SEARCH_BOX_MARGIN + 2);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", truncate(&item.description, width.saturating_sub(2)));
        print!("{}", Theme::reset());
    }
}

//! Suggestion dropdown component renderer.
//!
//! Rows hang below the input box inside the same frame. Recent titles carry
//! a marker on the left and a Remove label on the right; the label cells are
//! the ones [`WidgetLayout::hit_test`](crate::ui::layout::WidgetLayout::hit_test)
//! maps to [`HitTarget::Remove`](crate::ui::layout::HitTarget::Remove).

use crate::app::focus::Region;
use crate::ui::helpers::{self, char_len, position_cell, truncate};
use crate::ui::layout::{SuggestionRow, REMOVE_LABEL};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SuggestionItem;

const RECENT_MARKER: &str = "• ";

/// Renders `items` on the lines given by `rows`, then the bottom edge.
pub fn render_dropdown(
    container: Region,
    rows: &[SuggestionRow],
    items: &[SuggestionItem],
    theme: &Theme,
) {
    let inner_width = container.width.saturating_sub(2);

    for (row, item) in rows.iter().zip(items) {
        render_row(container, row.line, inner_width, item, theme);
    }

    let bottom = container.bottom().saturating_sub(1);
    position_cell(bottom, container.left);
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// Renders one row.
///
/// ```text
/// │ • Banana                              Remove │
/// ```
fn render_row(
    container: Region,
    line: usize,
    inner_width: usize,
    item: &SuggestionItem,
    theme: &Theme,
) {
    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    let marker_len = char_len(RECENT_MARKER);
    let label_len = if item.is_recent { char_len(REMOVE_LABEL) } else { 0 };
    let gap = usize::from(item.is_recent);
    let title_room = inner_width.saturating_sub(2 + marker_len + label_len + gap);
    let title = truncate(&item.title, title_room);
    let ranges: &[(usize, usize)] = if title == item.title {
        item.highlight_ranges.as_slice()
    } else {
        &[]
    };

    position_cell(line, container.left);
    print!("{}│{}", Theme::fg(&theme.colors.input_border), Theme::reset());
    print!("{base} ");

    if item.is_recent {
        print!("{}{RECENT_MARKER}{}{base}", Theme::fg(&theme.colors.recent_fg), Theme::reset());
    } else {
        print!("{}", " ".repeat(marker_len));
    }

    helpers::render_highlighted_text(&title, ranges, theme, &base, item.is_selected);

    let used = 1 + marker_len + char_len(&title);
    print!("{}", " ".repeat(inner_width.saturating_sub(used + label_len + 1)));

    if item.is_recent {
        print!(
            "{}{}{REMOVE_LABEL}{}{base}",
            Theme::underline(),
            Theme::fg(&theme.colors.remove_fg),
            Theme::reset()
        );
    }
    print!(" {}", Theme::reset());
    print!("{}│{}", Theme::fg(&theme.colors.input_border), Theme::reset());
}

//! Screen geometry shared by the renderer and pointer hit testing.
//!
//! All lines and columns are 0-indexed pane cells, the same coordinates
//! Zellij reports for mouse events. The renderer converts them to 1-indexed
//! cursor positions when printing.
//!
//! ```text
//! line 0           (blank)
//! line 1           header
//! line 2           border
//! lines 3..6       input box            ┐
//! lines 6..6+n     suggestion rows      │ container
//! line 6+n         dropdown bottom edge ┘
//! results_top      result summary, then two lines per result
//! footer_line - 1  border
//! footer_line      footer hints
//! ```

use crate::app::focus::{Point, Region};
use crate::app::AppState;

/// Columns left blank on each side of the input box.
pub const SEARCH_BOX_MARGIN: usize = 5;

/// Label of the affordance that forgets a recent search.
pub const REMOVE_LABEL: &str = "Remove";

const HEADER_LINE: usize = 1;
const INPUT_TOP: usize = 3;
const INPUT_HEIGHT: usize = 3;
const DROPDOWN_TOP: usize = INPUT_TOP + INPUT_HEIGHT;

/// Pane size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Input,
    /// A suggestion row, by index into the suggestion list.
    Suggestion(usize),
    /// The Remove affordance of a recent suggestion.
    Remove(usize),
}

/// One visible dropdown row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    /// Index into `AppState::suggestions`.
    pub index: usize,
    pub line: usize,
    /// Cells of the Remove label, present only for recent titles.
    pub remove: Option<Region>,
}

/// Geometry of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetLayout {
    pub header_line: usize,
    pub input: Region,
    /// Input box plus the visible dropdown.
    pub container: Region,
    pub rows: Vec<SuggestionRow>,
    pub results_top: usize,
    /// Results that fit below the summary line.
    pub results_capacity: usize,
    pub footer_line: usize,
    pub cols: usize,
}

impl WidgetLayout {
    /// Lays out the widget for `state.viewport`.
    ///
    /// Rows that do not fit above the footer are not drawn. They stay in the
    /// suggestion list, so keyboard navigation can still reach them.
    #[must_use]
    pub fn compute(state: &AppState) -> Self {
        let Viewport { rows, cols } = state.viewport;

        let width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
        let input = Region::new(INPUT_TOP, SEARCH_BOX_MARGIN, INPUT_HEIGHT, width);
        let footer_line = rows.saturating_sub(2);

        let row_count = if state.dropdown_visible() {
            let fits = footer_line.saturating_sub(DROPDOWN_TOP + 2);
            state.suggestions.len().min(fits)
        } else {
            0
        };

        let remove_width = REMOVE_LABEL.chars().count();
        let rows_vec: Vec<SuggestionRow> = state
            .suggestions
            .iter()
            .take(row_count)
            .enumerate()
            .map(|(index, item)| {
                let line = DROPDOWN_TOP + index;
                let remove = state.recency.contains(&item.title).then(|| {
                    let left = input.right().saturating_sub(2 + remove_width);
                    Region::new(line, left, 1, remove_width)
                });
                SuggestionRow {
                    index,
                    line,
                    remove,
                }
            })
            .collect();

        let container_height = if rows_vec.is_empty() {
            INPUT_HEIGHT
        } else {
            INPUT_HEIGHT + rows_vec.len() + 1
        };
        let container = Region::new(INPUT_TOP, SEARCH_BOX_MARGIN, container_height, width);

        let results_top = container.bottom() + 1;
        let results_capacity = footer_line
            .saturating_sub(1)
            .saturating_sub(results_top + 1)
            / 2;

        Self {
            header_line: HEADER_LINE,
            input,
            container,
            rows: rows_vec,
            results_top,
            results_capacity,
            footer_line,
            cols,
        }
    }

    /// Maps a pane cell to the widget element drawn there.
    ///
    /// Remove labels win over the row they sit on. Cells outside the
    /// container, including the dropdown's bottom edge, hit nothing.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        if self.input.contains(point) {
            return Some(HitTarget::Input);
        }

        let row = self.rows.iter().find(|row| row.line == point.line)?;
        if point.col < self.container.left || point.col >= self.container.right() {
            return None;
        }

        match row.remove {
            Some(remove) if remove.contains(point) => Some(HitTarget::Remove(row.index)),
            _ => Some(HitTarget::Suggestion(row.index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchableItem;
    use crate::storage::RecencyStore;
    use crate::ui::theme::Theme;

    fn state(titles: &[&str]) -> AppState {
        let items = titles.iter().map(|t| SearchableItem::new(*t, "")).collect();
        AppState::new(items, RecencyStore::volatile("recentlySearched"), Theme::default())
    }

    #[test]
    fn idle_container_is_input_box() {
        let state = state(&["Apple"]);
        let layout = WidgetLayout::compute(&state);

        assert!(layout.rows.is_empty());
        assert_eq!(layout.container, Region::new(3, 5, 3, 70));
        assert_eq!(layout.results_top, 7);
        assert_eq!(layout.footer_line, 22);
    }

    #[test]
    fn dropdown_rows_follow_input_box() {
        let mut state = state(&["Apple", "Banana"]);
        state.set_input("a");

        let layout = WidgetLayout::compute(&state);

        assert_eq!(layout.rows.len(), 2);
        assert_eq!(layout.rows[0].line, 6);
        assert_eq!(layout.rows[1].line, 7);
        assert_eq!(layout.container.height, 6);
        assert_eq!(layout.results_top, 10);
    }

    #[test]
    fn dropdown_is_clipped_to_pane() {
        let titles: Vec<String> = (0..10).map(|i| format!("item {i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut state = state(&refs);
        state.viewport = Viewport { rows: 12, cols: 80 };
        state.set_input("item");

        let layout = WidgetLayout::compute(&state);

        assert_eq!(state.suggestions.len(), 10);
        assert_eq!(layout.rows.len(), 2);
    }

    #[test]
    fn hit_test_distinguishes_remove_from_row() {
        let mut state = state(&["Apple", "Banana"]);
        state.commit("Banana").unwrap();
        state.set_input("a");

        let layout = WidgetLayout::compute(&state);
        let remove = layout.rows[1].remove.unwrap();

        assert!(layout.rows[0].remove.is_none());
        assert_eq!(remove, Region::new(7, 67, 1, 6));
        assert_eq!(layout.hit_test(Point::new(7, 68)), Some(HitTarget::Remove(1)));
        assert_eq!(layout.hit_test(Point::new(7, 10)), Some(HitTarget::Suggestion(1)));
        assert_eq!(layout.hit_test(Point::new(6, 68)), Some(HitTarget::Suggestion(0)));
    }

    #[test]
    fn hit_test_outside_widget_is_none() {
        let mut state = state(&["Apple"]);
        state.set_input("a");
        let layout = WidgetLayout::compute(&state);

        assert_eq!(layout.hit_test(Point::new(4, 6)), Some(HitTarget::Input));
        assert_eq!(layout.hit_test(Point::new(6, 2)), None);
        assert_eq!(layout.hit_test(Point::new(7, 10)), None);
        assert_eq!(layout.hit_test(Point::new(20, 10)), None);
    }
}

//! Autocomplete controller state and view model computation.
//!
//! [`AppState`] owns everything the widget knows: the catalog, the input
//! text, the live suggestion list, the highlighted index, the focus flag,
//! the recency store and the last committed results. It is the single source
//! of truth; the event handler mutates it and the renderer reads snapshots of
//! it through [`AppState::compute_viewmodel`].
//!
//! # Selection invariant
//!
//! `selected_index` is either `None` or a valid index into `suggestions`.
//! Whenever the suggestion list is replaced the index is re-validated, and
//! every commit clears it.
//!
//! # Example
//!
//! ```rust
//! use zuggest::app::AppState;
//! use zuggest::storage::RecencyStore;
//! use zuggest::{SearchableItem, Theme};
//!
//! let items = vec![SearchableItem::new("Banana", "yellow fruit")];
//! let mut state = AppState::new(items, RecencyStore::volatile("recentlySearched"), Theme::default());
//! state.set_input("an");
//! assert_eq!(state.suggestions.len(), 1);
//! ```

use super::filter;
use super::focus::OutsideClickDetector;
use super::modes::Phase;
use crate::domain::error::Result;
use crate::domain::SearchableItem;
use crate::storage::RecencyStore;
use crate::ui::layout::{Viewport, WidgetLayout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, InputInfo, ResultItem, ResultsInfo, SuggestionItem,
    UIViewModel,
};
use std::time::{Duration, Instant};

/// The most recent committed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedSearch {
    /// Query the results were computed for.
    pub query: String,

    /// Time spent in the result filter.
    pub elapsed: Duration,
}

/// Central widget state.
#[derive(Debug)]
pub struct AppState {
    /// Catalog supplied at mount. Never mutated.
    pub items: Vec<SearchableItem>,

    /// Current text of the input field.
    pub input: String,

    /// Live dropdown candidates for `input`.
    pub suggestions: Vec<SearchableItem>,

    /// Highlighted suggestion, `None` when nothing is highlighted.
    pub selected_index: Option<usize>,

    /// Items matching the last committed query.
    pub results: Vec<SearchableItem>,

    /// Query and timing of the last commit.
    pub last_search: Option<CommittedSearch>,

    /// Whether the input is considered focused. The dropdown is only shown
    /// while this is set.
    pub focused: bool,

    /// Session-scoped list of committed searches.
    pub recency: RecencyStore,

    /// Pointer-down listener that clears `focused` on outside clicks.
    pub outside_click: OutsideClickDetector,

    /// Maximum number of suggestions kept in the dropdown.
    pub max_suggestions: usize,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Pane size from the last render.
    pub viewport: Viewport,
}

impl AppState {
    /// Mounts the widget over `items`.
    ///
    /// The input starts focused, the outside-click listener is attached, and
    /// no layout is known until the first render.
    #[must_use]
    pub fn new(items: Vec<SearchableItem>, recency: RecencyStore, theme: Theme) -> Self {
        tracing::debug!(item_count = items.len(), "mounting autocomplete widget");

        let mut outside_click = OutsideClickDetector::default();
        outside_click.attach();

        Self {
            items,
            input: String::new(),
            suggestions: vec![],
            selected_index: None,
            results: vec![],
            last_search: None,
            focused: true,
            recency,
            outside_click,
            max_suggestions: filter::DEFAULT_SUGGESTION_LIMIT,
            theme,
            viewport: Viewport::default(),
        }
    }

    /// Sets the suggestion cap, recomputing the current suggestions.
    #[must_use]
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self.input_changed();
        self
    }

    /// Tears the widget down, detaching the outside-click listener.
    ///
    /// The persisted recency slot is left as is.
    pub fn teardown(&mut self) {
        tracing::debug!("tearing down autocomplete widget");
        self.outside_click.detach();
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::from_parts(self.suggestions.len(), self.focused)
    }

    #[must_use]
    pub fn dropdown_visible(&self) -> bool {
        matches!(self.phase(), Phase::Suggesting)
    }

    /// Moves the highlight down one row, stopping at the last suggestion.
    ///
    /// From "nothing highlighted" this highlights the first suggestion.
    pub fn move_selection_down(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(i) if i < last => Some(i + 1),
            Some(i) => Some(i),
        };
    }

    /// Moves the highlight up one row, stopping at the first suggestion.
    ///
    /// The highlight never returns to "nothing highlighted" this way.
    pub fn move_selection_up(&mut self) {
        if let Some(i) = self.selected_index {
            self.selected_index = Some(i.saturating_sub(1));
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = None;
    }

    #[must_use]
    pub fn selected_suggestion(&self) -> Option<&SearchableItem> {
        self.selected_index.and_then(|i| self.suggestions.get(i))
    }

    /// Replaces the input text and runs the input-change transition.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.input_changed();
    }

    /// Recomputes suggestions for the current input.
    ///
    /// An empty input clears the suggestions. The highlight survives only if
    /// it still points inside the new list.
    pub fn input_changed(&mut self) {
        let _span = tracing::debug_span!("input_changed",
            total_items = self.items.len(),
            query_len = self.input.len()
        ).entered();

        if self.input.is_empty() {
            self.suggestions.clear();
        } else {
            self.suggestions = filter::suggestions(&self.input, &self.items, self.max_suggestions);
        }

        if self.selected_index.is_some_and(|i| i >= self.suggestions.len()) {
            tracing::debug!(stale_index = ?self.selected_index, "dropping out-of-range selection");
            self.selected_index = None;
        }

        tracing::debug!(suggestion_count = self.suggestions.len(), "suggestions recomputed");
    }

    /// Commits `query`: records it as recent, computes results and closes the
    /// dropdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the recency list cannot be persisted. Results and
    /// the closed dropdown are already in place by then.
    pub fn commit(&mut self, query: &str) -> Result<()> {
        let _span = tracing::debug_span!("commit", query = %query).entered();

        let started = Instant::now();
        self.results = filter::results(query, &self.items);
        let elapsed = started.elapsed();

        self.last_search = Some(CommittedSearch {
            query: query.to_string(),
            elapsed,
        });
        self.suggestions.clear();
        self.selected_index = None;

        tracing::debug!(
            result_count = self.results.len(),
            elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            "search committed"
        );

        self.recency.add(query)?;
        Ok(())
    }

    /// Writes `title` into the input and commits it.
    ///
    /// # Errors
    ///
    /// Propagates persistence errors from [`AppState::commit`].
    pub fn commit_suggestion(&mut self, title: &str) -> Result<()> {
        self.input = title.to_string();
        self.commit(title)
    }

    /// Forgets `title` from the recency list without committing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the recency list cannot be persisted.
    pub fn remove_recent(&mut self, title: &str) -> Result<bool> {
        self.recency.remove(title)
    }

    /// Records the pane size and the container position for this render.
    pub fn sync_layout(&mut self, rows: usize, cols: usize) -> WidgetLayout {
        self.viewport = Viewport { rows, cols };
        let layout = WidgetLayout::compute(self);
        self.outside_click.observe(layout.container);
        layout
    }

    /// Computes the renderable view model for the current viewport.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let layout = WidgetLayout::compute(self);

        let dropdown = if layout.rows.is_empty() {
            None
        } else {
            Some(
                layout
                    .rows
                    .iter()
                    .filter_map(|row| self.suggestions.get(row.index).map(|item| (row.index, item)))
                    .map(|(index, item)| self.compute_suggestion_item(index, item))
                    .collect(),
            )
        };

        let empty_state = self.items.is_empty().then(|| EmptyState {
            message: "No searchable items".to_string(),
            subtitle: "Point items_file at a JSON list of {title, description}".to_string(),
        });

        UIViewModel {
            header: self.compute_header(),
            input: InputInfo {
                text: self.input.clone(),
                focused: self.focused,
            },
            dropdown,
            results: self.compute_results(layout.results_capacity),
            footer: self.compute_footer(),
            empty_state,
        }
    }

    fn compute_suggestion_item(&self, index: usize, item: &SearchableItem) -> SuggestionItem {
        SuggestionItem {
            title: item.title.clone(),
            is_selected: self.selected_index == Some(index),
            is_recent: self.recency.contains(&item.title),
            highlight_ranges: filter::match_range(&item.title, &self.input)
                .into_iter()
                .collect(),
        }
    }

    fn compute_results(&self, capacity: usize) -> Option<ResultsInfo> {
        if self.results.is_empty() {
            return None;
        }

        let count = self.results.len();
        let plural = if count > 1 { "s" } else { "" };
        let elapsed_ms = self
            .last_search
            .as_ref()
            .map_or(0.0, |search| search.elapsed.as_secs_f64() * 1000.0);

        let items: Vec<ResultItem> = self
            .results
            .iter()
            .take(capacity)
            .map(|item| ResultItem {
                title: item.title.clone(),
                description: item.description.clone(),
            })
            .collect();

        Some(ResultsInfo {
            summary: format!("{count} result{plural} ({elapsed_ms:.2} ms)"),
            hidden_count: count - items.len(),
            items,
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Search ({} items) ", self.items.len()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.phase() {
            Phase::Suggesting => {
                "Up/Down: navigate  Enter: search  Click: select  Remove: forget  Esc: close"
            }
            Phase::Idle => "Type to search  Enter: search  Esc: close",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

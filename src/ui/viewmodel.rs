//! View model types representing renderable UI state.
//!
//! View models are computed by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They carry display-ready data only: which
//! row is highlighted, which titles are recent, where the query matched.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    pub input: InputInfo,

    /// Visible dropdown rows, `None` while the dropdown is hidden.
    pub dropdown: Option<Vec<SuggestionItem>>,

    /// Result block, `None` when the last commit matched nothing.
    pub results: Option<ResultsInfo>,

    pub footer: FooterInfo,

    /// Shown instead of the widget when the catalog is empty.
    pub empty_state: Option<EmptyState>,
}

/// Contents of the input box.
#[derive(Debug, Clone)]
pub struct InputInfo {
    pub text: String,

    /// Whether to draw the cursor.
    pub focused: bool,
}

/// One dropdown row.
#[derive(Debug, Clone)]
pub struct SuggestionItem {
    pub title: String,

    pub is_selected: bool,

    /// Whether the title was searched this session. Recent rows get a
    /// Remove affordance.
    pub is_recent: bool,

    /// Character ranges to highlight.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Result block below the input.
#[derive(Debug, Clone)]
pub struct ResultsInfo {
    /// Count and timing line, e.g. "2 results (0.01 ms)".
    pub summary: String,

    /// Results that fit on screen.
    pub items: Vec<ResultItem>,

    /// Results left out for lack of space.
    pub hidden_count: usize,
}

#[derive(Debug, Clone)]
pub struct ResultItem {
    pub title: String,
    pub description: String,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "Enter: search  Esc: close").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No searchable items").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

//! Event handling and state transition logic.
//!
//! The plugin shim maps Zellij key and mouse events to [`Event`]s and feeds
//! them to [`handle_event`], which mutates [`AppState`] and returns whether a
//! re-render is needed plus any [`Action`]s for the runtime.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Input**: `Char`, `Backspace`, `OtherKey`, `Enter`
//! - **Pointer**: `PointerDown`, `Focus`
//! - **Lifecycle**: `Close`
//!
//! # Example
//!
//! ```rust
//! use zuggest::app::{handle_event, AppState, Event};
//! use zuggest::storage::RecencyStore;
//! use zuggest::{SearchableItem, Theme};
//!
//! let items = vec![SearchableItem::new("Banana", "yellow fruit")];
//! let mut state = AppState::new(items, RecencyStore::volatile("recentlySearched"), Theme::default());
//! for c in "an".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! handle_event(&mut state, &Event::KeyDown)?;
//! handle_event(&mut state, &Event::Enter)?;
//! assert_eq!(state.results.len(), 1);
//! # Ok::<(), zuggest::ZuggestError>(())
//! ```

use crate::app::focus::Point;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::ui::layout::{HitTarget, WidgetLayout};

/// Input events understood by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Highlights the next suggestion, stopping at the last.
    KeyDown,
    /// Highlights the previous suggestion, stopping at the first.
    KeyUp,
    /// Commits the highlighted suggestion, or the raw input if none.
    Enter,
    /// Appends a character to the input.
    Char(char),
    /// Removes the last character of the input.
    Backspace,
    /// Any other key: drops the highlight.
    OtherKey,
    /// The input gained focus.
    Focus,
    /// Left mouse button pressed at a pane cell.
    ///
    /// `line` is signed because the runtime may report positions above the
    /// pane; those count as outside the widget.
    PointerDown { line: isize, col: usize },
    /// The user dismissed the widget.
    Close,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Returns an error if the recency list cannot be persisted during a commit
/// or a removal. The in-memory list is already updated at that point.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            if state.suggestions.is_empty() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.suggestions.is_empty() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Enter => {
            if let Some(title) = state.selected_suggestion().map(|s| s.title.clone()) {
                tracing::debug!(title = %title, "committing highlighted suggestion");
                state.commit_suggestion(&title)?;
                return Ok((true, vec![]));
            }

            if state.input.is_empty() {
                tracing::trace!("enter on empty input ignored");
                return Ok((false, vec![]));
            }

            let query = state.input.clone();
            tracing::debug!(query = %query, "committing raw input");
            state.commit(&query)?;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            state.reset_selection();
            state.focused = true;
            state.input.push(*c);
            tracing::trace!(input = %state.input, char = %c, "input updated");
            state.input_changed();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            state.reset_selection();
            state.focused = true;
            if state.input.pop().is_some() {
                state.input_changed();
            }
            Ok((true, vec![]))
        }
        Event::OtherKey => {
            let had_selection = state.selected_index.is_some();
            state.reset_selection();
            Ok((had_selection, vec![]))
        }
        Event::Focus => {
            let changed = !state.focused;
            state.focused = true;
            Ok((changed, vec![]))
        }
        Event::PointerDown { line, col } => handle_pointer_down(state, *line, *col),
        Event::Close => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Routes a pointer-down through the outside-click detector, then through
/// hit testing against the last rendered layout.
fn handle_pointer_down(
    state: &mut AppState,
    line: isize,
    col: usize,
) -> Result<(bool, Vec<Action>)> {
    let point = usize::try_from(line).ok().map(|line| Point::new(line, col));

    let mut focused = state.focused;
    let lost_focus = state
        .outside_click
        .on_pointer_down(point, || focused = false);
    if lost_focus {
        tracing::debug!(?point, "pointer down outside widget");
        let changed = state.focused;
        state.focused = focused;
        return Ok((changed, vec![]));
    }

    if state.outside_click.container().is_none() {
        tracing::trace!("pointer down before first render ignored");
        return Ok((false, vec![]));
    }

    let Some(point) = point else {
        return Ok((false, vec![]));
    };

    match WidgetLayout::compute(state).hit_test(point) {
        Some(HitTarget::Input) => {
            let changed = !state.focused;
            state.focused = true;
            Ok((changed, vec![]))
        }
        Some(HitTarget::Suggestion(index)) => {
            let Some(title) = state.suggestions.get(index).map(|s| s.title.clone()) else {
                return Ok((false, vec![]));
            };
            tracing::debug!(title = %title, index, "suggestion clicked");
            state.commit_suggestion(&title)?;
            Ok((true, vec![]))
        }
        Some(HitTarget::Remove(index)) => {
            let Some(title) = state.suggestions.get(index).map(|s| s.title.clone()) else {
                return Ok((false, vec![]));
            };
            tracing::debug!(title = %title, "removing recent search");
            let removed = state.remove_recent(&title)?;
            Ok((removed, vec![]))
        }
        None => Ok((false, vec![])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchableItem;
    use crate::storage::RecencyStore;
    use crate::ui::theme::Theme;

    fn fruit() -> AppState {
        let items = vec![
            SearchableItem::new("Apple", "fruit"),
            SearchableItem::new("Banana", "yellow fruit"),
        ];
        AppState::new(items, RecencyStore::volatile("recentlySearched"), Theme::default())
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn click(state: &mut AppState, line: isize, col: usize) -> (bool, Vec<Action>) {
        handle_event(state, &Event::PointerDown { line, col }).unwrap()
    }

    #[test]
    fn typing_an_then_down_enter_commits_banana() {
        let mut state = fruit();
        type_text(&mut state, "an");

        assert_eq!(state.suggestions, vec![SearchableItem::new("Banana", "yellow fruit")]);

        handle_event(&mut state, &Event::KeyDown).unwrap();
        assert_eq!(state.selected_index, Some(0));

        handle_event(&mut state, &Event::Enter).unwrap();

        assert_eq!(state.input, "Banana");
        assert_eq!(state.recency.entries(), ["Banana"]);
        assert_eq!(state.results, vec![SearchableItem::new("Banana", "yellow fruit")]);
        assert!(state.suggestions.is_empty());
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn enter_without_highlight_commits_raw_input() {
        let mut state = fruit();
        type_text(&mut state, "fruit");

        assert!(state.suggestions.is_empty());

        handle_event(&mut state, &Event::Enter).unwrap();

        assert_eq!(state.results.len(), 2);
        assert_eq!(state.recency.entries(), ["fruit"]);
        assert_eq!(state.input, "fruit");
    }

    #[test]
    fn enter_on_empty_input_is_noop() {
        let mut state = fruit();
        let (render, actions) = handle_event(&mut state, &Event::Enter).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.recency.entries().is_empty());
        assert!(state.last_search.is_none());
    }

    #[test]
    fn typing_resets_highlight() {
        let mut state = fruit();
        type_text(&mut state, "a");
        handle_event(&mut state, &Event::KeyDown).unwrap();
        assert_eq!(state.selected_index, Some(0));

        type_text(&mut state, "p");

        assert_eq!(state.selected_index, None);
        assert_eq!(state.suggestions.len(), 1);
    }

    #[test]
    fn backspace_to_empty_clears_suggestions() {
        let mut state = fruit();
        type_text(&mut state, "a");
        handle_event(&mut state, &Event::Backspace).unwrap();

        assert!(state.input.is_empty());
        assert!(state.suggestions.is_empty());

        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(render);
        assert!(state.input.is_empty());
    }

    #[test]
    fn other_key_drops_highlight_but_keeps_suggestions() {
        let mut state = fruit();
        type_text(&mut state, "a");
        handle_event(&mut state, &Event::KeyDown).unwrap();

        handle_event(&mut state, &Event::OtherKey).unwrap();

        assert_eq!(state.selected_index, None);
        assert_eq!(state.suggestions.len(), 2);
    }

    #[test]
    fn navigation_without_suggestions_is_noop() {
        let mut state = fruit();
        let (render, _) = handle_event(&mut state, &Event::KeyDown).unwrap();

        assert!(!render);
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn close_requests_hide() {
        let mut state = fruit();
        let (_, actions) = handle_event(&mut state, &Event::Close).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn pointer_before_first_render_is_ignored() {
        let mut state = fruit();
        type_text(&mut state, "a");

        let (render, _) = click(&mut state, 20, 10);

        assert!(!render);
        assert!(state.focused);
    }

    #[test]
    fn outside_click_hides_dropdown_and_focus_restores_it() {
        let mut state = fruit();
        type_text(&mut state, "a");
        state.sync_layout(24, 80);

        let (render, _) = click(&mut state, 20, 10);

        assert!(render);
        assert!(!state.focused);
        assert!(!state.dropdown_visible());
        assert_eq!(state.suggestions.len(), 2);

        handle_event(&mut state, &Event::Focus).unwrap();
        assert!(state.dropdown_visible());
    }

    #[test]
    fn click_above_pane_counts_as_outside() {
        let mut state = fruit();
        type_text(&mut state, "a");
        state.sync_layout(24, 80);

        click(&mut state, -1, 10);

        assert!(!state.focused);
    }

    #[test]
    fn click_on_input_regains_focus() {
        let mut state = fruit();
        type_text(&mut state, "a");
        state.sync_layout(24, 80);
        click(&mut state, 20, 10);
        state.sync_layout(24, 80);

        let (render, _) = click(&mut state, 4, 10);

        assert!(render);
        assert!(state.focused);
    }

    #[test]
    fn click_on_row_commits_its_title() {
        let mut state = fruit();
        type_text(&mut state, "a");
        state.sync_layout(24, 80);

        click(&mut state, 7, 10);

        assert_eq!(state.input, "Banana");
        assert_eq!(state.recency.entries(), ["Banana"]);
        assert_eq!(state.results.len(), 1);
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn click_on_remove_forgets_without_committing() {
        let mut state = fruit();
        type_text(&mut state, "Banana");
        handle_event(&mut state, &Event::Enter).unwrap();
        assert_eq!(state.recency.entries(), ["Banana"]);

        for _ in 0.."Banana".len() {
            handle_event(&mut state, &Event::Backspace).unwrap();
        }
        type_text(&mut state, "a");
        state.sync_layout(24, 80);
        let committed_before = state.last_search.clone();

        let (render, _) = click(&mut state, 7, 68);

        assert!(render);
        assert!(state.recency.entries().is_empty());
        assert_eq!(state.last_search, committed_before);
        assert_eq!(state.suggestions.len(), 2);
        assert_eq!(state.input, "a");
    }
}

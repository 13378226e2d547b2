//! Case-insensitive substring filters over the item catalog.
//!
//! Two filters:
//!
//! - [`suggestions`] looks at titles only and is capped, it drives the live
//!   dropdown while typing
//! - [`results`] looks at titles and descriptions without a cap, it runs once
//!   per committed search
//!
//! Both preserve catalog order. Matching is plain `str::contains` on
//! lowercased text; there is no ranking.

use crate::domain::SearchableItem;

/// Default maximum number of suggestions shown in the dropdown.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Returns the first `limit` items whose title contains `query`, ignoring case.
///
/// An empty query yields no suggestions.
///
/// # Examples
///
/// ```
/// use zuggest::app::filter::suggestions;
/// use zuggest::SearchableItem;
///
/// let items = vec![
///     SearchableItem::new("Apple", "fruit"),
///     SearchableItem::new("Banana", "yellow fruit"),
/// ];
/// let found = suggestions("AN", &items, 10);
/// assert_eq!(found, vec![SearchableItem::new("Banana", "yellow fruit")]);
/// ```
#[must_use]
pub fn suggestions(query: &str, items: &[SearchableItem], limit: usize) -> Vec<SearchableItem> {
    if query.is_empty() {
        return vec![];
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}

/// Returns every item whose title or description contains `query`, ignoring case.
///
/// # Examples
///
/// ```
/// use zuggest::app::filter::results;
/// use zuggest::SearchableItem;
///
/// let items = vec![
///     SearchableItem::new("Apple", "fruit"),
///     SearchableItem::new("Banana", "yellow fruit"),
/// ];
/// assert_eq!(results("fruit", &items).len(), 2);
/// ```
#[must_use]
pub fn results(query: &str, items: &[SearchableItem]) -> Vec<SearchableItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Character range `(start, end)` of the first case-insensitive occurrence of
/// `query` in `text`, end exclusive.
///
/// Returns `None` when there is no match, the query is empty, or lowercasing
/// changes the character count of `text` (the indices would not line up).
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let haystack = text.to_lowercase();
    if haystack.chars().count() != text.chars().count() {
        return None;
    }

    let needle = query.to_lowercase();
    let byte_start = haystack.find(&needle)?;
    let start = haystack[..byte_start].chars().count();
    Some((start, start + needle.chars().count()))
}

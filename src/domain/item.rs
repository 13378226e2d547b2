//! Searchable item model.
//!
//! A [`SearchableItem`] is one entry of the catalog handed to the widget at
//! mount time. Items are never created or destroyed by the widget; suggestion
//! and result lists hold clones of catalog entries.

use serde::{Deserialize, Serialize};

/// One entry of the searchable catalog.
///
/// Suggestions match on `title` only, committed searches match on either
/// `title` or `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl SearchableItem {
    /// Creates a new item.
    ///
    /// # Examples
    ///
    /// ```
    /// use zuggest::SearchableItem;
    ///
    /// let item = SearchableItem::new("Apple", "fruit");
    /// assert_eq!(item.title, "Apple");
    /// assert_eq!(item.description, "fruit");
    /// ```
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_defaults_to_empty_when_missing() {
        let items: Vec<SearchableItem> =
            serde_json::from_str(r#"[{"title": "Apple"}, {"title": "Kiwi", "description": "green"}]"#)
                .unwrap();

        assert_eq!(items[0], SearchableItem::new("Apple", ""));
        assert_eq!(items[1].description, "green");
    }
}

//! Loading the searchable item catalog.
//!
//! A catalog is a JSON array of `{ "title": ..., "description": ... }`
//! objects. `description` may be omitted.

use crate::domain::error::{Result, ZuggestError};
use crate::domain::SearchableItem;
use std::fs;
use std::path::Path;

const BUNDLED: &str = include_str!("../../catalog/sample.json");

/// Reads a catalog file.
///
/// # Errors
///
/// Returns [`ZuggestError::Io`] if the file cannot be read and
/// [`ZuggestError::Catalog`] if it is not a valid catalog.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<SearchableItem>> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("load_catalog", path = %path.display()).entered();

    let contents = fs::read_to_string(path)?;
    let items = parse_catalog(&contents)
        .map_err(|e| ZuggestError::Catalog(format!("{}: {e}", path.display())))?;

    tracing::debug!(item_count = items.len(), "catalog loaded");
    Ok(items)
}

/// Catalog compiled into the plugin, used when no `items_file` is configured
/// or it cannot be loaded.
#[must_use]
pub fn bundled_catalog() -> Vec<SearchableItem> {
    parse_catalog(BUNDLED).unwrap_or_else(|e| {
        tracing::error!(error = %e, "bundled catalog is invalid");
        Vec::new()
    })
}

fn parse_catalog(contents: &str) -> std::result::Result<Vec<SearchableItem>, serde_json::Error> {
    serde_json::from_str(contents)
}

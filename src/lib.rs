//! Zuggest: an autocomplete search widget as a Zellij plugin.
//!
//! The widget shows an input box over a catalog of searchable items:
//! - Live, case-insensitive title suggestions while typing
//! - Keyboard (Up/Down/Enter) and mouse selection of suggestions
//! - Committed searches matched against titles and descriptions, with a timed
//!   result count
//! - A session-scoped list of recent searches, mirrored into a persisted
//!   key-value slot, with a Remove affordance per recent suggestion
//! - Outside clicks hide the dropdown without discarding it

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Key/Mouse mapping
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Filtering, selection, commit                     │
//! │  - Outside-click detection                          │
//! │  - Event handling, view model computation           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌─────────────────────┐
//! │ UI Layer      │   │ Storage Layer       │
//! │ (ui/)         │   │ (storage/)          │
//! │ - Layout      │   │ - Key-value backends│
//! │ - Components  │   │ - Recency list      │
//! │ - Theming     │   │                     │
//! └───────────────┘   └─────────────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain (infrastructure/, domain/) │
//! │  - Sandbox paths, catalog loading                   │
//! │  - Searchable item, errors                          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OTLP/JSON span export to a rotating file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zuggest.wasm" {
//!         items_file "~/fruit.json"
//!         max_suggestions "8"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Library Usage
//!
//! ```rust
//! use zuggest::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "berry".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! assert!(!state.suggestions.is_empty());
//! # Ok::<(), zuggest::ZuggestError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Phase};
pub use domain::{Result, SearchableItem, ZuggestError};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::{JsonFileStore, RecencyStore};

/// Plugin configuration parsed from Zellij's configuration map.
///
/// ```kdl
/// plugin location="file:/path/to/zuggest.wasm" {
///     items_file "~/items.json"
///     max_suggestions "10"
///     store_file "/data/zuggest.json"
///     store_key "recentlySearched"
///     theme "catppuccin-mocha"
///     theme_file "/host/my-theme.toml"
///     trace_level "info"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog of `{title, description}` objects. `~` maps to `/host`.
    /// The bundled sample catalog is used when unset or unreadable.
    pub items_file: Option<String>,

    /// Dropdown cap. Default: 10
    pub max_suggestions: usize,

    /// Key-value store file. Default: `/data/zuggest.json`
    pub store_file: PathBuf,

    /// Slot the recency list is mirrored into. Default: `recentlySearched`
    pub store_key: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_file: None,
            max_suggestions: app::filter::DEFAULT_SUGGESTION_LIMIT,
            store_file: infrastructure::default_store_path(),
            store_key: storage::DEFAULT_RECENCY_KEY.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing, empty or invalid values fall back to defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zuggest::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("items_file".to_string(), "~/fruit.json".to_string());
    /// map.insert("max_suggestions".to_string(), "zero".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.items_file.as_deref(), Some("/host/fruit.json"));
    /// assert_eq!(config.max_suggestions, 10);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let max_suggestions = non_empty("max_suggestions").map_or(defaults.max_suggestions, |raw| {
            parse_max_suggestions(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default max_suggestions");
                defaults.max_suggestions
            })
        });

        Self {
            items_file: non_empty("items_file").map(|p| infrastructure::expand_tilde(&p)),
            max_suggestions,
            store_file: non_empty("store_file")
                .map_or(defaults.store_file, |p| PathBuf::from(infrastructure::expand_tilde(&p))),
            store_key: non_empty("store_key").unwrap_or(defaults.store_key),
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file").map(|p| infrastructure::expand_tilde(&p)),
            trace_level: non_empty("trace_level").unwrap_or(defaults.trace_level),
        }
    }
}

/// Parses the dropdown cap, which must be a positive integer.
///
/// # Errors
///
/// Returns [`ZuggestError::Config`] for zero or non-numeric values.
pub fn parse_max_suggestions(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ZuggestError::Config("max_suggestions must be at least 1".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(ZuggestError::Config(format!("max_suggestions {raw:?}: {e}"))),
    }
}

/// Builds the widget from configuration.
///
/// Every external input degrades instead of failing: an unreadable theme
/// falls back to the default theme, an unreadable catalog to the bundled one,
/// a corrupt store document to a fresh one, and an unusable store file to an
/// in-memory store.
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let theme = load_theme(config);
    let items = load_items(config);
    let recency = mount_recency(config);

    AppState::new(items, recency, theme).with_max_suggestions(config.max_suggestions)
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

fn load_items(config: &Config) -> Vec<SearchableItem> {
    let Some(path) = &config.items_file else {
        return infrastructure::bundled_catalog();
    };

    infrastructure::load_catalog(path).unwrap_or_else(|e| {
        tracing::warn!(items_file = %path, error = %e, "failed to load catalog, using bundled items");
        infrastructure::bundled_catalog()
    })
}

fn mount_recency(config: &Config) -> RecencyStore {
    let mounted = JsonFileStore::open_or_reset(config.store_file.clone())
        .and_then(|store| RecencyStore::mount(Box::new(store), config.store_key.clone()));

    mounted.unwrap_or_else(|e| {
        tracing::warn!(
            store_file = %config.store_file.display(),
            error = %e,
            "store unavailable, keeping recent searches in memory"
        );
        RecencyStore::volatile(config.store_key.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("items_file", "/host/items.json"),
            ("max_suggestions", "4"),
            ("store_file", "~/store.json"),
            ("store_key", "recent"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.items_file.as_deref(), Some("/host/items.json"));
        assert_eq!(config.max_suggestions, 4);
        assert_eq!(config.store_file, PathBuf::from("/host/store.json"));
        assert_eq!(config.store_key, "recent");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/host/theme.toml"));
        assert_eq!(config.trace_level, "debug");
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[("max_suggestions", "0"), ("store_key", "  ")]));

        assert_eq!(config.max_suggestions, 10);
        assert_eq!(config.store_key, "recentlySearched");
    }

    #[test]
    fn max_suggestions_errors_are_config_errors() {
        assert!(matches!(parse_max_suggestions("0"), Err(ZuggestError::Config(_))));
        assert!(matches!(parse_max_suggestions("-3"), Err(ZuggestError::Config(_))));
        assert_eq!(parse_max_suggestions(" 7 ").unwrap(), 7);
    }

    #[test]
    fn initialize_mounts_store_and_loads_catalog() {
        let dir = tempfile::TempDir::new().unwrap();
        let items_path = dir.path().join("items.json");
        std::fs::write(&items_path, r#"[{"title": "Apple"}, {"title": "Banana"}]"#).unwrap();

        let config = Config {
            items_file: Some(items_path.display().to_string()),
            store_file: dir.path().join("store.json"),
            max_suggestions: 1,
            ..Config::default()
        };

        let mut state = initialize(&config);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.max_suggestions, 1);
        assert_eq!(
            state.recency.backend().get("recentlySearched").unwrap().as_deref(),
            Some("[]")
        );

        state.set_input("a");
        assert_eq!(state.suggestions.len(), 1);
    }

    #[test]
    fn initialize_rewrites_corrupt_store_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let store_file = dir.path().join("store.json");
        std::fs::write(&store_file, r#"{"version": 1, "slots": "#).unwrap();

        let config = Config {
            store_file: store_file.clone(),
            ..Config::default()
        };

        let mut state = initialize(&config);
        let on_disk: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&store_file).unwrap()).unwrap();
        assert_eq!(on_disk["slots"]["recentlySearched"], "[]");

        state.commit("Banana").unwrap();
        drop(state);

        let on_disk: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&store_file).unwrap()).unwrap();
        assert_eq!(on_disk["slots"]["recentlySearched"], r#"["Banana"]"#);
    }

    #[test]
    fn initialize_degrades_on_bad_inputs() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let config = Config {
            items_file: Some(dir.path().join("missing.json").display().to_string()),
            store_file: blocker.join("store.json"),
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);

        assert_eq!(state.items, infrastructure::bundled_catalog());
        assert_eq!(state.theme, Theme::default());
        assert_eq!(
            state.recency.backend().get("recentlySearched").unwrap().as_deref(),
            Some("[]")
        );
    }
}

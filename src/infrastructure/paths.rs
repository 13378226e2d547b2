//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host` and the
//! plugin's private data directory under `/data`.

use std::path::PathBuf;

/// File name of the key-value store inside the data directory.
pub const STORE_FILE_NAME: &str = "zuggest.json";

/// Returns the plugin's private data directory.
///
/// ```
/// use zuggest::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/data"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/data")
}

/// Default location of the persisted key-value store.
#[must_use]
pub fn default_store_path() -> PathBuf {
    get_data_dir().join(STORE_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// ```
/// use zuggest::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/fruit.json"), "/host/fruit.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_lives_in_data_dir() {
        assert_eq!(default_store_path(), PathBuf::from("/data/zuggest.json"));
    }

    #[test]
    fn tilde_only_expands_as_prefix() {
        assert_eq!(expand_tilde("~user/items.json"), "~user/items.json");
        assert_eq!(expand_tilde("items~/x"), "items~/x");
    }
}

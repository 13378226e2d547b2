//! Domain layer for the zuggest plugin.
//!
//! Core types independent of Zellij APIs or storage concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: The searchable catalog entry
//!
//! # Examples
//!
//! ```
//! use zuggest::domain::{Result, SearchableItem};
//!
//! fn catalog() -> Result<Vec<SearchableItem>> {
//!     Ok(vec![SearchableItem::new("Apple", "fruit")])
//! }
//! assert_eq!(catalog().unwrap().len(), 1);
//! ```

pub mod error;
pub mod item;

pub use error::{Result, ZuggestError};
pub use item::SearchableItem;

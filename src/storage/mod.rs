//! Storage layer for the session-scoped recency list.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait, the injectable persistence seam
//! - `json`: JSON document on disk with atomic writes
//! - `memory`: in-process map for tests and fallback
//! - `recency`: ordered set of committed searches mirrored into one slot

pub mod backend;
pub mod json;
pub mod memory;
pub mod recency;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use recency::{RecencyStore, DEFAULT_RECENCY_KEY};

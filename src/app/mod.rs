//! Application layer: autocomplete state, filtering and event handling.
//!
//! Data flows one way:
//!
//! ```text
//! Key/Mouse → Event → handle_event → AppState mutations → Actions
//!                                         ↓
//!                          compute_viewmodel → render
//! ```
//!
//! - [`actions`]: side effects for the plugin runtime
//! - [`filter`]: suggestion and result matching
//! - [`focus`]: outside-click detection
//! - [`handler`]: event processing
//! - [`modes`]: derived widget phase
//! - [`state`]: central state and view model computation

pub mod actions;
pub mod filter;
pub mod focus;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Phase;
pub use state::{AppState, CommittedSearch};

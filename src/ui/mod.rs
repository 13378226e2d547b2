//! Terminal rendering layer.
//!
//! ```text
//! AppState → WidgetLayout + UIViewModel → components → ANSI output
//! ```
//!
//! - [`layout`]: frame geometry, shared with pointer hit testing
//! - [`viewmodel`]: display-ready snapshot of the state
//! - [`renderer`]: top-level coordinator
//! - [`components`]: per-element renderers
//! - [`helpers`]: cursor movement, truncation, match highlighting
//! - [`theme`]: color schemes and ANSI sequences

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{HitTarget, Viewport, WidgetLayout};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, InputInfo, ResultItem, ResultsInfo, SuggestionItem,
    UIViewModel,
};

//! Side effects requested by the event handler.
//!
//! The handler mutates [`AppState`](crate::app::AppState) directly and returns
//! actions only for effects that must go through the plugin runtime.

/// Commands executed by the plugin shim after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user dismisses the widget (Esc).
    CloseFocus,
}

//! Widget phase derived from controller state.
//!
//! The widget has no stored mode field. Its phase follows from the suggestion
//! list and the focus flag:
//!
//! - **Idle**: no suggestions, or the input lost focus; dropdown hidden
//! - **Suggesting**: suggestions present and focused; dropdown shown

/// Derived widget phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Dropdown hidden.
    Idle,

    /// Dropdown shown. A suggestion may or may not be highlighted.
    Suggesting,
}

impl Phase {
    /// Derives the phase from the number of suggestions and the focus flag.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zuggest::app::Phase;
    ///
    /// assert_eq!(Phase::from_parts(3, true), Phase::Suggesting);
    /// assert_eq!(Phase::from_parts(3, false), Phase::Idle);
    /// assert_eq!(Phase::from_parts(0, true), Phase::Idle);
    /// ```
    #[must_use]
    pub const fn from_parts(suggestion_count: usize, focused: bool) -> Self {
        if suggestion_count > 0 && focused {
            Self::Suggesting
        } else {
            Self::Idle
        }
    }
}

//! Input mode state for the application.
//!
//! The mode decides how key presses are interpreted:
//! - **Normal**: table navigation and commands (sort, dismiss, load more)
//! - **Editing**: characters go into the search term input
//!
//! # Example
//!
//! ```rust
//! use hnsearch::app::modes::InputMode;
//!
//! let mode = InputMode::default();
//! assert_eq!(mode, InputMode::Normal);
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (edit search), 1-4 and 0
    /// (sort), d (dismiss), m (load more), enter (open link), q (quit).
    #[default]
    Normal,

    /// The search term input has focus.
    ///
    /// Accepts character input and backspace; enter submits the search and
    /// esc returns to normal mode without submitting.
    Editing,
}

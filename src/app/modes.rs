//! Input mode state for the storefront grid.
//!
//! Keyboard input is interpreted differently depending on whether the search
//! box has focus. The detail/gallery modal takes precedence over both modes
//! while it is open; see [`Navigator`](super::navigator::Navigator).
//!
//! # Example
//!
//! ```rust
//! use storefront::app::InputMode;
//!
//! let mode = InputMode::default();
//! assert_eq!(mode, InputMode::Browse);
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Grid navigation and commands.
    ///
    /// Keybindings: arrows/hjkl (move), enter (color options), / (search),
    /// tab (category), 1-9 (category by number), x (clear search), q (quit).
    #[default]
    Browse,

    /// Typing in the search box.
    ///
    /// Characters edit the query; enter applies it immediately and returns to
    /// the grid, esc returns to the grid without flushing.
    Search,
}

/// Modifier keys held with a keystroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl Modifiers {
    /// Whether a character key with these modifiers is text for the search
    /// box. Shift only changes the character; any other modifier makes it a
    /// chord.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        !(self.ctrl || self.alt || self.super_key)
    }
}

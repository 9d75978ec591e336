//! Keyboard input mapping.
//!
//! Maps the terminal port's logical keys to menu events. Arrow keys and the
//! paging keys are the primary bindings; `j`/`k` and `a`/`n` mirror them.

use crate::domain::ports::{Key, KeyEvent};

/// Logical menu event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Move cursor up one row
    MoveUp,
    /// Move cursor down one row
    MoveDown,
    /// First row of the page
    JumpTop,
    /// Last row of the page
    JumpBottom,
    PageNext,
    PagePrev,
    /// Flip the checkbox under the cursor
    ToggleSelect,
    SelectAll,
    SelectNone,
    /// Back to the parent menu, or quit at the root
    Cancel,
    Confirm,
    /// Quit from any depth
    Abort,
}

/// Convert a keypress to a menu event
pub fn key_to_event(event: KeyEvent) -> Option<MenuEvent> {
    match event.key {
        Key::Up | Key::Char('k') => Some(MenuEvent::MoveUp),
        Key::Down | Key::Char('j') => Some(MenuEvent::MoveDown),
        Key::Left | Key::PageUp => Some(MenuEvent::PagePrev),
        Key::Right | Key::PageDown => Some(MenuEvent::PageNext),
        Key::Home => Some(MenuEvent::JumpTop),
        Key::End => Some(MenuEvent::JumpBottom),
        Key::Space => Some(MenuEvent::ToggleSelect),
        Key::Enter => Some(MenuEvent::Confirm),
        Key::Escape | Key::Backspace => Some(MenuEvent::Cancel),
        Key::Insert | Key::Char('a') => Some(MenuEvent::SelectAll),
        Key::Delete | Key::Char('n') => Some(MenuEvent::SelectNone),
        Key::Interrupt => Some(MenuEvent::Abort),
        Key::Char(_) | Key::Other => None,
    }
}

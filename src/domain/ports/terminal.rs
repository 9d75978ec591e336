//! Terminal port - abstraction over the handful of terminal primitives the
//! menu needs.
//!
//! The menu draws line by line: it positions the cursor on a row, writes
//! text, and swaps the color registers around highlighted rows. Everything
//! else (raw mode, alternate screen, escape sequences) belongs to adapters.

use std::io;

pub use crossterm::style::Color;

/// Logical key identifier, independent of the backend's key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Space,
    Enter,
    Escape,
    Backspace,
    Insert,
    Delete,
    /// Printable character other than space
    Char(char),
    /// Ctrl+C while the terminal is in raw mode
    Interrupt,
    /// Anything the menu has no use for
    Other,
}

/// A single keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// Abstract terminal interface
///
/// Implementations:
/// - `CrosstermTerminal` - the real terminal, in raw mode on the alternate screen
/// - `HeadlessTerminal` - in-memory cell buffer with scripted keys
pub trait Terminal {
    /// Row the cursor is on (0 = top of the viewport)
    fn cursor_row(&self) -> u16;

    /// Move the cursor to column 0 of `row`
    fn set_cursor_row(&mut self, row: u16) -> io::Result<()>;

    /// Write text at the cursor, using the current color registers
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write text and move to the start of the next row
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Block until the next keypress
    fn read_key(&mut self, echo: bool) -> io::Result<KeyEvent>;

    fn foreground(&self) -> Color;
    fn background(&self) -> Color;
    fn set_foreground(&mut self, color: Color) -> io::Result<()>;
    fn set_background(&mut self, color: Color) -> io::Result<()>;

    fn cursor_visible(&self) -> bool;
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Clear the viewport and home the cursor
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Number of rows in the viewport
    fn viewport_height(&self) -> io::Result<u16>;

    fn set_window_title(&mut self, title: &str) -> io::Result<()>;

    /// Remember the current window title so it can be restored later
    fn save_window_title(&mut self) -> io::Result<()>;

    /// Restore the title remembered by the last `save_window_title`
    fn restore_window_title(&mut self) -> io::Result<()>;

    /// Push buffered output to the device
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn cursor_row(&self) -> u16 {
        (**self).cursor_row()
    }

    fn set_cursor_row(&mut self, row: u16) -> io::Result<()> {
        (**self).set_cursor_row(row)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn read_key(&mut self, echo: bool) -> io::Result<KeyEvent> {
        (**self).read_key(echo)
    }

    fn foreground(&self) -> Color {
        (**self).foreground()
    }

    fn background(&self) -> Color {
        (**self).background()
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        (**self).set_foreground(color)
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        (**self).set_background(color)
    }

    fn cursor_visible(&self) -> bool {
        (**self).cursor_visible()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        (**self).set_cursor_visible(visible)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        (**self).clear_screen()
    }

    fn viewport_height(&self) -> io::Result<u16> {
        (**self).viewport_height()
    }

    fn set_window_title(&mut self, title: &str) -> io::Result<()> {
        (**self).set_window_title(title)
    }

    fn save_window_title(&mut self) -> io::Result<()> {
        (**self).save_window_title()
    }

    fn restore_window_title(&mut self) -> io::Result<()> {
        (**self).restore_window_title()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

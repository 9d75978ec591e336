//! Scoped ownership of process-wide terminal state.
//!
//! `TerminalSession::acquire` records colors, cursor visibility and the
//! window title before the menu touches them. `release` puts them back on the
//! normal path; `Drop` does the same on every other path (errors, executor
//! failures, unwinding panics).

use std::io;
use std::ops::{Deref, DerefMut};

use crate::domain::ports::{Color, Terminal};
use crate::error::MenuResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SavedState {
    foreground: Color,
    background: Color,
    cursor_visible: bool,
}

pub struct TerminalSession<'a, T: Terminal + ?Sized> {
    terminal: &'a mut T,
    saved: Option<SavedState>,
}

impl<'a, T: Terminal + ?Sized> TerminalSession<'a, T> {
    /// Capture terminal state, hide the cursor and set the window title.
    pub fn acquire(terminal: &'a mut T, title: Option<&str>) -> MenuResult<Self> {
        let saved = SavedState {
            foreground: terminal.foreground(),
            background: terminal.background(),
            cursor_visible: terminal.cursor_visible(),
        };
        terminal.save_window_title()?;

        let mut session = Self {
            terminal,
            saved: Some(saved),
        };
        session.terminal.set_cursor_visible(false)?;
        if let Some(title) = title {
            session.terminal.set_window_title(title)?;
        }
        tracing::debug!("terminal session acquired");
        Ok(session)
    }

    /// Put back the window title saved at acquire, for levels without one.
    pub fn reset_window_title(&mut self) -> MenuResult<()> {
        self.terminal.restore_window_title()?;
        self.terminal.save_window_title()?;
        Ok(())
    }

    /// Restore the captured state and end the session.
    pub fn release(mut self) -> MenuResult<()> {
        self.restore()?;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        let Some(saved) = self.saved.take() else {
            return Ok(());
        };

        // Every step runs even if an earlier one failed; the first error wins.
        let results = [
            self.terminal.set_foreground(saved.foreground),
            self.terminal.set_background(saved.background),
            self.terminal.set_cursor_visible(saved.cursor_visible),
            self.terminal.restore_window_title(),
            self.terminal.flush(),
        ];
        tracing::debug!("terminal session released");
        results.into_iter().collect()
    }
}

impl<T: Terminal + ?Sized> Deref for TerminalSession<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> DerefMut for TerminalSession<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> Drop for TerminalSession<'_, T> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "failed to restore terminal state");
        }
    }
}

//! Real terminal backed by crossterm.
//!
//! `open` switches to raw mode and the alternate screen; `Drop` switches
//! back. Colors and cursor visibility are tracked here because terminals
//! cannot be asked for them.

use std::io::{self, Stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{cursor, execute, queue};
use is_terminal::IsTerminal;

use crate::domain::ports::{Color, Key, KeyEvent, Terminal};
use crate::error::{MenuError, MenuResult};

/// xterm: push the window title onto the title stack
const PUSH_TITLE: &str = "\x1b[22;0t";
/// xterm: pop the window title from the title stack
const POP_TITLE: &str = "\x1b[23;0t";

pub struct CrosstermTerminal {
    out: Stdout,
    row: u16,
    foreground: Color,
    background: Color,
    cursor_visible: bool,
}

impl CrosstermTerminal {
    /// Take over the controlling terminal.
    ///
    /// Fails with `NotInteractive` unless both stdin and stdout are TTYs.
    pub fn open() -> MenuResult<Self> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(MenuError::NotInteractive);
        }

        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(err.into());
        }
        tracing::debug!("raw mode enabled, alternate screen entered");

        Ok(Self {
            out,
            row: 0,
            foreground: Color::Reset,
            background: Color::Reset,
            cursor_visible: true,
        })
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let left = execute!(self.out, LeaveAlternateScreen);
        let raw = terminal::disable_raw_mode();
        if let Err(err) = left.and(raw) {
            tracing::warn!(error = %err, "failed to leave raw mode");
        }
    }
}

/// Translate a crossterm key event into the menu's key set.
pub fn map_key(event: event::KeyEvent) -> Key {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Insert => Key::Insert,
        KeyCode::Delete => Key::Delete,
        _ => Key::Other,
    }
}

impl Terminal for CrosstermTerminal {
    fn cursor_row(&self) -> u16 {
        self.row
    }

    fn set_cursor_row(&mut self, row: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, row))?;
        self.row = row;
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text), Print("\r\n"))?;
        self.row = self.row.saturating_add(1);
        Ok(())
    }

    fn read_key(&mut self, echo: bool) -> io::Result<KeyEvent> {
        self.out.flush()?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let key = map_key(key);
            if let (true, Key::Char(c)) = (echo, key) {
                execute!(self.out, Print(c))?;
            }
            return Ok(KeyEvent::new(key));
        }
    }

    fn foreground(&self) -> Color {
        self.foreground
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(color))?;
        self.foreground = color;
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        queue!(self.out, SetBackgroundColor(color))?;
        self.background = color;
        Ok(())
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.out, cursor::Show)?;
        } else {
            queue!(self.out, cursor::Hide)?;
        }
        self.cursor_visible = visible;
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        self.row = 0;
        Ok(())
    }

    fn viewport_height(&self) -> io::Result<u16> {
        terminal::size().map(|(_, rows)| rows)
    }

    fn set_window_title(&mut self, title: &str) -> io::Result<()> {
        queue!(self.out, SetTitle(title))
    }

    fn save_window_title(&mut self) -> io::Result<()> {
        self.out.write_all(PUSH_TITLE.as_bytes())
    }

    fn restore_window_title(&mut self) -> io::Result<()> {
        self.out.write_all(POP_TITLE.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

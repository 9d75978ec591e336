//! In-memory terminal with scripted keys.
//!
//! Used by tests and by anything that wants to drive a menu without a TTY.
//! Text lands in a fixed grid of cells, one `char` per cell; writes past the
//! right or bottom edge are clipped.

use std::collections::VecDeque;
use std::io;

use crate::domain::ports::{Color, Key, KeyEvent, Terminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    foreground: Color,
    background: Color,
}

impl Cell {
    fn blank() -> Self {
        Self {
            ch: ' ',
            foreground: HeadlessTerminal::DEFAULT_FOREGROUND,
            background: HeadlessTerminal::DEFAULT_BACKGROUND,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessTerminal {
    width: u16,
    height: u16,
    cells: Vec<Vec<Cell>>,
    row: u16,
    col: u16,
    foreground: Color,
    background: Color,
    cursor_visible: bool,
    title: Option<String>,
    title_stack: Vec<Option<String>>,
    titles_at_reads: Vec<Option<String>>,
    keys: VecDeque<Key>,
}

impl HeadlessTerminal {
    pub const DEFAULT_FOREGROUND: Color = Color::White;
    pub const DEFAULT_BACKGROUND: Color = Color::Black;

    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Cell::blank(); width as usize]; height as usize],
            row: 0,
            col: 0,
            foreground: Self::DEFAULT_FOREGROUND,
            background: Self::DEFAULT_BACKGROUND,
            cursor_visible: true,
            title: None,
            title_stack: Vec::new(),
            titles_at_reads: Vec::new(),
            keys: VecDeque::new(),
        }
    }

    /// Queue keys to be returned by `read_key`, in order
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Keys not consumed yet
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Visible text, one line per row.
    ///
    /// Trailing spaces and trailing blank rows are dropped.
    pub fn screen_text(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| c.ch)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    /// Rows that contain at least one cell drawn in non-default colors
    pub fn highlighted_rows(&self) -> Vec<u16> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                row.iter().any(|c| {
                    c.foreground != Self::DEFAULT_FOREGROUND
                        || c.background != Self::DEFAULT_BACKGROUND
                })
            })
            .map(|(i, _)| i as u16)
            .collect()
    }

    pub fn window_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Window title at each `read_key` call, in order
    pub fn titles_at_reads(&self) -> &[Option<String>] {
        &self.titles_at_reads
    }

    /// Titles saved and not yet restored
    pub fn title_stack_depth(&self) -> usize {
        self.title_stack.len()
    }

    fn put(&mut self, ch: char) {
        if self.row < self.height && self.col < self.width {
            self.cells[self.row as usize][self.col as usize] = Cell {
                ch,
                foreground: self.foreground,
                background: self.background,
            };
        }
        self.col = self.col.saturating_add(1);
    }
}

impl Terminal for HeadlessTerminal {
    fn cursor_row(&self) -> u16 {
        self.row
    }

    fn set_cursor_row(&mut self, row: u16) -> io::Result<()> {
        self.row = row;
        self.col = 0;
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        text.chars().for_each(|ch| self.put(ch));
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.row = self.row.saturating_add(1);
        self.col = 0;
        Ok(())
    }

    fn read_key(&mut self, _echo: bool) -> io::Result<KeyEvent> {
        self.titles_at_reads.push(self.title.clone());
        self.keys.pop_front().map(KeyEvent::new).ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys")
        })
    }

    fn foreground(&self) -> Color {
        self.foreground
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        self.foreground = color;
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        self.background = color;
        Ok(())
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.cells
            .iter_mut()
            .flat_map(|row| row.iter_mut())
            .for_each(|c| *c = Cell::blank());
        self.row = 0;
        self.col = 0;
        Ok(())
    }

    fn viewport_height(&self) -> io::Result<u16> {
        Ok(self.height)
    }

    fn set_window_title(&mut self, title: &str) -> io::Result<()> {
        self.title = Some(title.to_string());
        Ok(())
    }

    fn save_window_title(&mut self) -> io::Result<()> {
        self.title_stack.push(self.title.clone());
        Ok(())
    }

    fn restore_window_title(&mut self) -> io::Result<()> {
        if let Some(title) = self.title_stack.pop() {
            self.title = title;
        }
        Ok(())
    }
}

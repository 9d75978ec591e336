//! Terminal rendering for the menu.
//!
//! Layout, top to bottom: optional title and a blank line, one line per entry
//! on the current page, a blank line, the page indicator.
//!
//! `draw_page` redraws everything; `update_row` repaints single rows when only
//! the cursor or one checkbox moved.

use std::io;

use unicode_width::UnicodeWidthStr;

use crate::domain::ports::Terminal;
use crate::domain::{MenuEntry, PageState};

use super::theme::{self, markers, MenuStyle};

/// Rows above the first entry when a title is shown
pub const TITLE_ROWS: u16 = 2;

/// Read-only snapshot of what is on screen
#[derive(Debug, Clone, Copy)]
pub struct MenuView<'a> {
    pub title: Option<&'a str>,
    pub entries: &'a [MenuEntry],
    pub pages: &'a PageState,
    pub selected_row: usize,
    pub multi_select: bool,
}

impl MenuView<'_> {
    /// Screen row of the first entry
    pub fn origin(&self) -> u16 {
        if self.title.is_some() {
            TITLE_ROWS
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: MenuStyle,
}

impl Renderer {
    pub fn new(style: MenuStyle) -> Self {
        Self { style }
    }

    /// Width of the entry column for a set of entries
    pub fn column_width(&self, entries: &[MenuEntry], multi_select: bool) -> usize {
        let widest = entries
            .iter()
            .map(|e| e.display_name.width())
            .max()
            .unwrap_or(0);
        let widest = if multi_select {
            widest + theme::CHECKBOX_WIDTH
        } else {
            widest
        };
        widest.max(self.style.min_width)
    }

    /// Text of one entry line, without colors
    pub fn render_entry(&self, entry: &MenuEntry, width: usize, multi_select: bool) -> String {
        let mut line = String::new();
        if multi_select {
            line.push_str(if entry.selected {
                markers::CHECKED
            } else {
                markers::UNCHECKED
            });
        }
        line.push_str(&entry.display_name);

        let used = line.width();
        if used < width {
            line.push_str(&" ".repeat(width - used));
        }

        if entry.is_nested() {
            line.push_str(&self.style.nested_indicator);
        } else {
            line.push_str(&" ".repeat(self.style.nested_indicator.width()));
        }
        line
    }

    /// Redraw the whole screen for the current page.
    pub fn draw_page<T: Terminal + ?Sized>(&self, term: &mut T, view: &MenuView) -> io::Result<()> {
        let width = self.column_width(view.entries, view.multi_select);

        term.clear_screen()?;
        if let Some(title) = view.title {
            term.write_line(title)?;
            term.write_line("")?;
        }

        for row in 0..view.pages.entries_on_page(view.pages.current_page) {
            self.paint_row(term, view, row, width)?;
            term.write_line("")?;
        }

        term.write_line("")?;
        term.write_line(&view.pages.indicator())?;
        term.flush()
    }

    /// Repaint the rows that lost and gained the highlight.
    ///
    /// The cursor is put back on the row it was on.
    pub fn update_row<T: Terminal + ?Sized>(
        &self,
        term: &mut T,
        view: &MenuView,
        old_row: usize,
        new_row: usize,
    ) -> io::Result<()> {
        let width = self.column_width(view.entries, view.multi_select);
        let rows_on_page = view.pages.entries_on_page(view.pages.current_page);
        let back = term.cursor_row();

        let rows = if old_row == new_row {
            vec![old_row]
        } else {
            vec![old_row, new_row]
        };

        for row in rows.into_iter().filter(|&r| r < rows_on_page) {
            term.set_cursor_row(view.origin() + row as u16)?;
            self.paint_row(term, view, row, width)?;
        }

        term.set_cursor_row(back)?;
        term.flush()
    }

    fn paint_row<T: Terminal + ?Sized>(
        &self,
        term: &mut T,
        view: &MenuView,
        row: usize,
        width: usize,
    ) -> io::Result<()> {
        let index = view.pages.index_of(view.pages.current_page, row);
        let Some(entry) = view.entries.get(index) else {
            return Ok(());
        };
        let line = self.render_entry(entry, width, view.multi_select);

        if row != view.selected_row {
            return term.write(&line);
        }

        let saved_fg = term.foreground();
        let saved_bg = term.background();
        let (fg, bg) = theme::highlight_colors(saved_fg, saved_bg);
        term.set_foreground(fg)?;
        term.set_background(bg)?;
        let written = term.write(&line);
        term.set_foreground(saved_fg)?;
        term.set_background(saved_bg)?;
        written
    }
}

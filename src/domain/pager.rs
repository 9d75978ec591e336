//! Page bookkeeping.
//!
//! Pages are 0-indexed. `total_pages` is the index of the last page, not a
//! count, which keeps the indicator arithmetic (`current + 1` / `total + 1`)
//! and the bounds checks in one place.

use crate::error::{MenuError, MenuResult};

/// Rows reserved around the entries when a title is shown
pub const RESERVED_ROWS_WITH_TITLE: u16 = 7;
/// Rows reserved around the entries without a title
pub const RESERVED_ROWS: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page_size: usize,
    pub entry_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageState {
    /// Compute the page layout for a viewport.
    pub fn layout(entry_count: usize, viewport_height: u16, has_title: bool) -> MenuResult<Self> {
        let reserved = if has_title {
            RESERVED_ROWS_WITH_TITLE
        } else {
            RESERVED_ROWS
        };

        if viewport_height <= reserved {
            return Err(MenuError::ViewportTooSmall {
                height: viewport_height,
                required: reserved + 1,
            });
        }

        Ok(Self::with_page_size(
            entry_count,
            usize::from(viewport_height - reserved),
        ))
    }

    /// Layout with an explicit page size. `page_size` must be at least 1.
    pub fn with_page_size(entry_count: usize, page_size: usize) -> Self {
        debug_assert!(page_size >= 1);
        let page_size = page_size.max(1);
        Self {
            page_size,
            entry_count,
            current_page: 0,
            total_pages: entry_count.saturating_sub(1) / page_size,
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 0;
    }

    pub fn first_index_of_page(&self, page: usize) -> usize {
        self.page_size * page
    }

    pub fn entries_on_page(&self, page: usize) -> usize {
        if page == self.total_pages {
            self.entry_count - self.page_size * self.total_pages
        } else if page < self.total_pages {
            self.page_size
        } else {
            0
        }
    }

    /// Index of the last row on the current page
    pub fn last_row(&self) -> usize {
        self.entries_on_page(self.current_page).saturating_sub(1)
    }

    pub fn clamp_row(&self, row: usize) -> usize {
        row.min(self.last_row())
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }

    /// Global index of a row on a page
    pub fn index_of(&self, page: usize, row: usize) -> usize {
        self.first_index_of_page(page) + row
    }

    /// `(page, row)` for a global entry index
    pub fn locate(&self, index: usize) -> (usize, usize) {
        (index / self.page_size, index % self.page_size)
    }

    /// Text of the page indicator, 1-based
    pub fn indicator(&self) -> String {
        format!("{}/{}", self.current_page + 1, self.total_pages + 1)
    }
}

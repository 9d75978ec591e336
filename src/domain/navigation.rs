//! Navigation stack for nested menus.
//!
//! A frame holds the parent's title and the exact source it was built from,
//! so popping rebuilds the parent without re-running any command.

use super::source::EntrySource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationFrame {
    pub title: Option<String>,
    pub source: EntrySource,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationStack {
    frames: Vec<NavigationFrame>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, title: Option<String>, source: EntrySource) {
        self.frames.push(NavigationFrame { title, source });
    }

    /// Remove the most recent frame; `None` at the root.
    pub fn pop(&mut self) -> Option<NavigationFrame> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_root(&self) -> bool {
        self.frames.is_empty()
    }

    /// Titles from the root down to the parent of the current level
    pub fn breadcrumb(&self) -> Vec<&str> {
        self.frames
            .iter()
            .map(|f| f.title.as_deref().unwrap_or("(root)"))
            .collect()
    }
}

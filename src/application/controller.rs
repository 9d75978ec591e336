//! Menu controller: the state machine behind a running menu.
//!
//! The controller owns the current level (title, source, entries, page
//! layout, cursor row) and the navigation stack. Each key event is applied
//! to that state and then repainted, either the two affected rows or the
//! whole page.

use std::mem;

use crate::domain::ports::{ActionExecutor, ExecutionResult, InvokeMode, Terminal};
use crate::domain::{
    build_entries, BuildOptions, EntryAction, EntrySource, MenuEntry, NavigationStack, PageState,
};
use crate::error::{MenuError, MenuResult};
use crate::ui::{key_to_event, MenuEvent, MenuView, Renderer};

use super::menu::MenuOutcome;
use super::session::TerminalSession;

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Waiting for keys
    Browsing,
    /// An action is being evaluated
    AwaitingAction,
    /// A result has been produced
    Exited,
}

/// What has to be redrawn after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repaint {
    Nothing,
    Rows(usize, usize),
    Page,
}

/// One menu level ready to be shown
pub(crate) struct Level {
    pub(crate) title: Option<String>,
    pub(crate) source: EntrySource,
    pub(crate) entries: Vec<MenuEntry>,
    pub(crate) pages: PageState,
}

pub struct MenuController<'a, T: Terminal + ?Sized, E: ActionExecutor + ?Sized> {
    term: TerminalSession<'a, T>,
    executor: &'a mut E,
    renderer: Renderer,
    build: BuildOptions,
    title: Option<String>,
    source: EntrySource,
    entries: Vec<MenuEntry>,
    pages: PageState,
    row: usize,
    stack: NavigationStack,
    state: MenuState,
}

impl<'a, T: Terminal + ?Sized, E: ActionExecutor + ?Sized> MenuController<'a, T, E> {
    /// Controller for an already validated root level.
    pub(crate) fn new(
        term: TerminalSession<'a, T>,
        executor: &'a mut E,
        renderer: Renderer,
        build: BuildOptions,
        root: Level,
    ) -> Self {
        Self {
            term,
            executor,
            renderer,
            build,
            title: root.title,
            source: root.source,
            entries: root.entries,
            pages: root.pages,
            row: 0,
            stack: NavigationStack::new(),
            state: MenuState::Browsing,
        }
    }

    /// Draw the first page and process keys until a result is produced.
    pub fn run(&mut self) -> MenuResult<MenuOutcome> {
        self.redraw()?;
        loop {
            let key = self.term.read_key(false)?;
            let Some(event) = key_to_event(key) else {
                continue;
            };
            if let Some(outcome) = self.handle_event(event)? {
                return Ok(outcome);
            }
        }
    }

    /// Hand the terminal session back, e.g. to release it.
    pub(crate) fn into_session(self) -> TerminalSession<'a, T> {
        self.term
    }

    /// Apply one event. Returns the outcome once the menu has exited.
    pub fn handle_event(&mut self, event: MenuEvent) -> MenuResult<Option<MenuOutcome>> {
        if self.state == MenuState::Exited {
            return Ok(None);
        }
        tracing::trace!(?event, page = self.pages.current_page, row = self.row, "menu event");

        let multi = self.build.multi_select;
        let repaint = match event {
            MenuEvent::MoveDown => {
                if self.row < self.pages.last_row() {
                    self.row += 1;
                    Repaint::Rows(self.row - 1, self.row)
                } else if self.pages.has_next() {
                    self.pages.current_page += 1;
                    self.row = 0;
                    Repaint::Page
                } else {
                    Repaint::Nothing
                }
            }
            MenuEvent::MoveUp => {
                if self.row > 0 {
                    self.row -= 1;
                    Repaint::Rows(self.row + 1, self.row)
                } else if self.pages.has_prev() {
                    self.pages.current_page -= 1;
                    self.row = self.pages.last_row();
                    Repaint::Page
                } else {
                    Repaint::Nothing
                }
            }
            MenuEvent::JumpTop => {
                if self.row != 0 {
                    let old = mem::replace(&mut self.row, 0);
                    Repaint::Rows(old, 0)
                } else if self.pages.has_prev() {
                    self.pages.current_page -= 1;
                    self.row = self.pages.last_row();
                    Repaint::Page
                } else {
                    Repaint::Nothing
                }
            }
            MenuEvent::JumpBottom => {
                let last = self.pages.last_row();
                if self.row != last {
                    let old = mem::replace(&mut self.row, last);
                    Repaint::Rows(old, last)
                } else if self.pages.has_next() {
                    self.pages.current_page += 1;
                    self.row = 0;
                    Repaint::Page
                } else {
                    Repaint::Nothing
                }
            }
            MenuEvent::PageNext if self.pages.has_next() => {
                self.pages.current_page += 1;
                self.row = 0;
                Repaint::Page
            }
            MenuEvent::PagePrev if self.pages.has_prev() => {
                self.pages.current_page -= 1;
                self.row = 0;
                Repaint::Page
            }
            MenuEvent::PageNext | MenuEvent::PagePrev => Repaint::Nothing,
            MenuEvent::ToggleSelect if multi => {
                let index = self.current_index();
                self.entries[index].selected = !self.entries[index].selected;
                Repaint::Rows(self.row, self.row)
            }
            MenuEvent::SelectAll | MenuEvent::SelectNone if multi => {
                let selected = event == MenuEvent::SelectAll;
                self.entries.iter_mut().for_each(|e| e.selected = selected);
                Repaint::Page
            }
            MenuEvent::ToggleSelect | MenuEvent::SelectAll | MenuEvent::SelectNone => {
                Repaint::Nothing
            }
            MenuEvent::Cancel => match self.stack.pop() {
                Some(frame) => {
                    tracing::debug!(depth = self.stack.depth(), "returning to parent menu");
                    let level = self.prepare_level(frame.title, frame.source)?;
                    self.enter(level)?;
                    Repaint::Page
                }
                None => return Ok(Some(self.exit(MenuOutcome::Cancelled))),
            },
            MenuEvent::Abort => return Ok(Some(self.exit(MenuOutcome::Cancelled))),
            MenuEvent::Confirm if multi => {
                let outcome = self.confirm_multi()?;
                return Ok(Some(self.exit(outcome)));
            }
            MenuEvent::Confirm => match self.confirm_single()? {
                Some(outcome) => return Ok(Some(self.exit(outcome))),
                None => Repaint::Page,
            },
        };

        self.repaint(repaint)?;
        Ok(None)
    }

    fn current_index(&self) -> usize {
        self.pages.index_of(self.pages.current_page, self.row)
    }

    fn exit(&mut self, outcome: MenuOutcome) -> MenuOutcome {
        self.state = MenuState::Exited;
        tracing::debug!(?outcome, "menu exited");
        outcome
    }

    /// Every selected entry either has its action invoked or contributes its name.
    fn confirm_multi(&mut self) -> MenuResult<MenuOutcome> {
        self.state = MenuState::AwaitingAction;
        let mut names = Vec::new();

        for entry in self.entries.iter().filter(|e| e.selected) {
            match &entry.action {
                Some(EntryAction::Execute(command)) | Some(EntryAction::OpenCommand(command)) => {
                    tracing::info!(entry = %entry.display_name, command = %command, "running action");
                    self.executor.invoke(command, InvokeMode::Inline)?;
                }
                Some(EntryAction::OpenSource(_)) | None => names.push(entry.display_name.clone()),
            }
        }

        Ok(MenuOutcome::MultiSelected(names))
    }

    /// Returns `None` when a nested menu was opened and browsing continues.
    fn confirm_single(&mut self) -> MenuResult<Option<MenuOutcome>> {
        let entry = self.entries[self.current_index()].clone();

        match entry.action {
            None => Ok(Some(MenuOutcome::Selected(entry.display_name))),
            Some(EntryAction::Execute(command)) => {
                self.state = MenuState::AwaitingAction;
                tracing::info!(entry = %entry.display_name, command = %command, "running action");
                self.executor.invoke(&command, InvokeMode::Inline)?;
                Ok(Some(MenuOutcome::Executed))
            }
            Some(EntryAction::OpenSource(child)) => {
                self.descend(entry.display_name, child)?;
                Ok(None)
            }
            Some(EntryAction::OpenCommand(command)) => {
                self.state = MenuState::AwaitingAction;
                tracing::info!(entry = %entry.display_name, command = %command, "evaluating nested menu");
                let child = match self.executor.invoke(&command, InvokeMode::Nested)? {
                    ExecutionResult::Sequence(items) if !items.is_empty() => {
                        EntrySource::Sequence(items)
                    }
                    ExecutionResult::Sequence(_) => {
                        return Err(MenuError::InvalidNestedResult {
                            entry: entry.display_name,
                            reason: "the action produced no choices".to_string(),
                        })
                    }
                    ExecutionResult::Opaque => {
                        return Err(MenuError::InvalidNestedResult {
                            entry: entry.display_name,
                            reason: "the action did not return a list".to_string(),
                        })
                    }
                };
                self.descend(entry.display_name, child)?;
                self.state = MenuState::Browsing;
                Ok(None)
            }
        }
    }

    /// Open `child` as a new level titled `name`, remembering the current one.
    fn descend(&mut self, name: String, child: EntrySource) -> MenuResult<()> {
        let level = self
            .prepare_level(Some(name.clone()), child)
            .map_err(|err| match err {
                MenuError::EmptyEntries => MenuError::InvalidNestedResult {
                    entry: name,
                    reason: "the nested menu is empty".to_string(),
                },
                other => other,
            })?;

        let parent_title = self.title.take();
        let parent_source = mem::replace(&mut self.source, EntrySource::Sequence(Vec::new()));
        self.stack.push(parent_title, parent_source);
        tracing::debug!(
            depth = self.stack.depth(),
            path = ?self.stack.breadcrumb(),
            "opened nested menu"
        );
        self.enter(level)
    }

    fn prepare_level(&self, title: Option<String>, source: EntrySource) -> MenuResult<Level> {
        let entries = build_entries(&source, &self.build)?;
        let pages = PageState::layout(
            entries.len(),
            self.term.viewport_height()?,
            title.is_some(),
        )?;
        Ok(Level {
            title,
            source,
            entries,
            pages,
        })
    }

    fn enter(&mut self, level: Level) -> MenuResult<()> {
        match &level.title {
            Some(title) => self.term.set_window_title(title)?,
            None => self.term.reset_window_title()?,
        }
        self.title = level.title;
        self.source = level.source;
        self.entries = level.entries;
        self.pages = level.pages;
        self.pages.reset();
        self.row = 0;
        Ok(())
    }

    fn repaint(&mut self, repaint: Repaint) -> MenuResult<()> {
        let view = MenuView {
            title: self.title.as_deref(),
            entries: &self.entries,
            pages: &self.pages,
            selected_row: self.row,
            multi_select: self.build.multi_select,
        };
        match repaint {
            Repaint::Nothing => {}
            Repaint::Rows(old, new) => self.renderer.update_row(&mut *self.term, &view, old, new)?,
            Repaint::Page => self.renderer.draw_page(&mut *self.term, &view)?,
        }
        Ok(())
    }

    fn redraw(&mut self) -> MenuResult<()> {
        self.repaint(Repaint::Page)
    }
}

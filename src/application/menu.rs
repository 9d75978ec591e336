//! Entry point: validate a source, then run it against a terminal.

use crate::domain::ports::{ActionExecutor, Terminal};
use crate::domain::{build_entries, BuildOptions, EntrySource, MenuEntry, PageState};
use crate::error::MenuResult;
use crate::ui::{MenuStyle, Renderer};

use super::controller::{Level, MenuController};
use super::session::TerminalSession;

/// How the user left the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Cancelled at the root (or interrupted)
    Cancelled,
    /// An entry's action ran; there is no name to return
    Executed,
    /// Single-select result
    Selected(String),
    /// Multi-select result, in entry order
    MultiSelected(Vec<String>),
}

impl MenuOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, MenuOutcome::Cancelled)
    }

    /// Names carried by the outcome, if any
    pub fn names(&self) -> Vec<&str> {
        match self {
            MenuOutcome::Selected(name) => vec![name.as_str()],
            MenuOutcome::MultiSelected(names) => names.iter().map(String::as_str).collect(),
            MenuOutcome::Cancelled | MenuOutcome::Executed => Vec::new(),
        }
    }
}

/// Caller-facing switches for a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    pub title: Option<String>,
    pub sort: bool,
    pub multi_select: bool,
    pub ignore_nested: bool,
    pub nested_prefix: String,
    pub style: MenuStyle,
}

impl Default for MenuOptions {
    fn default() -> Self {
        let build = BuildOptions::default();
        Self {
            title: None,
            sort: build.sort,
            multi_select: build.multi_select,
            ignore_nested: build.ignore_nested,
            nested_prefix: build.nested_prefix,
            style: MenuStyle::default(),
        }
    }
}

impl MenuOptions {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            sort: self.sort,
            multi_select: self.multi_select,
            ignore_nested: self.ignore_nested,
            nested_prefix: self.nested_prefix.clone(),
        }
    }
}

/// A validated menu, not yet shown
#[derive(Debug, Clone)]
pub struct Menu {
    source: EntrySource,
    entries: Vec<MenuEntry>,
    options: MenuOptions,
}

impl Menu {
    /// Build the root entries. Fails on bad input before anything is drawn.
    pub fn new(source: EntrySource, options: MenuOptions) -> MenuResult<Self> {
        let entries = build_entries(&source, &options.build_options())?;
        Ok(Self {
            source,
            entries,
            options,
        })
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    /// Run the menu until the user confirms or cancels at the root.
    ///
    /// The terminal is restored on every exit path.
    pub fn run<T, E>(self, terminal: &mut T, executor: &mut E) -> MenuResult<MenuOutcome>
    where
        T: Terminal + ?Sized,
        E: ActionExecutor + ?Sized,
    {
        let pages = PageState::layout(
            self.entries.len(),
            terminal.viewport_height()?,
            self.options.title.is_some(),
        )?;

        let session = TerminalSession::acquire(terminal, self.options.title.as_deref())?;
        tracing::info!(
            entries = self.entries.len(),
            pages = pages.total_pages + 1,
            multi_select = self.options.multi_select,
            "menu started"
        );

        let build = self.options.build_options();
        let root = Level {
            title: self.options.title,
            source: self.source,
            entries: self.entries,
            pages,
        };
        let mut controller = MenuController::new(
            session,
            executor,
            Renderer::new(self.options.style),
            build,
            root,
        );

        let outcome = controller.run()?;
        controller.into_session().release()?;
        tracing::info!(cancelled = outcome.is_cancelled(), "menu finished");
        Ok(outcome)
    }
}

/// Validate `source` and run it as a menu.
pub fn run_menu<T, E>(
    terminal: &mut T,
    executor: &mut E,
    source: EntrySource,
    options: &MenuOptions,
) -> MenuResult<MenuOutcome>
where
    T: Terminal + ?Sized,
    E: ActionExecutor + ?Sized,
{
    Menu::new(source, options.clone())?.run(terminal, executor)
}

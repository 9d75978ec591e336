//! nestmenu - keyboard-driven paged selection menus for the terminal
//!
//! A menu is built from an `EntrySource` (a flat list of names, or named
//! actions that may open nested menus), laid out in pages that fit the
//! terminal, and driven by single keypresses until the user confirms or
//! cancels. Terminal and action execution are ports, so the same menu runs
//! against a real TTY or a headless test terminal.
//!
//! ```no_run
//! use nestmenu::{run_menu, CrosstermTerminal, EntrySource, MenuOptions, ShellExecutor};
//!
//! let mut terminal = CrosstermTerminal::open()?;
//! let mut executor = ShellExecutor::default();
//! let outcome = run_menu(
//!     &mut terminal,
//!     &mut executor,
//!     EntrySource::sequence(["Alpha", "Beta", "Gamma"]),
//!     &MenuOptions::default(),
//! )?;
//! # Ok::<(), nestmenu::MenuError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{run_menu, Menu, MenuOptions, MenuOutcome};
pub use config::{Config, ConfigWarning};
pub use domain::ports::{
    ActionError, ActionExecutor, ExecutionResult, InvokeMode, Key, KeyEvent, Terminal,
};
pub use domain::{ActionSpec, BuildOptions, EntrySource, MenuEntry, PageState};
pub use error::{MenuError, MenuResult};
pub use infrastructure::{load_source, CrosstermTerminal, HeadlessTerminal, ShellExecutor};
pub use ui::MenuStyle;

//! Error types for nestmenu
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ActionError;

/// Result type alias for nestmenu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for nestmenu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// Input document is neither a sequence nor a mapping
    #[error("unsupported menu input: expected a list or a mapping, found {found}")]
    UnsupportedInputKind { found: String },

    /// Nothing to navigate
    #[error("menu has no entries")]
    EmptyEntries,

    /// An entry would render as an empty line
    #[error("entry {position} has an empty display name")]
    EmptyDisplayName { position: usize },

    /// Terminal is too short to show a single entry
    #[error("terminal is {height} rows high; at least {required} rows are needed")]
    ViewportTooSmall { height: u16, required: u16 },

    /// Opening a nested entry produced nothing usable
    #[error("entry '{entry}' did not produce a nested menu: {reason}")]
    InvalidNestedResult { entry: String, reason: String },

    /// The action executor failed
    #[error(transparent)]
    Action(#[from] ActionError),

    /// Not attached to an interactive terminal
    #[error("not running in an interactive terminal (stdin and stdout must both be a TTY)")]
    NotInteractive,

    /// Entry document could not be read or parsed
    #[error("invalid menu document {file}: {message}")]
    InvalidSource { file: PathBuf, message: String },

    /// Configuration file could not be parsed or failed validation
    #[error("invalid configuration {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MenuError {
    /// Whether the error came from the caller's input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MenuError::UnsupportedInputKind { .. }
                | MenuError::EmptyEntries
                | MenuError::EmptyDisplayName { .. }
                | MenuError::InvalidSource { .. }
        )
    }
}

//! Action Executor Port
//!
//! Entries may carry an opaque action string. The menu never interprets it;
//! it hands the string to an `ActionExecutor` and only looks at the shape of
//! what comes back.

use thiserror::Error;

/// What the caller wants from an invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeMode {
    /// Fire-and-forget: the menu exits after the action ran
    Inline,
    /// The action's output becomes the choices of a child menu
    Nested,
}

/// Outcome of invoking an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Further choices, one per item
    Sequence(Vec<String>),
    /// Side effect only
    Opaque,
}

/// Errors surfaced by an executor
#[derive(Error, Debug)]
pub enum ActionError {
    /// The action could not be started at all
    #[error("failed to start command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The action ran and reported failure
    #[error("command '{command}' exited with status {}", status_text(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The action printed something that is not text
    #[error("command '{command}' produced non UTF-8 output")]
    NonUtf8Output { command: String },

    /// The executor does not know how to run this action
    #[error("unsupported action '{0}'")]
    Unsupported(String),
}

fn status_text(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

/// Runs entry actions on behalf of the menu.
///
/// Implementations:
/// - `ShellExecutor`: runs the action through the configured shell
/// - test doubles recording invocations
pub trait ActionExecutor {
    /// Invoke a single action.
    fn invoke(&mut self, action: &str, mode: InvokeMode) -> Result<ExecutionResult, ActionError>;
}

impl<E: ActionExecutor + ?Sized> ActionExecutor for &mut E {
    fn invoke(&mut self, action: &str, mode: InvokeMode) -> Result<ExecutionResult, ActionError> {
        (**self).invoke(action, mode)
    }
}

/// Executor that refuses every action.
///
/// Useful for plain list menus, where no entry carries an action.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExecutor;

impl ActionExecutor for NoopExecutor {
    fn invoke(&mut self, action: &str, _mode: InvokeMode) -> Result<ExecutionResult, ActionError> {
        Err(ActionError::Unsupported(action.to_string()))
    }
}

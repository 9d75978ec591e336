//! Shell Action Executor
//!
//! Runs entry actions through a shell, e.g. `sh -c "<action>"`.

use std::process::{Command, Stdio};

use crate::domain::ports::{ActionError, ActionExecutor, ExecutionResult, InvokeMode};

/// Executor that hands each action to a shell.
///
/// Output of inline actions is buffered rather than written to the terminal,
/// which is still in raw mode on the alternate screen while the menu runs.
/// Call `take_output` after the session ended to print it.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    program: String,
    args: Vec<String>,
    output: String,
}

impl ShellExecutor {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            output: String::new(),
        }
    }

    /// Captured stdout of inline actions, leaving the buffer empty
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    fn run(&self, action: &str) -> Result<String, ActionError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(action)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ActionError::Spawn {
                command: action.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ActionError::Failed {
                command: action.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ActionError::NonUtf8Output {
            command: action.to_string(),
        })
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        if cfg!(windows) {
            Self::new("cmd", vec!["/C".to_string()])
        } else {
            Self::new("sh", vec!["-c".to_string()])
        }
    }
}

impl ActionExecutor for ShellExecutor {
    fn invoke(&mut self, action: &str, mode: InvokeMode) -> Result<ExecutionResult, ActionError> {
        tracing::debug!(program = %self.program, action, ?mode, "invoking action");
        let stdout = self.run(action)?;

        match mode {
            InvokeMode::Nested => Ok(ExecutionResult::Sequence(
                stdout
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
            InvokeMode::Inline => {
                self.output.push_str(&stdout);
                Ok(ExecutionResult::Opaque)
            }
        }
    }
}

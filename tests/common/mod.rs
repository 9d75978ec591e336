//! Shared helpers for integration tests.

#![allow(dead_code)]

use nestmenu::{
    ActionError, ActionExecutor, EntrySource, ExecutionResult, HeadlessTerminal, InvokeMode, Key,
    MenuOptions, MenuOutcome, MenuResult,
};

/// Executor double: records every call, answers nested calls with `nested`.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub calls: Vec<(String, InvokeMode)>,
    pub nested: Vec<String>,
}

impl ActionExecutor for RecordingExecutor {
    fn invoke(&mut self, action: &str, mode: InvokeMode) -> Result<ExecutionResult, ActionError> {
        self.calls.push((action.to_string(), mode));
        Ok(match mode {
            InvokeMode::Nested => ExecutionResult::Sequence(self.nested.clone()),
            InvokeMode::Inline => ExecutionResult::Opaque,
        })
    }
}

/// Executor double whose every call fails as a non-zero exit.
#[derive(Debug, Default)]
pub struct FailingExecutor {
    pub calls: Vec<(String, InvokeMode)>,
}

impl ActionExecutor for FailingExecutor {
    fn invoke(&mut self, action: &str, mode: InvokeMode) -> Result<ExecutionResult, ActionError> {
        self.calls.push((action.to_string(), mode));
        Err(ActionError::Failed {
            command: action.to_string(),
            code: Some(3),
            stderr: "boom".to_string(),
        })
    }
}

/// Run a menu on an 80x`height` headless terminal fed with `keys`.
pub fn run_on(
    height: u16,
    source: EntrySource,
    options: &MenuOptions,
    keys: &[Key],
    executor: &mut RecordingExecutor,
) -> (MenuResult<MenuOutcome>, HeadlessTerminal) {
    let mut term = HeadlessTerminal::new(80, height).with_keys(keys.iter().copied());
    let result = nestmenu::run_menu(&mut term, executor, source, options);
    (result, term)
}

pub fn numbered(n: usize) -> EntrySource {
    EntrySource::sequence((0..n).map(|i| format!("item-{i:02}")))
}

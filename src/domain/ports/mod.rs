//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the menu core.
//! The infrastructure layer provides concrete implementations.

pub mod action_executor;
pub mod terminal;

pub use action_executor::{ActionError, ActionExecutor, ExecutionResult, InvokeMode, NoopExecutor};
pub use terminal::{Color, Key, KeyEvent, Terminal};

//! Application Layer
//!
//! Runs a menu: acquires the terminal session, drives the controller, and
//! hands back the outcome.
//!
//! ## Structure
//!
//! - `menu` - `Menu`, `MenuOptions`, `MenuOutcome`, `run_menu`
//! - `controller` - the key-driven state machine (internal)
//! - `session` - scoped capture/restore of terminal state

mod controller;
pub mod menu;
pub mod session;

pub use menu::{run_menu, Menu, MenuOptions, MenuOutcome};
pub use session::TerminalSession;

//! Terminal adapters
//!
//! Concrete implementations of the Terminal port.

mod headless;
mod tty;

pub use headless::HeadlessTerminal;
pub use tty::{map_key, CrosstermTerminal};

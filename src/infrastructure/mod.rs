//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `terminal/` - Terminal implementations (crossterm, headless)
//! - `executor` - Shell-backed action executor
//! - `source_loader` - JSON / TOML / YAML menu documents

pub mod executor;
pub mod source_loader;
pub mod terminal;

// Re-export for convenience
pub use executor::ShellExecutor;
pub use source_loader::{load_source, parse_source, SourceFormat};
pub use terminal::{CrosstermTerminal, HeadlessTerminal};

//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line flags and how they override configuration
//! - `output` - Printing the menu outcome

pub mod cli;
pub mod output;

pub use cli::Cli;
pub use output::{write_outcome, OutputFormat};

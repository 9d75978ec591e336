//! Configuration module for nestmenu
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NESTMENU_*)
//! 3. Config file (`--config`, or `<config dir>/nestmenu/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, user_config_path, ConfigWarning};
pub use types::{Config, MenuConfig, ShellConfig};

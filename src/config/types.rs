//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::application::MenuOptions;
use crate::domain::entry::DEFAULT_NESTED_PREFIX;
use crate::error::{MenuError, MenuResult};
use crate::infrastructure::ShellExecutor;
use crate::ui::theme::{self, MenuStyle};

use super::loader::{self, ConfigWarning};

/// Menu behavior and appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Sort entries by display name
    #[serde(default)]
    pub sort: bool,

    /// Marks an action whose output becomes a nested menu
    #[serde(default = "default_nested_prefix")]
    pub nested_prefix: String,

    /// Suffix shown after entries that open a nested menu
    #[serde(default = "default_nested_indicator")]
    pub nested_indicator: String,

    /// Minimum width of the entry column
    #[serde(default = "default_min_width")]
    pub min_width: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            sort: false,
            nested_prefix: default_nested_prefix(),
            nested_indicator: default_nested_indicator(),
            min_width: default_min_width(),
        }
    }
}

fn default_nested_prefix() -> String {
    DEFAULT_NESTED_PREFIX.to_string()
}

fn default_nested_indicator() -> String {
    theme::markers::NESTED.to_string()
}

fn default_min_width() -> usize {
    theme::MIN_COLUMN_WIDTH
}

/// Shell used to run entry actions
///
/// The action string is appended as the last argument:
/// `program args... "<action>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_shell_program")]
    pub program: String,

    #[serde(default = "default_shell_args")]
    pub args: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: default_shell_program(),
            args: default_shell_args(),
        }
    }
}

fn default_shell_program() -> String {
    if cfg!(windows) { "cmd" } else { "sh" }.to_string()
}

fn default_shell_args() -> Vec<String> {
    vec![if cfg!(windows) { "/C" } else { "-c" }.to_string()]
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub shell: ShellConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Reject values the menu cannot work with.
    ///
    /// `file` is only used to label the error.
    pub fn validate(&self, file: &Path) -> MenuResult<()> {
        let invalid = |message: &str| {
            Err(MenuError::InvalidConfig {
                file: file.to_path_buf(),
                message: message.to_string(),
            })
        };

        if self.menu.nested_prefix.is_empty() {
            return invalid("menu.nested_prefix must not be empty");
        }
        if self.menu.nested_indicator.width() != 2 {
            return invalid("menu.nested_indicator must be exactly two columns wide");
        }
        if self.menu.min_width == 0 {
            return invalid("menu.min_width must be at least 1");
        }
        if self.shell.program.trim().is_empty() {
            return invalid("shell.program must not be empty");
        }
        Ok(())
    }

    pub fn menu_style(&self) -> MenuStyle {
        MenuStyle {
            nested_indicator: self.menu.nested_indicator.clone(),
            min_width: self.menu.min_width,
        }
    }

    /// Menu options seeded from configuration; CLI flags are applied on top.
    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            sort: self.menu.sort,
            nested_prefix: self.menu.nested_prefix.clone(),
            style: self.menu_style(),
            ..MenuOptions::default()
        }
    }

    pub fn executor(&self) -> ShellExecutor {
        ShellExecutor::new(self.shell.program.clone(), self.shell.args.clone())
    }
}

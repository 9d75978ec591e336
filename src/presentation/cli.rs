//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Entries come from positional ITEMS or from `--file`, never both
//! - Flags override the config file and NESTMENU_* environment variables

use std::path::PathBuf;

use clap::Parser;

use crate::application::MenuOptions;

/// nestmenu - pick from a paged, keyboard-driven menu in the terminal
#[derive(Parser, Debug)]
#[command(name = "nestmenu")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Keys: Up/Down (j/k) move, Left/Right page, Home/End jump, \
Enter confirm, Esc/Backspace back, Space toggle, a/n select all/none (with --multi).\n\
Exit status: 0 selected or executed, 1 cancelled, 2 error.")]
pub struct Cli {
    /// Menu entries, shown in the order given
    #[arg(value_name = "ITEMS", conflicts_with = "file")]
    pub items: Vec<String>,

    /// Read entries from a JSON, TOML or YAML document
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Title shown above the entries and in the window title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Sort entries by name
    #[arg(short, long)]
    pub sort: bool,

    /// Allow selecting several entries (Space toggles)
    #[arg(short, long)]
    pub multi: bool,

    /// Treat nested entries and prefixed actions as plain entries
    #[arg(long)]
    pub ignore_nested: bool,

    /// Configuration file (default: <config dir>/nestmenu/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Layer command-line flags over options seeded from configuration.
    pub fn apply_to(&self, mut options: MenuOptions) -> MenuOptions {
        options.title = self.title.clone().or(options.title);
        options.sort |= self.sort;
        options.multi_select |= self.multi;
        options.ignore_nested |= self.ignore_nested;
        options
    }
}

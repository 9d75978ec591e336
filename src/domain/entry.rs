//! Menu entries and the Entry Model builder.
//!
//! `build_entries` turns an `EntrySource` into the uniform list the
//! controller pages through. Classification looks at the original
//! name/value pairing; sorting happens afterwards.

use super::source::{ActionSpec, EntrySource};
use crate::error::{MenuError, MenuResult};

/// Default marker that turns a command value into a nested menu
pub const DEFAULT_NESTED_PREFIX: &str = "@";

/// What confirming an entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// The display name is the result
    None,
    /// Run the action and exit
    InlineExecute,
    /// Open a child menu
    OpenNested,
}

/// Action attached to an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    /// Run this command as a side effect
    Execute(String),
    /// Descend into this source
    OpenSource(EntrySource),
    /// Run this command and descend into the lines it yields
    OpenCommand(String),
}

impl EntryAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            EntryAction::Execute(_) => ActionKind::InlineExecute,
            EntryAction::OpenSource(_) | EntryAction::OpenCommand(_) => ActionKind::OpenNested,
        }
    }
}

/// A displayable menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub display_name: String,
    pub action: Option<EntryAction>,
    pub selected: bool,
}

impl MenuEntry {
    /// Entry without an action
    pub fn plain(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            action: None,
            selected: false,
        }
    }

    pub fn with_action(display_name: impl Into<String>, action: EntryAction) -> Self {
        Self {
            display_name: display_name.into(),
            action: Some(action),
            selected: false,
        }
    }

    pub fn action_kind(&self) -> ActionKind {
        self.action.as_ref().map_or(ActionKind::None, EntryAction::kind)
    }

    pub fn is_nested(&self) -> bool {
        self.action_kind() == ActionKind::OpenNested
    }
}

/// Flags that shape how a source is turned into entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub sort: bool,
    pub multi_select: bool,
    pub ignore_nested: bool,
    pub nested_prefix: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            sort: false,
            multi_select: false,
            ignore_nested: false,
            nested_prefix: DEFAULT_NESTED_PREFIX.to_string(),
        }
    }
}

impl BuildOptions {
    /// Nested menus are disabled in multi-select mode and when asked to ignore them.
    pub fn allows_nesting(&self) -> bool {
        !(self.multi_select || self.ignore_nested)
    }
}

/// Build the entry list for one menu level.
pub fn build_entries(source: &EntrySource, options: &BuildOptions) -> MenuResult<Vec<MenuEntry>> {
    let mut entries = match source {
        EntrySource::Sequence(items) => items.iter().map(MenuEntry::plain).collect::<Vec<_>>(),
        EntrySource::Mapping(pairs) => pairs
            .iter()
            .map(|(name, spec)| MenuEntry {
                display_name: name.clone(),
                action: classify(spec, options),
                selected: false,
            })
            .collect(),
    };

    if entries.is_empty() {
        return Err(MenuError::EmptyEntries);
    }

    if let Some(position) = entries.iter().position(|e| e.display_name.is_empty()) {
        return Err(MenuError::EmptyDisplayName { position });
    }

    if options.sort {
        // `sort_by` is stable, so duplicates keep their relative order.
        entries.sort_by(|a, b| a.display_name.as_bytes().cmp(b.display_name.as_bytes()));
    }

    Ok(entries)
}

fn classify(spec: &ActionSpec, options: &BuildOptions) -> Option<EntryAction> {
    match spec {
        ActionSpec::Empty => None,
        ActionSpec::Nested(child) if options.allows_nesting() => {
            Some(EntryAction::OpenSource(child.clone()))
        }
        ActionSpec::Nested(_) => None,
        ActionSpec::Command(command) if command.is_empty() => None,
        ActionSpec::Command(command) => {
            match command.strip_prefix(options.nested_prefix.as_str()) {
                Some(rest) if !options.nested_prefix.is_empty() => {
                    if options.allows_nesting() {
                        Some(EntryAction::OpenCommand(rest.to_string()))
                    } else {
                        Some(EntryAction::Execute(rest.to_string()))
                    }
                }
                _ => Some(EntryAction::Execute(command.clone())),
            }
        }
    }
}

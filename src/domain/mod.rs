//! Domain Layer
//!
//! The menu's data model, without I/O.
//!
//! ## Structure
//!
//! - `source` - caller-supplied menu data (`EntrySource`)
//! - `entry` - normalized entries and the Entry Model builder
//! - `pager` - page layout and index arithmetic
//! - `navigation` - parent frames for nested menus
//! - `ports/` - terminal and action executor interfaces

pub mod entry;
pub mod navigation;
pub mod pager;
pub mod ports;
pub mod source;

pub use entry::{build_entries, ActionKind, BuildOptions, EntryAction, MenuEntry};
pub use navigation::{NavigationFrame, NavigationStack};
pub use pager::PageState;
pub use source::{ActionSpec, EntrySource};

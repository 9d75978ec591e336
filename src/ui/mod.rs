//! Menu presentation: design tokens, rendering and key mapping.

pub mod input;
pub mod render;
pub mod theme;

pub use input::{key_to_event, MenuEvent};
pub use render::{MenuView, Renderer};
pub use theme::MenuStyle;

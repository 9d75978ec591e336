use crossterm::style::Color;

/// Design tokens for the menu.
///
/// Design constraints:
/// - Markers and widths used by the renderer are sourced from this module
/// - Highlighting swaps the saved colors; these are the fallbacks for
///   terminals that only report `Color::Reset`
pub mod colors {
    use super::Color;

    /// Foreground assumed when the terminal reports its default color
    pub const DEFAULT_FOREGROUND: Color = Color::White;
    /// Background assumed when the terminal reports its default color
    pub const DEFAULT_BACKGROUND: Color = Color::Black;
}

pub mod markers {
    /// Multi-select checkbox, checked
    pub const CHECKED: &str = "[X] ";
    /// Multi-select checkbox, unchecked
    pub const UNCHECKED: &str = "[ ] ";
    /// Suffix for entries that open a nested menu; other entries get
    /// the same number of spaces
    pub const NESTED: &str = " >";
}

/// Narrowest entry column, in terminal cells
pub const MIN_COLUMN_WIDTH: usize = 30;

/// Extra cells taken by the checkbox marker in multi-select mode
pub const CHECKBOX_WIDTH: usize = 4;

/// Renderer settings that users may override through configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStyle {
    /// Two-cell suffix shown after entries that open a nested menu
    pub nested_indicator: String,
    /// Minimum width of the entry column
    pub min_width: usize,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            nested_indicator: markers::NESTED.to_string(),
            min_width: MIN_COLUMN_WIDTH,
        }
    }
}

/// Colors for a highlighted row, given the saved registers.
///
/// Returns `(foreground, background)`: the saved pair swapped, with
/// `Color::Reset` resolved first so the swap is visible.
pub fn highlight_colors(foreground: Color, background: Color) -> (Color, Color) {
    let fg = match foreground {
        Color::Reset => colors::DEFAULT_FOREGROUND,
        c => c,
    };
    let bg = match background {
        Color::Reset => colors::DEFAULT_BACKGROUND,
        c => c,
    };
    (bg, fg)
}

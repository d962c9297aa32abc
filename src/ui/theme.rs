use crossterm::style::Color;

/// Design tokens for the treepick UI.
///
/// All glyphs and colors used by renderers must come from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";

    // Checkbox states.
    pub const CHECKED: &str = "●";
    pub const UNCHECKED: &str = "○";

    // Tree expansion. Leaves get a spacer of the same width.
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";
    pub const SPACER: &str = " ";

    pub const CURSOR: &str = ">";
    pub const SEPARATOR: &str = "─";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";

    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";

    pub const EXPANDED: &str = "[v]";
    pub const COLLAPSED: &str = "[>]";
    pub const SPACER: &str = "   ";

    pub const CURSOR: &str = ">";
    pub const SEPARATOR: &str = "-";
}

/// Glyph set resolved for one rendering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub spacer: &'static str,
    pub cursor: &'static str,
    pub separator: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                checked: icons::CHECKED,
                unchecked: icons::UNCHECKED,
                expanded: icons::EXPANDED,
                collapsed: icons::COLLAPSED,
                spacer: icons::SPACER,
                cursor: icons::CURSOR,
                separator: icons::SEPARATOR,
                success: icons::SUCCESS,
                warning: icons::WARNING,
                error: icons::ERROR,
            }
        } else {
            Self {
                checked: icons_ascii::CHECKED,
                unchecked: icons_ascii::UNCHECKED,
                expanded: icons_ascii::EXPANDED,
                collapsed: icons_ascii::COLLAPSED,
                spacer: icons_ascii::SPACER,
                cursor: icons_ascii::CURSOR,
                separator: icons_ascii::SEPARATOR,
                success: icons_ascii::SUCCESS,
                warning: icons_ascii::WARNING,
                error: icons_ascii::ERROR,
            }
        }
    }

    pub fn checkbox(&self, checked: bool) -> &'static str {
        if checked {
            self.checked
        } else {
            self.unchecked
        }
    }
}

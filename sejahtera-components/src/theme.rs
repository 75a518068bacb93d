//! Named colors of the planner screens.

use sejahtera_ui::Color;

/// Color roles used by the planner components.
///
/// Components take their default colors from a theme instead of loose
/// color values, so every role is named and typed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanTheme {
    /// Active progress stroke.
    pub progress: Color,
    /// Inactive track behind the progress stroke.
    pub track: Color,
    /// Primary label text, such as the percentage.
    pub label: Color,
    /// Secondary text, such as captions.
    pub caption: Color,
}

impl PlanTheme {
    /// Palette of the plain progress indicator on the action plan screen.
    pub const fn indicator() -> Self {
        Self {
            progress: Color::from_hex(0x0EA5E9),
            track: Color::from_hex(0xE5E5EA),
            label: Color::from_hex(0x1C1C1E),
            caption: Color::from_hex(0x8E8E93),
        }
    }

    /// Palette of the labeled dashboard widget.
    pub const fn dashboard() -> Self {
        Self {
            progress: Color::from_hex(0x007AFF),
            track: Color::from_hex(0xF2F2F7),
            label: Color::from_hex(0x000000),
            caption: Color::from_hex(0x8E8E93),
        }
    }
}

impl Default for PlanTheme {
    fn default() -> Self {
        Self::indicator()
    }
}

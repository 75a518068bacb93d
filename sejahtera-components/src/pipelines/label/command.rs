//! Text label draw command.

use sejahtera_ui::{Color, DrawCommand};

/// Weight of label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Regular,
    /// Bold weight.
    Bold,
}

/// Draw command for a single line of text centered on a point.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCommand {
    /// The text to draw.
    pub text: String,
    /// Horizontal center of the text.
    pub x: f32,
    /// Vertical center of the text.
    pub y: f32,
    /// Font size in layout units.
    pub font_size: f32,
    /// Weight of the font.
    pub weight: FontWeight,
    /// Text color.
    pub color: Color,
}

impl DrawCommand for LabelCommand {}

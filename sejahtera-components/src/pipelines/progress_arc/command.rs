//! Arc stroke draw command.

use sejahtera_ui::{Color, DrawCommand};

/// Stroke cap used for arc ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressArcCap {
    /// Rounded stroke ends.
    Round,
    /// Flat stroke ends.
    Butt,
}

/// Dash pattern turning a full circle into a partial arc.
///
/// The dash is as long as the circumference, so only the dash offset decides
/// how much of the circle is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcDash {
    /// Length of one dash and one gap; equal to the circumference.
    pub length: f32,
    /// Hidden portion of the dash, in `[0, length]`.
    pub offset: f32,
}

/// Draw command for a circular stroke.
///
/// Angles follow the layer's transform: without rotation the stroke starts
/// at 3 o'clock and runs clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressArcCommand {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in layout units.
    pub stroke_width: f32,
    /// Center of the circle on both axes.
    pub center: f32,
    /// Radius of the stroke's center line.
    pub radius: f32,
    /// Dash pattern; `None` strokes the full circle.
    pub dash: Option<ArcDash>,
    /// Stroke cap applied to arc ends.
    pub cap: ProgressArcCap,
}

impl DrawCommand for ProgressArcCommand {}

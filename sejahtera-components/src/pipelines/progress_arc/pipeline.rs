//! SVG output for arc strokes.

use sejahtera_ui::{RenderError, SvgPipeline, SvgWriter};

use super::command::{ProgressArcCap, ProgressArcCommand};

/// Writes [`ProgressArcCommand`]s as stroked SVG circles.
#[derive(Debug, Default)]
pub struct ProgressArcPipeline;

impl SvgPipeline<ProgressArcCommand> for ProgressArcPipeline {
    fn draw(&mut self, command: &ProgressArcCommand, out: &mut SvgWriter) -> Result<(), RenderError> {
        let center = SvgWriter::number(command.center);
        let mut attributes = vec![
            ("cx", center.clone()),
            ("cy", center),
            ("r", SvgWriter::number(command.radius)),
            ("fill", "none".to_string()),
            ("stroke", command.color.to_hex_string()),
            ("stroke-width", SvgWriter::number(command.stroke_width)),
        ];
        if command.color.a < 1.0 {
            attributes.push(("stroke-opacity", SvgWriter::number(command.color.a)));
        }
        if let Some(dash) = command.dash {
            let length = SvgWriter::number(dash.length);
            attributes.push(("stroke-dasharray", format!("{length} {length}")));
            attributes.push(("stroke-dashoffset", SvgWriter::number(dash.offset)));
        }
        let cap = match command.cap {
            ProgressArcCap::Round => "round",
            ProgressArcCap::Butt => "butt",
        };
        attributes.push(("stroke-linecap", cap.to_string()));
        out.element("circle", &attributes)
    }
}

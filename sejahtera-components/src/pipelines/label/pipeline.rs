//! SVG output for text labels.

use sejahtera_ui::{RenderError, SvgPipeline, SvgWriter};

use super::command::{FontWeight, LabelCommand};

/// Writes [`LabelCommand`]s as centered SVG text.
#[derive(Debug, Default)]
pub struct LabelPipeline;

impl SvgPipeline<LabelCommand> for LabelPipeline {
    fn draw(&mut self, command: &LabelCommand, out: &mut SvgWriter) -> Result<(), RenderError> {
        let mut attributes = vec![
            ("x", SvgWriter::number(command.x)),
            ("y", SvgWriter::number(command.y)),
            ("font-size", SvgWriter::number(command.font_size)),
            ("text-anchor", "middle".to_string()),
            ("dominant-baseline", "central".to_string()),
            ("fill", command.color.to_hex_string()),
        ];
        if command.weight == FontWeight::Bold {
            attributes.push(("font-weight", "bold".to_string()));
        }
        if command.color.a < 1.0 {
            attributes.push(("fill-opacity", SvgWriter::number(command.color.a)));
        }
        out.text_element("text", &attributes, &command.text)
    }
}

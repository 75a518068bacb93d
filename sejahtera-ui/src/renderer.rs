//! SVG renderer for [`Scene`]s.
//!
//! The renderer owns a [`PipelineRegistry`]. Component crates register a
//! pipeline per draw command type; [`SvgRenderer::render`] walks the scene
//! layer by layer and lets each pipeline write its markup.
//!
//! ```
//! use sejahtera_ui::{ComputedData, Dp, Scene, renderer::SvgRenderer};
//!
//! let scene = Scene::new(ComputedData::square(Dp(24.0)));
//! let svg = SvgRenderer::new().render(&scene).unwrap();
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(r#"viewBox="0 0 24 24""#));
//! ```

mod command;
mod pipeline;

use std::fmt::Write as _;

use thiserror::Error;
use tracing::debug;

pub use command::DrawCommand;
pub use pipeline::{PipelineRegistry, SvgPipeline};

use crate::Scene;

/// Errors produced while rendering a scene.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A draw command had no pipeline registered for its type.
    #[error("no pipeline registered for draw command `{command}`")]
    NoPipeline {
        /// Type name of the command.
        command: &'static str,
    },
    /// Writing markup into the output buffer failed.
    #[error("failed to write svg markup")]
    Format(#[from] std::fmt::Error),
}

/// Markup sink handed to pipelines.
#[derive(Debug, Default)]
pub struct SvgWriter {
    buffer: String,
    depth: usize,
}

impl SvgWriter {
    /// Formats a number for an attribute value, dropping trailing zeros.
    pub fn number(value: f32) -> String {
        let formatted = format!("{value:.3}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        match trimmed {
            "" | "-0" => "0".to_string(),
            other => other.to_string(),
        }
    }

    /// Escapes text content and attribute values.
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                other => escaped.push(other),
            }
        }
        escaped
    }

    fn indent(&mut self) -> Result<(), RenderError> {
        for _ in 0..self.depth {
            self.buffer.write_str("  ")?;
        }
        Ok(())
    }

    fn write_attributes(&mut self, attributes: &[(&str, String)]) -> Result<(), RenderError> {
        for (name, value) in attributes {
            write!(self.buffer, r#" {name}="{}""#, Self::escape(value))?;
        }
        Ok(())
    }

    /// Writes a self-closing element.
    pub fn element(&mut self, name: &str, attributes: &[(&str, String)]) -> Result<(), RenderError> {
        self.indent()?;
        write!(self.buffer, "<{name}")?;
        self.write_attributes(attributes)?;
        self.buffer.write_str("/>\n")?;
        Ok(())
    }

    /// Writes an element with escaped text content.
    pub fn text_element(
        &mut self,
        name: &str,
        attributes: &[(&str, String)],
        text: &str,
    ) -> Result<(), RenderError> {
        self.indent()?;
        write!(self.buffer, "<{name}")?;
        self.write_attributes(attributes)?;
        writeln!(self.buffer, ">{}</{name}>", Self::escape(text))?;
        Ok(())
    }

    /// Opens an element; must be paired with [`close`](Self::close).
    pub fn open(&mut self, name: &str, attributes: &[(&str, String)]) -> Result<(), RenderError> {
        self.indent()?;
        write!(self.buffer, "<{name}")?;
        self.write_attributes(attributes)?;
        self.buffer.write_str(">\n")?;
        self.depth += 1;
        Ok(())
    }

    /// Closes an element opened with [`open`](Self::open).
    pub fn close(&mut self, name: &str) -> Result<(), RenderError> {
        self.depth = self.depth.saturating_sub(1);
        self.indent()?;
        writeln!(self.buffer, "</{name}>")?;
        Ok(())
    }

    /// Consumes the writer and returns the markup.
    pub fn finish(self) -> String {
        self.buffer
    }
}

/// Renders scenes to standalone SVG documents.
#[derive(Default)]
pub struct SvgRenderer {
    registry: PipelineRegistry,
}

impl SvgRenderer {
    /// Creates a renderer with no pipelines registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer and lets `register` install pipelines.
    pub fn with_pipelines(register: impl FnOnce(&mut PipelineRegistry)) -> Self {
        let mut renderer = Self::new();
        register(&mut renderer.registry);
        renderer
    }

    /// Renders `scene` into an SVG document.
    ///
    /// The document's `width`/`height` are physical pixels; the `viewBox`
    /// is in layout units, so commands draw in dp.
    pub fn render(&mut self, scene: &Scene) -> Result<String, RenderError> {
        let size = scene.size();
        let mut out = SvgWriter::default();
        out.open(
            "svg",
            &[
                ("xmlns", "http://www.w3.org/2000/svg".to_string()),
                ("width", SvgWriter::number(size.width.to_pixels_f32())),
                ("height", SvgWriter::number(size.height.to_pixels_f32())),
                (
                    "viewBox",
                    format!(
                        "0 0 {} {}",
                        SvgWriter::number(size.width.to_f32()),
                        SvgWriter::number(size.height.to_f32())
                    ),
                ),
            ],
        )?;
        if let Some(description) = scene.description() {
            out.text_element("title", &[], description)?;
        }

        for layer in scene.layers() {
            if layer.is_empty() {
                continue;
            }
            let attributes = match layer.rotation() {
                Some(rotation) => vec![(
                    "transform",
                    format!(
                        "rotate({} {} {})",
                        SvgWriter::number(rotation.degrees),
                        SvgWriter::number(rotation.origin_x),
                        SvgWriter::number(rotation.origin_y)
                    ),
                )],
                None => Vec::new(),
            };
            out.open("g", &attributes)?;
            for command in layer.commands() {
                self.registry.dispatch(command, &mut out)?;
            }
            out.close("g")?;
        }

        out.close("svg")?;
        debug!(layers = scene.layers().len(), "rendered scene to svg");
        Ok(out.finish())
    }
}

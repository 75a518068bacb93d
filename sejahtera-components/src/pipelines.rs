//! Draw commands emitted by components and the SVG pipelines that render them.

pub mod label;
pub mod progress_arc;

use sejahtera_ui::{PipelineRegistry, RenderError, Scene, SvgRenderer};

pub use label::{FontWeight, LabelCommand, LabelPipeline};
pub use progress_arc::{ArcDash, ProgressArcCap, ProgressArcCommand, ProgressArcPipeline};

/// Registers every pipeline this crate's components need.
pub fn register_pipelines(registry: &mut PipelineRegistry) {
    registry.register::<ProgressArcCommand, _>(ProgressArcPipeline);
    registry.register::<LabelCommand, _>(LabelPipeline);
}

/// Renders `scene` to an SVG document with this crate's pipelines.
pub fn render_svg(scene: &Scene) -> Result<String, RenderError> {
    SvgRenderer::with_pipelines(register_pipelines).render(scene)
}

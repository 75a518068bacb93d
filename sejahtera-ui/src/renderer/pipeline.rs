//! Pipeline registry dispatching draw commands to their SVG pipelines.

use std::marker::PhantomData;

use super::{DrawCommand, RenderError, SvgWriter};

/// Renders one draw command type into SVG markup.
///
/// # Example
///
/// ```
/// use sejahtera_ui::{
///     DrawCommand,
///     renderer::{RenderError, SvgPipeline, SvgWriter},
/// };
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct DotCommand {
///     radius: f32,
/// }
///
/// impl DrawCommand for DotCommand {}
///
/// struct DotPipeline;
///
/// impl SvgPipeline<DotCommand> for DotPipeline {
///     fn draw(&mut self, command: &DotCommand, out: &mut SvgWriter) -> Result<(), RenderError> {
///         out.element("circle", &[("r", SvgWriter::number(command.radius))])
///     }
/// }
/// ```
pub trait SvgPipeline<T: DrawCommand> {
    /// Writes the markup for a single command.
    fn draw(&mut self, command: &T, out: &mut SvgWriter) -> Result<(), RenderError>;
}

trait ErasedSvgPipeline {
    /// Returns `None` when the command is not of this pipeline's type.
    fn draw_erased(
        &mut self,
        command: &dyn DrawCommand,
        out: &mut SvgWriter,
    ) -> Option<Result<(), RenderError>>;
}

struct SvgPipelineImpl<T: DrawCommand, P: SvgPipeline<T>> {
    pipeline: P,
    _marker: PhantomData<T>,
}

impl<T: DrawCommand + 'static, P: SvgPipeline<T>> ErasedSvgPipeline for SvgPipelineImpl<T, P> {
    fn draw_erased(
        &mut self,
        command: &dyn DrawCommand,
        out: &mut SvgWriter,
    ) -> Option<Result<(), RenderError>> {
        command
            .as_any()
            .downcast_ref::<T>()
            .map(|command| self.pipeline.draw(command, out))
    }
}

/// Registry of SVG pipelines, keyed by the command type they handle.
///
/// Lookup is linear in registration order.
#[derive(Default)]
pub struct PipelineRegistry {
    pipelines: Vec<Box<dyn ErasedSvgPipeline>>,
}

impl PipelineRegistry {
    /// Registers a pipeline for commands of type `T`.
    pub fn register<T: DrawCommand + 'static, P: SvgPipeline<T> + 'static>(&mut self, pipeline: P) {
        self.pipelines.push(Box::new(SvgPipelineImpl::<T, P> {
            pipeline,
            _marker: PhantomData,
        }));
    }

    /// Dispatches `command` to the first pipeline that accepts its type.
    pub fn dispatch(
        &mut self,
        command: &dyn DrawCommand,
        out: &mut SvgWriter,
    ) -> Result<(), RenderError> {
        for pipeline in self.pipelines.iter_mut() {
            if let Some(result) = pipeline.draw_erased(command, out) {
                return result;
            }
        }
        Err(RenderError::NoPipeline {
            command: command.command_name(),
        })
    }
}

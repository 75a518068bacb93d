//! Draw command trait.
//!
//! Components describe what to draw by pushing draw commands into a
//! [`Scene`](crate::Scene); a pipeline registered for the command type turns
//! each command into output.

use std::fmt;

use crate::dyn_eq::DynPartialEqDraw;

/// Trait for drawing operations that can be processed by a pipeline.
///
/// # Example
///
/// ```
/// use sejahtera_ui::DrawCommand;
///
/// #[derive(Debug, PartialEq, Clone)]
/// struct DotCommand {
///     color: [f32; 4],
///     radius: f32,
/// }
///
/// impl DrawCommand for DotCommand {}
/// ```
pub trait DrawCommand: DynPartialEqDraw + fmt::Debug + Send + Sync {}

impl Clone for Box<dyn DrawCommand> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl PartialEq for Box<dyn DrawCommand> {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other.as_any())
    }
}

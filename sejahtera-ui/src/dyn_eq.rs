//! Object-safe clone and equality for draw commands.

use std::any::Any;

use crate::renderer::DrawCommand;

/// A trait that allows for cloning a trait object.
pub trait DynCloneDraw {
    /// Creates a boxed clone of the trait object.
    fn clone_box(&self) -> Box<dyn DrawCommand>;
}

impl<T> DynCloneDraw for T
where
    T: DrawCommand + Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn DrawCommand> {
        Box::new(self.clone())
    }
}

/// A trait that allows for dynamic equality testing of trait objects.
///
/// `PartialEq` is not object-safe, so commands are compared by downcasting
/// the other side to the concrete type of `self`.
pub trait DynPartialEqDraw: DynCloneDraw {
    /// Returns the object as a `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Performs a dynamic equality check against another command, given as
    /// `&dyn Any`.
    fn dyn_eq(&self, other: &dyn Any) -> bool;

    /// Name of the concrete command type, for diagnostics.
    fn command_name(&self) -> &'static str;
}

impl<T: DrawCommand + Clone + PartialEq + 'static> DynPartialEqDraw for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn command_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

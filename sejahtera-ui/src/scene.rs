//! Retained draw lists produced by components.
//!
//! A [`Scene`] is the output of one render pass: a fixed-size region and a
//! stack of [`Layer`]s, each holding draw commands that share a transform.

use smallvec::SmallVec;

use crate::{Dp, renderer::DrawCommand};

/// The measured size of a rendered region, in layout units.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ComputedData {
    /// Width of the region.
    pub width: Dp,
    /// Height of the region.
    pub height: Dp,
}

impl ComputedData {
    /// A square region with sides of `side`.
    pub const fn square(side: Dp) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// A rotation about a fixed origin, in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Angle in degrees; positive values rotate clockwise on screen.
    pub degrees: f32,
    /// Horizontal coordinate of the rotation origin.
    pub origin_x: f32,
    /// Vertical coordinate of the rotation origin.
    pub origin_y: f32,
}

impl Rotation {
    /// Rotation by `degrees` about `(origin_x, origin_y)`.
    pub const fn about(degrees: f32, origin_x: f32, origin_y: f32) -> Self {
        Self {
            degrees,
            origin_x,
            origin_y,
        }
    }
}

/// Draw commands sharing one transform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    rotation: Option<Rotation>,
    commands: SmallVec<[Box<dyn DrawCommand>; 2]>,
}

impl Layer {
    /// The transform applied to every command of the layer.
    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }

    /// Appends a draw command. Commands draw in push order.
    pub fn push_draw_command(&mut self, command: impl DrawCommand + 'static) -> &mut Self {
        self.commands.push(Box::new(command));
        self
    }

    /// Commands of this layer, in draw order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn DrawCommand> {
        self.commands.iter().map(|command| command.as_ref())
    }

    /// Number of commands in the layer.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the layer has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Output of a render pass.
///
/// The scene always reports its measured size, even when it draws nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    size: ComputedData,
    layers: Vec<Layer>,
    description: Option<String>,
}

impl Scene {
    /// Creates an empty scene occupying `size`.
    pub fn new(size: ComputedData) -> Self {
        Self {
            size,
            layers: Vec::new(),
            description: None,
        }
    }

    /// Measured size of the scene.
    pub fn size(&self) -> ComputedData {
        self.size
    }

    /// Opens a new untransformed layer on top of the existing ones.
    pub fn push_layer(&mut self) -> &mut Layer {
        self.layers.push(Layer::default());
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    /// Opens a new layer whose commands are drawn under `rotation`.
    pub fn push_rotated_layer(&mut self, rotation: Rotation) -> &mut Layer {
        let layer = self.push_layer();
        layer.rotation = Some(rotation);
        layer
    }

    /// Layers in draw order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Iterates every command of every layer, in draw order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn DrawCommand> {
        self.layers.iter().flat_map(|layer| layer.commands())
    }

    /// Downcasts and collects every command of type `T`.
    pub fn commands_of<T: DrawCommand + 'static>(&self) -> Vec<&T> {
        self.commands()
            .filter_map(|command| command.as_any().downcast_ref::<T>())
            .collect()
    }

    /// Returns true if no layer holds a command.
    pub fn is_blank(&self) -> bool {
        self.layers.iter().all(Layer::is_empty)
    }

    /// Sets the textual description exposed to assistive technology.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Textual description of what the scene shows, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Marker {
        id: u32,
        alpha: f32,
    }

    impl DrawCommand for Marker {}

    #[test]
    fn commands_keep_push_order_across_layers() {
        let mut scene = Scene::new(ComputedData::square(Dp(10.0)));
        scene
            .push_rotated_layer(Rotation::about(-90.0, 5.0, 5.0))
            .push_draw_command(Marker { id: 1, alpha: 1.0 })
            .push_draw_command(Marker { id: 2, alpha: 1.0 });
        scene.push_layer().push_draw_command(Marker { id: 3, alpha: 1.0 });

        let ids: Vec<u32> = scene.commands_of::<Marker>().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(scene.layers()[0].rotation().map(|r| r.degrees), Some(-90.0));
        assert_eq!(scene.layers()[1].rotation(), None);
    }

    #[test]
    fn blank_scene_still_has_size() {
        let mut scene = Scene::new(ComputedData::square(Dp(120.0)));
        scene.push_layer();
        assert!(scene.is_blank());
        assert_eq!(scene.size().width, Dp(120.0));
    }

    #[test]
    fn scenes_compare_by_command_value() {
        let build = |alpha| {
            let mut scene = Scene::new(ComputedData::square(Dp(4.0)));
            scene.push_layer().push_draw_command(Marker { id: 7, alpha });
            scene
        };
        assert_eq!(build(1.0), build(1.0).clone());
        assert_ne!(build(1.0), build(0.5));
    }
}

//! Arc strokes for circular progress indicators.
//!
//! ## Usage
//!
//! Push [`ProgressArcCommand`]s into a scene and register
//! [`ProgressArcPipeline`] with the renderer.

pub mod command;
pub mod pipeline;

pub use command::{ArcDash, ProgressArcCap, ProgressArcCommand};
pub use pipeline::ProgressArcPipeline;

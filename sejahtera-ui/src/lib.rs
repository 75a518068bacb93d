//! Core of the sejahtera planner UI.
//!
//! This crate holds the pieces every component builds on:
//!
//! - [`Color`] and [`Dp`] for describing appearance and layout,
//! - [`State`] handles for per-instance component state,
//! - the [`FrameClock`] that drives animations one display refresh at a time,
//! - [`Scene`]s of [`DrawCommand`]s and the [`SvgRenderer`] that turns them
//!   into SVG documents,
//! - [`logging::init_tracing`] for binaries.
//!
//! Components live in `sejahtera-components`.
//!
//! # Animating with the frame clock
//!
//! ```
//! use sejahtera_ui::{FrameClock, FrameNanosControl, State};
//!
//! let mut clock = FrameClock::new();
//! let value = State::new(0.0_f32);
//! let driver = value.clone();
//! clock.receive_frame_nanos(move |nanos| {
//!     let t = (nanos as f32 / 100_000_000.0).min(1.0);
//!     driver.set(t);
//!     if t < 1.0 {
//!         FrameNanosControl::Continue
//!     } else {
//!         FrameNanosControl::Stop
//!     }
//! });
//! clock.tick(50_000_000);
//! assert_eq!(value.get(), 0.5);
//! clock.tick(100_000_000);
//! assert!(!clock.has_pending());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod dp;
pub mod dyn_eq;
pub mod frame;
pub mod logging;
pub mod renderer;
pub mod scene;
pub mod state;

pub use crate::{
    color::Color,
    dp::Dp,
    frame::{FrameClock, FrameNanosControl},
    renderer::{DrawCommand, PipelineRegistry, RenderError, SvgPipeline, SvgRenderer, SvgWriter},
    scene::{ComputedData, Layer, Rotation, Scene},
    state::State,
};

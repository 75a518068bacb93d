//! Components for the sejahtera planner UI.
//!
//! # Usage
//!
//! First, register the pipelines provided by this crate with the renderer.
//!
//! ```
//! use sejahtera_ui::SvgRenderer;
//!
//! let renderer = SvgRenderer::with_pipelines(sejahtera_components::pipelines::register_pipelines);
//! ```
//!
//! Then render components into scenes and hand them to the renderer.
//!
//! # Example
//!
//! ```
//! use sejahtera_components::{
//!     pipelines::register_pipelines,
//!     progress_circle::{ProgressCircleArgs, progress_circle},
//!     theme::PlanTheme,
//! };
//! use sejahtera_ui::SvgRenderer;
//!
//! let args = ProgressCircleArgs::themed(&PlanTheme::dashboard())
//!     .progress(2.0 / 3.0)
//!     .show_label(true);
//! let svg = SvgRenderer::with_pipelines(register_pipelines)
//!     .render(&progress_circle(&args))
//!     .unwrap();
//! assert!(svg.contains(">67%</text>"));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod pipelines;
pub mod progress_circle;
pub mod theme;

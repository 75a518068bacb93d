//! Centered text labels.

pub mod command;
pub mod pipeline;

pub use command::{FontWeight, LabelCommand};
pub use pipeline::LabelPipeline;

//! Action plan screen of the sejahtera planner.

pub mod plan;
pub mod screen;

pub use plan::{ActionPlan, PlanTask};
pub use screen::{FrameSample, MAX_SIMULATION, PlanScreen, Retarget, simulate_transition};

//! The action plan screen: checklist plus progress circle.

use std::time::Duration;

use anyhow::Result;
use sejahtera_components::{
    pipelines::render_svg,
    progress_circle::{ProgressCircle, ProgressCircleArgs, TransitionPhase},
    theme::PlanTheme,
};
use sejahtera_ui::FrameClock;
use tracing::{debug, info, warn};

use crate::plan::ActionPlan;

/// Host of the progress circle. Owns the checklist and feeds its
/// completion ratio to the circle on every change.
pub struct PlanScreen {
    plan: ActionPlan,
    circle: ProgressCircle,
    clock: FrameClock,
}

impl PlanScreen {
    /// `labeled` selects the dashboard widget with the percentage label.
    pub fn new(plan: ActionPlan, labeled: bool) -> Self {
        let args = if labeled {
            ProgressCircleArgs::themed(&PlanTheme::dashboard()).show_label(true)
        } else {
            ProgressCircleArgs::default()
        };
        let circle = ProgressCircle::new(args.progress(plan.completion_ratio()));
        Self {
            plan,
            circle,
            clock: FrameClock::new(),
        }
    }

    pub fn plan(&self) -> &ActionPlan {
        &self.plan
    }

    pub fn circle(&self) -> &ProgressCircle {
        &self.circle
    }

    pub fn toggle(&mut self, id: &str) -> Result<()> {
        self.plan.toggle(id)?;
        self.circle
            .set_progress(self.plan.completion_ratio(), &mut self.clock);
        Ok(())
    }

    /// Runs one display frame.
    pub fn frame(&mut self, frame_nanos: u64) {
        self.clock.tick(frame_nanos);
    }

    pub fn is_animating(&self) -> bool {
        self.clock.has_pending()
    }

    pub fn render_svg(&self) -> Result<String> {
        Ok(render_svg(&self.circle.render())?)
    }
}

/// A mid-flight change of the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Retarget {
    pub at: Duration,
    pub to: f32,
}

/// One simulated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    pub elapsed: Duration,
    pub displayed: f32,
    pub target: f32,
    pub phase: TransitionPhase,
}

/// Longest stretch of time a simulation covers.
pub const MAX_SIMULATION: Duration = Duration::from_secs(60);

/// Drives a progress circle from `from` to `to` at `fps` frames per second
/// until it settles, optionally changing the target mid-flight.
///
/// Retargets later than [`MAX_SIMULATION`] are ignored, and no frame is
/// simulated past it.
pub fn simulate_transition(
    from: f32,
    to: f32,
    retarget: Option<Retarget>,
    fps: u32,
) -> Vec<FrameSample> {
    let frame = Duration::from_secs(1) / fps.max(1);
    let mut clock = FrameClock::new();
    let mut circle = ProgressCircle::new(ProgressCircleArgs::default().progress(from));
    let mut pending_retarget = retarget.filter(|retarget| {
        let in_range = retarget.at <= MAX_SIMULATION;
        if !in_range {
            warn!(at = ?retarget.at, "ignoring retarget past the simulated window");
        }
        in_range
    });
    circle.set_progress(to, &mut clock);
    info!(from, to, ?frame, "simulating progress transition");

    let mut samples = Vec::new();
    let mut elapsed = Duration::ZERO;
    loop {
        if let Some(retarget) = pending_retarget.filter(|r| elapsed >= r.at) {
            debug!(at = ?retarget.at, to = retarget.to, "retargeting mid-flight");
            circle.set_progress(retarget.to, &mut clock);
            pending_retarget = None;
        }
        clock.tick(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX));
        samples.push(FrameSample {
            elapsed,
            displayed: circle.displayed_progress(),
            target: circle.target(),
            phase: circle.phase(),
        });
        let idle = !clock.has_pending() && pending_retarget.is_none();
        if idle || elapsed >= MAX_SIMULATION {
            break;
        }
        elapsed += frame;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_a_task_animates_the_circle() {
        let mut screen = PlanScreen::new(ActionPlan::sample(), false);
        screen.toggle("1").unwrap();
        assert!(screen.is_animating());
        assert!((screen.circle().target() - 2.0 / 6.0).abs() < 1e-6);

        screen.frame(0);
        screen.frame(400_000_000);
        assert!(!screen.is_animating());
        assert_eq!(screen.circle().displayed_progress(), screen.circle().target());
    }

    #[test]
    fn labeled_screen_renders_percentage() {
        let screen = PlanScreen::new(ActionPlan::sample().with_completed(3), true);
        let svg = screen.render_svg().unwrap();
        assert!(svg.contains(">50%</text>"));
        assert!(svg.contains(">Completed</text>"));
    }

    #[test]
    fn simulation_ends_settled_at_target() {
        let samples = simulate_transition(0.0, 1.0, None, 60);
        let last = samples.last().unwrap();
        assert_eq!(last.displayed, 1.0);
        assert_eq!(last.phase, TransitionPhase::Settled);
        assert!(samples.len() >= 18);
    }

    #[test]
    fn simulated_retarget_never_resets() {
        let retarget = Retarget {
            at: Duration::from_millis(150),
            to: 0.8,
        };
        let samples = simulate_transition(0.0, 0.2, Some(retarget), 60);
        for pair in samples.windows(2) {
            assert!(pair[1].displayed >= pair[0].displayed);
        }
        assert_eq!(samples.last().unwrap().displayed, 0.8);
    }

    #[test]
    fn distant_retarget_is_ignored() {
        let retarget = Retarget {
            at: Duration::from_secs(3_600),
            to: 0.1,
        };
        let samples = simulate_transition(0.0, 1.0, Some(retarget), 60);
        assert_eq!(samples.len(), simulate_transition(0.0, 1.0, None, 60).len());
        assert_eq!(samples.last().unwrap().displayed, 1.0);
    }

    #[test]
    fn simulation_stops_at_the_window_edge() {
        let retarget = Retarget {
            at: MAX_SIMULATION,
            to: 0.5,
        };
        let samples = simulate_transition(0.0, 1.0, Some(retarget), 1);
        let last = samples.last().unwrap();
        assert!(last.elapsed <= MAX_SIMULATION + Duration::from_secs(1));
        assert_eq!(last.target, 0.5);
    }
}

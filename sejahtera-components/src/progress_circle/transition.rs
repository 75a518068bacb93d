//! Animated interpolation of the displayed progress.

use std::time::Duration;

use tracing::debug;

use super::geometry::clamp_fraction;
use crate::animation::{Easing, lerp};

/// Where a [`ProgressTransition`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// The displayed value equals the target.
    Settled,
    /// The displayed value is moving toward the target.
    Transitioning,
}

/// Drives the displayed progress toward the latest target.
///
/// The target changes immediately on [`retarget`](Self::retarget); only the
/// displayed [`value`](Self::value) lags behind, advanced once per frame by
/// [`advance`](Self::advance). A retarget while transitioning restarts the
/// curve from the current displayed value, anchored at the last frame, so
/// there is only ever one transition in flight and the next frame already
/// moves toward the new target.
///
/// ```
/// use std::time::Duration;
///
/// use sejahtera_components::{
///     animation::Easing,
///     progress_circle::{ProgressTransition, TransitionPhase},
/// };
///
/// let mut transition = ProgressTransition::new(0.0, Duration::from_millis(300), Easing::Linear);
/// transition.retarget(0.5);
/// assert_eq!(transition.target(), 0.5);
///
/// transition.advance(0); // first frame anchors the curve
/// transition.advance(150_000_000);
/// assert!((transition.value() - 0.25).abs() < 1e-6);
/// assert_eq!(transition.advance(300_000_000), TransitionPhase::Settled);
/// assert_eq!(transition.value(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTransition {
    value: f32,
    from: f32,
    target: f32,
    phase: TransitionPhase,
    started_at_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    duration: Duration,
    easing: Easing,
    frame_scheduled: bool,
}

impl ProgressTransition {
    /// Creates a settled transition showing `initial`.
    pub fn new(initial: f32, duration: Duration, easing: Easing) -> Self {
        let initial = clamp_fraction(initial);
        Self {
            value: initial,
            from: initial,
            target: initial,
            phase: TransitionPhase::Settled,
            started_at_nanos: None,
            last_frame_nanos: None,
            duration,
            easing,
            frame_scheduled: false,
        }
    }

    /// The displayed progress for the current frame.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The latest requested progress.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current phase.
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Returns true while the displayed value is still moving.
    pub fn is_animating(&self) -> bool {
        self.phase == TransitionPhase::Transitioning
    }

    /// Duration of a full transition.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Easing curve of the transition.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Changes the timing of later transitions. An in-flight transition keeps
    /// its anchor but uses the new timing from the next frame on.
    pub fn set_spec(&mut self, duration: Duration, easing: Easing) {
        self.duration = duration;
        self.easing = easing;
    }

    /// Moves the target to `target`, animating from the displayed value.
    ///
    /// Returns the phase after the change. With a zero duration, or when the
    /// displayed value already equals the new target, the transition settles
    /// immediately.
    pub fn retarget(&mut self, target: f32) -> TransitionPhase {
        let target = clamp_fraction(target);
        if target == self.target {
            return self.phase;
        }

        let interrupted = self.is_animating();
        debug!(
            from = self.value,
            to = target,
            interrupted,
            "retargeting progress transition"
        );
        self.target = target;
        if self.duration.is_zero() || self.value == target {
            self.snap_to(target);
        } else {
            self.from = self.value;
            // Only an interrupted transition has a recent frame to anchor on.
            self.started_at_nanos = if interrupted {
                self.last_frame_nanos
            } else {
                None
            };
            self.phase = TransitionPhase::Transitioning;
        }
        self.phase
    }

    /// Jumps to `fraction` without animating, cancelling any transition.
    pub fn snap_to(&mut self, fraction: f32) {
        let fraction = clamp_fraction(fraction);
        self.value = fraction;
        self.from = fraction;
        self.target = fraction;
        self.started_at_nanos = None;
        self.phase = TransitionPhase::Settled;
    }

    /// Advances the displayed value to the frame at `frame_nanos`.
    ///
    /// The first frame of a transition started from rest anchors the curve
    /// and shows the starting value.
    pub fn advance(&mut self, frame_nanos: u64) -> TransitionPhase {
        if self.phase == TransitionPhase::Settled {
            return self.phase;
        }
        self.last_frame_nanos = Some(frame_nanos);

        let started_at = *self.started_at_nanos.get_or_insert(frame_nanos);
        let elapsed = frame_nanos.saturating_sub(started_at);
        let duration = self.duration.as_nanos();
        let linear = if duration == 0 {
            1.0
        } else {
            (elapsed as f64 / duration as f64).min(1.0) as f32
        };

        if linear >= 1.0 {
            self.snap_to(self.target);
            debug!(value = self.value, "progress transition settled");
        } else {
            self.value = lerp(self.from, self.target, self.easing.transform(linear));
        }
        self.phase
    }

    pub(super) fn frame_scheduled(&self) -> bool {
        self.frame_scheduled
    }

    pub(super) fn set_frame_scheduled(&mut self, scheduled: bool) {
        self.frame_scheduled = scheduled;
    }
}

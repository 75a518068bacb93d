//! Easing curves for time-based transitions.

/// Maps linear time progress in `[0.0, 1.0]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic ease-in-out.
    #[default]
    CubicInOut,
    /// A CSS-style cubic Bézier timing curve through `(0, 0)`, `(x1, y1)`,
    /// `(x2, y2)` and `(1, 1)`.
    CubicBezier {
        /// First control point, x.
        x1: f32,
        /// First control point, y.
        y1: f32,
        /// Second control point, x.
        x2: f32,
        /// Second control point, y.
        y2: f32,
    },
}

impl Easing {
    /// The CSS `ease-in-out` timing function.
    pub const EASE_IN_OUT: Easing = Easing::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// Eases `progress`, clamped to `[0.0, 1.0]`.
    pub fn transform(self, progress: f32) -> f32 {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => cubic_in_out(t),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_easing(t, x1, y1, x2, y2),
        }
    }
}

fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn cubic_bezier(t: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    let u = 1.0 - t;
    (u * u * u * a) + (3.0 * u * u * t * b) + (3.0 * u * t * t * c) + (t * t * t * d)
}

fn cubic_bezier_easing(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut t = x;

    // bisect for the curve parameter whose x matches
    for _ in 0..16 {
        let mid = (lo + hi) * 0.5;
        if cubic_bezier(mid, 0.0, x1, x2, 1.0) < x {
            lo = mid;
        } else {
            hi = mid;
        }
        t = mid;
    }

    cubic_bezier(t, 0.0, y1, y2, 1.0).clamp(0.0, 1.0)
}

pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

//! Stroke geometry of a circular progress indicator.
//!
//! The indicator is a circle stroked twice: a full track, and a dashed arc
//! whose dash offset hides the unfinished part. Everything here is derived
//! from the progress fraction, the diameter and the stroke width.

use std::f32::consts::PI;

use sejahtera_ui::Dp;
use thiserror::Error;

/// Reasons a progress circle cannot be drawn.
///
/// Components recover from these by drawing no arcs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidGeometry {
    /// The diameter is zero, negative or not finite.
    #[error("progress circle size must be positive and finite, got {size}")]
    NonPositiveSize {
        /// The rejected diameter.
        size: f64,
    },
    /// The stroke width is zero, negative or not finite.
    #[error("progress circle stroke width must be positive and finite, got {stroke_width}")]
    NonPositiveStrokeWidth {
        /// The rejected stroke width.
        stroke_width: f64,
    },
    /// The stroke is at least as wide as the circle, leaving no radius.
    #[error("progress circle stroke width {stroke_width} must be smaller than its size {size}")]
    StrokeTooWide {
        /// The diameter.
        size: f64,
        /// The stroke width.
        stroke_width: f64,
    },
}

/// Clamps a progress fraction into `[0.0, 1.0]`. `NaN` becomes `0.0`.
pub fn clamp_fraction(fraction: f32) -> f32 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Whole-number percentage shown by the label, rounding halves up.
///
/// ```
/// use sejahtera_components::progress_circle::percent;
///
/// assert_eq!(percent(0.666), 67);
/// assert_eq!(percent(0.664), 66);
/// assert_eq!(percent(1.5), 100);
/// ```
pub fn percent(fraction: f32) -> u8 {
    (clamp_fraction(fraction) * 100.0).round().min(100.0) as u8
}

/// Arc parameters for one frame of a progress circle, in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressGeometry {
    /// The clamped progress fraction.
    pub fraction: f32,
    /// Radius of the stroke's center line: `(size - stroke_width) / 2`.
    pub radius: f32,
    /// Length of the stroke's center line: `2πr`.
    pub circumference: f32,
    /// Length of the hidden part of the progress dash:
    /// `circumference * (1 - fraction)`.
    pub dash_offset: f32,
    /// Coordinate of the circle center on both axes: `size / 2`.
    pub center: f32,
}

impl ProgressGeometry {
    /// Derives the arc parameters for `fraction` on a circle of diameter
    /// `size` stroked with `stroke_width`.
    ///
    /// `fraction` is clamped, never rejected.
    ///
    /// ```
    /// use sejahtera_components::progress_circle::ProgressGeometry;
    /// use sejahtera_ui::Dp;
    ///
    /// let geometry = ProgressGeometry::compute(0.25, Dp(120.0), Dp(12.0)).unwrap();
    /// assert_eq!(geometry.radius, 54.0);
    /// assert_eq!(geometry.center, 60.0);
    /// assert!((geometry.dash_offset - geometry.circumference * 0.75).abs() < 1e-3);
    /// ```
    pub fn compute(fraction: f32, size: Dp, stroke_width: Dp) -> Result<Self, InvalidGeometry> {
        if !size.0.is_finite() || size.0 <= 0.0 {
            return Err(InvalidGeometry::NonPositiveSize { size: size.0 });
        }
        if !stroke_width.0.is_finite() || stroke_width.0 <= 0.0 {
            return Err(InvalidGeometry::NonPositiveStrokeWidth {
                stroke_width: stroke_width.0,
            });
        }
        if stroke_width.0 >= size.0 {
            return Err(InvalidGeometry::StrokeTooWide {
                size: size.0,
                stroke_width: stroke_width.0,
            });
        }

        let radius = ((size.0 - stroke_width.0) / 2.0) as f32;
        let circumference = 2.0 * PI * radius;
        Ok(Self {
            fraction: 0.0,
            radius,
            circumference,
            dash_offset: circumference,
            center: size.to_f32() / 2.0,
        }
        .with_fraction(fraction))
    }

    /// Same circle, different progress.
    pub fn with_fraction(self, fraction: f32) -> Self {
        let fraction = clamp_fraction(fraction);
        let dash_offset = (self.circumference * (1.0 - fraction)).clamp(0.0, self.circumference);
        Self {
            fraction,
            dash_offset,
            ..self
        }
    }

    /// Length of the visible progress arc.
    pub fn visible_length(&self) -> f32 {
        self.circumference - self.dash_offset
    }

    /// Angle swept by the visible progress arc, in degrees.
    pub fn sweep_degrees(&self) -> f32 {
        self.fraction * 360.0
    }

    /// Whole-number percentage of this frame's progress.
    pub fn percent(&self) -> u8 {
        percent(self.fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_circle(fraction: f32) -> ProgressGeometry {
        ProgressGeometry::compute(fraction, Dp(120.0), Dp(12.0)).unwrap()
    }

    #[test]
    fn default_circle_dimensions() {
        let geometry = default_circle(0.5);
        assert_eq!(geometry.radius, 54.0);
        assert!((geometry.circumference - 339.29).abs() < 0.01);
        assert_eq!(geometry.center, 60.0);
    }

    #[test]
    fn dash_offset_tracks_fraction() {
        for step in 0..=20 {
            let fraction = step as f32 / 20.0;
            let geometry = default_circle(fraction);
            let expected = geometry.circumference * (1.0 - fraction);
            assert!((geometry.dash_offset - expected).abs() < 1e-3);
            assert!(geometry.dash_offset >= 0.0);
            assert!(geometry.dash_offset <= geometry.circumference);
        }
    }

    #[test]
    fn endpoints_are_exact() {
        let empty = default_circle(0.0);
        assert_eq!(empty.dash_offset, empty.circumference);
        assert_eq!(empty.visible_length(), 0.0);

        let full = default_circle(1.0);
        assert_eq!(full.dash_offset, 0.0);
        assert_eq!(full.sweep_degrees(), 360.0);
    }

    #[test]
    fn out_of_range_fractions_clamp() {
        assert_eq!(default_circle(-0.5), default_circle(0.0));
        assert_eq!(default_circle(1.5), default_circle(1.0));
        assert_eq!(default_circle(f32::NAN), default_circle(0.0));
    }

    #[test]
    fn label_rounding_is_half_up() {
        assert_eq!(percent(0.666), 67);
        assert_eq!(percent(0.664), 66);
        assert_eq!(percent(0.5), 50);
        assert_eq!(percent(0.125), 13);
        assert_eq!(percent(-3.0), 0);
        assert_eq!(default_circle(1.0).percent(), 100);
    }

    #[test]
    fn half_percent_fractions_round_up() {
        assert_eq!(percent(0.005), 1);
        assert_eq!(percent(0.015), 2);
        assert_eq!(percent(0.145), 15);
        assert_eq!(percent(0.995), 100);
    }

    #[test]
    fn stroke_wider_than_circle_is_invalid() {
        assert_eq!(
            ProgressGeometry::compute(0.5, Dp(10.0), Dp(20.0)),
            Err(InvalidGeometry::StrokeTooWide {
                size: 10.0,
                stroke_width: 20.0
            })
        );
        assert!(matches!(
            ProgressGeometry::compute(0.5, Dp(12.0), Dp(12.0)),
            Err(InvalidGeometry::StrokeTooWide { .. })
        ));
    }

    #[test]
    fn degenerate_dimensions_are_invalid() {
        assert!(matches!(
            ProgressGeometry::compute(0.5, Dp(0.0), Dp(1.0)),
            Err(InvalidGeometry::NonPositiveSize { .. })
        ));
        assert!(matches!(
            ProgressGeometry::compute(0.5, Dp(f64::INFINITY), Dp(1.0)),
            Err(InvalidGeometry::NonPositiveSize { .. })
        ));
        assert!(matches!(
            ProgressGeometry::compute(0.5, Dp(40.0), Dp(-2.0)),
            Err(InvalidGeometry::NonPositiveStrokeWidth { .. })
        ));
    }
}

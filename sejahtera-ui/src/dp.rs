//! # Density-Independent Pixels (Dp)
//!
//! Layout in sejahtera is expressed in density-independent pixels. A `Dp`
//! value keeps the same visual size across screens; the conversion to
//! physical pixels goes through the global [`SCALE_FACTOR`].
//!
//! ## Usage
//!
//! ```
//! use sejahtera_ui::Dp;
//!
//! let diameter = Dp(120.0);
//! assert_eq!(diameter.to_f32(), 120.0);
//! assert!(diameter.to_pixels_f32() > 0.0);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// The value is the number of physical pixels per dp. Unset means `1.0`.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global scale factor used by every `Dp` conversion.
///
/// Non-finite or non-positive factors are ignored.
pub fn set_scale_factor(scale_factor: f64) {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        tracing::warn!(scale_factor, "ignoring invalid scale factor");
        return;
    }
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = scale_factor;
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels (dp) for UI scaling.
///
/// `Dp` wraps a single `f64`. Arithmetic is done on the inner value:
///
/// ```
/// use sejahtera_ui::Dp;
///
/// let size = Dp(120.0);
/// let half = Dp(size.0 / 2.0);
/// assert_eq!(half, Dp(60.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// A dp value of zero.
    pub const ZERO: Dp = Dp(0.0);

    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to physical pixels as an `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Returns the raw dp value as `f32`, without applying the scale factor.
    ///
    /// Geometry is computed in layout units, so this is the conversion
    /// components use when building draw commands.
    pub fn to_f32(&self) -> f32 {
        self.0 as f32
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Dp(value as f64)
    }
}

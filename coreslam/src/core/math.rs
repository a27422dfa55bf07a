//! Mathematical primitives for CoreSLAM.
//!
//! Headings are carried in degrees throughout the crate, so the angle helpers
//! here work in degrees rather than radians.

/// Normalize an angle in degrees to (-180, 180].
///
/// # Example
/// ```
/// use coreslam::core::math::normalize_degrees;
///
/// assert!((normalize_degrees(540.0) - 180.0).abs() < 1e-9);
/// assert!((normalize_degrees(-190.0) - 170.0).abs() < 1e-9);
/// ```
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let mut a = angle % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a <= -180.0 {
        a += 360.0;
    }
    a
}

/// Shortest signed difference from `a` to `b`, in degrees.
///
/// Crossing the ±180° boundary takes the short way round.
#[inline]
pub fn angle_diff_degrees(a: f64, b: f64) -> f64 {
    normalize_degrees(b - a)
}

/// Round half up to the nearest integer pixel.
///
/// Matches `floor(v + 0.5)`, so -0.5 maps to 0 and 0.5 maps to 1. Values
/// beyond the `i32` range saturate.
#[inline]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

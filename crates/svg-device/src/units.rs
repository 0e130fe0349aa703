//! Device-to-user coordinate transform.

/// Device units (points) per user unit.
pub const POINTS_PER_UNIT: f64 = 72.0;

/// Convert a device-unit value (points) to user units.
///
/// The transform is uniform and stateless: no clamping, rounding, or
/// bounds checking. Non-finite input passes through unchanged and is left
/// to the document consumer to reject.
#[inline]
pub fn to_user_units(v: f64) -> f64 {
    v / POINTS_PER_UNIT
}

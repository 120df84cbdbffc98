//! Angle helpers.
//!
//! Dot products of unit vectors can drift slightly outside [-1, 1] from
//! rounding, which makes `acos` return NaN. Every conversion here clamps
//! first.

/// Angle in radians for a cosine (typically a unit-vector dot product).
pub fn radians_from_dot(dot: f32) -> f32 {
    dot.clamp(-1.0, 1.0).acos()
}

/// Angle in degrees for a cosine (typically a unit-vector dot product).
pub fn degrees_from_dot(dot: f32) -> f32 {
    to_degrees(radians_from_dot(dot))
}

#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}

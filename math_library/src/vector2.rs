/// Two-component vector used for 2D positions, directions and sizes.

use std::fmt;
use bytemuck::{Pod, Zeroable};
use crate::angle;

/// A 2D vector of `f32` components.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Length of the vector
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Unit-length copy of this vector, or `ZERO` if the magnitude is zero.
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Self::ZERO;
        }
        *self / magnitude
    }

    /// Normalize in place and return the result.
    pub fn normalize(&mut self) -> Self {
        *self = self.normalized();
        *self
    }

    /// Perpendicular vector, rotated a quarter turn clockwise: `(y, -x)`.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    #[inline]
    pub fn dot(lhs: Self, rhs: Self) -> f32 {
        lhs.x * rhs.x + lhs.y * rhs.y
    }

    /// Z component of the 3D cross product of `lhs` and `rhs`.
    ///
    /// Positive when `rhs` is counter-clockwise from `lhs`.
    #[inline]
    pub fn cross(lhs: Self, rhs: Self) -> f32 {
        lhs.x * rhs.y - lhs.y * rhs.x
    }

    /// Distance from `lhs` to `rhs`
    #[inline]
    pub fn distance(lhs: Self, rhs: Self) -> f32 {
        (rhs - lhs).magnitude()
    }

    /// Unsigned angle between two vectors, in radians.
    pub fn angle_between(lhs: Self, rhs: Self) -> f32 {
        angle::radians_from_dot(Self::dot(lhs.normalized(), rhs.normalized()))
    }

    /// Counter-clockwise angle from `lhs` to `rhs`, in radians (-PI, PI].
    pub fn signed_angle(lhs: Self, rhs: Self) -> f32 {
        Self::cross(lhs, rhs).atan2(Self::dot(lhs, rhs))
    }

    /// Component-wise clamp between `min` and `max`.
    pub fn clamp(&self, min: Self, max: Self) -> Self {
        Self::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }

    /// Component-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl_vector_ops!(Vector2 { x, y });

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
#[path = "vector2_tests.rs"]
mod tests;

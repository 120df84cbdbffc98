/// Three-component vector, also used as a homogeneous 2D point for `Matrix3`.

use std::fmt;
use bytemuck::{Pod, Zeroable};
use crate::angle;

/// A 3D vector of `f32` components.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
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

    #[inline]
    pub fn dot(lhs: Self, rhs: Self) -> f32 {
        lhs.x * rhs.x + lhs.y * rhs.y + lhs.z * rhs.z
    }

    #[inline]
    pub fn cross(lhs: Self, rhs: Self) -> Self {
        Self::new(
            lhs.y * rhs.z - lhs.z * rhs.y,
            lhs.z * rhs.x - lhs.x * rhs.z,
            lhs.x * rhs.y - lhs.y * rhs.x,
        )
    }

    #[inline]
    pub fn distance(lhs: Self, rhs: Self) -> f32 {
        (rhs - lhs).magnitude()
    }

    /// Unsigned angle between two vectors, in radians.
    pub fn angle_between(lhs: Self, rhs: Self) -> f32 {
        angle::radians_from_dot(Self::dot(lhs.normalized(), rhs.normalized()))
    }

    /// Drop the z component.
    #[inline]
    pub fn truncate(&self) -> crate::Vector2 {
        crate::Vector2::new(self.x, self.y)
    }

    pub fn approx_eq(&self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl_vector_ops!(Vector3 { x, y, z });

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<crate::Vector2> for Vector3 {
    /// Extend a 2D point with `z = 0`.
    fn from(v: crate::Vector2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
#[path = "vector3_tests.rs"]
mod tests;

/// Four-component vector, the homogeneous point/direction type for `Matrix4`.

use std::fmt;
use bytemuck::{Pod, Zeroable};
use crate::{angle, Vector3};

/// A 4D vector of `f32` components.
///
/// Points carry `w = 1`, directions `w = 0`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Homogeneous point (`w = 1`)
    #[inline]
    pub fn point(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z, 1.0)
    }

    /// Homogeneous direction (`w = 0`)
    #[inline]
    pub fn direction(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Self::ZERO;
        }
        *self / magnitude
    }

    pub fn normalize(&mut self) -> Self {
        *self = self.normalized();
        *self
    }

    #[inline]
    pub fn dot(lhs: Self, rhs: Self) -> f32 {
        lhs.x * rhs.x + lhs.y * rhs.y + lhs.z * rhs.z + lhs.w * rhs.w
    }

    /// Cross product of the xyz parts. The result is a direction (`w = 0`).
    pub fn cross(lhs: Self, rhs: Self) -> Self {
        Self::direction(Vector3::cross(lhs.truncate(), rhs.truncate()))
    }

    #[inline]
    pub fn distance(lhs: Self, rhs: Self) -> f32 {
        (rhs - lhs).magnitude()
    }

    pub fn angle_between(lhs: Self, rhs: Self) -> f32 {
        angle::radians_from_dot(Self::dot(lhs.normalized(), rhs.normalized()))
    }

    /// Drop the w component.
    #[inline]
    pub fn truncate(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn approx_eq(&self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
            && (self.w - other.w).abs() <= epsilon
    }
}

impl_vector_ops!(Vector4 { x, y, z, w });

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl From<glam::Vec4> for Vector4 {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for glam::Vec4 {
    fn from(v: Vector4) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(test)]
#[path = "vector4_tests.rs"]
mod tests;

/// 3x3 matrix for 2D homogeneous transforms.
///
/// Row-major storage: `mRC` is row R, column C. Vectors are columns, so a
/// transform is applied as `M * v` and `A * B` applies `B` first.

use std::ops::{Mul, MulAssign};
use bytemuck::{Pod, Zeroable};
use crate::{Vector2, Vector3};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Matrix3 {
    pub m00: f32, pub m01: f32, pub m02: f32,
    pub m10: f32, pub m11: f32, pub m12: f32,
    pub m20: f32, pub m21: f32, pub m22: f32,
}

impl Matrix3 {
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    );

    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self { m00, m01, m02, m10, m11, m12, m20, m21, m22 }
    }

    // ===== FACTORIES =====

    pub fn create_translation(x: f32, y: f32) -> Self {
        Self::new(
            1.0, 0.0, x,
            0.0, 1.0, y,
            0.0, 0.0, 1.0,
        )
    }

    /// Counter-clockwise rotation by `radians`.
    pub fn create_rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    pub fn create_scale(x: f32, y: f32) -> Self {
        Self::new(
            x, 0.0, 0.0,
            0.0, y, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    // ===== ACCESSORS =====

    /// Translation column as a 2D point.
    #[inline]
    pub fn translation(&self) -> Vector2 {
        Vector2::new(self.m02, self.m12)
    }

    /// First basis column (local +X in parent space).
    #[inline]
    pub fn x_axis(&self) -> Vector2 {
        Vector2::new(self.m00, self.m10)
    }

    /// Second basis column (local +Y in parent space).
    #[inline]
    pub fn y_axis(&self) -> Vector2 {
        Vector2::new(self.m01, self.m11)
    }

    pub fn row(&self, index: usize) -> Vector3 {
        match index {
            0 => Vector3::new(self.m00, self.m01, self.m02),
            1 => Vector3::new(self.m10, self.m11, self.m12),
            2 => Vector3::new(self.m20, self.m21, self.m22),
            _ => panic!("Matrix3 row index out of range: {}", index),
        }
    }

    pub fn column(&self, index: usize) -> Vector3 {
        match index {
            0 => Vector3::new(self.m00, self.m10, self.m20),
            1 => Vector3::new(self.m01, self.m11, self.m21),
            2 => Vector3::new(self.m02, self.m12, self.m22),
            _ => panic!("Matrix3 column index out of range: {}", index),
        }
    }

    // ===== TRANSFORMS =====

    /// Transform a point (`w = 1`, translation applies).
    pub fn transform_point(&self, point: Vector2) -> Vector2 {
        (*self * Vector3::new(point.x, point.y, 1.0)).truncate()
    }

    /// Transform a direction (`w = 0`, translation ignored).
    pub fn transform_vector(&self, vector: Vector2) -> Vector2 {
        (*self * Vector3::new(vector.x, vector.y, 0.0)).truncate()
    }

    // ===== ALGEBRA =====

    pub fn transpose(&self) -> Self {
        Self::new(
            self.m00, self.m10, self.m20,
            self.m01, self.m11, self.m21,
            self.m02, self.m12, self.m22,
        )
    }

    pub fn determinant(&self) -> f32 {
        self.m00 * (self.m11 * self.m22 - self.m12 * self.m21)
            - self.m01 * (self.m10 * self.m22 - self.m12 * self.m20)
            + self.m02 * (self.m10 * self.m21 - self.m11 * self.m20)
    }

    /// Inverse via the adjugate. Returns `None` for a singular matrix.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;

        Some(Self::new(
            (self.m11 * self.m22 - self.m12 * self.m21) * inv,
            (self.m02 * self.m21 - self.m01 * self.m22) * inv,
            (self.m01 * self.m12 - self.m02 * self.m11) * inv,
            (self.m12 * self.m20 - self.m10 * self.m22) * inv,
            (self.m00 * self.m22 - self.m02 * self.m20) * inv,
            (self.m02 * self.m10 - self.m00 * self.m12) * inv,
            (self.m10 * self.m21 - self.m11 * self.m20) * inv,
            (self.m01 * self.m20 - self.m00 * self.m21) * inv,
            (self.m00 * self.m11 - self.m01 * self.m10) * inv,
        ))
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_rows_array()
            .iter()
            .zip(other.to_rows_array().iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn to_rows_array(&self) -> [f32; 9] {
        [
            self.m00, self.m01, self.m02,
            self.m10, self.m11, self.m12,
            self.m20, self.m21, self.m22,
        ]
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let a = self;
        let b = rhs;
        Self::new(
            a.m00 * b.m00 + a.m01 * b.m10 + a.m02 * b.m20,
            a.m00 * b.m01 + a.m01 * b.m11 + a.m02 * b.m21,
            a.m00 * b.m02 + a.m01 * b.m12 + a.m02 * b.m22,

            a.m10 * b.m00 + a.m11 * b.m10 + a.m12 * b.m20,
            a.m10 * b.m01 + a.m11 * b.m11 + a.m12 * b.m21,
            a.m10 * b.m02 + a.m11 * b.m12 + a.m12 * b.m22,

            a.m20 * b.m00 + a.m21 * b.m10 + a.m22 * b.m20,
            a.m20 * b.m01 + a.m21 * b.m11 + a.m22 * b.m21,
            a.m20 * b.m02 + a.m21 * b.m12 + a.m22 * b.m22,
        )
    }
}

impl MulAssign for Matrix3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.m00 * v.x + self.m01 * v.y + self.m02 * v.z,
            self.m10 * v.x + self.m11 * v.y + self.m12 * v.z,
            self.m20 * v.x + self.m21 * v.y + self.m22 * v.z,
        )
    }
}

impl From<Matrix3> for glam::Mat3 {
    fn from(m: Matrix3) -> Self {
        glam::Mat3::from_cols_array(&m.transpose().to_rows_array())
    }
}

impl From<glam::Mat3> for Matrix3 {
    fn from(m: glam::Mat3) -> Self {
        // glam stores columns; read them back as rows, then transpose
        let c = m.to_cols_array();
        Matrix3::new(c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8]).transpose()
    }
}

#[cfg(test)]
#[path = "matrix3_tests.rs"]
mod tests;

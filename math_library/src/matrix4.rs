/// 4x4 matrix for 3D homogeneous transforms, views and projections.
///
/// Same conventions as `Matrix3`: row-major `mRC` fields, column vectors,
/// `A * B` applies `B` first. View and projection matrices are
/// right-handed with a [-1, 1] clip depth range (OpenGL convention, which
/// is what raylib-style surfaces expect).

use std::ops::{Mul, MulAssign};
use bytemuck::{Pod, Zeroable};
use crate::{Vector3, Vector4};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Matrix4 {
    pub m00: f32, pub m01: f32, pub m02: f32, pub m03: f32,
    pub m10: f32, pub m11: f32, pub m12: f32, pub m13: f32,
    pub m20: f32, pub m21: f32, pub m22: f32, pub m23: f32,
    pub m30: f32, pub m31: f32, pub m32: f32, pub m33: f32,
}

impl Matrix4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// `look_at` gives up below this squared sine (about 0.006 degrees)
    const PARALLEL_EPSILON: f32 = 1e-8;

    pub const fn from_rows(r: [[f32; 4]; 4]) -> Self {
        Self {
            m00: r[0][0], m01: r[0][1], m02: r[0][2], m03: r[0][3],
            m10: r[1][0], m11: r[1][1], m12: r[1][2], m13: r[1][3],
            m20: r[2][0], m21: r[2][1], m22: r[2][2], m23: r[2][3],
            m30: r[3][0], m31: r[3][1], m32: r[3][2], m33: r[3][3],
        }
    }

    pub const fn to_rows(&self) -> [[f32; 4]; 4] {
        [
            [self.m00, self.m01, self.m02, self.m03],
            [self.m10, self.m11, self.m12, self.m13],
            [self.m20, self.m21, self.m22, self.m23],
            [self.m30, self.m31, self.m32, self.m33],
        ]
    }

    // ===== FACTORIES =====

    pub fn create_translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn create_rotation_x(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn create_rotation_y(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn create_rotation_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn create_scale(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    ///
    /// Returns `None` when `eye == target`, when `up` is zero or when `up`
    /// is (nearly) parallel to the viewing direction, since no basis can
    /// be built in any of these cases.
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Option<Self> {
        let forward = (target - eye).normalized();
        let up = up.normalized();
        if forward == Vector3::ZERO || up == Vector3::ZERO {
            return None;
        }
        // Squared sine of the angle between the view direction and `up`
        let side = Vector3::cross(forward, up);
        if side.magnitude_squared() < Self::PARALLEL_EPSILON {
            return None;
        }
        let side = side.normalized();
        let up = Vector3::cross(side, forward);

        Some(Self::from_rows([
            [side.x, side.y, side.z, -Vector3::dot(side, eye)],
            [up.x, up.y, up.z, -Vector3::dot(up, eye)],
            [-forward.x, -forward.y, -forward.z, Vector3::dot(forward, eye)],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Right-handed perspective projection (`fovy` in radians).
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fovy * 0.5).tan();
        let range_inv = 1.0 / (near - far);
        Self::from_rows([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (far + near) * range_inv, 2.0 * far * near * range_inv],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Right-handed orthographic projection.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Self::from_rows([
            [2.0 / width, 0.0, 0.0, -(right + left) / width],
            [0.0, 2.0 / height, 0.0, -(top + bottom) / height],
            [0.0, 0.0, -2.0 / depth, -(far + near) / depth],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    // ===== ACCESSORS / TRANSFORMS =====

    #[inline]
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.m03, self.m13, self.m23)
    }

    /// Transform a point (`w = 1`). The result is not divided by `w`.
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        (*self * Vector4::point(point)).truncate()
    }

    /// Transform a direction (`w = 0`, translation ignored).
    pub fn transform_vector(&self, vector: Vector3) -> Vector3 {
        (*self * Vector4::direction(vector)).truncate()
    }

    // ===== ALGEBRA =====

    pub fn transpose(&self) -> Self {
        let r = self.to_rows();
        let mut t = [[0.0; 4]; 4];
        for (i, row) in r.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                t[j][i] = *value;
            }
        }
        Self::from_rows(t)
    }

    pub fn determinant(&self) -> f32 {
        let m = self.to_rows();
        let minor = |r0: usize, r1: usize, r2: usize, c0: usize, c1: usize, c2: usize| {
            m[r0][c0] * (m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1])
                - m[r0][c1] * (m[r1][c0] * m[r2][c2] - m[r1][c2] * m[r2][c0])
                + m[r0][c2] * (m[r1][c0] * m[r2][c1] - m[r1][c1] * m[r2][c0])
        };
        m[0][0] * minor(1, 2, 3, 1, 2, 3)
            - m[0][1] * minor(1, 2, 3, 0, 2, 3)
            + m[0][2] * minor(1, 2, 3, 0, 1, 3)
            - m[0][3] * minor(1, 2, 3, 0, 1, 2)
    }

    /// Inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Returns `None` for a singular matrix.
    pub fn inverse(&self) -> Option<Self> {
        let mut a = self.to_rows();
        let mut inv = Self::IDENTITY.to_rows();

        for col in 0..4 {
            let pivot = (col..4)
                .max_by(|&x, &y| a[x][col].abs().total_cmp(&a[y][col].abs()))
                .unwrap_or(col);
            if a[pivot][col] == 0.0 || !a[pivot][col].is_finite() {
                return None;
            }
            a.swap(col, pivot);
            inv.swap(col, pivot);

            let scale = 1.0 / a[col][col];
            for j in 0..4 {
                a[col][j] *= scale;
                inv[col][j] *= scale;
            }

            for row in 0..4 {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..4 {
                    a[row][j] -= factor * a[col][j];
                    inv[row][j] -= factor * inv[col][j];
                }
            }
        }

        Some(Self::from_rows(inv))
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_rows()
            .iter()
            .flatten()
            .zip(other.to_rows().iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let a = self.to_rows();
        let b = rhs.to_rows();
        let mut out = [[0.0; 4]; 4];
        for (i, out_row) in out.iter_mut().enumerate() {
            for (j, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| a[i][k] * b[k][j]).sum();
            }
        }
        Self::from_rows(out)
    }
}

impl MulAssign for Matrix4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        let row = |r: [f32; 4]| r[0] * v.x + r[1] * v.y + r[2] * v.z + r[3] * v.w;
        let m = self.to_rows();
        Vector4::new(row(m[0]), row(m[1]), row(m[2]), row(m[3]))
    }
}

impl From<Matrix4> for glam::Mat4 {
    fn from(m: Matrix4) -> Self {
        // Rows of the transpose are glam's columns
        glam::Mat4::from_cols_array_2d(&m.transpose().to_rows())
    }
}

impl From<glam::Mat4> for Matrix4 {
    fn from(m: glam::Mat4) -> Self {
        Matrix4::from_rows(m.to_cols_array_2d()).transpose()
    }
}

#[cfg(test)]
#[path = "matrix4_tests.rs"]
mod tests;

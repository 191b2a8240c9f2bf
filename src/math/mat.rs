//! # Transformation Matrices
//!
//! Row-major 4x4 matrix construction for affine transforms and camera
//! view/projection setup.
//!
//! ## Conventions
//!
//! Matrices are stored row-major (`m.e[row][col]`) and applied to column
//! vectors (`M * v`), so the product `A * B` applies `B` first. Projection
//! matrices target the OpenGL clip-space convention (`z_ndc` in `[-1, 1]`
//! after the w-divide).
//!
//! Because GPU APIs consume column-major uniforms, upload either the
//! [`Mat4::transpose`] of a matrix or pass the row-major layout flag of your
//! graphics API (`transpose = true` in `glUniformMatrix4fv` terms).

use std::ops::Mul;

use super::vec::{Vec3, Vec4};

/// A 4x4 float matrix, stored row-major.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4 {
    /// Matrix entries, indexed `e[row][col]`.
    pub e: [[f32; 4]; 4],
}

impl Mat4 {
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { e: rows }
    }

    pub const fn identity() -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Affine translation by `(tx, ty, tz)`.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, tx],
            [0.0, 1.0, 0.0, ty],
            [0.0, 0.0, 1.0, tz],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Affine scale by `(sx, sy, sz)`.
    pub const fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_rows([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation of `theta_degrees` about `axis`, via Rodrigues' formula.
    ///
    /// `axis` must be unit length; the expansion assumes `|axis| = 1` and
    /// produces a non-rotation matrix otherwise.
    ///
    /// Reference: Belongie, Serge. "Rodrigues' Rotation Formula."
    /// <http://mathworld.wolfram.com/RodriguesRotationFormula.html>
    pub fn rotation(theta_degrees: f32, axis: Vec3) -> Self {
        let rad = theta_degrees.to_radians();
        let cos_t = rad.cos();
        let sin_t = rad.sin();
        let (wx, wy, wz) = (axis.x, axis.y, axis.z);

        Self::from_rows([
            [
                cos_t + wx * wx * (1.0 - cos_t),
                wx * wy * (1.0 - cos_t) - wz * sin_t,
                wy * sin_t + wx * wz * (1.0 - cos_t),
                0.0,
            ],
            [
                wz * sin_t + wx * wy * (1.0 - cos_t),
                cos_t + wy * wy * (1.0 - cos_t),
                -wx * sin_t + wy * wz * (1.0 - cos_t),
                0.0,
            ],
            [
                -wy * sin_t + wx * wz * (1.0 - cos_t),
                wx * sin_t + wy * wz * (1.0 - cos_t),
                cos_t + wz * wz * (1.0 - cos_t),
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// World-to-camera view matrix for an eye at `eye` looking at the point
    /// `target` with the given `up` hint.
    ///
    /// Derives a right-handed orthonormal basis `{u, v, n}` from scratch on
    /// every call, so camera state that has drifted off-orthonormal still
    /// yields a consistent view. `target` is a point; callers holding a look
    /// *direction* must pass `eye + direction`.
    ///
    /// If `up` is parallel to `eye - target` the basis collapses and the
    /// result is singular; the call stays total but logs a warning.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let n = (eye - target).normalize();
        let u_raw = up.cross(n);
        if u_raw.length() == 0.0 {
            log::warn!(
                "degenerate view basis: up {:?} is parallel to the view direction, matrix is singular",
                up
            );
        }
        let u = u_raw.normalize();
        let v = n.cross(u).normalize();

        Self::from_rows([
            [u.x, u.y, u.z, -u.dot(eye)],
            [v.x, v.y, v.z, -v.dot(eye)],
            [n.x, n.y, n.z, -n.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Orthographic projection for the box `[l, r] x [b, t] x [n, f]`.
    pub fn orthographic(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> Self {
        Self::from_rows([
            [2.0 / (r - l), 0.0, 0.0, -(r + l) / (r - l)],
            [0.0, 2.0 / (t - b), 0.0, -(t + b) / (t - b)],
            [0.0, 0.0, -2.0 / (f - n), -(f + n) / (f - n)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Symmetric-frustum perspective projection.
    ///
    /// `fov_degrees` is the full field of view, `width`/`height` fix the
    /// aspect ratio, and `z_near`/`z_far` bound the view volume.
    pub fn perspective(fov_degrees: f32, width: f32, height: f32, z_near: f32, z_far: f32) -> Self {
        let aspect = width / height;
        let focal = fov_degrees.to_radians().tan();

        Self::from_rows([
            [focal / aspect, 0.0, 0.0, 0.0],
            [0.0, focal, 0.0, 0.0],
            [
                0.0,
                0.0,
                (z_far + z_near) / (z_near - z_far),
                (2.0 * z_far * z_near) / (z_near - z_far),
            ],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// General-frustum perspective projection, for asymmetric volumes.
    pub fn frustum(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> Self {
        Self::from_rows([
            [(2.0 * n) / (r - l), 0.0, (r + l) / (r - l), 0.0],
            [0.0, (2.0 * n) / (t - b), (t + b) / (t - b), 0.0],
            [0.0, 0.0, -(f + n) / (f - n), (-2.0 * f * n) / (f - n)],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut m = Self::identity();
        for row in 0..4 {
            for col in 0..4 {
                m.e[row][col] = self.e[col][row];
            }
        }
        m
    }

    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from(self.e[i])
    }

    /// The row-major entries as a nested array, e.g. for staging into a
    /// uniform struct. See the module docs for the transpose-at-upload rule.
    pub const fn to_array(&self) -> [[f32; 4]; 4] {
        self.e
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut m = Mat4::identity();
        for row in 0..4 {
            for col in 0..4 {
                m.e[row][col] = (0..4).map(|k| self.e[row][k] * rhs.e[k][col]).sum();
            }
        }
        m
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}

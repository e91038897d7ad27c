// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `Mat4` type and its rotation constructors.

use super::{Quaternion, Vec3, Vec4, EPSILON};
use std::ops::{Index, IndexMut, Mul};

/// A 4x4 row-major matrix, used for 3D affine transformations.
///
/// The convention is row-vector times matrix: `v' = v * M`, with translation
/// stored in the last row and homogeneous/perspective information in the last
/// column. This convention is fixed project-wide; every rotation formula in
/// this module is written for it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// The rows of the matrix. `rows[0]` is the first row, and so on.
    pub rows: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        rows: [Vec4::ZERO; 4],
    };

    /// Creates a new matrix from four row vectors.
    #[inline]
    pub fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Returns a column of the matrix as a `Vec4`.
    #[inline]
    pub fn get_col(&self, index: usize) -> Vec4 {
        Vec4 {
            x: self.rows[0].get(index),
            y: self.rows[1].get(index),
            z: self.rows[2].get(index),
            w: self.rows[3].get(index),
        }
    }

    /// Creates a translation matrix.
    ///
    /// # Arguments
    ///
    /// * `v`: The translation vector to apply.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self {
            rows: [
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
                Vec4::new(v.x, v.y, v.z, 1.0),
            ],
        }
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            rows: [
                Vec4::new(scale.x, 0.0, 0.0, 0.0),
                Vec4::new(0.0, scale.y, 0.0, 0.0),
                Vec4::new(0.0, 0.0, scale.z, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a right-handed rotation around the X-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            rows: [
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, c, s, 0.0),
                Vec4::new(0.0, -s, c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a right-handed rotation around the Y-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            rows: [
                Vec4::new(c, 0.0, -s, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(s, 0.0, c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a right-handed rotation around the Z-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            rows: [
                Vec4::new(c, s, 0.0, 0.0),
                Vec4::new(-s, c, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a rotation matrix from a normalized axis and an angle.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. Must be a unit vector; this function
    ///   does not re-normalize it.
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self::rodrigues(axis, angle.cos(), angle.sin())
    }

    /// Creates the minimal rotation matrix taking the direction `from` onto
    /// the direction `to`.
    ///
    /// Both inputs must be unit vectors; this function does not re-normalize
    /// or validate them. No inverse trigonometry is used: the dot product
    /// supplies the cosine and the cross product's length the sine, and the
    /// matrix is assembled directly from them.
    ///
    /// Degenerate pairs are resolved by fixed branches:
    /// - nearly parallel inputs yield the identity matrix;
    /// - nearly opposite inputs leave the axis undefined, so one is chosen
    ///   perpendicular to `from`: the trial axis is world-up, or world-right
    ///   when `from`'s y-component has the largest magnitude, and the result
    ///   is an exact half-turn about `cross(from, trial)`.
    pub fn rotation_between(from: Vec3, to: Vec3) -> Self {
        let mut cos_theta = from.dot(to);
        let cross = from.cross(to);
        let mut sin_theta = cross.length();

        if cos_theta >= 1.0 - EPSILON {
            return Self::IDENTITY;
        }

        let axis;
        if cos_theta <= -1.0 + EPSILON {
            // cross(from, to) vanishes here, so derive the axis from a trial
            // vector that cannot be collinear with `from`.
            let trial = if from.y.abs() > from.x.abs() && from.y.abs() > from.z.abs() {
                Vec3::X
            } else {
                Vec3::Y
            };
            axis = from.cross(trial).normalize();
            log::trace!("rotation_between: opposite directions, half-turn about {axis:?}");
            cos_theta = -1.0;
            sin_theta = 0.0;
        } else {
            axis = cross / sin_theta;
        }

        Self::rodrigues(axis, cos_theta, sin_theta)
    }

    /// Rodrigues rotation formula in the row-vector convention, assembled
    /// from a unit axis and the cosine/sine of the angle.
    fn rodrigues(axis: Vec3, c: f32, s: f32) -> Self {
        let t = 1.0 - c;
        let x = axis.x;
        let y = axis.y;
        let z = axis.z;

        Self {
            rows: [
                Vec4::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
                Vec4::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0),
                Vec4::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a rotation matrix from a quaternion.
    ///
    /// Valid only for a unit quaternion; the result is undefined otherwise.
    #[inline]
    pub fn from_quat(q: Quaternion) -> Self {
        let x = q.x;
        let y = q.y;
        let z = q.z;
        let w = q.w;
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;
        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self::from_rows(
            Vec4::new(1.0 - (yy + zz), xy + wz, xz - wy, 0.0),
            Vec4::new(xy - wz, 1.0 - (xx + zz), yz + wx, 0.0),
            Vec4::new(xz + wy, yz - wx, 1.0 - (xx + yy), 0.0),
            Vec4::W,
        )
    }

    /// Transforms a point by this matrix, with the homogeneous divide.
    ///
    /// `v` is treated as a homogeneous row vector with an implicit `w` of 1.
    /// After the product the resulting `w` is read from the last column and,
    /// when its magnitude exceeds the degenerate threshold, divided out.
    /// Otherwise the vector is returned un-divided. Pure rotations always
    /// produce `w = 1`, making the divide a no-op, but the general rule is
    /// what this function implements.
    #[inline]
    pub fn transform_point(&self, v: Vec3) -> Vec3 {
        let r = Vec4::from_vec3(v, 1.0) * *self;
        if r.w.abs() > EPSILON {
            r.truncate() / r.w
        } else {
            r.truncate()
        }
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(
            self.get_col(0),
            self.get_col(1),
            self.get_col(2),
            self.get_col(3),
        )
    }

    /// Computes the determinant of the matrix.
    ///
    /// A proper rotation has a determinant of +1; a reflection would have -1.
    pub fn determinant(&self) -> f32 {
        let r0 = self.rows[0];
        let r1 = self.rows[1];
        let r2 = self.rows[2];
        let r3 = self.rows[3];

        let m00 = r1.y * (r2.z * r3.w - r3.z * r2.w) - r2.y * (r1.z * r3.w - r3.z * r1.w)
            + r3.y * (r1.z * r2.w - r2.z * r1.w);
        let m01 = r0.y * (r2.z * r3.w - r3.z * r2.w) - r2.y * (r0.z * r3.w - r3.z * r0.w)
            + r3.y * (r0.z * r2.w - r2.z * r0.w);
        let m02 = r0.y * (r1.z * r3.w - r3.z * r1.w) - r1.y * (r0.z * r3.w - r3.z * r0.w)
            + r3.y * (r0.z * r1.w - r1.z * r0.w);
        let m03 = r0.y * (r1.z * r2.w - r2.z * r1.w) - r1.y * (r0.z * r2.w - r2.z * r0.w)
            + r2.y * (r0.z * r1.w - r1.z * r0.w);

        r0.x * m00 - r1.x * m01 + r2.x * m02 - r3.x * m03
    }
}

// --- Operator Overloads ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`. Note that matrix
    /// multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result_rows = [Vec4::ZERO; 4];
        for (r_idx, target_row) in result_rows.iter_mut().enumerate() {
            let row = self.rows[r_idx];
            *target_row = Vec4 {
                x: row.dot(rhs.get_col(0)),
                y: row.dot(rhs.get_col(1)),
                z: row.dot(rhs.get_col(2)),
                w: row.dot(rhs.get_col(3)),
            };
        }
        Mat4 { rows: result_rows }
    }
}

impl Mul<Mat4> for Vec4 {
    type Output = Vec4;
    /// The raw row-vector product `v * M`, with no homogeneous divide.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        rhs.rows[0] * self.x + rhs.rows[1] * self.y + rhs.rows[2] * self.z + rhs.rows[3] * self.w
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    /// Allows accessing a matrix row by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Mat4 {
    /// Allows mutably accessing a matrix row by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, approx_eq_eps, Quaternion, FRAC_PI_2, PI, TOLERANCE};
    use approx::assert_relative_eq;

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn vec4_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn mat4_approx_eq(a: Mat4, b: Mat4) -> bool {
        vec4_approx_eq(a.rows[0], b.rows[0])
            && vec4_approx_eq(a.rows[1], b.rows[1])
            && vec4_approx_eq(a.rows[2], b.rows[2])
            && vec4_approx_eq(a.rows[3], b.rows[3])
    }

    #[test]
    fn test_identity_default() {
        assert_eq!(Mat4::default(), Mat4::IDENTITY);

        let m = Mat4::from_rotation_y(0.7);
        assert!(mat4_approx_eq(m * Mat4::IDENTITY, m));
        assert!(mat4_approx_eq(Mat4::IDENTITY * m, m));
    }

    #[test]
    fn test_from_rows_and_get_col() {
        let m = Mat4::from_rows(
            Vec4::new(1.0, 2.0, 3.0, 4.0),
            Vec4::new(5.0, 6.0, 7.0, 8.0),
            Vec4::new(9.0, 10.0, 11.0, 12.0),
            Vec4::new(13.0, 14.0, 15.0, 16.0),
        );
        assert_eq!(m.get_col(0), Vec4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(m.get_col(3), Vec4::new(4.0, 8.0, 12.0, 16.0));
        assert_eq!(m[1], Vec4::new(5.0, 6.0, 7.0, 8.0));

        let mut m = m;
        m[3] = Vec4::W;
        assert_eq!(m.get_col(3), Vec4::new(4.0, 8.0, 12.0, 1.0));
    }

    #[test]
    fn test_transpose() {
        let m = Mat4::from_rows(
            Vec4::new(1.0, 2.0, 3.0, 4.0),
            Vec4::new(5.0, 6.0, 7.0, 8.0),
            Vec4::new(9.0, 10.0, 11.0, 12.0),
            Vec4::new(13.0, 14.0, 15.0, 16.0),
        );
        let mt = m.transpose();
        assert_eq!(mt.rows[0], Vec4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(mt.rows[3], Vec4::new(4.0, 8.0, 12.0, 16.0));
        assert_eq!(mt.transpose(), m);
    }

    #[test]
    fn test_determinant() {
        assert!(approx_eq(Mat4::IDENTITY.determinant(), 1.0));
        assert!(approx_eq(Mat4::ZERO.determinant(), 0.0));

        let m_scale = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert!(approx_eq(m_scale.determinant(), 24.0));

        // Rotations preserve volume and orientation.
        let m_rot = Mat4::from_rotation_y(PI / 5.0);
        assert!(approx_eq(m_rot.determinant(), 1.0));
    }

    #[test]
    fn test_single_axis_rotations() {
        let angle = PI / 6.0;
        let c = angle.cos();
        let s = angle.sin();

        let mx = Mat4::from_rotation_x(angle);
        assert!(vec3_approx_eq(
            mx.transform_point(Vec3::Y),
            Vec3::new(0.0, c, s)
        ));

        let my = Mat4::from_rotation_y(angle);
        assert!(vec3_approx_eq(
            my.transform_point(Vec3::Z),
            Vec3::new(s, 0.0, c)
        ));

        let mz = Mat4::from_rotation_z(angle);
        assert!(vec3_approx_eq(
            mz.transform_point(Vec3::X),
            Vec3::new(c, s, 0.0)
        ));
    }

    #[test]
    fn test_from_axis_angle_matches_single_axis() {
        let angle = 0.85;
        assert!(mat4_approx_eq(
            Mat4::from_axis_angle(Vec3::X, angle),
            Mat4::from_rotation_x(angle)
        ));
        assert!(mat4_approx_eq(
            Mat4::from_axis_angle(Vec3::Y, angle),
            Mat4::from_rotation_y(angle)
        ));
        assert!(mat4_approx_eq(
            Mat4::from_axis_angle(Vec3::Z, angle),
            Mat4::from_rotation_z(angle)
        ));
    }

    #[test]
    fn test_from_axis_angle_preserves_length() {
        let axis = Vec3::new(1.0, 1.0, 1.0).normalize();
        let m = Mat4::from_axis_angle(axis, 1.2 * PI);
        let v = Vec3::new(0.3, -0.8, 0.5);
        let rotated = m.transform_point(v);
        assert_relative_eq!(rotated.length(), v.length(), epsilon = TOLERANCE);
        // The axis itself is the fixed line of the rotation.
        assert!(vec3_approx_eq(m.transform_point(axis), axis));
    }

    #[test]
    fn test_multiplication_composes_left_to_right() {
        // Row-vector convention: v * (A * B) applies A first, then B.
        let a = Mat4::from_rotation_z(FRAC_PI_2);
        let b = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let v = Vec3::X;

        let step_by_step = b.transform_point(a.transform_point(v));
        let combined = (a * b).transform_point(v);
        assert!(vec3_approx_eq(step_by_step, combined));
        assert!(vec3_approx_eq(combined, Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_multiplication_not_commutative() {
        let a = Mat4::from_rotation_x(0.4);
        let b = Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0));
        assert!(!mat4_approx_eq(a * b, b * a));
    }

    #[test]
    fn test_transform_point_translation() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let v = Vec3::new(1.0, 1.0, 1.0);
        assert!(vec3_approx_eq(m.transform_point(v), Vec3::new(2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_transform_point_homogeneous_divide() {
        // Last column produces w = x + 1, forcing a real divide.
        let m = Mat4::from_rows(
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        );
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec3_approx_eq(
            m.transform_point(v),
            Vec3::new(0.5, 1.0, 1.5)
        ));
    }

    #[test]
    fn test_transform_point_degenerate_w() {
        // w comes out exactly 0: the vector is left un-divided.
        let m = Mat4::from_rows(Vec4::X, Vec4::Y, Vec4::Z, Vec4::ZERO);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec3_approx_eq(m.transform_point(v), v));
    }

    #[test]
    fn test_from_quat_matches_axis_angle() {
        let axis = Vec3::new(1.0, 0.7, 0.5).normalize();
        let angle = 0.3;
        let m_quat = Mat4::from_quat(Quaternion::from_axis_angle(axis, angle));
        let m_direct = Mat4::from_axis_angle(axis, angle);
        assert!(mat4_approx_eq(m_quat, m_direct));

        let axis = Vec3::new(-2.0, 1.0, 4.0).normalize();
        let angle = 2.4;
        let m_quat = Mat4::from_quat(Quaternion::from_axis_angle(axis, angle));
        let m_direct = Mat4::from_axis_angle(axis, angle);
        assert!(mat4_approx_eq(m_quat, m_direct));
    }

    #[test]
    fn test_rotation_between_identical() {
        for v in [Vec3::X, Vec3::Y, Vec3::new(1.0, 0.7, 0.5).normalize()] {
            assert_eq!(Mat4::rotation_between(v, v), Mat4::IDENTITY);
        }
    }

    #[test]
    fn test_rotation_between_nearly_identical() {
        let from = Vec3::X;
        let to = Vec3::new(1.0, 5.0e-5, 0.0).normalize();
        let m = Mat4::rotation_between(from, to);
        assert!(vec3_approx_eq(m.transform_point(from), to));
    }

    #[test]
    fn test_rotation_between_opposite_axes() {
        // X and Z have their largest component off the y-axis, so the trial
        // axis is world-up; Y takes the world-right branch.
        for v in [Vec3::X, Vec3::Y, Vec3::Z] {
            let m = Mat4::rotation_between(v, -v);
            assert!(vec3_approx_eq(m.transform_point(v), -v));
            assert_relative_eq!(m.determinant(), 1.0, epsilon = TOLERANCE);
            // An exact half-turn applied twice is the identity.
            assert!(vec3_approx_eq(m.transform_point(m.transform_point(v)), v));
        }
    }

    #[test]
    fn test_rotation_between_opposite_oblique() {
        let from = Vec3::new(1.0, 0.7, 0.5).normalize();
        let to = -from;
        let m = Mat4::rotation_between(from, to);

        assert!(vec3_approx_eq(m.transform_point(from), to));
        assert_relative_eq!(m.determinant(), 1.0, epsilon = TOLERANCE);

        // A half-turn about an axis perpendicular to `from`: recover the axis
        // through the quaternion extraction and check the perpendicularity.
        let q = Quaternion::from_rotation_matrix(&m);
        let axis = Vec3::new(q.x, q.y, q.z).normalize();
        assert!(approx_eq_eps(axis.dot(from), 0.0, TOLERANCE));
        assert!(vec3_approx_eq(m.transform_point(m.transform_point(from)), from));
    }

    #[test]
    fn test_rotation_between_general() {
        let pairs = [
            (Vec3::X, Vec3::Y),
            (Vec3::Y, Vec3::Z),
            (
                Vec3::new(-0.6, 0.9, 0.2).normalize(),
                Vec3::new(0.4, 0.7, -0.5).normalize(),
            ),
            (
                Vec3::new(1.0, 0.7, 0.5).normalize(),
                Vec3::new(-0.2, 0.3, 0.9).normalize(),
            ),
        ];
        for (from, to) in pairs {
            let m = Mat4::rotation_between(from, to);
            assert!(vec3_approx_eq(m.transform_point(from), to));
            assert_relative_eq!(m.determinant(), 1.0, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn test_rotation_between_matches_axis_angle() {
        // The trig-free construction must agree with the angle-based one.
        let from = Vec3::new(0.2, -0.5, 0.9).normalize();
        let to = Vec3::new(0.8, 0.1, -0.3).normalize();
        let m = Mat4::rotation_between(from, to);

        let angle = from.dot(to).clamp(-1.0, 1.0).acos();
        let axis = from.cross(to).normalize();
        let m_ref = Mat4::from_axis_angle(axis, angle);
        assert!(mat4_approx_eq(m, m_ref));
    }
}

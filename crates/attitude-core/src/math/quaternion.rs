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

//! Provides a Quaternion type for representing 3D rotations.

use serde::{Deserialize, Serialize};

use super::{clamp, Mat4, Vec3, EPSILON, SIN_EPSILON};
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

/// Represents a quaternion for efficient 3D rotations.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the vector
/// part and `w` the scalar part. A *rotation* quaternion must be a unit
/// quaternion, `x² + y² + z² + w² = 1`, within floating tolerance; non-unit
/// quaternions may exist transiently (before normalization) but must never be
/// used to build a rotation matrix or rotate a vector.
///
/// `q` and `-q` represent the same rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
    /// The scalar (real) part.
    pub w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// The zero quaternion, the degenerate sentinel returned by
    /// [`normalize`](Self::normalize) and [`inverse`](Self::inverse) for
    /// near-zero input.
    ///
    /// Callers must treat it as a signal of invalid input, not a usable
    /// rotation.
    pub const ZERO: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating
    /// rotations, prefer `from_axis_angle`.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion representing a rotation around a given axis by a
    /// given angle.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. Must be a unit vector; this function
    ///   does not re-normalize it.
    /// * `angle_radians`: The angle of rotation in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        let half_angle = angle_radians * 0.5;
        let s = half_angle.sin();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half_angle.cos(),
        }
        .normalize()
    }

    /// Creates a quaternion from a 4x4 rotation matrix.
    ///
    /// Only the upper 3x3 part of the matrix is considered. The matrix must
    /// be a proper rotation in the crate's row-vector convention; the result
    /// is determined up to the usual `q`/`-q` sign ambiguity.
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        let m00 = m.rows[0].x;
        let m01 = m.rows[0].y;
        let m02 = m.rows[0].z;
        let m10 = m.rows[1].x;
        let m11 = m.rows[1].y;
        let m12 = m.rows[1].z;
        let m20 = m.rows[2].x;
        let m21 = m.rows[2].y;
        let m22 = m.rows[2].z;

        // Shepperd's method, picking the largest diagonal term to keep the
        // divisor well away from zero.
        let trace = m00 + m11 + m22;
        let mut q = Self::IDENTITY;

        if trace > 0.0 {
            let s = 2.0 * (trace + 1.0).sqrt();
            q.w = 0.25 * s;
            q.x = (m12 - m21) / s;
            q.y = (m20 - m02) / s;
            q.z = (m01 - m10) / s;
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            q.w = (m12 - m21) / s;
            q.x = 0.25 * s;
            q.y = (m01 + m10) / s;
            q.z = (m02 + m20) / s;
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            q.w = (m20 - m02) / s;
            q.x = (m01 + m10) / s;
            q.y = 0.25 * s;
            q.z = (m12 + m21) / s;
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            q.w = (m01 - m10) / s;
            q.x = (m02 + m20) / s;
            q.y = (m12 + m21) / s;
            q.z = 0.25 * s;
        }
        q.normalize()
    }

    /// Calculates the squared norm of the quaternion.
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Calculates the norm of the quaternion.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized version of the quaternion with a norm of 1.
    ///
    /// If the norm is below the degenerate threshold this returns
    /// [`Quaternion::ZERO`] rather than dividing by near-zero.
    pub fn normalize(&self) -> Self {
        let mag_sq = self.magnitude_squared();
        if mag_sq < EPSILON * EPSILON {
            log::trace!("normalize: near-zero quaternion, returning the zero sentinel");
            return Self::ZERO;
        }
        let inv_mag = 1.0 / mag_sq.sqrt();
        Self {
            x: self.x * inv_mag,
            y: self.y * inv_mag,
            z: self.z * inv_mag,
            w: self.w * inv_mag,
        }
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Computes the inverse of a general (possibly non-unit) quaternion,
    /// `conjugate(q) / ‖q‖²`.
    ///
    /// For a unit quaternion this equals the conjugate; no special case is
    /// needed for correctness. If the squared norm is below the degenerate
    /// threshold this returns [`Quaternion::ZERO`].
    #[inline]
    pub fn inverse(&self) -> Self {
        let mag_sq = self.magnitude_squared();
        if mag_sq < EPSILON {
            log::trace!("inverse: near-zero quaternion, returning the zero sentinel");
            return Self::ZERO;
        }
        self.conjugate() * (1.0 / mag_sq)
    }

    /// Computes the 4D dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Rotates a 3D vector by this quaternion via the sandwich product
    /// `q · (v, 0) · q⁻¹`, taking the vector part of the result.
    ///
    /// `self` must be a unit quaternion. The result agrees with transforming
    /// `v` by [`Mat4::from_quat`] within floating tolerance.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let p = Self::new(v.x, v.y, v.z, 0.0);
        let r = *self * p * self.inverse();
        Vec3::new(r.x, r.y, r.z)
    }

    /// Performs a spherical linear interpolation (slerp) between two
    /// quaternions.
    ///
    /// Interpolates at constant angular velocity along the shorter arc of the
    /// 4D unit hypersphere: when the inputs' dot product is negative, `end`
    /// is negated first (`q` and `-q` are the same rotation, and the long arc
    /// gives a different, usually undesired, path). Near-identical or exactly
    /// opposite inputs fall back to component-wise linear interpolation.
    ///
    /// * `t` - The interpolation factor, expected in `[0.0, 1.0]`.
    ///
    /// The result is **not** re-normalized; callers needing a strictly unit
    /// quaternion should normalize it afterward.
    pub fn slerp(start: Self, end: Self, t: f32) -> Self {
        let mut cos_theta = start.dot(end);
        let mut end_adjusted = end;
        if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            end_adjusted = -end;
        }

        let theta = clamp(cos_theta, -1.0, 1.0).acos();
        let sin_theta = theta.sin();

        if sin_theta < SIN_EPSILON {
            // Nearly identical (or exactly opposite after the flip): the
            // sin-weighted formula would divide by near-zero.
            return start + (end_adjusted - start) * t;
        }

        let scale_start = ((1.0 - t) * theta).sin() / sin_theta;
        let scale_end = (t * theta).sin() / sin_theta;
        (start * scale_start) + (end_adjusted * scale_end)
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    /// Note that quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Combines this rotation with another.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this (unit) quaternion.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.rotate_vec3(rhs)
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a rotation operation; it exists for interpolation.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components of the quaternion. `-q` represents the same
    /// rotation as `q`.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

// --- Tests ---

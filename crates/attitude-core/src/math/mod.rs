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

//! Provides the rotation math primitives: vectors, 4x4 matrices, quaternions,
//! and the constructors and conversions relating them.
//!
//! All operations are pure functions over `Copy` value types; nothing
//! allocates, blocks, or shares mutable state. Numerically degenerate
//! situations are handled by sentinel values and fixed branches (the
//! thresholds below), never by errors.
//!
//! All angular functions in this module operate in **radians** by default,
//! unless explicitly specified otherwise (e.g., `degrees_to_radians`).

// --- Fundamental Constants ---

/// The threshold below which a length, cosine extreme, or homogeneous `w`
/// is treated as degenerate.
///
/// This is the single canonical value used by every constructor in the crate;
/// call sites never re-derive their own.
pub const EPSILON: f32 = 1e-6;

/// The threshold on `sin(theta)` below which slerp falls back to linear
/// interpolation instead of dividing by near-zero.
pub const SIN_EPSILON: f32 = 1e-4;

/// The tolerance for approximate floating-point comparisons.
pub const TOLERANCE: f32 = 1e-4;

// Re-export standard mathematical constants for convenience.
pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI, SQRT_2, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod matrix;
pub mod quaternion;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::matrix::Mat4;
pub use self::quaternion::Quaternion;
pub use self::vector::{Vec3, Vec4};

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use attitude_core::math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use attitude_core::math::{radians_to_degrees, PI};
/// assert_eq!(radians_to_degrees(PI), 180.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Clamps a value to a specified minimum and maximum range.
///
/// Every acos-adjacent computation in the crate clamps its argument to
/// `[-1.0, 1.0]` first, absorbing floating round-off before it can become a
/// domain error.
///
/// # Examples
///
/// ```
/// use attitude_core::math::clamp;
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}

/// Performs an approximate equality comparison between two floats with a
/// custom tolerance.
///
/// # Examples
///
/// ```
/// use attitude_core::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default
/// [`TOLERANCE`].
///
/// # Examples
///
/// ```
/// use attitude_core::math::{approx_eq, TOLERANCE};
/// assert!(approx_eq(1.0, 1.0 + TOLERANCE / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + TOLERANCE * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, TOLERANCE)
}

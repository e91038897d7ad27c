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

//! # Attitude Core
//!
//! A small 3D rotation math library: vector algebra, 4x4 affine matrices,
//! quaternions, and the constructors and conversions that relate them —
//! building a rotation that maps one direction onto another, building a
//! rotation from an axis and angle, spherical interpolation between two
//! orientations, and converting between quaternion and matrix
//! representations.

#![warn(missing_docs)]

pub mod math;

pub use math::{Mat4, Quaternion, Vec3, Vec4};

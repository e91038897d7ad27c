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

// Attitude Showcase
// Main binary for exercising the rotation constructors and printing the
// resulting matrices and quaternions.

use anyhow::Result;
use attitude_core::math::{Mat4, Quaternion, Vec3, PI};
use log::info;

fn log_matrix(label: &str, m: &Mat4) {
    info!("{label}:");
    for row in &m.rows {
        info!("  {:9.3} {:9.3} {:9.3} {:9.3}", row.x, row.y, row.z, row.w);
    }
}

fn log_quaternion(label: &str, q: &Quaternion) {
    info!(
        "{label}: ({:7.4}, {:7.4}, {:7.4}, {:7.4})  |q| = {:.4}",
        q.x,
        q.y,
        q.z,
        q.w,
        q.magnitude()
    );
}

fn setup_logging() {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();
}

fn main() -> Result<()> {
    setup_logging();

    // Direction-to-direction rotations for a handful of representative pairs:
    // an exact axis reversal, an oblique reversal, and a general pair.
    let rotate0 = Mat4::rotation_between(
        Vec3::new(1.0, 0.0, 0.0).normalize(),
        Vec3::new(-1.0, 0.0, 0.0).normalize(),
    );

    let from0 = Vec3::new(1.0, 0.7, 0.5).normalize();
    let to0 = -from0;
    let rotate1 = Mat4::rotation_between(from0, to0);

    let from1 = Vec3::new(-0.6, 0.9, 0.2).normalize();
    let to1 = Vec3::new(0.4, 0.7, -0.5).normalize();
    let rotate2 = Mat4::rotation_between(from1, to1);

    log_matrix("rotateMatrix0", &rotate0);
    log_matrix("rotateMatrix1", &rotate1);
    log_matrix("rotateMatrix2", &rotate2);

    let mapped = rotate2.transform_point(from1);
    info!(
        "rotateMatrix2 maps ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
        from1.x, from1.y, from1.z, mapped.x, mapped.y, mapped.z
    );

    // Spherical interpolation between two axis-angle orientations.
    let q0 = Quaternion::from_axis_angle(Vec3::new(0.71, 0.71, 0.0).normalize(), 0.3);
    let q1 = Quaternion::from_axis_angle(Vec3::new(0.71, 0.0, 0.71).normalize(), PI);

    log_quaternion("q0", &q0);
    log_quaternion("q1", &q1);
    for i in 0..=4 {
        let t = i as f32 / 4.0;
        let q = Quaternion::slerp(q0, q1, t);
        log_quaternion(&format!("slerp t={t:.2}"), &q);
    }

    Ok(())
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Direction cosine matrices: 3 × 3 orthonormal matrices with
//! determinant 1.
//!
//! ```
//! use ndnum::rotations::dcm;
//! use approx::assert_abs_diff_eq;
//!
//! let m = dcm::euler_angles(0.2, -0.1, 1.3);
//! assert!(dcm::is_valid(&m));
//! assert_abs_diff_eq!(dcm::yaw(&m).unwrap(), 1.3, epsilon = 1e-12);
//! ```

use super::Quaternion;
use crate::error::NdResult;
use crate::linalg::det;
use crate::NdArray;

/// Rotation by `roll` about x, then `pitch` about y, then `yaw` about z.
pub fn euler_angles(roll: f64, pitch: f64, yaw: f64) -> NdArray<f64> {
    Quaternion::from_euler(roll, pitch, yaw).to_dcm()
}

/// Rotation by `angle` about `axis`.
///
/// **Errors** unless `axis` has three elements.
pub fn euler_axis_angle(axis: &NdArray<f64>, angle: f64) -> NdResult<NdArray<f64>> {
    Ok(Quaternion::from_axis_angle(axis, angle)?.to_dcm())
}

/// Whether `a` is a 3 × 3 matrix whose determinant, and the determinant of
/// its transpose, round to 1 at two decimals.
pub fn is_valid(a: &NdArray<f64>) -> bool {
    if a.dims() != [3, 3] {
        return false;
    }
    let round2 = |x: f64| (x * 100.).round() / 100.;
    match (det(a), det(&a.transpose())) {
        (Ok(d), Ok(dt)) => round2(d) == 1. && round2(dt) == 1.,
        _ => false,
    }
}

/// Roll angle of a direction cosine matrix.
pub fn roll(dcm: &NdArray<f64>) -> NdResult<f64> {
    Ok(Quaternion::from_dcm(dcm)?.roll())
}

/// Pitch angle of a direction cosine matrix.
pub fn pitch(dcm: &NdArray<f64>) -> NdResult<f64> {
    Ok(Quaternion::from_dcm(dcm)?.pitch())
}

/// Yaw angle of a direction cosine matrix.
pub fn yaw(dcm: &NdArray<f64>) -> NdResult<f64> {
    Ok(Quaternion::from_dcm(dcm)?.yaw())
}

pub fn x_rotation(angle: f64) -> NdArray<f64> {
    Quaternion::x_rotation(angle).to_dcm()
}

pub fn y_rotation(angle: f64) -> NdArray<f64> {
    Quaternion::y_rotation(angle).to_dcm()
}

pub fn z_rotation(angle: f64) -> NdArray<f64> {
    Quaternion::z_rotation(angle).to_dcm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn axis_rotations() {
        assert_abs_diff_eq!(
            z_rotation(FRAC_PI_2),
            nd![[0., -1., 0.], [1., 0., 0.], [0., 0., 1.]],
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            x_rotation(FRAC_PI_2),
            nd![[1., 0., 0.], [0., 0., -1.], [0., 1., 0.]],
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            y_rotation(FRAC_PI_2),
            nd![[0., 0., 1.], [0., 1., 0.], [-1., 0., 0.]],
            epsilon = 1e-15
        );
    }

    #[test]
    fn angles_and_validity() {
        let m = euler_angles(0.5, 0.25, -0.75);
        assert!(is_valid(&m));
        assert_abs_diff_eq!(roll(&m).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(pitch(&m).unwrap(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(yaw(&m).unwrap(), -0.75, epsilon = 1e-12);

        let by_axis = euler_axis_angle(&nd![0., 0., 1.], -0.75).unwrap();
        assert_abs_diff_eq!(by_axis, z_rotation(-0.75), epsilon = 1e-15);

        assert!(!is_valid(&nd![[2., 0., 0.], [0., 1., 0.], [0., 0., 1.]]));
        assert!(!is_valid(&nd![[1., 0.], [0., 1.]]));
        assert!(roll(&nd![[1., 0.], [0., 1.]]).is_err());
    }
}

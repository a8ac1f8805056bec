// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rotations in three dimensions.
//!
//! - [`Quaternion`]: unit quaternions `(i, j, k, s)`, with conversions to
//!   and from Euler angles (roll about x, pitch about y, yaw about z),
//!   axis/angle pairs and direction cosine matrices.
//! - [`dcm`]: the same constructors producing 3 × 3 direction cosine
//!   matrices.
//! - [`rodrigues_rotation`] rotates a vector about an axis.
//! - [`wahbas_problem`] finds the rotation that best maps one set of
//!   vectors onto another.
//!
//! All angles are in radians.

use num_traits::AsPrimitive;

use crate::error::{invalid_argument, NdResult};
use crate::{Element, NdArray};

pub use self::quaternion::Quaternion;
pub use self::wahba::wahbas_problem;

pub mod dcm;
mod quaternion;
mod wahba;

/// The three components of a cartesian vector.
pub(crate) fn vec3<A>(v: &NdArray<A>, what: &str) -> NdResult<[f64; 3]>
where
    A: Element + AsPrimitive<f64>,
{
    match *v.as_slice() {
        [x, y, z] => Ok([x.as_(), y.as_(), z.as_()]),
        _ => Err(invalid_argument(format!(
            "{} must be a cartesian vector of length 3, got {} elements",
            what,
            v.size()
        ))),
    }
}

pub(crate) fn norm3(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

pub(crate) fn cross3(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Rotate the vector `v` by the angle `theta` about the axis `k`, using
/// Rodrigues' formula
/// `v cos θ + (k × v) sin θ + k (k · v)(1 − cos θ)` with `k` normalised.
///
/// **Errors** unless `k` and `v` have three elements.
///
/// ```
/// use ndnum::rotations::rodrigues_rotation;
/// use ndnum::nd;
/// use approx::assert_abs_diff_eq;
/// use std::f64::consts::FRAC_PI_2;
///
/// let r = rodrigues_rotation(&nd![0., 0., 2.], FRAC_PI_2, &nd![1., 0., 0.]).unwrap();
/// assert_abs_diff_eq!(r, nd![0., 1., 0.], epsilon = 1e-15);
/// ```
pub fn rodrigues_rotation<A>(k: &NdArray<A>, theta: f64, v: &NdArray<A>) -> NdResult<NdArray<f64>>
where
    A: Element + AsPrimitive<f64>,
{
    let k = vec3(k, "axis")?;
    let v = vec3(v, "vector")?;
    let kn = norm3(k);
    let k = [k[0] / kn, k[1] / kn, k[2] / kn];
    let k_cross_v = cross3(k, v);
    let k_dot_v = k[0] * v[0] + k[1] * v[1] + k[2] * v[2];
    let (sin, cos) = theta.sin_cos();
    let out = (0..3)
        .map(|i| v[i] * cos + k_cross_v[i] * sin + k[i] * k_dot_v * (1. - cos))
        .collect();
    Ok(NdArray::from_vec(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rodrigues_matches_quaternion() {
        let k = nd![1., 2., -0.5];
        let v = nd![0.3, -1., 2.];
        let theta = 0.7;
        let r = rodrigues_rotation(&k, theta, &v).unwrap();
        let q = Quaternion::from_axis_angle(&k, theta).unwrap();
        assert_abs_diff_eq!(r, q.rotate(&v).unwrap(), epsilon = 1e-12);
        assert!(rodrigues_rotation(&nd![1., 0.], theta, &nd![1., 0.]).is_err());
    }

    #[test]
    fn vector_helpers() {
        assert_eq!(cross3([1., 0., 0.], [0., 1., 0.]), [0., 0., 1.]);
        assert_eq!(norm3([3., 4., 0.]), 5.);
        assert_eq!(vec3(&nd![1, 2, 3], "v").unwrap(), [1., 2., 3.]);
    }
}

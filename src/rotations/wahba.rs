// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use log::debug;
use num_traits::AsPrimitive;

use crate::error::{invalid_argument, NdResult};
use crate::linalg::{det, svd, Mat};
use crate::{Element, NdArray};

/// Solve Wahba's problem: the rotation `R` minimising
/// `Σ a_k |w_k − R v_k|²`.
///
/// `wk` and `vk` hold one cartesian vector per row (shape `[n, 3]`);
/// `ak` gives the `n` weights, all ones when `None`. The solution is
/// `U · diag(1, 1, det U · det V) · Vᵀ` from the SVD of
/// `B = Σ a_k w_k v_kᵀ`.
///
/// **Errors** if the vector sets are not `[n, 3]` with equal `n`, or the
/// weights do not have `n` elements.
///
/// ```
/// use ndnum::rotations::{dcm, wahbas_problem};
/// use ndnum::nd;
/// use approx::assert_abs_diff_eq;
///
/// let v = nd![[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]];
/// let r = dcm::z_rotation(0.3);
/// let w = v.dot(&r.transpose()).unwrap();
/// assert_abs_diff_eq!(wahbas_problem(&w, &v, None).unwrap(), r, epsilon = 1e-12);
/// ```
pub fn wahbas_problem<A>(
    wk: &NdArray<A>,
    vk: &NdArray<A>,
    ak: Option<&NdArray<A>>,
) -> NdResult<NdArray<f64>>
where
    A: Element + AsPrimitive<f64>,
{
    let shape = wk.dims();
    if shape.len() != 2 || shape[1] != 3 {
        return Err(invalid_argument(format!(
            "wk matrix must be of shape [n, 3], got {:?}",
            shape
        )));
    }
    if vk.dims() != shape {
        return Err(invalid_argument(format!(
            "vk matrix must have the same shape as wk {:?}, got {:?}",
            shape,
            vk.dims()
        )));
    }
    let n = shape[0];
    let weights: Vec<f64> = match ak {
        Some(ak) if ak.size() != n => {
            return Err(invalid_argument(format!(
                "ak must have {} weights, got {}",
                n,
                ak.size()
            )))
        }
        Some(ak) => ak.iter().map(|&a| a.as_()).collect(),
        None => vec![1.; n],
    };

    let w = Mat::from_array(wk)?;
    let v = Mat::from_array(vk)?;
    let mut b = Mat::zeros(3, 3);
    for (k, &a) in weights.iter().enumerate() {
        for r in 0..3 {
            for c in 0..3 {
                b[(r, c)] += a * w[(k, r)] * v[(k, c)];
            }
        }
    }

    let (u, _, vt) = svd(&b.into_array())?;
    let d = det(&u)? * det(&vt.transpose())?;
    debug!("wahba: {} vectors, det(U)·det(V) = {}", n, d);
    let mut m = Mat::eye(3);
    m[(2, 2)] = d;
    let u = Mat::from_array(&u)?;
    let vt = Mat::from_array(&vt)?;
    Ok(u.matmul(&m).matmul(&vt).into_array())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;
    use crate::rotations::{dcm, Quaternion};
    use approx::assert_abs_diff_eq;

    #[test]
    fn recovers_rotation_with_weights() {
        let q = Quaternion::from_euler(0.4, -0.2, 1.1);
        let r = q.to_dcm();
        let v = nd![[1., 0.5, 0.], [0., 1., 2.], [-1., 0., 1.], [0.3, -0.7, 0.2]];
        let w = v.dot(&r.transpose()).unwrap();
        let a = nd![1., 2., 0.5, 1.];
        let found = wahbas_problem(&w, &v, Some(&a)).unwrap();
        assert_abs_diff_eq!(found, r, epsilon = 1e-10);
        assert!(dcm::is_valid(&found));
    }

    #[test]
    fn shape_errors() {
        let v = nd![[1., 0., 0.], [0., 1., 0.]];
        assert!(wahbas_problem(&nd![[1., 0.], [0., 1.]], &v, None).is_err());
        assert!(wahbas_problem(&v, &nd![[1., 0., 0.]], None).is_err());
        assert!(wahbas_problem(&v, &v, Some(&nd![1.])).is_err());
    }
}

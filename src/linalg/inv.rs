// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use log::trace;
use num_traits::AsPrimitive;

use super::Mat;
use crate::error::{runtime_error, NdResult};
use crate::{Element, NdArray};

/// Inverse of a square matrix.
///
/// Gauss-Jordan elimination on the augmented `[A | I]` matrix, with
/// partial pivoting.
///
/// **Errors** if `a` is not square, and with a runtime error if it is
/// singular (a pivot vanishes relative to the largest element of `a`).
///
/// ```
/// use ndnum::linalg::inv;
/// use ndnum::nd;
///
/// assert_eq!(inv(&nd![[2, 0], [0, 4]]).unwrap(), nd![[0.5, 0.], [0., 0.25]]);
/// assert!(inv(&nd![[1., 2.], [2., 4.]]).unwrap_err().is_runtime());
/// ```
pub fn inv<A>(a: &NdArray<A>) -> NdResult<NdArray<f64>>
where
    A: Element + AsPrimitive<f64>,
{
    let src = Mat::square_from(a)?;
    let n = src.rows();
    let scale = max_abs(&src);

    let mut aug = Mat::zeros(n, 2 * n);
    for i in 0..n {
        for j in 0..n {
            aug[(i, j)] = src[(i, j)];
        }
        aug[(i, n + i)] = 1.;
    }

    for k in 0..n {
        let mut pk = k;
        for i in k + 1..n {
            if aug[(i, k)].abs() > aug[(pk, k)].abs() {
                pk = i;
            }
        }
        let pivot = aug[(pk, k)];
        if pivot.abs() <= f64::EPSILON * scale || !pivot.is_finite() {
            return Err(runtime_error(format!("matrix is singular, pivot {:e} in column {}", pivot, k)));
        }
        if pk != k {
            trace!("inv: swapping rows {} and {}", k, pk);
            aug.swap_rows(k, pk);
        }
        for j in 0..2 * n {
            aug[(k, j)] /= pivot;
        }
        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = aug[(i, k)];
            if factor != 0. {
                for j in 0..2 * n {
                    aug[(i, j)] -= factor * aug[(k, j)];
                }
            }
        }
    }

    let mut out = Mat::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            out[(i, j)] = aug[(i, n + j)];
        }
    }
    Ok(out.into_array())
}

fn max_abs(m: &Mat) -> f64 {
    (0..m.rows())
        .flat_map(|i| m.row(i).iter())
        .fold(0., |acc: f64, x| acc.max(x.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{eye, nd};
    use approx::assert_abs_diff_eq;

    #[test]
    fn inverse_times_matrix_is_identity() {
        let a = nd![[4., 7., 2.], [3., 6., 1.], [2., 5., 3.]];
        let ai = inv(&a).unwrap();
        assert_abs_diff_eq!(a.dot(&ai).unwrap(), eye(3), epsilon = 1e-12);
        assert_abs_diff_eq!(ai.dot(&a).unwrap(), eye(3), epsilon = 1e-12);
    }

    #[test]
    fn needs_pivoting() {
        let a = nd![[0., 1.], [1., 0.]];
        assert_eq!(inv(&a).unwrap(), a);
    }

    #[test]
    fn shape_errors() {
        assert!(inv(&nd![[1., 2., 3.]]).unwrap_err().is_invalid_argument());
        assert!(inv(&NdArray::<f64>::zeros((3, 3)).unwrap()).unwrap_err().is_runtime());
    }
}

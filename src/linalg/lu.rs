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

/// LU decomposition without pivoting, `A = L · U`.
///
/// `L` is unit lower triangular and `U` upper triangular (Doolittle).
///
/// **Errors** if `a` is not square, and with a runtime error if a zero
/// pivot is met; [`pivot_lu_decomposition`] handles those matrices.
///
/// ```
/// use ndnum::linalg::lu_decomposition;
/// use ndnum::nd;
///
/// let (l, u) = lu_decomposition(&nd![[4, 3], [6, 3]]).unwrap();
/// assert_eq!(l, nd![[1., 0.], [1.5, 1.]]);
/// assert_eq!(u, nd![[4., 3.], [0., -1.5]]);
/// ```
pub fn lu_decomposition<A>(a: &NdArray<A>) -> NdResult<(NdArray<f64>, NdArray<f64>)>
where
    A: Element + AsPrimitive<f64>,
{
    let mut u = Mat::square_from(a)?;
    let n = u.rows();
    let mut l = Mat::zeros(n, n);

    for col in 0..n {
        l[(col, col)] = 1.;
        for row in col + 1..n {
            let divisor = u[(col, col)];
            if divisor == 0. {
                return Err(runtime_error("Division by 0."));
            }
            l[(row, col)] = u[(row, col)] / divisor;
            u[(row, col)] = 0.;
            for col2 in col + 1..n {
                u[(row, col2)] -= l[(row, col)] * u[(col, col2)];
            }
        }
    }
    Ok((l.into_array(), u.into_array()))
}

/// LU decomposition with partial pivoting, `P · A = L · U`.
///
/// At every step the pivot row is the one whose candidate pivot is largest
/// relative to the rest of its row (scaled partial pivoting). Returns
/// `(L, U, P)` with `P` a permutation matrix.
///
/// **Errors** if `a` is not square, and with a runtime error if every
/// candidate pivot of a column is zero (the matrix is singular).
///
/// ```
/// use ndnum::linalg::pivot_lu_decomposition;
/// use ndnum::nd;
///
/// let a = nd![[0., 1.], [2., 3.]];
/// let (l, u, p) = pivot_lu_decomposition(&a).unwrap();
/// assert_eq!(p.dot(&a).unwrap(), l.dot(&u).unwrap());
/// ```
pub fn pivot_lu_decomposition<A>(
    a: &NdArray<A>,
) -> NdResult<(NdArray<f64>, NdArray<f64>, NdArray<f64>)>
where
    A: Element + AsPrimitive<f64>,
{
    let mut u = Mat::square_from(a)?;
    let n = u.rows();
    let mut l = Mat::zeros(n, n);
    let mut p = Mat::eye(n);

    for k in 0..n {
        let mut max = 0.;
        let mut pk = k;
        for i in k..n {
            let s: f64 = u.row(i)[k..].iter().map(|x| x.abs()).sum();
            let q = u[(i, k)].abs() / s;
            if q > max {
                max = q;
                pk = i;
            }
        }
        if max == 0. {
            return Err(runtime_error("Division by 0."));
        }
        if pk != k {
            trace!("pivot lu: swapping rows {} and {}", k, pk);
            p.swap_rows(k, pk);
            l.swap_rows(k, pk);
            u.swap_rows(k, pk);
        }
        for i in k + 1..n {
            l[(i, k)] = u[(i, k)] / u[(k, k)];
            u[(i, k)] = 0.;
            for j in k + 1..n {
                u[(i, j)] -= l[(i, k)] * u[(k, j)];
            }
        }
    }
    for k in 0..n {
        l[(k, k)] = 1.;
    }
    Ok((l.into_array(), u.into_array(), p.into_array()))
}

/// Cholesky decomposition `A = L · Lᵀ` of a symmetric positive definite
/// matrix. Only the lower triangle of `a` is read.
///
/// **Errors** if `a` is not square, and with a runtime error ("Matrix is
/// not positive definite") at the first diagonal pivot that is not
/// positive.
///
/// ```
/// use ndnum::linalg::cholesky;
/// use ndnum::nd;
///
/// let l = cholesky(&nd![[4., 2.], [2., 5.]]).unwrap();
/// assert_eq!(l, nd![[2., 0.], [1., 2.]]);
/// assert!(cholesky(&nd![[1., 2.], [2., 1.]]).unwrap_err().is_runtime());
/// ```
pub fn cholesky<A>(a: &NdArray<A>) -> NdResult<NdArray<f64>>
where
    A: Element + AsPrimitive<f64>,
{
    let mut l = Mat::square_from(a)?;
    let n = l.rows();
    for i in 0..n {
        for j in i + 1..n {
            l[(i, j)] = 0.;
        }
    }

    for k in 0..n {
        let a_kk = l[(k, k)];
        if a_kk.is_nan() || a_kk <= 0. {
            return Err(runtime_error("Matrix is not positive definite."));
        }
        l[(k, k)] = a_kk.sqrt();
        for i in k + 1..n {
            l[(i, k)] /= l[(k, k)];
            for j in k + 1..=i {
                l[(i, j)] -= l[(i, k)] * l[(j, k)];
            }
        }
    }
    Ok(l.into_array())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;
    use approx::assert_abs_diff_eq;

    #[test]
    fn lu_reconstructs() {
        let a = nd![[2., -1., 0.], [-1., 2., -1.], [0., -1., 2.]];
        let (l, u) = lu_decomposition(&a).unwrap();
        assert_abs_diff_eq!(l.dot(&u).unwrap(), a, epsilon = 1e-12);
        assert_eq!(crate::triu(&u, 0), u);
        assert_eq!(crate::tril(&l, 0), l);
    }

    #[test]
    fn upper_factor_is_exactly_triangular() {
        let a = nd![[2., -1., 0.3], [0.7, 5., 1.1], [-3., 0.2, 4.]];
        let (_, u) = lu_decomposition(&a).unwrap();
        let (_, pu, _) = pivot_lu_decomposition(&a).unwrap();
        for i in 0..3 {
            for j in 0..i {
                assert_eq!(u[[i, j]], 0.);
                assert_eq!(pu[[i, j]], 0.);
            }
        }
    }

    #[test]
    fn lu_zero_pivot() {
        let err = lu_decomposition(&nd![[0., 1.], [1., 0.]]).unwrap_err();
        assert!(err.is_runtime());
        assert_eq!(err.message(), "Division by 0.");
        assert!(lu_decomposition(&nd![[1., 2.]]).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn pivot_lu_reconstructs() {
        let a = nd![[1., 2., 3.], [4., 5., 6.], [7., 8., 10.]];
        let (l, u, p) = pivot_lu_decomposition(&a).unwrap();
        let lu = l.dot(&u).unwrap();
        assert_abs_diff_eq!(p.transpose().dot(&lu).unwrap(), a, epsilon = 1e-12);
        for k in 0..3 {
            assert_eq!(l[[k, k]], 1.);
        }
    }

    #[test]
    fn pivot_lu_singular() {
        let err = pivot_lu_decomposition(&nd![[1., 2.], [0., 0.]]).unwrap_err();
        assert!(err.is_runtime());
    }

    #[test]
    fn cholesky_reconstructs() {
        let a = nd![[4., 12., -16.], [12., 37., -43.], [-16., -43., 98.]];
        let l = cholesky(&a).unwrap();
        assert_eq!(l, nd![[2., 0., 0.], [6., 1., 0.], [-8., 5., 3.]]);
        assert_abs_diff_eq!(l.dot(&l.transpose()).unwrap(), a, epsilon = 1e-12);
        assert!(cholesky(&nd![[1., 0.], [0., -1.]]).unwrap_err().is_runtime());
    }
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::any::TypeId;
use std::ops::Neg;

use num_traits::{AsPrimitive, Zero};

use super::{inv, Mat};
use crate::error::{incompatible_shapes, invalid_argument, NdResult};
use crate::{Element, LinalgScalar, NdArray};

impl<A> NdArray<A>
where
    A: Element + LinalgScalar,
{
    /// Perform matrix multiplication of rectangular arrays `self` and `rhs`,
    /// or the inner product of two vectors.
    ///
    /// - Two 1-d arrays of the same length give their inner product, as a
    ///   1-d array with one element.
    /// - A *M* × *N* and a *N* × *K* matrix give a *M* × *K* matrix.
    ///
    /// Any other combination of shapes is an error naming both shapes.
    ///
    /// `f32` and `f64` matrices are multiplied with `matrixmultiply`.
    ///
    /// ```
    /// use ndnum::nd;
    ///
    /// let a = nd![[1., 2.],
    ///             [0., 1.]];
    /// let b = nd![[1., 2.],
    ///             [2., 3.]];
    ///
    /// assert_eq!(a.dot(&b).unwrap(), nd![[5., 8.], [2., 3.]]);
    /// assert_eq!(nd![1, 2, 3].dot(&nd![4, 5, 6]).unwrap(), nd![32]);
    /// assert!(a.dot(&nd![[1., 2.]]).is_err());
    /// ```
    pub fn dot(&self, rhs: &NdArray<A>) -> NdResult<NdArray<A>> {
        match (self.dims(), rhs.dims()) {
            (&[n], &[m]) if n == m => {
                let sum = self.iter().zip(rhs.iter()).fold(A::zero(), |acc, (&x, &y)| acc + x * y);
                Ok(NdArray::from_vec(vec![sum]))
            }
            (&[m, k], &[k2, n]) if k == k2 => {
                let c = mat_mul(m, k, n, self.as_slice(), rhs.as_slice());
                Ok(NdArray::from_matrix_vec(m, n, c))
            }
            _ => Err(incompatible_shapes(self.dims(), rhs.dims())),
        }
    }
}

/// Matrix product or inner product, see [`NdArray::dot`].
pub fn dot<A>(a: &NdArray<A>, b: &NdArray<A>) -> NdResult<NdArray<A>>
where
    A: Element + LinalgScalar,
{
    a.dot(b)
}

/// `m` × `k` times `k` × `n`, both row major.
pub(crate) fn mat_mul<A>(m: usize, k: usize, n: usize, lhs: &[A], rhs: &[A]) -> Vec<A>
where
    A: LinalgScalar,
{
    debug_assert_eq!(lhs.len(), m * k);
    debug_assert_eq!(rhs.len(), k * n);
    let mut c = vec![A::zero(); m * n];
    if m == 0 || k == 0 || n == 0 {
        return c;
    }

    let ap = lhs.as_ptr();
    let bp = rhs.as_ptr();
    let cp = c.as_mut_ptr();
    let (rsa, rsb, rsc) = (k as isize, n as isize, n as isize);
    if same_type::<A, f32>() {
        unsafe {
            matrixmultiply::sgemm(
                m,
                k,
                n,
                1.,
                ap as *const _,
                rsa,
                1,
                bp as *const _,
                rsb,
                1,
                0.,
                cp as *mut _,
                rsc,
                1,
            );
        }
    } else if same_type::<A, f64>() {
        unsafe {
            matrixmultiply::dgemm(
                m,
                k,
                n,
                1.,
                ap as *const _,
                rsa,
                1,
                bp as *const _,
                rsb,
                1,
                0.,
                cp as *mut _,
                rsc,
                1,
            );
        }
    } else {
        for i in 0..m {
            let c_row = &mut c[i * n..(i + 1) * n];
            for (p, &a) in lhs[i * k..(i + 1) * k].iter().enumerate() {
                for (cij, &b) in c_row.iter_mut().zip(&rhs[p * n..(p + 1) * n]) {
                    *cij = *cij + a * b;
                }
            }
        }
    }
    c
}

/// Raise a square matrix to the integer power `n`.
///
/// `n == 0` gives the identity, negative powers use the inverse.
///
/// **Errors** if the matrix is not square, or (for negative `n`) singular.
///
/// ```
/// use ndnum::linalg::matrix_power;
/// use ndnum::nd;
///
/// let a = nd![[1, 1], [1, 0]];
/// assert_eq!(matrix_power(&a, 5).unwrap(), nd![[8., 5.], [5., 3.]]);
/// ```
pub fn matrix_power<A>(a: &NdArray<A>, n: i32) -> NdResult<NdArray<f64>>
where
    A: Element + AsPrimitive<f64>,
{
    let base = Mat::square_from(a)?;
    let base = if n < 0 {
        Mat::from_array(&inv(a)?)?
    } else {
        base
    };
    let mut result = Mat::eye(base.rows());
    for _ in 0..n.unsigned_abs() {
        result = result.matmul(&base);
    }
    Ok(result.into_array())
}

/// The 3 × 3 skew-symmetric "hat" (cross product) matrix of a 3-vector,
/// such that `hat(v) · w == v × w`.
///
/// **Errors** unless `v` has three elements.
///
/// ```
/// use ndnum::linalg::hat;
/// use ndnum::nd;
///
/// assert_eq!(hat(&nd![1, 2, 3]).unwrap(), nd![[0, -3, 2], [3, 0, -1], [-2, 1, 0]]);
/// ```
pub fn hat<A>(v: &NdArray<A>) -> NdResult<NdArray<A>>
where
    A: Element + Copy + Zero + Neg<Output = A>,
{
    match *v.as_slice() {
        [x, y, z] => {
            let o = A::zero();
            Ok(NdArray::from_matrix_vec(3, 3, vec![o, -z, y, z, o, -x, -y, x, o]))
        }
        _ => Err(invalid_argument(format!(
            "input vector must be a length 3 cartesian vector, got {} elements",
            v.size()
        ))),
    }
}

/// Return `true` if `A` and `B` are the same type
fn same_type<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::{Float, Num, NumCast, One, Zero};

use crate::error::{invalid_argument, NdResult};
use crate::linspace as float_range;
use crate::{Element, NdArray};

/// Create an [**`NdArray`**](struct.NdArray.html) with one, two or
/// three dimensions.
///
/// ```
/// use ndnum::nd;
/// let a1 = nd![1, 2, 3, 4];
///
/// let a2 = nd![[1, 2],
///              [3, 4]];
///
/// let a3 = nd![[[1, 2], [3, 4]],
///              [[5, 6], [7, 8]]];
///
/// assert_eq!(a1.dims(), &[4]);
/// assert_eq!(a2.dims(), &[2, 2]);
/// assert_eq!(a3.dims(), &[2, 2, 2]);
/// ```
///
/// Rows of unequal length are rejected at compile time. Use
/// [`NdArray::from_nested`] for nested lists built at run time.
#[macro_export]
macro_rules! nd {
    ($([$([$($x:expr),* $(,)*]),+ $(,)*]),+ $(,)*) => {{
        $crate::arr3(&[$([$([$($x,)*],)*],)*])
    }};
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::arr2(&[$([$($x,)*],)*])
    }};
    ($($x:expr),* $(,)*) => {{
        $crate::arr1(&[$($x,)*])
    }};
}

/// Create a one-dimensional array with elements from `xs`.
pub fn arr1<A: Element>(xs: &[A]) -> NdArray<A> {
    NdArray::from_vec(xs.to_vec())
}

/// Create a two-dimensional array with elements from `xs`.
///
/// ```
/// use ndnum::arr2;
///
/// let a = arr2(&[[1, 2, 3],
///                [4, 5, 6]]);
/// assert!(
///     a.dims() == &[2, 3]
/// );
/// ```
pub fn arr2<A: Element, const N: usize>(xs: &[[A; N]]) -> NdArray<A> {
    let v: Vec<A> = xs.iter().flat_map(|row| row.iter().cloned()).collect();
    NdArray::from_matrix_vec(xs.len(), N, v)
}

/// Create a three-dimensional array with elements from `xs`.
pub fn arr3<A: Element, const N: usize, const M: usize>(xs: &[[[A; M]; N]]) -> NdArray<A> {
    let v: Vec<A> = xs
        .iter()
        .flat_map(|plane| plane.iter().flat_map(|row| row.iter().cloned()))
        .collect();
    let shape = crate::Shape::from_ix(crate::dimension::IxVec::copy_from(&[xs.len(), N, M]));
    NdArray::from_shape_vec_unchecked(shape, v)
}

/// Create an identity matrix of size `n` (square 2D array).
pub fn eye<A>(n: usize) -> NdArray<A>
where
    A: Element + Zero + One,
{
    let mut v = vec![A::zero(); n * n];
    for i in 0..n {
        v[i * n + i] = A::one();
    }
    NdArray::from_matrix_vec(n, n, v)
}

/// Alias of [`eye`].
pub fn identity<A>(n: usize) -> NdArray<A>
where
    A: Element + Zero + One,
{
    eye(n)
}

/// Create a `rows` × `cols` matrix with ones on the `k`-th diagonal.
///
/// `k > 0` is above the main diagonal, `k < 0` below it.
pub fn eye_k<A>(rows: usize, cols: usize, k: isize) -> NdArray<A>
where
    A: Element + Zero + One,
{
    let mut v = vec![A::zero(); rows * cols];
    for r in 0..rows {
        let c = r as isize + k;
        if c >= 0 && (c as usize) < cols {
            v[r * cols + c as usize] = A::one();
        }
    }
    NdArray::from_matrix_vec(rows, cols, v)
}

/// Evenly spaced values in `[start, stop)` with increment `step`.
///
/// **Errors** with `InvalidArgument` if `step` is zero or points away from
/// `stop`.
///
/// ```
/// use ndnum::{arange, nd};
///
/// assert_eq!(arange(0, 5, 2).unwrap(), nd![0, 2, 4]);
/// assert_eq!(arange(1., 0., -0.5).unwrap(), nd![1., 0.5]);
/// ```
pub fn arange<A>(start: A, stop: A, step: A) -> NdResult<NdArray<A>>
where
    A: Element + Copy + Num + NumCast + PartialOrd,
{
    if step == A::zero() {
        return Err(invalid_argument("arange: step must be nonzero"));
    }
    let ascending = step > A::zero();
    if (ascending && start > stop) || (!ascending && start < stop) {
        return Err(invalid_argument(
            "arange: step must move from start towards stop",
        ));
    }
    let span = (stop - start).to_f64().unwrap_or(0.) / step.to_f64().unwrap_or(1.);
    let n = span.ceil().max(0.) as usize;
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let i = match A::from(i) {
            Some(i) => i,
            None => return Err(invalid_argument("arange: too many elements for the element type")),
        };
        v.push(start + i * step);
    }
    Ok(NdArray::from_vec(v))
}

/// `n` evenly spaced values from `start` to `stop`, inclusive of `stop` when
/// `endpoint` is set.
///
/// ```
/// use ndnum::{linspace, nd};
///
/// assert_eq!(linspace(0., 1., 3, true), nd![0., 0.5, 1.]);
/// ```
pub fn linspace<F>(start: F, stop: F, n: usize, endpoint: bool) -> NdArray<F>
where
    F: Element + Float,
{
    NdArray::from_vec(float_range::linspace(start, stop, n, endpoint).collect())
}

/// `n` values `base^x`, with `x` evenly spaced from `start` to `stop`
/// (inclusive).
pub fn logspace<F>(start: F, stop: F, n: usize, base: F) -> NdArray<F>
where
    F: Element + Float,
{
    NdArray::from_vec(float_range::logspace(base, start, stop, n).collect())
}

/// An array of zeros with the shape of `a`.
pub fn zeros_like<A, B>(a: &NdArray<A>) -> NdArray<B>
where
    A: Element,
    B: Element + Zero,
{
    a.same_shape_with(B::zero())
}

/// An array of ones with the shape of `a`.
pub fn ones_like<A, B>(a: &NdArray<A>) -> NdArray<B>
where
    A: Element,
    B: Element + One,
{
    a.same_shape_with(B::one())
}

/// Square matrix with the flattened elements of `a` on the `k`-th diagonal.
///
/// ```
/// use ndnum::{diagflat, nd};
///
/// assert_eq!(diagflat(&nd![1, 2], 0), nd![[1, 0], [0, 2]]);
/// assert_eq!(diagflat(&nd![3], 1), nd![[0, 3], [0, 0]]);
/// ```
pub fn diagflat<A>(a: &NdArray<A>, k: isize) -> NdArray<A>
where
    A: Element + Zero,
{
    let n = a.size() + k.unsigned_abs();
    let mut v = vec![A::zero(); n * n];
    for (i, x) in a.iter().enumerate() {
        let (r, c) = if k >= 0 {
            (i, i + k as usize)
        } else {
            (i + k.unsigned_abs(), i)
        };
        v[r * n + c] = x.clone();
    }
    NdArray::from_matrix_vec(n, n, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_offsets() {
        let e: NdArray<i32> = eye_k(2, 3, 1);
        assert_eq!(e.as_slice(), &[0, 1, 0, 0, 0, 1]);
        let e: NdArray<i32> = eye_k(3, 2, -1);
        assert_eq!(e.as_slice(), &[0, 0, 1, 0, 0, 1]);
    }

    #[test]
    fn arange_rejects_bad_steps() {
        assert!(arange(0, 5, 0).is_err());
        assert!(arange(5, 0, 1).is_err());
        assert_eq!(arange(0, 0, 1).unwrap().size(), 0);
        assert_eq!(arange(0., 1., 0.3).unwrap().size(), 4);
    }
}

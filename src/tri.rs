// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::Zero;

use crate::{Element, NdArray};

/// Zero the elements for which `keep(col - row)` is false; works on the
/// last two axes.
fn mask_triangle<A, F>(a: &NdArray<A>, keep: F) -> NdArray<A>
where
    A: Element + Zero,
    F: Fn(isize) -> bool,
{
    let dims = a.dims();
    if dims.len() <= 1 {
        return a.clone();
    }
    let cols = dims[dims.len() - 1];
    let rows = dims[dims.len() - 2];
    let mut out = a.copy();
    for (f, x) in out.iter_mut().enumerate() {
        let j = f % cols;
        let i = (f / cols) % rows;
        if !keep(j as isize - i as isize) {
            *x = A::zero();
        }
    }
    out
}

/// Upper triangular of an array.
///
/// Return a copy of the array with elements below the *k*-th diagonal zeroed.
/// For arrays with `ndim` exceeding 2, `triu` will apply to the final two axes.
/// For 1D arrays, `triu` will return an unchanged clone.
///
/// See also [`tril`]
///
/// ```
/// use ndnum::{nd, triu};
///
/// let arr = nd![
///     [1, 2, 3],
///     [4, 5, 6],
///     [7, 8, 9]
/// ];
/// assert_eq!(
///     triu(&arr, 0),
///     nd![
///         [1, 2, 3],
///         [0, 5, 6],
///         [0, 0, 9]
///     ]
/// );
/// ```
pub fn triu<A>(a: &NdArray<A>, k: isize) -> NdArray<A>
where
    A: Element + Zero,
{
    mask_triangle(a, |d| d >= k)
}

/// Lower triangular of an array.
///
/// Return a copy of the array with elements above the *k*-th diagonal zeroed.
/// For arrays with `ndim` exceeding 2, `tril` will apply to the final two axes.
/// For 1D arrays, `tril` will return an unchanged clone.
///
/// See also [`triu`]
///
/// ```
/// use ndnum::{nd, tril};
///
/// let arr = nd![
///     [1, 2, 3],
///     [4, 5, 6],
///     [7, 8, 9]
/// ];
/// assert_eq!(
///     tril(&arr, 0),
///     nd![
///         [1, 0, 0],
///         [4, 5, 0],
///         [7, 8, 9]
///     ]
/// );
/// ```
pub fn tril<A>(a: &NdArray<A>, k: isize) -> NdArray<A>
where
    A: Element + Zero,
{
    mask_triangle(a, |d| d <= k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;

    #[test]
    fn test_keep_order()
    {
        let x = nd![[1, 2, 3], [4, 5, 6]];
        assert_eq!(triu(&x, 1), nd![[0, 2, 3], [0, 0, 6]]);
        assert_eq!(tril(&x, -1), nd![[0, 0, 0], [4, 0, 0]]);
        assert_eq!(triu(&x, -5), x);
    }

    #[test]
    fn test_3d()
    {
        let x = NdArray::from_shape_vec((2, 2, 2), (1..9).collect()).unwrap();
        assert_eq!(tril(&x, 0).as_slice(), &[1, 0, 3, 4, 5, 0, 7, 8]);
        assert_eq!(triu(&nd![1, 2, 3], 1), nd![1, 2, 3]);
    }

    #[test]
    fn test_copy_is_independent()
    {
        let x = nd![[1, 2], [3, 4]];
        let u = triu(&x, 0);
        assert!(!u.shares_storage(&x));
        assert_eq!(x, nd![[1, 2], [3, 4]]);
    }
}

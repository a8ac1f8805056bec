// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Free functions over whole arrays: checked arithmetic, comparisons,
//! axis reductions, sorting and rearrangement.
//!
//! Every axis-aware function reads its input as a matrix and handles
//! `Axis::Row` by transposing and running the `Axis::Col` path.

mod arrange;
mod complex;
mod elementwise;
mod float_maths;
mod integer;
mod reductions;
mod sorting;

pub use self::arrange::{cross, diff, flip, fliplr, flipud, outer, repeat, roll, rot90, tile, where_select};
pub use self::complex::{angle, complex_abs, conj, imag, real};
pub use self::elementwise::{
    add, allclose, array_equal, bitwise_and, bitwise_or, bitwise_xor, divide, equal, greater, greater_equal, isclose,
    less, less_equal, multiply, not_equal, remainder, subtract,
};
pub use self::integer::{gcd, gcd_of, lcm, lcm_of};
pub use self::reductions::{
    all, any, argmax, argmin, average, count_nonzero, cumprod, cumsum, max, mean, median, min, norm, prod, ptp, rms,
    std, sum, var,
};
pub use self::sorting::{argsort, nonzero, sort, unique};

use crate::dimension::Axis;
use crate::error::NdResult;
use crate::{Element, NdArray};

/// Run `f` on each lane selected by `axis` and collect one value per lane.
///
/// `Axis::None` is a single lane of all elements, `Axis::Col` one lane per
/// column.
pub(crate) fn reduce_axis<A, B, F>(a: &NdArray<A>, axis: Axis, mut f: F) -> NdResult<NdArray<B>>
where
    A: Element,
    B: Element,
    F: FnMut(&[A]) -> NdResult<B>,
{
    match axis {
        Axis::None => Ok(NdArray::from_vec(vec![f(a.as_slice())?])),
        Axis::Col => {
            let (_, cols) = a.matrix_dims()?;
            let mut lane = Vec::new();
            let mut out = Vec::with_capacity(cols);
            for j in 0..cols {
                lane.clear();
                lane.extend(a.col_iter(j)?.cloned());
                out.push(f(&lane)?);
            }
            Ok(NdArray::from_vec(out))
        }
        Axis::Row => reduce_axis(&a.to_matrix()?.transpose(), Axis::Col, f),
    }
}

/// Replace each lane selected by `axis` with the output of `f`.
///
/// Every call of `f` must return the same number of elements `k`; the
/// result has shape `[k]` for `Axis::None`, `[k, cols]` for `Axis::Col`
/// and `[rows, k]` for `Axis::Row` (`[k]` if the input is 1-d).
pub(crate) fn map_lanes<A, B, F>(a: &NdArray<A>, axis: Axis, mut f: F) -> NdResult<NdArray<B>>
where
    A: Element,
    B: Element,
    F: FnMut(&[A]) -> Vec<B>,
{
    match axis {
        Axis::None => Ok(NdArray::from_vec(f(a.as_slice()))),
        Axis::Col => {
            let (_, cols) = a.matrix_dims()?;
            let mut lane = Vec::new();
            let mut mapped = Vec::with_capacity(cols);
            for j in 0..cols {
                lane.clear();
                lane.extend(a.col_iter(j)?.cloned());
                mapped.push(f(&lane));
            }
            let k = mapped.first().map_or(0, Vec::len);
            debug_assert!(mapped.iter().all(|m| m.len() == k));
            let mut out = vec![B::default(); k * cols];
            for (j, m) in mapped.into_iter().enumerate() {
                for (i, y) in m.into_iter().enumerate().take(k) {
                    out[i * cols + j] = y;
                }
            }
            NdArray::from_shape_vec((k, cols), out)
        }
        Axis::Row => {
            let out = map_lanes(&a.to_matrix()?.transpose(), Axis::Col, f)?.transpose();
            if a.ndim() == 1 {
                Ok(out.flatten())
            } else {
                Ok(out)
            }
        }
    }
}

/// `map_lanes` for functions that keep the lane length; the result has the
/// shape of the input.
pub(crate) fn map_lanes_same<A, B, F>(a: &NdArray<A>, axis: Axis, f: F) -> NdResult<NdArray<B>>
where
    A: Element,
    B: Element,
    F: FnMut(&[A]) -> Vec<B>,
{
    map_lanes(a, axis, f)?.into_shape(a.shape().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;

    #[test]
    fn lanes_by_axis() {
        let a = nd![[1, 2, 3], [4, 5, 6]];
        let total = |xs: &[i32]| Ok(xs.iter().sum::<i32>());
        assert_eq!(reduce_axis(&a, Axis::None, total).unwrap(), nd![21]);
        assert_eq!(reduce_axis(&a, Axis::Col, total).unwrap(), nd![5, 7, 9]);
        assert_eq!(reduce_axis(&a, Axis::Row, total).unwrap(), nd![6, 15]);
        assert_eq!(reduce_axis(&nd![1, 2], Axis::Row, total).unwrap(), nd![3]);

        let rev = |xs: &[i32]| xs.iter().rev().cloned().collect::<Vec<_>>();
        assert_eq!(map_lanes_same(&a, Axis::Row, rev).unwrap(), nd![[3, 2, 1], [6, 5, 4]]);
        assert_eq!(map_lanes_same(&a, Axis::Col, rev).unwrap(), nd![[4, 5, 6], [1, 2, 3]]);
        let firsts = |xs: &[i32]| vec![xs[0]];
        assert_eq!(map_lanes(&a, Axis::Row, firsts).unwrap(), nd![[1], [4]]);
        assert_eq!(map_lanes(&nd![7, 8], Axis::Row, firsts).unwrap(), nd![7]);
    }
}

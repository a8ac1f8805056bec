// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::cmp::Ordering;

use num_traits::Zero;

use super::map_lanes_same;
use crate::dimension::{self, Axis};
use crate::error::NdResult;
use crate::{Element, NdArray};

#[inline]
fn order<A: PartialOrd>(x: &A, y: &A) -> Ordering {
    x.partial_cmp(y).unwrap_or(Ordering::Equal)
}

fn argsort_lane<A: PartialOrd>(xs: &[A]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..xs.len()).collect();
    // `sort_by` is stable: equal elements keep their original order.
    idx.sort_by(|&i, &j| order(&xs[i], &xs[j]));
    idx
}

/// Sort the elements of each lane of `axis` in ascending order.
///
/// `Axis::None` sorts the flattened array and returns it 1-d.
///
/// ```
/// use ndnum::{nd, sort, Axis};
///
/// let a = nd![[3, 1, 2], [9, 7, 8]];
/// assert_eq!(sort(&a, Axis::Row).unwrap(), nd![[1, 2, 3], [7, 8, 9]]);
/// assert_eq!(sort(&a, Axis::None).unwrap(), nd![1, 2, 3, 7, 8, 9]);
/// ```
pub fn sort<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>>
where
    A: Element + PartialOrd,
{
    let sort_lane = |xs: &[A]| {
        let mut v = xs.to_vec();
        v.sort_by(order);
        v
    };
    match axis {
        Axis::None => Ok(NdArray::from_vec(sort_lane(a.as_slice()))),
        _ => map_lanes_same(a, axis, sort_lane),
    }
}

/// Indices that sort each lane of `axis`.
///
/// The sort is stable: equal elements are ordered by their original
/// position. For `Axis::None` the indices are flat indices.
///
/// ```
/// use ndnum::{argsort, nd, Axis};
///
/// assert_eq!(argsort(&nd![2, 1, 2, 1], Axis::None).unwrap(), nd![1, 3, 0, 2]);
/// ```
pub fn argsort<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<usize>>
where
    A: Element + PartialOrd,
{
    match axis {
        Axis::None => Ok(NdArray::from_vec(argsort_lane(a.as_slice()))),
        _ => map_lanes_same(a, axis, argsort_lane),
    }
}

/// The sorted distinct elements of the array, as a 1-d array.
pub fn unique<A>(a: &NdArray<A>) -> NdArray<A>
where
    A: Element + PartialOrd,
{
    let mut v = a.to_vec();
    v.sort_by(order);
    v.dedup_by(|x, y| order(x, y) == Ordering::Equal);
    NdArray::from_vec(v)
}

/// Indices of the nonzero elements, one 1-d index array per axis.
///
/// ```
/// use ndnum::{nd, nonzero};
///
/// let idx = nonzero(&nd![[0, 3], [4, 0]]);
/// assert_eq!(idx, vec![nd![0, 1], nd![1, 0]]);
/// ```
pub fn nonzero<A>(a: &NdArray<A>) -> Vec<NdArray<usize>>
where
    A: Element + Zero + PartialEq,
{
    let ndim = a.ndim();
    let mut out = vec![Vec::new(); ndim];
    let mut index = vec![0; ndim];
    for x in a.iter() {
        if !x.is_zero() {
            for (axis, &i) in index.iter().enumerate() {
                out[axis].push(i);
            }
        }
        dimension::next_index(a.dims(), &mut index);
    }
    out.into_iter().map(NdArray::from_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;

    #[test]
    fn argsort_is_stable_per_lane() {
        let a = nd![[1, 0, 1], [0, 0, 1]];
        assert_eq!(argsort(&a, Axis::Row).unwrap(), nd![[1, 0, 2], [0, 1, 2]]);
        assert_eq!(argsort(&a, Axis::Col).unwrap(), nd![[1, 0, 0], [0, 1, 1]]);
        assert_eq!(sort(&a, Axis::Col).unwrap(), nd![[0, 0, 1], [1, 0, 1]]);
    }

    #[test]
    fn unique_and_nan() {
        assert_eq!(unique(&nd![[3, 1], [3, 2]]), nd![1, 2, 3]);
        let s = sort(&nd![2., 1., 3.], Axis::None).unwrap();
        assert_eq!(s, nd![1., 2., 3.]);
    }
}

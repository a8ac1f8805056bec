// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rearranging elements: flips, rotations, rolls, repetition and the
//! small products (`outer`, `cross`).
use std::ops::{Mul, Sub};

use super::{map_lanes, map_lanes_same};
use crate::dimension::Axis;
use crate::error::{incompatible_shapes, invalid_argument, NdResult};
use crate::{Element, NdArray};

fn reversed<A: Clone>(xs: &[A]) -> Vec<A> {
    xs.iter().rev().cloned().collect()
}

/// Reverse the order of elements along the lanes of `axis`.
///
/// `Axis::None` reverses the row-major order and keeps the shape,
/// `Axis::Row` reverses each row and `Axis::Col` each column.
pub fn flip<A: Element>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>> {
    match axis {
        Axis::None => NdArray::from_shape_vec(a.shape().clone(), reversed(a.as_slice())),
        _ => map_lanes_same(a, axis, reversed),
    }
}

/// Flip a matrix left to right (reverse the order of the columns).
///
/// ```
/// use ndnum::{fliplr, nd};
///
/// assert_eq!(fliplr(&nd![[1, 2], [3, 4]]).unwrap(), nd![[2, 1], [4, 3]]);
/// ```
pub fn fliplr<A: Element>(a: &NdArray<A>) -> NdResult<NdArray<A>> {
    flip(a, Axis::Row)
}

/// Flip a matrix up to down (reverse the order of the rows).
pub fn flipud<A: Element>(a: &NdArray<A>) -> NdResult<NdArray<A>> {
    flip(a, Axis::Col)
}

/// Rotate a matrix by 90 degrees `k` times, counter-clockwise for positive
/// `k`.
///
/// ```
/// use ndnum::{nd, rot90};
///
/// let a = nd![[1, 2], [3, 4]];
/// assert_eq!(rot90(&a, 1).unwrap(), nd![[2, 4], [1, 3]]);
/// assert_eq!(rot90(&a, -1).unwrap(), nd![[3, 1], [4, 2]]);
/// assert_eq!(rot90(&a, 4).unwrap(), a);
/// ```
pub fn rot90<A: Element>(a: &NdArray<A>, k: i32) -> NdResult<NdArray<A>> {
    let m = a.to_matrix()?;
    match k.rem_euclid(4) {
        0 => Ok(m),
        1 => flipud(&m.transpose()),
        2 => flipud(&fliplr(&m)?),
        _ => fliplr(&m.transpose()),
    }
}

fn rolled<A: Clone>(xs: &[A], shift: isize) -> Vec<A> {
    let mut v = xs.to_vec();
    if !v.is_empty() {
        let n = v.len() as isize;
        v.rotate_right(shift.rem_euclid(n) as usize);
    }
    v
}

/// Shift elements along the lanes of `axis`; elements that roll beyond the
/// end come back at the start.
///
/// ```
/// use ndnum::{nd, roll, Axis};
///
/// let a = nd![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(roll(&a, 1, Axis::None).unwrap(), nd![[6, 1, 2], [3, 4, 5]]);
/// assert_eq!(roll(&a, -1, Axis::Row).unwrap(), nd![[2, 3, 1], [5, 6, 4]]);
/// assert_eq!(roll(&a, 1, Axis::Col).unwrap(), nd![[4, 5, 6], [1, 2, 3]]);
/// ```
pub fn roll<A: Element>(a: &NdArray<A>, shift: isize, axis: Axis) -> NdResult<NdArray<A>> {
    match axis {
        Axis::None => NdArray::from_shape_vec(a.shape().clone(), rolled(a.as_slice(), shift)),
        _ => map_lanes_same(a, axis, |xs| rolled(xs, shift)),
    }
}

/// Repeat each element `n` times along the lanes of `axis`.
///
/// `Axis::None` works on the flattened array.
///
/// ```
/// use ndnum::{nd, repeat, Axis};
///
/// let a = nd![[1, 2], [3, 4]];
/// assert_eq!(repeat(&a, 2, Axis::None).unwrap(), nd![1, 1, 2, 2, 3, 3, 4, 4]);
/// assert_eq!(repeat(&a, 2, Axis::Row).unwrap(), nd![[1, 1, 2, 2], [3, 3, 4, 4]]);
/// ```
pub fn repeat<A: Element>(a: &NdArray<A>, n: usize, axis: Axis) -> NdResult<NdArray<A>> {
    map_lanes(a, axis, |xs| {
        xs.iter()
            .flat_map(|x| std::iter::repeat(x.clone()).take(n))
            .collect()
    })
}

/// Tile a matrix `reps_rows` times vertically and `reps_cols` times
/// horizontally.
///
/// ```
/// use ndnum::{nd, tile};
///
/// let a = nd![[1, 2]];
/// assert_eq!(tile(&a, 2, 2).unwrap(), nd![[1, 2, 1, 2], [1, 2, 1, 2]]);
/// ```
pub fn tile<A: Element>(a: &NdArray<A>, reps_rows: usize, reps_cols: usize) -> NdResult<NdArray<A>> {
    let (rows, cols) = a.matrix_dims()?;
    let out_rows = rows * reps_rows;
    let out_cols = cols * reps_cols;
    let xs = a.as_slice();
    let mut v = Vec::with_capacity(out_rows * out_cols);
    for i in 0..out_rows {
        let row = &xs[(i % rows) * cols..(i % rows + 1) * cols];
        for _ in 0..reps_cols {
            v.extend_from_slice(row);
        }
    }
    NdArray::from_shape_vec((out_rows, out_cols), v)
}

/// Differences of consecutive elements along the lanes of `axis`; each
/// lane becomes one element shorter.
///
/// ```
/// use ndnum::{diff, nd, Axis};
///
/// let a = nd![[1, 4, 9], [2, 2, 5]];
/// assert_eq!(diff(&a, Axis::Row).unwrap(), nd![[3, 5], [0, 3]]);
/// assert_eq!(diff(&a, Axis::Col).unwrap(), nd![[1, -2, -4]]);
/// ```
pub fn diff<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>>
where
    A: Element + Sub<Output = A>,
{
    map_lanes(a, axis, |xs| {
        xs.windows(2)
            .map(|w| w[1].clone() - w[0].clone())
            .collect()
    })
}

/// Pick from `x` where `mask` is `true` and from `y` elsewhere.
///
/// **Errors** if the three shapes differ.
///
/// ```
/// use ndnum::{nd, where_select};
///
/// let m = nd![true, false, true];
/// assert_eq!(where_select(&m, &nd![1, 2, 3], &nd![9, 9, 9]).unwrap(), nd![1, 9, 3]);
/// ```
pub fn where_select<A: Element>(mask: &NdArray<bool>, x: &NdArray<A>, y: &NdArray<A>) -> NdResult<NdArray<A>> {
    mask.ensure_same_shape(x)?;
    x.ensure_same_shape(y)?;
    let v = mask
        .iter()
        .zip(x.iter().zip(y.iter()))
        .map(|(&m, (xv, yv))| if m { xv.clone() } else { yv.clone() })
        .collect();
    NdArray::from_shape_vec(x.shape().clone(), v)
}

/// Outer product of two arrays, flattened first: `out[i, j] = a[i] * b[j]`.
pub fn outer<A>(a: &NdArray<A>, b: &NdArray<A>) -> NdResult<NdArray<A>>
where
    A: Element + Mul<Output = A>,
{
    let v = a
        .iter()
        .flat_map(|x| b.iter().map(move |y| x.clone() * y.clone()))
        .collect();
    NdArray::from_shape_vec((a.size(), b.size()), v)
}

/// Cross product of two vectors with 2 or 3 elements.
///
/// For 2-vectors the result is the single z component.
///
/// ```
/// use ndnum::{cross, nd};
///
/// assert_eq!(cross(&nd![1, 0, 0], &nd![0, 1, 0]).unwrap(), nd![0, 0, 1]);
/// assert_eq!(cross(&nd![1, 2], &nd![3, 4]).unwrap(), nd![-2]);
/// ```
pub fn cross<A>(a: &NdArray<A>, b: &NdArray<A>) -> NdResult<NdArray<A>>
where
    A: Element + Copy + Mul<Output = A> + Sub<Output = A>,
{
    match (a.as_slice(), b.as_slice()) {
        (&[a0, a1], &[b0, b1]) => Ok(NdArray::from_vec(vec![a0 * b1 - a1 * b0])),
        (&[a0, a1, a2], &[b0, b1, b2]) => Ok(NdArray::from_vec(vec![
            a1 * b2 - a2 * b1,
            a2 * b0 - a0 * b2,
            a0 * b1 - a1 * b0,
        ])),
        _ if a.size() != b.size() => Err(incompatible_shapes(a.dims(), b.dims())),
        _ => Err(invalid_argument(format!(
            "cross product needs vectors of 2 or 3 elements, got {}",
            a.size()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;

    #[test]
    fn flips_and_rotations() {
        let a = nd![[1, 2, 3], [4, 5, 6]];
        assert_eq!(flip(&a, Axis::None).unwrap(), nd![[6, 5, 4], [3, 2, 1]]);
        assert_eq!(flipud(&a).unwrap(), nd![[4, 5, 6], [1, 2, 3]]);
        assert_eq!(rot90(&a, 2).unwrap(), nd![[6, 5, 4], [3, 2, 1]]);
        assert_eq!(rot90(&a, 1).unwrap().dims(), &[3, 2]);
        assert_eq!(rot90(&rot90(&a, 1).unwrap(), 3).unwrap(), a);
    }

    #[test]
    fn products() {
        assert_eq!(outer(&nd![1, 2], &nd![1, 10, 100]).unwrap(), nd![[1, 10, 100], [2, 20, 200]]);
        assert!(cross(&nd![1, 2, 3], &nd![1, 2]).is_err());
        assert!(cross(&nd![1, 2, 3, 4], &nd![1, 2, 3, 4]).is_err());
    }

    #[test]
    fn where_select_checks_shapes() {
        assert!(where_select(&nd![true], &nd![1, 2], &nd![1, 2]).is_err());
        assert!(where_select(&nd![true, false], &nd![1, 2], &nd![1]).is_err());
    }
}

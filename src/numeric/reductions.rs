// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

use num_traits::{AsPrimitive, One, Zero};

use super::{map_lanes_same, reduce_axis};
use crate::dimension::Axis;
use crate::error::{empty_array, incompatible_shapes, invalid_argument, NdResult};
use crate::{Element, NdArray};

fn nonempty<'a, A>(xs: &'a [A], what: &str) -> NdResult<&'a [A]> {
    if xs.is_empty() {
        return Err(empty_array(what));
    }
    Ok(xs)
}

fn mean_of(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn to_f64<A: AsPrimitive<f64>>(xs: &[A]) -> Vec<f64> {
    xs.iter().map(|x| x.as_()).collect()
}

fn var_of(xs: &[f64]) -> f64 {
    let mean = mean_of(xs);
    let sq: Vec<f64> = xs.iter().map(|x| (x - mean) * (x - mean)).collect();
    mean_of(&sq)
}

/// Index of the first extreme element of `xs`; `better` tells if an
/// ordering against the current best replaces it.
fn arg_extreme<A, F>(xs: &[A], better: F) -> Option<usize>
where
    A: PartialOrd,
    F: Fn(Ordering) -> bool,
{
    let mut best = 0;
    for (i, x) in xs.iter().enumerate().skip(1) {
        if let Some(ord) = x.partial_cmp(&xs[best]) {
            if better(ord) {
                best = i;
            }
        }
    }
    if xs.is_empty() {
        None
    } else {
        Some(best)
    }
}

/// Sum of the elements, per lane of `axis`.
///
/// ```
/// use ndnum::{nd, sum, Axis};
///
/// let a = nd![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(sum(&a, Axis::None).unwrap(), nd![21]);
/// assert_eq!(sum(&a, Axis::Row).unwrap(), nd![6, 15]);
/// assert_eq!(sum(&a, Axis::Col).unwrap(), nd![5, 7, 9]);
/// ```
pub fn sum<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>>
where
    A: Element + Zero + Add<Output = A>,
{
    reduce_axis(a, axis, |xs| Ok(xs.iter().cloned().fold(A::zero(), A::add)))
}

/// Product of the elements, per lane of `axis`.
pub fn prod<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>>
where
    A: Element + One + Mul<Output = A>,
{
    reduce_axis(a, axis, |xs| Ok(xs.iter().cloned().fold(A::one(), A::mul)))
}

/// Arithmetic mean, per lane of `axis`.
///
/// **Errors** if a lane is empty.
pub fn mean<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<f64>>
where
    A: Element + Copy + AsPrimitive<f64>,
{
    reduce_axis(a, axis, |xs| {
        Ok(mean_of(&to_f64(nonempty(xs, "mean")?)))
    })
}

/// Median, per lane of `axis`.
///
/// For an even number of elements this is the lower of the two middle
/// elements; no averaging takes place, so the median is always one of the
/// elements.
///
/// ```
/// use ndnum::{median, nd, Axis};
///
/// assert_eq!(median(&nd![4, 1, 3, 2], Axis::None).unwrap(), nd![2]);
/// assert_eq!(median(&nd![5, 1, 3], Axis::None).unwrap(), nd![3]);
/// ```
pub fn median<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>>
where
    A: Element + PartialOrd,
{
    reduce_axis(a, axis, |xs| {
        let mut v = nonempty(xs, "median")?.to_vec();
        let mid = (v.len() - 1) / 2;
        let (_, m, _) = v.select_nth_unstable_by(mid, |x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
        Ok(m.clone())
    })
}

/// Largest element, per lane of `axis`.
///
/// **Errors** if a lane is empty.
pub fn max<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>>
where
    A: Element + PartialOrd,
{
    reduce_axis(a, axis, |xs| {
        let i = arg_extreme(xs, |o| o == Ordering::Greater).ok_or_else(|| empty_array("max"))?;
        Ok(xs[i].clone())
    })
}

/// Smallest element, per lane of `axis`.
///
/// **Errors** if a lane is empty.
pub fn min<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>>
where
    A: Element + PartialOrd,
{
    reduce_axis(a, axis, |xs| {
        let i = arg_extreme(xs, |o| o == Ordering::Less).ok_or_else(|| empty_array("min"))?;
        Ok(xs[i].clone())
    })
}

/// Peak to peak, `max - min`, per lane of `axis`.
pub fn ptp<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>>
where
    A: Element + PartialOrd + Sub<Output = A>,
{
    reduce_axis(a, axis, |xs| {
        let hi = arg_extreme(xs, |o| o == Ordering::Greater).ok_or_else(|| empty_array("ptp"))?;
        let lo = arg_extreme(xs, |o| o == Ordering::Less).ok_or_else(|| empty_array("ptp"))?;
        Ok(xs[hi].clone() - xs[lo].clone())
    })
}

/// Index of the first largest element, per lane of `axis`.
///
/// For `Axis::None` the index is the flat, row-major index.
///
/// ```
/// use ndnum::{argmax, nd, Axis};
///
/// let a = nd![[1, 9, 3], [7, 2, 9]];
/// assert_eq!(argmax(&a, Axis::None).unwrap(), nd![1]);
/// assert_eq!(argmax(&a, Axis::Row).unwrap(), nd![1, 2]);
/// assert_eq!(argmax(&a, Axis::Col).unwrap(), nd![1, 0, 1]);
/// ```
pub fn argmax<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<usize>>
where
    A: Element + PartialOrd,
{
    reduce_axis(a, axis, |xs| arg_extreme(xs, |o| o == Ordering::Greater).ok_or_else(|| empty_array("argmax")))
}

/// Index of the first smallest element, per lane of `axis`.
pub fn argmin<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<usize>>
where
    A: Element + PartialOrd,
{
    reduce_axis(a, axis, |xs| arg_extreme(xs, |o| o == Ordering::Less).ok_or_else(|| empty_array("argmin")))
}

/// Population variance (divisor `n`), per lane of `axis`.
pub fn var<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<f64>>
where
    A: Element + Copy + AsPrimitive<f64>,
{
    reduce_axis(a, axis, |xs| Ok(var_of(&to_f64(nonempty(xs, "var")?))))
}

/// Population standard deviation, per lane of `axis`.
///
/// ```
/// use ndnum::{nd, std, Axis};
///
/// let s = std(&nd![2., 4., 4., 4., 5., 5., 7., 9.], Axis::None).unwrap();
/// assert_eq!(s, nd![2.]);
/// ```
pub fn std<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<f64>>
where
    A: Element + Copy + AsPrimitive<f64>,
{
    reduce_axis(a, axis, |xs| Ok(var_of(&to_f64(nonempty(xs, "std")?)).sqrt()))
}

/// Root mean square, per lane of `axis`.
pub fn rms<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<f64>>
where
    A: Element + Copy + AsPrimitive<f64>,
{
    reduce_axis(a, axis, |xs| {
        let squares: Vec<f64> = nonempty(xs, "rms")?
            .iter()
            .map(|x| {
                let x: f64 = x.as_();
                x * x
            })
            .collect();
        Ok(mean_of(&squares).sqrt())
    })
}

/// Euclidean (L2) norm, per lane of `axis`.
pub fn norm<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<f64>>
where
    A: Element + Copy + AsPrimitive<f64>,
{
    reduce_axis(a, axis, |xs| {
        let ss: f64 = xs
            .iter()
            .map(|x| {
                let x: f64 = x.as_();
                x * x
            })
            .sum();
        Ok(ss.sqrt())
    })
}

/// Weighted average, per lane of `axis`.
///
/// For `Axis::None` the weights have the shape of `a`; otherwise they are
/// a 1-d array with one weight per element of a lane.
///
/// **Errors** if the weights don't fit or sum to zero.
///
/// ```
/// use ndnum::{average, nd, Axis};
///
/// let a = nd![[1., 2.], [3., 4.]];
/// let w = nd![3., 1.];
/// assert_eq!(average(&a, &w, Axis::Col).unwrap(), nd![1.5, 2.5]);
/// assert_eq!(average(&a, &w, Axis::Row).unwrap(), nd![1.25, 3.25]);
/// ```
pub fn average<A, W>(a: &NdArray<A>, weights: &NdArray<W>, axis: Axis) -> NdResult<NdArray<f64>>
where
    A: Element + Copy + AsPrimitive<f64>,
    W: Element + Copy + AsPrimitive<f64>,
{
    if axis == Axis::None && a.dims() != weights.dims() {
        return Err(incompatible_shapes(a.dims(), weights.dims()));
    }
    let w: Vec<f64> = weights.iter().map(|x| x.as_()).collect();
    let total: f64 = w.iter().sum();
    if total == 0. {
        return Err(invalid_argument("weights sum to zero"));
    }
    reduce_axis(a, axis, |xs| {
        if xs.len() != w.len() {
            return Err(incompatible_shapes(&[xs.len()], weights.dims()));
        }
        let s: f64 = xs.iter().zip(&w).map(|(x, w)| x.as_() * w).sum();
        Ok(s / total)
    })
}

/// `true` where every element of a lane is nonzero.
pub fn all<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<bool>>
where
    A: Element + Zero + PartialEq,
{
    reduce_axis(a, axis, |xs| Ok(xs.iter().all(|x| !x.is_zero())))
}

/// `true` where any element of a lane is nonzero.
pub fn any<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<bool>>
where
    A: Element + Zero + PartialEq,
{
    reduce_axis(a, axis, |xs| Ok(xs.iter().any(|x| !x.is_zero())))
}

/// Number of nonzero elements, per lane of `axis`.
pub fn count_nonzero<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<usize>>
where
    A: Element + Zero + PartialEq,
{
    reduce_axis(a, axis, |xs| Ok(xs.iter().filter(|x| !x.is_zero()).count()))
}

fn scan<A, F>(xs: &[A], f: F) -> Vec<A>
where
    A: Clone,
    F: Fn(A, A) -> A,
{
    let mut out: Vec<A> = Vec::with_capacity(xs.len());
    for x in xs {
        let next = match out.last() {
            Some(acc) => f(acc.clone(), x.clone()),
            None => x.clone(),
        };
        out.push(next);
    }
    out
}

/// Cumulative sum along the lanes of `axis`.
///
/// `Axis::None` flattens the array first; otherwise the result has the
/// shape of `a`.
///
/// ```
/// use ndnum::{cumsum, nd, Axis};
///
/// let a = nd![[1, 2], [3, 4]];
/// assert_eq!(cumsum(&a, Axis::None).unwrap(), nd![1, 3, 6, 10]);
/// assert_eq!(cumsum(&a, Axis::Col).unwrap(), nd![[1, 2], [4, 6]]);
/// assert_eq!(cumsum(&a, Axis::Row).unwrap(), nd![[1, 3], [3, 7]]);
/// ```
pub fn cumsum<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>>
where
    A: Element + Add<Output = A>,
{
    match axis {
        Axis::None => Ok(NdArray::from_vec(scan(a.as_slice(), A::add))),
        _ => map_lanes_same(a, axis, |xs| scan(xs, A::add)),
    }
}

/// Cumulative product along the lanes of `axis`.
pub fn cumprod<A>(a: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>>
where
    A: Element + Mul<Output = A>,
{
    match axis {
        Axis::None => Ok(NdArray::from_vec(scan(a.as_slice(), A::mul))),
        _ => map_lanes_same(a, axis, |xs| scan(xs, A::mul)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mean_var_by_axis() {
        let a = nd![[1., 2.], [3., 6.]];
        assert_eq!(mean(&a, Axis::None).unwrap(), nd![3.]);
        assert_eq!(mean(&a, Axis::Row).unwrap(), nd![1.5, 4.5]);
        assert_eq!(mean(&a, Axis::Col).unwrap(), nd![2., 4.]);
        assert_eq!(var(&a, Axis::Col).unwrap(), nd![1., 4.]);
        assert_abs_diff_eq!(rms(&nd![3., 4.], Axis::None).unwrap(), nd![12.5f64.sqrt()]);
        assert_eq!(norm(&nd![3, 4], Axis::None).unwrap(), nd![5.]);
    }

    #[test]
    fn empty_reductions() {
        let e = NdArray::<f64>::zeros(0).unwrap();
        assert_eq!(sum(&e, Axis::None).unwrap(), nd![0.]);
        assert!(mean(&e, Axis::None).unwrap_err().is_invalid_argument());
        assert!(max(&e, Axis::None).is_err());
        assert!(median(&e, Axis::None).is_err());
    }

    #[test]
    fn extremes_take_first() {
        let a = nd![3, 1, 3, 1];
        assert_eq!(argmax(&a, Axis::None).unwrap(), nd![0]);
        assert_eq!(argmin(&a, Axis::None).unwrap(), nd![1]);
        assert_eq!(ptp(&a, Axis::None).unwrap(), nd![2]);
        assert_eq!(max(&nd![[1, 5], [4, 2]], Axis::Row).unwrap(), nd![5, 4]);
        assert_eq!(min(&nd![[1, 5], [4, 2]], Axis::Col).unwrap(), nd![1, 2]);
    }

    #[test]
    fn median_is_lower_middle() {
        let a = nd![[1, 4, 2, 3], [8, 7, 6, 5]];
        assert_eq!(median(&a, Axis::Row).unwrap(), nd![2, 6]);
        assert_eq!(median(&a, Axis::Col).unwrap(), nd![1, 4, 2, 3]);
    }

    #[test]
    fn logical_and_counts() {
        let a = nd![[0, 1], [2, 3]];
        assert_eq!(all(&a, Axis::None).unwrap(), nd![false]);
        assert_eq!(all(&a, Axis::Row).unwrap(), nd![false, true]);
        assert_eq!(any(&a, Axis::Col).unwrap(), nd![true, true]);
        assert_eq!(count_nonzero(&a, Axis::Col).unwrap(), nd![1, 2]);
        assert_eq!(prod(&a, Axis::Col).unwrap(), nd![0, 3]);
        assert_eq!(cumprod(&nd![1, 2, 3], Axis::Row).unwrap(), nd![1, 2, 6]);
    }

    #[test]
    fn average_weights_must_fit() {
        let a = nd![[1., 2.], [3., 4.]];
        assert!(average(&a, &nd![1., 1., 1.], Axis::Row).is_err());
        assert!(average(&a, &nd![0., 0.], Axis::Row).is_err());
        assert_eq!(average(&a, &nd![[1., 1.], [1., 1.]], Axis::None).unwrap(), nd![2.5]);
    }
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and stride arithmetic.
use std::fmt;
use std::ops::Index;

use crate::error::{index_out_of_bounds, invalid_argument, NdResult};

pub use self::axis::Axis;
pub use self::conversion::IntoShape;
pub(crate) use self::dynindeximpl::IxVec;

mod axis;
mod conversion;
mod dynindeximpl;

/// The shape of an array: an ordered list of dimension sizes.
///
/// A shape always has at least one axis. Equality is structural.
///
/// ```
/// use ndnum::Shape;
///
/// let s = Shape::new(&[2, 3, 4]).unwrap();
/// assert_eq!(s.size(), 24);
/// assert_eq!(s.default_strides(), vec![12, 4, 1]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: IxVec,
}

impl Shape {
    /// Create a shape from dimension sizes.
    ///
    /// **Errors** with `InvalidArgument` if `dims` is empty or if the number
    /// of elements would overflow `usize`.
    pub fn new(dims: &[usize]) -> NdResult<Shape> {
        if dims.is_empty() {
            return Err(invalid_argument("a shape needs at least one dimension"));
        }
        let shape = Shape { dims: IxVec::copy_from(dims) };
        if shape.size_checked().is_none() {
            return Err(invalid_argument(format!(
                "shape {:?} is too large, number of elements overflows usize",
                dims
            )));
        }
        Ok(shape)
    }

    /// Shape of a 2-d array with `rows` rows and `cols` columns.
    pub fn matrix(rows: usize, cols: usize) -> NdResult<Shape> {
        Shape::new(&[rows, cols])
    }

    pub(crate) fn from_ix(dims: IxVec) -> Shape {
        debug_assert!(!dims.is_empty());
        Shape { dims }
    }

    /// The dimension sizes.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements, the product of the dimension sizes.
    #[inline]
    pub fn size(&self) -> usize {
        self.dims.iter().product()
    }

    /// Compute the number of elements, or `None` if it overflows.
    pub fn size_checked(&self) -> Option<usize> {
        self.dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Return `true` if the shape holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of rows in the 2-d interpretation of the shape.
    ///
    /// A 1-d shape is a single row; for more than two axes every axis but
    /// the last one is folded into the rows.
    pub fn rows(&self) -> usize {
        match self.ndim() {
            1 => 1,
            n => self.dims[..n - 1].iter().product(),
        }
    }

    /// Number of columns in the 2-d interpretation of the shape.
    pub fn cols(&self) -> usize {
        self.dims[self.ndim() - 1]
    }

    /// Return `true` for a 2-d shape with as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.ndim() == 2 && self.dims[0] == self.dims[1]
    }

    /// Row-major element strides: `stride[i]` is the product of all
    /// dimension sizes after axis `i`, and the last stride is `1`.
    pub fn default_strides(&self) -> Vec<usize> {
        default_strides(&self.dims).to_vec()
    }

    pub(crate) fn strides_ix(&self) -> IxVec {
        default_strides(&self.dims)
    }

    /// Convert a multi-index to a flat row-major offset.
    ///
    /// **Errors** if the number of indices differs from `ndim` or if any
    /// index is out of bounds for its axis.
    pub fn ravel(&self, index: &[usize]) -> NdResult<usize> {
        if index.len() != self.ndim() {
            return Err(invalid_argument(format!(
                "number of indices {} does not match array ndim {}",
                index.len(),
                self.ndim()
            )));
        }
        for (axis, (&i, &d)) in index.iter().zip(self.dims.iter()).enumerate() {
            if i >= d {
                return Err(invalid_argument(format!(
                    "invalid index {} for axis {} of length {}",
                    i, axis, d
                )));
            }
        }
        Ok(stride_offset(index, &self.strides_ix()))
    }

    /// Convert a flat row-major offset back to a multi-index.
    pub fn unravel(&self, flat: usize) -> NdResult<Vec<usize>> {
        let size = self.size();
        if flat >= size {
            return Err(index_out_of_bounds(flat, size));
        }
        let mut rest = flat;
        let mut index = vec![0; self.ndim()];
        for (ix, &s) in index.iter_mut().zip(self.strides_ix().iter()) {
            *ix = rest / s;
            rest %= s;
        }
        Ok(index)
    }
}

impl Index<usize> for Shape {
    type Output = usize;
    #[inline]
    fn index(&self, axis: usize) -> &usize {
        &self.dims[axis]
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.dims[..], f)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

impl PartialEq<[usize]> for Shape {
    fn eq(&self, rhs: &[usize]) -> bool {
        self.dims() == rhs
    }
}

impl<const N: usize> PartialEq<[usize; N]> for Shape {
    fn eq(&self, rhs: &[usize; N]) -> bool {
        self.dims() == &rhs[..]
    }
}

/// Compute default array strides
///
/// Shape (a, b, c) => Give strides (b * c, c, 1)
pub(crate) fn default_strides(dims: &[usize]) -> IxVec {
    let mut strides = IxVec::zeros(dims.len());
    let mut cum_prod = 1;
    for (s, &d) in strides.iter_mut().rev().zip(dims.iter().rev()) {
        *s = cum_prod;
        cum_prod *= d;
    }
    strides
}

/// Flat offset of `index`: `index[0] * strides[0] + ... + index[n-1] * strides[n-1]`.
#[inline]
pub(crate) fn stride_offset(index: &[usize], strides: &[usize]) -> usize {
    debug_assert_eq!(index.len(), strides.len());
    if index.len() == 1 {
        return index[0];
    }
    index.iter().zip(strides).map(|(&i, &s)| i * s).sum()
}

/// Advance `index` to the next row-major multi-index inside `dims`.
///
/// Return `false` (and leave `index` at all zeros) after the last one.
pub(crate) fn next_index(dims: &[usize], index: &mut [usize]) -> bool {
    for (ix, &d) in index.iter_mut().zip(dims).rev() {
        *ix += 1;
        if *ix == d {
            *ix = 0;
        } else {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides_are_row_major() {
        assert_eq!(&default_strides(&[2, 3, 4])[..], &[12, 4, 1]);
        assert_eq!(&default_strides(&[5])[..], &[1]);
        assert_eq!(&default_strides(&[3, 0, 2])[..], &[0, 2, 1]);
    }

    #[test]
    fn next_index_visits_all() {
        let dims = [2, 3];
        let mut ix = [0, 0];
        let mut seen = vec![ix];
        while next_index(&dims, &mut ix) {
            seen.push(ix);
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[4], [1, 1]);
    }

    #[test]
    fn ravel_unravel() {
        let s = Shape::new(&[2, 3, 4]).unwrap();
        for flat in 0..s.size() {
            let ix = s.unravel(flat).unwrap();
            assert_eq!(s.ravel(&ix).unwrap(), flat);
        }
        assert!(s.ravel(&[0, 3, 0]).is_err());
        assert!(s.ravel(&[0, 0]).is_err());
        assert!(s.unravel(24).is_err());
    }

    #[test]
    fn empty_dims_rejected() {
        assert!(Shape::new(&[]).is_err());
        assert!(Shape::new(&[usize::MAX, 2]).is_err());
    }

    #[test]
    fn matrix_interpretation() {
        let s = Shape::new(&[7]).unwrap();
        assert_eq!((s.rows(), s.cols()), (1, 7));
        let s = Shape::new(&[2, 3, 4]).unwrap();
        assert_eq!((s.rows(), s.cols()), (6, 4));
        assert!(Shape::matrix(3, 3).unwrap().is_square());
        assert_eq!(Shape::matrix(2, 3).unwrap().to_string(), "[2, 3]");
    }
}

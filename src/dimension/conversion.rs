// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tuple, array and slice to shape conversion.

use std::convert::TryFrom;

use super::Shape;
use crate::error::{invalid_argument, NdError, NdResult};

/// Argument conversion into a `Shape`.
///
/// Implemented for `usize` (1-d), tuples of two to four `usize`,
/// `[usize; N]`, `&[usize]`, `Vec<usize>` and `Shape` itself.
pub trait IntoShape {
    /// Convert into a shape; fails like `Shape::new`.
    fn into_shape(self) -> NdResult<Shape>;
}

impl IntoShape for Shape {
    #[inline]
    fn into_shape(self) -> NdResult<Shape> {
        Ok(self)
    }
}

impl<'a> IntoShape for &'a Shape {
    #[inline]
    fn into_shape(self) -> NdResult<Shape> {
        Ok(self.clone())
    }
}

impl IntoShape for usize {
    #[inline]
    fn into_shape(self) -> NdResult<Shape> {
        Shape::new(&[self])
    }
}

impl<'a> IntoShape for &'a [usize] {
    #[inline]
    fn into_shape(self) -> NdResult<Shape> {
        Shape::new(self)
    }
}

impl IntoShape for Vec<usize> {
    #[inline]
    fn into_shape(self) -> NdResult<Shape> {
        Shape::new(&self)
    }
}

impl<const N: usize> IntoShape for [usize; N] {
    #[inline]
    fn into_shape(self) -> NdResult<Shape> {
        Shape::new(&self)
    }
}

impl<'a, const N: usize> IntoShape for &'a [usize; N] {
    #[inline]
    fn into_shape(self) -> NdResult<Shape> {
        Shape::new(&self[..])
    }
}

macro_rules! tuple_into_shape {
    ($($name:ident: $ix:ty),+) => {
        impl IntoShape for ($($ix,)+) {
            #[inline]
            fn into_shape(self) -> NdResult<Shape> {
                let ($($name,)+) = self;
                Shape::new(&[$($name),+])
            }
        }
    };
}

tuple_into_shape!(a: usize, b: usize);
tuple_into_shape!(a: usize, b: usize, c: usize);
tuple_into_shape!(a: usize, b: usize, c: usize, d: usize);

impl<'a> TryFrom<&'a [isize]> for Shape {
    type Error = NdError;

    /// Convert signed dimension sizes, rejecting negative values.
    fn try_from(dims: &'a [isize]) -> Result<Shape, NdError> {
        let mut out = Vec::with_capacity(dims.len());
        for &d in dims {
            if d < 0 {
                return Err(invalid_argument(format!(
                    "negative dimension {} in shape {:?}",
                    d, dims
                )));
            }
            out.push(d as usize);
        }
        Shape::new(&out)
    }
}

impl TryFrom<Vec<usize>> for Shape {
    type Error = NdError;

    fn try_from(dims: Vec<usize>) -> Result<Shape, NdError> {
        Shape::new(&dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_agree() {
        let s = Shape::new(&[2, 3]).unwrap();
        assert_eq!((2usize, 3usize).into_shape().unwrap(), s);
        assert_eq!([2usize, 3].into_shape().unwrap(), s);
        assert_eq!(vec![2usize, 3].into_shape().unwrap(), s);
        assert_eq!((&[2usize, 3][..]).into_shape().unwrap(), s);
        assert_eq!(5usize.into_shape().unwrap().dims(), &[5]);
        assert_eq!((1usize, 2usize, 3usize, 4usize).into_shape().unwrap().ndim(), 4);
    }

    #[test]
    fn signed_dims() {
        let dims: &[isize] = &[3, 4];
        assert_eq!(Shape::try_from(dims).unwrap().dims(), &[3, 4]);
        let dims: &[isize] = &[3, -4];
        let err = Shape::try_from(dims).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}

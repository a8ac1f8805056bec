// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for `NdArray`.
//!
use std::sync::Arc;

use num_traits::{One, Zero};

use crate::dimension::{self, IntoShape, Shape};
use crate::error::{incompatible_shapes, invalid_argument, NdResult};
use crate::{Element, NdArray, SharedRepr};

/// # Constructor Methods for Arrays
///
/// Every constructor that takes a shape accepts anything that implements
/// [`IntoShape`]: a `usize` for a 1-d array, a tuple `(rows, cols)`, an
/// array `[a, b, c]`, a slice, a `Vec<usize>` or a [`Shape`]. They fail with
/// `InvalidArgument` if the shape has no axes or is too large.
impl<A: Element> NdArray<A> {
    /// Create an array with copies of `elem`.
    ///
    /// ```
    /// use ndnum::NdArray;
    ///
    /// let a = NdArray::from_elem((2, 2), 1.).unwrap();
    /// assert_eq!(a.size(), 4);
    /// assert!(a.iter().all(|&x| x == 1.));
    /// ```
    pub fn from_elem<Sh: IntoShape>(shape: Sh, elem: A) -> NdResult<Self> {
        let shape = shape.into_shape()?;
        let v = vec![elem; shape.size()];
        Ok(Self::from_shape_vec_unchecked(shape, v))
    }

    /// Create an array filled with zeros.
    pub fn zeros<Sh: IntoShape>(shape: Sh) -> NdResult<Self>
    where
        A: Zero,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array filled with ones.
    pub fn ones<Sh: IntoShape>(shape: Sh) -> NdResult<Self>
    where
        A: One,
    {
        Self::from_elem(shape, A::one())
    }

    /// Create an array filled with the default value of the element type.
    pub fn default<Sh: IntoShape>(shape: Sh) -> NdResult<Self> {
        let shape = shape.into_shape()?;
        let v = (0..shape.size()).map(|_| A::default()).collect();
        Ok(Self::from_shape_vec_unchecked(shape, v))
    }

    /// Create an array from a vector of row-major elements.
    ///
    /// **Errors** if the number of elements doesn't match the shape.
    ///
    /// ```
    /// use ndnum::NdArray;
    ///
    /// let a = NdArray::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(a[[1, 0]], 4);
    /// assert!(NdArray::from_shape_vec((2, 2), vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_shape_vec<Sh: IntoShape>(shape: Sh, v: Vec<A>) -> NdResult<Self> {
        let shape = shape.into_shape()?;
        if shape.size() != v.len() {
            return Err(incompatible_shapes(&[v.len()], shape.dims()));
        }
        Ok(Self::from_shape_vec_unchecked(shape, v))
    }

    /// Create an array that copies the elements of `xs`.
    ///
    /// The source is only borrowed, the caller keeps ownership of it.
    pub fn from_shape_slice<Sh: IntoShape>(shape: Sh, xs: &[A]) -> NdResult<Self> {
        Self::from_shape_vec(shape, xs.to_vec())
    }

    /// Create an array that adopts an already shared buffer.
    ///
    /// No elements are copied; the array is one more owner of `data` and
    /// copies it on its first write while it is still shared.
    pub fn from_shared<Sh: IntoShape>(shape: Sh, data: Arc<Vec<A>>) -> NdResult<Self> {
        let shape = shape.into_shape()?;
        if shape.size() != data.len() {
            return Err(incompatible_shapes(&[data.len()], shape.dims()));
        }
        let strides = shape.strides_ix();
        Ok(NdArray {
            data: SharedRepr::from_arc(data),
            shape,
            strides,
        })
    }

    /// Create a one-dimensional array from a vector (no copying needed).
    pub fn from_vec(v: Vec<A>) -> Self {
        let shape = Shape::from_ix(dimension::IxVec::copy_from(&[v.len()]));
        Self::from_shape_vec_unchecked(shape, v)
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with the multi-index of each element, in row-major
    /// order.
    ///
    /// ```
    /// use ndnum::NdArray;
    ///
    /// let a = NdArray::from_shape_fn((3, 3), |ix| (ix[0] == ix[1]) as i32).unwrap();
    /// assert_eq!(a, ndnum::eye(3));
    /// ```
    pub fn from_shape_fn<Sh, F>(shape: Sh, mut f: F) -> NdResult<Self>
    where
        Sh: IntoShape,
        F: FnMut(&[usize]) -> A,
    {
        let shape = shape.into_shape()?;
        let size = shape.size();
        let mut v = Vec::with_capacity(size);
        if size > 0 {
            let mut index = vec![0; shape.ndim()];
            loop {
                v.push(f(&index));
                if !dimension::next_index(shape.dims(), &mut index) {
                    break;
                }
            }
        }
        Ok(Self::from_shape_vec_unchecked(shape, v))
    }

    /// Create a 2-d array from nested rows.
    ///
    /// **Errors** with `InvalidArgument` if the rows are not all of the same
    /// length.
    ///
    /// ```
    /// use ndnum::NdArray;
    ///
    /// let a = NdArray::from_nested(&[vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(a.dims(), &[2, 2]);
    /// assert!(NdArray::from_nested(&[vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_nested<R>(rows: &[R]) -> NdResult<Self>
    where
        R: AsRef<[A]>,
    {
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut v = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(ragged());
            }
            v.extend_from_slice(row);
        }
        Self::from_shape_vec((rows.len(), ncols), v)
    }

    /// Create a 3-d array from nested lists of rows.
    ///
    /// **Errors** with `InvalidArgument` if sibling lists differ in length
    /// at any depth.
    pub fn from_nested3<P, R>(planes: &[P]) -> NdResult<Self>
    where
        P: AsRef<[R]>,
        R: AsRef<[A]>,
    {
        let nrows = planes.first().map_or(0, |p| p.as_ref().len());
        let ncols = planes
            .first()
            .and_then(|p| p.as_ref().first())
            .map_or(0, |r| r.as_ref().len());
        let mut v = Vec::with_capacity(planes.len() * nrows * ncols);
        for plane in planes {
            let plane = plane.as_ref();
            if plane.len() != nrows {
                return Err(ragged());
            }
            for row in plane {
                let row = row.as_ref();
                if row.len() != ncols {
                    return Err(ragged());
                }
                v.extend_from_slice(row);
            }
        }
        Self::from_shape_vec((planes.len(), nrows, ncols), v)
    }

    /// Create an array with the same shape as `self`, filled with `elem`.
    pub(crate) fn same_shape_with<B: Element>(&self, elem: B) -> NdArray<B> {
        NdArray::from_shape_vec_unchecked(self.shape.clone(), vec![elem; self.size()])
    }

    pub(crate) fn from_shape_vec_unchecked(shape: Shape, v: Vec<A>) -> Self {
        debug_assert_eq!(shape.size_checked(), Some(v.len()));
        let strides = shape.strides_ix();
        NdArray {
            data: SharedRepr::from_vec(v),
            shape,
            strides,
        }
    }

    /// 2-d array of `rows` × `cols` from row-major elements.
    pub(crate) fn from_matrix_vec(rows: usize, cols: usize, v: Vec<A>) -> Self {
        let shape = Shape::from_ix(dimension::IxVec::copy_from(&[rows, cols]));
        Self::from_shape_vec_unchecked(shape, v)
    }
}

fn ragged() -> crate::NdError {
    invalid_argument("rows of the initializer list must have the same number of elements")
}

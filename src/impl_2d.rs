// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for two-dimensional arrays.
//!
//! These read a 1-d array as a single row. Slicing copies: the result is a
//! new array that doesn't share the buffer.
use std::ops::Add;

use num_traits::Zero;

use crate::error::{incompatible_shapes, index_out_of_bounds, NdResult};
use crate::slice::Slice;
use crate::{Element, NdArray};

impl<A: Element> NdArray<A> {
    /// Number of rows when read as a matrix.
    pub fn nrows(&self) -> usize {
        self.shape().rows()
    }

    /// Number of columns when read as a matrix.
    pub fn ncols(&self) -> usize {
        self.shape().cols()
    }

    /// Copy of row `index` as a 1-d array.
    ///
    /// **Errors** if the array has more than two axes or `index` is out of
    /// bounds.
    pub fn row(&self, index: usize) -> NdResult<NdArray<A>> {
        Ok(NdArray::from_vec(self.row_iter(index)?.cloned().collect()))
    }

    /// Copy of column `index` as a 1-d array.
    pub fn column(&self, index: usize) -> NdResult<NdArray<A>> {
        Ok(NdArray::from_vec(self.col_iter(index)?.cloned().collect()))
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> NdResult<()> {
        let (rows, cols) = self.matrix_dims()?;
        if a >= rows || b >= rows {
            return Err(index_out_of_bounds(a.max(b), rows));
        }
        if a != b {
            let xs = self.as_slice_mut();
            for j in 0..cols {
                xs.swap(a * cols + j, b * cols + j);
            }
        }
        Ok(())
    }

    /// Swap two columns in place.
    pub fn swap_cols(&mut self, a: usize, b: usize) -> NdResult<()> {
        let (rows, cols) = self.matrix_dims()?;
        if a >= cols || b >= cols {
            return Err(index_out_of_bounds(a.max(b), cols));
        }
        if a != b {
            let xs = self.as_slice_mut();
            for i in 0..rows {
                xs.swap(i * cols + a, i * cols + b);
            }
        }
        Ok(())
    }

    /// The `k`-th diagonal as a 1-d array; `k > 0` is above the main
    /// diagonal, `k < 0` below it.
    ///
    /// ```
    /// use ndnum::nd;
    ///
    /// let a = nd![[1, 2, 3], [4, 5, 6]];
    /// assert_eq!(a.diagonal(0).unwrap(), nd![1, 5]);
    /// assert_eq!(a.diagonal(1).unwrap(), nd![2, 6]);
    /// assert_eq!(a.diagonal(-1).unwrap(), nd![4]);
    /// ```
    pub fn diagonal(&self, k: isize) -> NdResult<NdArray<A>> {
        let (rows, cols) = self.matrix_dims()?;
        let xs = self.as_slice();
        let (r0, c0) = if k >= 0 {
            (0, k as usize)
        } else {
            (k.unsigned_abs(), 0)
        };
        let n = rows.saturating_sub(r0).min(cols.saturating_sub(c0));
        let v = (0..n).map(|i| xs[(r0 + i) * cols + c0 + i].clone()).collect();
        Ok(NdArray::from_vec(v))
    }

    /// Sum of the `k`-th diagonal.
    pub fn trace(&self, k: isize) -> NdResult<A>
    where
        A: Zero + Add<Output = A>,
    {
        Ok(self
            .diagonal(k)?
            .iter()
            .fold(A::zero(), |acc, x| acc + x.clone()))
    }

    /// Copy the elements a slice selects from the flat, row-major buffer.
    ///
    /// ```
    /// use ndnum::{nd, Slice};
    ///
    /// let a = nd![[1, 2, 3], [4, 5, 6]];
    /// assert_eq!(a.slice(Slice::from(1..5).step_by(2)).unwrap(), nd![2, 4]);
    /// ```
    pub fn slice<S: Into<Slice>>(&self, s: S) -> NdResult<NdArray<A>> {
        let range = s.into().normalize(self.size())?;
        let xs = self.as_slice();
        Ok(NdArray::from_vec(range.indices().map(|i| xs[i].clone()).collect()))
    }

    /// Copy the sub-matrix selected by a row slice and a column slice.
    ///
    /// ```
    /// use ndnum::{nd, Slice};
    ///
    /// let a = nd![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    /// let s = a.slice2(Slice::new(-2, None, 1), 0..3).unwrap();
    /// assert_eq!(s, nd![[4, 5, 6], [7, 8, 9]]);
    /// let c = a.slice2(.., 1).unwrap();
    /// assert_eq!(c, nd![[2], [5], [8]]);
    /// ```
    pub fn slice2<R, C>(&self, rows: R, cols: C) -> NdResult<NdArray<A>>
    where
        R: Into<Slice>,
        C: Into<Slice>,
    {
        let (nr, nc) = self.matrix_dims()?;
        let rr = rows.into().normalize(nr)?;
        let cr = cols.into().normalize(nc)?;
        let xs = self.as_slice();
        let mut v = Vec::with_capacity(rr.len() * cr.len());
        for i in rr.indices() {
            for j in cr.indices() {
                v.push(xs[i * nc + j].clone());
            }
        }
        Ok(NdArray::from_matrix_vec(rr.len(), cr.len(), v))
    }

    /// Write `values` into the sub-matrix selected by a row slice and a
    /// column slice.
    ///
    /// **Errors** if `values` doesn't have as many elements as the
    /// selection.
    pub fn put_slice2<R, C>(&mut self, rows: R, cols: C, values: &NdArray<A>) -> NdResult<()>
    where
        R: Into<Slice>,
        C: Into<Slice>,
    {
        let (nr, nc) = self.matrix_dims()?;
        let rr = rows.into().normalize(nr)?;
        let cr = cols.into().normalize(nc)?;
        if rr.len() * cr.len() != values.size() {
            return Err(incompatible_shapes(&[rr.len(), cr.len()], values.dims()));
        }
        let xs = self.as_slice_mut();
        let mut src = values.iter();
        for i in rr.indices() {
            for j in cr.indices() {
                if let Some(x) = src.next() {
                    xs[i * nc + j] = x.clone();
                }
            }
        }
        Ok(())
    }

    /// Set every element of the selected sub-matrix to `value`.
    pub fn fill_slice2<R, C>(&mut self, rows: R, cols: C, value: A) -> NdResult<()>
    where
        R: Into<Slice>,
        C: Into<Slice>,
    {
        let (nr, nc) = self.matrix_dims()?;
        let rr = rows.into().normalize(nr)?;
        let cr = cols.into().normalize(nc)?;
        let xs = self.as_slice_mut();
        for i in rr.indices() {
            for j in cr.indices() {
                xs[i * nc + j] = value.clone();
            }
        }
        Ok(())
    }

    /// Set the elements where `mask` is `true` to `value`.
    ///
    /// **Errors** if the mask doesn't have the shape of the array.
    pub fn put_mask(&mut self, mask: &NdArray<bool>, value: A) -> NdResult<()> {
        self.zip_mut_with(mask, |x, &m| {
            if m {
                *x = value.clone();
            }
        })
    }

    /// Copy the elements where `mask` is `true` into a 1-d array.
    ///
    /// ```
    /// use ndnum::nd;
    ///
    /// let a = nd![[1, 2], [3, 4]];
    /// let m = a.map(|&x| x % 2 == 0);
    /// assert_eq!(a.select(&m).unwrap(), nd![2, 4]);
    /// ```
    pub fn select(&self, mask: &NdArray<bool>) -> NdResult<NdArray<A>> {
        self.ensure_same_shape(mask)?;
        let v = self
            .iter()
            .zip(mask.iter())
            .filter(|&(_, &m)| m)
            .map(|(x, _)| x.clone())
            .collect();
        Ok(NdArray::from_vec(v))
    }
}

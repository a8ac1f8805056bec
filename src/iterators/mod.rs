// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod strided;

use std::slice::{Iter as SliceIter, IterMut as SliceIterMut};

pub use self::strided::{ColIter, ColIterMut};

use crate::error::{index_out_of_bounds, NdResult};
use crate::{Element, NdArray};

/// An iterator over the rows of an array, each row as a slice.
///
/// Arrays with more than two axes are read as a stack of rows of the
/// innermost axis.
///
/// Iterator element type is `&'a [A]`.
#[derive(Clone)]
pub struct Rows<'a, A> {
    xs: &'a [A],
    cols: usize,
    index: usize,
    end: usize,
}

impl<'a, A> Iterator for Rows<'a, A> {
    type Item = &'a [A];

    #[inline]
    fn next(&mut self) -> Option<&'a [A]> {
        if self.index >= self.end {
            return None;
        }
        let i = self.index;
        self.index += 1;
        Some(&self.xs[i * self.cols..(i + 1) * self.cols])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.index;
        (len, Some(len))
    }
}

impl<'a, A> DoubleEndedIterator for Rows<'a, A> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [A]> {
        if self.index >= self.end {
            return None;
        }
        self.end -= 1;
        Some(&self.xs[self.end * self.cols..(self.end + 1) * self.cols])
    }
}

impl<'a, A> ExactSizeIterator for Rows<'a, A> {}

/// # Iteration
///
/// The flat iterators are the slice iterators of the row-major buffer,
/// so they support the full random-access toolbox of `std::slice::Iter`.
impl<A: Element> NdArray<A> {
    /// Return an iterator of references to the elements of the array, in
    /// row-major order.
    pub fn iter(&self) -> SliceIter<'_, A> {
        self.as_slice().iter()
    }

    /// Return an iterator of mutable references to the elements of the
    /// array, in row-major order.
    pub fn iter_mut(&mut self) -> SliceIterMut<'_, A> {
        self.as_slice_mut().iter_mut()
    }

    fn check_row(&self, row: usize) -> NdResult<(usize, usize)> {
        let (rows, cols) = self.matrix_dims()?;
        if row >= rows {
            return Err(index_out_of_bounds(row, rows));
        }
        Ok((rows, cols))
    }

    fn check_col(&self, col: usize) -> NdResult<(usize, usize)> {
        let (rows, cols) = self.matrix_dims()?;
        if col >= cols {
            return Err(index_out_of_bounds(col, cols));
        }
        Ok((rows, cols))
    }

    /// Iterate over the elements of one row.
    ///
    /// **Errors** if the array has more than two axes or `row` is out of
    /// bounds.
    pub fn row_iter(&self, row: usize) -> NdResult<SliceIter<'_, A>> {
        let (_, cols) = self.check_row(row)?;
        Ok(self.as_slice()[row * cols..(row + 1) * cols].iter())
    }

    /// Iterate mutably over the elements of one row.
    pub fn row_iter_mut(&mut self, row: usize) -> NdResult<SliceIterMut<'_, A>> {
        let (_, cols) = self.check_row(row)?;
        Ok(self.as_slice_mut()[row * cols..(row + 1) * cols].iter_mut())
    }

    /// Iterate over the elements of one column, top to bottom.
    ///
    /// ```
    /// use ndnum::nd;
    ///
    /// let a = nd![[1, 2], [3, 4], [5, 6]];
    /// let col: Vec<i32> = a.col_iter(1).unwrap().rev().cloned().collect();
    /// assert_eq!(col, vec![6, 4, 2]);
    /// ```
    pub fn col_iter(&self, col: usize) -> NdResult<ColIter<'_, A>> {
        let (rows, cols) = self.check_col(col)?;
        let xs = self.as_slice();
        Ok(ColIter::new(&xs[col.min(xs.len())..], rows, cols))
    }

    /// Iterate mutably over the elements of one column, top to bottom.
    pub fn col_iter_mut(&mut self, col: usize) -> NdResult<ColIterMut<'_, A>> {
        let (rows, cols) = self.check_col(col)?;
        let xs = self.as_slice_mut();
        let start = col.min(xs.len());
        Ok(ColIterMut::new(&mut xs[start..], rows, cols))
    }

    /// Return an iterator over the rows of the array.
    pub fn rows(&self) -> Rows<'_, A> {
        let shape = self.shape();
        let (rows, cols) = (shape.rows(), shape.cols());
        Rows {
            xs: self.as_slice(),
            cols,
            index: 0,
            end: rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{nd, NdArray};

    #[test]
    fn rows_of_3d() {
        let a = NdArray::from_shape_vec((2, 2, 2), (0..8).collect()).unwrap();
        let rows: Vec<&[i32]> = a.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3], &[6, 7]);
        assert_eq!(a.rows().rev().next(), Some(&[6, 7][..]));
    }

    #[test]
    fn row_and_col_bounds() {
        let mut a = nd![[1, 2, 3], [4, 5, 6]];
        assert!(a.row_iter(2).is_err());
        assert!(a.col_iter(3).is_err());
        for x in a.col_iter_mut(2).unwrap() {
            *x *= 10;
        }
        assert_eq!(a.row_iter(1).unwrap().sum::<i32>(), 69);
    }
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::mem::size_of;
use std::sync::Arc;

use num_traits::{AsPrimitive, One, Zero};

use crate::dimension::{self, IntoShape, IxVec, Shape};
use crate::error::{incompatible_shapes, index_out_of_bounds, invalid_argument, NdResult};
use crate::{Element, NdArray};

impl<A: Element> NdArray<A> {
    /// Return the shape of the array.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Return the dimension sizes, the same as `self.shape().dims()`.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    /// Return the element strides of the array.
    ///
    /// The array is always row-major: the last stride is `1` and each other
    /// stride is the product of the dimension sizes after it.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Return the strides in bytes, the element strides times the
    /// element size.
    pub fn byte_strides(&self) -> Vec<usize> {
        self.strides.iter().map(|&s| s * size_of::<A>()).collect()
    }

    /// Return the total number of elements in the array.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Return the total number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return whether the array has any elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of dimensions (axes) in the array
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Size in bytes of one element.
    #[inline]
    pub fn item_size(&self) -> usize {
        size_of::<A>()
    }

    /// Size in bytes of all elements.
    pub fn nbytes(&self) -> usize {
        self.size() * size_of::<A>()
    }

    /// `(rows, cols)` of the array read as a matrix; a 1-d array is a
    /// single row.
    ///
    /// **Errors** if the array has more than two axes.
    pub(crate) fn matrix_dims(&self) -> NdResult<(usize, usize)> {
        match *self.dims() {
            [n] => Ok((1, n)),
            [r, c] => Ok((r, c)),
            _ => Err(invalid_argument(format!(
                "operation needs an array with at most two dimensions, got shape {}",
                self.shape
            ))),
        }
    }

    /// The array with a 2-d shape (a 1-d array becomes a single row); the
    /// buffer is shared.
    pub(crate) fn to_matrix(&self) -> NdResult<Self> {
        let (rows, cols) = self.matrix_dims()?;
        self.clone().into_shape((rows, cols))
    }

    /// Return `true` for a 2-d array with as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.shape.is_square()
    }

    /// Return the array's elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        self.data.as_slice()
    }

    /// Return the array's elements in row-major order, for writing.
    ///
    /// Copies the buffer first if it is shared with another array.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [A] {
        self.data.make_mut()
    }

    /// Return a vector of the elements in row-major order.
    pub fn to_vec(&self) -> Vec<A> {
        self.as_slice().to_vec()
    }

    /// Return the elements as a vector, without copying if the buffer is
    /// not shared.
    pub fn into_raw_vec(self) -> Vec<A> {
        self.data.into_vec()
    }

    /// Return the reference counted buffer of the array.
    pub fn into_shared(self) -> Arc<Vec<A>> {
        self.data.into_arc()
    }

    /// Return an independent deep copy of the array.
    ///
    /// ```
    /// use ndnum::nd;
    ///
    /// let a = nd![1, 2, 3];
    /// let b = a.clone();
    /// let c = a.copy();
    /// assert!(a.shares_storage(&b));
    /// assert!(!a.shares_storage(&c));
    /// ```
    pub fn copy(&self) -> Self {
        NdArray {
            data: self.data.deep_copy(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }

    /// Returns `true` iff no other array shares the buffer.
    pub fn is_unique(&self) -> bool {
        self.data.is_unique()
    }

    /// Return `true` if both arrays currently use the same buffer.
    pub fn shares_storage(&self, other: &Self) -> bool {
        self.data.ptr_eq(&other.data)
    }

    /// Flat offset of a multi-index.
    ///
    /// **Errors** if the number of indices differs from `ndim()`, or if any
    /// index is out of bounds for its axis.
    #[inline]
    pub fn flat_index(&self, index: &[usize]) -> NdResult<usize> {
        self.shape.ravel(index)
    }

    /// Return a reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&A> {
        self.flat_index(index).ok().map(|i| &self.as_slice()[i])
    }

    /// Return a mutable reference to the element at `index`, or return
    /// `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut A> {
        match self.flat_index(index) {
            Ok(i) => Some(&mut self.as_slice_mut()[i]),
            Err(_) => None,
        }
    }

    /// Checked access by multi-index.
    ///
    /// **Errors** with `InvalidArgument` if the number of indices doesn't
    /// match `ndim()` or any index is out of bounds.
    pub fn at(&self, index: &[usize]) -> NdResult<&A> {
        let i = self.flat_index(index)?;
        Ok(&self.as_slice()[i])
    }

    /// Checked mutable access by multi-index.
    pub fn at_mut(&mut self, index: &[usize]) -> NdResult<&mut A> {
        let i = self.flat_index(index)?;
        Ok(&mut self.as_slice_mut()[i])
    }

    /// Checked access by flat index.
    ///
    /// ```
    /// use ndnum::nd;
    ///
    /// let a = nd![1, 2, 3];
    /// assert_eq!(a.at_flat(2), Ok(&3));
    /// let err = a.at_flat(12).unwrap_err();
    /// assert_eq!(err.message(), "invalid index 12 for array of size 3");
    /// ```
    pub fn at_flat(&self, i: usize) -> NdResult<&A> {
        self.as_slice().get(i).ok_or_else(|| index_out_of_bounds(i, self.size()))
    }

    /// Checked mutable access by flat index.
    pub fn at_flat_mut(&mut self, i: usize) -> NdResult<&mut A> {
        let size = self.size();
        self.as_slice_mut()
            .get_mut(i)
            .ok_or_else(|| index_out_of_bounds(i, size))
    }

    /// The first element in row-major order.
    pub fn front(&self) -> Option<&A> {
        self.as_slice().first()
    }

    /// The last element in row-major order.
    pub fn back(&self) -> Option<&A> {
        self.as_slice().last()
    }

    /// The single element of a one-element array.
    ///
    /// **Errors** if the array doesn't have exactly one element.
    pub fn item(&self) -> NdResult<A> {
        match self.as_slice() {
            [x] => Ok(x.clone()),
            _ => Err(invalid_argument(format!(
                "can only convert an array of size 1 to a scalar, got size {}",
                self.size()
            ))),
        }
    }

    /// Change the shape of the array in place, keeping the elements in
    /// row-major order.
    ///
    /// **Errors** if the new shape doesn't have the same number of
    /// elements.
    ///
    /// ```
    /// use ndnum::NdArray;
    ///
    /// let mut a = NdArray::<f64>::zeros((2, 3)).unwrap();
    /// assert!(a.reshape((3, 2)).is_ok());
    /// assert_eq!(a.strides(), &[2, 1]);
    /// assert!(a.reshape((2, 2)).is_err());
    /// ```
    pub fn reshape<Sh: IntoShape>(&mut self, shape: Sh) -> NdResult<()> {
        let shape = shape.into_shape()?;
        if shape.size() != self.size() {
            return Err(incompatible_shapes(self.dims(), shape.dims()));
        }
        self.strides = shape.strides_ix();
        self.shape = shape;
        Ok(())
    }

    /// Reshape with at most one dimension given as `-1`, which is inferred
    /// from the number of elements.
    ///
    /// ```
    /// use ndnum::arange;
    ///
    /// let mut a = arange(0, 12, 1).unwrap();
    /// a.reshape_infer(&[-1, 4]).unwrap();
    /// assert_eq!(a.dims(), &[3, 4]);
    /// ```
    pub fn reshape_infer(&mut self, dims: &[isize]) -> NdResult<()> {
        let mut inferred = None;
        let mut known = 1usize;
        for (axis, &d) in dims.iter().enumerate() {
            match d {
                -1 if inferred.is_none() => inferred = Some(axis),
                d if d < 0 => {
                    return Err(invalid_argument(format!(
                        "invalid dimension {} in reshape to {:?}",
                        d, dims
                    )))
                }
                d => known *= d as usize,
            }
        }
        let mut out: Vec<usize> = dims.iter().map(|&d| d.max(0) as usize).collect();
        if let Some(axis) = inferred {
            if known == 0 || self.size() % known != 0 {
                return Err(invalid_argument(format!(
                    "cannot reshape array of size {} into {:?}",
                    self.size(),
                    dims
                )));
            }
            out[axis] = self.size() / known;
        }
        self.reshape(out)
    }

    /// Consume the array and return it with a new shape.
    pub fn into_shape<Sh: IntoShape>(mut self, shape: Sh) -> NdResult<Self> {
        self.reshape(shape)?;
        Ok(self)
    }

    /// Return a 1-d array of all elements (the buffer is shared, not
    /// copied).
    pub fn flatten(&self) -> Self {
        NdArray {
            data: self.data.clone(),
            shape: Shape::from_ix(IxVec::copy_from(&[self.size()])),
            strides: IxVec::copy_from(&[1]),
        }
    }

    /// Change shape and size in place.
    ///
    /// The first elements in row-major order are kept; a larger array is
    /// padded with the default value and a smaller one truncated.
    pub fn resize<Sh: IntoShape>(&mut self, shape: Sh) -> NdResult<()> {
        let shape = shape.into_shape()?;
        let v = self.data.make_mut();
        v.resize(shape.size(), A::default());
        self.strides = shape.strides_ix();
        self.shape = shape;
        Ok(())
    }

    /// Return the transposed array, with the order of the axes reversed.
    ///
    /// A 1-d array is returned unchanged.
    ///
    /// ```
    /// use ndnum::nd;
    ///
    /// let a = nd![[1, 2, 3], [4, 5, 6]];
    /// assert_eq!(a.transpose(), nd![[1, 4], [2, 5], [3, 6]]);
    /// ```
    pub fn transpose(&self) -> Self {
        match *self.dims() {
            [_] => self.clone(),
            [r, c] => {
                let xs = self.as_slice();
                let mut v = Vec::with_capacity(xs.len());
                for j in 0..c {
                    for i in 0..r {
                        v.push(xs[i * c + j].clone());
                    }
                }
                Self::from_matrix_vec(c, r, v)
            }
            _ => {
                let n = self.ndim();
                let reversed: Vec<usize> = self.dims().iter().rev().cloned().collect();
                let xs = self.as_slice();
                let strides = &self.strides;
                let mut v = Vec::with_capacity(xs.len());
                if !xs.is_empty() {
                    let mut index = vec![0; n];
                    loop {
                        let off: usize = (0..n).map(|k| index[k] * strides[n - 1 - k]).sum();
                        v.push(xs[off].clone());
                        if !dimension::next_index(&reversed, &mut index) {
                            break;
                        }
                    }
                }
                Self::from_shape_vec_unchecked(Shape::from_ix(IxVec::from_vec(reversed)), v)
            }
        }
    }

    /// Convert the elements with an `as` cast.
    ///
    /// ```
    /// use ndnum::nd;
    ///
    /// assert_eq!(nd![1.7, -2.2].astype::<i32>(), nd![1, -2]);
    /// ```
    pub fn astype<B>(&self) -> NdArray<B>
    where
        A: AsPrimitive<B>,
        B: Element + Copy,
    {
        self.mapv(|x| x.as_())
    }

    /// Call `f` by reference on each element and create a new array
    /// with the new values.
    pub fn map<'a, B, F>(&'a self, f: F) -> NdArray<B>
    where
        F: FnMut(&'a A) -> B,
        B: Element,
    {
        let v = self.as_slice().iter().map(f).collect();
        NdArray::from_shape_vec_unchecked(self.shape.clone(), v)
    }

    /// Call `f` by value on each element and create a new array with the
    /// new values.
    pub fn mapv<B, F>(&self, mut f: F) -> NdArray<B>
    where
        F: FnMut(A) -> B,
        B: Element,
    {
        self.map(move |x| f(x.clone()))
    }

    /// Modify the array in place by calling `f` by mutable reference on
    /// each element.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(&mut A),
    {
        self.as_slice_mut().iter_mut().for_each(f);
    }

    /// Modify the array in place by calling `f` by value on each element.
    pub fn mapv_inplace<F>(&mut self, mut f: F)
    where
        F: FnMut(A) -> A,
    {
        self.map_inplace(move |x| *x = f(x.clone()));
    }

    /// Combine two arrays of the same shape element by element.
    ///
    /// **Errors** if the shapes differ.
    pub fn zip_with<B, C, F>(&self, rhs: &NdArray<B>, mut f: F) -> NdResult<NdArray<C>>
    where
        B: Element,
        C: Element,
        F: FnMut(&A, &B) -> C,
    {
        self.ensure_same_shape(rhs)?;
        let v = self
            .as_slice()
            .iter()
            .zip(rhs.as_slice())
            .map(|(x, y)| f(x, y))
            .collect();
        Ok(NdArray::from_shape_vec_unchecked(self.shape.clone(), v))
    }

    /// Update `self` in place from `rhs`, element by element.
    ///
    /// **Errors** if the shapes differ.
    pub fn zip_mut_with<B, F>(&mut self, rhs: &NdArray<B>, mut f: F) -> NdResult<()>
    where
        B: Element,
        F: FnMut(&mut A, &B),
    {
        self.ensure_same_shape(rhs)?;
        for (x, y) in self.as_slice_mut().iter_mut().zip(rhs.as_slice()) {
            f(x, y);
        }
        Ok(())
    }

    pub(crate) fn ensure_same_shape<B: Element>(&self, rhs: &NdArray<B>) -> NdResult<()> {
        if self.shape != rhs.shape {
            return Err(incompatible_shapes(self.dims(), rhs.dims()));
        }
        Ok(())
    }

    /// Set every element to `x`.
    pub fn fill(&mut self, x: A) {
        self.map_inplace(move |elt| *elt = x.clone());
    }

    /// Set every element to zero.
    pub fn fill_zeros(&mut self)
    where
        A: Zero,
    {
        self.fill(A::zero())
    }

    /// Set every element to one.
    pub fn fill_ones(&mut self)
    where
        A: One,
    {
        self.fill(A::one())
    }
}

#[cfg(test)]
mod tests {
    use crate::{arange, nd, NdArray};

    #[test]
    fn transpose_3d_reverses_axes() {
        let a = arange(0, 24, 1).unwrap().into_shape((2, 3, 4)).unwrap();
        let t = a.transpose();
        assert_eq!(t.dims(), &[4, 3, 2]);
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    assert_eq!(a[[i, j, k]], t[[k, j, i]]);
                }
            }
        }
    }

    #[test]
    fn write_through_clone_copies() {
        let a = nd![1, 2, 3];
        let mut b = a.clone();
        b[0] = 9;
        assert_eq!(a, nd![1, 2, 3]);
        assert_eq!(b, nd![9, 2, 3]);
        assert!(a.is_unique());
    }

    #[test]
    fn resize_pads_and_truncates() {
        let mut a = nd![[1, 2], [3, 4]];
        a.resize((3, 2)).unwrap();
        assert_eq!(a.as_slice(), &[1, 2, 3, 4, 0, 0]);
        a.resize(3).unwrap();
        assert_eq!(a, nd![1, 2, 3]);
    }

    #[test]
    fn reshape_infer_rejects() {
        let mut a = NdArray::<u8>::zeros(6).unwrap();
        assert!(a.reshape_infer(&[-1, -1]).is_err());
        assert!(a.reshape_infer(&[-1, 4]).is_err());
        assert!(a.reshape_infer(&[2, -3]).is_err());
        a.reshape_infer(&[2, -1]).unwrap();
        assert_eq!(a.dims(), &[2, 3]);
    }

    #[test]
    fn item_and_ends() {
        assert_eq!(nd![5].item(), Ok(5));
        assert!(nd![1, 2].item().is_err());
        let a = nd![[1, 2], [3, 4]];
        assert_eq!(a.front(), Some(&1));
        assert_eq!(a.back(), Some(&4));
        assert_eq!(a.byte_strides(), vec![8, 4]);
    }
}

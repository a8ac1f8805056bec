// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::hash;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use crate::{Element, NdArray};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds(index: &[usize], shape: &[usize]) -> ! {
    panic!("ndnum: index {:?} is out of bounds for array of shape {:?}", index, shape);
}

/// Access the element at a flat, row-major offset.
///
/// **Panics** if the offset is out of bounds.
impl<A: Element> Index<usize> for NdArray<A> {
    type Output = A;
    #[inline]
    fn index(&self, i: usize) -> &A {
        &self.as_slice()[i]
    }
}

/// Access the element at a flat, row-major offset mutably.
///
/// **Panics** if the offset is out of bounds.
impl<A: Element> IndexMut<usize> for NdArray<A> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut A {
        &mut self.as_slice_mut()[i]
    }
}

/// Access the element at a multi-index.
///
/// **Panics** if the number of indices doesn't match the array or an index
/// is out of bounds.
impl<'a, A: Element> Index<&'a [usize]> for NdArray<A> {
    type Output = A;
    #[inline]
    fn index(&self, index: &[usize]) -> &A {
        match self.flat_index(index) {
            Ok(i) => &self.as_slice()[i],
            Err(_) => array_out_of_bounds(index, self.dims()),
        }
    }
}

impl<'a, A: Element> IndexMut<&'a [usize]> for NdArray<A> {
    #[inline]
    fn index_mut(&mut self, index: &[usize]) -> &mut A {
        match self.flat_index(index) {
            Ok(i) => &mut self.as_slice_mut()[i],
            Err(_) => array_out_of_bounds(index, self.dims()),
        }
    }
}

impl<A: Element, const N: usize> Index<[usize; N]> for NdArray<A> {
    type Output = A;
    #[inline]
    fn index(&self, index: [usize; N]) -> &A {
        &self[&index[..]]
    }
}

impl<A: Element, const N: usize> IndexMut<[usize; N]> for NdArray<A> {
    #[inline]
    fn index_mut(&mut self, index: [usize; N]) -> &mut A {
        &mut self[&index[..]]
    }
}

impl<A: Element> Clone for NdArray<A> {
    /// Shallow clone: the new array shares the buffer until either one is
    /// written to.
    fn clone(&self) -> NdArray<A> {
        NdArray {
            data: self.data.clone(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }
}

/// Return `true` if the array shapes and all elements of `self` and
/// `other` are equal. Return `false` otherwise.
impl<A, B> PartialEq<NdArray<B>> for NdArray<A>
where
    A: Element + PartialEq<B>,
    B: Element,
{
    fn eq(&self, other: &NdArray<B>) -> bool {
        self.shape() == other.shape() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<A> Eq for NdArray<A> where A: Element + Eq {}

impl<A> hash::Hash for NdArray<A>
where
    A: Element + hash::Hash,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

/// Create a one-dimensional array from the elements of an iterator.
impl<A: Element> FromIterator<A> for NdArray<A> {
    fn from_iter<I>(iterable: I) -> NdArray<A>
    where
        I: IntoIterator<Item = A>,
    {
        NdArray::from_vec(iterable.into_iter().collect())
    }
}

impl<'a, A: Element> IntoIterator for &'a NdArray<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A: Element> IntoIterator for &'a mut NdArray<A> {
    type Item = &'a mut A;
    type IntoIter = std::slice::IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<A: Element> IntoIterator for NdArray<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_raw_vec().into_iter()
    }
}

/// Create a one-dimensional array from a vector (no copying needed).
impl<A: Element> From<Vec<A>> for NdArray<A> {
    fn from(v: Vec<A>) -> Self {
        NdArray::from_vec(v)
    }
}

impl<'a, A: Element> From<&'a [A]> for NdArray<A> {
    fn from(xs: &'a [A]) -> Self {
        NdArray::from_vec(xs.to_vec())
    }
}

impl<A: Element, const N: usize> From<[A; N]> for NdArray<A> {
    fn from(xs: [A; N]) -> Self {
        NdArray::from_vec(Vec::from(xs))
    }
}

impl<A: Element> AsRef<[A]> for NdArray<A> {
    fn as_ref(&self) -> &[A] {
        self.as_slice()
    }
}

/// Create an empty one-dimensional array.
impl<A: Element> Default for NdArray<A> {
    fn default() -> Self {
        NdArray::from_vec(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::{nd, NdArray};

    #[test]
    #[should_panic]
    fn index_arity_panics() {
        let a = nd![[1, 2], [3, 4]];
        let _ = a[[1]];
    }

    #[test]
    fn equality_needs_same_shape() {
        let a = nd![1, 2, 3, 4];
        let b = a.clone().into_shape((2, 2)).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, NdArray::from(vec![1, 2, 3, 4]));
        assert_eq!(<NdArray<f64> as Default>::default().dims(), &[0]);
        let c: NdArray<i32> = (1..4).collect();
        assert_eq!(c, nd![1, 2, 3]);
    }

    #[test]
    fn equality_across_element_types() {
        let owned = NdArray::from(vec![String::from("x"), String::from("y")]);
        assert_eq!(owned, NdArray::from(vec!["x", "y"]));
        assert_ne!(owned, NdArray::from(vec!["x", "z"]));
        approx::assert_abs_diff_eq!(nd![[1., 2.], [3., 4.]], nd![[1., 2.], [3., 4. + 1e-12]], epsilon = 1e-9);
    }
}

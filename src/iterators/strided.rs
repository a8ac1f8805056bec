// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::marker::PhantomData;

use rawpointer::PointerExt;

/// Base for strided iterators: `len` elements starting at `ptr`, `stride`
/// elements apart.
pub(crate) struct Baseiter<A> {
    ptr: *mut A,
    stride: isize,
    index: usize,
    end: usize,
}

impl<A> Baseiter<A> {
    /// Creating a Baseiter is unsafe, because it can
    /// have any lifetime, be immut or mut, and the
    /// boundary and stride parameters need to be correct to
    /// avoid memory unsafety.
    ///
    /// It must be placed in the correct mother iterator to be safe.
    #[inline]
    pub(crate) unsafe fn new(ptr: *mut A, len: usize, stride: isize) -> Self {
        Baseiter {
            ptr,
            stride,
            index: 0,
            end: len,
        }
    }

    #[inline]
    fn next(&mut self) -> Option<*mut A> {
        if self.index >= self.end {
            return None;
        }
        let i = self.index;
        self.index += 1;
        unsafe { Some(self.ptr.stride_offset(self.stride, i)) }
    }

    #[inline]
    fn next_back(&mut self) -> Option<*mut A> {
        if self.index >= self.end {
            return None;
        }
        self.end -= 1;
        unsafe { Some(self.ptr.stride_offset(self.stride, self.end)) }
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<*mut A> {
        self.index = self.index.saturating_add(n).min(self.end);
        self.next()
    }

    #[inline]
    fn len(&self) -> usize {
        self.end - self.index
    }
}

impl<A> Clone for Baseiter<A> {
    fn clone(&self) -> Self {
        Baseiter { ..*self }
    }
}

macro_rules! strided_iterator {
    ($name:ident, $item:ty, $deref:ident) => {
        impl<'a, A> Iterator for $name<'a, A> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<$item> {
                self.inner.next().map(|p| unsafe { $deref(p) })
            }

            #[inline]
            fn nth(&mut self, n: usize) -> Option<$item> {
                self.inner.nth(n).map(|p| unsafe { $deref(p) })
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let len = self.inner.len();
                (len, Some(len))
            }
        }

        impl<'a, A> DoubleEndedIterator for $name<'a, A> {
            #[inline]
            fn next_back(&mut self) -> Option<$item> {
                self.inner.next_back().map(|p| unsafe { $deref(p) })
            }
        }

        impl<'a, A> ExactSizeIterator for $name<'a, A> {
            fn len(&self) -> usize {
                self.inner.len()
            }
        }
    };
}

#[inline(always)]
unsafe fn deref_ptr<'a, A>(p: *mut A) -> &'a A {
    &*p
}

#[inline(always)]
unsafe fn deref_ptr_mut<'a, A>(p: *mut A) -> &'a mut A {
    &mut *p
}

/// An iterator over one column of a matrix, top to bottom.
///
/// Iterator element type is `&'a A`.
pub struct ColIter<'a, A> {
    inner: Baseiter<A>,
    life: PhantomData<&'a A>,
}

impl<'a, A> ColIter<'a, A> {
    /// `xs` must hold at least `(len - 1) * stride + 1` elements.
    pub(crate) fn new(xs: &'a [A], len: usize, stride: usize) -> Self {
        debug_assert!(len == 0 || (len - 1) * stride < xs.len());
        ColIter {
            inner: unsafe { Baseiter::new(xs.as_ptr() as *mut A, len, stride as isize) },
            life: PhantomData,
        }
    }
}

impl<'a, A> Clone for ColIter<'a, A> {
    fn clone(&self) -> Self {
        ColIter {
            inner: self.inner.clone(),
            life: PhantomData,
        }
    }
}

strided_iterator!(ColIter, &'a A, deref_ptr);

/// A mutable iterator over one column of a matrix, top to bottom.
///
/// Iterator element type is `&'a mut A`.
pub struct ColIterMut<'a, A> {
    inner: Baseiter<A>,
    life: PhantomData<&'a mut A>,
}

impl<'a, A> ColIterMut<'a, A> {
    /// `xs` must hold at least `(len - 1) * stride + 1` elements and
    /// `stride` must be nonzero when `len > 1`.
    pub(crate) fn new(xs: &'a mut [A], len: usize, stride: usize) -> Self {
        debug_assert!(len == 0 || (len - 1) * stride < xs.len());
        debug_assert!(len <= 1 || stride > 0);
        ColIterMut {
            inner: unsafe { Baseiter::new(xs.as_mut_ptr(), len, stride as isize) },
            life: PhantomData,
        }
    }
}

strided_iterator!(ColIterMut, &'a mut A, deref_ptr_mut);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_walk() {
        let xs = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        let col: Vec<_> = ColIter::new(&xs[1..], 3, 3).cloned().collect();
        assert_eq!(col, vec![1, 4, 7]);
        let mut it = ColIter::new(&xs[..], 3, 3);
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back(), Some(&6));
        assert_eq!(it.nth(1), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(ColIter::new(&xs[..], 3, 3).nth(10), None);
    }

    #[test]
    fn column_write() {
        let mut xs = [0; 6];
        for (i, x) in ColIterMut::new(&mut xs[1..], 3, 2).enumerate() {
            *x = i + 1;
        }
        assert_eq!(xs, [0, 1, 0, 2, 0, 3]);
    }
}

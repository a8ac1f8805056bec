// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::sync::Arc;

/// Array storage: a reference counted, contiguous buffer.
///
/// Cloning only bumps the reference count. Mutable access goes through
/// `make_mut`, which copies the buffer first if it is shared, so handles
/// that alias one buffer never observe each other's writes.
#[derive(Debug)]
pub(crate) struct SharedRepr<A>(Arc<Vec<A>>);

impl<A> SharedRepr<A> {
    pub(crate) fn from_vec(v: Vec<A>) -> Self {
        SharedRepr(Arc::new(v))
    }

    pub(crate) fn from_arc(v: Arc<Vec<A>>) -> Self {
        SharedRepr(v)
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[A] {
        &self.0
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff the inner `Arc` is not shared.
    pub(crate) fn is_unique(&self) -> bool {
        Arc::strong_count(&self.0) == 1
    }

    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn into_arc(self) -> Arc<Vec<A>> {
        self.0
    }
}

impl<A: Clone> SharedRepr<A> {
    /// Mutable access to the elements, copying the buffer if it is shared.
    #[inline]
    pub(crate) fn make_mut(&mut self) -> &mut Vec<A> {
        Arc::make_mut(&mut self.0)
    }

    pub(crate) fn into_vec(self) -> Vec<A> {
        Arc::try_unwrap(self.0).unwrap_or_else(|shared| (*shared).clone())
    }

    /// An unshared copy of the elements.
    pub(crate) fn deep_copy(&self) -> Self {
        SharedRepr::from_vec(self.0.to_vec())
    }
}

impl<A> Clone for SharedRepr<A> {
    fn clone(&self) -> Self {
        SharedRepr(Arc::clone(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::SharedRepr;

    #[test]
    fn copy_on_write() {
        let a = SharedRepr::from_vec(vec![1, 2, 3]);
        let mut b = a.clone();
        assert!(!a.is_unique());
        assert!(a.ptr_eq(&b));
        b.make_mut()[0] = 10;
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[10, 2, 3]);
        assert!(a.is_unique() && b.is_unique());
        assert_eq!(b.into_vec(), vec![10, 2, 3]);
    }
}

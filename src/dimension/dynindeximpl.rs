// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

const CAP: usize = 4;

/// Storage for a list of dimension sizes or strides.
///
/// Short lists (the common 1-d, 2-d and 3-d case) are stored inline and
/// don't need any dynamic memory allocation.
#[derive(Debug)]
pub(crate) enum IxVec {
    Inline(u32, [usize; CAP]),
    Alloc(Box<[usize]>),
}

impl Deref for IxVec {
    type Target = [usize];
    fn deref(&self) -> &[usize] {
        match *self {
            IxVec::Inline(len, ref ar) => {
                debug_assert!(len as usize <= ar.len());
                &ar[..len as usize]
            }
            IxVec::Alloc(ref ar) => ar,
        }
    }
}

impl DerefMut for IxVec {
    fn deref_mut(&mut self) -> &mut [usize] {
        match *self {
            IxVec::Inline(len, ref mut ar) => {
                debug_assert!(len as usize <= ar.len());
                &mut ar[..len as usize]
            }
            IxVec::Alloc(ref mut ar) => ar,
        }
    }
}

impl IxVec {
    pub(crate) fn copy_from(x: &[usize]) -> Self {
        if x.len() <= CAP {
            let mut arr = [0; CAP];
            arr[..x.len()].copy_from_slice(x);
            IxVec::Inline(x.len() as u32, arr)
        } else {
            IxVec::Alloc(x.to_vec().into_boxed_slice())
        }
    }

    /// A list of `n` zeros.
    pub(crate) fn zeros(n: usize) -> Self {
        if n <= CAP {
            IxVec::Inline(n as u32, [0; CAP])
        } else {
            IxVec::Alloc(vec![0; n].into_boxed_slice())
        }
    }

    pub(crate) fn from_vec(v: Vec<usize>) -> Self {
        if v.len() <= CAP {
            Self::copy_from(&v)
        } else {
            IxVec::Alloc(v.into_boxed_slice())
        }
    }
}

impl Clone for IxVec {
    fn clone(&self) -> Self {
        match *self {
            IxVec::Inline(len, arr) => IxVec::Inline(len, arr),
            _ => Self::copy_from(self),
        }
    }
}

impl Eq for IxVec {}

impl PartialEq for IxVec {
    fn eq(&self, rhs: &Self) -> bool {
        self[..] == rhs[..]
    }
}

impl Hash for IxVec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&self[..], state)
    }
}

#[cfg(test)]
mod tests {
    use super::IxVec;

    #[test]
    fn inline_and_alloc_compare_by_content() {
        let a = IxVec::copy_from(&[1, 2, 3]);
        assert!(matches!(a, IxVec::Inline(3, _)));
        let b = IxVec::from_vec(vec![1, 2, 3]);
        assert_eq!(a, b);
        let c = IxVec::copy_from(&[1, 2, 3, 4, 5]);
        assert!(matches!(c, IxVec::Alloc(_)));
        assert_eq!(&c[..], &[1, 2, 3, 4, 5]);
        assert_eq!(&IxVec::zeros(6)[..], &[0; 6]);
    }
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Element, NdArray};

impl<A: Element> NdArray<A> {
    /// A test for equality that uses the elementwise absolute difference to
    /// compute the approximate equality of two arrays.
    pub fn abs_diff_eq<B>(&self, other: &NdArray<B>, epsilon: A::Epsilon) -> bool
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
        B: Element,
    {
        <Self as AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
    }

    /// A test for equality that uses an elementwise relative comparison if
    /// the values are far apart; and the absolute difference otherwise.
    pub fn relative_eq<B>(&self, other: &NdArray<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
        B: Element,
    {
        <Self as RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
    }
}

/// Arrays of different shapes are never equal.
impl<A, B> AbsDiffEq<NdArray<B>> for NdArray<A>
where
    A: Element + AbsDiffEq<B>,
    A::Epsilon: Clone,
    B: Element,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &NdArray<B>, epsilon: A::Epsilon) -> bool {
        if self.dims() != other.dims() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

impl<A, B> RelativeEq<NdArray<B>> for NdArray<A>
where
    A: Element + RelativeEq<B>,
    A::Epsilon: Clone,
    B: Element,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &NdArray<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
        if self.dims() != other.dims() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
    }
}

impl<A, B> UlpsEq<NdArray<B>> for NdArray<A>
where
    A: Element + UlpsEq<B>,
    A::Epsilon: Clone,
    B: Element,
{
    fn default_max_ulps() -> u32 {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &NdArray<B>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
        if self.dims() != other.dims() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use crate::nd;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq};

    #[test]
    fn abs_diff_eq() {
        let a = nd![[0., 2.], [-0.5, 100000000.]];
        let mut b = nd![[0., 1.], [-0.5, 100000000.]];
        assert_abs_diff_ne!(a, b);
        b[[0, 1]] = 2.;
        assert_abs_diff_eq!(a, b);

        // Check epsilon.
        assert_abs_diff_eq!(nd![0.0f32], nd![1e-40f32], epsilon = 1e-40f32);
        assert_abs_diff_ne!(nd![0.0f32], nd![1e-40f32], epsilon = 1e-41f32);

        // Make sure we can compare different shapes without failure.
        let c = nd![[1., 2.]];
        assert_abs_diff_ne!(a, c);
    }

    #[test]
    fn relative_and_ulps() {
        let a = nd![1.0, 2.0];
        let b = nd![1.0 + 1e-12, 2.0];
        assert_relative_eq!(a, b, max_relative = 1e-10);
        assert_ulps_eq!(a, a.clone());
        assert!(a.relative_eq(&b, 1e-15, 1e-10));
        assert!(!a.abs_diff_eq(&b, 1e-15));
    }
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::Float;

/// An iterator of a sequence of evenly spaced floats.
///
/// Iterator element type is `F`.
pub(crate) struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

#[inline]
fn float_of<F: Float>(i: usize) -> F {
    F::from(i).unwrap_or_else(F::nan)
}

impl<F> Iterator for Linspace<F>
where
    F: Float,
{
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * float_of(i))
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F> DoubleEndedIterator for Linspace<F>
where
    F: Float,
{
    #[inline]
    fn next_back(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            self.len -= 1;
            let i = self.len;
            Some(self.start + self.step * float_of(i))
        }
    }
}

impl<F> ExactSizeIterator for Linspace<F> where Linspace<F>: Iterator {}

/// Return an iterator of `n` evenly spaced floats from `a` to `b`.
///
/// With `endpoint`, `b` is the last element; otherwise the interval is
/// divided into `n` steps and `b` is left out.
#[inline]
pub(crate) fn linspace<F>(a: F, b: F, n: usize, endpoint: bool) -> Linspace<F>
where
    F: Float,
{
    let divisor = if endpoint { n.saturating_sub(1) } else { n };
    let step = if divisor > 0 {
        (b - a) / float_of(divisor)
    } else {
        F::zero()
    };
    Linspace {
        start: a,
        step,
        index: 0,
        len: n,
    }
}

/// Return an iterator of `n` floats `base^x` where `x` is evenly spaced
/// from `a` to `b` (inclusive).
#[inline]
pub(crate) fn logspace<F>(base: F, a: F, b: F, n: usize) -> impl DoubleEndedIterator<Item = F> + ExactSizeIterator
where
    F: Float,
{
    linspace(a, b, n, true).map(move |x| base.powf(x))
}

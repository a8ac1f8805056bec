// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_integer::Integer;

use crate::error::NdResult;
use crate::{Element, NdArray};

/// Element-wise greatest common divisor.
///
/// **Errors** if the shapes differ.
pub fn gcd<A>(a: &NdArray<A>, b: &NdArray<A>) -> NdResult<NdArray<A>>
where
    A: Element + Integer,
{
    a.zip_with(b, |x, y| x.gcd(y))
}

/// Element-wise least common multiple.
///
/// **Errors** if the shapes differ.
pub fn lcm<A>(a: &NdArray<A>, b: &NdArray<A>) -> NdResult<NdArray<A>>
where
    A: Element + Integer,
{
    a.zip_with(b, |x, y| x.lcm(y))
}

/// Greatest common divisor of all elements; zero for an empty array.
///
/// ```
/// use ndnum::{gcd_of, nd};
///
/// assert_eq!(gcd_of(&nd![12, 18, 30]), 6);
/// ```
pub fn gcd_of<A>(a: &NdArray<A>) -> A
where
    A: Element + Integer,
{
    a.iter().fold(A::zero(), |acc, x| acc.gcd(x))
}

/// Least common multiple of all elements; one for an empty array.
pub fn lcm_of<A>(a: &NdArray<A>) -> A
where
    A: Element + Integer,
{
    a.iter().fold(A::one(), |acc, x| acc.lcm(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;

    #[test]
    fn gcd_lcm() {
        assert_eq!(gcd(&nd![4, 9], &nd![6, 12]).unwrap(), nd![2, 3]);
        assert_eq!(lcm(&nd![4, 9], &nd![6, 12]).unwrap(), nd![12, 36]);
        assert_eq!(lcm_of(&nd![2u64, 3, 4]), 12);
        assert_eq!(gcd_of(&NdArray::<i32>::zeros(0).unwrap()), 0);
    }
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Element-wise methods for float arrays

use num_traits::Float;

use crate::error::NdResult;
use crate::{Element, NdArray};

macro_rules! boolean_ops {
    ($(#[$meta1:meta])* fn $func:ident
    $(#[$meta2:meta])* fn $all:ident
    $(#[$meta3:meta])* fn $any:ident) => {
        $(#[$meta1])*
        #[must_use = "method returns a new array and does not mutate the original value"]
        pub fn $func(&self) -> NdArray<bool> {
            self.mapv(A::$func)
        }
        $(#[$meta2])*
        #[must_use = "method returns a new boolean value and does not mutate the original value"]
        pub fn $all(&self) -> bool {
            self.iter().all(|&elt| elt.$func())
        }
        $(#[$meta3])*
        #[must_use = "method returns a new boolean value and does not mutate the original value"]
        pub fn $any(&self) -> bool {
            self.iter().any(|&elt| elt.$func())
        }
    };
}

macro_rules! unary_ops {
    ($($(#[$meta:meta])* fn $id:ident)+) => {
        $($(#[$meta])*
        #[must_use = "method returns a new array and does not mutate the original value"]
        pub fn $id(&self) -> NdArray<A> {
            self.mapv(A::$id)
        })+
    };
}

macro_rules! binary_ops {
    ($($(#[$meta:meta])* fn $id:ident($ty:ty))+) => {
        $($(#[$meta])*
        #[must_use = "method returns a new array and does not mutate the original value"]
        pub fn $id(&self, rhs: $ty) -> NdArray<A> {
            self.mapv(|v| A::$id(v, rhs))
        })+
    };
}

/// # Element-wise methods for float arrays
///
/// Element-wise math functions for any array that contains float numbers.
impl<A> NdArray<A>
where
    A: Element + Float,
{
    boolean_ops! {
        /// If the number is `NaN` (not a number), then `true` is returned for each element.
        fn is_nan
        /// Return `true` if all elements are `NaN` (not a number).
        fn is_all_nan
        /// Return `true` if any element is `NaN` (not a number).
        fn is_any_nan
    }
    boolean_ops! {
        /// If the number is infinity, then `true` is returned for each element.
        fn is_infinite
        /// Return `true` if all elements are infinity.
        fn is_all_infinite
        /// Return `true` if any element is infinity.
        fn is_any_infinite
    }
    unary_ops! {
        /// The largest integer less than or equal to each element.
        fn floor
        /// The smallest integer greater than or equal to each element.
        fn ceil
        /// The nearest integer of each element.
        fn round
        /// The integer part of each element.
        fn trunc
        /// The fractional part of each element.
        fn fract
        /// Absolute of each element.
        fn abs
        /// Sign number of each element.
        ///
        /// + `1.0` for all positive numbers.
        /// + `-1.0` for all negative numbers.
        /// + `NaN` for all `NaN` (not a number).
        fn signum
        /// The reciprocal (inverse) of each element, `1/x`.
        fn recip
        /// Square root of each element.
        fn sqrt
        /// `e^x` of each element (exponential function).
        fn exp
        /// `2^x` of each element.
        fn exp2
        /// Natural logarithm of each element.
        fn ln
        /// Base 2 logarithm of each element.
        fn log2
        /// Base 10 logarithm of each element.
        fn log10
        /// Cubic root of each element.
        fn cbrt
        /// Sine of each element (in radians).
        fn sin
        /// Cosine of each element (in radians).
        fn cos
        /// Tangent of each element (in radians).
        fn tan
        /// Inverse sine of each element.
        fn asin
        /// Inverse cosine of each element.
        fn acos
        /// Inverse tangent of each element.
        fn atan
        /// Converts radians to degrees for each element.
        fn to_degrees
        /// Converts degrees to radians for each element.
        fn to_radians
    }
    binary_ops! {
        /// Integer power of each element.
        ///
        /// This function is generally faster than using float power.
        fn powi(i32)
        /// Float power of each element.
        fn powf(A)
        /// Logarithm of each element with respect to an arbitrary base.
        fn log(A)
    }

    /// Square (two powers) of each element.
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn pow2(&self) -> NdArray<A> {
        self.mapv(|v: A| v * v)
    }

    /// Round each element to `decimals` decimal places.
    ///
    /// ```
    /// use ndnum::nd;
    ///
    /// assert_eq!(nd![1.2345, -2.5551].round_to(2), nd![1.23, -2.56]);
    /// ```
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn round_to(&self, decimals: i32) -> NdArray<A> {
        let scale = A::from(10.).map_or(A::one(), |ten| ten.powi(decimals));
        self.mapv(|v| (v * scale).round() / scale)
    }

    /// `sqrt(x² + y²)` of the elements of two arrays.
    ///
    /// **Errors** if the shapes differ.
    pub fn hypot(&self, rhs: &NdArray<A>) -> NdResult<NdArray<A>> {
        self.zip_with(rhs, |&x, &y| x.hypot(y))
    }

    /// Four quadrant arctangent of `self / rhs`.
    ///
    /// **Errors** if the shapes differ.
    pub fn atan2(&self, rhs: &NdArray<A>) -> NdResult<NdArray<A>> {
        self.zip_with(rhs, |&y, &x| y.atan2(x))
    }
}

impl<A> NdArray<A>
where
    A: Element + PartialOrd,
{
    /// Limit the values for each element, similar to NumPy's `clip` function.
    ///
    /// ```
    /// use ndnum::nd;
    ///
    /// let a = nd![0., 1., 2., 3., 4., 5., 6., 7., 8., 9.];
    /// assert_eq!(a.clip(1., 8.), nd![1., 1., 2., 3., 4., 5., 6., 7., 8., 8.]);
    /// assert_eq!(a.clip(3., 6.), nd![3., 3., 3., 3., 4., 5., 6., 6., 6., 6.]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `min > max`, `min` is `NaN`, or `max` is `NaN`.
    pub fn clip(&self, min: A, max: A) -> NdArray<A> {
        assert!(min <= max, "min must be less than or equal to max");
        self.mapv(|v| {
            if v < min {
                min.clone()
            } else if v > max {
                max.clone()
            } else {
                v
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::nd;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unary_and_binary() {
        let a = nd![1., 4., 9.];
        assert_eq!(a.sqrt(), nd![1., 2., 3.]);
        assert_eq!(a.powi(2), nd![1., 16., 81.]);
        assert_abs_diff_eq!(a.ln().exp(), a, epsilon = 1e-12);
        assert_eq!(nd![3.].hypot(&nd![4.]).unwrap(), nd![5.]);
        assert!(nd![1.].hypot(&nd![1., 2.]).is_err());
    }

    #[test]
    fn nan_checks() {
        let a = nd![1., f64::NAN];
        assert_eq!(a.is_nan(), nd![false, true]);
        assert!(a.is_any_nan());
        assert!(!a.is_all_nan());
        assert!(!a.is_any_infinite());
    }
}

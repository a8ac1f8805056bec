// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Checked element-wise arithmetic and comparisons.
//!
//! The operator impls panic on a shape mismatch; these return the error.
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Rem, Sub};

use num_traits::Float;

use crate::error::NdResult;
use crate::{Element, NdArray};

macro_rules! checked_binary_op {
    ($($(#[$meta:meta])* fn $name:ident = $trt:ident::$mth:ident;)+) => {
        $(
        $(#[$meta])*
        ///
        /// **Errors** with `InvalidArgument` if the shapes differ.
        pub fn $name<A>(a: &NdArray<A>, b: &NdArray<A>) -> NdResult<NdArray<A>>
        where
            A: Element + $trt<Output = A>,
        {
            a.zip_with(b, |x, y| x.clone().$mth(y.clone()))
        }
        )+
    };
}

checked_binary_op! {
    /// Element-wise `a + b`.
    fn add = Add::add;
    /// Element-wise `a - b`.
    fn subtract = Sub::sub;
    /// Element-wise `a * b`.
    fn multiply = Mul::mul;
    /// Element-wise `a / b`.
    fn divide = Div::div;
    /// Element-wise `a % b`.
    fn remainder = Rem::rem;
    /// Element-wise `a & b`.
    fn bitwise_and = BitAnd::bitand;
    /// Element-wise `a | b`.
    fn bitwise_or = BitOr::bitor;
    /// Element-wise `a ^ b`.
    fn bitwise_xor = BitXor::bitxor;
}

macro_rules! comparison_op {
    ($($(#[$meta:meta])* fn $name:ident($bound:ident) = $op:tt;)+) => {
        $(
        $(#[$meta])*
        ///
        /// **Errors** with `InvalidArgument` if the shapes differ.
        pub fn $name<A>(a: &NdArray<A>, b: &NdArray<A>) -> NdResult<NdArray<bool>>
        where
            A: Element + $bound,
        {
            a.zip_with(b, |x, y| x $op y)
        }
        )+
    };
}

comparison_op! {
    /// `true` where `a == b`.
    fn equal(PartialEq) = ==;
    /// `true` where `a != b`.
    fn not_equal(PartialEq) = !=;
    /// `true` where `a < b`.
    fn less(PartialOrd) = <;
    /// `true` where `a <= b`.
    fn less_equal(PartialOrd) = <=;
    /// `true` where `a > b`.
    fn greater(PartialOrd) = >;
    /// `true` where `a >= b`.
    fn greater_equal(PartialOrd) = >=;
}

/// `true` where `|a - b| <= atol + rtol * |b|`.
///
/// ```
/// use ndnum::{isclose, nd};
///
/// let a = nd![1.0, 1e-9, 2.0];
/// let b = nd![1.0 + 1e-10, 0.0, 2.1];
/// assert_eq!(isclose(&a, &b, 1e-5, 1e-8).unwrap(), nd![true, true, false]);
/// ```
pub fn isclose<A>(a: &NdArray<A>, b: &NdArray<A>, rtol: A, atol: A) -> NdResult<NdArray<bool>>
where
    A: Element + Float,
{
    a.zip_with(b, |&x, &y| (x - y).abs() <= atol + rtol * y.abs())
}

/// `true` if every element of `a` is within `tolerance` of the matching
/// element of `b`.
///
/// **Errors** if the shapes differ.
pub fn allclose<A>(a: &NdArray<A>, b: &NdArray<A>, tolerance: A) -> NdResult<bool>
where
    A: Element + Float,
{
    a.ensure_same_shape(b)?;
    Ok(a.iter().zip(b.iter()).all(|(&x, &y)| (x - y).abs() < tolerance))
}

/// `true` if both arrays have the same shape and elements.
pub fn array_equal<A>(a: &NdArray<A>, b: &NdArray<A>) -> bool
where
    A: Element + PartialEq,
{
    a == b
}

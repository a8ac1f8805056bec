// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_complex::Complex;

use crate::{Element, NdArray};

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array `a`,
/// arithmetic like `a + 1.0`, and, `a * 2.`, and `a += 3.` are allowed.
///
/// `ScalarOperand` determines for which scalars `K` operations `&A @ K`, and
/// `A @ K`, and `A @= K` are defined, as ***right hand side operands***, for
/// applicable arithmetic operators (denoted `@`).
///
/// ***Left hand side*** scalar operands are not related to this trait
/// (they need one `impl` per concrete scalar type); but they are still
/// implemented for the same types, allowing operations
/// `K @ &A`, and `K @ A` for primitive numeric types `K`.
///
/// This trait ***does not*** limit which elements can be stored in an array in general.
/// Non-`ScalarOperand` types can still participate in arithmetic as array elements in
/// in array-array operations.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for bool {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for i128 {}
impl ScalarOperand for u128 {}
impl ScalarOperand for isize {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}
impl ScalarOperand for Complex<f32> {}
impl ScalarOperand for Complex<f64> {}

macro_rules! impl_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`,
/// and return the result, reusing the buffer of `self`.
///
/// **Panics** if the shapes differ; the checked variant is the free
/// function of the same name.
impl<A, B> $trt<NdArray<B>> for NdArray<A>
where
    A: Element + $trt<B, Output=A>,
    B: Element,
{
    type Output = NdArray<A>;
    fn $mth(self, rhs: NdArray<B>) -> NdArray<A>
    {
        self.$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and reference `rhs`,
/// and return the result, reusing the buffer of `self`.
///
/// **Panics** if the shapes differ.
impl<'a, A, B> $trt<&'a NdArray<B>> for NdArray<A>
where
    A: Element + $trt<B, Output=A>,
    B: Element,
{
    type Output = NdArray<A>;
    fn $mth(mut self, rhs: &NdArray<B>) -> NdArray<A>
    {
        expect_nd!(self.zip_mut_with(rhs, clone_iopf(A::$mth)));
        self
    }
}

/// Perform elementwise
#[doc=$doc]
/// between reference `self` and `rhs`,
/// and return the result, reusing the buffer of `rhs`.
///
/// **Panics** if the shapes differ.
impl<'a, A, B> $trt<NdArray<B>> for &'a NdArray<A>
where
    A: Element + $trt<B, Output=B>,
    B: Element,
{
    type Output = NdArray<B>;
    fn $mth(self, mut rhs: NdArray<B>) -> NdArray<B>
    {
        expect_nd!(rhs.zip_mut_with(self, clone_iopf_rev(A::$mth)));
        rhs
    }
}

/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`,
/// and return the result as a new array.
///
/// **Panics** if the shapes differ.
impl<'a, A, B> $trt<&'a NdArray<B>> for &'a NdArray<A>
where
    A: Element + $trt<B, Output=A>,
    B: Element,
{
    type Output = NdArray<A>;
    fn $mth(self, rhs: &'a NdArray<B>) -> NdArray<A> {
        expect_nd!(self.zip_with(rhs, clone_opf(A::$mth)))
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and the scalar `x`,
/// and return the result (based on `self`).
impl<A, B> $trt<B> for NdArray<A>
    where A: Element + $trt<B, Output=A>,
          B: ScalarOperand,
{
    type Output = NdArray<A>;
    fn $mth(mut self, x: B) -> NdArray<A> {
        self.map_inplace(move |elt| {
            *elt = elt.clone() $operator x.clone();
        });
        self
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the reference `self` and the scalar `x`,
/// and return the result as a new array.
impl<'a, A, B> $trt<B> for &'a NdArray<A>
    where A: Element + $trt<B, Output=A>,
          B: ScalarOperand,
{
    type Output = NdArray<A>;
    fn $mth(self, x: B) -> NdArray<A> {
        self.map(move |elt| elt.clone() $operator x.clone())
    }
}
    );
);

// Pick the expression $a for commutative and $b for ordered binop
macro_rules! if_commutative {
    (Commute { $a:expr } or { $b:expr }) => {
        $a
    };
    (Ordered { $a:expr } or { $b:expr }) => {
        $b
    };
}

macro_rules! impl_scalar_lhs_op {
    // $commutative flag. Reuse the self + scalar impl if we can.
    // We can do this safely since these are the primitive numeric types
    ($scalar:ty, $commutative:ident, $operator:tt, $trt:ident, $mth:ident, $doc:expr) => (
// these have no doc -- they are not visible in rustdoc
// Perform elementwise
// between the scalar `self` and array `rhs`,
// and return the result (based on `rhs`).
impl $trt<NdArray<$scalar>> for $scalar {
    type Output = NdArray<$scalar>;
    fn $mth(self, rhs: NdArray<$scalar>) -> NdArray<$scalar> {
        if_commutative!($commutative {
            rhs.$mth(self)
        } or {{
            let mut rhs = rhs;
            rhs.map_inplace(move |elt| {
                *elt = self $operator *elt;
            });
            rhs
        }})
    }
}

// Perform elementwise
// between the scalar `self` and array `rhs`,
// and return the result as a new array.
impl<'a> $trt<&'a NdArray<$scalar>> for $scalar {
    type Output = NdArray<$scalar>;
    fn $mth(self, rhs: &NdArray<$scalar>) -> NdArray<$scalar> {
        if_commutative!($commutative {
            rhs.$mth(self)
        } or {
            rhs.map(move |elt| self.clone() $operator elt.clone())
        })
    }
}
    );
}

mod arithmetic_ops {
    use super::*;

    use num_complex::Complex;
    use std::ops::*;

    fn clone_opf<A: Clone, B: Clone, C>(f: impl Fn(A, B) -> C) -> impl FnMut(&A, &B) -> C {
        move |x, y| f(x.clone(), y.clone())
    }

    fn clone_iopf<A: Clone, B: Clone>(f: impl Fn(A, B) -> A) -> impl FnMut(&mut A, &B) {
        move |x, y| *x = f(x.clone(), y.clone())
    }

    fn clone_iopf_rev<A: Clone, B: Clone>(f: impl Fn(A, B) -> B) -> impl FnMut(&mut B, &A) {
        move |x, y| *x = f(y.clone(), x.clone())
    }

    impl_binary_op!(Add, +, add, "addition");
    impl_binary_op!(Sub, -, sub, "subtraction");
    impl_binary_op!(Mul, *, mul, "multiplication");
    impl_binary_op!(Div, /, div, "division");
    impl_binary_op!(Rem, %, rem, "remainder");
    impl_binary_op!(BitAnd, &, bitand, "bit and");
    impl_binary_op!(BitOr, |, bitor, "bit or");
    impl_binary_op!(BitXor, ^, bitxor, "bit xor");
    impl_binary_op!(Shl, <<, shl, "left shift");
    impl_binary_op!(Shr, >>, shr, "right shift");

    macro_rules! all_scalar_ops {
        ($int_scalar:ty) => (
            impl_scalar_lhs_op!($int_scalar, Commute, +, Add, add, "addition");
            impl_scalar_lhs_op!($int_scalar, Ordered, -, Sub, sub, "subtraction");
            impl_scalar_lhs_op!($int_scalar, Commute, *, Mul, mul, "multiplication");
            impl_scalar_lhs_op!($int_scalar, Ordered, /, Div, div, "division");
            impl_scalar_lhs_op!($int_scalar, Ordered, %, Rem, rem, "remainder");
            impl_scalar_lhs_op!($int_scalar, Commute, &, BitAnd, bitand, "bit and");
            impl_scalar_lhs_op!($int_scalar, Commute, |, BitOr, bitor, "bit or");
            impl_scalar_lhs_op!($int_scalar, Commute, ^, BitXor, bitxor, "bit xor");
        );
    }
    all_scalar_ops!(i8);
    all_scalar_ops!(u8);
    all_scalar_ops!(i16);
    all_scalar_ops!(u16);
    all_scalar_ops!(i32);
    all_scalar_ops!(u32);
    all_scalar_ops!(i64);
    all_scalar_ops!(u64);
    all_scalar_ops!(isize);
    all_scalar_ops!(usize);

    impl_scalar_lhs_op!(bool, Commute, &, BitAnd, bitand, "bit and");
    impl_scalar_lhs_op!(bool, Commute, |, BitOr, bitor, "bit or");
    impl_scalar_lhs_op!(bool, Commute, ^, BitXor, bitxor, "bit xor");

    impl_scalar_lhs_op!(f32, Commute, +, Add, add, "addition");
    impl_scalar_lhs_op!(f32, Ordered, -, Sub, sub, "subtraction");
    impl_scalar_lhs_op!(f32, Commute, *, Mul, mul, "multiplication");
    impl_scalar_lhs_op!(f32, Ordered, /, Div, div, "division");
    impl_scalar_lhs_op!(f32, Ordered, %, Rem, rem, "remainder");

    impl_scalar_lhs_op!(f64, Commute, +, Add, add, "addition");
    impl_scalar_lhs_op!(f64, Ordered, -, Sub, sub, "subtraction");
    impl_scalar_lhs_op!(f64, Commute, *, Mul, mul, "multiplication");
    impl_scalar_lhs_op!(f64, Ordered, /, Div, div, "division");
    impl_scalar_lhs_op!(f64, Ordered, %, Rem, rem, "remainder");

    impl_scalar_lhs_op!(Complex<f64>, Commute, +, Add, add, "addition");
    impl_scalar_lhs_op!(Complex<f64>, Ordered, -, Sub, sub, "subtraction");
    impl_scalar_lhs_op!(Complex<f64>, Commute, *, Mul, mul, "multiplication");
    impl_scalar_lhs_op!(Complex<f64>, Ordered, /, Div, div, "division");

    impl<A> Neg for NdArray<A>
    where
        A: Element + Neg<Output = A>,
    {
        type Output = Self;
        /// Perform an elementwise negation of `self` and return the result.
        fn neg(mut self) -> Self {
            self.map_inplace(|elt| {
                *elt = -elt.clone();
            });
            self
        }
    }

    impl<'a, A> Neg for &'a NdArray<A>
    where
        A: Element,
        &'a A: 'a + Neg<Output = A>,
    {
        type Output = NdArray<A>;
        /// Perform an elementwise negation of reference `self` and return the
        /// result as a new array.
        fn neg(self) -> NdArray<A> {
            self.map(Neg::neg)
        }
    }

    impl<A> Not for NdArray<A>
    where
        A: Element + Not<Output = A>,
    {
        type Output = Self;
        /// Perform an elementwise unary not of `self` and return the result.
        fn not(mut self) -> Self {
            self.map_inplace(|elt| {
                *elt = !elt.clone();
            });
            self
        }
    }

    impl<'a, A> Not for &'a NdArray<A>
    where
        A: Element,
        &'a A: 'a + Not<Output = A>,
    {
        type Output = NdArray<A>;
        /// Perform an elementwise unary not of reference `self` and return the
        /// result as a new array.
        fn not(self) -> NdArray<A> {
            self.map(Not::not)
        }
    }
}

mod assign_ops {
    use super::*;

    macro_rules! impl_assign_op {
        ($trt:ident, $method:ident, $doc:expr) => {
            use std::ops::$trt;

            #[doc=$doc]
            /// **Panics** if the shapes differ.
            impl<'a, A> $trt<&'a NdArray<A>> for NdArray<A>
            where
                A: Element + $trt<A>,
            {
                fn $method(&mut self, rhs: &NdArray<A>) {
                    expect_nd!(self.zip_mut_with(rhs, |x, y| {
                        x.$method(y.clone());
                    }));
                }
            }

            #[doc=$doc]
            impl<A> $trt<A> for NdArray<A>
            where
                A: Element + ScalarOperand + $trt<A>,
            {
                fn $method(&mut self, rhs: A) {
                    self.map_inplace(move |elt| {
                        elt.$method(rhs.clone());
                    });
                }
            }
        };
    }

    impl_assign_op!(
        AddAssign,
        add_assign,
        "Perform `self += rhs` as elementwise addition (in place).\n"
    );
    impl_assign_op!(
        SubAssign,
        sub_assign,
        "Perform `self -= rhs` as elementwise subtraction (in place).\n"
    );
    impl_assign_op!(
        MulAssign,
        mul_assign,
        "Perform `self *= rhs` as elementwise multiplication (in place).\n"
    );
    impl_assign_op!(
        DivAssign,
        div_assign,
        "Perform `self /= rhs` as elementwise division (in place).\n"
    );
    impl_assign_op!(
        RemAssign,
        rem_assign,
        "Perform `self %= rhs` as elementwise remainder (in place).\n"
    );
    impl_assign_op!(
        BitAndAssign,
        bitand_assign,
        "Perform `self &= rhs` as elementwise bit and (in place).\n"
    );
    impl_assign_op!(
        BitOrAssign,
        bitor_assign,
        "Perform `self |= rhs` as elementwise bit or (in place).\n"
    );
    impl_assign_op!(
        BitXorAssign,
        bitxor_assign,
        "Perform `self ^= rhs` as elementwise bit xor (in place).\n"
    );
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_complex::Complex;
use num_traits::Float;

use crate::{Element, NdArray};

/// Real parts.
pub fn real<T>(a: &NdArray<Complex<T>>) -> NdArray<T>
where
    T: Element + Float,
{
    a.map(|z| z.re)
}

/// Imaginary parts.
pub fn imag<T>(a: &NdArray<Complex<T>>) -> NdArray<T>
where
    T: Element + Float,
{
    a.map(|z| z.im)
}

/// Complex conjugates.
pub fn conj<T>(a: &NdArray<Complex<T>>) -> NdArray<Complex<T>>
where
    T: Element + Float,
{
    a.map(Complex::conj)
}

/// Argument (phase angle) in radians, in `(-π, π]`.
///
/// ```
/// use ndnum::{angle, NdArray};
/// use num_complex::Complex;
///
/// let a = NdArray::from(vec![Complex::new(0., 1.), Complex::new(-1., 0.)]);
/// let t = angle(&a);
/// assert_eq!(t[0], std::f64::consts::FRAC_PI_2);
/// assert_eq!(t[1], std::f64::consts::PI);
/// ```
pub fn angle<T>(a: &NdArray<Complex<T>>) -> NdArray<T>
where
    T: Element + Float,
{
    a.map(|z| z.arg())
}

/// Modulus `|z|`.
pub fn complex_abs<T>(a: &NdArray<Complex<T>>) -> NdArray<T>
where
    T: Element + Float,
{
    a.map(|z| z.norm())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_and_modulus() {
        let a = NdArray::from(vec![Complex::new(3., 4.), Complex::new(1., -1.)]);
        assert_eq!(real(&a), NdArray::from(vec![3., 1.]));
        assert_eq!(imag(&a), NdArray::from(vec![4., -1.]));
        assert_eq!(complex_abs(&a)[0], 5.);
        assert_eq!(conj(&a)[1], Complex::new(1., 1.));
    }

    #[test]
    fn phase_angles() {
        let a = NdArray::from(vec![Complex::new(1f32, 1.), Complex::new(0., -2.)]);
        let t = angle(&a);
        assert!((t[0] - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert!((t[1] + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}

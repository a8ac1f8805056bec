// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::AbsDiffEq;

use super::{norm3, vec3};
use crate::error::{invalid_argument, NdResult};
use crate::NdArray;

/// A unit quaternion `i·x + j·y + k·z + s` describing a rotation.
///
/// Every constructor and operator normalises the result.
///
/// ```
/// use ndnum::rotations::Quaternion;
/// use ndnum::nd;
/// use approx::assert_abs_diff_eq;
/// use std::f64::consts::FRAC_PI_2;
///
/// let q = Quaternion::z_rotation(FRAC_PI_2);
/// assert_abs_diff_eq!(q.yaw(), FRAC_PI_2, epsilon = 1e-12);
/// assert_abs_diff_eq!(q.rotate(&nd![1., 0., 0.]).unwrap(), nd![0., 1., 0.], epsilon = 1e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    components: [f64; 4],
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::identity()
    }
}

impl Quaternion {
    /// The rotation by zero.
    pub fn identity() -> Self {
        Quaternion {
            components: [0., 0., 0., 1.],
        }
    }

    /// Quaternion from its components, normalised.
    pub fn new(i: f64, j: f64, k: f64, s: f64) -> Self {
        Quaternion::from_components([i, j, k, s])
    }

    /// Quaternion from `[i, j, k, s]`, normalised.
    pub fn from_components(components: [f64; 4]) -> Self {
        let mut q = Quaternion { components };
        q.normalize();
        q
    }

    /// Rotation by `roll` about x, then `pitch` about y, then `yaw` about z.
    pub fn from_euler(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sin_phi, cos_phi) = (roll / 2.).sin_cos();
        let (sin_theta, cos_theta) = (pitch / 2.).sin_cos();
        let (sin_psi, cos_psi) = (yaw / 2.).sin_cos();
        Quaternion::from_components([
            sin_phi * cos_theta * cos_psi - cos_phi * sin_theta * sin_psi,
            cos_phi * sin_theta * cos_psi + sin_phi * cos_theta * sin_psi,
            cos_phi * cos_theta * sin_psi - sin_phi * sin_theta * cos_psi,
            cos_phi * cos_theta * cos_psi + sin_phi * sin_theta * sin_psi,
        ])
    }

    /// Rotation by `angle` about `axis` (normalised first).
    ///
    /// **Errors** unless `axis` has three elements.
    pub fn from_axis_angle(axis: &NdArray<f64>, angle: f64) -> NdResult<Self> {
        Ok(Quaternion::from_axis3(vec3(axis, "axis")?, angle))
    }

    fn from_axis3(axis: [f64; 3], angle: f64) -> Self {
        let n = norm3(axis);
        let (sin_half, cos_half) = (angle / 2.).sin_cos();
        Quaternion::from_components([
            axis[0] / n * sin_half,
            axis[1] / n * sin_half,
            axis[2] / n * sin_half,
            cos_half,
        ])
    }

    /// Quaternion of a 3 × 3 direction cosine matrix.
    ///
    /// **Errors** unless `dcm` has shape 3 × 3.
    pub fn from_dcm(dcm: &NdArray<f64>) -> NdResult<Self> {
        if dcm.dims() != [3, 3] {
            return Err(invalid_argument(format!(
                "input direction cosine matrix must have shape (3, 3), got {:?}",
                dcm.dims()
            )));
        }
        let d = |i: usize, j: usize| dcm[[i, j]];
        let checks = [
            1. + d(0, 0) + d(1, 1) + d(2, 2),
            1. + d(0, 0) - d(1, 1) - d(2, 2),
            1. - d(0, 0) + d(1, 1) - d(2, 2),
            1. - d(0, 0) - d(1, 1) + d(2, 2),
        ];
        let mut max_idx = 0;
        for (idx, &c) in checks.iter().enumerate() {
            if c > checks[max_idx] {
                max_idx = idx;
            }
        }
        let big = 0.5 * checks[max_idx].sqrt();
        let four = 4. * big;
        let components = match max_idx {
            0 => [
                (d(2, 1) - d(1, 2)) / four,
                (d(0, 2) - d(2, 0)) / four,
                (d(1, 0) - d(0, 1)) / four,
                big,
            ],
            1 => [
                big,
                (d(1, 0) + d(0, 1)) / four,
                (d(2, 0) + d(0, 2)) / four,
                (d(2, 1) - d(1, 2)) / four,
            ],
            2 => [
                (d(1, 0) + d(0, 1)) / four,
                big,
                (d(2, 1) + d(1, 2)) / four,
                (d(0, 2) - d(2, 0)) / four,
            ],
            _ => [
                (d(2, 0) + d(0, 2)) / four,
                (d(2, 1) + d(1, 2)) / four,
                big,
                (d(1, 0) - d(0, 1)) / four,
            ],
        };
        Ok(Quaternion::from_components(components))
    }

    /// Quaternion from an array of
    ///
    /// - 3 elements: Euler angles `[roll, pitch, yaw]`,
    /// - 4 elements: components `[i, j, k, s]`,
    /// - 9 elements: a 3 × 3 direction cosine matrix.
    ///
    /// **Errors** for any other size.
    pub fn from_array(a: &NdArray<f64>) -> NdResult<Self> {
        match *a.as_slice() {
            [roll, pitch, yaw] => Ok(Quaternion::from_euler(roll, pitch, yaw)),
            [i, j, k, s] => Ok(Quaternion::new(i, j, k, s)),
            _ if a.size() == 9 => Quaternion::from_dcm(&a.clone().into_shape((3, 3))?),
            _ => Err(invalid_argument(format!(
                "input array is not a valid size: {} elements",
                a.size()
            ))),
        }
    }

    pub fn i(&self) -> f64 {
        self.components[0]
    }

    pub fn j(&self) -> f64 {
        self.components[1]
    }

    pub fn k(&self) -> f64 {
        self.components[2]
    }

    /// The scalar component.
    pub fn s(&self) -> f64 {
        self.components[3]
    }

    pub fn components(&self) -> [f64; 4] {
        self.components
    }

    fn normalize(&mut self) {
        let norm = self.components.iter().map(|c| c * c).sum::<f64>().sqrt();
        for c in &mut self.components {
            *c /= norm;
        }
    }

    pub fn conjugate(&self) -> Self {
        Quaternion {
            components: [-self.i(), -self.j(), -self.k(), self.s()],
        }
    }

    /// The inverse rotation; the conjugate of a unit quaternion.
    pub fn inverse(&self) -> Self {
        self.conjugate()
    }

    /// Rotation about the x axis (Euler angle).
    pub fn roll(&self) -> f64 {
        let (i, j, k, s) = (self.i(), self.j(), self.k(), self.s());
        f64::atan2(2. * (s * i + j * k), 1. - 2. * (i * i + j * j))
    }

    /// Rotation about the y axis (Euler angle).
    pub fn pitch(&self) -> f64 {
        let (i, j, k, s) = (self.i(), self.j(), self.k(), self.s());
        (2. * (s * j - k * i)).clamp(-1., 1.).asin()
    }

    /// Rotation about the z axis (Euler angle).
    pub fn yaw(&self) -> f64 {
        let (i, j, k, s) = (self.i(), self.j(), self.k(), self.s());
        f64::atan2(2. * (s * k + i * j), 1. - 2. * (j * j + k * k))
    }

    /// The angle of the rotation, in `[0, 2π]`.
    pub fn angle_of_rotation(&self) -> f64 {
        2. * self.s().clamp(-1., 1.).acos()
    }

    /// The unit axis of the rotation; NaN for the identity.
    pub fn axis_of_rotation(&self) -> NdArray<f64> {
        let sin_half = (self.angle_of_rotation() / 2.).sin();
        let axis = [self.i() / sin_half, self.j() / sin_half, self.k() / sin_half];
        let n = norm3(axis);
        NdArray::from_vec(axis.iter().map(|x| x / n).collect())
    }

    /// The equivalent 3 × 3 direction cosine matrix.
    pub fn to_dcm(&self) -> NdArray<f64> {
        let (q0, q1, q2, q3) = (self.i(), self.j(), self.k(), self.s());
        let (q0sqr, q1sqr, q2sqr, q3sqr) = (q0 * q0, q1 * q1, q2 * q2, q3 * q3);
        let v = vec![
            q3sqr + q0sqr - q1sqr - q2sqr,
            2. * (q0 * q1 - q3 * q2),
            2. * (q0 * q2 + q3 * q1),
            2. * (q0 * q1 + q3 * q2),
            q3sqr + q1sqr - q0sqr - q2sqr,
            2. * (q1 * q2 - q3 * q0),
            2. * (q0 * q2 - q3 * q1),
            2. * (q1 * q2 + q3 * q0),
            q3sqr + q2sqr - q0sqr - q1sqr,
        ];
        NdArray::from_matrix_vec(3, 3, v)
    }

    /// The components `[i, j, k, s]` as an array.
    pub fn to_ndarray(&self) -> NdArray<f64> {
        NdArray::from_vec(self.components.to_vec())
    }

    /// Rotate a cartesian vector, `q · v · q⁻¹`.
    ///
    /// **Errors** unless `v` has three elements.
    pub fn rotate(&self, v: &NdArray<f64>) -> NdResult<NdArray<f64>> {
        let v3 = vec3(v, "input vector")?;
        let n = norm3(v3);
        if n == 0. {
            return Ok(v.clone());
        }
        let p = Quaternion::new(v3[0], v3[1], v3[2], 0.);
        let rotated = *self * p * self.inverse();
        Ok(NdArray::from_vec(vec![rotated.i() * n, rotated.j() * n, rotated.k() * n]))
    }

    fn check_percent(percent: f64) -> NdResult<()> {
        if (0. ..=1.).contains(&percent) {
            Ok(())
        } else {
            Err(invalid_argument(format!(
                "input percent must be in the range [0, 1], got {}",
                percent
            )))
        }
    }

    /// Normalised linear interpolation from `self` (at 0) to `other` (at 1).
    ///
    /// **Errors** unless `percent` is in `[0, 1]`.
    pub fn nlerp(&self, other: &Quaternion, percent: f64) -> NdResult<Self> {
        Quaternion::check_percent(percent)?;
        if percent == 0. {
            return Ok(*self);
        }
        if percent == 1. {
            return Ok(*other);
        }
        let mut c = [0.; 4];
        for (n, c) in c.iter_mut().enumerate() {
            *c = (1. - percent) * self.components[n] + percent * other.components[n];
        }
        Ok(Quaternion::from_components(c))
    }

    /// Spherical linear interpolation from `self` (at 0) to `other` (at 1),
    /// along the shorter arc. Nearly parallel quaternions fall back to
    /// [`nlerp`](Quaternion::nlerp).
    ///
    /// **Errors** unless `percent` is in `[0, 1]`.
    pub fn slerp(&self, other: &Quaternion, percent: f64) -> NdResult<Self> {
        const DOT_THRESHOLD: f64 = 0.9995;

        Quaternion::check_percent(percent)?;
        if percent == 0. {
            return Ok(*self);
        }
        if percent == 1. {
            return Ok(*other);
        }
        let mut start = *self;
        let mut dot: f64 = (0..4).map(|n| self.components[n] * other.components[n]).sum();
        if dot < 0. {
            start = -start;
            dot = -dot;
        }
        if dot > DOT_THRESHOLD {
            return self.nlerp(other, percent);
        }
        let theta0 = dot.clamp(-1., 1.).acos();
        let theta = theta0 * percent;
        let s0 = theta.cos() - dot * theta.sin() / theta0.sin();
        let s1 = theta.sin() / theta0.sin();
        let mut c = [0.; 4];
        for (n, c) in c.iter_mut().enumerate() {
            *c = start.components[n] * s0 + other.components[n] * s1;
        }
        Ok(Quaternion::from_components(c))
    }

    /// Angular velocity vector taking `self` to `other` in `dt`.
    pub fn angular_velocity(&self, other: &Quaternion, dt: f64) -> NdArray<f64> {
        let qdot: Vec<f64> = (0..4)
            .map(|n| (other.components[n] - self.components[n]) / dt)
            .collect();
        let (i, j, k, s) = (other.i(), other.j(), other.k(), other.s());
        // Q = [s·I + [ε]×; −εᵀ], 4 × 3
        let q = [[s, -k, j], [k, s, -i], [-j, i, s], [-i, -j, -k]];
        let omega = (0..3)
            .map(|c| 2. * (0..4).map(|r| q[r][c] * qdot[r]).sum::<f64>())
            .collect();
        NdArray::from_vec(omega)
    }

    /// Rotation by `angle` about the x axis.
    pub fn x_rotation(angle: f64) -> Self {
        Quaternion::from_axis3([1., 0., 0.], angle)
    }

    /// Rotation by `angle` about the y axis.
    pub fn y_rotation(angle: f64) -> Self {
        Quaternion::from_axis3([0., 1., 0.], angle)
    }

    /// Rotation by `angle` about the z axis.
    pub fn z_rotation(angle: f64) -> Self {
        Quaternion::from_axis3([0., 0., 1.], angle)
    }

    pub fn roll_rotation(angle: f64) -> Self {
        Quaternion::from_euler(angle, 0., 0.)
    }

    pub fn pitch_rotation(angle: f64) -> Self {
        Quaternion::from_euler(0., angle, 0.)
    }

    pub fn yaw_rotation(angle: f64) -> Self {
        Quaternion::from_euler(0., 0., angle)
    }
}

/// Hamilton product; the rotation `rhs` followed by `self`.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        let (i, j, k, s) = (self.i(), self.j(), self.k(), self.s());
        Quaternion::from_components([
            rhs.s() * i + rhs.i() * s - rhs.j() * k + rhs.k() * j,
            rhs.s() * j + rhs.i() * k + rhs.j() * s - rhs.k() * i,
            rhs.s() * k - rhs.i() * j + rhs.j() * i + rhs.k() * s,
            rhs.s() * s - rhs.i() * i - rhs.j() * j - rhs.k() * k,
        ])
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: f64) -> Quaternion {
        let mut c = self.components;
        for x in &mut c {
            *x *= rhs;
        }
        Quaternion::from_components(c)
    }
}

impl Div for Quaternion {
    type Output = Quaternion;

    fn div(self, rhs: Quaternion) -> Quaternion {
        self * rhs.conjugate()
    }
}

macro_rules! impl_componentwise {
    ($trt:ident, $mth:ident, $op:tt) => {
        impl $trt for Quaternion {
            type Output = Quaternion;

            fn $mth(self, rhs: Quaternion) -> Quaternion {
                let mut c = self.components;
                for (x, y) in c.iter_mut().zip(rhs.components) {
                    *x = *x $op y;
                }
                Quaternion::from_components(c)
            }
        }
    };
}

impl_componentwise!(Add, add, +);
impl_componentwise!(Sub, sub, -);

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        self * -1.
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Quaternion, epsilon: f64) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.i(), self.j(), self.k(), self.s())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn euler_round_trip() {
        let q = Quaternion::from_euler(0.1, -0.4, 2.5);
        assert_abs_diff_eq!(q.roll(), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(q.pitch(), -0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(q.yaw(), 2.5, epsilon = 1e-12);
        let norm: f64 = q.components().iter().map(|c| c * c).sum();
        assert_abs_diff_eq!(norm, 1., epsilon = 1e-12);
    }

    #[test]
    fn dcm_round_trip_and_rotation() {
        let q = Quaternion::from_euler(0.3, 0.2, -1.1);
        let dcm = q.to_dcm();
        let back = Quaternion::from_dcm(&dcm).unwrap();
        // q and -q are the same rotation
        assert!(back.abs_diff_eq(&q, 1e-12) || back.abs_diff_eq(&-q, 1e-12));

        let v = nd![1., -2., 0.5];
        let by_dcm = dcm.dot(&v.clone().into_shape((3, 1)).unwrap()).unwrap().flatten();
        assert_abs_diff_eq!(q.rotate(&v).unwrap(), by_dcm, epsilon = 1e-12);
        assert_eq!(q.rotate(&nd![0., 0., 0.]).unwrap(), nd![0., 0., 0.]);
        assert!(q.rotate(&nd![1., 2.]).is_err());
    }

    #[test]
    fn from_array_sizes() {
        let e = Quaternion::from_array(&nd![0.1, 0.2, 0.3]).unwrap();
        assert_abs_diff_eq!(e, Quaternion::from_euler(0.1, 0.2, 0.3), epsilon = 1e-15);
        let c = Quaternion::from_array(&nd![0., 0., 0., 2.]).unwrap();
        assert_eq!(c, Quaternion::identity());
        let d = Quaternion::from_array(&e.to_dcm().flatten()).unwrap();
        assert_abs_diff_eq!(d, e, epsilon = 1e-12);
        assert!(Quaternion::from_array(&nd![1., 2.]).is_err());
    }

    #[test]
    fn axis_and_angle() {
        let q = Quaternion::from_axis_angle(&nd![0., 3., 0.], 0.8).unwrap();
        assert_abs_diff_eq!(q, Quaternion::y_rotation(0.8), epsilon = 1e-15);
        assert_abs_diff_eq!(q.angle_of_rotation(), 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(q.axis_of_rotation(), nd![0., 1., 0.], epsilon = 1e-12);
        assert_abs_diff_eq!(Quaternion::x_rotation(0.4), Quaternion::roll_rotation(0.4), epsilon = 1e-15);
    }

    #[test]
    fn products() {
        let a = Quaternion::z_rotation(FRAC_PI_2);
        let b = a * a;
        assert_abs_diff_eq!(b, Quaternion::z_rotation(PI), epsilon = 1e-12);
        assert_abs_diff_eq!(b / a, a, epsilon = 1e-12);
        assert_abs_diff_eq!(a * a.inverse(), Quaternion::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!((-a).s(), -a.s(), epsilon = 1e-15);
        let sum = Quaternion::identity() + Quaternion::identity();
        assert_eq!(sum, Quaternion::identity());
    }

    #[test]
    fn interpolation() {
        let a = Quaternion::identity();
        let b = Quaternion::z_rotation(FRAC_PI_2);
        let half = a.slerp(&b, 0.5).unwrap();
        assert_abs_diff_eq!(half, Quaternion::z_rotation(FRAC_PI_2 / 2.), epsilon = 1e-12);
        assert_eq!(a.slerp(&b, 1.).unwrap(), b);
        assert_eq!(a.nlerp(&b, 0.).unwrap(), a);
        assert!(a.nlerp(&b, 1.5).is_err());
        assert!(a.slerp(&b, -0.1).is_err());
    }

    #[test]
    fn angular_velocity_about_z() {
        let dt = 1e-6;
        let w = 0.5;
        let a = Quaternion::identity();
        let b = Quaternion::z_rotation(w * dt);
        let omega = a.angular_velocity(&b, dt);
        assert_abs_diff_eq!(omega, nd![0., 0., w], epsilon = 1e-6);
    }

    #[test]
    fn display() {
        assert_eq!(Quaternion::identity().to_string(), "[0, 0, 0, 1]");
    }
}

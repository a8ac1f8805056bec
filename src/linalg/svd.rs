// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Singular value decomposition.
//!
//! Householder reduction to bidiagonal form followed by implicitly shifted
//! QR iteration on the bidiagonal (Golub–Reinsch, in the formulation of
//! *Numerical Recipes*' `svdcmp`).
use log::{debug, trace, warn};
use num_traits::AsPrimitive;

use super::Mat;
use crate::error::{invalid_argument, runtime_error, NdResult};
use crate::{Element, NdArray};

/// Settings of the singular value decomposition.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvdConfig {
    /// QR iterations allowed per singular value.
    pub max_iterations: usize,
    /// Singular values at or below this are treated as zero by
    /// [`Svd::pinv`] and [`Svd::lstsq`].
    pub tolerance: f64,
}

impl Default for SvdConfig {
    fn default() -> Self {
        SvdConfig {
            max_iterations: 30,
            tolerance: 1e-12,
        }
    }
}

impl SvdConfig {
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// The singular value decomposition `A = U · diag(S) · Vᵀ` of an
/// *m* × *n* matrix.
///
/// `U` is *m* × *n* with orthonormal columns (for *m* ≥ *n*), `S` holds the
/// *n* singular values in descending order and `V` is *n* × *n* orthogonal.
/// Column signs are normalised so that most entries of each pair of
/// singular vectors are non-negative.
///
/// ```
/// use ndnum::linalg::Svd;
/// use ndnum::nd;
/// use approx::assert_abs_diff_eq;
///
/// let a = nd![[3., 0.], [0., -2.], [0., 0.]];
/// let svd = Svd::new(&a).unwrap();
/// assert_abs_diff_eq!(svd.s(), &nd![3., 2.], epsilon = 1e-12);
/// assert_abs_diff_eq!(svd.reconstruct(), a, epsilon = 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Svd {
    u: NdArray<f64>,
    s: NdArray<f64>,
    v: NdArray<f64>,
    tolerance: f64,
}

impl Svd {
    /// Decompose `a` with the default [`SvdConfig`].
    ///
    /// **Errors** if `a` has more than two dimensions, and with a runtime
    /// error if the QR iteration does not converge.
    pub fn new<A>(a: &NdArray<A>) -> NdResult<Svd>
    where
        A: Element + AsPrimitive<f64>,
    {
        Svd::with_config(a, &SvdConfig::default())
    }

    /// Decompose `a` with the given settings.
    pub fn with_config<A>(a: &NdArray<A>, config: &SvdConfig) -> NdResult<Svd>
    where
        A: Element + AsPrimitive<f64>,
    {
        let mut u = Mat::from_array(a)?;
        let (m, n) = (u.rows(), u.cols());
        let mut w = vec![0.; n];
        let mut v = Mat::zeros(n, n);
        decompose(&mut u, &mut w, &mut v, config.max_iterations)?;
        reorder(&mut u, &mut w, &mut v);
        debug!("svd of {} x {} matrix, largest singular value {:e}", m, n, w.first().copied().unwrap_or(0.));
        Ok(Svd {
            u: u.into_array(),
            s: NdArray::from_vec(w),
            v: v.into_array(),
            tolerance: config.tolerance,
        })
    }

    /// The left singular vectors, as columns.
    pub fn u(&self) -> &NdArray<f64> {
        &self.u
    }

    /// The singular values, descending.
    pub fn s(&self) -> &NdArray<f64> {
        &self.s
    }

    /// The right singular vectors, as columns.
    pub fn v(&self) -> &NdArray<f64> {
        &self.v
    }

    fn dims(&self) -> (usize, usize) {
        (self.u.nrows(), self.v.nrows())
    }

    /// `U · diag(S) · Vᵀ`.
    pub fn reconstruct(&self) -> NdArray<f64> {
        let (m, n) = self.dims();
        let mut out = Mat::zeros(m, n);
        for i in 0..m {
            for j in 0..n {
                out[(i, j)] = (0..n).map(|k| self.u[[i, k]] * self.s[k] * self.v[[j, k]]).sum();
            }
        }
        out.into_array()
    }

    /// Solve `A · x = b` for `x` by back-substitution through the
    /// decomposition.
    ///
    /// Singular values at or below `thresh` are treated as zero. With
    /// `None`, the threshold is `0.5 · √(m + n + 1) · S[0] · ε`.
    ///
    /// **Errors** unless `b` has *m* elements.
    pub fn solve(&self, b: &NdArray<f64>, thresh: Option<f64>) -> NdResult<NdArray<f64>> {
        let (m, n) = self.dims();
        if b.size() != m {
            return Err(invalid_argument(format!(
                "bad sizes: right hand side has {} elements, expected {}",
                b.size(),
                m
            )));
        }
        let thresh = thresh.unwrap_or_else(|| self.default_threshold());
        let b = b.as_slice();
        let tmp: Vec<f64> = (0..n)
            .map(|j| {
                let sj = self.s[j];
                if sj > thresh {
                    (0..m).map(|i| self.u[[i, j]] * b[i]).sum::<f64>() / sj
                } else {
                    0.
                }
            })
            .collect();
        let x = (0..n)
            .map(|j| (0..n).map(|jj| self.v[[j, jj]] * tmp[jj]).sum::<f64>())
            .collect();
        Ok(NdArray::from_vec(x))
    }

    fn default_threshold(&self) -> f64 {
        let (m, n) = self.dims();
        let s0 = self.s.front().copied().unwrap_or(0.);
        0.5 * ((m + n + 1) as f64).sqrt() * s0 * f64::EPSILON
    }

    /// The Moore–Penrose pseudo-inverse `V · diag(1/S) · Uᵀ`, *n* × *m*.
    ///
    /// The reciprocal of a singular value at or below the configured
    /// tolerance is taken as zero.
    pub fn pinv(&self) -> NdArray<f64> {
        let (m, n) = self.dims();
        let mut out = Mat::zeros(n, m);
        for k in 0..n {
            let sk = self.s[k];
            if sk <= self.tolerance {
                continue;
            }
            for i in 0..n {
                let vik = self.v[[i, k]] / sk;
                for j in 0..m {
                    out[(i, j)] += vik * self.u[[j, k]];
                }
            }
        }
        out.into_array()
    }

    /// Least squares solution of `A · x = b` through the pseudo-inverse.
    ///
    /// `b` is a vector of *m* elements (the result has *n* elements) or an
    /// *m* × *k* matrix (the result is *n* × *k*).
    ///
    /// **Errors** if `b` has the wrong number of rows.
    pub fn lstsq(&self, b: &NdArray<f64>) -> NdResult<NdArray<f64>> {
        let (m, _) = self.dims();
        match *b.dims() {
            [len] if len == m => {
                let col = b.clone().into_shape((m, 1))?;
                Ok(self.pinv().dot(&col)?.flatten())
            }
            [rows, _] if rows == m => self.pinv().dot(b),
            _ => Err(invalid_argument(format!(
                "invalid matrix dimensions: expected {} rows, got shape {:?}",
                m,
                b.dims()
            ))),
        }
    }
}

/// Singular value decomposition of `a`, returned as `(U, S, Vᵀ)`.
///
/// See [`Svd`] for the shapes and conventions.
///
/// ```
/// use ndnum::linalg::svd;
/// use ndnum::nd;
///
/// use approx::assert_abs_diff_eq;
///
/// let (u, s, vt) = svd(&nd![[0., 2.], [1., 0.]]).unwrap();
/// assert_abs_diff_eq!(s, nd![2., 1.], epsilon = 1e-12);
/// assert_abs_diff_eq!(u.dot(&vt).unwrap(), nd![[0., 1.], [1., 0.]], epsilon = 1e-12);
/// ```
pub fn svd<A>(a: &NdArray<A>) -> NdResult<(NdArray<f64>, NdArray<f64>, NdArray<f64>)>
where
    A: Element + AsPrimitive<f64>,
{
    let Svd { u, s, v, .. } = Svd::new(a)?;
    Ok((u, s, v.transpose()))
}

/// Moore–Penrose pseudo-inverse of `a`; see [`Svd::pinv`].
///
/// ```
/// use ndnum::linalg::pinv;
/// use ndnum::nd;
/// use approx::assert_abs_diff_eq;
///
/// let p = pinv(&nd![[1., 0.], [0., 2.], [0., 0.]]).unwrap();
/// assert_abs_diff_eq!(p, nd![[1., 0., 0.], [0., 0.5, 0.]], epsilon = 1e-12);
/// ```
pub fn pinv<A>(a: &NdArray<A>) -> NdResult<NdArray<f64>>
where
    A: Element + AsPrimitive<f64>,
{
    Ok(Svd::new(a)?.pinv())
}

/// Least squares solution of `a · x = b`.
///
/// Singular values at or below `tolerance · S[0]` are treated as zero.
/// `b` is a vector with as many elements as `a` has rows, or a matrix with
/// as many rows, solved column by column.
///
/// ```
/// use ndnum::linalg::lstsq;
/// use ndnum::nd;
/// use approx::assert_abs_diff_eq;
///
/// // fit y = c0 + c1 * x through (0, 1), (1, 3), (2, 5)
/// let a = nd![[1., 0.], [1., 1.], [1., 2.]];
/// let x = lstsq(&a, &nd![1., 3., 5.], 1e-12).unwrap();
/// assert_abs_diff_eq!(x, nd![1., 2.], epsilon = 1e-10);
/// ```
pub fn lstsq<A>(a: &NdArray<A>, b: &NdArray<A>, tolerance: f64) -> NdResult<NdArray<f64>>
where
    A: Element + AsPrimitive<f64>,
{
    let (rows, cols) = a.matrix_dims()?;
    let b = b.astype::<f64>();
    let bad = || {
        invalid_argument(format!(
            "invalid matrix dimensions: {:?} and {:?}",
            a.dims(),
            b.dims()
        ))
    };
    let svd = Svd::new(a)?;
    let thresh = Some(tolerance * svd.s.front().copied().unwrap_or(0.));
    match *b.dims() {
        [len] if len == rows => svd.solve(&b, thresh),
        [r, k] if r == rows => {
            let mut out = Mat::zeros(cols, k);
            for c in 0..k {
                let x = svd.solve(&b.column(c)?, thresh)?;
                for (i, xi) in x.iter().enumerate() {
                    out[(i, c)] = *xi;
                }
            }
            Ok(out.into_array())
        }
        _ => Err(bad()),
    }
}

fn sign(a: f64, b: f64) -> f64 {
    if b >= 0. {
        a.abs()
    } else {
        -a.abs()
    }
}

/// `sqrt(a² + b²)` without destructive underflow or overflow.
fn pythag(a: f64, b: f64) -> f64 {
    let (absa, absb) = (a.abs(), b.abs());
    if absa > absb {
        absa * (1. + (absb / absa).powi(2)).sqrt()
    } else if absb == 0. {
        0.
    } else {
        absb * (1. + (absa / absb).powi(2)).sqrt()
    }
}

/// Overwrite `u` (m × n) with the left singular vectors and fill `w`, `v`.
fn decompose(u: &mut Mat, w: &mut [f64], v: &mut Mat, max_iterations: usize) -> NdResult<()> {
    let (m, n) = (u.rows(), u.cols());
    let eps = f64::EPSILON;
    let mut rv1 = vec![0.; n];
    let (mut g, mut scale, mut anorm) = (0., 0., 0_f64);
    let mut l = 0;

    // Householder reduction to bidiagonal form.
    for i in 0..n {
        l = i + 2;
        rv1[i] = scale * g;
        g = 0.;
        scale = 0.;
        if i < m {
            for k in i..m {
                scale += u[(k, i)].abs();
            }
            if scale != 0. {
                let mut s = 0.;
                for k in i..m {
                    u[(k, i)] /= scale;
                    s += u[(k, i)] * u[(k, i)];
                }
                let f = u[(i, i)];
                g = -sign(f64::sqrt(s), f);
                let h = f * g - s;
                u[(i, i)] = f - g;
                for j in l - 1..n {
                    let s: f64 = (i..m).map(|k| u[(k, i)] * u[(k, j)]).sum();
                    let f = s / h;
                    for k in i..m {
                        u[(k, j)] += f * u[(k, i)];
                    }
                }
                for k in i..m {
                    u[(k, i)] *= scale;
                }
            }
        }
        w[i] = scale * g;
        g = 0.;
        scale = 0.;
        if i < m && i + 1 != n {
            for k in l - 1..n {
                scale += u[(i, k)].abs();
            }
            if scale != 0. {
                let mut s = 0.;
                for k in l - 1..n {
                    u[(i, k)] /= scale;
                    s += u[(i, k)] * u[(i, k)];
                }
                let f = u[(i, l - 1)];
                g = -sign(f64::sqrt(s), f);
                let h = f * g - s;
                u[(i, l - 1)] = f - g;
                for k in l - 1..n {
                    rv1[k] = u[(i, k)] / h;
                }
                for j in l - 1..m {
                    let s: f64 = (l - 1..n).map(|k| u[(j, k)] * u[(i, k)]).sum();
                    for k in l - 1..n {
                        u[(j, k)] += s * rv1[k];
                    }
                }
                for k in l - 1..n {
                    u[(i, k)] *= scale;
                }
            }
        }
        anorm = anorm.max(w[i].abs() + rv1[i].abs());
    }

    // Accumulation of right-hand transformations.
    for i in (0..n).rev() {
        if i + 1 < n {
            if g != 0. {
                for j in l..n {
                    v[(j, i)] = (u[(i, j)] / u[(i, l)]) / g;
                }
                for j in l..n {
                    let s: f64 = (l..n).map(|k| u[(i, k)] * v[(k, j)]).sum();
                    for k in l..n {
                        v[(k, j)] += s * v[(k, i)];
                    }
                }
            }
            for j in l..n {
                v[(i, j)] = 0.;
                v[(j, i)] = 0.;
            }
        }
        v[(i, i)] = 1.;
        g = rv1[i];
        l = i;
    }

    // Accumulation of left-hand transformations.
    for i in (0..m.min(n)).rev() {
        let l = i + 1;
        let mut g = w[i];
        for j in l..n {
            u[(i, j)] = 0.;
        }
        if g != 0. {
            g = 1. / g;
            for j in l..n {
                let s: f64 = (l..m).map(|k| u[(k, i)] * u[(k, j)]).sum();
                let f = (s / u[(i, i)]) * g;
                for k in i..m {
                    u[(k, j)] += f * u[(k, i)];
                }
            }
            for j in i..m {
                u[(j, i)] *= g;
            }
        } else {
            for j in i..m {
                u[(j, i)] = 0.;
            }
        }
        u[(i, i)] += 1.;
    }

    // Diagonalization of the bidiagonal form.
    let mut total_iterations = 0;
    for k in (0..n).rev() {
        let mut its = 0;
        loop {
            let mut flag = true;
            let mut l = k;
            let mut nm = 0;
            loop {
                if l == 0 || rv1[l].abs() <= eps * anorm {
                    flag = false;
                    break;
                }
                nm = l - 1;
                if w[nm].abs() <= eps * anorm {
                    break;
                }
                l -= 1;
            }
            if flag {
                // Cancellation of rv1[l], if l > 0.
                let (mut c, mut s) = (0., 1.);
                for i in l..=k {
                    let f = s * rv1[i];
                    rv1[i] *= c;
                    if f.abs() <= eps * anorm {
                        break;
                    }
                    let g = w[i];
                    let h = pythag(f, g);
                    w[i] = h;
                    let h = 1. / h;
                    c = g * h;
                    s = -f * h;
                    for j in 0..m {
                        let y = u[(j, nm)];
                        let z = u[(j, i)];
                        u[(j, nm)] = y * c + z * s;
                        u[(j, i)] = z * c - y * s;
                    }
                }
            }
            let z = w[k];
            if l == k {
                // Convergence; make the singular value non-negative.
                if z < 0. {
                    w[k] = -z;
                    for j in 0..n {
                        v[(j, k)] = -v[(j, k)];
                    }
                }
                trace!("svd: singular value {} converged after {} iterations", k, its);
                break;
            }
            its += 1;
            total_iterations += 1;
            if its >= max_iterations {
                warn!("svd: no convergence of singular value {} in {} iterations", k, its);
                return Err(runtime_error(format!(
                    "no convergence in {} svdcmp iterations",
                    max_iterations
                )));
            }

            // Shift from the bottom 2 × 2 minor.
            let mut x = w[l];
            let nm = k - 1;
            let mut y = w[nm];
            let mut g = rv1[nm];
            let mut h = rv1[k];
            let mut f = ((y - z) * (y + z) + (g - h) * (g + h)) / (2. * h * y);
            g = pythag(f, 1.);
            f = ((x - z) * (x + z) + h * ((y / (f + sign(g, f))) - h)) / x;

            // Next QR transformation.
            let (mut c, mut s) = (1., 1.);
            for j in l..=nm {
                let i = j + 1;
                g = rv1[i];
                y = w[i];
                h = s * g;
                g *= c;
                let mut z = pythag(f, h);
                rv1[j] = z;
                c = f / z;
                s = h / z;
                f = x * c + g * s;
                g = g * c - x * s;
                h = y * s;
                y *= c;
                for jj in 0..n {
                    let x = v[(jj, j)];
                    let z = v[(jj, i)];
                    v[(jj, j)] = x * c + z * s;
                    v[(jj, i)] = z * c - x * s;
                }
                z = pythag(f, h);
                w[j] = z;
                if z != 0. {
                    z = 1. / z;
                    c = f * z;
                    s = h * z;
                }
                f = c * g + s * y;
                x = c * y - s * g;
                for jj in 0..m {
                    let y = u[(jj, j)];
                    let z = u[(jj, i)];
                    u[(jj, j)] = y * c + z * s;
                    u[(jj, i)] = z * c - y * s;
                }
            }
            rv1[l] = 0.;
            rv1[k] = f;
            w[k] = x;
        }
    }
    debug!("svd: {} qr iterations for {} singular values", total_iterations, n);
    Ok(())
}

/// Sort the singular values descending (moving the vectors along) and flip
/// the sign of vector pairs whose entries are mostly negative.
fn reorder(u: &mut Mat, w: &mut [f64], v: &mut Mat) {
    let (m, n) = (u.rows(), u.cols());
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| w[j].total_cmp(&w[i]));

    let (u0, v0, w0) = (u.clone(), v.clone(), w.to_vec());
    for (dst, &src) in order.iter().enumerate() {
        w[dst] = w0[src];
        for i in 0..m {
            u[(i, dst)] = u0[(i, src)];
        }
        for i in 0..n {
            v[(i, dst)] = v0[(i, src)];
        }
    }

    for k in 0..n {
        let negatives = (0..m).filter(|&i| u[(i, k)] < 0.).count()
            + (0..n).filter(|&j| v[(j, k)] < 0.).count();
        if negatives > (m + n) / 2 {
            for i in 0..m {
                u[(i, k)] = -u[(i, k)];
            }
            for j in 0..n {
                v[(j, k)] = -v[(j, k)];
            }
        }
    }
}

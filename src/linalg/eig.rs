// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use log::{debug, warn};
use num_traits::AsPrimitive;

use super::Mat;
use crate::error::{runtime_error, NdResult};
use crate::{Element, NdArray};

/// Settings of the Jacobi eigensolver.
///
/// ```
/// use ndnum::linalg::EigConfig;
///
/// let config = EigConfig::default().tolerance(1e-9).max_iterations(500);
/// assert_eq!(config.max_iterations, 500);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EigConfig {
    /// Iteration stops once every off-diagonal magnitude is below this.
    pub tolerance: f64,
    /// Maximum number of rotations.
    pub max_iterations: usize,
}

impl Default for EigConfig {
    fn default() -> Self {
        EigConfig {
            tolerance: 1e-12,
            max_iterations: 10_000,
        }
    }
}

impl EigConfig {
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Eigenvalues and eigenvectors of a real symmetric matrix, with the
/// default [`EigConfig`].
///
/// Returns `(values, vectors)`: the eigenvalues in descending order as a
/// 1-d array, and a matrix whose column `i` is the unit eigenvector of
/// `values[i]`.
///
/// Only symmetric input is meaningful; the upper and lower triangles are
/// assumed to mirror each other and symmetry is not checked.
///
/// **Errors** if `a` is not square, and with a runtime error if the
/// iteration does not converge within the configured number of rotations.
///
/// ```
/// use ndnum::linalg::eig;
/// use ndnum::nd;
///
/// let (values, vectors) = eig(&nd![[2., 0.], [0., 3.]]).unwrap();
/// assert_eq!(values, nd![3., 2.]);
/// assert_eq!(vectors, nd![[0., 1.], [1., 0.]]);
/// ```
pub fn eig<A>(a: &NdArray<A>) -> NdResult<(NdArray<f64>, NdArray<f64>)>
where
    A: Element + AsPrimitive<f64>,
{
    eig_with(a, &EigConfig::default())
}

/// Eigen-decomposition of a real symmetric matrix by the cyclic Jacobi
/// method, see [`eig`].
///
/// Each step finds the off-diagonal element (p, q) of largest magnitude
/// and applies the plane rotation that zeroes it, accumulating the
/// rotations into the eigenvector matrix.
pub fn eig_with<A>(a: &NdArray<A>, config: &EigConfig) -> NdResult<(NdArray<f64>, NdArray<f64>)>
where
    A: Element + AsPrimitive<f64>,
{
    let mut b = Mat::square_from(a)?;
    let n = b.rows();
    let mut vectors = Mat::eye(n);

    let mut rotations = 0;
    loop {
        let (max_off_diag, p, q) = largest_off_diagonal(&b);
        if max_off_diag < config.tolerance || max_off_diag == 0. {
            debug!(
                "jacobi converged after {} rotations, largest off-diagonal {:e}",
                rotations, max_off_diag
            );
            break;
        }
        if rotations == config.max_iterations {
            warn!(
                "jacobi did not converge in {} rotations, largest off-diagonal {:e}",
                rotations, max_off_diag
            );
            return Err(runtime_error(format!(
                "eig did not converge in {} iterations, largest off-diagonal element {:e}",
                rotations, max_off_diag
            )));
        }
        rotate(&mut b, &mut vectors, p, q);
        rotations += 1;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| b[(j, j)].total_cmp(&b[(i, i)]));

    let values = order.iter().map(|&i| b[(i, i)]).collect();
    let mut sorted = Mat::zeros(n, n);
    for (dst, &src) in order.iter().enumerate() {
        for k in 0..n {
            sorted[(k, dst)] = vectors[(k, src)];
        }
    }
    Ok((NdArray::from_vec(values), sorted.into_array()))
}

fn largest_off_diagonal(b: &Mat) -> (f64, usize, usize) {
    let n = b.rows();
    let (mut max, mut p, mut q) = (0., 0, 1);
    for i in 0..n {
        for j in i + 1..n {
            let val = b[(i, j)].abs();
            if val > max {
                max = val;
                p = i;
                q = j;
            }
        }
    }
    (max, p, q)
}

/// Zero `b[(p, q)]` with a similarity rotation; `v` accumulates it.
fn rotate(b: &mut Mat, v: &mut Mat, p: usize, q: usize) {
    let n = b.rows();
    let app = b[(p, p)];
    let aqq = b[(q, q)];
    let apq = b[(p, q)];

    let theta = (aqq - app) / (2. * apq);
    let root = (1. + theta * theta).sqrt();
    let t = if theta >= 0. {
        1. / (theta + root)
    } else {
        1. / (theta - root)
    };
    let c = 1. / (1. + t * t).sqrt();
    let s = t * c;

    for i in 0..n {
        if i != p && i != q {
            let bip = b[(i, p)];
            let biq = b[(i, q)];
            b[(i, p)] = c * bip - s * biq;
            b[(p, i)] = b[(i, p)];
            b[(i, q)] = s * bip + c * biq;
            b[(q, i)] = b[(i, q)];
        }
    }
    b[(p, p)] = c * c * app + s * s * aqq - 2. * c * s * apq;
    b[(q, q)] = s * s * app + c * c * aqq + 2. * c * s * apq;
    b[(p, q)] = 0.;
    b[(q, p)] = 0.;

    for i in 0..n {
        let vip = v[(i, p)];
        let viq = v[(i, q)];
        v[(i, p)] = c * vip - s * viq;
        v[(i, q)] = s * vip + c * viq;
    }
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Slow reference implementations that the accuracy tests compare the
//! library against.

use log::trace;
use ndnum::linalg::eig;
use ndnum::{NdArray, NdResult};

/// Compensated summation.
pub fn kahan_sum(iter: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.;
    let mut compensation = 0.;

    for elt in iter {
        let y = elt - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }

    sum
}

// simple, slow, correct (hopefully) mat mul
pub fn reference_mat_mul(lhs: &NdArray<f64>, rhs: &NdArray<f64>) -> NdArray<f64> {
    let (m, k, n) = (lhs.nrows(), lhs.ncols(), rhs.ncols());
    let mut res_elems = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            res_elems.push(kahan_sum((0..k).map(|x| lhs[[i, x]] * rhs[[x, j]])));
        }
    }
    NdArray::from_shape_vec((m, n), res_elems).unwrap()
}

/// Singular value decomposition through the eigen-decomposition of `AᵀA`.
///
/// Returns `(U, S, V)` with `U` m × n, `S` the n singular values in
/// descending order and `V` n × n. Columns of `U` whose singular value is
/// below `1e-12` are left zero. Loses about half the digits of the Golub–Reinsch
/// algorithm, which is fine for an oracle on well conditioned input.
pub fn svd_by_eig(a: &NdArray<f64>) -> NdResult<(NdArray<f64>, NdArray<f64>, NdArray<f64>)> {
    let (m, n) = (a.nrows(), a.ncols());
    let ata = a.transpose().dot(a)?;
    let (values, v) = eig(&ata)?;
    let s = values.mapv(|x| x.max(0.).sqrt());
    let av = a.dot(&v)?;
    let mut u = NdArray::zeros((m, n))?;
    for j in 0..n {
        if s[j] < 1e-12 {
            trace!("svd oracle: singular value {} is zero", j);
            continue;
        }
        for i in 0..m {
            u[[i, j]] = av[[i, j]] / s[j];
        }
    }
    Ok((u, s, v))
}

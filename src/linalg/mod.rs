// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Linear algebra.
//!
//! Matrix products ([`dot`]) keep the element type. The decompositions
//! convert their input to `f64` first and return `f64` arrays; they need a
//! 2-d (or 1-d, read as a single row) input.
//!
//! Shape problems are reported as [`ErrorKind::InvalidArgument`], numerical
//! breakdown (a zero pivot, a matrix that is not positive definite, an
//! iteration that does not converge) as [`ErrorKind::Runtime`].
//!
//! [`ErrorKind::InvalidArgument`]: crate::ErrorKind::InvalidArgument
//! [`ErrorKind::Runtime`]: crate::ErrorKind::Runtime

use std::ops::{Index, IndexMut};

use num_traits::AsPrimitive;

use crate::error::{not_square, NdResult};
use crate::{Element, NdArray};

pub use self::det::det;
pub use self::eig::{eig, eig_with, EigConfig};
pub use self::impl_linalg::{dot, hat, matrix_power};
pub use self::inv::inv;
pub use self::lu::{cholesky, lu_decomposition, pivot_lu_decomposition};
pub use self::nlls::{gauss_newton_nlls, ModelFn};
pub use self::svd::{lstsq, pinv, svd, Svd, SvdConfig};

mod det;
mod eig;
mod impl_linalg;
mod inv;
mod lu;
mod nlls;
mod svd;

/// Dense row-major `f64` matrix the decompositions work in.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Mat {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Mat {
    pub(crate) fn zeros(rows: usize, cols: usize) -> Mat {
        Mat {
            rows,
            cols,
            data: vec![0.; rows * cols],
        }
    }

    pub(crate) fn eye(n: usize) -> Mat {
        let mut m = Mat::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.;
        }
        m
    }

    /// Convert an array read as a matrix; a 1-d array is one row.
    pub(crate) fn from_array<A>(a: &NdArray<A>) -> NdResult<Mat>
    where
        A: Element + AsPrimitive<f64>,
    {
        let (rows, cols) = a.matrix_dims()?;
        Ok(Mat {
            rows,
            cols,
            data: a.iter().map(|&x| x.as_()).collect(),
        })
    }

    /// Like `from_array`, and **errors** unless the matrix is square.
    pub(crate) fn square_from<A>(a: &NdArray<A>) -> NdResult<Mat>
    where
        A: Element + AsPrimitive<f64>,
    {
        let m = Mat::from_array(a)?;
        if m.rows != m.cols {
            return Err(not_square(a.dims()));
        }
        Ok(m)
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            for j in 0..self.cols {
                self.data.swap(a * self.cols + j, b * self.cols + j);
            }
        }
    }

    pub(crate) fn transpose(&self) -> Mat {
        let mut t = Mat::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t[(j, i)] = self[(i, j)];
            }
        }
        t
    }

    /// `self · rhs`; the inner dimensions must agree.
    pub(crate) fn matmul(&self, rhs: &Mat) -> Mat {
        debug_assert_eq!(self.cols, rhs.rows);
        Mat {
            rows: self.rows,
            cols: rhs.cols,
            data: impl_linalg::mat_mul(self.rows, self.cols, rhs.cols, &self.data, &rhs.data),
        }
    }

    pub(crate) fn into_array(self) -> NdArray<f64> {
        NdArray::from_matrix_vec(self.rows, self.cols, self.data)
    }
}

impl Index<(usize, usize)> for Mat {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Mat {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;

    #[test]
    fn mat_round_trip() {
        let a = nd![[1, 2, 3], [4, 5, 6]];
        let m = Mat::from_array(&a).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m[(1, 0)], 4.);
        assert_eq!(m.row(1), &[4., 5., 6.]);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.into_array(), nd![[1., 2., 3.], [4., 5., 6.]]);
        assert!(Mat::square_from(&a).unwrap_err().is_invalid_argument());
        assert!(Mat::from_array(&NdArray::<f64>::zeros((2, 2, 2)).unwrap()).is_err());
    }

    #[test]
    fn mat_swaps() {
        let mut m = Mat::eye(3);
        m.swap_rows(0, 2);
        assert_eq!(m.row(0), &[0., 0., 1.]);
        assert_eq!(m.row(2), &[1., 0., 0.]);
        m.swap_rows(2, 0);
        assert_eq!(m, Mat::eye(3));
    }
}

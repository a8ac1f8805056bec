// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use log::debug;

use super::{inv, Mat};
use crate::error::{empty_array, invalid_argument, NdResult};
use crate::{Element, NdArray};

/// A model function or one of its partial derivatives: called with one row
/// of coordinates and the current parameters.
pub type ModelFn<'a, A> = &'a dyn Fn(&NdArray<A>, &NdArray<f64>) -> f64;

/// Nonlinear least squares by the Gauss–Newton method.
///
/// Fits the parameters β of `function(coordinate, β) ≈ measurement`, one
/// coordinate per row of `coordinates`. `derivatives[j]` is the partial
/// derivative of `function` with respect to `β[j]`; `initial_guess` gives
/// the starting β. Each of the `iterations` steps solves the normal
/// equations `(JᵀJ) Δβ = Jᵀr` of the Jacobian `J` and residuals `r`.
///
/// Returns the fitted β and the root mean square of the final residuals.
///
/// **Errors** if the number of coordinate rows differs from the number of
/// measurements, if there is not one derivative per parameter, and with a
/// runtime error if `JᵀJ` becomes singular.
///
/// ```
/// use ndnum::linalg::gauss_newton_nlls;
/// use ndnum::{nd, NdArray};
/// use approx::assert_abs_diff_eq;
///
/// // y = b0 * exp(b1 * x)
/// let xs = nd![[0.], [1.], [2.], [3.]];
/// let ys = xs.mapv(|x: f64| 2. * (0.5 * x).exp()).flatten();
/// let f = |c: &NdArray<f64>, b: &NdArray<f64>| b[0] * (b[1] * c[0]).exp();
/// let d0 = |c: &NdArray<f64>, b: &NdArray<f64>| (b[1] * c[0]).exp();
/// let d1 = |c: &NdArray<f64>, b: &NdArray<f64>| b[0] * c[0] * (b[1] * c[0]).exp();
///
/// let (beta, rms) = gauss_newton_nlls(10, &xs, &ys, &f, &[&d0, &d1], &[1.5, 0.4]).unwrap();
/// assert_abs_diff_eq!(beta, nd![2., 0.5], epsilon = 1e-8);
/// assert!(rms < 1e-8);
/// ```
pub fn gauss_newton_nlls<A>(
    iterations: usize,
    coordinates: &NdArray<A>,
    measurements: &NdArray<f64>,
    function: ModelFn<'_, A>,
    derivatives: &[ModelFn<'_, A>],
    initial_guess: &[f64],
) -> NdResult<(NdArray<f64>, f64)>
where
    A: Element,
{
    let (rows, _) = coordinates.matrix_dims()?;
    if rows != measurements.size() {
        return Err(invalid_argument(format!(
            "coordinates number of rows ({}) and measurements size ({}) must be the same",
            rows,
            measurements.size()
        )));
    }
    if derivatives.len() != initial_guess.len() {
        return Err(invalid_argument(format!(
            "need one derivative per parameter, got {} derivatives for {} parameters",
            derivatives.len(),
            initial_guess.len()
        )));
    }
    if rows == 0 {
        return Err(empty_array("gauss_newton_nlls"));
    }

    let coordinates = coordinates.to_matrix()?;
    let coordinate_rows = (0..rows)
        .map(|i| coordinates.row(i))
        .collect::<NdResult<Vec<_>>>()?;
    let params = initial_guess.len();
    let mut beta = NdArray::from_vec(initial_guess.to_vec());
    let mut residuals = Mat::zeros(rows, 1);
    let mut jacobian = Mat::zeros(rows, params);

    for _ in 0..iterations {
        for (i, coordinate) in coordinate_rows.iter().enumerate() {
            residuals[(i, 0)] = measurements[i] - function(coordinate, &beta);
            for (j, derivative) in derivatives.iter().enumerate() {
                jacobian[(i, j)] = derivative(coordinate, &beta);
            }
        }
        let jt = jacobian.transpose();
        let jtj_inv = Mat::from_array(&inv(&jt.matmul(&jacobian).into_array())?)?;
        let delta = jtj_inv.matmul(&jt).matmul(&residuals);
        for (j, b) in beta.iter_mut().enumerate() {
            *b += delta[(j, 0)];
        }
    }

    let sum_sq: f64 = coordinate_rows
        .iter()
        .enumerate()
        .map(|(i, coordinate)| (measurements[i] - function(coordinate, &beta)).powi(2))
        .sum();
    let rms = (sum_sq / rows as f64).sqrt();
    debug!("gauss-newton: {} iterations, rms residual {:e}", iterations, rms);
    Ok((beta, rms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fits_a_line() {
        let xs = nd![[0.], [1.], [2.], [3.]];
        let ys = nd![1., 3., 5., 7.];
        let f = |c: &NdArray<f64>, b: &NdArray<f64>| b[0] + b[1] * c[0];
        let d0 = |_: &NdArray<f64>, _: &NdArray<f64>| 1.;
        let d1 = |c: &NdArray<f64>, _: &NdArray<f64>| c[0];
        let (beta, rms) = gauss_newton_nlls(1, &xs, &ys, &f, &[&d0, &d1], &[0., 0.]).unwrap();
        assert_abs_diff_eq!(beta, nd![1., 2.], epsilon = 1e-10);
        assert_abs_diff_eq!(rms, 0., epsilon = 1e-10);
    }

    #[test]
    fn argument_errors() {
        let xs = nd![[0.], [1.]];
        let f = |c: &NdArray<f64>, b: &NdArray<f64>| b[0] * c[0];
        let d0 = |c: &NdArray<f64>, _: &NdArray<f64>| c[0];
        assert!(gauss_newton_nlls(1, &xs, &nd![1., 2., 3.], &f, &[&d0], &[1.]).is_err());
        assert!(gauss_newton_nlls(1, &xs, &nd![1., 2.], &f, &[&d0], &[1., 2.]).is_err());
    }
}

#![allow(clippy::float_cmp)]

use approx::assert_abs_diff_eq;

use ndnum::linalg::{
    cholesky, det, eig, eig_with, gauss_newton_nlls, hat, inv, lstsq, lu_decomposition, matrix_power, pinv, svd,
    EigConfig, Svd,
};
use ndnum::{dot, eye, nd, ErrorKind, NdArray};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn determinants() {
    assert_eq!(det(&eye::<f64>(4)).unwrap(), 1.);
    assert_eq!(det(&nd![[1, 2], [3, 4]]).unwrap(), -2);
    assert_eq!(det(&nd![[2, 0, 0], [0, 3, 0], [0, 0, 4]]).unwrap(), 24);
    let err = det(&nd![[1, 2, 3], [4, 5, 6]]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn matrix_products() {
    let a = nd![[1, 2], [3, 4]];
    assert_eq!(dot(&a, &eye(2)).unwrap(), a);
    assert_eq!(a.dot(&nd![[1], [1]]).unwrap(), nd![[3], [7]]);
    assert!(a.dot(&nd![[1, 2, 3]]).unwrap_err().is_invalid_argument());

    assert_eq!(matrix_power(&a, 0).unwrap(), eye::<f64>(2));
    assert_eq!(matrix_power(&a, 2).unwrap(), nd![[7., 10.], [15., 22.]]);
    let back = matrix_power(&a, -1).unwrap().dot(&a.astype::<f64>()).unwrap();
    assert_abs_diff_eq!(back, eye::<f64>(2), epsilon = 1e-12);

    let v = nd![1., 2., 3.];
    let w = nd![-1., 0., 4.];
    let hv = hat(&v).unwrap();
    let crossed = hv.dot(&w.clone().into_shape((3, 1)).unwrap()).unwrap().flatten();
    assert_eq!(crossed, ndnum::cross(&v, &w).unwrap());
    assert!(hat(&nd![1., 2.]).is_err());
}

#[test]
fn lu_and_cholesky() {
    let (l, u) = lu_decomposition(&nd![[4, 3], [6, 3]]).unwrap();
    assert_eq!(l, nd![[1., 0.], [1.5, 1.]]);
    assert_eq!(u, nd![[4., 3.], [0., -1.5]]);
    assert_eq!(lu_decomposition(&nd![[0, 1], [1, 0]]).unwrap_err().kind(), ErrorKind::Runtime);

    let a = nd![[4., 12., -16.], [12., 37., -43.], [-16., -43., 98.]];
    let l = cholesky(&a).unwrap();
    assert_abs_diff_eq!(l, nd![[2., 0., 0.], [6., 1., 0.], [-8., 5., 3.]], epsilon = 1e-12);
    assert_eq!(cholesky(&nd![[1., 2.], [2., 1.]]).unwrap_err().kind(), ErrorKind::Runtime);
    assert!(cholesky(&nd![[1., 2.]]).unwrap_err().is_invalid_argument());
}

#[test]
fn inverse() {
    let a = nd![[4., 7.], [2., 6.]];
    let a_inv = inv(&a).unwrap();
    assert_abs_diff_eq!(a_inv, nd![[0.6, -0.7], [-0.2, 0.4]], epsilon = 1e-12);
    assert!(inv(&nd![[1., 2.], [2., 4.]]).unwrap_err().is_runtime());
    assert!(inv(&nd![[1., 2., 3.]]).unwrap_err().is_invalid_argument());
}

#[test]
fn symmetric_eigen() {
    init_logging();
    let (values, vectors) = eig(&nd![[2., 0.], [0., 3.]]).unwrap();
    assert_eq!(values, nd![3., 2.]);
    assert_eq!(vectors.dims(), &[2, 2]);

    let a = nd![[2., 1.], [1., 2.]];
    let (values, vectors) = eig(&a).unwrap();
    assert_abs_diff_eq!(values, nd![3., 1.], epsilon = 1e-12);
    let av = a.dot(&vectors).unwrap();
    for j in 0..2 {
        for i in 0..2 {
            assert_abs_diff_eq!(av[[i, j]], values[j] * vectors[[i, j]], epsilon = 1e-12);
        }
    }

    let config = EigConfig::default().max_iterations(0);
    let err = eig_with(&nd![[1., 2.], [2., 1.]], &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Runtime);
}

#[test]
fn singular_values() {
    init_logging();
    let a = nd![[3., 0.], [0., -2.], [0., 0.]];
    let (u, s, vt) = svd(&a).unwrap();
    assert_abs_diff_eq!(s, nd![3., 2.], epsilon = 1e-12);
    assert_eq!(u.dims(), &[3, 2]);
    assert_eq!(vt.dims(), &[2, 2]);

    let decomposition = Svd::new(&a).unwrap();
    assert_abs_diff_eq!(decomposition.reconstruct(), a, epsilon = 1e-12);

    let p = pinv(&a).unwrap();
    assert_abs_diff_eq!(p, nd![[1. / 3., 0., 0.], [0., -0.5, 0.]], epsilon = 1e-12);

    // overdetermined y = 1 + 2x
    let design = nd![[1., 0.], [1., 1.], [1., 2.], [1., 3.]];
    let y = nd![1., 3., 5., 7.];
    assert_abs_diff_eq!(lstsq(&design, &y, 1e-12).unwrap(), nd![1., 2.], epsilon = 1e-10);
    assert!(lstsq(&design, &nd![1., 2.], 1e-12).is_err());
}

#[test]
fn nonlinear_least_squares() {
    // y = b0 * x / (b1 + x)
    let xs = nd![[0.5], [1.], [2.], [4.], [8.]];
    let ys = xs.mapv(|x| 3. * x / (1.5 + x)).flatten();
    let f = |c: &NdArray<f64>, b: &NdArray<f64>| b[0] * c[0] / (b[1] + c[0]);
    let d0 = |c: &NdArray<f64>, b: &NdArray<f64>| c[0] / (b[1] + c[0]);
    let d1 = |c: &NdArray<f64>, b: &NdArray<f64>| -b[0] * c[0] / (b[1] + c[0]).powi(2);

    let (beta, rms) = gauss_newton_nlls(20, &xs, &ys, &f, &[&d0, &d1], &[2.5, 1.]).unwrap();
    assert_abs_diff_eq!(beta, nd![3., 1.5], epsilon = 1e-8);
    assert!(rms < 1e-8);

    let short = nd![1., 2.];
    assert!(gauss_newton_nlls(5, &xs, &short, &f, &[&d0, &d1], &[1., 1.]).is_err());
    assert!(gauss_newton_nlls(5, &xs, &ys, &f, &[&d0], &[1., 1.]).is_err());
}

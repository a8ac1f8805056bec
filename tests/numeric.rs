#![allow(clippy::float_cmp)]

use approx::assert_abs_diff_eq;

use ndnum::{
    add, allclose, append, argmax, argmin, argsort, array_equal, concatenate, count_nonzero, cumprod, diff, divide,
    equal, flip, fliplr, flipud, gcd, gcd_of, greater, hstack, isclose, lcm, lcm_of, max, mean, median, min, nd,
    nonzero, outer, prod, ptp, repeat, roll, rot90, sort, subtract, sum, tile, unique, var, vstack, where_select,
    Axis,
};

#[test]
fn reductions_by_axis() {
    let a = nd![[1, 2, 3], [4, 5, 6]];
    assert_eq!(sum(&a, Axis::None).unwrap(), nd![21]);
    assert_eq!(sum(&a, Axis::Row).unwrap(), nd![6, 15]);
    assert_eq!(sum(&a, Axis::Col).unwrap(), nd![5, 7, 9]);
    assert_eq!(prod(&a, Axis::Row).unwrap(), nd![6, 120]);
    assert_eq!(max(&a, Axis::Col).unwrap(), nd![4, 5, 6]);
    assert_eq!(min(&a, Axis::Row).unwrap(), nd![1, 4]);
    assert_eq!(ptp(&a, Axis::None).unwrap(), nd![5]);
    assert_eq!(argmax(&a, Axis::None).unwrap(), nd![5]);
    assert_eq!(argmin(&a, Axis::Col).unwrap(), nd![0, 0, 0]);
    assert_eq!(mean(&a, Axis::Row).unwrap(), nd![2., 5.]);
    assert_eq!(cumprod(&nd![1, 2, 3, 4], Axis::None).unwrap(), nd![1, 2, 6, 24]);
    assert_eq!(count_nonzero(&nd![[0, 1], [2, 0]], Axis::Col).unwrap(), nd![1, 1]);
}

#[test]
fn statistics() {
    let a = nd![1., 2., 3., 4.];
    assert_eq!(var(&a, Axis::None).unwrap(), nd![1.25]);
    assert_abs_diff_eq!(ndnum::std(&a, Axis::None).unwrap()[0], 1.25f64.sqrt(), epsilon = 1e-12);

    // lower middle element for an even count
    assert_eq!(median(&nd![4, 1, 3, 2], Axis::None).unwrap(), nd![2]);
    assert_eq!(median(&nd![[3, 1], [2, 5], [1, 4]], Axis::Col).unwrap(), nd![2, 4]);
}

#[test]
fn empty_reductions_are_errors() {
    let empty = ndnum::NdArray::<f64>::zeros((0, 3)).unwrap();
    assert!(max(&empty, Axis::None).is_err());
    assert!(median(&empty, Axis::None).is_err());
    assert!(mean(&empty, Axis::None).is_err());
    assert_eq!(sum(&empty, Axis::None).unwrap(), nd![0.]);
}

#[test]
fn sorting() {
    let a = nd![[3, 1, 2], [9, 7, 8]];
    assert_eq!(sort(&a, Axis::Row).unwrap(), nd![[1, 2, 3], [7, 8, 9]]);
    assert_eq!(sort(&a, Axis::Col).unwrap(), a);
    assert_eq!(argsort(&nd![2, 1, 2, 1], Axis::None).unwrap(), nd![1, 3, 0, 2]);
    assert_eq!(unique(&nd![[3, 1], [3, 2]]), nd![1, 2, 3]);
    assert_eq!(nonzero(&nd![0, 5, 0, 7]), vec![nd![1, 3]]);
}

#[test]
fn arrangement() {
    let a = nd![[1, 2, 3], [4, 5, 6]];
    assert_eq!(flip(&a, Axis::None).unwrap(), nd![[6, 5, 4], [3, 2, 1]]);
    assert_eq!(fliplr(&a).unwrap(), nd![[3, 2, 1], [6, 5, 4]]);
    assert_eq!(flipud(&a).unwrap(), nd![[4, 5, 6], [1, 2, 3]]);
    assert_eq!(roll(&a, 1, Axis::None).unwrap(), nd![[6, 1, 2], [3, 4, 5]]);

    let b = nd![[1, 2], [3, 4]];
    assert_eq!(rot90(&b, 1).unwrap(), nd![[2, 4], [1, 3]]);
    assert_eq!(rot90(&b, 2).unwrap(), nd![[4, 3], [2, 1]]);
    assert_eq!(rot90(&rot90(&b, 1).unwrap(), -1).unwrap(), b);
    assert_eq!(repeat(&b, 2, Axis::Row).unwrap(), nd![[1, 1, 2, 2], [3, 3, 4, 4]]);
    assert_eq!(tile(&nd![[1, 2]], 2, 2).unwrap(), nd![[1, 2, 1, 2], [1, 2, 1, 2]]);
    assert_eq!(diff(&nd![[1, 4, 9], [2, 2, 5]], Axis::Row).unwrap(), nd![[3, 5], [0, 3]]);
    assert_eq!(outer(&nd![1, 2], &nd![1, 10, 100]).unwrap(), nd![[1, 10, 100], [2, 20, 200]]);

    let mask = nd![true, false, true];
    assert_eq!(where_select(&mask, &nd![1, 2, 3], &nd![7, 8, 9]).unwrap(), nd![1, 8, 3]);
    assert!(where_select(&mask, &nd![1, 2], &nd![7, 8]).is_err());
}

#[test]
fn stacking() {
    let a = nd![[1, 2], [3, 4]];
    let b = nd![[5, 6]];
    assert_eq!(vstack(&[&a, &b]).unwrap(), nd![[1, 2], [3, 4], [5, 6]]);
    assert!(hstack(&[&a, &b]).unwrap_err().is_invalid_argument());
    assert_eq!(hstack(&[&a, &a]).unwrap(), nd![[1, 2, 1, 2], [3, 4, 3, 4]]);
    assert_eq!(concatenate(&[&a, &b], Axis::None).unwrap(), nd![1, 2, 3, 4, 5, 6]);
    assert_eq!(append(&a, &b, Axis::Row).unwrap().dims(), &[3, 2]);
    assert!(concatenate::<i32>(&[], Axis::None).is_err());
}

#[test]
fn checked_elementwise() {
    let a = nd![[1., 2.], [3., 4.]];
    let b = nd![[4., 3.], [2., 1.]];
    assert_eq!(add(&a, &b).unwrap(), nd![[5., 5.], [5., 5.]]);
    assert_eq!(subtract(&a, &a).unwrap(), nd![[0., 0.], [0., 0.]]);
    assert_eq!(divide(&a, &b).unwrap()[[1, 1]], 4.);
    assert!(add(&a, &nd![1., 2.]).unwrap_err().is_invalid_argument());

    assert_eq!(equal(&a, &b).unwrap(), nd![[false, false], [false, false]]);
    assert_eq!(greater(&a, &b).unwrap(), nd![[false, false], [true, true]]);
    assert!(array_equal(&a, &a.copy()));
    assert!(!array_equal(&a, &a.flatten()));
    assert!(allclose(&a, &a.mapv(|x| x + 1e-10), 1e-9).unwrap());
    assert_eq!(isclose(&nd![1., 2.], &nd![1., 2.5], 0., 0.1).unwrap(), nd![true, false]);
}

#[test]
#[should_panic]
fn operator_shape_mismatch_panics() {
    let _ = &nd![1, 2, 3] + &nd![1, 2];
}

#[test]
fn float_methods() {
    let a = nd![-1.5, 0.25, 2.75];
    assert_eq!(a.clip(-1., 1.), nd![-1., 0.25, 1.]);
    assert_eq!(a.round_to(1), nd![-1.5, 0.3, 2.8]);
    assert_eq!(a.abs(), nd![1.5, 0.25, 2.75]);
    assert_abs_diff_eq!(nd![0., 1.].exp()[1], std::f64::consts::E, epsilon = 1e-12);
}

#[test]
fn integer_functions() {
    assert_eq!(gcd(&nd![12, 18], &nd![8, 27]).unwrap(), nd![4, 9]);
    assert_eq!(lcm(&nd![4, 6], &nd![6, 4]).unwrap(), nd![12, 12]);
    assert_eq!(gcd_of(&nd![12, 18, 30]), 6);
    assert_eq!(lcm_of(&nd![2, 3, 4]), 12);
}

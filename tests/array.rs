#![allow(clippy::float_cmp)]

use defmac::defmac;
use itertools::iproduct;

use ndnum::{arange, eye, nd, NdArray, Shape};

#[test]
fn nested_construction() {
    let a = nd![[1, 2], [3, 4]];
    assert_eq!(a.dims(), &[2, 2]);
    assert_eq!(a.size(), 4);
    assert_eq!(a[[1, 0]], 3);

    let ragged = NdArray::from_nested(&[vec![1, 2, 3], vec![4, 5]]);
    assert!(ragged.unwrap_err().is_invalid_argument());
    let ragged = NdArray::from_nested3(&[vec![vec![1, 2], vec![3, 4]], vec![vec![5, 6]]]);
    assert!(ragged.is_err());
}

#[test]
fn reshape_checks_size() {
    let mut a = NdArray::<f64>::zeros((2, 3)).unwrap();
    a.reshape((3, 2)).unwrap();
    assert_eq!(a.dims(), &[3, 2]);
    assert_eq!(a.strides(), &[2, 1]);
    let err = a.reshape((2, 2)).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(a.dims(), &[3, 2]);

    let mut b = arange(0, 24, 1).unwrap();
    b.reshape_infer(&[2, -1, 3]).unwrap();
    assert_eq!(b.dims(), &[2, 4, 3]);
    assert!(b.reshape_infer(&[-1, -1]).is_err());
    assert!(b.reshape_infer(&[5, -1]).is_err());
}

#[test]
fn byte_strides() {
    let a = NdArray::<f64>::zeros((2, 3, 4)).unwrap();
    assert_eq!(a.strides(), &[12, 4, 1]);
    assert_eq!(a.byte_strides(), vec![96, 32, 8]);
    assert_eq!(a.item_size(), 8);
    assert_eq!(a.nbytes(), 192);
}

#[test]
fn checked_access() {
    let mut a = NdArray::from_shape_vec((2, 5), (0..10).collect()).unwrap();
    assert_eq!(*a.at(&[1, 4]).unwrap(), 9);
    let err = a.at_flat(12).unwrap_err();
    assert_eq!(err.message(), "invalid index 12 for array of size 10");
    assert!(a.at(&[2, 0]).is_err());
    assert!(a.at(&[1]).is_err());
    assert_eq!(a.get(&[0, 5]), None);
    *a.at_mut(&[0, 0]).unwrap() = 100;
    assert_eq!(a.front(), Some(&100));
    assert_eq!(a.back(), Some(&9));
}

#[test]
fn flat_and_multi_index_agree() {
    let a = NdArray::from_shape_vec((3, 4, 5), (0..60).collect()).unwrap();
    for (i, j, k) in iproduct!(0..3, 0..4, 0..5) {
        let flat = a.flat_index(&[i, j, k]).unwrap();
        assert_eq!(flat, i * 20 + j * 5 + k);
        assert_eq!(a[[i, j, k]], a[flat]);
    }
}

#[test]
fn clone_is_copy_on_write() {
    let a = nd![1., 2., 3.];
    let mut b = a.clone();
    assert!(a.shares_storage(&b));
    assert!(!a.is_unique());
    b[0] = 10.;
    assert!(!a.shares_storage(&b));
    assert_eq!(a, nd![1., 2., 3.]);
    assert_eq!(b, nd![10., 2., 3.]);
    assert!(a.is_unique());

    let c = a.copy();
    assert!(!c.shares_storage(&a));
}

#[test]
fn resize_and_item() {
    let mut a = nd![[1, 2], [3, 4]];
    a.resize((3, 2)).unwrap();
    assert_eq!(a, nd![[1, 2], [3, 4], [0, 0]]);
    a.resize(2).unwrap();
    assert_eq!(a, nd![1, 2]);
    assert!(a.item().is_err());
    assert_eq!(nd![7].item().unwrap(), 7);
}

#[test]
fn constructors() {
    defmac!(check_fill shape, value => {
        let a = NdArray::from_elem(shape, value).unwrap();
        assert!(a.iter().all(|&x| x == value));
        assert_eq!(a.shape(), &Shape::new(&[2, 3]).unwrap());
    });
    check_fill!((2, 3), 1.5);
    check_fill!([2, 3], 0u8);
    check_fill!(vec![2, 3], -4i64);

    assert_eq!(NdArray::<i32>::ones(3).unwrap(), nd![1, 1, 1]);
    assert_eq!(eye::<i32>(2), nd![[1, 0], [0, 1]]);
    let f = NdArray::from_shape_fn((2, 3), |ix: &[usize]| ix[0] * 10 + ix[1]).unwrap();
    assert_eq!(f, nd![[0, 1, 2], [10, 11, 12]]);
    assert!(NdArray::from_shape_vec((2, 2), vec![1, 2, 3]).is_err());
    assert!(NdArray::<f32>::zeros(Vec::<usize>::new()).is_err());
}

#[test]
fn transpose_and_flatten() {
    let a = nd![[1, 2, 3], [4, 5, 6]];
    let t = a.transpose();
    assert_eq!(t, nd![[1, 4], [2, 5], [3, 6]]);
    assert_eq!(t.transpose(), a);
    assert_eq!(a.flatten(), nd![1, 2, 3, 4, 5, 6]);
    assert_eq!(a.astype::<f64>(), nd![[1., 2., 3.], [4., 5., 6.]]);
}

#[test]
fn two_d_helpers() {
    let mut a = nd![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    assert_eq!(a.row(1).unwrap(), nd![4, 5, 6]);
    assert_eq!(a.column(2).unwrap(), nd![3, 6, 9]);
    assert_eq!(a.diagonal(0).unwrap(), nd![1, 5, 9]);
    assert_eq!(a.diagonal(1).unwrap(), nd![2, 6]);
    assert_eq!(a.trace(0).unwrap(), 15);
    a.swap_rows(0, 2).unwrap();
    assert_eq!(a.row(0).unwrap(), nd![7, 8, 9]);
    assert!(a.swap_cols(0, 3).is_err());

    let mask = a.mapv(|x| x % 2 == 0);
    assert_eq!(a.select(&mask).unwrap(), nd![8, 4, 6, 2]);
    a.put_mask(&mask, 0).unwrap();
    assert_eq!(a, nd![[7, 0, 9], [0, 5, 0], [1, 0, 3]]);
}

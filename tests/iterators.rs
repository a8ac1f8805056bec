use itertools::Itertools;

use ndnum::{nd, NdArray};

#[test]
fn flat_iteration_is_row_major() {
    let a = NdArray::from_shape_vec((2, 3), (0..6).collect()).unwrap();
    assert_eq!(a.iter().cloned().collect_vec(), (0..6).collect_vec());
    assert_eq!(a.iter().rev().take(2).cloned().collect_vec(), vec![5, 4]);

    let mut b = a.clone();
    for x in b.iter_mut() {
        *x *= 10;
    }
    assert_eq!(b, nd![[0, 10, 20], [30, 40, 50]]);
    assert_eq!(a[5], 5);
}

#[test]
fn rows_and_columns() {
    let a = nd![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    let rows = a.rows().map(|r| r.to_vec()).collect_vec();
    assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    assert_eq!(a.rows().len(), 3);
    assert_eq!(a.rows().next_back(), Some(&[7, 8, 9][..]));

    assert_eq!(a.row_iter(1).unwrap().sum::<i32>(), 15);
    assert!(a.row_iter(3).is_err());

    let mut col = a.col_iter(2).unwrap();
    assert_eq!(col.len(), 3);
    assert_eq!(col.nth(1), Some(&6));
    assert_eq!(col.next(), Some(&9));
    assert_eq!(col.next(), None);
    assert!(a.col_iter(3).is_err());
}

#[test]
fn mutable_lanes() {
    let mut a = nd![[1, 2], [3, 4]];
    for x in a.col_iter_mut(0).unwrap() {
        *x = -*x;
    }
    for x in a.row_iter_mut(1).unwrap() {
        *x += 100;
    }
    assert_eq!(a, nd![[-1, 2], [97, 104]]);
}

#[test]
fn stacked_rows_of_3d() {
    let a = NdArray::from_shape_vec((2, 2, 2), (0..8).collect()).unwrap();
    assert_eq!(a.rows().count(), 4);
    assert_eq!(a.rows().last(), Some(&[6, 7][..]));
    assert!(a.col_iter(0).is_err());
}

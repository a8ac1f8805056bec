// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension::Axis;
use crate::error::{incompatible_shapes, invalid_argument, NdResult};
use crate::{Element, NdArray};

/// Concatenate arrays.
///
/// - `Axis::None` joins the flattened arrays into one 1-d array.
/// - `Axis::Row` stacks the matrices on top of each other; they must have
///   the same number of columns.
/// - `Axis::Col` places the matrices side by side; they must have the same
///   number of rows.
///
/// ***Errors*** if the array shapes differ along the other axis, or if
/// `arrays` is empty.
///
/// ```
/// use ndnum::{concatenate, nd, Axis};
///
/// let a = nd![[1, 2], [3, 4]];
/// let b = nd![[5, 6]];
/// assert_eq!(concatenate(&[&a, &b], Axis::Row).unwrap(), nd![[1, 2], [3, 4], [5, 6]]);
/// assert!(concatenate(&[&a, &b], Axis::Col).is_err());
/// ```
pub fn concatenate<A: Element>(arrays: &[&NdArray<A>], axis: Axis) -> NdResult<NdArray<A>> {
    if arrays.is_empty() {
        return Err(invalid_argument("need at least one array to concatenate"));
    }
    match axis {
        Axis::None => {
            let v = arrays.iter().flat_map(|a| a.iter().cloned()).collect();
            Ok(NdArray::from_vec(v))
        }
        Axis::Row => {
            let (_, cols) = arrays[0].matrix_dims()?;
            let mut rows = 0;
            let mut v = Vec::new();
            for a in arrays {
                let (r, c) = a.matrix_dims()?;
                if c != cols {
                    return Err(incompatible_shapes(arrays[0].dims(), a.dims()));
                }
                rows += r;
                v.extend_from_slice(a.as_slice());
            }
            NdArray::from_shape_vec((rows, cols), v)
        }
        Axis::Col => {
            let (rows, _) = arrays[0].matrix_dims()?;
            let mut cols = 0;
            for a in arrays {
                let (r, c) = a.matrix_dims()?;
                if r != rows {
                    return Err(incompatible_shapes(arrays[0].dims(), a.dims()));
                }
                cols += c;
            }
            let mut v = Vec::with_capacity(rows * cols);
            for i in 0..rows {
                for a in arrays {
                    v.extend(a.row_iter(i)?.cloned());
                }
            }
            NdArray::from_shape_vec((rows, cols), v)
        }
    }
}

/// Stack arrays vertically (row wise), `concatenate(arrays, Axis::Row)`.
///
/// ```
/// use ndnum::{nd, vstack};
///
/// assert_eq!(vstack(&[&nd![1, 2], &nd![3, 4]]).unwrap(), nd![[1, 2], [3, 4]]);
/// ```
pub fn vstack<A: Element>(arrays: &[&NdArray<A>]) -> NdResult<NdArray<A>> {
    concatenate(arrays, Axis::Row)
}

/// Stack arrays horizontally (column wise), `concatenate(arrays, Axis::Col)`.
///
/// ```
/// use ndnum::{hstack, nd};
///
/// let a = nd![[1], [2]];
/// assert_eq!(hstack(&[&a, &a]).unwrap(), nd![[1, 1], [2, 2]]);
/// ```
pub fn hstack<A: Element>(arrays: &[&NdArray<A>]) -> NdResult<NdArray<A>> {
    concatenate(arrays, Axis::Col)
}

/// Append `values` to `a` along `axis`; a copy of `concatenate(&[a, values], axis)`.
pub fn append<A: Element>(a: &NdArray<A>, values: &NdArray<A>, axis: Axis) -> NdResult<NdArray<A>> {
    concatenate(&[a, values], axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd;

    #[test]
    fn concatenating() {
        let a = nd![[2., 2.], [3., 3.]];
        let b = concatenate(&[&a, &a], Axis::Row).unwrap();
        assert_eq!(b, nd![[2., 2.], [3., 3.], [2., 2.], [3., 3.]]);

        let c = concatenate(&[&a, &b], Axis::Row).unwrap();
        assert_eq!(c.dims(), &[6, 2]);

        let d = concatenate(&[&a, &nd![[4.], [5.]]], Axis::Col).unwrap();
        assert_eq!(d, nd![[2., 2., 4.], [3., 3., 5.]]);

        let e = append(&a, &nd![[9.]], Axis::None).unwrap();
        assert_eq!(e, nd![2., 2., 3., 3., 9.]);

        let res = concatenate::<f64>(&[], Axis::None);
        assert!(res.is_err());
    }
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::error::{not_square, NdResult};
use crate::{Element, LinalgScalar, NdArray};

/// Determinant of a square matrix, in the element type.
///
/// Orders 1, 2 and 3 use the closed forms; larger matrices use cofactor
/// expansion along the first row, which takes O(n!) time and is only
/// practical up to an order of about 10. The determinant of a 0 × 0 matrix
/// is one.
///
/// **Errors** if `a` is not square.
///
/// ```
/// use ndnum::linalg::det;
/// use ndnum::{identity, nd};
///
/// assert_eq!(det(&nd![[1, 2], [3, 4]]).unwrap(), -2);
/// assert_eq!(det(&identity::<f64>(4)).unwrap(), 1.);
/// ```
pub fn det<A>(a: &NdArray<A>) -> NdResult<A>
where
    A: Element + LinalgScalar,
{
    let (rows, cols) = a.matrix_dims()?;
    if rows != cols {
        return Err(not_square(a.dims()));
    }
    Ok(det_of(rows, a.as_slice()))
}

fn det_of<A: LinalgScalar>(n: usize, m: &[A]) -> A {
    match n {
        0 => A::one(),
        1 => m[0],
        2 => m[0] * m[3] - m[1] * m[2],
        3 => {
            let aei = m[0] * m[4] * m[8];
            let bfg = m[1] * m[5] * m[6];
            let cdh = m[2] * m[3] * m[7];
            let ceg = m[2] * m[4] * m[6];
            let bdi = m[1] * m[3] * m[8];
            let afh = m[0] * m[5] * m[7];
            aei + bfg + cdh - ceg - bdi - afh
        }
        _ => {
            let mut det = A::zero();
            let mut minor = Vec::with_capacity((n - 1) * (n - 1));
            for c in 0..n {
                minor.clear();
                for row in m.chunks(n).skip(1) {
                    minor.extend(
                        row.iter()
                            .enumerate()
                            .filter(|&(j, _)| j != c)
                            .map(|(_, &x)| x),
                    );
                }
                let term = m[c] * det_of(n - 1, &minor);
                det = if c % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::dimension;
use crate::{Element, NdArray};

fn format_array<A, F>(array: &NdArray<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    A: Element,
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let dims = array.dims();
    let ndim = dims.len();
    let mut index = vec![0; ndim];
    let mut last_index = index.clone();
    for _ in 0..ndim {
        write!(f, "[")?;
    }
    let mut first = true;
    // Walk the multi-index and take the index wraparounds
    // as cues for when to add []'s and how many to add.
    for elt in array.iter() {
        for (i, (a, b)) in index
            .iter()
            .take(ndim - 1)
            .zip(last_index.iter())
            .enumerate()
        {
            if a != b {
                // New row.
                // # of ['s needed
                let n = ndim - i - 1;
                for _ in 0..n {
                    write!(f, "]")?;
                }
                writeln!(f, ",")?;
                for _ in 0..ndim - n {
                    write!(f, " ")?;
                }
                for _ in 0..n {
                    write!(f, "[")?;
                }
                first = true;
                last_index.copy_from_slice(&index);
                break;
            }
        }
        if !first {
            write!(f, ", ")?;
        }
        first = false;
        format(elt, f)?;
        dimension::next_index(dims, &mut index);
    }
    for _ in 0..ndim {
        write!(f, "]")?;
    }
    Ok(())
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: Element + fmt::Display> fmt::Display for NdArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: Element + fmt::Debug> fmt::Debug for NdArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Add extra information for Debug
        format_array(self, f, <_>::fmt)?;
        write!(
            f,
            " shape={:?}, strides={:?}, ndim={}",
            self.dims(),
            self.strides(),
            self.ndim()
        )
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: Element + fmt::LowerExp> fmt::LowerExp for NdArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

#[cfg(test)]
mod tests {
    use crate::{nd, NdArray};

    #[test]
    fn nested_brackets() {
        assert_eq!(format!("{}", nd![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format!("{}", nd![[1, 2], [3, 4]]), "[[1, 2],\n [3, 4]]");
        let a = NdArray::from_shape_vec((2, 2, 2), (1..9).collect()).unwrap();
        assert_eq!(
            format!("{}", a),
            "[[[1, 2],\n  [3, 4]],\n [[5, 6],\n  [7, 8]]]"
        );
        assert_eq!(format!("{:.1}", nd![0.25, 1.]), "[0.2, 1.0]");
    }

    #[test]
    fn debug_has_layout() {
        let s = format!("{:?}", nd![[1, 2]]);
        assert_eq!(s, "[[1, 2]] shape=[1, 2], strides=[2, 1], ndim=2");
    }
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndnum"]
#![doc(html_root_url = "https://docs.rs/ndnum/0.3/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(
    clippy::many_single_char_names,
    clippy::needless_range_loop,
    clippy::deref_addrof,
    clippy::manual_memcpy
)]

//! The `ndnum` crate provides [`NdArray`], a dense n-dimensional array for
//! numerical work, together with element-wise and reduction functions,
//! linear algebra and rotation utilities.
//!
//! - The array stores its elements in one contiguous, row-major buffer that
//!   is reference counted. Cloning an array is cheap and shares the buffer;
//!   the first write through either handle copies it (copy on write). Use
//!   [`NdArray::copy`] for an eager deep copy.
//! - Slicing ([`Slice`]) produces new arrays; it never aliases.
//! - Reductions take an [`Axis`]: the whole array, each row or each column.
//! - Fallible operations return [`NdResult`]. An [`NdError`] is either an
//!   *invalid argument* (bad shape or index) or a *runtime error*
//!   (numerical breakdown such as a singular matrix).
//! - Linear algebra lives in [`linalg`] and works on `f64` matrices: LU,
//!   Cholesky, determinant, inverse, a symmetric Jacobi eigensolver,
//!   Golub–Reinsch SVD, least squares and pseudo-inverse.
//! - [`rotations`] has quaternions, direction cosine matrices and
//!   Wahba's problem.
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default.
//! - `serde`: serialization of arrays, shapes, slices and solver configs.
//!
//! ## Example
//!
//! ```
//! use ndnum::prelude::*;
//!
//! let a = nd![[1., 2.], [3., 4.]];
//! assert_eq!(a[[1, 0]], 3.);
//!
//! let b = a.dot(&a.transpose()).unwrap();
//! assert_eq!(b, nd![[5., 11.], [11., 25.]]);
//!
//! let s = ndnum::sum(&a, Axis::Col).unwrap();
//! assert_eq!(s, nd![4., 6.]);
//! ```

#[macro_use]
mod macro_utils;

pub use crate::dimension::{Axis, IntoShape, Shape};
pub use crate::error::{ErrorKind, NdError, NdResult};
pub use crate::free_functions::*;
pub use crate::impl_ops::ScalarOperand;
pub use crate::iterators::{ColIter, ColIterMut, Rows};
pub use crate::linalg::dot;
pub use crate::linalg_traits::{LinalgScalar, NdFloat};
pub use crate::numeric::*;
pub use crate::slice::Slice;
pub use crate::stacking::{append, concatenate, hstack, vstack};
pub use crate::tri::{tril, triu};

mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod arrayformat;
mod arraytraits;
mod data_repr;
mod dimension;
mod error;
mod free_functions;
mod impl_2d;
mod impl_constructors;
mod impl_methods;
mod impl_ops;
mod iterators;
pub mod linalg;
mod linalg_traits;
mod linspace;
mod numeric;
pub mod prelude;
pub mod rotations;
mod slice;
mod stacking;
mod tri;

use crate::data_repr::SharedRepr;
use crate::dimension::IxVec;

/// The element contract of an array.
///
/// Elements must be clonable, have a default ("zero") value used by
/// constructors such as [`NdArray::default`] and [`NdArray::resize`], and not
/// borrow anything. This is checked at compile time; every type meeting the
/// bounds is an `Element`.
pub trait Element: Clone + Default + 'static {}

impl<T> Element for T where T: Clone + Default + 'static {}

/// A dense n-dimensional array.
///
/// The array holds:
///
/// - a [`Shape`], the size of each axis; at least one axis,
/// - row-major element strides derived from the shape,
/// - a reference counted buffer of exactly `shape.size()` elements.
///
/// ## Ownership
///
/// `clone()` is a reference count bump, both handles see the same buffer.
/// Methods that need `&mut self` to write elements copy the buffer first when
/// it is shared, so writes through one handle are never visible through
/// another. [`.copy()`](NdArray::copy) makes an independent copy up front.
///
/// ## Indexing
///
/// Index with a flat `usize` offset, or with a multi-index `[i, j, ...]` or
/// `&[usize]`. Indexing panics when out of bounds; the checked variants are
/// [`.at()`](NdArray::at), [`.at_flat()`](NdArray::at_flat) and
/// [`.get()`](NdArray::get).
///
/// ```
/// use ndnum::NdArray;
///
/// let mut a = NdArray::<i32>::zeros((2, 3)).unwrap();
/// a[[1, 2]] = 7;
/// assert_eq!(a[5], 7);
/// assert_eq!(a.strides(), &[3, 1]);
/// assert!(a.at(&[2, 0]).is_err());
/// ```
pub struct NdArray<A: Element> {
    data: SharedRepr<A>,
    shape: Shape,
    strides: IxVec,
}

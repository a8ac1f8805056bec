// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndnum prelude.
//!
//! This module contains the most used types, traits, functions, and macros
//! that you can import easily as a group.
//!
//! ```
//! use ndnum::prelude::*;
//!
//! let a: NdArray<f64> = eye(3);
//! assert_eq!(a.shape(), &Shape::new(&[3, 3]).unwrap());
//! ```

#[doc(no_inline)]
pub use crate::{Axis, Element, IntoShape, NdArray, NdError, NdResult, Shape, Slice};

#[doc(no_inline)]
pub use crate::{arange, arr1, arr2, arr3, eye, linspace, ones_like, zeros_like};

pub use crate::nd;

#[doc(no_inline)]
pub use crate::{LinalgScalar, NdFloat};

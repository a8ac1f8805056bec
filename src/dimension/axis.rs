// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Reduction axis selector.
///
/// Reductions read an array as a matrix (a 1-d array is a single row):
///
/// - `Axis::None` reduces the whole array to a single value.
/// - `Axis::Row` reduces each row, giving one value per row.
/// - `Axis::Col` reduces each column, giving one value per column.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The whole array
    #[default]
    None,
    /// Across the columns of each row
    Row,
    /// Across the rows of each column
    Col,
}

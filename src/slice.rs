// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use crate::error::{invalid_argument, NdResult};

/// A slice (range with step size) over one axis.
///
/// Negative `start` or `end` indexes are counted from the back of the axis.
/// If `end` is `None`, the slice extends to the end of the axis.
///
/// ## Examples
///
/// `Slice::new(0, None, 1)` is the full range of an axis. It can also be
/// created with `Slice::from(..)`.
///
/// `Slice::new(a, Some(b), 2)` is every second element from `a` until `b`.
/// It can also be created with `Slice::from(a..b).step_by(2)`.
///
/// `Slice::new(-3, Some(-1), 1)` over an axis of length 5 selects the
/// indices `2` and `3`.
///
/// ## Normalization
///
/// Before use a slice is normalized against the axis length `L`:
///
/// - negative `start`/`end` are offset by `L`, then both are clamped
///   into `0..=L`;
/// - a zero `step` is an error;
/// - a positive `step` with `start > end` selects nothing;
/// - a negative `step` needs `start >= end` and then walks the same
///   elements as `end..start` would with the positive step, in increasing
///   index order; a negative `step` with `start < end` is an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slice {
    pub start: isize,
    pub end: Option<isize>,
    pub step: isize,
}

/// A slice normalized against an axis length: `start <= stop`, `step > 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct AxisRange {
    pub start: usize,
    pub stop: usize,
    pub step: usize,
}

impl AxisRange {
    /// Number of selected indices, `ceil((stop - start) / step)`.
    #[inline]
    pub fn len(&self) -> usize {
        if self.stop <= self.start {
            0
        } else {
            (self.stop - self.start - 1) / self.step + 1
        }
    }

    pub fn indices(self) -> impl Iterator<Item = usize> + Clone {
        (self.start..self.stop).step_by(self.step)
    }
}

impl Slice {
    /// Create a new `Slice` with the given extents.
    ///
    /// See also the `From` impls, converting from ranges; for example
    /// `Slice::from(i..)` or `Slice::from(j..k)`.
    ///
    /// `step` must be nonzero; this is checked when the slice is used.
    pub fn new(start: isize, end: Option<isize>, step: isize) -> Slice {
        Slice { start, end, step }
    }

    /// Create a new `Slice` with the given step size (multiplied with the
    /// previous step size).
    #[inline]
    pub fn step_by(self, step: isize) -> Self {
        Slice {
            step: self.step * step,
            ..self
        }
    }

    /// Normalize against an axis of length `len`.
    pub(crate) fn normalize(&self, len: usize) -> NdResult<AxisRange> {
        if self.step == 0 {
            return Err(invalid_argument("slice step must be nonzero"));
        }
        let l = len as isize;
        let clamp = |i: isize| {
            let i = if i < 0 { i + l } else { i };
            i.clamp(0, l) as usize
        };
        let mut start = clamp(self.start);
        let mut stop = clamp(self.end.unwrap_or(l));
        if self.step < 0 {
            if start < stop {
                return Err(invalid_argument(format!(
                    "invalid slice {} for array of size {}",
                    self, len
                )));
            }
            std::mem::swap(&mut start, &mut stop);
        } else if start > stop {
            stop = start;
        }
        Ok(AxisRange {
            start,
            stop,
            step: self.step.unsigned_abs(),
        })
    }

    /// Number of indices the slice selects on an axis of length `len`.
    ///
    /// ```
    /// use ndnum::Slice;
    ///
    /// let s = Slice::new(-3, Some(-1), 1);
    /// assert_eq!(s.num_elements(5).unwrap(), 2);
    /// assert_eq!(s.indices(5).unwrap(), vec![2, 3]);
    /// assert!(Slice::new(0, None, 0).num_elements(5).is_err());
    /// ```
    pub fn num_elements(&self, len: usize) -> NdResult<usize> {
        self.normalize(len).map(|r| r.len())
    }

    /// The indices the slice selects on an axis of length `len`.
    pub fn indices(&self, len: usize) -> NdResult<Vec<usize>> {
        self.normalize(len).map(|r| r.indices().collect())
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:", self.start)?;
        if let Some(end) = self.end {
            write!(f, "{}", end)?;
        }
        write!(f, ":{}]", self.step)
    }
}

macro_rules! impl_slice_from_index_type {
    ($index:ty) => {
        impl From<Range<$index>> for Slice {
            #[inline]
            fn from(r: Range<$index>) -> Slice {
                Slice {
                    start: r.start as isize,
                    end: Some(r.end as isize),
                    step: 1,
                }
            }
        }

        impl From<RangeInclusive<$index>> for Slice {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Slice {
                let end = *r.end() as isize;
                Slice {
                    start: *r.start() as isize,
                    end: if end == -1 { None } else { Some(end + 1) },
                    step: 1,
                }
            }
        }

        impl From<RangeFrom<$index>> for Slice {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Slice {
                Slice {
                    start: r.start as isize,
                    end: None,
                    step: 1,
                }
            }
        }

        impl From<RangeTo<$index>> for Slice {
            #[inline]
            fn from(r: RangeTo<$index>) -> Slice {
                Slice {
                    start: 0,
                    end: Some(r.end as isize),
                    step: 1,
                }
            }
        }
    };
}

impl_slice_from_index_type!(isize);
impl_slice_from_index_type!(usize);
impl_slice_from_index_type!(i32);

impl From<RangeFull> for Slice {
    #[inline]
    fn from(_: RangeFull) -> Slice {
        Slice {
            start: 0,
            end: None,
            step: 1,
        }
    }
}

impl From<isize> for Slice {
    /// A slice of the single index `i`.
    #[inline]
    fn from(i: isize) -> Slice {
        Slice {
            start: i,
            end: if i == -1 { None } else { Some(i + 1) },
            step: 1,
        }
    }
}

impl From<usize> for Slice {
    #[inline]
    fn from(i: usize) -> Slice {
        Slice::from(i as isize)
    }
}

impl From<i32> for Slice {
    #[inline]
    fn from(i: i32) -> Slice {
        Slice::from(i as isize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_negative() {
        let r = Slice::new(-3, Some(-1), 1).normalize(5).unwrap();
        assert_eq!(r, AxisRange { start: 2, stop: 4, step: 1 });
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn clamps_out_of_range() {
        let r = Slice::new(-10, Some(10), 2).normalize(5).unwrap();
        assert_eq!((r.start, r.stop, r.len()), (0, 5, 3));
    }

    #[test]
    fn negative_step_swaps() {
        let s = Slice::new(4, Some(0), -2);
        assert_eq!(s.indices(5).unwrap(), vec![0, 2]);
        assert!(Slice::new(0, Some(4), -1).normalize(5).is_err());
    }

    #[test]
    fn extreme_steps() {
        assert_eq!(Slice::new(-1, Some(0), isize::MIN).indices(5).unwrap(), vec![0]);
        assert_eq!(Slice::new(0, None, isize::MAX).num_elements(5).unwrap(), 1);
        assert!(Slice::new(0, None, isize::MIN).normalize(5).is_err());
    }

    #[test]
    fn empty_when_reversed_with_positive_step() {
        assert_eq!(Slice::new(3, Some(1), 1).num_elements(5).unwrap(), 0);
    }

    #[test]
    fn single_index() {
        assert_eq!(Slice::from(-1).indices(4).unwrap(), vec![3]);
        assert_eq!(Slice::from(2usize).indices(4).unwrap(), vec![2]);
        assert_eq!(Slice::from(1..=2).indices(4).unwrap(), vec![1, 2]);
        assert_eq!(Slice::from(..).to_string(), "[0::1]");
    }
}

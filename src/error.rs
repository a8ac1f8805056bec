// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use thiserror::Error;

/// An error raised by an array operation.
///
/// Every error carries a message that names the offending values, e.g.
/// `invalid index 12 for array of size 10`.
#[derive(Clone, Debug, Error)]
#[error("{kind}: {message}")]
pub struct NdError {
    // we want to be able to change this representation later
    kind: ErrorKind,
    message: String,
}

impl NdError {
    /// Create a new `NdError`, for use by extension crates.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> NdError {
        from_kind(kind, message)
    }

    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return the human readable part of the error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Return `true` if the inputs violated a precondition (shape, index, ...).
    pub fn is_invalid_argument(&self) -> bool {
        self.kind == ErrorKind::InvalidArgument
    }

    /// Return `true` if the inputs were well formed but numerically degenerate.
    pub fn is_runtime(&self) -> bool {
        self.kind == ErrorKind::Runtime
    }
}

/// Error code for an `NdError`.
///
/// The two kinds are kept apart so that callers can tell a malformed call
/// (`InvalidArgument`) from a well formed call on degenerate values
/// (`Runtime`), e.g. a singular matrix or a solver that ran out of iterations.
///
/// This enumeration is not exhaustive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// shape, index or other precondition violation
    InvalidArgument,
    /// numerical breakdown: zero pivot, not positive definite, no convergence
    Runtime,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ErrorKind::InvalidArgument => f.write_str("invalid argument"),
            ErrorKind::Runtime => f.write_str("runtime error"),
        }
    }
}

impl PartialEq for NdError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.kind == rhs.kind && self.message == rhs.message
    }
}

/// Result alias used throughout the crate.
pub type NdResult<T> = Result<T, NdError>;

#[inline]
pub(crate) fn from_kind(kind: ErrorKind, message: impl Into<String>) -> NdError {
    NdError {
        kind,
        message: message.into(),
    }
}

#[inline]
pub(crate) fn invalid_argument(message: impl Into<String>) -> NdError {
    from_kind(ErrorKind::InvalidArgument, message)
}

#[inline]
pub(crate) fn runtime_error(message: impl Into<String>) -> NdError {
    from_kind(ErrorKind::Runtime, message)
}

pub(crate) fn incompatible_shapes(a: &[usize], b: &[usize]) -> NdError {
    invalid_argument(format!("incompatible shapes {:?} and {:?}", a, b))
}

pub(crate) fn index_out_of_bounds(index: usize, size: usize) -> NdError {
    invalid_argument(format!("invalid index {} for array of size {}", index, size))
}

pub(crate) fn not_square(shape: &[usize]) -> NdError {
    invalid_argument(format!("input matrix must be square, got shape {:?}", shape))
}

pub(crate) fn empty_array(what: &str) -> NdError {
    invalid_argument(format!("{} is undefined for an array of size 0", what))
}

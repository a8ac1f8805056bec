// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Unwrap an `NdResult` in an API that can't return one (operator traits),
/// panicking with the error's message.
macro_rules! expect_nd {
    ($e:expr) => {
        match $e {
            Ok(x) => x,
            Err(err) => panic!("{}", err),
        }
    };
}

// Copyright 2024-2026 ndnum developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructors for randomized arrays: `rand` integration for `ndnum`.
//!
//! See [**`RandomExt`**](trait.RandomExt.html) for usage examples.
//!
//! ## Note
//!
//! `ndnum-rand` depends on [`rand`](https://docs.rs/rand) and
//! [`rand_distr`](https://docs.rs/rand_distr), re-exported here as
//! `ndnum_rand::rand` and `ndnum_rand::rand_distr`. Use these paths to get
//! distributions and generators of the versions `ndnum-rand` was built
//! against.

use ::rand::rngs::SmallRng;
use ::rand::seq::index;
use ::rand::{rng, Rng, SeedableRng};

use ndnum::{Element, ErrorKind, IntoShape, NdArray, NdError, NdResult};

/// [`rand`](https://docs.rs/rand/0.9), re-exported for convenience and version-compatibility.
pub mod rand {
    pub use ::rand::*;
}

/// [`rand-distr`](https://docs.rs/rand_distr/0.5), re-exported for convenience and version-compatibility.
pub mod rand_distr {
    pub use ::rand_distr::*;
}

use crate::rand::distr::Distribution;

/// Constructors for arrays with random elements.
///
/// This trait extends [`NdArray`] and can not be implemented for other
/// types.
///
/// The default RNG is a fast automatically seeded RNG (currently
/// [`rand::rngs::SmallRng`], seeded from [`rand::rng`]).
///
/// Note that `SmallRng` is cheap to initialize and fast, but it may generate
/// low-quality random numbers, and reproducibility is not guaranteed. See its
/// documentation for information. You can select a different RNG with
/// [`.random_using()`](Self::random_using).
pub trait RandomExt<A: Element>: Sized {
    /// Create an array with the given shape and elements drawn from
    /// `distribution` using the default RNG.
    ///
    /// **Errors** if the shape is invalid.
    ///
    /// ```
    /// use ndnum::NdArray;
    /// use ndnum_rand::RandomExt;
    /// use ndnum_rand::rand_distr::Uniform;
    ///
    /// let a = NdArray::random((2, 5), Uniform::new(0., 10.).unwrap()).unwrap();
    /// assert_eq!(a.dims(), &[2, 5]);
    /// assert!(a.iter().all(|&x| (0. ..10.).contains(&x)));
    /// ```
    fn random<Sh, D>(shape: Sh, distribution: D) -> NdResult<Self>
    where
        Sh: IntoShape,
        D: Distribution<A>;

    /// Create an array with the given shape and elements drawn from
    /// `distribution`, using a specific RNG `rng`.
    ///
    /// ```
    /// use ndnum::NdArray;
    /// use ndnum_rand::RandomExt;
    /// use ndnum_rand::rand::SeedableRng;
    /// use ndnum_rand::rand::rngs::SmallRng;
    /// use ndnum_rand::rand_distr::StandardNormal;
    ///
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let a: NdArray<f64> = NdArray::random_using(4, StandardNormal, &mut rng).unwrap();
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let b: NdArray<f64> = NdArray::random_using(4, StandardNormal, &mut rng).unwrap();
    /// assert_eq!(a, b);
    /// ```
    fn random_using<Sh, D, R>(shape: Sh, distribution: D, rng: &mut R) -> NdResult<Self>
    where
        Sh: IntoShape,
        D: Distribution<A>,
        R: Rng + ?Sized;

    /// Sample `n_samples` rows of a 2-d array, using the default RNG.
    ///
    /// **Errors** if the array is not 2-d, if it has no rows, or if more
    /// rows are requested than exist when sampling without replacement.
    ///
    /// ```
    /// use ndnum::nd;
    /// use ndnum_rand::{RandomExt, SamplingStrategy};
    ///
    /// let a = nd![[1., 1.], [2., 2.], [3., 3.]];
    /// let s = a.sample_rows(2, SamplingStrategy::WithoutReplacement).unwrap();
    /// assert_eq!(s.dims(), &[2, 2]);
    /// assert_ne!(s.row(0).unwrap(), s.row(1).unwrap());
    /// ```
    fn sample_rows(&self, n_samples: usize, strategy: SamplingStrategy) -> NdResult<Self>;

    /// Sample `n_samples` rows of a 2-d array, using a specific RNG `rng`.
    fn sample_rows_using<R>(&self, n_samples: usize, strategy: SamplingStrategy, rng: &mut R) -> NdResult<Self>
    where
        R: Rng + ?Sized;
}

impl<A: Element> RandomExt<A> for NdArray<A> {
    fn random<Sh, D>(shape: Sh, dist: D) -> NdResult<Self>
    where
        Sh: IntoShape,
        D: Distribution<A>,
    {
        Self::random_using(shape, dist, &mut get_rng())
    }

    fn random_using<Sh, D, R>(shape: Sh, dist: D, rng: &mut R) -> NdResult<Self>
    where
        Sh: IntoShape,
        D: Distribution<A>,
        R: Rng + ?Sized,
    {
        let shape = shape.into_shape()?;
        let elements = (0..shape.size()).map(|_| dist.sample(rng)).collect();
        NdArray::from_shape_vec(shape, elements)
    }

    fn sample_rows(&self, n_samples: usize, strategy: SamplingStrategy) -> NdResult<Self> {
        self.sample_rows_using(n_samples, strategy, &mut get_rng())
    }

    fn sample_rows_using<R>(&self, n_samples: usize, strategy: SamplingStrategy, rng: &mut R) -> NdResult<Self>
    where
        R: Rng + ?Sized,
    {
        if self.ndim() != 2 {
            return Err(NdError::new(
                ErrorKind::InvalidArgument,
                format!("sample_rows needs a 2-d array, got shape {:?}", self.dims()),
            ));
        }
        let (rows, cols) = (self.nrows(), self.ncols());
        if rows == 0 {
            return Err(NdError::new(
                ErrorKind::InvalidArgument,
                "cannot sample rows from an array with no rows",
            ));
        }
        let indices: Vec<usize> = match strategy {
            SamplingStrategy::WithReplacement => (0..n_samples).map(|_| rng.random_range(0..rows)).collect(),
            SamplingStrategy::WithoutReplacement => {
                if n_samples > rows {
                    return Err(NdError::new(
                        ErrorKind::InvalidArgument,
                        format!(
                            "cannot sample {} rows without replacement from {} rows",
                            n_samples, rows
                        ),
                    ));
                }
                index::sample(rng, rows, n_samples).into_vec()
            }
        };
        let data = self.as_slice();
        let mut out = Vec::with_capacity(n_samples * cols);
        for i in indices {
            out.extend_from_slice(&data[i * cols..(i + 1) * cols]);
        }
        NdArray::from_shape_vec((n_samples, cols), out)
    }
}

/// Used as parameter in [`sample_rows`](RandomExt::sample_rows) to
/// determine if rows are drawn with or without replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingStrategy {
    WithReplacement,
    WithoutReplacement,
}

// `Arbitrary` enables `quickcheck` to generate random `SamplingStrategy` values for testing.
#[cfg(feature = "quickcheck")]
impl quickcheck::Arbitrary for SamplingStrategy {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if <bool as quickcheck::Arbitrary>::arbitrary(g) {
            SamplingStrategy::WithReplacement
        } else {
            SamplingStrategy::WithoutReplacement
        }
    }
}

fn get_rng() -> SmallRng {
    SmallRng::from_rng(&mut rng())
}

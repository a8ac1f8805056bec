use ndnum::NdArray;
use ndnum_rand::rand::rngs::SmallRng;
use ndnum_rand::rand::SeedableRng;
use ndnum_rand::rand_distr::Uniform;
use ndnum_rand::{RandomExt, SamplingStrategy};
use quickcheck::quickcheck;

#[test]
fn test_dim() {
    let (mm, nn) = (5, 5);
    for m in 0..mm {
        for n in 0..nn {
            let a = NdArray::random((m, n), Uniform::new(0., 2.).unwrap()).unwrap();
            assert_eq!(a.dims(), &[m, n]);
            assert!(a.iter().all(|x| *x < 2.));
            assert!(a.iter().all(|x| *x >= 0.));
        }
    }
}

#[test]
fn seeded_rng_is_reproducible() {
    let dist = Uniform::new(-1., 1.).unwrap();
    let a = NdArray::random_using((3, 3), dist, &mut SmallRng::seed_from_u64(7)).unwrap();
    let b = NdArray::random_using((3, 3), dist, &mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn oversampling_without_replacement_is_an_error() {
    let m = 5;
    let a = NdArray::random((m, 4), Uniform::new(0., 2.).unwrap()).unwrap();
    let err = a
        .sample_rows(m + 1, SamplingStrategy::WithoutReplacement)
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn sampling_from_zero_rows_is_an_error() {
    let a = NdArray::random((0, 5), Uniform::new(0., 2.).unwrap()).unwrap();
    assert!(a.sample_rows(1, SamplingStrategy::WithoutReplacement).is_err());
    assert!(a.sample_rows(1, SamplingStrategy::WithReplacement).is_err());
}

#[test]
fn sampling_needs_a_matrix() {
    let a = NdArray::random(4, Uniform::new(0., 2.).unwrap()).unwrap();
    assert!(a.sample_rows(1, SamplingStrategy::WithReplacement).is_err());
}

#[test]
fn without_replacement_draws_distinct_rows() {
    let a = NdArray::from_shape_vec((6, 1), (0..6).collect()).unwrap();
    let s = a
        .sample_rows_using(6, SamplingStrategy::WithoutReplacement, &mut SmallRng::seed_from_u64(1))
        .unwrap();
    let mut drawn = s.to_vec();
    drawn.sort_unstable();
    assert_eq!(drawn, (0..6).collect::<Vec<_>>());
}

quickcheck! {
    fn oversampling_with_replacement_is_fine(m: u8, n: u8) -> bool {
        let (m, n) = (m as usize % 10, n as usize % 10);
        let a = NdArray::random((m, n), Uniform::new(0., 2.).unwrap()).unwrap();
        // Higher than the number of rows
        let n_samples = m + n + 1;

        // We don't want to deal with sampling from 0 rows in this test
        if m == 0 {
            return true;
        }
        sampling_works(&a, SamplingStrategy::WithReplacement, n_samples)
    }
}

#[cfg(feature = "quickcheck")]
quickcheck! {
    fn sampling_behaves_as_expected(m: u8, n: u8, strategy: SamplingStrategy) -> bool {
        let (m, n) = (m as usize % 10 + 1, n as usize % 10);
        let a = NdArray::random((m, n), Uniform::new(0., 2.).unwrap()).unwrap();
        sampling_works(&a, strategy, m)
    }
}

fn sampling_works(a: &NdArray<f64>, strategy: SamplingStrategy, n_samples: usize) -> bool {
    let samples = a.sample_rows(n_samples, strategy).unwrap();
    samples.nrows() == n_samples
        && (0..samples.nrows()).all(|i| is_row_of(a, &samples.row(i).unwrap()))
}

// Check if there is at least one row in `a` equal to `b`
fn is_row_of(a: &NdArray<f64>, b: &NdArray<f64>) -> bool {
    (0..a.nrows()).any(|i| &a.row(i).unwrap() == b)
}

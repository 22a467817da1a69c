use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Inclusive value range of the random distribution.
pub const RANDOM_MIN: u64 = 1;
pub const RANDOM_MAX: u64 = 1_000_000;

/// Above this length quadratic sorts only run on already sorted input.
pub const QUADRATIC_MAX_LEN: usize = 10_000;

pub const SIZE_LADDER: [usize; 6] = [10, 100, 1_000, 5_000, 10_000, 20_000];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Distribution {
    /// Uniform in `RANDOM_MIN..=RANDOM_MAX`.
    Random,
    /// Ascending `0..n`.
    Best,
    /// Descending `n..=1`.
    Worst,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 3] =
    [Distribution::Random, Distribution::Worst, Distribution::Best];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Best => "best",
            Self::Worst => "worst",
        }
    }
}

pub fn generate<R: Rng + ?Sized>(dist: Distribution, n: usize, rng: &mut R) -> Vec<u64> {
    match dist {
        Distribution::Random => (0..n)
            .map(|_| rng.random_range(RANDOM_MIN..=RANDOM_MAX))
            .collect(),
        Distribution::Best => (0..n as u64).collect(),
        Distribution::Worst => (1..=n as u64).rev().collect(),
    }
}

/// Whether a quadratic sort should be left out for this input.
pub fn skip_quadratic(n: usize, dist: Distribution) -> bool {
    n > QUADRATIC_MAX_LEN && dist != Distribution::Best
}

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a runtime preset by input length.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, n: usize) {
    if n <= 1_000 {
        apply_small_runtime_config(group);
    } else if n <= QUADRATIC_MAX_LEN {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 80;
const SMALL_RUNTIME_MEASURE_MS: u64 = 120;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 200;
const LARGE_RUNTIME_MEASURE_MS: u64 = 400;
const LARGE_INPUT_LEN: usize = 16384;
const RNG_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    FewUnique,
    NearlySorted1pctSwaps,
    Descending,
}

pub const DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::FewUnique,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Descending,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::FewUnique => "few_unique",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Descending => "descending",
        }
    }
}

pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len < LARGE_INPUT_LEN {
        group.sampling_mode(SamplingMode::Auto);
        group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn generate_dataset<R: Rng + ?Sized>(rng: &mut R, dist: Distribution, len: usize) -> Vec<u64> {
    match dist {
        Distribution::RandomUniform => (0..len).map(|_| rng.random::<u64>()).collect(),
        Distribution::FewUnique => (0..len).map(|_| rng.random_range(0..16_u64)).collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<u64> = (0..len as u64).collect();
            if len > 1 {
                for _ in 0..(len / 100).max(1) {
                    let a = rng.random_range(0..len);
                    let b = rng.random_range(0..len);
                    data.swap(a, b);
                }
            }
            data
        }
        Distribution::Descending => (0..len as u64).rev().collect(),
    }
}

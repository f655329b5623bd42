//! Dataset Generation

use crate::{DataShape, Dataset};
use algobench_core::{BenchError, Result};
use rand::prelude::*;

/// Produces datasets of a given shape and length
pub trait DataFactory {
    /// Create a dataset; `length` must be positive
    fn create(&mut self, shape: DataShape, length: usize) -> Result<Dataset>;
}

/// Generator backed by a seedable RNG
///
/// The same seed yields the same sequence of datasets.
#[derive(Debug, Clone)]
pub struct RandomDataFactory {
    rng: StdRng,
}

impl RandomDataFactory {
    /// Factory with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Factory seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn random_values(&mut self, length: usize) -> Vec<i32> {
        (0..length).map(|_| self.rng.r#gen()).collect()
    }
}

impl Default for RandomDataFactory {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl DataFactory for RandomDataFactory {
    fn create(&mut self, shape: DataShape, length: usize) -> Result<Dataset> {
        if length == 0 {
            return Err(BenchError::invalid_argument(
                "dataset length must be positive",
            ));
        }
        let n = i32::try_from(length).map_err(|_| {
            BenchError::invalid_argument(format!("dataset length {} exceeds i32 range", length))
        })?;

        let values: Vec<i32> = match shape {
            DataShape::Random => self.random_values(length),
            DataShape::Sorted => (0..n).collect(),
            DataShape::Reversed => (0..n).rev().collect(),
            DataShape::PartiallySorted => {
                let half = length / 2;
                let sorted = 0..half as i32;
                let random = self.random_values(length - half);
                if self.rng.gen_bool(0.5) {
                    sorted.chain(random).collect()
                } else {
                    random.into_iter().chain(sorted).collect()
                }
            }
        };

        Ok(Dataset::new(shape, &values))
    }
}

//! Randomly populated matrices for diagnostics and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Matrix;
use crate::error::MathResult;

/// Exclusive upper bound of the integer draw for each entry.
const RANDOM_ENTRY_LIMIT: u32 = 25;

/// How random entries are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomFill {
    /// Whole numbers in `(-25, 25)`.
    #[default]
    Integers,
    /// Whole numbers scaled by a random fraction in `[0, 1)`.
    Floats,
}

impl Matrix {
    /// Creates a matrix whose entries are drawn from `rng`.
    ///
    /// Each entry starts as an integer in `[0, 25)`, is scaled by a random
    /// fraction when `fill` is [`RandomFill::Floats`], and is negated with
    /// probability one half.
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        fill: RandomFill,
        rng: &mut R,
    ) -> MathResult<Self> {
        let mut matrix = Self::new(rows, cols)?;
        for value in &mut matrix.data {
            let mut entry = f64::from(rng.gen_range(0..RANDOM_ENTRY_LIMIT));
            if fill == RandomFill::Floats {
                entry *= f64::from(rng.gen::<f32>());
            }
            if rng.gen_bool(0.5) {
                entry = -entry;
            }
            *value = entry;
        }
        Ok(matrix)
    }

    /// Creates a reproducible random matrix from a seed.
    pub fn random_seeded(rows: usize, cols: usize, fill: RandomFill, seed: u64) -> MathResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(rows, cols, fill, &mut rng)
    }
}

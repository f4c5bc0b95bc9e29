//! Random collections of integers to build trees from.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::generate::GeneratorConfig;
//! use rebalance_bst::Tree;
//!
//! let config = GeneratorConfig::default().with_size(20).with_seed(7);
//! let values = config.generate().unwrap();
//! assert_eq!(values.len(), 20);
//! assert!(values.iter().all(|x| (1..=100).contains(x)));
//!
//! // The same seed always gives the same values.
//! assert_eq!(values, config.generate().unwrap());
//!
//! let tree = Tree::from_values(values);
//! assert!(tree.is_balanced());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Errors from an unusable [`GeneratorConfig`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The range to draw values from contains no values.
    #[error("empty value range: min {min} is greater than max {max}")]
    EmptyRange {
        /// The requested lower bound.
        min: i32,
        /// The requested upper bound.
        max: i32,
    },
}

/// How many values to generate and where to draw them from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// How many values to draw. Values may repeat.
    pub size: usize,
    /// The smallest value that can be drawn.
    pub min: i32,
    /// The largest value that can be drawn.
    pub max: i32,
    /// Seeds the generator for reproducible output. Without one a fresh thread local
    /// generator is used.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 15,
            min: 1,
            max: 100,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Set the number of values to draw.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the inclusive range to draw values from.
    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that there is at least one value to draw.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.min > self.max {
            return Err(GenerateError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Draws `size` values uniformly from `[min, max]`.
    pub fn generate(&self) -> Result<Vec<i32>, GenerateError> {
        self.validate()?;

        let values = match self.seed {
            Some(seed) => self.draw(&mut StdRng::seed_from_u64(seed)),
            None => self.draw(&mut rand::rng()),
        };
        Ok(values)
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> Vec<i32> {
        (0..self.size)
            .map(|_| rng.random_range(self.min..=self.max))
            .collect()
    }
}

/// Draws `size` values from `[1, 100]`.
pub fn random_values(size: usize) -> Vec<i32> {
    GeneratorConfig::default()
        .with_size(size)
        .draw(&mut rand::rng())
}

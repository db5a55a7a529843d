//! Random grid generation
//!
//! Builds a square grid of uniformly chosen lowercase letters, optionally from
//! a fixed seed so runs can be repeated.

use crate::core::{Grid, GridError, MAX_GENERATED_SIDE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for a random grid
#[derive(Debug, Clone, Copy)]
pub struct RandomConfig {
    pub size: usize,
    pub seed: Option<u64>,
}

impl RandomConfig {
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size, seed: None }
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Number of cells in a generated grid, if its side is within bounds
fn cell_count(size: usize) -> Result<usize, GridError> {
    if size > MAX_GENERATED_SIDE {
        return Err(GridError::TooLarge {
            side: size,
            max: MAX_GENERATED_SIDE,
        });
    }
    size.checked_mul(size).ok_or(GridError::TooLarge {
        side: size,
        max: MAX_GENERATED_SIDE,
    })
}

/// Generate `size * size` random lowercase ASCII letters
///
/// # Errors
///
/// Returns `GridError::TooLarge` if `config.size` exceeds
/// [`MAX_GENERATED_SIDE`].
pub fn random_letters(config: RandomConfig) -> Result<Vec<char>, GridError> {
    let cells = cell_count(config.size)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    Ok((0..cells)
        .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
        .collect())
}

/// Generate a random square grid
///
/// # Errors
///
/// Returns `GridError::Empty` if `config.size` is zero and
/// `GridError::TooLarge` if it exceeds [`MAX_GENERATED_SIDE`].
pub fn random_grid(config: RandomConfig) -> Result<Grid, GridError> {
    let letters = random_letters(config)?;
    log::debug!(
        "Generated {0}x{0} grid (seed {1:?})",
        config.size,
        config.seed
    );
    Grid::with_row_length(letters, config.size.max(1))
}

#![no_std]

extern crate alloc;

pub use board::*;
pub use clue::*;
pub use controller::*;
pub use error::*;
pub use sampler::*;
pub use source::*;
pub use types::*;

mod board;
mod clue;
mod controller;
mod error;
mod sampler;
mod source;
mod types;

/// Columns of a board.
pub const NUM_CATEGORIES: usize = 6;

/// Rows of a board, clues kept per category.
pub const NUM_QUESTIONS_PER_CAT: usize = 5;

/// How many category ids are requested before sampling.
pub const DEFAULT_CATEGORY_POOL: usize = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadConfig {
    pub category_pool: usize,
}

impl LoadConfig {
    pub const fn new_unchecked(category_pool: usize) -> Self {
        Self { category_pool }
    }

    /// A pool smaller than a single board can never be sampled, so it is raised to `NUM_CATEGORIES`.
    pub fn new(category_pool: usize) -> Self {
        Self::new_unchecked(category_pool.max(NUM_CATEGORIES))
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_CATEGORY_POOL)
    }
}

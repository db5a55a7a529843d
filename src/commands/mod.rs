//! Command implementations

pub mod bench;
pub mod find;
pub mod random;

pub use bench::{BenchConfig, BenchResult, run_bench};
pub use find::{FindConfig, FindResult, WordMatch, find_words};
pub use random::{RandomConfig, random_grid};

//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    ignore_broken_pipe, print_find_summary, write_bench_result, write_grid, write_matches,
};

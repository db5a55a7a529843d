//! Grid and word list sources
//!
//! Thin readers that turn files into a `Grid` and a list of candidate words.

pub mod grid_text;
pub mod word_list;

pub use grid_text::{GridFileError, RowMode};

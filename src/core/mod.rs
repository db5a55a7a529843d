//! Core Boggle search types
//!
//! Grid geometry, the letter grid itself and the per-word backtracking search.
//! Everything here is pure and synchronous; I/O lives in `sources`.

mod grid;
mod layout;
mod search;

pub use grid::{Grid, GridError, MAX_GENERATED_SIDE, MIN_WORD_LENGTH};
pub use layout::{Layout, Neighbors};
pub use search::Containment;

//! Boggle Finder
//!
//! Finds which words from a word list can be traced through a Boggle letter
//! grid, moving between horizontally, vertically or diagonally adjacent cells
//! and never using a cell twice in one word.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_finder::core::Grid;
//!
//! // c a t
//! // d o g
//! // r a t
//! let grid = Grid::from_letters("catdograt".chars().collect()).unwrap();
//!
//! assert!(grid.contains("goat"));
//! assert!(!grid.contains("catdog"));
//! assert_eq!(grid.find_path("cat"), Some(vec![0, 1, 2]));
//! ```

// Grid, adjacency and path search
pub mod core;

// Grid and word list readers
pub mod sources;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logging setup
pub mod logging;

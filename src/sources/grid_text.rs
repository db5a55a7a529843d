//! Grid file parsing
//!
//! A grid source is whitespace-separated tokens, one letter per token. Each
//! token is lowercased and only its first character is kept.

use crate::core::{Grid, GridError};
use std::fs;
use std::io;
use std::path::Path;

/// First character of a token, lowercased
fn token_letter(token: &str) -> Option<char> {
    token.to_lowercase().chars().next()
}

/// Flatten a grid source into letters in reading order
///
/// Line structure is discarded; rows are later inferred from the count.
///
/// # Examples
/// ```
/// use boggle_finder::sources::grid_text::parse_letters;
///
/// assert_eq!(parse_letters("C a\nT  d\n"), vec!['c', 'a', 't', 'd']);
/// ```
#[must_use]
pub fn parse_letters(text: &str) -> Vec<char> {
    text.split_whitespace().filter_map(token_letter).collect()
}

/// Parse a grid source keeping one row per non-blank line
#[must_use]
pub fn parse_rows(text: &str) -> Vec<Vec<char>> {
    text.lines()
        .map(|line| line.split_whitespace().filter_map(token_letter).collect())
        .filter(|row: &Vec<char>| !row.is_empty())
        .collect()
}

/// How row boundaries are decided when building a grid from text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    /// Row length is `round(sqrt(letters))`
    #[default]
    Square,
    /// Every letter count must fill rows of this length exactly
    Explicit(usize),
    /// Each non-blank line is a row and all rows must be equal length
    Lines,
}

/// Build a grid from source text
///
/// # Errors
///
/// Returns a `GridError` if the text holds no letters or the rows do not fit
/// the requested `mode`.
pub fn grid_from_text(text: &str, mode: RowMode) -> Result<Grid, GridError> {
    match mode {
        RowMode::Square => Grid::from_letters(parse_letters(text)),
        RowMode::Explicit(row_length) => Grid::with_row_length(parse_letters(text), row_length),
        RowMode::Lines => Grid::from_rows(parse_rows(text)),
    }
}

/// Error reading a grid file
#[derive(Debug)]
pub enum GridFileError {
    Io(io::Error),
    Invalid(GridError),
}

impl std::fmt::Display for GridFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Could not read grid: {e}"),
            Self::Invalid(e) => write!(f, "Invalid grid: {e}"),
        }
    }
}

impl std::error::Error for GridFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Invalid(e) => Some(e),
        }
    }
}

impl From<io::Error> for GridFileError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for GridFileError {
    fn from(e: GridError) -> Self {
        Self::Invalid(e)
    }
}

/// Read and build a grid from a file
///
/// # Errors
///
/// Returns `GridFileError::Io` if the file cannot be read and
/// `GridFileError::Invalid` if its contents do not form a grid.
pub fn load_from_file<P: AsRef<Path>>(path: P, mode: RowMode) -> Result<Grid, GridFileError> {
    let text = fs::read_to_string(path)?;
    Ok(grid_from_text(&text, mode)?)
}

//! Boggle letter grid
//!
//! Owns the letters, their layout and a cached adjacency table, and answers
//! whether a word can be traced through adjacent cells without reusing one.

use super::layout::Layout;
use super::search::{Containment, PathSearch};
use rustc_hash::FxHashMap;
use std::fmt;

/// Shortest word the grid will search for
pub const MIN_WORD_LENGTH: usize = 3;

/// Largest row length accepted for generated grids
pub const MAX_GENERATED_SIDE: usize = 1000;

/// A grid of single lowercase letters
#[derive(Debug, Clone)]
pub struct Grid {
    letters: Vec<char>,
    layout: Layout,
    adjacency: Vec<Vec<usize>>,
    starts: FxHashMap<char, Vec<usize>>,
}

/// Error type for grids that cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    ZeroRowLength,
    TooLarge {
        side: usize,
        max: usize,
    },
    IncompleteRow {
        cells: usize,
        row_length: usize,
    },
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid contains no letters"),
            Self::ZeroRowLength => write!(f, "Row length must be at least 1"),
            Self::TooLarge { side, max } => {
                write!(f, "Grid side {side} is larger than the maximum of {max}")
            }
            Self::IncompleteRow { cells, row_length } => write!(
                f,
                "{cells} letters do not fill rows of {row_length} exactly"
            ),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {found} letters, expected {expected}",
                row + 1
            ),
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Build a grid from a flat letter sequence, assuming it is square
    ///
    /// The row length is `round(sqrt(n))`. Letter counts that are not perfect
    /// squares are accepted but their row boundaries are only a best guess.
    ///
    /// # Errors
    /// Returns `GridError::Empty` if `letters` is empty.
    ///
    /// # Examples
    /// ```
    /// use boggle_finder::core::Grid;
    ///
    /// let grid = Grid::from_letters("catdograt".chars().collect()).unwrap();
    /// assert!(grid.contains("cat"));
    /// assert!(!grid.contains("catdog"));
    /// ```
    pub fn from_letters(letters: Vec<char>) -> Result<Self, GridError> {
        if letters.is_empty() {
            return Err(GridError::Empty);
        }
        let layout = Layout::square(letters.len());
        Ok(Self::assemble(letters, layout))
    }

    /// Build a grid with an explicit row length
    ///
    /// Unlike [`Grid::from_letters`], the letters must fill every row exactly.
    ///
    /// # Errors
    /// Returns an error if `letters` is empty, `row_length` is zero, or the
    /// letter count is not a multiple of `row_length`.
    pub fn with_row_length(letters: Vec<char>, row_length: usize) -> Result<Self, GridError> {
        if letters.is_empty() {
            return Err(GridError::Empty);
        }
        if row_length == 0 {
            return Err(GridError::ZeroRowLength);
        }
        if letters.len() % row_length != 0 {
            return Err(GridError::IncompleteRow {
                cells: letters.len(),
                row_length,
            });
        }
        let layout = Layout::new(letters.len(), row_length);
        Ok(Self::assemble(letters, layout))
    }

    /// Build a grid from explicit rows, all of which must have equal length
    ///
    /// # Errors
    /// Returns `GridError::Empty` if there are no letters and
    /// `GridError::RaggedRows` for the first row whose length differs from
    /// the first row's.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(GridError::RaggedRows {
                row,
                expected,
                found,
            });
        }
        let letters: Vec<char> = rows.into_iter().flatten().collect();
        let layout = Layout::new(letters.len(), expected);
        Ok(Self::assemble(letters, layout))
    }

    fn assemble(letters: Vec<char>, layout: Layout) -> Self {
        let adjacency = (0..letters.len())
            .map(|cell| layout.neighbors(cell).collect())
            .collect();

        let mut starts: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (cell, &letter) in letters.iter().enumerate() {
            starts.entry(letter).or_default().push(cell);
        }

        log::debug!(
            "Built {}x{} grid from {} letters",
            layout.row_count(),
            layout.row_length(),
            letters.len()
        );

        Self {
            letters,
            layout,
            adjacency,
            starts,
        }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn letter(&self, cell: usize) -> char {
        self.letters[cell]
    }

    #[inline]
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of cells in the grid
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; construction rejects empty grids
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Cached neighbours of a cell, in enumeration order
    #[inline]
    #[must_use]
    pub fn neighbors(&self, cell: usize) -> &[usize] {
        &self.adjacency[cell]
    }

    /// Cells holding `letter`, in ascending order
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn cells_with_letter(&self, letter: char) -> &[usize] {
        self.starts.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Whether a word's length allows it to be searched at all
    #[must_use]
    pub fn accepts_length(&self, word: &str) -> bool {
        let length = word.chars().count();
        (MIN_WORD_LENGTH..=self.len()).contains(&length)
    }

    /// See if a word can be traced through the grid
    ///
    /// Words shorter than [`MIN_WORD_LENGTH`] or longer than the grid are
    /// rejected without searching. Comparison is case-sensitive.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        matches!(self.search(word, None), Containment::Found(_))
    }

    /// Cells of the first path spelling `word`, in word order
    #[must_use]
    pub fn find_path(&self, word: &str) -> Option<Vec<usize>> {
        match self.search(word, None) {
            Containment::Found(path) => Some(path),
            Containment::Absent | Containment::Exhausted => None,
        }
    }

    /// Search for `word`, optionally giving up after `budget` cells have been
    /// tried
    ///
    /// Each call owns its own visitation mask, so concurrent searches on a
    /// shared grid are independent.
    #[must_use]
    pub fn search(&self, word: &str, budget: Option<u64>) -> Containment {
        if !self.accepts_length(word) {
            return Containment::Absent;
        }
        let chars: Vec<char> = word.chars().collect();
        PathSearch::new(self, &chars, budget).run()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.letters.chunks(self.layout.row_length()) {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

//! Grid geometry and cell adjacency
//!
//! A `Layout` maps flat cell indices onto rows and columns and enumerates the
//! (up to) eight neighbours of a cell without wrapping across row boundaries.

/// Row/column geometry for a flat sequence of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    cell_count: usize,
    row_length: usize,
}

impl Layout {
    /// Create a layout with an explicit row length
    ///
    /// The last row may be partial when `cell_count` is not a multiple of
    /// `row_length`; neighbours are only emitted for cells that exist.
    ///
    /// # Panics
    /// Panics in debug mode if `row_length` is zero
    #[must_use]
    pub const fn new(cell_count: usize, row_length: usize) -> Self {
        debug_assert!(row_length > 0, "row length must be positive");
        Self {
            cell_count,
            row_length,
        }
    }

    /// Create a layout assuming a square grid
    ///
    /// The row length is `round(sqrt(cell_count))`, clamped to at least 1.
    /// For non-square cell counts this is only an approximation.
    ///
    /// # Examples
    /// ```
    /// use boggle_finder::core::Layout;
    ///
    /// assert_eq!(Layout::square(9).row_length(), 3);
    /// assert_eq!(Layout::square(2).row_length(), 1);
    /// ```
    #[must_use]
    pub fn square(cell_count: usize) -> Self {
        let row_length = (cell_count as f64).sqrt().round() as usize;
        Self::new(cell_count, row_length.max(1))
    }

    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    #[inline]
    #[must_use]
    pub const fn row_length(&self) -> usize {
        self.row_length
    }

    /// Number of rows, counting a trailing partial row
    #[inline]
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.cell_count.div_ceil(self.row_length)
    }

    /// (row, column) of a cell
    #[inline]
    #[must_use]
    pub const fn position(&self, cell: usize) -> (usize, usize) {
        (cell / self.row_length, cell % self.row_length)
    }

    /// Lazily enumerate the neighbours of `cell`
    ///
    /// Order: left, top-left, bottom-left, up, right, top-right, bottom-right, down.
    ///
    /// # Examples
    /// ```
    /// use boggle_finder::core::Layout;
    ///
    /// let layout = Layout::square(9);
    /// let corner: Vec<usize> = layout.neighbors(0).collect();
    /// assert_eq!(corner, vec![1, 4, 3]);
    /// ```
    #[must_use]
    pub const fn neighbors(&self, cell: usize) -> Neighbors {
        Neighbors {
            layout: *self,
            cell,
            step: 0,
        }
    }
}

/// Relative moves in emission order, as (row delta, column delta)
const DIRECTIONS: [(isize, isize); 8] = [
    (0, -1),  // left
    (-1, -1), // top-left
    (1, -1),  // bottom-left
    (-1, 0),  // up
    (0, 1),   // right
    (-1, 1),  // top-right
    (1, 1),   // bottom-right
    (1, 0),   // down
];

/// Iterator over the neighbours of one cell
#[derive(Debug, Clone)]
pub struct Neighbors {
    layout: Layout,
    cell: usize,
    step: usize,
}

impl Neighbors {
    fn offset(&self, (row_delta, col_delta): (isize, isize)) -> Option<usize> {
        let (row, col) = self.layout.position(self.cell);
        let row = row.checked_add_signed(row_delta)?;
        let col = col.checked_add_signed(col_delta)?;
        if col >= self.layout.row_length {
            return None;
        }
        let index = row * self.layout.row_length + col;
        (index < self.layout.cell_count).then_some(index)
    }
}

impl Iterator for Neighbors {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cell >= self.layout.cell_count {
            return None;
        }
        while let Some(&direction) = DIRECTIONS.get(self.step) {
            self.step += 1;
            if let Some(index) = self.offset(direction) {
                return Some(index);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DIRECTIONS.len() - self.step.min(DIRECTIONS.len())))
    }
}

impl std::iter::FusedIterator for Neighbors {}

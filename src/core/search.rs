//! Backtracking path search for a single word
//!
//! A depth-first search that marks a cell before descending into it and
//! unmarks it after the descent returns, so the visitation mask always holds
//! exactly the cells of the current path prefix.

use super::grid::Grid;

/// Outcome of searching the grid for one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Containment {
    /// The word was traced; cells are listed in word order
    Found(Vec<usize>),
    /// No path spells the word
    Absent,
    /// The step budget ran out before the search could decide
    Exhausted,
}

impl Containment {
    #[inline]
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Working state for one containment query
pub(crate) struct PathSearch<'a> {
    grid: &'a Grid,
    word: &'a [char],
    visited: Vec<bool>,
    path: Vec<usize>,
    steps: u64,
    budget: Option<u64>,
    refused: bool,
}

impl<'a> PathSearch<'a> {
    pub(crate) fn new(grid: &'a Grid, word: &'a [char], budget: Option<u64>) -> Self {
        Self {
            grid,
            word,
            visited: vec![false; grid.len()],
            path: Vec::with_capacity(word.len()),
            steps: 0,
            budget,
            refused: false,
        }
    }

    /// Try every cell holding the first letter, in ascending cell order
    pub(crate) fn run(mut self) -> Containment {
        let Some(&first) = self.word.first() else {
            return Containment::Absent;
        };

        for &start in self.grid.cells_with_letter(first) {
            if !self.enter(start) {
                return Containment::Exhausted;
            }
            if self.matches(1, start) {
                debug_assert_eq!(self.visited_count(), self.word.len());
                return Containment::Found(self.path);
            }
            if self.refused {
                return Containment::Exhausted;
            }
            self.leave(start);
        }

        Containment::Absent
    }

    /// Match `word[cursor..]` starting from a neighbour of `current`
    fn matches(&mut self, cursor: usize, current: usize) -> bool {
        let Some(&wanted) = self.word.get(cursor) else {
            return true;
        };

        let grid = self.grid;
        for &next in grid.neighbors(current) {
            if self.visited[next] || grid.letter(next) != wanted {
                continue;
            }
            if !self.enter(next) {
                return false;
            }
            if self.matches(cursor + 1, next) {
                return true;
            }
            self.leave(next);
            if self.refused {
                return false;
            }
        }

        false
    }

    /// Mark a cell as part of the path; false once the budget is spent
    ///
    /// The budget only matters when another cell is actually needed, so a
    /// search that spends its last step on a dead end can still finish as
    /// `Absent`.
    fn enter(&mut self, cell: usize) -> bool {
        if self.budget.is_some_and(|limit| self.steps >= limit) {
            self.refused = true;
            return false;
        }
        self.steps += 1;
        self.visited[cell] = true;
        self.path.push(cell);
        true
    }

    fn leave(&mut self, cell: usize) {
        self.visited[cell] = false;
        let popped = self.path.pop();
        debug_assert_eq!(popped, Some(cell));
    }

    fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }
}

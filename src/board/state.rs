//! Board representation.

use super::conflicts::conflicts;
use crate::search::SearchError;
use rand::Rng;
use std::fmt;

/// One queen per column: `rows[col]` is the row of the queen in `col`.
///
/// Rows and columns are 0-based. Column uniqueness is structural, so only
/// rows and diagonals can conflict.
///
/// # Examples
///
/// ```
/// use u_nqueens::board::Board;
///
/// let board = Board::new(vec![1, 3, 0, 2]).unwrap();
/// assert_eq!(board.size(), 4);
/// assert_eq!(board.row(1), 3);
/// assert_eq!(board.to_string(), ". . Q .\nQ . . .\n. . . Q\n. Q . .\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Creates a board, checking that every row index lies in `[0, N)`.
    pub fn new(rows: Vec<usize>) -> Result<Self, SearchError> {
        let n = rows.len();
        if n == 0 {
            return Err(SearchError::InvalidBoard("board must not be empty".into()));
        }
        if let Some((col, &row)) = rows.iter().enumerate().find(|&(_, &r)| r >= n) {
            return Err(SearchError::InvalidBoard(format!(
                "row {row} in column {col} is outside 0..{n}"
            )));
        }
        Ok(Self { rows })
    }

    /// Draws every column's row uniformly at random.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self {
            rows: (0..n).map(|_| rng.random_range(0..n)).collect(),
        }
    }

    /// Converts a row-major placement (`cols_by_row[row] = col`, one queen
    /// per row and per column) into the column-major representation.
    pub fn from_row_placements(cols_by_row: &[usize]) -> Result<Self, SearchError> {
        let n = cols_by_row.len();
        let mut rows = vec![usize::MAX; n];
        for (row, &col) in cols_by_row.iter().enumerate() {
            if col >= n || rows[col] != usize::MAX {
                return Err(SearchError::InvalidBoard(format!(
                    "row placement {cols_by_row:?} is not a permutation"
                )));
            }
            rows[col] = row;
        }
        Self::new(rows)
    }

    pub(crate) fn from_rows_unchecked(rows: Vec<usize>) -> Self {
        debug_assert!(rows.iter().all(|&r| r < rows.len()));
        Self { rows }
    }

    /// Number of queens (and rows, and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Row of the queen in `col`.
    pub fn row(&self, col: usize) -> usize {
        self.rows[col]
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Moves the queen in `col` to `row`.
    pub fn set(&mut self, col: usize, row: usize) {
        debug_assert!(row < self.rows.len());
        self.rows[col] = row;
    }

    /// Returns a copy with the queen in `col` moved to `row`.
    pub fn with_move(&self, col: usize, row: usize) -> Self {
        let mut next = self.clone();
        next.set(col, row);
        next
    }

    /// Number of attacking pairs.
    pub fn conflicts(&self) -> usize {
        conflicts(self)
    }

    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for row in 0..n {
            let line: Vec<&str> = (0..n)
                .map(|col| if self.rows[col] == row { "Q" } else { "." })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A board with its cached conflict count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredBoard {
    pub board: Board,
    pub conflicts: usize,
}

impl ScoredBoard {
    /// Evaluates `board` once and caches the result.
    pub fn new(board: Board) -> Self {
        let conflicts = conflicts(&board);
        Self { board, conflicts }
    }
}

//! Single-queen move neighbourhood.

use super::state::Board;
use std::iter::FusedIterator;

/// Every board reachable by moving one queen within its column.
///
/// Yields exactly `N * (N - 1)` boards, column-major then row-ascending,
/// skipping each column's current row. Duplicates are not filtered.
///
/// # Examples
///
/// ```
/// use u_nqueens::board::{neighbors, Board};
///
/// let board = Board::new(vec![0, 0, 0, 0]).unwrap();
/// let all: Vec<Board> = neighbors(&board).collect();
/// assert_eq!(all.len(), 12);
/// assert_eq!(all[0].rows(), &[1, 0, 0, 0]);
/// ```
pub fn neighbors(board: &Board) -> Neighbors<'_> {
    Neighbors {
        board,
        col: 0,
        row: 0,
        remaining: board.size() * board.size().saturating_sub(1),
    }
}

/// Iterator returned by [`neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    board: &'a Board,
    col: usize,
    row: usize,
    remaining: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let n = self.board.size();
        while self.col < n {
            let (col, row) = (self.col, self.row);
            self.row += 1;
            if self.row == n {
                self.row = 0;
                self.col += 1;
            }
            if row != self.board.row(col) {
                self.remaining -= 1;
                return Some(self.board.with_move(col, row));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl FusedIterator for Neighbors<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_order_is_column_major_row_ascending() {
        let board = Board::new(vec![1, 0, 3, 2]).unwrap();
        let moves: Vec<(usize, usize)> = neighbors(&board)
            .map(|nb| {
                let col = (0..4).find(|&c| nb.row(c) != board.row(c)).unwrap();
                (col, nb.row(col))
            })
            .collect();
        assert_eq!(&moves[..3], &[(0, 0), (0, 2), (0, 3)]);
        assert_eq!(&moves[3..6], &[(1, 1), (1, 2), (1, 3)]);
        assert_eq!(moves.len(), 12);
    }

    #[test]
    fn test_exact_size() {
        let board = Board::new(vec![0; 6]).unwrap();
        let mut it = neighbors(&board);
        assert_eq!(it.len(), 30);
        it.next();
        assert_eq!(it.len(), 29);
        assert_eq!(it.count(), 29);
    }

    proptest! {
        #[test]
        fn prop_count_and_distinct(rows in (4usize..9).prop_flat_map(|n| proptest::collection::vec(0..n, n))) {
            let n = rows.len();
            let board = Board::new(rows).unwrap();
            let all: Vec<Board> = neighbors(&board).collect();
            prop_assert_eq!(all.len(), n * (n - 1));
            prop_assert!(all.iter().all(|nb| nb != &board));
            let unique: HashSet<&Board> = all.iter().collect();
            prop_assert_eq!(unique.len(), all.len());
        }

        #[test]
        fn prop_single_column_changes(rows in (4usize..9).prop_flat_map(|n| proptest::collection::vec(0..n, n))) {
            let board = Board::new(rows).unwrap();
            for nb in neighbors(&board) {
                let changed = (0..board.size()).filter(|&c| nb.row(c) != board.row(c)).count();
                prop_assert_eq!(changed, 1);
            }
        }
    }
}

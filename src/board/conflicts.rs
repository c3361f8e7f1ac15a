//! Conflict evaluation: the objective every strategy minimises.

use super::state::Board;

/// Counts attacking pairs `(i, j)`, `i < j`, sharing a row or a diagonal.
///
/// O(N²). Zero means the board is a solution.
///
/// # Examples
///
/// ```
/// use u_nqueens::board::{conflicts, Board};
///
/// assert_eq!(conflicts(&Board::new(vec![1, 3, 0, 2]).unwrap()), 0);
/// assert_eq!(conflicts(&Board::new(vec![0, 0, 0, 0]).unwrap()), 6);
/// ```
pub fn conflicts(board: &Board) -> usize {
    count_attacks(board.rows())
}

fn count_attacks(rows: &[usize]) -> usize {
    let n = rows.len();
    let mut count = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if rows[i] == rows[j] || rows[i].abs_diff(rows[j]) == j - i {
                count += 1;
            }
        }
    }
    count
}

//! Four-in-a-row detection.
//!
//! Every check scans the complete line (row, column, or diagonal) through the
//! queried cell rather than a window around it, so a four of the same color
//! anywhere on one of those lines counts.

use super::{Board, Cell, Player};

/// Number of consecutive discs needed to win
pub const CONNECT: usize = 4;

/// Check whether the disc at `(row, col)` shares a line with four-in-a-row.
///
/// Scans the whole row, the whole column and both whole diagonals through the
/// cell for a run of at least [`CONNECT`] discs of the cell's color. Callers
/// should only ask about occupied cells; an empty cell always returns `false`.
pub fn check_win(board: &Board, row: usize, col: usize) -> bool {
    let cell = board.get(row, col);
    if cell == Cell::Empty {
        return false;
    }

    let rows = board.rows() as isize;
    let (r, c) = (row as isize, col as isize);

    // Horizontal
    if has_run(board, cell, (r, 0), (0, 1)) {
        return true;
    }

    // Vertical
    if has_run(board, cell, (0, c), (1, 0)) {
        return true;
    }

    // Diagonal (top-left to bottom-right)
    let back = r.min(c);
    if has_run(board, cell, (r - back, c - back), (1, 1)) {
        return true;
    }

    // Diagonal (bottom-left to top-right)
    let back = (rows - 1 - r).min(c);
    has_run(board, cell, (r + back, c - back), (-1, 1))
}

/// Walk a line from `start` in direction `step` until it leaves the board,
/// reporting whether `cell` appears [`CONNECT`] times in a row along it.
fn has_run(board: &Board, cell: Cell, start: (isize, isize), step: (isize, isize)) -> bool {
    let (mut r, mut c) = start;
    let mut count = 0;
    while in_bounds(board, r, c) {
        count = if board.get(r as usize, c as usize) == cell {
            count + 1
        } else {
            0
        };
        if count >= CONNECT {
            return true;
        }
        r += step.0;
        c += step.1;
    }
    false
}

fn in_bounds(board: &Board, r: isize, c: isize) -> bool {
    r >= 0 && c >= 0 && (r as usize) < board.rows() && (c as usize) < board.cols()
}

/// Check every occupied cell for a win. Used where the last move is unknown.
pub fn any_win(board: &Board) -> bool {
    winner(board).is_some()
}

/// Color of the first winning disc found, scanning top row first.
pub fn winner(board: &Board) -> Option<Player> {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let cell = board.get(row, col);
            if cell != Cell::Empty && check_win(board, row, col) {
                return Player::from_cell(cell);
            }
        }
    }
    None
}

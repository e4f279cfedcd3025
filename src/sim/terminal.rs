//! Loss detection

use super::board::Board;
use super::resolver::merged_value;
use crate::in_bounds;

const NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// True when some swipe can still change the board.
///
/// Any empty cell means a move exists. Otherwise a move exists only if two
/// orthogonally adjacent cells hold the same mergeable value.
pub fn has_moves(board: &Board) -> bool {
    if board.has_empty_cell() {
        return true;
    }

    board.tiles().any(|tile| {
        NEIGHBOURS.iter().any(|&(dr, dc)| {
            let (nr, nc) = (tile.row as isize + dr, tile.col as isize + dc);
            in_bounds(nr, nc) && board.cell(nr as usize, nc as usize) == tile.value
        }) && merged_value(tile.value).is_some()
    })
}

/// True when no swipe can change the board
#[inline]
pub fn is_stuck(board: &Board) -> bool {
    !has_moves(board)
}

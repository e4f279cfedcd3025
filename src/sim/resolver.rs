//! Move resolution for a single swipe
//!
//! Cells are visited in the direction's scan order. Each visited value is
//! slid toward the edge through empty cells; when it stops against an equal
//! value that has not merged yet this pass, the two combine. A merged cell
//! is locked for the rest of the pass, so `[2, 2, 4, 0]` becomes `[4, 4, 0, 0]`
//! and never `[8, 0, 0, 0]`.

use super::board::Board;
use super::direction::Direction;
use crate::consts::*;
use crate::in_bounds;

/// What one resolver pass did to the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveResult {
    /// Any tile moved or merged
    pub moved: bool,
    /// Number of merges performed
    pub merges: u32,
    /// Sum of the values created by merges
    pub merged_value: u64,
}

/// Apply one full swipe to the board
pub fn resolve(board: &mut Board, direction: Direction) -> ResolveResult {
    let mut result = ResolveResult::default();
    let mut locked = [[false; GRID_SIZE]; GRID_SIZE];

    for (row, col) in direction.scan_order() {
        slide_and_merge(board, &mut locked, row, col, direction, &mut result);
    }

    result
}

/// Deliver the value at `(row, col)` as far toward the edge as it can go
fn slide_and_merge(
    board: &mut Board,
    locked: &mut [[bool; GRID_SIZE]; GRID_SIZE],
    row: usize,
    col: usize,
    direction: Direction,
    result: &mut ResolveResult,
) {
    let value = board.cell(row, col);
    if value == EMPTY {
        return;
    }

    let (dr, dc) = direction.delta();
    let (mut r, mut c) = (row, col);

    loop {
        let (nr, nc) = (r as isize + dr, c as isize + dc);
        if !in_bounds(nr, nc) {
            break;
        }
        let (nr, nc) = (nr as usize, nc as usize);
        let next = board.cell(nr, nc);

        if next == EMPTY {
            *board.cell_mut(nr, nc) = value;
            *board.cell_mut(r, c) = EMPTY;
            r = nr;
            c = nc;
            result.moved = true;
            continue;
        }

        if next != value || locked[nr][nc] {
            break;
        }
        if let Some(merged) = merged_value(value) {
            *board.cell_mut(nr, nc) = merged;
            *board.cell_mut(r, c) = EMPTY;
            locked[nr][nc] = true;
            result.moved = true;
            result.merges += 1;
            result.merged_value += u64::from(merged);
        }
        break;
    }
}

/// Value produced by merging two tiles of `value`.
///
/// `None` when the result does not fit a cell; such a pair stays put.
#[inline]
pub fn merged_value(value: u32) -> Option<u32> {
    value.checked_mul(2)
}

/// Whether a swipe in `direction` would change the board
pub fn can_move(board: &Board, direction: Direction) -> bool {
    let mut probe = board.clone();
    resolve(&mut probe, direction).moved
}

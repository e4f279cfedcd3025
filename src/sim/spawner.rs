//! New-tile placement

use rand::Rng;
use rand::seq::IndexedRandom;

use super::board::{Board, Tile};
use crate::consts::*;

/// Place one tile on a uniformly chosen empty cell.
///
/// The value is `SPAWN_HIGH` with probability `four_probability`, otherwise
/// `SPAWN_LOW` (a probability outside `[0, 1]` falls back to the default).
/// Returns the placed tile, or `None` when the board is full.
pub fn spawn<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    four_probability: f64,
) -> Option<Tile> {
    let empty = board.empty_cells();
    let &(row, col) = empty.choose(rng)?;

    let p = if (0.0..=1.0).contains(&four_probability) {
        four_probability
    } else {
        DEFAULT_FOUR_PROBABILITY
    };
    let value = if rng.random_bool(p) {
        SPAWN_HIGH
    } else {
        SPAWN_LOW
    };
    *board.cell_mut(row, col) = value;

    Some(Tile { row, col, value })
}

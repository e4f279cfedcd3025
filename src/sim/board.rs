//! The 4x4 value matrix
//!
//! Cells hold plain values; a tile has no identity beyond its position.
//! Value `0` means the cell is empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GridError;

/// A read-only view of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

impl Tile {
    pub fn is_empty(&self) -> bool {
        self.value == EMPTY
    }
}

/// The board, sole owner of all tile state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from row-major values
    pub fn from_rows(cells: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Raw rows (row-major)
    pub fn rows(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Result<u32, GridError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(GridError::OutOfRange { row, col })
    }

    /// Overwrite a cell. Callers guarantee `value` is 0 or a power of two.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> Result<(), GridError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GridError::OutOfRange { row, col })?;
        *cell = value;
        Ok(())
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(|&v| v == EMPTY)
    }

    /// Coordinates of every empty cell, in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.tiles()
            .filter(Tile::is_empty)
            .map(|t| (t.row, t.col))
            .collect()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != EMPTY).count()
    }

    /// Sum of all tile values (the displayed score)
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(EMPTY)
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [[EMPTY; GRID_SIZE]; GRID_SIZE];
    }

    /// Iterate all cells in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, r)| {
            r.iter()
                .enumerate()
                .map(move |(col, &value)| Tile { row, col, value })
        })
    }

    // Unchecked accessors for the resolver; indices come from the scan order.
    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut u32 {
        &mut self.cells[row][col]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len().max(4);
        let border = format!("+{}", format!("{}+", "-".repeat(width + 2)).repeat(GRID_SIZE));
        writeln!(f, "{border}")?;
        for row in &self.cells {
            write!(f, "|")?;
            for &v in row {
                if v == EMPTY {
                    write!(f, " {:>width$} |", ".")?;
                } else {
                    write!(f, " {v:>width$} |")?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}

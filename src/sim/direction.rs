//! Swipe directions, scan order, and gesture classification

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{CELL_COUNT, GRID_SIZE};

/// One of the four swipe directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Step `(d_row, d_col)` taken by a tile sliding in this direction
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Cells in the order the resolver must visit them.
    ///
    /// The line nearest the target edge comes first so that tiles already
    /// compacted against the wall are never revisited as movers.
    pub fn scan_order(self) -> [(usize, usize); CELL_COUNT] {
        let mut order = [(0, 0); CELL_COUNT];
        let last = GRID_SIZE - 1;
        for outer in 0..GRID_SIZE {
            for inner in 0..GRID_SIZE {
                order[outer * GRID_SIZE + inner] = match self {
                    Direction::Left => (inner, outer),
                    Direction::Right => (inner, last - outer),
                    Direction::Up => (outer, inner),
                    Direction::Down => (last - outer, inner),
                };
            }
        }
        order
    }

    /// Classify a fling from its screen-space displacement (y grows downward).
    ///
    /// Returns `None` for a zero-length gesture.
    pub fn from_swipe(dx: f32, dy: f32) -> Option<Self> {
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        if !dx.is_finite() || !dy.is_finite() {
            return None;
        }
        // Flip y so "up" on screen is a positive angle
        let angle = (-dy).atan2(dx).to_degrees();
        let dir = if angle > 45.0 && angle <= 135.0 {
            Direction::Up
        } else if angle > 135.0 || angle < -135.0 {
            Direction::Left
        } else if angle < -45.0 {
            Direction::Down
        } else {
            Direction::Right
        };
        Some(dir)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Parse a direction name or WASD key
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_order_starts_at_target_edge() {
        assert_eq!(Direction::Left.scan_order()[..4], [(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(Direction::Right.scan_order()[..4], [(0, 3), (1, 3), (2, 3), (3, 3)]);
        assert_eq!(Direction::Up.scan_order()[..4], [(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(Direction::Down.scan_order()[..4], [(3, 0), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_scan_order_visits_every_cell_once() {
        for dir in Direction::ALL {
            let mut seen = [[false; GRID_SIZE]; GRID_SIZE];
            for (row, col) in dir.scan_order() {
                assert!(!seen[row][col], "{dir} visits ({row}, {col}) twice");
                seen[row][col] = true;
            }
            assert!(seen.iter().flatten().all(|&s| s));
        }
    }

    #[test]
    fn test_scan_order_last_line_is_far_edge() {
        assert_eq!(Direction::Left.scan_order()[CELL_COUNT - 1], (3, 3));
        assert_eq!(Direction::Right.scan_order()[CELL_COUNT - 1], (3, 0));
        assert_eq!(Direction::Down.scan_order()[CELL_COUNT - 1], (0, 3));
    }

    #[test]
    fn test_from_swipe() {
        assert_eq!(Direction::from_swipe(0.0, -100.0), Some(Direction::Up));
        assert_eq!(Direction::from_swipe(0.0, 100.0), Some(Direction::Down));
        assert_eq!(Direction::from_swipe(-100.0, 0.0), Some(Direction::Left));
        assert_eq!(Direction::from_swipe(100.0, 0.0), Some(Direction::Right));
        // Mostly horizontal with some drift
        assert_eq!(Direction::from_swipe(100.0, -30.0), Some(Direction::Right));
        assert_eq!(Direction::from_swipe(-100.0, 30.0), Some(Direction::Left));
        // Just either side of the diagonals
        assert_eq!(Direction::from_swipe(100.0, -99.0), Some(Direction::Right));
        assert_eq!(Direction::from_swipe(99.0, -100.0), Some(Direction::Up));
        assert_eq!(Direction::from_swipe(-99.0, -100.0), Some(Direction::Up));
        assert_eq!(Direction::from_swipe(-100.0, -99.0), Some(Direction::Left));
        assert_eq!(Direction::from_swipe(-100.0, 99.0), Some(Direction::Left));
        assert_eq!(Direction::from_swipe(-99.0, 100.0), Some(Direction::Down));
        assert_eq!(Direction::from_swipe(99.0, 100.0), Some(Direction::Down));
        assert_eq!(Direction::from_swipe(100.0, 99.0), Some(Direction::Right));
        assert_eq!(Direction::from_swipe(0.0, 0.0), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_str(" a "), Some(Direction::Left));
        assert_eq!(Direction::from_str("s"), Some(Direction::Down));
        assert_eq!(Direction::from_str("d"), Some(Direction::Right));
        assert_eq!(Direction::from_str("right"), Some(Direction::Right));
        assert_eq!(Direction::from_str("sideways"), None);
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }
}

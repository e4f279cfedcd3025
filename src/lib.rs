//! Slide 2048 - A 4x4 sliding-tile merge puzzle
//!
//! Core modules:
//! - `sim`: Deterministic grid engine (board, move resolution, spawning, loss detection)
//! - `highscores`: Persisted best score, fed by the engine's derived score
//! - `settings`: Engine configuration loaded from JSON
//! - `error`: Error types

pub mod error;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use error::{GridError, StoreError};
pub use highscores::HighScore;
pub use settings::{Settings, SpawnPolicy};
pub use sim::{Board, Direction, GameEngine, GameObserver, GamePhase, SwipeOutcome};

/// Game configuration constants
pub mod consts {
    /// Board edge length (the board is always square)
    pub const GRID_SIZE: usize = 4;
    /// Total number of cells
    pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
    /// Value stored in an empty cell
    pub const EMPTY: u32 = 0;
    /// Tiles placed at the start of every game
    pub const STARTING_TILES: usize = 2;
    /// Spawn values: the common tile and the rare one
    pub const SPAWN_LOW: u32 = 2;
    pub const SPAWN_HIGH: u32 = 4;
    /// Default probability that a spawned tile is `SPAWN_HIGH`
    pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.5;
}

/// Check that `(row, col)` addresses a cell on the board
#[inline]
pub fn in_bounds(row: isize, col: isize) -> bool {
    let size = consts::GRID_SIZE as isize;
    (0..size).contains(&row) && (0..size).contains(&col)
}

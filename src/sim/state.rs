//! Engine state
//!
//! One `GameEngine` per game. It owns the board, the RNG and the game-over
//! flag; callers construct it and pass it around explicitly.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::direction::Direction;
use super::resolver::can_move;
use super::spawner::spawn;
use crate::consts::*;
use crate::error::GridError;
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Swipes are processed
    Playing,
    /// No move remains; swipes are ignored until the next start
    GameOver,
}

/// Outward notifications, implemented by the front end
pub trait GameObserver {
    /// The board changed and should be re-rendered
    fn board_changed(&mut self, _board: &Board) {}

    /// The game just ended
    fn game_over(&mut self, _board: &Board) {}
}

/// The grid engine
pub struct GameEngine {
    /// Seed the RNG was created from
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) board: Board,
    pub(crate) phase: GamePhase,
    pub(crate) settings: Settings,
    /// Swipes processed since the last start
    pub(crate) moves: u32,
    pub(crate) observer: Option<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Create an engine and start its first game
    pub fn new(settings: Settings) -> Self {
        let mut engine = Self::idle(settings);
        engine.start_game();
        engine
    }

    /// Create an engine with the front end's observer attached before the
    /// first game starts, so the opening board is reported.
    pub fn with_observer(settings: Settings, observer: Box<dyn GameObserver>) -> Self {
        let mut engine = Self::idle(settings);
        engine.observer = Some(observer);
        engine.start_game();
        engine
    }

    /// Create an engine around a prepared board without spawning.
    ///
    /// The phase reflects the board: a board with no moves starts as game over.
    pub fn with_board(board: Board, settings: Settings) -> Self {
        let mut engine = Self::idle(settings);
        engine.board = board;
        if !super::terminal::has_moves(&engine.board) {
            engine.phase = GamePhase::GameOver;
        }
        engine
    }

    fn idle(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            board: Board::new(),
            phase: GamePhase::Playing,
            settings,
            moves: 0,
            observer: None,
        }
    }

    /// Attach the front end's observer, replacing any previous one
    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = Some(observer);
    }

    /// Detach and return the observer
    pub fn take_observer(&mut self) -> Option<Box<dyn GameObserver>> {
        self.observer.take()
    }

    /// Reset to a fresh game: clear the flag, empty the board, place two tiles
    pub fn start_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.moves = 0;
        self.board.clear();
        for _ in 0..STARTING_TILES {
            spawn(&mut self.board, &mut self.rng, self.settings.four_probability);
        }
        log::info!("New game (seed {})", self.seed);
        self.notify_board_changed();
    }

    pub fn tile_value(&self, row: usize, col: usize) -> Result<u32, GridError> {
        self.board.get(row, col)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Swipes processed since the last start
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Displayed score: the sum of all tile values
    pub fn score(&self) -> u64 {
        self.board.sum()
    }

    pub fn max_tile(&self) -> u32 {
        self.board.max_tile()
    }

    /// Directions that would change the board right now
    pub fn legal_moves(&self) -> Vec<Direction> {
        if self.is_game_over() {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|&d| can_move(&self.board, d))
            .collect()
    }

    pub(crate) fn notify_board_changed(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.board_changed(&self.board);
        }
    }

    pub(crate) fn notify_game_over(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.game_over(&self.board);
        }
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("seed", &self.seed)
            .field("board", &self.board)
            .field("phase", &self.phase)
            .field("moves", &self.moves)
            .finish_non_exhaustive()
    }
}

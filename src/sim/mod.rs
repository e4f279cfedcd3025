//! Deterministic grid engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Explicit scan order per swipe direction
//! - No rendering or platform dependencies

pub mod board;
pub mod direction;
pub mod resolver;
pub mod spawner;
pub mod state;
pub mod terminal;
pub mod tick;

pub use board::{Board, Tile};
pub use direction::Direction;
pub use resolver::{ResolveResult, can_move, merged_value, resolve};
pub use spawner::spawn;
pub use state::{GameEngine, GameObserver, GamePhase};
pub use terminal::{has_moves, is_stuck};
pub use tick::SwipeOutcome;

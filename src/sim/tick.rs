//! Swipe processing
//!
//! One swipe runs to completion before control returns: resolve, spawn,
//! then check for a loss.

use super::direction::Direction;
use super::resolver::resolve;
use super::spawner::spawn;
use super::state::{GameEngine, GamePhase};
use super::terminal::has_moves;
use crate::settings::SpawnPolicy;

/// What a swipe did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeOutcome {
    /// The swipe was processed (false while game over)
    pub processed: bool,
    /// At least one tile moved or merged
    pub moved: bool,
    pub merges: u32,
    /// A new tile was placed
    pub spawned: bool,
    /// This swipe ended the game
    pub game_over: bool,
}

impl GameEngine {
    /// Advance the game by one swipe. A no-op once the game is over.
    pub fn swipe(&mut self, direction: Direction) -> SwipeOutcome {
        if self.phase == GamePhase::GameOver {
            log::debug!("Ignoring {} swipe: game over", direction);
            return SwipeOutcome::default();
        }

        let resolved = resolve(&mut self.board, direction);
        self.moves += 1;

        let should_spawn = match self.settings.spawn_policy {
            SpawnPolicy::Always => true,
            SpawnPolicy::OnChange => resolved.moved,
        };
        let spawned = should_spawn
            && spawn(&mut self.board, &mut self.rng, self.settings.four_probability).is_some();

        log::debug!(
            "Swipe {}: moved={} merges={} spawned={} score={}",
            direction,
            resolved.moved,
            resolved.merges,
            spawned,
            self.board.sum()
        );

        let mut outcome = SwipeOutcome {
            processed: true,
            moved: resolved.moved,
            merges: resolved.merges,
            spawned,
            game_over: false,
        };

        self.notify_board_changed();

        if !has_moves(&self.board) {
            self.phase = GamePhase::GameOver;
            outcome.game_over = true;
            log::info!(
                "Game over after {} moves: score {}, best tile {}",
                self.moves,
                self.board.sum(),
                self.board.max_tile()
            );
            self.notify_game_over();
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::board::Board;
    use crate::sim::state::GameObserver;

    const CHECKERBOARD: [[u32; GRID_SIZE]; GRID_SIZE] =
        [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];

    #[derive(Default)]
    struct Counts {
        changed: u32,
        over: u32,
    }

    struct Recorder(Rc<RefCell<Counts>>);

    impl GameObserver for Recorder {
        fn board_changed(&mut self, _board: &Board) {
            self.0.borrow_mut().changed += 1;
        }

        fn game_over(&mut self, _board: &Board) {
            self.0.borrow_mut().over += 1;
        }
    }

    fn engine_with_row(row: [u32; 4], settings: Settings) -> GameEngine {
        GameEngine::with_board(Board::from_rows([row, [0; 4], [0; 4], [0; 4]]), settings)
    }

    #[test]
    fn test_swipe_merges_then_spawns() {
        let mut engine = engine_with_row([2, 2, 0, 0], Settings::seeded(1));
        let outcome = engine.swipe(Direction::Left);

        assert!(outcome.processed);
        assert!(outcome.moved);
        assert_eq!(outcome.merges, 1);
        assert!(outcome.spawned);
        assert_eq!(engine.tile_value(0, 0), Ok(4));
        // Merged 4 plus one new tile
        assert_eq!(engine.board().occupied_count(), 2);
        assert_eq!(engine.moves(), 1);
    }

    #[test]
    fn test_unchanged_swipe_still_spawns_by_default() {
        let mut engine = engine_with_row([2, 4, 0, 0], Settings::seeded(2));
        let outcome = engine.swipe(Direction::Left);

        assert!(!outcome.moved);
        assert!(outcome.spawned);
        assert_eq!(engine.board().occupied_count(), 3);
    }

    #[test]
    fn test_unchanged_swipe_skips_spawn_on_change_policy() {
        let settings = Settings {
            spawn_policy: SpawnPolicy::OnChange,
            ..Settings::seeded(2)
        };
        let mut engine = engine_with_row([2, 4, 0, 0], settings);
        let outcome = engine.swipe(Direction::Left);

        assert!(outcome.processed);
        assert!(!outcome.moved);
        assert!(!outcome.spawned);
        assert_eq!(engine.board().occupied_count(), 2);

        let outcome = engine.swipe(Direction::Right);
        assert!(outcome.moved);
        assert!(outcome.spawned);
    }

    #[test]
    fn test_full_stuck_board_ends_game() {
        // One empty corner whose neighbours are 4s; only 2s spawn
        let mut rows = CHECKERBOARD;
        rows[0][0] = 0;
        let settings = Settings {
            four_probability: 0.0,
            ..Settings::seeded(3)
        };
        let mut engine = GameEngine::with_board(Board::from_rows(rows), settings);
        assert!(!engine.is_game_over());

        // Right: nothing can move, the spawn fills (0, 0) with a 2
        let outcome = engine.swipe(Direction::Right);
        assert!(!outcome.moved);
        assert!(outcome.spawned);
        assert!(outcome.game_over);
        assert!(engine.is_game_over());
        assert_eq!(engine.tile_value(0, 0), Ok(2));
        assert_eq!(engine.board(), &Board::from_rows(CHECKERBOARD));
    }

    #[test]
    fn test_swipe_is_noop_when_game_over() {
        let mut engine =
            GameEngine::with_board(Board::from_rows(CHECKERBOARD), Settings::seeded(4));
        assert!(engine.is_game_over());

        let before = engine.board().clone();
        for dir in Direction::ALL {
            assert_eq!(engine.swipe(dir), SwipeOutcome::default());
        }
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn test_observer_notifications() {
        let counts = Rc::new(RefCell::new(Counts::default()));
        let mut rows = CHECKERBOARD;
        rows[0][0] = 0;
        let settings = Settings {
            four_probability: 0.0,
            ..Settings::seeded(6)
        };
        let mut engine = GameEngine::with_board(Board::from_rows(rows), settings);
        engine.set_observer(Box::new(Recorder(counts.clone())));

        engine.swipe(Direction::Right);
        assert!(engine.is_game_over());
        engine.swipe(Direction::Down);

        let counts = counts.borrow();
        assert_eq!(counts.changed, 1);
        assert_eq!(counts.over, 1);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameEngine::new(Settings::seeded(424242));
        let mut b = GameEngine::new(Settings::seeded(424242));

        let script = [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Up,
        ];
        for dir in script.iter().cycle().take(60) {
            assert_eq!(a.swipe(*dir), b.swipe(*dir));
        }
        assert_eq!(a.board(), b.board());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn test_game_reaches_game_over() {
        // Spawning on every swipe fills the board eventually
        let mut engine = GameEngine::new(Settings::seeded(8));
        let mut swipes = 0;
        while !engine.is_game_over() && swipes < 1_000_000 {
            engine.swipe(Direction::ALL[swipes % Direction::ALL.len()]);
            swipes += 1;
        }
        assert!(engine.is_game_over());
        assert!(engine.legal_moves().is_empty());
    }
}

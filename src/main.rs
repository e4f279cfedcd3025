//! Slide 2048 entry point
//!
//! A line-based terminal front end: reads swipe commands from stdin and
//! renders the board after each one.

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::cell::RefCell;
    use std::io::{self, BufRead, Write};
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use slide_2048::sim::{Board, Direction, GameEngine, GameObserver};
    use slide_2048::{HighScore, Settings};

    const DEFAULT_HIGH_SCORE_FILE: &str = "slide2048_highscore.json";

    /// Redraws the board and keeps the high score current
    struct Hud {
        high_score: Rc<RefCell<HighScore>>,
    }

    impl GameObserver for Hud {
        fn board_changed(&mut self, board: &Board) {
            let score = board.sum();
            let mut high = self.high_score.borrow_mut();
            high.observe(score);
            println!("{board}Score: {score}    High Score: {}", high.best);
        }

        fn game_over(&mut self, board: &Board) {
            println!("*** GAME OVER *** best tile {} (n = new game, q = quit)", board.max_tile());
        }
    }

    enum Command {
        Swipe(Direction),
        NewGame,
        Quit,
        Help,
    }

    fn parse(line: &str) -> Option<Command> {
        match line.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Command::Quit),
            "n" | "new" => Some(Command::NewGame),
            "h" | "help" | "?" => Some(Command::Help),
            other => Direction::from_str(other).map(Command::Swipe),
        }
    }

    fn print_help() {
        println!("Commands: w/a/s/d or up/left/down/right to swipe, n = new game, q = quit");
    }

    pub fn run() {
        let settings = std::env::args()
            .nth(1)
            .map(|p| Settings::load_from(Path::new(&p)))
            .unwrap_or_default();
        let high_path = settings
            .high_score_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGH_SCORE_FILE));

        print_help();
        session(settings, &high_path, io::stdin().lock());
    }

    /// Play until quit, end of input, or an I/O error, then save the high score.
    ///
    /// Returns the number of commands handled.
    fn session<R: BufRead>(settings: Settings, high_path: &Path, input: R) -> usize {
        let high_score = Rc::new(RefCell::new(HighScore::load_from(high_path)));
        let hud = Hud {
            high_score: Rc::clone(&high_score),
        };
        let mut engine = GameEngine::with_observer(settings, Box::new(hud));

        let mut handled = 0;
        let mut lines = input.lines();
        loop {
            print!("> ");
            if let Err(e) = io::stdout().flush() {
                log::warn!("Stopping: cannot write to stdout ({})", e);
                break;
            }
            let line = match lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    log::warn!("Stopping: cannot read input ({})", e);
                    break;
                }
                None => break,
            };
            match parse(&line) {
                Some(Command::Swipe(dir)) => {
                    if engine.is_game_over() {
                        println!("Game over. Press n for a new game.");
                    } else {
                        engine.swipe(dir);
                    }
                }
                Some(Command::NewGame) => engine.start_game(),
                Some(Command::Quit) => break,
                Some(Command::Help) => print_help(),
                None => println!("Unknown command"),
            }
            handled += 1;
        }

        if let Err(e) = high_score.borrow().save_to(high_path) {
            log::error!("Failed to save high score to {}: {}", high_path.display(), e);
        }
        handled
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Slide 2048 starting...");

    terminal::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web front end drives the library directly
}

// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Snake2: a monochrome snake game in the style of the classic phone game.
//!
//! The engine is headless and deterministic. It draws into any [`Canvas`]
//! and is driven by explicit key presses and elapsed time, so the same code
//! runs in the terminal frontend, the headless simulator and the tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Game: levels and connections      │
//! ├──────────────┬──────────────────────┤
//! │ Arena        │ Menus / HighScores   │
//! ├──────────────┼──────────────────────┤
//! │ GameGrid     │ Menu, ScrollWindow   │
//! ├──────────────┴──────────────────────┤
//! │  Fonts, Images, Canvas, Timers      │
//! └─────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod levels;
pub mod render;
pub mod scores;
pub mod timer;
pub mod ui;

pub use config::{GameConfig, Speed};
pub use error::{ConfigError, FontError, GameError, StorageError};

// Re-export key game types at crate root for convenience
pub use game::{Coord, Direction, GameGrid, InvariantViolation, StepOutcome};
pub use levels::{Game, Key, Session};
pub use render::{Canvas, Fonts, Image, Screen};
pub use scores::HighScoreTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_game_draws_title() {
        let config = GameConfig::default();
        let session = Session::new(config.speed, HighScoreTable::new(), None);
        let game = Game::new(config, session).unwrap();
        let mut screen = Screen::new(104, 84);
        game.paint(&mut screen);
        assert!(screen.image().lit_count() > 0);
    }
}

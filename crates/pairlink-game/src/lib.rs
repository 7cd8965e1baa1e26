//! Game session management for connect-pairs puzzles.
//!
//! A [`Game`] owns the board of the level being played and runs every change
//! to it: pair selection, match attempts, layout re-application, reshuffling
//! stuck boards, and moving between levels. Expected gameplay failures, such
//! as picking two tiles that cannot be joined, are reported as values
//! ([`MatchOutcome`]) rather than errors.
//!
//! # Examples
//!
//! ```
//! use pairlink_core::Position;
//! use pairlink_game::{Game, GameConfig, MatchOutcome};
//!
//! let grid = "
//!     AA
//!     BB
//! "
//! .parse()?;
//! let mut game = Game::from_grid(GameConfig::default(), grid, 1)?;
//!
//! let outcome = game.attempt_match(Position::new(0, 0), Position::new(0, 1));
//! assert!(matches!(outcome, MatchOutcome::Matched(ref report) if !report.cleared));
//!
//! let outcome = game.attempt_match(Position::new(1, 0), Position::new(1, 1));
//! assert!(outcome.is_matched());
//! assert!(game.is_board_cleared());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{config::*, error::*, game::*};

mod config;
mod error;
mod game;

//! Board generation for connect-pairs puzzles.
//!
//! [`BoardGenerator`] builds full boards in which every symbol occurs an even
//! number of times. Generation is driven by a [`BoardSeed`], so any board can be
//! reproduced from the seed printed alongside it.
//!
//! # Examples
//!
//! ```
//! use pairlink_core::Palette;
//! use pairlink_generator::{BoardGenerator, BoardSeed};
//!
//! let generator = BoardGenerator::new(4, 6, Palette::new(5))?;
//! let board = generator.generate();
//! assert_eq!(board.grid.occupied_count(), 24);
//! assert!(board.grid.has_paired_symbols());
//!
//! // The same seed always produces the same board.
//! let again = generator.generate_with_seed(board.seed);
//! assert_eq!(again.grid, board.grid);
//! # Ok::<(), pairlink_core::ConfigurationError>(())
//! ```

pub use self::{generator::*, reshuffle::*, seed::*};

mod generator;
mod reshuffle;
mod seed;

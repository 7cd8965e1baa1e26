use pairlink_core::{ConfigurationError, Position, Symbol};

/// Errors returned by game session operations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The configuration cannot produce a board.
    #[display("invalid configuration: {_0}")]
    Configuration(#[from] ConfigurationError),
    /// The level number is outside `1..=max_level`.
    #[display("level {level} is outside 1..={max_level}")]
    InvalidLevel {
        /// The requested level.
        level: u32,
        /// The configured number of levels.
        max_level: u32,
    },
    /// The operation needs a cleared board, but tiles remain.
    #[display("the board still has {remaining} tiles")]
    BoardNotCleared {
        /// Number of tiles left on the board.
        remaining: usize,
    },
    /// A symbol occurs an odd number of times, so the board can never be cleared.
    #[display("symbol {symbol} occurs {count} times on the board")]
    UnpairedBoard {
        /// The first symbol with an odd count.
        symbol: Symbol,
        /// Number of tiles carrying `symbol`.
        count: usize,
    },
}

/// Why a selected pair was not considered for matching.
///
/// These are ordinary outcomes of play, reported through
/// [`MatchOutcome::Rejected`](crate::MatchOutcome::Rejected).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum InvalidSelection {
    /// A position lies outside the board.
    #[display("position {pos} is outside the board")]
    OutOfBounds {
        /// The offending position.
        pos: Position,
    },
    /// A selected cell holds no tile.
    #[display("cell {pos} is empty")]
    EmptyCell {
        /// The empty position.
        pos: Position,
    },
    /// The same cell was selected twice.
    #[display("cell {pos} was selected twice")]
    SameCell {
        /// The repeated position.
        pos: Position,
    },
}

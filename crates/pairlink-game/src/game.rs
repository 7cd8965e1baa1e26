use pairlink_core::{Grid, Layout, Position};
use pairlink_generator::{BoardGenerator, BoardSeed, shuffle_remaining};
use pairlink_solver::{ConnectError, Hint, Path, check_connection, find_hint, has_move};

use crate::{GameConfig, GameError, InvalidSelection};

/// Result of trying to remove a pair of tiles.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum MatchOutcome {
    /// The tiles were removed.
    Matched(MatchReport),
    /// The tiles differ or no path with at most two bends joins them. The
    /// board is unchanged.
    NoPath,
    /// The selection itself is invalid. The board is unchanged.
    Rejected(InvalidSelection),
}

/// Details of a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// The path that joined the tiles, in grid coordinates, measured before
    /// the layout was re-applied.
    pub path: Path,
    /// Whether the match removed the last tiles of the level.
    pub cleared: bool,
    /// Whether the board was stuck afterwards and got reshuffled.
    pub reshuffled: bool,
}

/// Result of picking a cell with [`Game::select`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectOutcome {
    /// The cell is empty or off the board; nothing changed.
    Ignored,
    /// The cell became the first half of a pair.
    Selected(Position),
    /// The cell completed a pair and a match was attempted.
    Attempted(MatchOutcome),
}

/// Result of [`Game::advance_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum LevelAdvance {
    /// Play continues on the next level.
    Next {
        /// The level now being played.
        level: u32,
    },
    /// The last level was cleared and play wrapped back to level 1.
    Completed,
}

/// A connect-pairs game session.
///
/// The session owns the board and is the only thing that mutates it. A match
/// attempt runs as one step: the connection is checked before anything
/// changes, then both tiles are removed, the level's layout is re-applied, and
/// a stuck board is reshuffled. Pacing (showing the path before the tiles
/// disappear, level timers) is left to the caller.
///
/// Every board and every reshuffle draws its randomness from a seed derived
/// from the session seed, so a session started with [`Game::with_seed`]
/// replays identically.
///
/// # Examples
///
/// ```
/// use pairlink_game::{Game, GameConfig, MatchOutcome};
///
/// let mut game = Game::new(GameConfig::default())?;
/// assert_eq!(game.level(), 1);
///
/// while let Some(hint) = game.request_hint() {
///     let outcome = game.attempt_match(hint.first, hint.second);
///     assert!(outcome.is_matched());
/// }
/// // Either every tile is gone, or the board stayed stuck after every reshuffle.
/// assert!(game.is_board_cleared() || game.request_hint().is_none());
/// # Ok::<(), pairlink_game::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    generator: BoardGenerator,
    seed: BoardSeed,
    level: u32,
    grid: Grid,
    selection: Option<Position>,
    boards_generated: u64,
    reshuffles: u64,
}

impl Game {
    /// Starts a session at level 1 with a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Configuration`] if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_seed(config, BoardSeed::random())
    }

    /// Starts a reproducible session at level 1.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Configuration`] if the configuration is invalid.
    pub fn with_seed(config: GameConfig, seed: BoardSeed) -> Result<Self, GameError> {
        let generator = Self::generator_for(&config)?;
        let mut game = Self {
            grid: Grid::new(config.rows, config.cols),
            config,
            generator,
            seed,
            level: 1,
            selection: None,
            boards_generated: 0,
            reshuffles: 0,
        };
        game.start_level(1);
        Ok(game)
    }

    /// Resumes a session from an existing board.
    ///
    /// The configured size is replaced by the size of `grid`. The board is
    /// taken as is; no layout is applied.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Configuration`] if the configuration is invalid
    /// for the board size, [`GameError::InvalidLevel`] if `level` is
    /// outside `1..=max_level`, and [`GameError::UnpairedBoard`] if some
    /// symbol occurs an odd number of times.
    pub fn from_grid(config: GameConfig, grid: Grid, level: u32) -> Result<Self, GameError> {
        let config = config.with_size(grid.rows(), grid.cols());
        let generator = Self::generator_for(&config)?;
        check_level(&config, level)?;
        if let Some((&symbol, &count)) = grid
            .symbol_counts()
            .iter()
            .find(|(_, count)| **count % 2 != 0)
        {
            return Err(GameError::UnpairedBoard { symbol, count });
        }
        Ok(Self {
            config,
            generator,
            seed: BoardSeed::random(),
            level,
            grid,
            selection: None,
            boards_generated: 0,
            reshuffles: 0,
        })
    }

    fn generator_for(config: &GameConfig) -> Result<BoardGenerator, GameError> {
        config.validate()?;
        Ok(BoardGenerator::new(config.rows, config.cols, config.palette())?)
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the session seed.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }

    /// Returns the current level, starting from 1.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Returns the layout applied on the current level.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.config.layout_for_level(self.level)
    }

    /// Returns the board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the pending first selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Returns the number of tiles left on the board.
    #[must_use]
    pub fn remaining_tiles(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Replaces the board with a fresh one for `level`.
    ///
    /// The new board is full, has the level's layout applied, and is
    /// reshuffled if it starts out stuck (when
    /// [`auto_reshuffle`](GameConfig::auto_reshuffle) is enabled).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLevel`] if `level` is outside
    /// `1..=max_level`.
    pub fn generate_level(&mut self, level: u32) -> Result<&Grid, GameError> {
        check_level(&self.config, level)?;
        self.start_level(level);
        Ok(&self.grid)
    }

    fn start_level(&mut self, level: u32) {
        let seed = self.seed.derive("board", self.boards_generated);
        self.boards_generated += 1;

        self.level = level;
        self.selection = None;
        self.grid = self.generator.generate_with_seed(seed).grid;
        self.layout().apply(&mut self.grid);
        log::info!(
            "starting level {level} ({}) with board seed {seed}",
            self.layout()
        );

        if self.config.auto_reshuffle {
            self.reshuffle_if_stuck();
        }
    }

    /// Picks a cell as part of a pair.
    ///
    /// Empty cells are ignored. The first pick is remembered; the second one
    /// triggers [`attempt_match`](Self::attempt_match), which clears the
    /// selection whatever the outcome.
    pub fn select(&mut self, pos: Position) -> SelectOutcome {
        if self.grid.is_cell_empty(pos) {
            return SelectOutcome::Ignored;
        }
        match self.selection.take() {
            None => {
                self.selection = Some(pos);
                SelectOutcome::Selected(pos)
            }
            Some(first) => SelectOutcome::Attempted(self.attempt_match(first, pos)),
        }
    }

    /// Drops a pending first selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Tries to remove the tiles at `a` and `b`.
    ///
    /// On success both tiles are removed; if tiles remain, the level's layout
    /// is re-applied and, with [`auto_reshuffle`](GameConfig::auto_reshuffle),
    /// a stuck board is reshuffled. On failure the board is unchanged. The
    /// selection is cleared either way.
    pub fn attempt_match(&mut self, a: Position, b: Position) -> MatchOutcome {
        self.selection = None;

        let path = match check_connection(&self.grid, a, b) {
            Ok(path) => path,
            Err(err) => {
                log::debug!("no match between {a} and {b}: {err}");
                return unmatched(err);
            }
        };

        self.grid.take(a);
        self.grid.take(b);

        let cleared = self.grid.is_cleared();
        let mut reshuffled = false;
        if cleared {
            log::info!("level {} cleared", self.level);
        } else {
            self.layout().apply(&mut self.grid);
            if self.config.auto_reshuffle {
                reshuffled = self.reshuffle_if_stuck();
            }
        }

        log::debug!(
            "matched {a} and {b} with {} bend(s), {} tiles left",
            path.bend_count(),
            self.grid.occupied_count()
        );
        MatchOutcome::Matched(MatchReport {
            path,
            cleared,
            reshuffled,
        })
    }

    /// Returns a removable pair, if any.
    #[must_use]
    pub fn request_hint(&self) -> Option<Hint> {
        find_hint(&self.grid)
    }

    /// Returns `true` once every tile has been removed.
    #[must_use]
    pub fn is_board_cleared(&self) -> bool {
        self.grid.is_cleared()
    }

    /// Reshuffles the board if tiles remain but none can be removed.
    ///
    /// The remaining symbols are shuffled and the level's layout re-applied
    /// until a pair can be removed, up to
    /// [`max_reshuffle_attempts`](GameConfig::max_reshuffle_attempts) times.
    /// If every attempt leaves the board stuck, the last arrangement is kept;
    /// a later call tries fresh shuffles.
    ///
    /// Returns `true` if the board was reshuffled.
    pub fn reshuffle_if_stuck(&mut self) -> bool {
        if self.grid.is_cleared() || has_move(&self.grid) {
            return false;
        }

        let attempts = self.config.max_reshuffle_attempts.max(1);
        for attempt in 1..=attempts {
            let seed = self.seed.derive("reshuffle", self.reshuffles);
            self.reshuffles += 1;

            shuffle_remaining(&mut self.grid, seed);
            self.layout().apply(&mut self.grid);
            if has_move(&self.grid) {
                log::debug!(
                    "reshuffled {} tiles after {attempt} attempt(s)",
                    self.grid.occupied_count()
                );
                return true;
            }
        }

        log::warn!(
            "board with {} tiles is still stuck after {attempts} reshuffle attempts",
            self.grid.occupied_count()
        );
        true
    }

    /// Moves on after the current level has been cleared.
    ///
    /// After the last level play wraps back to level 1. The new board is
    /// generated as by [`generate_level`](Self::generate_level).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BoardNotCleared`] if tiles remain.
    pub fn advance_level(&mut self) -> Result<LevelAdvance, GameError> {
        let remaining = self.grid.occupied_count();
        if remaining > 0 {
            return Err(GameError::BoardNotCleared { remaining });
        }

        let advance = if self.level >= self.config.max_level {
            log::info!("all {} levels cleared", self.config.max_level);
            self.start_level(1);
            LevelAdvance::Completed
        } else {
            let level = self.level + 1;
            self.start_level(level);
            LevelAdvance::Next { level }
        };
        Ok(advance)
    }

    /// Starts over from level 1 with a new board.
    ///
    /// Callers use this when the level timer runs out or the player gives up.
    pub fn restart(&mut self) -> &Grid {
        log::info!("restarting from level 1 (was level {})", self.level);
        self.start_level(1);
        &self.grid
    }
}

fn check_level(config: &GameConfig, level: u32) -> Result<(), GameError> {
    if (1..=config.max_level).contains(&level) {
        Ok(())
    } else {
        Err(GameError::InvalidLevel {
            level,
            max_level: config.max_level,
        })
    }
}

fn unmatched(err: ConnectError) -> MatchOutcome {
    let reason = match err {
        ConnectError::OutOfBounds { pos } => InvalidSelection::OutOfBounds { pos },
        ConnectError::SamePosition { pos } => InvalidSelection::SameCell { pos },
        ConnectError::EmptyCell { pos } => InvalidSelection::EmptyCell { pos },
        ConnectError::SymbolMismatch { .. } | ConnectError::NoRoute => {
            return MatchOutcome::NoPath;
        }
    };
    MatchOutcome::Rejected(reason)
}

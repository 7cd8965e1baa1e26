use pairlink_core::{ConfigurationError, Grid, Palette, Symbol};
use rand::seq::SliceRandom as _;

use crate::BoardSeed;

/// A generated board and the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The full board, with no empty cells.
    pub grid: Grid,
    /// The seed that reproduces this board.
    pub seed: BoardSeed,
}

/// Generates full boards of paired symbols.
///
/// A board of `rows × cols` cells needs `rows * cols / 2` pairs. The generator
/// takes one symbol per pair by cycling through the palette, so every palette
/// symbol is used as evenly as possible, duplicates that list, shuffles it, and
/// fills the grid row-major.
///
/// # Examples
///
/// ```
/// use pairlink_core::{ConfigurationError, Palette};
/// use pairlink_generator::BoardGenerator;
///
/// let generator = BoardGenerator::new(10, 10, Palette::default())?;
/// let board = generator.generate();
/// for count in board.grid.symbol_counts().values() {
///     assert!(count % 2 == 0);
/// }
///
/// assert_eq!(
///     BoardGenerator::new(3, 3, Palette::default()).unwrap_err(),
///     ConfigurationError::OddCellCount { rows: 3, cols: 3 },
/// );
/// # Ok::<(), ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGenerator {
    rows: usize,
    cols: usize,
    palette: Palette,
}

impl BoardGenerator {
    /// Creates a generator for `rows × cols` boards drawing from `palette`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ZeroSize`] or
    /// [`ConfigurationError::OddCellCount`] if the grid cannot be filled with
    /// pairs, and [`ConfigurationError::EmptyPalette`] if the palette is empty.
    pub fn new(rows: usize, cols: usize, palette: Palette) -> Result<Self, ConfigurationError> {
        ConfigurationError::check_shape(rows, cols)?;
        if palette.is_empty() {
            return Err(ConfigurationError::EmptyPalette);
        }
        Ok(Self {
            rows,
            cols,
            palette,
        })
    }

    /// Returns the number of rows of generated boards.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns of generated boards.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the symbol palette.
    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Generates a board from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut symbols = self.pair_symbols();
        symbols.extend_from_within(..);
        symbols.shuffle(&mut seed.rng());
        GeneratedBoard {
            grid: Grid::from_symbols(self.rows, self.cols, symbols),
            seed,
        }
    }

    /// Returns one symbol per pair, cycling through the palette in order.
    #[must_use]
    pub fn pair_symbols(&self) -> Vec<Symbol> {
        let pairs = self.rows * self.cols / 2;
        self.palette.symbols().cycle().take(pairs).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use proptest::prelude::*;

    use super::*;

    const SEED: &str = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

    #[test]
    fn test_rejects_bad_configuration() {
        assert_eq!(
            BoardGenerator::new(0, 4, Palette::default()),
            Err(ConfigurationError::ZeroSize { rows: 0, cols: 4 })
        );
        assert_eq!(
            BoardGenerator::new(5, 5, Palette::default()),
            Err(ConfigurationError::OddCellCount { rows: 5, cols: 5 })
        );
        assert_eq!(
            BoardGenerator::new(4, 4, Palette::new(0)),
            Err(ConfigurationError::EmptyPalette)
        );
    }

    #[test]
    fn test_pair_symbols_cycle_through_palette() {
        let generator = BoardGenerator::new(2, 5, Palette::new(3)).unwrap();
        assert_eq!(
            generator.pair_symbols(),
            [0, 1, 2, 0, 1].map(Symbol::new)
        );

        let generator = BoardGenerator::new(2, 2, Palette::new(20)).unwrap();
        assert_eq!(generator.pair_symbols(), [0, 1].map(Symbol::new));
    }

    #[test]
    fn test_default_board_uses_every_symbol_evenly() {
        // 50 pairs over 20 symbols: every symbol gets 2 or 3 pairs.
        let generator = BoardGenerator::new(10, 10, Palette::default()).unwrap();
        let board = generator.generate_with_seed(BoardSeed::from_str(SEED).unwrap());
        let counts = board.grid.symbol_counts();
        assert_eq!(counts.len(), 20);
        for (symbol, count) in counts {
            let expected = if symbol.id() < 10 { 6 } else { 4 };
            assert_eq!(count, expected, "{symbol}");
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        let generator = BoardGenerator::new(6, 6, Palette::new(8)).unwrap();
        let seed = BoardSeed::from_str(SEED).unwrap();
        let a = generator.generate_with_seed(seed);
        let b = generator.generate_with_seed(seed);
        assert_eq!(a, b);
        assert_eq!(a.seed, seed);

        let c = generator.generate_with_seed(seed.derive("other", 0));
        assert_ne!(a.grid, c.grid);
    }

    proptest! {
        #[test]
        fn prop_generated_boards_are_full_and_paired(
            rows in 1usize..9,
            half_cols in 1usize..6,
            palette in 1u16..30,
            bytes in any::<[u8; 32]>(),
        ) {
            let cols = half_cols * 2;
            let generator = BoardGenerator::new(rows, cols, Palette::new(palette)).unwrap();
            let board = generator.generate_with_seed(BoardSeed::from_bytes(bytes));

            prop_assert_eq!(board.grid.rows(), rows);
            prop_assert_eq!(board.grid.cols(), cols);
            prop_assert_eq!(board.grid.occupied_count(), rows * cols);
            prop_assert!(board.grid.has_paired_symbols());
            for symbol in board.grid.symbols() {
                prop_assert!(Palette::new(palette).contains(symbol));
            }

            let counts = board.grid.symbol_counts();
            let min = counts.values().min().copied().unwrap_or(0);
            let max = counts.values().max().copied().unwrap_or(0);
            prop_assert!(max - min <= 2, "uneven use of the palette: {counts:?}");
        }
    }
}

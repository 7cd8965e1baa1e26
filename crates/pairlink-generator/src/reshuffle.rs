use pairlink_core::Grid;
use rand::seq::SliceRandom as _;

use crate::BoardSeed;

/// Redistributes the remaining symbols of a grid at random.
///
/// All symbols are collected, shuffled with the generator seeded by `seed`, and
/// written back row-major; cells after the last symbol are left empty. The
/// multiset of symbols is unchanged. Re-applying the active layout is up to the
/// caller.
///
/// # Examples
///
/// ```
/// use pairlink_core::Grid;
/// use pairlink_generator::{BoardSeed, shuffle_remaining};
///
/// let mut grid: Grid = "
///     A.B
///     .B.
///     A..
/// "
/// .parse()?;
/// let before = grid.symbol_counts();
///
/// shuffle_remaining(&mut grid, BoardSeed::from_bytes([1; 32]));
/// assert_eq!(grid.symbol_counts(), before);
/// // Survivors now occupy the first cells in row-major order.
/// assert!(grid.to_string().ends_with(".\n..."));
/// # Ok::<(), pairlink_core::GridParseError>(())
/// ```
pub fn shuffle_remaining(grid: &mut Grid, seed: BoardSeed) {
    let mut symbols = grid.drain_symbols();
    symbols.shuffle(&mut seed.rng());
    grid.fill_row_major(symbols);
}

#[cfg(test)]
mod tests {
    use pairlink_core::Position;

    use super::*;

    #[test]
    fn test_shuffle_keeps_multiset_and_packs_row_major() {
        let mut grid: Grid = "
            A..B
            ..C.
            B.CA
        "
        .parse()
        .unwrap();
        let counts = grid.symbol_counts();

        shuffle_remaining(&mut grid, BoardSeed::from_bytes([42; 32]));

        assert_eq!(grid.symbol_counts(), counts);
        let occupied = grid.occupied().map(|(pos, _)| pos).collect::<Vec<_>>();
        assert_eq!(occupied, grid.positions().take(6).collect::<Vec<_>>());
        assert!(grid.is_cell_empty(Position::new(1, 2)));
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let grid: Grid = "ABCD\nDCBA".parse().unwrap();
        let seed = BoardSeed::from_bytes([3; 32]);

        let mut a = grid.clone();
        let mut b = grid.clone();
        shuffle_remaining(&mut a, seed);
        shuffle_remaining(&mut b, seed);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_of_cleared_grid_is_noop() {
        let mut grid = Grid::new(2, 2);
        shuffle_remaining(&mut grid, BoardSeed::from_bytes([0; 32]));
        assert!(grid.is_cleared());
    }
}

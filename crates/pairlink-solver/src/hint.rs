use std::iter::FusedIterator;

use pairlink_core::{Grid, Position, Symbol};

use crate::{Path, find_path};

/// A removable pair of tiles and the path joining them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// The earlier tile in row-major order.
    pub first: Position,
    /// The later tile in row-major order.
    pub second: Position,
    /// A path from `first` to `second`.
    pub path: Path,
}

/// Iterates over every removable pair on a grid.
///
/// Pairs are yielded in row-major order of their first tile, then of their
/// second tile. Each unordered pair appears once.
///
/// # Examples
///
/// ```
/// use pairlink_core::{Grid, Position};
/// use pairlink_solver::hints;
///
/// let grid: Grid = "
///     AB
///     BA
/// "
/// .parse()?;
///
/// // Diagonal pairs would need three bends.
/// assert_eq!(hints(&grid).count(), 0);
///
/// let grid: Grid = "
///     AB
///     AB
/// "
/// .parse()?;
/// let pairs = hints(&grid)
///     .map(|hint| (hint.first, hint.second))
///     .collect::<Vec<_>>();
/// assert_eq!(
///     pairs,
///     [
///         (Position::new(0, 0), Position::new(1, 0)),
///         (Position::new(0, 1), Position::new(1, 1)),
///     ]
/// );
/// # Ok::<(), pairlink_core::GridParseError>(())
/// ```
#[must_use]
pub fn hints(grid: &Grid) -> Hints<'_> {
    Hints {
        grid,
        tiles: grid.occupied().collect(),
        first: 0,
        second: 1,
    }
}

/// Returns the first removable pair in row-major order, if any.
///
/// `None` means the board is stuck (or cleared).
#[must_use]
pub fn find_hint(grid: &Grid) -> Option<Hint> {
    hints(grid).next()
}

/// Returns `true` if at least one pair can be removed.
#[must_use]
pub fn has_move(grid: &Grid) -> bool {
    find_hint(grid).is_some()
}

/// Counts the removable pairs on a grid.
#[must_use]
pub fn count_moves(grid: &Grid) -> usize {
    hints(grid).count()
}

/// Iterator returned by [`hints`].
#[derive(Debug, Clone)]
pub struct Hints<'a> {
    grid: &'a Grid,
    tiles: Vec<(Position, Symbol)>,
    first: usize,
    second: usize,
}

impl Iterator for Hints<'_> {
    type Item = Hint;

    fn next(&mut self) -> Option<Self::Item> {
        while self.first < self.tiles.len() {
            let (first, symbol) = self.tiles[self.first];
            while self.second < self.tiles.len() {
                let (second, other) = self.tiles[self.second];
                self.second += 1;
                if symbol != other {
                    continue;
                }
                if let Some(path) = find_path(self.grid, first, second) {
                    return Some(Hint {
                        first,
                        second,
                        path,
                    });
                }
            }
            self.first += 1;
            self.second = self.first + 1;
        }
        None
    }
}

impl FusedIterator for Hints<'_> {}

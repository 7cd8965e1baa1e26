//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate inside the grid.
///
/// Positions order row-major: by row first, then by column.
///
/// # Examples
///
/// ```
/// use pairlink_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
/// assert!(Position::new(0, 9) < Position::new(1, 0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A signed coordinate used for routing connection paths.
///
/// Route points cover the grid and the one-cell border ring around it, so a row
/// of `-1` or `rows` (and likewise for columns) is meaningful. Every
/// [`Position`] converts into a route point.
///
/// # Examples
///
/// ```
/// use pairlink_core::{Position, RoutePoint};
///
/// let border = RoutePoint::new(-1, 4);
/// assert_eq!(border.to_position(), None);
///
/// let inner = RoutePoint::from(Position::new(1, 4));
/// assert!(inner.is_aligned_with(border));
/// assert_eq!(inner.to_position(), Some(Position::new(1, 4)));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoutePoint {
    row: isize,
    col: isize,
}

impl RoutePoint {
    /// Creates a route point from signed coordinates.
    #[must_use]
    #[inline]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Returns the signed row.
    #[must_use]
    #[inline]
    pub const fn row(self) -> isize {
        self.row
    }

    /// Returns the signed column.
    #[must_use]
    #[inline]
    pub const fn col(self) -> isize {
        self.col
    }

    /// Returns `true` if both points share a row or a column.
    #[must_use]
    #[inline]
    pub const fn is_aligned_with(self, other: Self) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// Converts back to a [`Position`] if both coordinates are non-negative.
    ///
    /// This does not check the upper grid bounds.
    #[must_use]
    pub fn to_position(self) -> Option<Position> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Some(Position::new(row, col))
    }
}

impl From<Position> for RoutePoint {
    #[expect(clippy::cast_possible_wrap)]
    fn from(pos: Position) -> Self {
        Self::new(pos.row as isize, pos.col as isize)
    }
}

impl Display for RoutePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

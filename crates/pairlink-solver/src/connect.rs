use pairlink_core::{Grid, Position, RoutePoint, RoutingArea, Symbol};

use crate::Path;

/// Reasons two cells cannot be connected.
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
pub enum ConnectError {
    /// A position lies outside the grid.
    #[display("position {pos} is outside the grid")]
    OutOfBounds {
        /// The offending position.
        pos: Position,
    },
    /// Both positions are the same cell.
    #[display("cannot connect cell {pos} to itself")]
    SamePosition {
        /// The repeated position.
        pos: Position,
    },
    /// A position holds no tile.
    #[display("cell {pos} is empty")]
    EmptyCell {
        /// The empty position.
        pos: Position,
    },
    /// The two tiles carry different symbols.
    #[display("symbols {first} and {second} do not match")]
    SymbolMismatch {
        /// Symbol of the first tile.
        first: Symbol,
        /// Symbol of the second tile.
        second: Symbol,
    },
    /// No path with at most two bends joins the tiles.
    #[display("no path with at most two bends")]
    NoRoute,
}

/// Checks whether the tiles at `a` and `b` can be removed as a pair.
///
/// Two tiles connect when they carry the same symbol and an axis-aligned path
/// with at most two bends joins them. Every point of the path other than the
/// endpoints must be vacant; the path may run through the one-cell border ring
/// around the grid.
///
/// Straight paths are tried first, then one-bend paths, then two-bend paths,
/// and the first path found is returned. Among two-bend paths the bend points
/// are chosen in row-major order: first the bend adjacent to `a`, then the bend
/// adjacent to `b`.
///
/// # Errors
///
/// Returns the first failing precondition as a [`ConnectError`], or
/// [`ConnectError::NoRoute`] if the tiles match but no path exists.
///
/// # Examples
///
/// ```
/// use pairlink_core::{Grid, Position};
/// use pairlink_solver::{ConnectError, check_connection};
///
/// let grid: Grid = "
///     AB.A
///     .BC.
/// "
/// .parse()?;
///
/// // Around the top border.
/// let path = check_connection(&grid, Position::new(0, 0), Position::new(0, 3)).unwrap();
/// assert_eq!(path.bend_count(), 2);
///
/// assert_eq!(
///     check_connection(&grid, Position::new(0, 1), Position::new(1, 2)),
///     Err(ConnectError::SymbolMismatch {
///         first: grid[Position::new(0, 1)].unwrap(),
///         second: grid[Position::new(1, 2)].unwrap(),
///     })
/// );
/// # Ok::<(), pairlink_core::GridParseError>(())
/// ```
pub fn check_connection(grid: &Grid, a: Position, b: Position) -> Result<Path, ConnectError> {
    for pos in [a, b] {
        if !grid.contains(pos) {
            return Err(ConnectError::OutOfBounds { pos });
        }
    }
    if a == b {
        return Err(ConnectError::SamePosition { pos: a });
    }
    let first = grid.get(a).ok_or(ConnectError::EmptyCell { pos: a })?;
    let second = grid.get(b).ok_or(ConnectError::EmptyCell { pos: b })?;
    if first != second {
        return Err(ConnectError::SymbolMismatch { first, second });
    }

    route(&RoutingArea::new(grid), a.into(), b.into()).ok_or(ConnectError::NoRoute)
}

/// Returns a path joining the tiles at `a` and `b`, if they can be removed as
/// a pair.
///
/// This is [`check_connection`] without the failure reason.
#[must_use]
pub fn find_path(grid: &Grid, a: Position, b: Position) -> Option<Path> {
    check_connection(grid, a, b).ok()
}

/// Returns `true` if the tiles at `a` and `b` can be removed as a pair.
#[inline]
#[must_use]
pub fn can_connect(grid: &Grid, a: Position, b: Position) -> bool {
    check_connection(grid, a, b).is_ok()
}

fn route(area: &RoutingArea<'_>, a: RoutePoint, b: RoutePoint) -> Option<Path> {
    straight(area, a, b)
        .or_else(|| one_bend(area, a, b))
        .or_else(|| two_bends(area, a, b))
}

fn straight(area: &RoutingArea<'_>, a: RoutePoint, b: RoutePoint) -> Option<Path> {
    area.is_clear_between(a, b).then(|| Path::straight(a, b))
}

fn one_bend(area: &RoutingArea<'_>, a: RoutePoint, b: RoutePoint) -> Option<Path> {
    // Aligned endpoints give corners on the tiles themselves, which are never
    // vacant.
    [
        RoutePoint::new(a.row(), b.col()),
        RoutePoint::new(b.row(), a.col()),
    ]
    .into_iter()
    .find(|&corner| {
        area.is_vacant(corner) && area.is_clear_between(a, corner) && area.is_clear_between(corner, b)
    })
    .map(|corner| Path::one_bend(a, corner, b))
}

fn two_bends(area: &RoutingArea<'_>, a: RoutePoint, b: RoutePoint) -> Option<Path> {
    let from_a = area.rays_from(a);
    let from_b = area.rays_from(b);
    // A point reachable from both ends is a one-bend corner, already tried.
    from_a.iter().find_map(|&p| {
        from_b
            .iter()
            .find(|&&q| p != q && area.is_clear_between(p, q))
            .map(|&q| Path::two_bends(a, p, q, b))
    })
}

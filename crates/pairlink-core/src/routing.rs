//! The routing area: a grid extended by a one-cell border ring.

use crate::{Grid, RoutePoint};

/// A view of a [`Grid`] extended by a one-cell border on every side.
///
/// Connection paths may travel through any vacant point in the range
/// `[-1, rows] × [-1, cols]`. The border ring never holds symbols, so it is
/// always vacant; this is what lets two tiles on the board edge connect around
/// the outside of the board.
///
/// # Examples
///
/// ```
/// use pairlink_core::{Grid, RoutePoint, RoutingArea};
///
/// let grid: Grid = "AB\nBA".parse()?;
/// let area = RoutingArea::new(&grid);
///
/// assert!(area.contains(RoutePoint::new(-1, -1)));
/// assert!(area.contains(RoutePoint::new(2, 2)));
/// assert!(!area.contains(RoutePoint::new(3, 0)));
///
/// // The top border is reachable straight up from (0, 0).
/// assert!(area.is_clear_between(RoutePoint::new(0, 0), RoutePoint::new(-1, 0)));
/// // (0, 0) and (0, 1) are neighbours, so nothing lies between them.
/// assert!(area.is_clear_between(RoutePoint::new(0, 0), RoutePoint::new(0, 1)));
/// // (1, 1) blocks the way from (0, 1) down to the bottom border.
/// assert!(!area.is_clear_between(RoutePoint::new(0, 1), RoutePoint::new(2, 1)));
/// # Ok::<(), pairlink_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoutingArea<'a> {
    grid: &'a Grid,
    max_row: isize,
    max_col: isize,
}

const STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl<'a> RoutingArea<'a> {
    /// Creates the routing area around a grid.
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            max_row: grid.rows() as isize,
            max_col: grid.cols() as isize,
        }
    }

    /// Returns the underlying grid.
    #[must_use]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Returns `true` if the point lies in the grid or on its border ring.
    #[must_use]
    #[inline]
    pub fn contains(&self, point: RoutePoint) -> bool {
        (-1..=self.max_row).contains(&point.row()) && (-1..=self.max_col).contains(&point.col())
    }

    /// Returns `true` if the point lies in the area and holds no symbol.
    #[must_use]
    #[inline]
    pub fn is_vacant(&self, point: RoutePoint) -> bool {
        self.contains(point) && self.grid.is_vacant(point)
    }

    /// Iterates over every point of the area in row-major order.
    pub fn points(&self) -> impl Iterator<Item = RoutePoint> + use<> {
        let max_col = self.max_col;
        (-1..=self.max_row)
            .flat_map(move |row| (-1..=max_col).map(move |col| RoutePoint::new(row, col)))
    }

    /// Returns `true` if `a` and `b` share a row or column and every point
    /// strictly between them is vacant.
    ///
    /// The endpoints themselves are not checked. A point is trivially clear to
    /// itself.
    #[must_use]
    pub fn is_clear_between(&self, a: RoutePoint, b: RoutePoint) -> bool {
        if a.row() == b.row() {
            let (lo, hi) = min_max(a.col(), b.col());
            ((lo + 1)..hi).all(|col| self.grid.is_vacant(RoutePoint::new(a.row(), col)))
        } else if a.col() == b.col() {
            let (lo, hi) = min_max(a.row(), b.row());
            ((lo + 1)..hi).all(|row| self.grid.is_vacant(RoutePoint::new(row, a.col())))
        } else {
            false
        }
    }

    /// Returns every vacant point reachable from `origin` along a straight,
    /// unobstructed line, in row-major order.
    ///
    /// The origin itself is excluded. Each of the four rays stops at the first
    /// occupied cell or at the edge of the area.
    #[must_use]
    pub fn rays_from(&self, origin: RoutePoint) -> Vec<RoutePoint> {
        let mut reachable = vec![];
        for (dr, dc) in STEPS {
            let mut point = RoutePoint::new(origin.row() + dr, origin.col() + dc);
            while self.is_vacant(point) {
                reachable.push(point);
                point = RoutePoint::new(point.row() + dr, point.col() + dc);
            }
        }
        reachable.sort_unstable();
        reachable
    }
}

fn min_max(a: isize, b: isize) -> (isize, isize) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_points(grid: &Grid) -> Vec<RoutePoint> {
        RoutingArea::new(grid).points().collect()
    }

    #[test]
    fn test_points_cover_border_ring_row_major() {
        let grid = Grid::new(1, 2);
        let points = area_points(&grid);
        assert_eq!(points.len(), 3 * 4);
        assert_eq!(points[0], RoutePoint::new(-1, -1));
        assert_eq!(points[3], RoutePoint::new(-1, 2));
        assert_eq!(points[4], RoutePoint::new(0, -1));
        assert_eq!(points[11], RoutePoint::new(1, 2));
        assert!(points.is_sorted());
    }

    #[test]
    fn test_border_is_always_vacant() {
        let grid: Grid = "AA\nAA".parse().unwrap();
        let area = RoutingArea::new(&grid);
        for point in area.points() {
            let inside = point.to_position().is_some_and(|pos| grid.contains(pos));
            assert_eq!(area.is_vacant(point), !inside, "{point}");
        }
        assert!(!area.is_vacant(RoutePoint::new(-2, 0)));
    }

    #[test]
    fn test_is_clear_between() {
        let grid: Grid = "
            A.B.
            ..A.
        "
        .parse()
        .unwrap();
        let area = RoutingArea::new(&grid);
        let p = RoutePoint::new;

        assert!(area.is_clear_between(p(0, 0), p(0, 1)));
        assert!(!area.is_clear_between(p(0, 0), p(0, 3)));
        assert!(area.is_clear_between(p(0, 2), p(-1, 2)));
        assert!(area.is_clear_between(p(1, 3), p(-1, 3)));
        assert!(area.is_clear_between(p(1, 1), p(1, 1)));
        assert!(!area.is_clear_between(p(0, 0), p(1, 1)));
        // Symmetric.
        assert!(!area.is_clear_between(p(0, 3), p(0, 0)));
        assert!(area.is_clear_between(p(-1, 3), p(1, 3)));
    }

    #[test]
    fn test_rays_stop_at_tiles_and_area_edge() {
        let grid: Grid = "
            A.B
            ...
            .C.
        "
        .parse()
        .unwrap();
        let area = RoutingArea::new(&grid);
        let p = RoutePoint::new;

        assert_eq!(
            area.rays_from(p(0, 0)),
            [p(-1, 0), p(0, -1), p(0, 1), p(1, 0), p(2, 0), p(3, 0)]
        );
        assert_eq!(
            area.rays_from(p(1, 1)),
            [p(-1, 1), p(0, 1), p(1, -1), p(1, 0), p(1, 2), p(1, 3)]
        );
    }
}

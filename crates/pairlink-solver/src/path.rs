use pairlink_core::{BoardGeometry, Grid, RoutePoint};
use tinyvec::ArrayVec;

/// A connection path between two tiles.
///
/// A path is an axis-aligned polyline of 2 to 4 points: the start tile, up to
/// two bend points, and the end tile. Bend points may lie on the border ring
/// outside the grid.
///
/// # Examples
///
/// ```
/// use pairlink_core::{Grid, Position, RoutePoint};
/// use pairlink_solver::find_path;
///
/// let grid: Grid = "
///     A.
///     .A
/// "
/// .parse()?;
///
/// let path = find_path(&grid, Position::new(0, 0), Position::new(1, 1)).unwrap();
/// assert_eq!(path.bend_count(), 1);
/// assert_eq!(path.start(), RoutePoint::new(0, 0));
/// assert_eq!(path.bends(), [RoutePoint::new(0, 1)]);
/// assert_eq!(path.end(), RoutePoint::new(1, 1));
/// # Ok::<(), pairlink_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: ArrayVec<[RoutePoint; 4]>,
}

impl Path {
    pub(crate) fn straight(start: RoutePoint, end: RoutePoint) -> Self {
        Self::from_points(&[start, end])
    }

    pub(crate) fn one_bend(start: RoutePoint, corner: RoutePoint, end: RoutePoint) -> Self {
        Self::from_points(&[start, corner, end])
    }

    pub(crate) fn two_bends(
        start: RoutePoint,
        first: RoutePoint,
        second: RoutePoint,
        end: RoutePoint,
    ) -> Self {
        Self::from_points(&[start, first, second, end])
    }

    fn from_points(points: &[RoutePoint]) -> Self {
        debug_assert!((2..=4).contains(&points.len()));
        Self {
            points: points.iter().copied().collect(),
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> RoutePoint {
        self.points[0]
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> RoutePoint {
        self.points[self.points.len() - 1]
    }

    /// Returns all points, from start to end.
    #[must_use]
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    /// Returns the bend points between start and end.
    #[must_use]
    pub fn bends(&self) -> &[RoutePoint] {
        &self.points[1..self.points.len() - 1]
    }

    /// Returns the number of bends (0, 1, or 2).
    #[must_use]
    pub fn bend_count(&self) -> usize {
        self.points.len() - 2
    }

    /// Iterates over the straight segments of the path.
    pub fn segments(&self) -> impl Iterator<Item = (RoutePoint, RoutePoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Returns the same path traversed from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    /// Returns `true` if any point of the path lies outside the grid.
    #[must_use]
    pub fn leaves_grid(&self, grid: &Grid) -> bool {
        self.points.iter().any(|point| {
            !point
                .to_position()
                .is_some_and(|pos| grid.contains(pos))
        })
    }

    /// Converts the path to canvas coordinates for drawing.
    #[must_use]
    pub fn to_canvas(&self, geometry: &BoardGeometry) -> Vec<(f32, f32)> {
        self.points
            .iter()
            .map(|&point| geometry.center(point))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: isize, col: isize) -> RoutePoint {
        RoutePoint::new(row, col)
    }

    #[test]
    fn test_accessors() {
        let path = Path::two_bends(p(0, 0), p(-1, 0), p(-1, 3), p(0, 3));
        assert_eq!(path.start(), p(0, 0));
        assert_eq!(path.end(), p(0, 3));
        assert_eq!(path.bends(), [p(-1, 0), p(-1, 3)]);
        assert_eq!(path.bend_count(), 2);
        assert_eq!(
            path.segments().collect::<Vec<_>>(),
            [
                (p(0, 0), p(-1, 0)),
                (p(-1, 0), p(-1, 3)),
                (p(-1, 3), p(0, 3)),
            ]
        );

        let straight = Path::straight(p(1, 1), p(1, 2));
        assert_eq!(straight.bend_count(), 0);
        assert!(straight.bends().is_empty());
    }

    #[test]
    fn test_reversed() {
        let path = Path::one_bend(p(0, 0), p(0, 2), p(2, 2));
        let reversed = path.reversed();
        assert_eq!(reversed.points(), [p(2, 2), p(0, 2), p(0, 0)]);
        assert_eq!(reversed.reversed(), path);
    }

    #[test]
    fn test_leaves_grid() {
        let grid = Grid::new(2, 4);
        assert!(Path::two_bends(p(0, 0), p(-1, 0), p(-1, 3), p(0, 3)).leaves_grid(&grid));
        assert!(Path::two_bends(p(1, 0), p(1, 4), p(0, 4), p(0, 3)).leaves_grid(&grid));
        assert!(!Path::one_bend(p(0, 0), p(0, 2), p(1, 2)).leaves_grid(&grid));
    }

    #[test]
    fn test_to_canvas() {
        let geometry = BoardGeometry::new(2, 2, 10.0, 10.0, 0.0);
        let path = Path::two_bends(p(0, 0), p(-1, 0), p(-1, 1), p(0, 1));
        assert_eq!(
            path.to_canvas(&geometry),
            [(15.0, 15.0), (15.0, 5.0), (25.0, 5.0), (25.0, 15.0)]
        );
    }
}

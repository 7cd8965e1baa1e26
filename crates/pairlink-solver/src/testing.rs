//! Test utilities for connection checks.
//!
//! [`ConnectTester`] wraps a grid and offers chained assertions about which
//! pairs connect and along which path.

use std::str::FromStr as _;

use pairlink_core::{Grid, Position, RoutePoint, RoutingArea};

use crate::{ConnectError, Path, check_connection};

/// A test harness for connection checks on a fixed grid.
///
/// All assertion methods return `self` for chaining and use `#[track_caller]`
/// so failures point at the test.
#[derive(Debug)]
pub struct ConnectTester {
    grid: Grid,
}

impl ConnectTester {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Creates a tester from the grid text format.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::new(Grid::from_str(s).unwrap())
    }

    /// Asserts that `a` and `b` connect with exactly `bends` bends in both
    /// directions, and that the returned paths are valid.
    #[track_caller]
    pub fn assert_connects(self, a: (usize, usize), b: (usize, usize), bends: usize) -> Self {
        let (a, b) = (Position::from(a), Position::from(b));
        for (from, to) in [(a, b), (b, a)] {
            let path = check_connection(&self.grid, from, to).unwrap_or_else(|err| {
                panic!("expected {from} and {to} to connect, got {err}\n{}", self.grid)
            });
            assert_valid_path(&self.grid, from, to, &path);
            assert_eq!(
                path.bend_count(),
                bends,
                "unexpected bend count for {from} -> {to}: {:?}",
                path.points()
            );
        }
        self
    }

    /// Asserts the exact points of the path found from `a` to `b`.
    #[track_caller]
    pub fn assert_path(
        self,
        a: (usize, usize),
        b: (usize, usize),
        expected: &[(isize, isize)],
    ) -> Self {
        let path = self.path(a, b);
        let expected = expected
            .iter()
            .map(|&(row, col)| RoutePoint::new(row, col))
            .collect::<Vec<_>>();
        assert_eq!(path.points(), expected);
        self
    }

    /// Asserts that the path found from `a` to `b` passes outside the grid.
    #[track_caller]
    pub fn assert_leaves_grid(self, a: (usize, usize), b: (usize, usize)) -> Self {
        let path = self.path(a, b);
        assert!(
            path.leaves_grid(&self.grid),
            "path stays inside the grid: {:?}",
            path.points()
        );
        self
    }

    /// Asserts that `a` and `b` do not connect, for the given reason.
    #[track_caller]
    pub fn assert_rejects(self, a: (usize, usize), b: (usize, usize), expected: ConnectError) -> Self {
        let result = check_connection(&self.grid, a.into(), b.into());
        assert_eq!(result, Err(expected));
        self
    }

    #[track_caller]
    fn path(&self, a: (usize, usize), b: (usize, usize)) -> Path {
        check_connection(&self.grid, a.into(), b.into()).unwrap()
    }
}

/// Asserts that `path` is a legal connection from `a` to `b` on `grid`.
///
/// The endpoints must be two distinct tiles with the same symbol. The path
/// must start at `a`, end at `b`, consist of axis-aligned segments
/// through vacant points of the routing area, and turn at every bend.
#[track_caller]
pub fn assert_valid_path(grid: &Grid, a: Position, b: Position, path: &Path) {
    let area = RoutingArea::new(grid);
    assert_ne!(a, b, "path joins {a} to itself");
    assert!(grid.get(a).is_some(), "path starts at empty cell {a}");
    assert_eq!(path.start(), RoutePoint::from(a));
    assert_eq!(path.end(), RoutePoint::from(b));
    assert!(path.bend_count() <= 2);
    assert_eq!(grid.get(a), grid.get(b));

    for &bend in path.bends() {
        assert!(area.contains(bend), "bend {bend} outside the routing area");
        assert!(area.is_vacant(bend), "bend {bend} is occupied");
    }
    for (from, to) in path.segments() {
        assert!(
            area.is_clear_between(from, to),
            "segment {from} -> {to} is blocked\n{grid}"
        );
    }
    for window in path.points().windows(3) {
        let [before, bend, after] = [window[0], window[1], window[2]];
        let horizontal_in = before.row() == bend.row();
        let horizontal_out = bend.row() == after.row();
        assert_ne!(horizontal_in, horizontal_out, "no turn at {bend}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "path joins (0, 0) to itself")]
    fn test_valid_path_rejects_self_connection() {
        let grid: Grid = "A.\n.A".parse().unwrap();
        let a = Position::new(0, 0);
        let path = Path::straight(a.into(), a.into());
        assert_valid_path(&grid, a, a, &path);
    }

    #[test]
    #[should_panic(expected = "path starts at empty cell")]
    fn test_valid_path_rejects_empty_endpoints() {
        let grid: Grid = "A.\n.A".parse().unwrap();
        let (a, b) = (Position::new(0, 1), Position::new(1, 0));
        let path = Path::one_bend(a.into(), Position::new(1, 1).into(), b.into());
        assert_valid_path(&grid, a, b, &path);
    }
}

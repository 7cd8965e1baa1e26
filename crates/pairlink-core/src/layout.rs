//! Layout transforms ("gravity") applied after tiles are removed.
//!
//! A [`Layout`] repacks the surviving tiles of every row or column without
//! changing which symbols remain. All transforms are deterministic and keep the
//! relative order of the survivors along the axis they work on.

use crate::{Grid, Position, Symbol};

/// A deterministic repacking of surviving tiles.
///
/// # Examples
///
/// ```
/// use pairlink_core::{Grid, Layout};
///
/// let grid: Grid = "
///     A.
///     .B
///     A.
/// "
/// .parse()?;
///
/// assert_eq!(Layout::CollapseDown.transform(&grid).to_string(), "..\nA.\nAB");
/// assert_eq!(Layout::CollapseRight.transform(&grid).to_string(), ".A\n.B\n.A");
/// # Ok::<(), pairlink_core::GridParseError>(())
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Tiles stay where they are.
    #[display("identity")]
    Identity,
    /// Each column's tiles fall to the bottom; emptied cells settle at the top.
    #[display("collapse down")]
    CollapseDown,
    /// Each row's tiles slide to the left edge.
    #[display("collapse left")]
    CollapseLeft,
    /// Each row's tiles slide to the right edge.
    #[display("collapse right")]
    CollapseRight,
    /// Each row's tiles are packed around the row's midpoint column.
    #[display("collapse to center")]
    CollapseToCenter,
    /// Each row's tiles alternate outward from the midpoint column: the first
    /// just left of center, the next just right, the next further left, and so on.
    #[display("collapse to sides")]
    CollapseToSides,
    /// The alternating layout of [`CollapseToSides`](Self::CollapseToSides),
    /// applied to each column around the midpoint row.
    #[display("collapse up-down")]
    CollapseUpDown,
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Row,
    Column,
}

impl Axis {
    fn lines(self, grid: &Grid) -> (usize, usize) {
        match self {
            Axis::Row => (grid.rows(), grid.cols()),
            Axis::Column => (grid.cols(), grid.rows()),
        }
    }

    fn position(self, line: usize, index: usize) -> Position {
        match self {
            Axis::Row => Position::new(line, index),
            Axis::Column => Position::new(index, line),
        }
    }
}

type Arrange = fn(&[Symbol], usize) -> Vec<Option<Symbol>>;

impl Layout {
    /// All layouts in the order levels 1 to 7 use them.
    pub const ALL: [Self; 7] = [
        Self::Identity,
        Self::CollapseDown,
        Self::CollapseLeft,
        Self::CollapseRight,
        Self::CollapseToCenter,
        Self::CollapseToSides,
        Self::CollapseUpDown,
    ];

    /// Repacks the grid in place.
    pub fn apply(self, grid: &mut Grid) {
        match self {
            Self::Identity => {}
            Self::CollapseDown => repack(grid, Axis::Column, pack_end),
            Self::CollapseLeft => repack(grid, Axis::Row, pack_start),
            Self::CollapseRight => repack(grid, Axis::Row, pack_end),
            Self::CollapseToCenter => repack(grid, Axis::Row, pack_center),
            Self::CollapseToSides => repack(grid, Axis::Row, interleave_from_middle),
            Self::CollapseUpDown => repack(grid, Axis::Column, interleave_from_middle),
        }
    }

    /// Returns a repacked copy of the grid.
    #[must_use]
    pub fn transform(self, grid: &Grid) -> Grid {
        let mut grid = grid.clone();
        self.apply(&mut grid);
        grid
    }
}

fn repack(grid: &mut Grid, axis: Axis, arrange: Arrange) {
    let (lines, len) = axis.lines(grid);
    for line in 0..lines {
        let tiles = (0..len)
            .filter_map(|i| grid.get(axis.position(line, i)))
            .collect::<Vec<_>>();
        for (i, cell) in arrange(&tiles, len).into_iter().enumerate() {
            grid.set(axis.position(line, i), cell);
        }
    }
}

fn pack_start(tiles: &[Symbol], len: usize) -> Vec<Option<Symbol>> {
    let mut line = vec![None; len];
    for (slot, &tile) in line.iter_mut().zip(tiles) {
        *slot = Some(tile);
    }
    line
}

fn pack_end(tiles: &[Symbol], len: usize) -> Vec<Option<Symbol>> {
    let mut line = vec![None; len];
    for (slot, &tile) in line.iter_mut().rev().zip(tiles.iter().rev()) {
        *slot = Some(tile);
    }
    line
}

fn pack_center(tiles: &[Symbol], len: usize) -> Vec<Option<Symbol>> {
    let mut line = vec![None; len];
    let start = len / 2 - tiles.len() / 2;
    for (slot, &tile) in line[start..].iter_mut().zip(tiles) {
        *slot = Some(tile);
    }
    line
}

fn interleave_from_middle(tiles: &[Symbol], len: usize) -> Vec<Option<Symbol>> {
    let mut line = vec![None; len];
    let mid = len / 2;
    // `left` is one past the next free slot on the left side.
    let mut left = mid;
    let mut right = mid;
    let mut towards_left = true;
    for &tile in tiles {
        if (towards_left && left > 0) || right >= len {
            left -= 1;
            line[left] = Some(tile);
        } else {
            line[right] = Some(tile);
            right += 1;
        }
        towards_left = !towards_left;
    }
    line
}

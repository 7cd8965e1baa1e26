//! The board grid.

use std::{
    collections::BTreeMap,
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::{GridParseError, Position, RoutePoint, Symbol};

/// A `rows × cols` matrix of optional symbols.
///
/// The grid is the single mutable source of truth for a board. Cells outside
/// the grid are treated as empty by every query, which is what lets connection
/// paths route around the board edge.
///
/// # Text format
///
/// [`FromStr`] and [`Display`] use one line per row. `.` marks an empty cell and
/// the letters described in [`Symbol::to_char`] mark symbols. Whitespace inside
/// a line and blank lines are ignored.
///
/// # Examples
///
/// ```
/// use pairlink_core::{Grid, Position, Symbol};
///
/// let grid: Grid = "
///     A A
///     B .
/// "
/// .parse()?;
///
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 2);
/// assert_eq!(grid.get(Position::new(1, 0)), Some(Symbol::new(1)));
/// assert!(grid.is_cell_empty(Position::new(1, 1)));
/// assert_eq!(grid.occupied_count(), 3);
/// # Ok::<(), pairlink_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Symbol>>,
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Creates a grid filled row-major from `symbols`.
    ///
    /// Cells after the last symbol are left empty.
    ///
    /// # Panics
    ///
    /// Panics if `symbols` yields more than `rows * cols` items.
    #[must_use]
    pub fn from_symbols<I>(rows: usize, cols: usize, symbols: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut grid = Self::new(rows, cols);
        grid.fill_row_major(symbols);
        grid
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of cells, empty or not.
    #[must_use]
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the position lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    #[inline]
    fn offset(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row() * self.cols + pos.col())
    }

    /// Returns the symbol at a position.
    ///
    /// Returns `None` for empty cells and for positions outside the grid.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Symbol> {
        self.offset(pos).and_then(|i| self.cells[i])
    }

    /// Returns `true` if the cell holds no symbol.
    ///
    /// Positions outside the grid are always empty.
    #[must_use]
    #[inline]
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Returns `true` if a route point holds no symbol.
    ///
    /// This is [`is_cell_empty`](Self::is_cell_empty) for signed coordinates:
    /// anything outside the grid, including negative coordinates, is vacant.
    #[must_use]
    #[inline]
    pub fn is_vacant(&self, point: RoutePoint) -> bool {
        point.to_position().is_none_or(|pos| self.is_cell_empty(pos))
    }

    /// Stores `cell` at a position and returns the previous content.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn set(&mut self, pos: Position, cell: Option<Symbol>) -> Option<Symbol> {
        let Some(i) = self.offset(pos) else {
            panic!(
                "position {pos} is outside the {}x{} grid",
                self.rows, self.cols
            );
        };
        std::mem::replace(&mut self.cells[i], cell)
    }

    /// Empties a cell and returns the symbol it held.
    ///
    /// Positions outside the grid yield `None`.
    pub fn take(&mut self, pos: Position) -> Option<Symbol> {
        self.offset(pos).and_then(|i| self.cells[i].take())
    }

    /// Returns the number of cells holding a symbol.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is empty.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Iterates over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Symbol)> + '_ {
        self.positions()
            .filter_map(|pos| self.get(pos).map(|symbol| (pos, symbol)))
    }

    /// Iterates over the symbols in row-major order, skipping empty cells.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Counts occurrences of each symbol.
    #[must_use]
    pub fn symbol_counts(&self) -> BTreeMap<Symbol, usize> {
        let mut counts = BTreeMap::new();
        for symbol in self.symbols() {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Returns `true` if every symbol occurs an even number of times.
    #[must_use]
    pub fn has_paired_symbols(&self) -> bool {
        self.symbol_counts().values().all(|count| count % 2 == 0)
    }

    /// Removes every symbol and returns them in row-major order.
    pub fn drain_symbols(&mut self) -> Vec<Symbol> {
        self.cells.iter_mut().filter_map(Option::take).collect()
    }

    /// Overwrites the grid row-major from `symbols`, emptying the remaining cells.
    ///
    /// # Panics
    ///
    /// Panics if `symbols` yields more items than the grid has cells.
    pub fn fill_row_major<I>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut symbols = symbols.into_iter().fuse();
        for cell in &mut self.cells {
            *cell = symbols.next();
        }
        assert!(
            symbols.next().is_none(),
            "more symbols than the {}x{} grid can hold",
            self.rows,
            self.cols
        );
    }
}

impl Index<Position> for Grid {
    type Output = Option<Symbol>;

    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    fn index(&self, pos: Position) -> &Self::Output {
        let Some(i) = self.offset(pos) else {
            panic!(
                "position {pos} is outside the {}x{} grid",
                self.rows, self.cols
            );
        };
        &self.cells[i]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if row > 0 {
                f.write_char('\n')?;
            }
            for cell in cells {
                let ch = match cell {
                    Some(symbol) => symbol.to_char().unwrap_or('?'),
                    None => '.',
                };
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = 0;
        let mut cols = None;
        let mut cells = vec![];

        for line in s.lines() {
            let line_cells = line
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .enumerate()
                .map(|(col, ch)| match ch {
                    '.' => Ok(None),
                    _ => Symbol::from_char(ch)
                        .map(Some)
                        .ok_or(GridParseError::InvalidChar { ch, row: rows, col }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            if line_cells.is_empty() {
                continue;
            }
            let expected = *cols.get_or_insert(line_cells.len());
            if line_cells.len() != expected {
                return Err(GridParseError::RaggedRow {
                    row: rows,
                    expected,
                    found: line_cells.len(),
                });
            }
            cells.extend(line_cells);
            rows += 1;
        }

        let cols = cols.ok_or(GridParseError::Empty)?;
        Ok(Self { rows, cols, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Symbol = Symbol::new(0);
    const B: Symbol = Symbol::new(1);

    #[test]
    fn test_parse_and_display() {
        let grid: Grid = "
            AB.
            .BA
        "
        .parse()
        .unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(Position::new(0, 0)), Some(A));
        assert_eq!(grid.get(Position::new(0, 1)), Some(B));
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.to_string(), "AB.\n.BA");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(GridParseError::Empty));
        assert_eq!("  \n ".parse::<Grid>(), Err(GridParseError::Empty));
        assert_eq!(
            "AB\nA".parse::<Grid>(),
            Err(GridParseError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            "A.\n.#".parse::<Grid>(),
            Err(GridParseError::InvalidChar {
                ch: '#',
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let grid: Grid = "AA\nAA".parse().unwrap();
        assert!(!grid.is_cell_empty(Position::new(1, 1)));
        assert!(grid.is_cell_empty(Position::new(2, 0)));
        assert!(grid.is_cell_empty(Position::new(0, 2)));
        assert_eq!(grid.get(Position::new(9, 9)), None);

        assert!(grid.is_vacant(RoutePoint::new(-1, 0)));
        assert!(grid.is_vacant(RoutePoint::new(0, -1)));
        assert!(grid.is_vacant(RoutePoint::new(2, 2)));
        assert!(!grid.is_vacant(RoutePoint::new(0, 0)));
    }

    #[test]
    fn test_set_take_and_counts() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.is_cleared());

        assert_eq!(grid.set(Position::new(0, 0), Some(A)), None);
        assert_eq!(grid.set(Position::new(1, 1), Some(A)), None);
        assert_eq!(grid.set(Position::new(0, 1), Some(B)), None);
        assert_eq!(grid.occupied_count(), 3);
        assert!(!grid.has_paired_symbols());

        assert_eq!(grid.take(Position::new(0, 1)), Some(B));
        assert_eq!(grid.take(Position::new(0, 1)), None);
        assert_eq!(grid.take(Position::new(5, 5)), None);
        assert!(grid.has_paired_symbols());
        assert_eq!(grid.symbol_counts(), BTreeMap::from([(A, 2)]));
        assert_eq!(grid[Position::new(1, 1)], Some(A));
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn test_set_out_of_range_panics() {
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(2, 0), Some(A));
    }

    #[test]
    fn test_fill_and_drain_row_major() {
        let mut grid = Grid::from_symbols(2, 3, [A, B, B]);
        assert_eq!(grid.to_string(), "ABB\n...");
        assert_eq!(
            grid.occupied().collect::<Vec<_>>(),
            [
                (Position::new(0, 0), A),
                (Position::new(0, 1), B),
                (Position::new(0, 2), B),
            ]
        );

        grid.set(Position::new(1, 2), Some(A));
        assert_eq!(grid.drain_symbols(), [A, B, B, A]);
        assert!(grid.is_cleared());
    }

    #[test]
    #[should_panic(expected = "more symbols than the 1x2 grid can hold")]
    fn test_fill_overflow_panics() {
        let _ = Grid::from_symbols(1, 2, [A, A, B]);
    }

    #[test]
    fn test_positions_are_row_major() {
        let grid = Grid::new(2, 2);
        assert_eq!(
            grid.positions().collect::<Vec<_>>(),
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }
}

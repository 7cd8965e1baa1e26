/// Errors raised when a board or game configuration cannot produce a valid board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigurationError {
    /// The grid has no rows or no columns.
    #[display("grid must have at least one row and one column, got {rows}x{cols}")]
    ZeroSize {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// The grid has an odd number of cells, so it cannot be filled with pairs.
    #[display("grid has an odd number of cells ({rows}x{cols})")]
    OddCellCount {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// The cell count `rows × cols` does not fit in `usize`.
    #[display("grid of {rows}x{cols} cells is too large")]
    TooManyCells {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// The symbol palette has no symbols.
    #[display("symbol palette is empty")]
    EmptyPalette,
    /// The level count is zero.
    #[display("level count must be at least 1")]
    NoLevels,
    /// No layout was configured for level selection.
    #[display("layout schedule is empty")]
    EmptyLayoutSchedule,
}

impl ConfigurationError {
    /// Checks that a `rows × cols` grid can be completely filled with pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ZeroSize`] if either dimension is zero,
    /// [`ConfigurationError::TooManyCells`] if the cell count overflows, and
    /// [`ConfigurationError::OddCellCount`] if the cell count is odd.
    pub fn check_shape(rows: usize, cols: usize) -> Result<(), Self> {
        if rows == 0 || cols == 0 {
            return Err(Self::ZeroSize { rows, cols });
        }
        let cells = rows
            .checked_mul(cols)
            .ok_or(Self::TooManyCells { rows, cols })?;
        if cells % 2 != 0 {
            return Err(Self::OddCellCount { rows, cols });
        }
        Ok(())
    }
}

/// Errors from parsing the textual grid format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The text contains no rows.
    #[display("grid text has no rows")]
    Empty,
    /// A row has a different number of cells than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of this row.
        found: usize,
    },
    /// A character is neither `.` nor a symbol letter.
    #[display("invalid cell character {ch:?} at row {row}, column {col}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
}

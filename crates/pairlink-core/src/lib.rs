//! Core data structures for connect-pairs puzzles.
//!
//! This crate provides the board model shared by generation, path finding, and
//! game session management.
//!
//! # Overview
//!
//! 1. **Coordinates**
//!    - [`Position`]: an in-grid `(row, col)` coordinate
//!    - [`RoutePoint`]: a signed coordinate that may lie on the one-cell border
//!      ring around the grid
//!
//! 2. **Board model**
//!    - [`Symbol`] and [`Palette`]: opaque tile identities
//!    - [`Grid`]: a `rows × cols` matrix of optional symbols
//!    - [`RoutingArea`]: the grid extended by its border ring, used by path finding
//!
//! 3. **Layout transforms**
//!    - [`Layout`]: deterministic "gravity" repacking of surviving tiles
//!
//! 4. **Presentation support**
//!    - [`BoardGeometry`]: maps route points to canvas coordinates
//!
//! # Examples
//!
//! ```
//! use pairlink_core::{Grid, Layout, Position};
//!
//! let mut grid: Grid = "
//!     AB.
//!     .BA
//! "
//! .parse()?;
//!
//! assert!(grid.is_cell_empty(Position::new(0, 2)));
//! // Out-of-range cells are always empty.
//! assert!(grid.is_cell_empty(Position::new(5, 5)));
//!
//! Layout::CollapseLeft.apply(&mut grid);
//! assert_eq!(grid.to_string(), "AB.\nBA.");
//! # Ok::<(), pairlink_core::GridParseError>(())
//! ```

pub use self::{
    error::{ConfigurationError, GridParseError},
    geometry::BoardGeometry,
    grid::Grid,
    layout::Layout,
    position::{Position, RoutePoint},
    routing::RoutingArea,
    symbol::{Palette, Symbol},
};

mod error;
mod geometry;
mod grid;
mod layout;
mod position;
mod routing;
mod symbol;

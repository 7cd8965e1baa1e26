//! Connection search and hints for connect-pairs puzzles.
//!
//! Two tiles with the same symbol can be removed together when an
//! axis-aligned path with at most two bends joins them. The path may only pass
//! through empty cells and through the one-cell border ring around the grid
//! (see [`RoutingArea`](pairlink_core::RoutingArea)).
//!
//! - [`check_connection`] and [`find_path`] decide a single pair and return
//!   the path to draw.
//! - [`hints`], [`find_hint`], and [`count_moves`] scan the whole board for
//!   removable pairs.
//!
//! # Examples
//!
//! ```
//! use pairlink_core::{Grid, Position};
//! use pairlink_solver::{find_hint, find_path};
//!
//! let grid: Grid = "
//!     A..
//!     ...
//!     ..A
//! "
//! .parse()?;
//!
//! let path = find_path(&grid, Position::new(0, 0), Position::new(2, 2)).unwrap();
//! assert_eq!(path.bend_count(), 1);
//!
//! let hint = find_hint(&grid).unwrap();
//! assert_eq!((hint.first, hint.second), (Position::new(0, 0), Position::new(2, 2)));
//! # Ok::<(), pairlink_core::GridParseError>(())
//! ```

pub use self::{connect::*, hint::*, path::*};

mod connect;
mod hint;
mod path;
#[cfg(test)]
mod testing;

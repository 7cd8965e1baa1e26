//! Canvas geometry for drawing connection paths.

use crate::RoutePoint;

/// Tile dimensions of a rendered board.
///
/// The canvas extends the board by a padding of one tile on every side, so
/// paths that leave through the border ring can be drawn. Border points sit half
/// a tile plus one gap outside the board edge.
///
/// # Examples
///
/// ```
/// use pairlink_core::{BoardGeometry, RoutePoint};
///
/// let geometry = BoardGeometry::new(2, 3, 50.0, 50.0, 0.0);
/// assert_eq!(geometry.canvas_size(), (250.0, 200.0));
/// assert_eq!(geometry.center(RoutePoint::new(0, 0)), (75.0, 75.0));
/// assert_eq!(geometry.center(RoutePoint::new(-1, 3)), (225.0, 25.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    rows: usize,
    cols: usize,
    tile_width: f32,
    tile_height: f32,
    gap: f32,
}

impl BoardGeometry {
    /// Creates the geometry of a `rows × cols` board.
    #[must_use]
    pub fn new(rows: usize, cols: usize, tile_width: f32, tile_height: f32, gap: f32) -> Self {
        Self {
            rows,
            cols,
            tile_width,
            tile_height,
            gap,
        }
    }

    /// Returns the padding around the board: the larger tile dimension.
    #[must_use]
    pub fn padding(&self) -> f32 {
        self.tile_width.max(self.tile_height)
    }

    /// Returns the size of the board itself, without padding.
    #[must_use]
    pub fn board_size(&self) -> (f32, f32) {
        (
            span(self.cols, self.tile_width, self.gap),
            span(self.rows, self.tile_height, self.gap),
        )
    }

    /// Returns the size of the drawing canvas, including padding on every side.
    #[must_use]
    pub fn canvas_size(&self) -> (f32, f32) {
        let (width, height) = self.board_size();
        let padding = self.padding();
        (width + 2.0 * padding, height + 2.0 * padding)
    }

    /// Returns the canvas coordinates of a route point's center.
    #[must_use]
    pub fn center(&self, point: RoutePoint) -> (f32, f32) {
        let (width, height) = self.board_size();
        (
            axis_center(
                point.col(),
                self.cols,
                self.tile_width,
                self.gap,
                width,
                self.padding(),
            ),
            axis_center(
                point.row(),
                self.rows,
                self.tile_height,
                self.gap,
                height,
                self.padding(),
            ),
        )
    }
}

#[expect(clippy::cast_precision_loss)]
fn span(count: usize, tile: f32, gap: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    count as f32 * tile + (count - 1) as f32 * gap
}

#[expect(clippy::cast_precision_loss)]
fn axis_center(index: isize, count: usize, tile: f32, gap: f32, board: f32, padding: f32) -> f32 {
    match usize::try_from(index) {
        Err(_) => padding - tile / 2.0 - gap,
        Ok(i) if i >= count => board + padding + tile / 2.0 + gap,
        Ok(i) => i as f32 * (tile + gap) + tile / 2.0 + padding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_centers_with_gap() {
        let geometry = BoardGeometry::new(10, 10, 40.0, 40.0, 4.0);
        assert_eq!(geometry.padding(), 40.0);
        assert_eq!(geometry.board_size(), (436.0, 436.0));
        assert_eq!(geometry.center(RoutePoint::new(0, 0)), (60.0, 60.0));
        assert_eq!(geometry.center(RoutePoint::new(2, 1)), (104.0, 148.0));
    }

    #[test]
    fn test_border_centers_sit_outside_the_board() {
        let geometry = BoardGeometry::new(10, 10, 40.0, 40.0, 4.0);
        // Left / top border: padding - half tile - gap.
        assert_eq!(geometry.center(RoutePoint::new(-1, -1)), (16.0, 16.0));
        // Right / bottom border: board + padding + half tile + gap.
        assert_eq!(geometry.center(RoutePoint::new(10, 10)), (500.0, 500.0));
    }

    #[test]
    fn test_padding_uses_larger_dimension() {
        let geometry = BoardGeometry::new(1, 2, 30.0, 50.0, 0.0);
        assert_eq!(geometry.padding(), 50.0);
        assert_eq!(geometry.canvas_size(), (160.0, 150.0));
    }
}

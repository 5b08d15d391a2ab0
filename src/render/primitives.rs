//! Primitive rasterization.
//!
//! Implements the pixel paths of the basic figures.

use crate::canvas::Canvas;
use crate::geometry::{Coordinate, Line, PixelPath, Point, Rectangle};
use tracing::trace;

/// A shape that rasterizes to a pixel path.
///
/// Only [`path`](Figure::path) is required. Equality and hashing of the
/// built-in figures are derived from it, see [`crate::geometry::paths_equal`].
pub trait Figure {
    /// The ordered pixels this figure visits.
    fn path(&self) -> PixelPath;

    /// Light every pixel of this figure's path on the canvas, in path order.
    fn draw_on(&self, canvas: &mut Canvas) {
        let path = self.path();
        trace!(pixels = path.len(), "lighting path");
        for coordinate in &path {
            canvas.set_pixel(coordinate.x, coordinate.y);
        }
    }
}

// ============================================================================
// Line Rasterization
// ============================================================================

/// Rasterize the segment `from -> to` using Bresenham's algorithm.
///
/// The path starts at `from`, ends at `to`, and holds exactly
/// `max(|dx|, |dy|) + 1` coordinates, each one grid step (including
/// diagonals) away from the previous.
///
/// # Example
///
/// ```
/// use trueno_canvas::geometry::{Coordinate, Point};
/// use trueno_canvas::render::rasterize_line;
///
/// let path = rasterize_line(Point::new(0, 0), Point::new(3, 1));
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.first(), Some(Coordinate::new(0, 0)));
/// assert_eq!(path.last(), Some(Coordinate::new(3, 1)));
/// ```
#[must_use]
pub fn rasterize_line(from: Point, to: Point) -> PixelPath {
    // Widened so that segments spanning the whole i32 range cannot overflow.
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = (i64::from(to.y) - i64::from(from.y)).abs();
    let step_x = if to.x >= from.x { 1 } else { -1 };
    let step_y = if to.y >= from.y { 1 } else { -1 };
    let mut error = dx - dy;

    let target = to.coordinate();
    let mut current: Coordinate = from.coordinate();
    let mut path = PixelPath::with_capacity(usize::try_from(dx.max(dy) + 1).unwrap_or(0));

    loop {
        path.push(current);

        if current == target {
            break;
        }

        let deviation = 2 * error;
        if deviation > -dy {
            error -= dy;
            current.x += step_x;
        }

        // The x-step alone may land on the target; plot it before the y-step can move past.
        if current == target {
            path.push(current);
            break;
        }

        if deviation < dx {
            error += dx;
            current.y += step_y;
        }
    }

    path
}

// ============================================================================
// Figure Implementations
// ============================================================================

impl Figure for Point {
    fn path(&self) -> PixelPath {
        PixelPath::from(vec![self.coordinate()])
    }

    fn draw_on(&self, canvas: &mut Canvas) {
        canvas.set_pixel(self.x, self.y);
    }
}

impl Figure for Line {
    fn path(&self) -> PixelPath {
        rasterize_line(self.from, self.to)
    }
}

impl Figure for Rectangle {
    /// Top, right, bottom and left edges back to back. Corner pixels appear
    /// once at the end of each edge and again at the start of the next.
    fn path(&self) -> PixelPath {
        self.edges().iter().flat_map(|edge| edge.path()).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Pixel canvas.
//!
//! A fixed-size monochrome grid that remembers which coordinates have been lit.
//! Writes are never bounds checked: any integer coordinate can be lit, and
//! renderers only look at the `[0, width) x [0, height)` window.

use crate::error::{Error, Result};
use crate::geometry::Coordinate;
use crate::output::Renderer;
use crate::render::Figure;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Fixed-size grid of lit and unlit pixels.
///
/// # Example
///
/// ```
/// use trueno_canvas::prelude::*;
///
/// let mut canvas = Canvas::new(3, 2).unwrap();
/// canvas.draw(&Rectangle::new(Point::new(0, 0), Point::new(2, 1)));
/// assert_eq!(canvas.render_as(&Ascii), "@@@\n@@@");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Every coordinate lit so far, including ones outside the extent.
    pixels: HashSet<Coordinate>,
}

impl Canvas {
    /// Create an empty canvas with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_canvas::canvas::Canvas;
    ///
    /// let canvas = Canvas::new(80, 24).unwrap();
    /// assert_eq!(canvas.width(), 80);
    /// assert_eq!(canvas.height(), 24);
    /// assert!(Canvas::new(0, 24).is_err());
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            debug!(width, height, "rejecting canvas with empty extent");
            return Err(Error::InvalidDimensions { width, height });
        }

        debug!(width, height, "created canvas");
        Ok(Self { width, height, pixels: HashSet::new() })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Light the pixel at `(x, y)`. Idempotent.
    ///
    /// Coordinates outside the canvas are recorded too; they simply never show
    /// up in rendered output.
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        self.pixels.insert(Coordinate::new(x, y));
    }

    /// Whether the pixel at `(x, y)` has been lit.
    #[must_use]
    pub fn pixel_lit(&self, x: i32, y: i32) -> bool {
        self.pixels.contains(&Coordinate::new(x, y))
    }

    /// Whether `(x, y)` lies inside the canvas extent.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        u32::try_from(x).is_ok_and(|x| x < self.width)
            && u32::try_from(y).is_ok_and(|y| y < self.height)
    }

    /// Iterate over every lit coordinate, in no particular order.
    pub fn lit_pixels(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.pixels.iter().copied()
    }

    /// Number of distinct lit coordinates, including out-of-extent ones.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.pixels.len()
    }

    /// Light every pixel on the figure's path.
    pub fn draw<F: Figure + ?Sized>(&mut self, figure: &F) {
        trace!(figure = std::any::type_name::<F>(), "drawing figure");
        figure.draw_on(self);
    }

    /// Render the canvas with the given renderer. Does not modify the canvas.
    #[must_use]
    pub fn render_as<R: Renderer + ?Sized>(&self, renderer: &R) -> String {
        renderer.render(self)
    }
}

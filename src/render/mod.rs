//! Rasterization of figures onto the integer grid.
//!
//! Every figure reduces to a [`PixelPath`](crate::geometry::PixelPath): the
//! ordered list of pixels it visits. Drawing lights that path on a canvas,
//! and figure equality compares it.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer-only, all eight octants, endpoints inclusive
//! - **Rectangle outline**: four chained Bresenham edges, clockwise from top-left
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod primitives;

pub use primitives::{rasterize_line, Figure};

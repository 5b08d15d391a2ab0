//! # Trueno-Canvas
//!
//! Integer-grid pixel canvas with self-rasterizing figures and text renderers.
//!
//! Figures (points, lines, rectangles) reduce to an ordered [`PixelPath`](geometry::PixelPath)
//! that is lit onto a [`Canvas`](canvas::Canvas); renderers turn the canvas into ASCII art or a
//! standalone HTML page. Figures compare and hash by their pixel paths, so equality is
//! structural across figure kinds.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_canvas::prelude::*;
//!
//! let mut canvas = Canvas::new(5, 3)?;
//! canvas.draw(&Rectangle::new(Point::new(0, 0), Point::new(4, 2)));
//! canvas.draw(&Line::new(Point::new(1, 1), Point::new(3, 1)));
//!
//! assert_eq!(canvas.render_as(&Ascii), "@@@@@\n@@@@@\n@@@@@");
//! # Ok::<(), trueno_canvas::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for coordinates, pixel paths and figures
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   IBM Systems Journal 4(1).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Pixel canvas holding the set of lit coordinates.
pub mod canvas;

/// Coordinates, pixel paths and figures (points, lines, rectangles).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of figures into pixel paths.
pub mod render;

/// Text renderers (ASCII, HTML).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-canvas operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_canvas::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Coordinate, Line, PixelPath, Point, Rectangle};
    pub use crate::output::{Ascii, Html, Renderer};
    pub use crate::render::Figure;
}

// ============================================================================
// Tests
// ============================================================================

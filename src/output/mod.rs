//! Text renderers (ASCII, HTML).
//!
//! A renderer is a pure function of canvas state: the same lit pixels and
//! dimensions always produce the same string. Only pixels inside the canvas
//! extent are rendered, scanned row by row from the top-left corner.

mod ascii;
mod html;

pub use ascii::Ascii;
pub use html::Html;

use crate::canvas::Canvas;

/// Turns a canvas into text.
pub trait Renderer {
    /// Render the visible part of the canvas.
    fn render(&self, canvas: &Canvas) -> String;
}

/// Render every visible row, mapping lit pixels to `lit` and the rest to `unlit`.
///
/// Rows are returned top to bottom; within a row pixels run left to right.
pub(crate) fn render_rows(canvas: &Canvas, lit: &str, unlit: &str) -> Vec<String> {
    // Pixels beyond i32::MAX can never be lit.
    let width = i32::try_from(canvas.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(canvas.height()).unwrap_or(i32::MAX);

    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if canvas.pixel_lit(x, y) { lit } else { unlit })
                .collect()
        })
        .collect()
}

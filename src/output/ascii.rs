//! ASCII renderer.
//!
//! One character per pixel: `@` for lit, `-` for unlit.

use super::{render_rows, Renderer};
use crate::canvas::Canvas;

/// Plain-text renderer.
///
/// Rows are separated by `\n` with no trailing newline, so a 3x2 empty
/// canvas renders as `"---\n---"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ascii;

impl Ascii {
    /// Character for a lit pixel.
    pub const LIT: &'static str = "@";
    /// Character for an unlit pixel.
    pub const UNLIT: &'static str = "-";
}

impl Renderer for Ascii {
    fn render(&self, canvas: &Canvas) -> String {
        render_rows(canvas, Self::LIT, Self::UNLIT).join("\n")
    }
}

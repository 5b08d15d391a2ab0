//! HTML renderer.
//!
//! Emits a standalone document where every pixel is an inline element styled
//! as a 10x10 rounded cell: `<b>` for lit (dark), `<i>` for unlit (light).

use super::{render_rows, Renderer};
use crate::canvas::Canvas;

/// Standalone HTML document renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Html;

impl Html {
    /// Document prologue, styles and the opening canvas wrapper.
    pub const HEADER: &'static str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Rendered Canvas</title>
  <style type="text/css">
    .canvas {
      font-size: 1px;
      line-height: 1px;
    }
    .canvas * {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 5px;
    }
    .canvas i {
      background-color: #eee;
    }
    .canvas b {
      background-color: #333;
    }
  </style>
</head>
<body>
  <div class="canvas">
"#;

    /// Closes the canvas wrapper and the document.
    pub const FOOTER: &'static str = "\n  </div>\n</body>\n</html>\n";

    /// Markup for a lit pixel.
    pub const LIT: &'static str = "<b></b>";
    /// Markup for an unlit pixel.
    pub const UNLIT: &'static str = "<i></i>";
    /// Placed between consecutive rows.
    pub const ROW_SEPARATOR: &'static str = "<br>\n";
}

impl Renderer for Html {
    fn render(&self, canvas: &Canvas) -> String {
        let body = render_rows(canvas, Self::LIT, Self::UNLIT).join(Self::ROW_SEPARATOR);

        let mut output = String::with_capacity(Self::HEADER.len() + body.len() + Self::FOOTER.len());
        output.push_str(Self::HEADER);
        output.push_str(&body);
        output.push_str(Self::FOOTER);
        output
    }
}

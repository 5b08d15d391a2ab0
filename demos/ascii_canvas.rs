//! Draw a few figures and print both renderings.
//!
//! Run with: `RUST_LOG=trace cargo run --example ascii_canvas`

use trueno_canvas::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut canvas = Canvas::new(24, 12)?;

    canvas.draw(&Rectangle::new(Point::new(23, 11), Point::new(0, 0)));
    canvas.draw(&Line::new(Point::new(2, 2), Point::new(21, 9)));
    canvas.draw(&Line::new(Point::new(21, 2), Point::new(2, 9)));
    canvas.draw(&Point::new(11, 5));

    // Off-canvas writes are kept but never rendered.
    canvas.set_pixel(-3, 40);

    println!("{}", canvas.render_as(&Ascii));
    println!();
    println!("{}", canvas.render_as(&Html));

    Ok(())
}

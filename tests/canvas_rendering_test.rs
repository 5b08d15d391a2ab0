//! Canvas and renderer behaviour through the public API.
//!
//! Run: cargo test --test canvas_rendering_test

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use trueno_canvas::prelude::*;

#[test]
fn set_pixel_then_query() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    canvas.set_pixel(4, 7);
    assert!(canvas.pixel_lit(4, 7));
    assert!(!canvas.pixel_lit(7, 4));
    assert!(!canvas.pixel_lit(-100, 100));
}

#[test]
fn zero_dimensions_rejected() {
    let err = Canvas::new(0, 5).unwrap_err();
    assert_eq!(err, Error::InvalidDimensions { width: 0, height: 5 });
    assert!(Canvas::new(5, 0).is_err());
}

#[test]
fn fresh_canvas_ascii() {
    let canvas = Canvas::new(3, 2).unwrap();
    assert_eq!(canvas.render_as(&Ascii), "---\n---");
}

#[test]
fn small_rectangle_covers_canvas() {
    let mut canvas = Canvas::new(3, 2).unwrap();
    canvas.draw(&Rectangle::new(Point::new(0, 0), Point::new(2, 1)));

    let ascii = canvas.render_as(&Ascii);
    let rows: Vec<&str> = ascii.split('\n').collect();
    assert_eq!(rows, vec!["@@@", "@@@"]);
}

#[test]
fn render_as_idempotent() {
    let mut canvas = Canvas::new(6, 4).unwrap();
    canvas.draw(&Line::from_coords(0, 3, 5, 0));
    canvas.draw(&Point::new(2, 2));

    assert_eq!(canvas.render_as(&Ascii), canvas.render_as(&Ascii));
    assert_eq!(canvas.render_as(&Html), canvas.render_as(&Html));
}

#[test]
fn draw_order_does_not_matter() {
    let figures: [&dyn Figure; 3] = [
        &Point::new(1, 1),
        &Line::from_coords(0, 0, 4, 2),
        &Rectangle::new(Point::new(1, 0), Point::new(3, 2)),
    ];

    let mut forward = Canvas::new(5, 3).unwrap();
    let mut backward = Canvas::new(5, 3).unwrap();
    for figure in figures {
        forward.draw(figure);
    }
    for figure in figures.iter().rev() {
        backward.draw(*figure);
    }

    assert_eq!(forward, backward);
    assert_eq!(forward.render_as(&Ascii), backward.render_as(&Ascii));
}

#[test]
fn html_and_ascii_agree() {
    let mut canvas = Canvas::new(4, 3).unwrap();
    canvas.draw(&Line::from_coords(0, 0, 3, 2));

    let ascii = canvas.render_as(&Ascii);
    let html = canvas.render_as(&Html);
    let body = html
        .strip_prefix(Html::HEADER)
        .and_then(|rest| rest.strip_suffix(Html::FOOTER))
        .unwrap();

    let translated = ascii.replace('@', Html::LIT).replace('-', Html::UNLIT).replace('\n', "<br>\n");
    assert_eq!(body, translated);
}

#[test]
fn renderer_as_trait_object() {
    let renderers: [&dyn Renderer; 2] = [&Ascii, &Html];
    let mut canvas = Canvas::new(2, 2).unwrap();
    canvas.draw(&Point::new(0, 0));

    for renderer in renderers {
        assert!(!canvas.render_as(renderer).is_empty());
    }
}

proptest! {
    /// Ascii output is height rows of width characters each.
    #[test]
    fn ascii_shape(width in 1u32..40, height in 1u32..40, x in -5i32..45, y in -5i32..45) {
        let mut canvas = Canvas::new(width, height).unwrap();
        canvas.set_pixel(x, y);

        let ascii = canvas.render_as(&Ascii);
        let rows: Vec<&str> = ascii.split('\n').collect();
        prop_assert_eq!(rows.len(), height as usize);
        for row in &rows {
            prop_assert_eq!(row.len(), width as usize);
        }

        let lit = ascii.chars().filter(|&c| c == '@').count();
        prop_assert_eq!(lit, usize::from(canvas.contains(x, y)));
    }
}

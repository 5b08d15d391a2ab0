//! Geometric figures on the integer pixel grid.
//!
//! Provides the coordinate and pixel path types plus the three figures
//! (points, lines, rectangles) that rasterize onto a [`Canvas`](crate::canvas::Canvas).
//!
//! Every figure compares and hashes by its rasterized [`PixelPath`], so figures
//! of different kinds are equal whenever they visit the same pixels in the same
//! order: `Point::new(1, 1) == Line::new(Point::new(1, 1), Point::new(1, 1))`.

use crate::render::Figure;
use std::hash::{Hash, Hasher};

// ============================================================================
// Coordinates and Pixel Paths
// ============================================================================

/// An integer grid coordinate. May lie outside any canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row, growing downwards).
    pub y: i32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Ordered sequence of coordinates produced by rasterizing a figure.
///
/// Order is significant: two paths are equal only if they have the same
/// length and visit the same coordinates in the same order. Repeated
/// coordinates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PixelPath(Vec<Coordinate>);

impl PixelPath {
    /// Create an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty path with room for `capacity` coordinates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append a coordinate.
    pub fn push(&mut self, coordinate: Coordinate) {
        self.0.push(coordinate);
    }

    /// Number of coordinates, counting repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First coordinate visited.
    #[must_use]
    pub fn first(&self) -> Option<Coordinate> {
        self.0.first().copied()
    }

    /// Last coordinate visited.
    #[must_use]
    pub fn last(&self) -> Option<Coordinate> {
        self.0.last().copied()
    }

    /// Iterate over the coordinates in visiting order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.0.iter()
    }

    /// The coordinates as a slice.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }
}

impl From<Vec<Coordinate>> for PixelPath {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self(coordinates)
    }
}

impl FromIterator<Coordinate> for PixelPath {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Coordinate> for PixelPath {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for PixelPath {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PixelPath {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Structural Equality
// ============================================================================

/// Compare two figures of any kind by their pixel paths.
#[must_use]
pub fn paths_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Figure + ?Sized,
    B: Figure + ?Sized,
{
    a.path() == b.path()
}

/// Implements `PartialEq` between every pair of listed figures, plus `Eq`
/// and a path-derived `Hash` for each.
macro_rules! path_equality {
    (@row $lhs:ty, [$($rhs:ty),+]) => {
        $(
            impl PartialEq<$rhs> for $lhs {
                fn eq(&self, other: &$rhs) -> bool {
                    paths_equal(self, other)
                }
            }
        )+
    };
    (@pairs [$($lhs:ty),+] $rhs:tt) => {
        $( path_equality!(@row $lhs, $rhs); )+
    };
    ($($figure:ty),+ $(,)?) => {
        path_equality!(@pairs [$($figure),+] [$($figure),+]);
        $(
            impl Eq for $figure {}

            impl Hash for $figure {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.path().hash(state);
                }
            }
        )+
    };
}

path_equality!(Point, Line, Rectangle);

// ============================================================================
// Figures
// ============================================================================

/// A single pixel.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The grid coordinate of this point.
    #[must_use]
    pub const fn coordinate(self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

impl From<Coordinate> for Point {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate.x, coordinate.y)
    }
}

/// A line segment rasterized from `from` toward `to`, both inclusive.
///
/// Direction matters: a line and its reverse light the same pixels but are
/// not equal, because their paths are visited in opposite order.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// The same segment traversed in the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.to, self.from)
    }
}

/// An axis-aligned rectangle outline given by two opposite corners.
///
/// The corners are normalized on construction, so the order and the
/// diagonal of the two input points do not matter. Zero-width or
/// zero-height rectangles are allowed.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(Point, Point)", into = "(Point, Point)"))]
pub struct Rectangle {
    top_left: Point,
    top_right: Point,
    bottom_left: Point,
    bottom_right: Point,
}

impl Rectangle {
    /// Create a rectangle from any two opposite corners.
    #[must_use]
    pub fn new(corner1: Point, corner2: Point) -> Self {
        let (left, right) = (corner1.x.min(corner2.x), corner1.x.max(corner2.x));
        let (top, bottom) = (corner1.y.min(corner2.y), corner1.y.max(corner2.y));

        Self {
            top_left: Point::new(left, top),
            top_right: Point::new(right, top),
            bottom_left: Point::new(left, bottom),
            bottom_right: Point::new(right, bottom),
        }
    }

    /// Corner with the smallest x and y.
    #[must_use]
    pub const fn top_left(&self) -> Point {
        self.top_left
    }

    /// Corner with the largest x and smallest y.
    #[must_use]
    pub const fn top_right(&self) -> Point {
        self.top_right
    }

    /// Corner with the smallest x and largest y.
    #[must_use]
    pub const fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    /// Corner with the largest x and y.
    #[must_use]
    pub const fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// Alias for [`top_left`](Self::top_left).
    #[must_use]
    pub const fn left(&self) -> Point {
        self.top_left
    }

    /// Alias for [`bottom_right`](Self::bottom_right).
    #[must_use]
    pub const fn right(&self) -> Point {
        self.bottom_right
    }

    /// Width in pixels, counting both edges.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.top_left.x.abs_diff(self.top_right.x).saturating_add(1)
    }

    /// Height in pixels, counting both edges.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.top_left.y.abs_diff(self.bottom_left.y).saturating_add(1)
    }

    /// The four outline edges, clockwise from the top edge.
    ///
    /// Each edge starts where the previous one ended: top, right, bottom, left.
    #[must_use]
    pub const fn edges(&self) -> [Line; 4] {
        [
            Line::new(self.top_left, self.top_right),
            Line::new(self.top_right, self.bottom_right),
            Line::new(self.bottom_right, self.bottom_left),
            Line::new(self.bottom_left, self.top_left),
        ]
    }
}

impl From<(Point, Point)> for Rectangle {
    fn from((corner1, corner2): (Point, Point)) -> Self {
        Self::new(corner1, corner2)
    }
}

impl From<Rectangle> for (Point, Point) {
    fn from(rect: Rectangle) -> Self {
        (rect.top_left, rect.bottom_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_rectangle_corners_normalized() {
        let rect = Rectangle::new(Point::new(5, 1), Point::new(2, 4));
        assert_eq!(rect.top_left().coordinate(), Coordinate::new(2, 1));
        assert_eq!(rect.top_right().coordinate(), Coordinate::new(5, 1));
        assert_eq!(rect.bottom_left().coordinate(), Coordinate::new(2, 4));
        assert_eq!(rect.bottom_right().coordinate(), Coordinate::new(5, 4));
        assert_eq!(rect.left().coordinate(), rect.top_left().coordinate());
        assert_eq!(rect.right().coordinate(), rect.bottom_right().coordinate());
    }

    #[test]
    fn test_rectangle_dimensions() {
        let rect = Rectangle::new(Point::new(-1, 0), Point::new(3, 2));
        assert_eq!(rect.width(), 5);
        assert_eq!(rect.height(), 3);
    }

    #[test]
    fn test_rectangle_edges_chain() {
        let rect = Rectangle::new(Point::new(0, 0), Point::new(4, 2));
        let edges = rect.edges();
        for pair in edges.windows(2) {
            assert_eq!(pair[0].to.coordinate(), pair[1].from.coordinate());
        }
        assert_eq!(edges[3].to.coordinate(), edges[0].from.coordinate());
    }

    #[test]
    fn test_rectangle_any_diagonal_equal() {
        let a = Rectangle::new(Point::new(0, 0), Point::new(3, 2));
        let b = Rectangle::new(Point::new(3, 2), Point::new(0, 0));
        let c = Rectangle::new(Point::new(0, 2), Point::new(3, 0));
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(hash_of(&a), hash_of(&c));
    }

    #[test]
    fn test_point_equals_degenerate_line() {
        let point = Point::new(1, 1);
        let line = Line::new(Point::new(1, 1), Point::new(1, 1));
        assert_eq!(point, line);
        assert_eq!(line, point);
        assert_eq!(hash_of(&point), hash_of(&line));
    }

    #[test]
    fn test_reversed_line_not_equal() {
        let line = Line::from_coords(0, 0, 3, 3);
        assert_ne!(line, line.reversed());
    }

    #[test]
    fn test_figures_in_hash_set() {
        let mut set = HashSet::new();
        set.insert(Point::new(2, 3));
        set.insert(Point::new(2, 3));
        set.insert(Point::new(3, 2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_pixel_path_collect_and_iterate() {
        let path: PixelPath = [(0, 0), (1, 0), (1, 1)].into_iter().map(Coordinate::from).collect();
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(Coordinate::new(0, 0)));
        assert_eq!(path.last(), Some(Coordinate::new(1, 1)));
        assert_eq!(path.iter().count(), 3);
        assert!(!path.is_empty());
        assert!(PixelPath::new().is_empty());
    }

    #[test]
    fn test_pixel_path_order_matters() {
        let forward = PixelPath::from(vec![Coordinate::new(0, 0), Coordinate::new(1, 0)]);
        let backward = PixelPath::from(vec![Coordinate::new(1, 0), Coordinate::new(0, 0)]);
        assert_ne!(forward, backward);
    }
}

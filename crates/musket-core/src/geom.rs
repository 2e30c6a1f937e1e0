//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Boards are addressed as (row, column) with row 0 at the top, so both
//! types use `row`/`col` fields rather than screen `x`/`y`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A board position. Rows grow downwards, columns grow to the right.
///
/// With the `serde` feature a point serializes as a `[row, col]` pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "(i32, i32)", from = "(i32, i32)"))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether the point is inside the half-open range.
    #[inline]
    pub fn in_range(self, r: &Range) -> bool {
        r.contains(self)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order: the order in which a board is scanned.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.row, p.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Point::new(row0.min(row1), col0.min(col1)),
            max: Point::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// Range covering a `rows` × `cols` board anchored at the origin.
    #[inline]
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self::new(0, 0, rows, cols)
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Iterate over every point of the range in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        let cols = self.min.col..self.max.col;
        (self.min.row..self.max.row)
            .flat_map(move |row| cols.clone().map(move |col| Point::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let p = Point::new(2, 3);
        assert_eq!(p + Point::new(1, -1), Point::new(3, 2));
        assert_eq!(p - Point::new(2, 3), Point::ZERO);
        assert_eq!(p.shift(-1, 1), Point::new(1, 4));
    }

    #[test]
    fn point_orders_row_major() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 2), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 2), Point::new(1, 0)]);
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(4, 7).to_string(), "(4, 7)");
    }

    #[test]
    fn range_canonicalizes() {
        let r = Range::new(3, 4, 0, 1);
        assert_eq!(r.min, Point::new(0, 1));
        assert_eq!(r.max, Point::new(3, 4));
        assert_eq!(r.len(), 9);
    }

    #[test]
    fn range_contains_half_open() {
        let r = Range::with_size(2, 3);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(1, 2)));
        assert!(!r.contains(Point::new(2, 0)));
        assert!(!r.contains(Point::new(0, 3)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn range_iter_is_row_major() {
        let pts: Vec<Point> = Range::with_size(2, 2).iter().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 1)
            ]
        );
    }

    #[test]
    fn empty_range() {
        let r = Range::with_size(0, 5);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_is_a_pair() {
        let json = serde_json::to_string(&Point::new(1, 2)).unwrap();
        assert_eq!(json, "[1,2]");
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Point::new(1, 2));
    }

    #[test]
    fn range_round_trip() {
        let r = Range::new(1, 2, 4, 6);
        let json = serde_json::to_string(&r).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}

use musket_core::Point;

/// Cursor steps walked when expanding a node, each relative to the previous
/// candidate: `(r, c-1)`, then `(+1, +1)`, `(-1, +1)`, `(-1, -1)`.
///
/// Starting from the node this visits left, down, right and up, in that
/// order. Generation order decides frontier insertion order, so it must not
/// be rearranged.
pub const CURSOR_STEPS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Candidate successor positions of `p` in generation order.
///
/// Candidates are not filtered; they may lie off the board.
#[inline]
pub fn candidates(p: Point) -> [Point; 4] {
    let mut cursor = p;
    CURSOR_STEPS.map(|step| {
        cursor = cursor + step;
        cursor
    })
}

/// The displacement of each candidate from its origin, in generation order.
///
/// Every step of a reconstructed path is one of these.
#[inline]
pub fn moves() -> [Point; 4] {
    candidates(Point::ZERO)
}

use musket_core::Point;

use crate::node::NodeId;

/// A frontier slot: the node to visit, where it is, and its priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub node: NodeId,
    pub pos: Point,
    pub f: i32,
}

/// Container of generated-but-not-yet-visited nodes.
///
/// Implementations decide which entry a strategy visits next. A position is
/// never held twice: callers check [`contains`](Frontier::contains) before
/// pushing.
pub trait Frontier {
    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Whether some entry sits at `p`.
    fn contains(&self, p: Point) -> bool;

    fn push(&mut self, entry: Entry);

    /// Remove the entry the strategy is entitled to visit next.
    fn pop(&mut self) -> Option<Entry>;

    /// Positions currently held, in the implementation's listing order.
    fn snapshot(&self) -> Vec<Point>;
}

use std::collections::{BinaryHeap, HashSet};

use musket_core::Point;

use crate::traits::{Entry, Frontier};

// ---------------------------------------------------------------------------
// Priority ordering
// ---------------------------------------------------------------------------

/// Heap slot ordered by `f`, then by insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Queued {
    entry: Entry,
    seq: u64,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the max-heap pops the smallest f, and the earliest
        // insertion among equal f.
        other
            .entry
            .f
            .cmp(&self.entry.f)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier on `f` with FIFO tie-breaking.
#[derive(Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Queued>,
    members: HashSet<Point>,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains(&self, p: Point) -> bool {
        self.members.contains(&p)
    }

    fn push(&mut self, entry: Entry) {
        self.members.insert(entry.pos);
        self.heap.push(Queued {
            entry,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<Entry> {
        let Queued { entry, .. } = self.heap.pop()?;
        self.members.remove(&entry.pos);
        Some(entry)
    }

    /// Lists entries in the order they would be popped.
    fn snapshot(&self) -> Vec<Point> {
        let mut queued: Vec<&Queued> = self.heap.iter().collect();
        queued.sort_unstable_by(|a, b| b.cmp(a));
        queued.into_iter().map(|q| q.entry.pos).collect()
    }
}

// ---------------------------------------------------------------------------
// Stack ordering
// ---------------------------------------------------------------------------

/// Last-in first-out frontier. Priorities are ignored.
#[derive(Default)]
pub struct StackFrontier {
    stack: Vec<Entry>,
    members: HashSet<Point>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn contains(&self, p: Point) -> bool {
        self.members.contains(&p)
    }

    fn push(&mut self, entry: Entry) {
        self.members.insert(entry.pos);
        self.stack.push(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        let entry = self.stack.pop()?;
        self.members.remove(&entry.pos);
        Some(entry)
    }

    /// Lists entries bottom to top, i.e. in insertion order.
    fn snapshot(&self) -> Vec<Point> {
        self.stack.iter().map(|e| e.pos).collect()
    }
}

use std::collections::HashSet;

use musket_core::Point;

/// Positions visited during one agent search, in visitation order.
#[derive(Debug, Default, Clone)]
pub struct ExploredSet {
    order: Vec<Point>,
    seen: HashSet<Point>,
}

impl ExploredSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `p` as visited. Returns `false` if it already was.
    pub fn insert(&mut self, p: Point) -> bool {
        if !self.seen.insert(p) {
            return false;
        }
        self.order.push(p);
        true
    }

    pub fn contains(&self, p: Point) -> bool {
        self.seen.contains(&p)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visited positions, first visit first.
    pub fn as_slice(&self) -> &[Point] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_rejects_duplicates() {
        let mut es = ExploredSet::new();
        assert!(es.insert(Point::new(1, 1)));
        assert!(es.insert(Point::new(0, 1)));
        assert!(!es.insert(Point::new(1, 1)));
        assert!(es.contains(Point::new(0, 1)));
        assert_eq!(es.len(), 2);
        assert_eq!(es.into_vec(), vec![Point::new(1, 1), Point::new(0, 1)]);
    }
}

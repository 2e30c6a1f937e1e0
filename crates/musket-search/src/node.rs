use musket_core::Point;

/// Index of a node inside its [`NodeArena`].
pub type NodeId = usize;

/// A generated search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Point,
    /// The node this one was generated from; `None` for an agent start.
    pub parent: Option<NodeId>,
    /// Steps from the agent start.
    pub g: i32,
    /// Frontier priority. Greedy search stores the distance to the goal,
    /// IDA* stores `g` plus that distance, depth-first search leaves it 0.
    pub f: i32,
}

/// Owns every node generated during one agent search.
///
/// Parent links are indices into the arena, so the tree is dropped
/// wholesale with the arena once the path has been extracted.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its id.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Positions from the root of `id`'s tree down to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = &self.nodes[ci];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}

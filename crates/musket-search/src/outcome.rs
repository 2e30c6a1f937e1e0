use musket_core::Point;

use crate::search::Trace;

/// Everything recorded by a successful search from one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentOutcome {
    /// The agent's start position.
    pub agent: Point,
    /// Visited positions in visitation order, starting with `agent` and
    /// ending with the goal.
    pub explored: Vec<Point>,
    /// Frontier contents after each expansion, plus one after the goal was
    /// removed.
    pub snapshots: Vec<Vec<Point>>,
    /// Start to goal, inclusive.
    pub path: Vec<Point>,
    /// IDA* bounds tried, in order. Empty for the other strategies.
    pub cutoffs: Vec<i32>,
}

impl AgentOutcome {
    pub(crate) fn from_trace(agent: Point, trace: Trace, cutoffs: Vec<i32>) -> Self {
        Self {
            agent,
            explored: trace.explored,
            snapshots: trace.snapshots,
            path: trace.path,
            cutoffs,
        }
    }

    /// Number of moves from the start to the goal.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// The three sequences handed to a visualiser: the winning agent's
/// explored nodes, its frontier snapshots and its path. All empty when no
/// agent reaches the goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub explored_nodes: Vec<Point>,
    pub search_queue: Vec<Vec<Point>>,
    pub shortest_path: Vec<Point>,
}

impl SearchResult {
    /// Whether no agent reached the goal.
    pub fn is_empty(&self) -> bool {
        self.shortest_path.is_empty()
    }
}

impl From<AgentOutcome> for SearchResult {
    fn from(o: AgentOutcome) -> Self {
        Self {
            explored_nodes: o.explored,
            search_queue: o.snapshots,
            shortest_path: o.path,
        }
    }
}

//! The visit loop shared by every strategy.

use log::trace;
use musket_core::{Board, Point};

use crate::distance::manhattan;
use crate::explored::ExploredSet;
use crate::node::{NodeArena, SearchNode};
use crate::traits::{Entry, Frontier};

/// How generated nodes are prioritised and filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scoring {
    /// No priority; the frontier's own order decides.
    Unscored,
    /// `f` = distance to the goal.
    Greedy,
    /// `f` = `g` + distance to the goal; successors above `cutoff` are
    /// rejected instead of queued.
    Bounded { cutoff: i32 },
}

/// What a successful search recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Trace {
    pub(crate) explored: Vec<Point>,
    pub(crate) snapshots: Vec<Vec<Point>>,
    pub(crate) path: Vec<Point>,
}

/// How one run of the visit loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RunResult {
    Found(Trace),
    /// The frontier ran dry. `next_cutoff` is the first rejected `f` of a
    /// bounded search, if any successor was rejected.
    Exhausted { next_cutoff: Option<i32> },
}

/// State of a single search from one agent start.
///
/// Everything here is created for one run and dropped when it ends.
pub(crate) struct AgentSearch<'a, F> {
    pub(crate) board: &'a Board,
    pub(crate) goal: Point,
    pub(crate) scoring: Scoring,
    pub(crate) arena: NodeArena,
    pub(crate) frontier: F,
    pub(crate) explored: ExploredSet,
    pub(crate) snapshots: Vec<Vec<Point>>,
    pub(crate) next_cutoff: Option<i32>,
}

impl<'a, F: Frontier> AgentSearch<'a, F> {
    pub(crate) fn new(board: &'a Board, frontier: F, scoring: Scoring) -> Self {
        Self {
            board,
            goal: board.goal(),
            scoring,
            arena: NodeArena::new(),
            frontier,
            explored: ExploredSet::new(),
            snapshots: Vec::new(),
            next_cutoff: None,
        }
    }

    /// Priority of a node at `pos` reached in `g` steps.
    #[inline]
    pub(crate) fn score(&self, pos: Point, g: i32) -> i32 {
        match self.scoring {
            Scoring::Unscored => 0,
            Scoring::Greedy => manhattan(pos, self.goal),
            Scoring::Bounded { .. } => g + manhattan(pos, self.goal),
        }
    }

    /// Search from `start` until the goal is visited or the frontier is
    /// exhausted.
    pub(crate) fn run(mut self, start: Point) -> RunResult {
        let f = self.score(start, 0);
        let root = self.arena.alloc(SearchNode {
            pos: start,
            parent: None,
            g: 0,
            f,
        });
        self.frontier.push(Entry {
            node: root,
            pos: start,
            f,
        });

        loop {
            let Some(current) = self.frontier.pop() else {
                return RunResult::Exhausted {
                    next_cutoff: self.next_cutoff,
                };
            };

            self.explored.insert(current.pos);
            trace!("visit {} (f = {})", current.pos, current.f);

            if current.pos == self.goal {
                self.snapshots.push(self.frontier.snapshot());
                let path = self.arena.path_to(current.node);
                return RunResult::Found(Trace {
                    explored: self.explored.into_vec(),
                    snapshots: self.snapshots,
                    path,
                });
            }

            self.expand(current.node);
            self.snapshots.push(self.frontier.snapshot());
        }
    }
}

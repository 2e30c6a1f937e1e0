//! The expansion rule: which neighbours of a visited node join the frontier.

use musket_core::{Board, Point};

use crate::explored::ExploredSet;
use crate::neighbors::candidates;
use crate::node::{NodeId, SearchNode};
use crate::search::{AgentSearch, Scoring};
use crate::traits::{Entry, Frontier};

/// Successor positions of `pos` that may be added to the frontier, in
/// generation order.
///
/// A candidate qualifies when it is on the board, is an open or goal cell,
/// and is neither queued in `frontier` nor already in `explored`.
pub fn admissible_successors<F: Frontier + ?Sized>(
    board: &Board,
    pos: Point,
    frontier: &F,
    explored: &ExploredSet,
) -> Vec<Point> {
    candidates(pos)
        .into_iter()
        .filter(|&p| board.is_traversable(p) && !frontier.contains(p) && !explored.contains(p))
        .collect()
}

impl<F: Frontier> AgentSearch<'_, F> {
    /// Generate the children of node `id` and queue the ones the current
    /// scoring accepts.
    pub(crate) fn expand(&mut self, id: NodeId) {
        let parent = *self.arena.get(id);
        let g = parent.g + 1;

        for p in admissible_successors(self.board, parent.pos, &self.frontier, &self.explored) {
            let f = self.score(p, g);
            if let Scoring::Bounded { cutoff } = self.scoring {
                if f > cutoff {
                    // Only the first rejection sets the next bound.
                    if self.next_cutoff.is_none() {
                        self.next_cutoff = Some(f);
                    }
                    continue;
                }
            }
            let node = self.arena.alloc(SearchNode {
                pos: p,
                parent: Some(id),
                g,
                f,
            });
            self.frontier.push(Entry { node, pos: p, f });
        }
    }
}

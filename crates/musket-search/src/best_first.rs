//! Greedy best-first search.
//!
//! Nodes are visited in ascending Manhattan distance to the goal. Path cost
//! plays no part in the ordering, so this is not A*: on boards with
//! obstacles the path found is not necessarily the shortest.

use log::debug;
use musket_core::{Board, Point};

use crate::frontier::PriorityFrontier;
use crate::outcome::AgentOutcome;
use crate::search::{AgentSearch, RunResult, Scoring};

/// Run greedy best-first search from `start` to the board's goal.
///
/// Returns `None` if the frontier empties before the goal is visited.
pub fn best_first(board: &Board, start: Point) -> Option<AgentOutcome> {
    let search = AgentSearch::new(board, PriorityFrontier::new(), Scoring::Greedy);
    match search.run(start) {
        RunResult::Found(trace) => {
            debug!(
                "best-first from {start}: goal after {} visits, path of {} cells",
                trace.explored.len(),
                trace.path.len()
            );
            Some(AgentOutcome::from_trace(start, trace, Vec::new()))
        }
        RunResult::Exhausted { .. } => {
            debug!("best-first from {start}: goal unreachable");
            None
        }
    }
}

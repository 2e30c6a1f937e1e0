//! Depth-first search on a stack frontier.

use log::debug;
use musket_core::{Board, Point};

use crate::frontier::StackFrontier;
use crate::outcome::AgentOutcome;
use crate::search::{AgentSearch, RunResult, Scoring};

/// Run depth-first search from `start` to the board's goal.
///
/// The last successor generated by an expansion is visited next. The path
/// found is feasible but carries no length guarantee.
pub fn depth_first(board: &Board, start: Point) -> Option<AgentOutcome> {
    let search = AgentSearch::new(board, StackFrontier::new(), Scoring::Unscored);
    match search.run(start) {
        RunResult::Found(trace) => {
            debug!(
                "depth-first from {start}: goal after {} visits, path of {} cells",
                trace.explored.len(),
                trace.path.len()
            );
            Some(AgentOutcome::from_trace(start, trace, Vec::new()))
        }
        RunResult::Exhausted { .. } => {
            debug!("depth-first from {start}: goal unreachable");
            None
        }
    }
}

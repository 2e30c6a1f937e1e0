//! Iterative deepening A* (IDA*).
//!
//! Each iteration is a complete bounded search: successors whose
//! `g + h` exceeds the current cutoff are not queued. If the goal is not
//! found, the first rejected `g + h` becomes the next cutoff and the search
//! restarts from scratch. Every iteration strictly raises the cutoff, and
//! `g` can never exceed the number of board cells, so the loop terminates.

use log::debug;
use musket_core::{Board, Point};

use crate::distance::manhattan;
use crate::frontier::PriorityFrontier;
use crate::outcome::AgentOutcome;
use crate::search::{AgentSearch, RunResult, Scoring};

/// Run IDA* from `start` to the board's goal.
///
/// The returned outcome carries the sequences of the successful iteration
/// and every cutoff tried. Returns `None` once an iteration fails without
/// producing a larger cutoff.
pub fn ida_star(board: &Board, start: Point) -> Option<AgentOutcome> {
    let mut cutoff = manhattan(start, board.goal());
    let mut cutoffs = vec![cutoff];

    loop {
        let search = AgentSearch::new(board, PriorityFrontier::new(), Scoring::Bounded { cutoff });
        match search.run(start) {
            RunResult::Found(trace) => {
                debug!(
                    "ida* from {start}: goal at cutoff {cutoff} after {} iterations",
                    cutoffs.len()
                );
                return Some(AgentOutcome::from_trace(start, trace, cutoffs));
            }
            RunResult::Exhausted {
                next_cutoff: Some(next),
            } if next > cutoff => {
                debug!("ida* from {start}: cutoff {cutoff} exhausted, raising to {next}");
                cutoff = next;
                cutoffs.push(next);
            }
            RunResult::Exhausted { .. } => {
                debug!("ida* from {start}: cutoff {cutoff} exhausted, goal unreachable");
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn three_by_three_first_iteration() {
        let board = Board::from_rows(&[[1, 2, 2], [2, 0, 2], [2, 2, 3]]).unwrap();
        let out = ida_star(&board, p(0, 0)).unwrap();

        assert_eq!(out.cutoffs, vec![4]);
        assert_eq!(out.path, vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
        // Every node on both routes has g + h = 4, so ties are visited in
        // generation order and both branches are explored.
        assert_eq!(
            out.explored,
            vec![
                p(0, 0),
                p(1, 0),
                p(0, 1),
                p(2, 0),
                p(0, 2),
                p(2, 1),
                p(1, 2),
                p(2, 2)
            ]
        );
        assert_eq!(out.snapshots.len(), out.explored.len());
        assert_eq!(out.snapshots.last(), Some(&vec![]));
    }

    #[test]
    fn raises_cutoff_around_walls() {
        let board = Board::from_rows(&[[1, 0, 3], [2, 0, 2], [2, 2, 2]]).unwrap();
        let out = ida_star(&board, p(0, 0)).unwrap();

        assert_eq!(out.cutoffs, vec![2, 4, 6]);
        assert_eq!(
            out.path,
            vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2), p(1, 2), p(0, 2)]
        );
    }

    #[test]
    fn cutoffs_strictly_increase() {
        let board = Board::from_rows(&[
            [1, 2, 2, 2, 2, 2],
            [0, 0, 0, 0, 0, 2],
            [2, 2, 2, 2, 2, 2],
            [2, 0, 0, 0, 0, 0],
            [2, 2, 2, 2, 2, 3],
        ])
        .unwrap();
        let out = ida_star(&board, p(0, 0)).unwrap();
        assert!(out.cutoffs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(out.steps(), 19);
    }

    #[test]
    fn no_rejection_means_unreachable() {
        let board = Board::from_rows(&[[1, 2, 0, 3]]).unwrap();
        assert_eq!(ida_star(&board, p(0, 0)), None);
    }

    #[test]
    fn gives_up_once_bounds_stop_rising() {
        // The goal is enclosed; cutoffs rise while the open area is being
        // explored and the search ends when nothing more gets rejected.
        let board = Board::from_rows(&[
            [1, 2, 2, 2],
            [2, 2, 0, 0],
            [2, 2, 0, 3],
        ])
        .unwrap();
        assert_eq!(ida_star(&board, p(0, 0)), None);
    }
}

//! Single-agent search on three-musketeers boards.
//!
//! Every agent (musketeer) on a [`Board`](musket_core::Board) searches for a
//! path to the goal cell; among the agents that get there, the one with the
//! shortest path wins. Three interchangeable strategies are provided:
//!
//! - **Greedy best-first** on the Manhattan distance ([`best_first()`])
//! - **Depth-first** on a stack frontier ([`depth_first()`])
//! - **IDA\*** with escalating `g + h` cutoffs ([`ida_star()`])
//!
//! [`Solver`] runs the chosen [`Strategy`] for every agent and returns a
//! [`SearchResult`]: the winner's visitation order, one frontier snapshot
//! per step and the path, ready for step-by-step replay.
//!
//! # Movement
//!
//! Successors are generated by the cursor walk in [`CURSOR_STEPS`], which
//! visits left, down, right and up. Only open and goal cells may be
//! entered. A position is generated at most once per search: anything
//! already queued or visited is skipped.

mod best_first;
mod depth_first;
mod distance;
mod expand;
mod explored;
mod frontier;
mod ida_star;
mod neighbors;
mod node;
mod outcome;
mod search;
mod solver;
mod strategy;
mod traits;

pub use best_first::best_first;
pub use depth_first::depth_first;
pub use distance::manhattan;
pub use expand::admissible_successors;
pub use explored::ExploredSet;
pub use frontier::{PriorityFrontier, StackFrontier};
pub use ida_star::ida_star;
pub use neighbors::{CURSOR_STEPS, candidates, moves};
pub use node::{NodeArena, NodeId, SearchNode};
pub use outcome::{AgentOutcome, SearchResult};
pub use solver::{Solver, SolverConfig, select_shortest, solve};
pub use strategy::{ParseStrategyError, Strategy};
pub use traits::{Entry, Frontier};

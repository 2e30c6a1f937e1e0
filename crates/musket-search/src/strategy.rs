use std::fmt;
use std::str::FromStr;

use musket_core::{Board, Point};

use crate::outcome::AgentOutcome;
use crate::{best_first, depth_first, ida_star};

/// The search algorithm run for every agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Greedy best-first on the Manhattan distance to the goal.
    #[default]
    BestFirst,
    /// Stack-ordered depth-first search.
    DepthFirst,
    /// Iterative deepening on `g + h` with escalating cutoffs.
    IdaStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Self::BestFirst, Self::DepthFirst, Self::IdaStar];

    /// Run this strategy from `start`. Returns `None` if the goal cannot be
    /// reached.
    pub fn search(self, board: &Board, start: Point) -> Option<AgentOutcome> {
        match self {
            Self::BestFirst => best_first::best_first(board, start),
            Self::DepthFirst => depth_first::depth_first(board, start),
            Self::IdaStar => ida_star::ida_star(board, start),
        }
    }

    /// Canonical command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BestFirst => "best-first",
            Self::DepthFirst => "depth-first",
            Self::IdaStar => "ida-star",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "best-first" | "bestfirst" | "greedy" | "bfs" => Ok(Self::BestFirst),
            "depth-first" | "depthfirst" | "dfs" => Ok(Self::DepthFirst),
            "ida-star" | "idastar" | "ida*" | "ida" => Ok(Self::IdaStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// An unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy \u{201c}{}\u{201d} (expected best-first, depth-first or ida-star)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

//! Per-agent runner and result selection.

use log::{debug, info};
use musket_core::Board;

use crate::outcome::{AgentOutcome, SearchResult};
use crate::strategy::Strategy;

/// Solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    pub strategy: Strategy,
}

/// Runs one strategy for every agent on a board and keeps the agent with
/// the shortest path.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(SolverConfig { strategy })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search from every agent, in row-major order. Entry `i` belongs to
    /// `board.agents()[i]` and is `None` if that agent cannot reach the goal.
    pub fn search_agents(&self, board: &Board) -> Vec<Option<AgentOutcome>> {
        let strategy = self.config.strategy;
        board
            .agents()
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                debug!("{strategy}: agent {i} at {start}");
                strategy.search(board, start)
            })
            .collect()
    }

    /// The winning agent's outcome, or `None` if no agent reaches the goal.
    pub fn best(&self, board: &Board) -> Option<AgentOutcome> {
        let winner = select_shortest(self.search_agents(board).into_iter().flatten());
        match &winner {
            Some(o) => info!(
                "{}: agent at {} wins with {} steps",
                self.config.strategy,
                o.agent,
                o.steps()
            ),
            None => info!("{}: no agent reaches the goal", self.config.strategy),
        }
        winner
    }

    /// The three output sequences for the winning agent; all empty if no
    /// agent reaches the goal.
    pub fn solve(&self, board: &Board) -> SearchResult {
        self.best(board).map(SearchResult::from).unwrap_or_default()
    }
}

/// Pick the outcome with the fewest path positions. Among equal lengths the
/// earliest one wins.
pub fn select_shortest<I>(outcomes: I) -> Option<AgentOutcome>
where
    I: IntoIterator<Item = AgentOutcome>,
{
    let mut best: Option<AgentOutcome> = None;
    for o in outcomes {
        if best.as_ref().is_none_or(|b| o.path.len() < b.path.len()) {
            best = Some(o);
        }
    }
    best
}

/// Run `strategy` on `board` and return the winning agent's sequences.
pub fn solve(board: &Board, strategy: Strategy) -> SearchResult {
    Solver::with_strategy(strategy).solve(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::moves;
    use musket_core::{Cell, Point};
    use rand::{Rng, RngExt};

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    fn outcome(agent: Point, len: usize) -> AgentOutcome {
        AgentOutcome {
            agent,
            explored: Vec::new(),
            snapshots: Vec::new(),
            path: vec![agent; len],
            cutoffs: Vec::new(),
        }
    }

    fn assert_path_law(board: &Board, agent: Point, path: &[Point]) {
        assert_eq!(path.first(), Some(&agent));
        assert_eq!(path.last(), Some(&board.goal()));
        let steps = moves();
        for w in path.windows(2) {
            assert!(steps.contains(&(w[1] - w[0])), "bad step {} -> {}", w[0], w[1]);
            assert!(board.is_traversable(w[1]));
        }
    }

    fn random_board(rng: &mut impl Rng, rows: i32, cols: i32) -> Board {
        let mut grid = vec![vec![Cell::Open.code(); cols as usize]; rows as usize];
        for row in grid.iter_mut() {
            for cell in row.iter_mut() {
                let r: f64 = rng.random();
                if r < 0.25 {
                    *cell = Cell::Blocked.code();
                } else if r < 0.32 {
                    *cell = Cell::Agent.code();
                }
            }
        }
        let goal_r = rng.random_range(0..rows) as usize;
        let goal_c = rng.random_range(0..cols) as usize;
        grid[goal_r][goal_c] = Cell::Goal.code();
        Board::from_rows(&grid).unwrap()
    }

    #[test]
    fn selector_prefers_shorter_then_earlier() {
        let a = outcome(p(0, 0), 5);
        let b = outcome(p(0, 4), 3);
        let c = outcome(p(3, 0), 3);
        let best = select_shortest([a, b.clone(), c]).unwrap();
        assert_eq!(best, b);
        assert_eq!(select_shortest(Vec::new()), None);
    }

    #[test]
    fn scenario_board_every_strategy() {
        let board = Board::parse("1 2 2\n2 0 2\n2 2 3").unwrap();
        for strategy in Strategy::ALL {
            let result = solve(&board, strategy);
            assert_eq!(result.shortest_path.len(), 5, "{strategy}");
            assert_path_law(&board, p(0, 0), &result.shortest_path);
            assert!(result.explored_nodes.len() <= 9);
            assert_eq!(result.search_queue.len(), result.explored_nodes.len());
        }
    }

    #[test]
    fn no_agents_means_empty_result() {
        let board = Board::parse("2 2 2\n2 2 3").unwrap();
        for strategy in Strategy::ALL {
            let result = solve(&board, strategy);
            assert!(result.is_empty());
            assert_eq!(result, SearchResult::default());
        }
    }

    #[test]
    fn walled_in_agent_contributes_nothing() {
        let board = Board::parse("2 0 2\n0 1 0\n2 0 3").unwrap();
        for strategy in Strategy::ALL {
            let solver = Solver::with_strategy(strategy);
            assert_eq!(solver.search_agents(&board), vec![None]);
            assert_eq!(solver.solve(&board), SearchResult::default());
        }
    }

    #[test]
    fn equal_paths_pick_first_agent() {
        let board = Board::parse("1 3 1").unwrap();
        for strategy in Strategy::ALL {
            let best = Solver::with_strategy(strategy).best(&board).unwrap();
            assert_eq!(best.agent, p(0, 0), "{strategy}");
        }
    }

    #[test]
    fn shorter_later_agent_wins() {
        let board = Board::parse("1 2 2 3 1").unwrap();
        for strategy in Strategy::ALL {
            let best = Solver::with_strategy(strategy).best(&board).unwrap();
            assert_eq!(best.agent, p(0, 4), "{strategy}");
            assert_eq!(best.steps(), 1);
        }
    }

    #[test]
    fn unreachable_agents_are_skipped() {
        // The first agent is sealed off; the second one wins.
        let board = Board::parse("1 0 2\n0 2 2\n2 1 3").unwrap();
        let solver = Solver::with_strategy(Strategy::BestFirst);
        let per_agent = solver.search_agents(&board);
        assert_eq!(per_agent.len(), 2);
        assert!(per_agent[0].is_none());
        let result = solver.solve(&board);
        assert_eq!(result.shortest_path, vec![p(2, 1), p(2, 2)]);
    }

    #[test]
    fn open_board_paths_are_optimal() {
        let board = Board::parse(
            "1 2 2 2 2\n\
             2 2 2 2 2\n\
             2 2 2 2 2\n\
             2 2 2 2 3",
        )
        .unwrap();
        for strategy in [Strategy::BestFirst, Strategy::IdaStar] {
            let best = Solver::with_strategy(strategy).best(&board).unwrap();
            assert_eq!(best.steps(), 7, "{strategy}");
        }
        let dfs = Solver::with_strategy(Strategy::DepthFirst).best(&board).unwrap();
        assert_path_law(&board, p(0, 0), &dfs.path);
    }

    #[test]
    fn random_boards_obey_path_law_and_repeat_exactly() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let rows = rng.random_range(1..8);
            let cols = rng.random_range(1..8);
            let board = random_board(&mut rng, rows, cols);
            for strategy in Strategy::ALL {
                let solver = Solver::with_strategy(strategy);
                let first = solver.best(&board);
                let again = solver.best(&board);
                assert_eq!(first, again, "{strategy} on\n{board}");

                let Some(win) = first else { continue };
                assert!(board.agents().contains(&win.agent));
                assert_path_law(&board, win.agent, &win.path);
                assert_eq!(win.explored.first(), Some(&win.agent));
                assert_eq!(win.explored.last(), Some(&board.goal()));
                assert_eq!(win.snapshots.len(), win.explored.len());
                assert!(win.explored.len() <= board.bounds().len());
                assert!(win.cutoffs.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn strategies_agree_on_reachability() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let board = random_board(&mut rng, 6, 6);
            let solvable: Vec<bool> = Strategy::ALL
                .iter()
                .map(|&s| Solver::with_strategy(s).best(&board).is_some())
                .collect();
            assert!(
                solvable.iter().all(|&x| x == solvable[0]),
                "disagreement on\n{board}"
            );
        }
    }
}

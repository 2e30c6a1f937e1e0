//! The validated, read-only game board.
//!
//! A [`Board`] is built either from an in-memory grid of integer codes
//! ([`Board::from_rows`]) or from board-file text ([`Board::parse`]). Both
//! paths reject ragged rows, unknown codes and a missing or duplicated goal,
//! so the search engine can index the board without further checks.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// An immutable rectangular grid of [`Cell`]s with exactly one goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    bounds: Range,
    goal: Point,
    agents: Vec<Point>,
}

impl Board {
    /// Build a board from rows of integer cell codes.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let Some(first) = rows.first() else {
            return Err(BoardError::Empty);
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(BoardError::Ragged {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &code) in row.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or(BoardError::InvalidCode {
                    pos: Point::new(r as i32, c as i32),
                    code,
                })?;
                cells.push(cell);
            }
        }

        let bounds = Range::with_size(rows.len() as i32, width as i32);
        let mut goal: Option<Point> = None;
        let mut agents = Vec::new();
        for (p, &cell) in bounds.iter().zip(cells.iter()) {
            match cell {
                Cell::Goal => {
                    if let Some(first) = goal {
                        return Err(BoardError::MultipleGoals { first, second: p });
                    }
                    goal = Some(p);
                }
                Cell::Agent => agents.push(p),
                Cell::Blocked | Cell::Open => {}
            }
        }
        let goal = goal.ok_or(BoardError::MissingGoal)?;

        Ok(Self {
            cells,
            bounds,
            goal,
            agents,
        })
    }

    /// Parse board-file text: one row per non-blank line, cells as
    /// whitespace-separated integer codes.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let mut rows: Vec<Vec<i32>> = Vec::new();
        for (i, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<i32>().map_err(|_| BoardError::NotANumber {
                        line: i + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// The board's extent, anchored at (0, 0).
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.bounds.height() as usize
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.bounds.width() as usize
    }

    /// The cell at `p`, or `None` if `p` lies off the board.
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[p.row as usize * self.cols() + p.col as usize])
    }

    /// Whether a search may step onto `p`.
    pub fn is_traversable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_traversable)
    }

    /// Position of the single goal cell.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Agent start positions in row-major order.
    pub fn agents(&self) -> &[Point] {
        &self.agents
    }

    /// The board as rows of integer codes.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.cols())
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols()).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.code())?;
            }
        }
        Ok(())
    }
}

/// Reasons a grid is rejected as a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No rows, or a zero-width first row.
    Empty,
    /// A row whose length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An integer that is not a known cell code.
    InvalidCode { pos: Point, code: i32 },
    /// A token in board text that is not an integer.
    NotANumber { line: usize, token: String },
    /// No goal cell on the board.
    MissingGoal,
    /// More than one goal cell on the board.
    MultipleGoals { first: Point, second: Point },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "board: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidCode { pos, code } => {
                write!(f, "board: invalid cell code {code} at {pos}")
            }
            Self::NotANumber { line, token } => {
                write!(f, "board: line {line}: \u{201c}{token}\u{201d} is not a cell code")
            }
            Self::MissingGoal => write!(f, "board: no goal cell"),
            Self::MultipleGoals { first, second } => {
                write!(f, "board: goal cells at both {first} and {second}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

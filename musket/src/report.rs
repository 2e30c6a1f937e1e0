//! Plain-text rendering of search results.

use std::collections::HashSet;
use std::fmt::Write;

use musket_core::{Board, Cell, Point};
use musket_search::{AgentOutcome, Strategy};

/// Board glyphs: soldier, musketeer, free square, diamond, path step.
const GLYPHS: [char; 4] = ['#', 'M', '.', 'D'];
const PATH_GLYPH: char = '*';

/// Draw `board` with the cells of `path` between its endpoints marked.
pub fn draw_path(board: &Board, path: &[Point]) -> String {
    let inner: HashSet<Point> = match path {
        [_, mid @ .., _] => mid.iter().copied().collect(),
        _ => HashSet::new(),
    };
    let mut out = String::with_capacity(board.rows() * (board.cols() + 1));
    for p in board.bounds().iter() {
        if p.col == 0 && p.row > 0 {
            out.push('\n');
        }
        let cell = board.at(p).unwrap_or(Cell::Blocked);
        let glyph = if inner.contains(&p) {
            PATH_GLYPH
        } else {
            GLYPHS[cell.code() as usize]
        };
        out.push(glyph);
    }
    out
}

/// Human-readable summary of a run.
pub fn summary(board: &Board, strategy: Strategy, winner: Option<&AgentOutcome>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "strategy: {strategy}");
    let _ = writeln!(out, "musketeers: {}", board.agents().len());
    let Some(win) = winner else {
        out.push_str("no musketeer can reach the diamond\n");
        return out;
    };
    let _ = writeln!(out, "winner: musketeer at {}", win.agent);
    let _ = writeln!(out, "explored nodes: {}", win.explored.len());
    let _ = writeln!(out, "frontier snapshots: {}", win.snapshots.len());
    if !win.cutoffs.is_empty() {
        let cutoffs: Vec<String> = win.cutoffs.iter().map(i32::to_string).collect();
        let _ = writeln!(out, "cutoffs: {}", cutoffs.join(", "));
    }
    let _ = writeln!(out, "#steps to diamond: {}", win.steps());
    let steps: Vec<String> = win.path.iter().map(Point::to_string).collect();
    let _ = writeln!(out, "path: {}", steps.join(" -> "));
    out.push_str(&draw_path(board, &win.path));
    out.push('\n');
    out
}

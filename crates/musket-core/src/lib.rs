//! **musket-core**: board and geometry types for three-musketeers pathfinding.
//!
//! This crate provides the input side of the search engine: row/column
//! geometry primitives, the cell code table, and a validated, immutable
//! [`Board`] that rejects malformed grids before any search runs.

pub mod board;
pub mod cell;
pub mod geom;

pub use board::{Board, BoardError};
pub use cell::Cell;
pub use geom::{Point, Range};

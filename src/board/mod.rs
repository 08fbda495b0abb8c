//! Board state model
//!
//! Owns the grid, the write cursor and the win status, and mediates every
//! mutation caused by input events.

mod cell;
mod grid;

pub use cell::{Cell, CellView};
pub use grid::{Board, BoardError, CommitOutcome, GameStatus, MAX_CELLS};

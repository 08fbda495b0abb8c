//! Interactive terminal interface
//!
//! crossterm supplies the key events, ratatui draws the board.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};

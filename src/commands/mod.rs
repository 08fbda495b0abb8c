//! Command implementations

pub mod simple;

pub use simple::{LineResult, play_lines, run_simple, submit_line};

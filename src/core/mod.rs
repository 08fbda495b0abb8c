//! Core domain types for the puzzle
//!
//! Words and per-letter feedback. Everything here is pure and has no
//! knowledge of the board, input or rendering.

mod feedback;
mod word;

pub use feedback::{Feedback, evaluate, feedback_to_emoji};
pub use word::{Word, WordError};

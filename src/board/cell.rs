//! Board cells and their read-only views

use crate::core::Feedback;

/// One square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub feedback: Feedback,
}

impl Cell {
    /// True once the cell's row has been committed
    #[inline]
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.feedback.is_committed()
    }
}

/// What a display needs to draw one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub letter: Option<char>,
    pub feedback: Feedback,
    pub is_cursor: bool,
}

//! Board state: the grid of cells, the write cursor and the game status
//!
//! Cells are stored row-major in a flat vector. The cursor always points at a
//! valid cell: it is clamped to `[0, rows * cols - 1]` after every mutation.
//!
//! The cursor pauses on the last cell of a row (the "row end") until the row
//! is committed or a letter is deleted. Typing while paused replaces the
//! parked letter.

use super::{Cell, CellView};
use crate::core::{Feedback, Word, evaluate};
use crate::wordlists::Dictionary;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Overall progress of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
}

/// Result of a commit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Preconditions failed (row incomplete, not at a row end, game over)
    Ignored,
    /// The row spells a word the dictionary does not know
    NotInDictionary(Word),
    /// The row was evaluated and locked
    Accepted {
        guess: Word,
        feedback: Vec<Feedback>,
        won: bool,
    },
}

impl CommitOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Error type for invalid board dimensions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board needs at least one row")]
    NoRows,
    #[error("board needs at least two columns, got {0}")]
    TooNarrow(usize),
    #[error("a {rows}x{cols} board exceeds {max} cells", max = MAX_CELLS)]
    TooLarge { rows: usize, cols: usize },
}

/// Upper bound on `rows * cols`
pub const MAX_CELLS: usize = 4096;

/// The puzzle grid
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    cursor: usize,
    status: GameStatus,
}

impl Board {
    /// Create an empty board
    ///
    /// # Errors
    /// Returns `BoardError` if `rows` is zero, `cols` is below two, or the
    /// grid would hold more than [`MAX_CELLS`] cells.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::board::Board;
    ///
    /// let board = Board::new(6, 5).unwrap();
    /// assert_eq!(board.cells().len(), 30);
    /// assert_eq!(board.cursor(), 0);
    ///
    /// assert!(Board::new(6, 1).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 {
            return Err(BoardError::NoRows);
        }
        if cols < 2 {
            return Err(BoardError::TooNarrow(cols));
        }
        let size = rows
            .checked_mul(cols)
            .filter(|&size| size <= MAX_CELLS)
            .ok_or(BoardError::TooLarge { rows, cols })?;

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); size],
            cursor: 0,
            status: GameStatus::InProgress,
        })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Cells of one row, empty if `row` is out of range
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        row.checked_mul(self.cols)
            .and_then(|start| Some(start..start.checked_add(self.cols)?))
            .and_then(|range| self.cells.get(range))
            .unwrap_or(&[])
    }

    /// Row the cursor is on
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.cursor / self.cols
    }

    /// Cursor sits on the last cell of its row
    ///
    /// Cursor 0 is never a row end; boards are at least two columns wide.
    #[must_use]
    pub const fn is_row_end(&self) -> bool {
        self.cursor > 0 && self.cursor % self.cols == self.cols - 1
    }

    /// Number of rows that have received feedback
    #[must_use]
    pub fn committed_rows(&self) -> usize {
        self.cells
            .chunks(self.cols)
            .take_while(|row| row.iter().all(Cell::is_committed))
            .count()
    }

    /// Every row has been committed
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.committed_rows() == self.rows
    }

    /// Per-cell display data, row-major
    pub fn views(&self) -> impl Iterator<Item = CellView> + '_ {
        self.cells.iter().enumerate().map(|(i, cell)| CellView {
            letter: cell.letter,
            feedback: cell.feedback,
            is_cursor: i == self.cursor
                && !cell.is_committed()
                && self.status == GameStatus::InProgress,
        })
    }

    /// Write a letter at the cursor
    ///
    /// Accepts ASCII letters in either case and stores them lowercased. The
    /// cursor advances unless it is paused at a row end. Returns `false`, with
    /// no state change, for any other character or when the game is over.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::board::Board;
    ///
    /// let mut board = Board::new(6, 5).unwrap();
    /// for ch in "TESLA".chars() {
    ///     assert!(board.handle_character_input(ch));
    /// }
    /// // Paused on the row end rather than moving into the next row
    /// assert_eq!(board.cursor(), 4);
    /// assert!(board.is_row_end());
    /// assert!(!board.handle_character_input('7'));
    /// ```
    pub fn handle_character_input(&mut self, ch: char) -> bool {
        if self.status != GameStatus::InProgress || !ch.is_ascii_alphabetic() {
            return false;
        }

        let at_row_end = self.is_row_end();
        let Some(cell) = self.cells.get_mut(self.cursor) else {
            return false;
        };
        if cell.is_committed() {
            return false;
        }

        let letter = ch.to_ascii_lowercase();
        cell.letter = Some(letter);
        if !at_row_end {
            self.cursor += 1;
        }
        self.clamp_cursor();

        trace!(%letter, cursor = self.cursor, "letter placed");
        true
    }

    /// Submit the row under the cursor as a guess
    ///
    /// Only valid when the cursor is paused at a row end of an uncommitted,
    /// fully typed row. Words missing from `dictionary` leave the board as it
    /// was so the row can be edited.
    pub fn handle_commit(&mut self, dictionary: &Dictionary, answer: &Word) -> CommitOutcome {
        if self.status != GameStatus::InProgress || !self.is_row_end() {
            return CommitOutcome::Ignored;
        }

        let row = self.current_row();
        let Some(guess) = self.pending_word(row) else {
            return CommitOutcome::Ignored;
        };

        if !dictionary.contains(guess.text()) {
            debug!(guess = %guess, "rejected guess not in dictionary");
            return CommitOutcome::NotInDictionary(guess);
        }

        let feedback = evaluate(&guess, answer);
        let start = row * self.cols;
        for (cell, &result) in self.cells[start..start + self.cols]
            .iter_mut()
            .zip(&feedback)
        {
            cell.feedback = result;
        }

        let won = guess == *answer;
        if won {
            self.status = GameStatus::Won;
        }

        self.cursor = start + self.cols;
        self.clamp_cursor();

        info!(row, guess = %guess, won, "guess committed");
        CommitOutcome::Accepted {
            guess,
            feedback,
            won,
        }
    }

    /// Step the cursor back one cell, clearing the letter there
    ///
    /// A letter parked on the row end is cleared along with it, so the cursor
    /// always lands on the first empty cell of the row. Letters of committed
    /// rows can never be deleted.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::board::Board;
    ///
    /// let mut board = Board::new(6, 5).unwrap();
    /// for ch in "curie".chars() {
    ///     board.handle_character_input(ch);
    /// }
    /// assert!(board.handle_delete());
    /// assert_eq!(board.cursor(), 3);
    /// ```
    pub fn handle_delete(&mut self) -> bool {
        let Some(before) = self.cursor.checked_sub(1) else {
            return false;
        };
        if self.cells[before].is_committed() {
            return false;
        }

        if self.is_row_end()
            && let Some(parked) = self.cells.get_mut(self.cursor)
            && !parked.is_committed()
        {
            parked.letter = None;
        }

        self.cells[before].letter = None;
        self.cursor = before;
        self.clamp_cursor();

        trace!(cursor = self.cursor, "letter deleted");
        true
    }

    /// Letters of an uncommitted row, if every cell holds one
    fn pending_word(&self, row: usize) -> Option<Word> {
        let cells = self.row(row);
        if cells.is_empty() || cells.iter().any(Cell::is_committed) {
            return None;
        }

        let text: Option<String> = cells.iter().map(|cell| cell.letter).collect();
        Word::new(text?).ok()
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.cells.len() - 1);
    }
}

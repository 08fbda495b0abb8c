//! Game session
//!
//! A [`Game`] owns one board, the dictionary and the answer for a single
//! session. Front ends feed it one [`TickInput`] per tick and read back cell
//! views and the overall display state.

use crate::board::{Board, BoardError, CellView, CommitOutcome, GameStatus};
use crate::core::Word;
use crate::input::TickInput;
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

/// Session setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Seed for answer selection; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 5,
            seed: None,
        }
    }
}

/// Errors raised while starting a session
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("dictionary words have {dictionary} letters but the board has {board} columns")]
    LengthMismatch { dictionary: usize, board: usize },
}

/// What the display should show around the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Playing,
    Won,
    /// All rows used without a win; the answer is shown
    Revealed(Word),
}

/// What a tick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Typed(bool),
    Committed(CommitOutcome),
    Deleted(bool),
}

/// One puzzle session
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    dictionary: Dictionary,
    answer: Word,
}

impl Game {
    /// Start a session with an answer drawn from `dictionary`
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the board dimensions are invalid or the
    /// dictionary's word length does not match `config.cols`.
    pub fn new(config: GameConfig, dictionary: Dictionary) -> Result<Self, GameError> {
        let answer = match config.seed {
            Some(seed) => dictionary.choose_answer(&mut StdRng::seed_from_u64(seed)),
            None => dictionary.choose_answer(&mut rand::rng()),
        }
        .clone();

        let board = Board::new(config.rows, config.cols)?;
        Self::with_answer(board, dictionary, answer)
    }

    /// Start a session with a fixed answer
    ///
    /// # Errors
    ///
    /// Returns `GameError::LengthMismatch` if the dictionary or the answer
    /// disagree with the board width.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::board::Board;
    /// use wordle_board::core::Word;
    /// use wordle_board::game::{DisplayState, Game};
    /// use wordle_board::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::builtin(5).unwrap();
    /// let answer = Word::new("tesla").unwrap();
    /// let mut game = Game::with_answer(Board::new(6, 5).unwrap(), dictionary, answer).unwrap();
    ///
    /// for ch in "tesla".chars() {
    ///     game.type_char(ch);
    /// }
    /// game.commit();
    /// assert_eq!(game.display_state(), DisplayState::Won);
    /// ```
    pub fn with_answer(
        board: Board,
        dictionary: Dictionary,
        answer: Word,
    ) -> Result<Self, GameError> {
        if dictionary.word_len() != board.cols() {
            return Err(GameError::LengthMismatch {
                dictionary: dictionary.word_len(),
                board: board.cols(),
            });
        }
        if answer.len() != board.cols() {
            return Err(GameError::LengthMismatch {
                dictionary: answer.len(),
                board: board.cols(),
            });
        }

        debug!(answer = %answer, "session started");
        Ok(Self {
            board,
            dictionary,
            answer,
        })
    }

    /// Apply one tick of input
    ///
    /// At most one event class is handled: typed characters, otherwise the
    /// commit key, otherwise the delete key. More than one character in a
    /// single tick is treated as a paste and ignored.
    pub fn tick(&mut self, input: &TickInput) -> TickOutcome {
        if !input.chars.is_empty() {
            let typed = match input.chars.as_slice() {
                [ch] => self.type_char(*ch),
                _ => false,
            };
            TickOutcome::Typed(typed)
        } else if input.commit {
            TickOutcome::Committed(self.commit())
        } else if input.delete {
            TickOutcome::Deleted(self.delete())
        } else {
            TickOutcome::Idle
        }
    }

    pub fn type_char(&mut self, ch: char) -> bool {
        self.board.handle_character_input(ch)
    }

    pub fn commit(&mut self) -> CommitOutcome {
        let outcome = self.board.handle_commit(&self.dictionary, &self.answer);
        if outcome.is_accepted() {
            match self.display_state() {
                DisplayState::Won => info!(guesses = self.board.committed_rows(), "puzzle solved"),
                DisplayState::Revealed(_) => info!(answer = %self.answer, "out of guesses"),
                DisplayState::Playing => {}
            }
        }
        outcome
    }

    pub fn delete(&mut self) -> bool {
        self.board.handle_delete()
    }

    /// Per-cell display data, row-major
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.board.views()
    }

    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        match self.board.status() {
            GameStatus::Won => DisplayState::Won,
            GameStatus::InProgress if self.board.is_exhausted() => {
                DisplayState::Revealed(self.answer.clone())
            }
            GameStatus::InProgress => DisplayState::Playing,
        }
    }

    /// Session has ended, won or lost
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.display_state() != DisplayState::Playing
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.board.status()
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::wordlists::FALLBACK;

    fn game(answer: &str) -> Game {
        let words = ["tesla", "curie", "gauss", "hooke", "fermi", "boyle"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let dictionary = Dictionary::new(words).unwrap();
        Game::with_answer(
            Board::new(6, 5).unwrap(),
            dictionary,
            Word::new(answer).unwrap(),
        )
        .unwrap()
    }

    fn play(game: &mut Game, word: &str) -> CommitOutcome {
        for ch in word.chars() {
            game.tick(&TickInput::typed(ch));
        }
        match game.tick(&TickInput::commit()) {
            TickOutcome::Committed(outcome) => outcome,
            other => panic!("unexpected tick outcome {other:?}"),
        }
    }

    #[test]
    fn seeded_games_share_answer() {
        let config = GameConfig {
            seed: Some(99),
            ..GameConfig::default()
        };
        let a = Game::new(config, Dictionary::builtin(5).unwrap()).unwrap();
        let b = Game::new(config, Dictionary::builtin(5).unwrap()).unwrap();

        assert_eq!(a.answer(), b.answer());
        assert!(FALLBACK.contains(&a.answer().text()));
    }

    #[test]
    fn new_rejects_mismatched_width() {
        let config = GameConfig {
            cols: 6,
            ..GameConfig::default()
        };
        assert!(matches!(
            Game::new(config, Dictionary::builtin(5).unwrap()),
            Err(GameError::LengthMismatch {
                dictionary: 5,
                board: 6
            })
        ));
    }

    #[test]
    fn new_rejects_bad_board() {
        let config = GameConfig {
            rows: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            Game::new(config, Dictionary::builtin(5).unwrap()),
            Err(GameError::Board(BoardError::NoRows))
        ));
    }

    #[test]
    fn new_rejects_oversized_board() {
        let config = GameConfig {
            rows: usize::MAX,
            ..GameConfig::default()
        };
        assert!(matches!(
            Game::new(config, Dictionary::builtin(5).unwrap()),
            Err(GameError::Board(BoardError::TooLarge { .. }))
        ));
    }

    #[test]
    fn winning_row_is_all_correct() {
        let mut game = game("fermi");
        assert!(matches!(
            play(&mut game, "fermi"),
            CommitOutcome::Accepted { won: true, .. }
        ));

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.display_state(), DisplayState::Won);
        assert!(game.is_over());
        assert!(
            game.cells()
                .take(5)
                .all(|cell| cell.feedback == Feedback::Correct)
        );
    }

    #[test]
    fn losing_reveals_answer() {
        let mut game = game("fermi");
        for word in ["tesla", "curie", "gauss", "hooke", "boyle", "tesla"] {
            assert!(play(&mut game, word).is_accepted());
        }

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(
            game.display_state(),
            DisplayState::Revealed(Word::new("fermi").unwrap())
        );
        assert!(game.is_over());
        assert_eq!(game.tick(&TickInput::typed('a')), TickOutcome::Typed(false));
    }

    #[test]
    fn paste_is_ignored() {
        let mut game = game("fermi");
        let paste = TickInput {
            chars: vec!['t', 'e'],
            ..TickInput::default()
        };

        assert_eq!(game.tick(&paste), TickOutcome::Typed(false));
        assert_eq!(game.board().cursor(), 0);
        assert!(game.cells().all(|cell| cell.letter.is_none()));
    }

    #[test]
    fn characters_take_priority_over_keys() {
        let mut game = game("fermi");
        for ch in "tesl".chars() {
            game.type_char(ch);
        }

        let input = TickInput {
            chars: vec!['a'],
            commit: true,
            delete: true,
        };
        assert_eq!(game.tick(&input), TickOutcome::Typed(true));
        assert_eq!(game.board().committed_rows(), 0);

        let input = TickInput {
            commit: true,
            delete: true,
            ..TickInput::default()
        };
        assert!(matches!(
            game.tick(&input),
            TickOutcome::Committed(CommitOutcome::Accepted { .. })
        ));
        assert_eq!(game.board().committed_rows(), 1);
    }

    #[test]
    fn empty_tick_is_idle() {
        let mut game = game("fermi");
        assert_eq!(game.tick(&TickInput::default()), TickOutcome::Idle);
    }

    #[test]
    fn delete_tick_after_commit_is_noop() {
        let mut game = game("fermi");
        assert!(play(&mut game, "gauss").is_accepted());
        let before: Vec<CellView> = game.cells().collect();

        assert_eq!(game.tick(&TickInput::delete()), TickOutcome::Deleted(false));
        assert_eq!(game.cells().collect::<Vec<_>>(), before);
    }

    #[test]
    fn commit_twice_is_noop() {
        let mut game = game("fermi");
        assert!(play(&mut game, "curie").is_accepted());
        assert_eq!(
            game.tick(&TickInput::commit()),
            TickOutcome::Committed(CommitOutcome::Ignored)
        );
        assert_eq!(game.board().committed_rows(), 1);
    }
}

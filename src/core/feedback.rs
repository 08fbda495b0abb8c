//! Per-letter feedback and the guess evaluator
//!
//! Feedback for a committed guess is one [`Feedback`] per letter:
//! - `Correct` = right letter, right position
//! - `Present` = letter in the answer, wrong position, within the duplicate budget
//! - `Absent`  = letter unusable here
//!
//! `Unset` marks a cell that belongs to a row which has not been committed yet.

use super::Word;

/// Classification of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    #[default]
    Unset,
    Correct,
    Present,
    Absent,
}

impl Feedback {
    /// True once the cell belongs to a committed row
    #[inline]
    #[must_use]
    pub const fn is_committed(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Emoji tile for share-style output
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unset => '⬜',
        }
    }
}

/// Evaluate `guess` against `answer`
///
/// Two passes over the letters:
/// 1. Exact position matches become `Correct` and consume that answer position
/// 2. Remaining guess letters, left to right, take the first unconsumed answer
///    position with the same letter and become `Present`
///
/// Everything else is `Absent`. Both words are expected to have the same
/// length; letters past the shorter word are `Absent`.
///
/// # Examples
/// ```
/// use wordle_board::core::{Feedback, Word, evaluate};
///
/// let guess = Word::new("sheep").unwrap();
/// let answer = Word::new("speed").unwrap();
///
/// // S(correct) H(absent) E(correct) E(correct) P(present)
/// assert_eq!(
///     evaluate(&guess, &answer),
///     vec![
///         Feedback::Correct,
///         Feedback::Absent,
///         Feedback::Correct,
///         Feedback::Correct,
///         Feedback::Present,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word) -> Vec<Feedback> {
    debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

    let guess = guess.chars();
    let answer = answer.chars();
    let mut result = vec![Feedback::Absent; guess.len()];
    let mut consumed = vec![false; answer.len()];

    // First pass: exact position matches
    for (i, (g, a)) in guess.iter().zip(answer).enumerate() {
        if g == a {
            result[i] = Feedback::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: first unconsumed occurrence elsewhere in the answer
    for (i, &letter) in guess.iter().enumerate() {
        if result[i] == Feedback::Correct {
            continue;
        }
        let available = answer
            .iter()
            .zip(&consumed)
            .position(|(&a, &used)| !used && a == letter);
        if let Some(j) = available {
            result[i] = Feedback::Present;
            consumed[j] = true;
        }
    }

    result
}

/// Render a row of feedback as emoji tiles
///
/// # Examples
/// ```
/// use wordle_board::core::{Feedback, feedback_to_emoji};
///
/// let row = [Feedback::Correct, Feedback::Present, Feedback::Absent];
/// assert_eq!(feedback_to_emoji(&row), "🟩🟨⬛");
/// ```
#[must_use]
pub fn feedback_to_emoji(row: &[Feedback]) -> String {
    row.iter().map(|f| f.to_emoji()).collect()
}

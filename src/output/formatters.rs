//! Formatting utilities for terminal output

use crate::board::Board;
use crate::core::{Feedback, feedback_to_emoji};
use colored::{ColoredString, Colorize};

/// Format one cell as a colored tile like ` A `
#[must_use]
pub fn tile(letter: Option<char>, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |c| c.to_ascii_uppercase()));
    match feedback {
        Feedback::Correct => text.white().bold().on_green(),
        Feedback::Present => text.black().bold().on_yellow(),
        Feedback::Absent => text.white().on_bright_black(),
        Feedback::Unset => text.normal(),
    }
}

/// Emoji grid of the committed rows, one line per guess
#[must_use]
pub fn share_grid(board: &Board) -> String {
    (0..board.committed_rows())
        .map(|row| {
            let feedback: Vec<Feedback> = board.row(row).iter().map(|c| c.feedback).collect();
            feedback_to_emoji(&feedback)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::Dictionary;

    #[test]
    fn share_grid_empty_board() {
        let board = Board::new(6, 5).unwrap();
        assert_eq!(share_grid(&board), "");
    }

    #[test]
    fn share_grid_lists_committed_rows() {
        let dictionary = Dictionary::builtin(5).unwrap();
        let answer = Word::new("hooke").unwrap();
        let mut board = Board::new(6, 5).unwrap();

        for word in ["boyle", "hooke"] {
            for ch in word.chars() {
                board.handle_character_input(ch);
            }
            board.handle_commit(&dictionary, &answer);
        }

        assert_eq!(share_grid(&board), "⬛🟩⬛⬛🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn tile_shows_uppercase_letter() {
        colored::control::set_override(false);
        assert_eq!(tile(Some('q'), Feedback::Correct).to_string(), " Q ");
        assert_eq!(tile(None, Feedback::Unset).to_string(), " _ ");
    }
}

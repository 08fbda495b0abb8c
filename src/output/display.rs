//! Display functions for the text-mode game

use super::formatters::{share_grid, tile};
use crate::core::Word;
use crate::game::{DisplayState, Game};
use colored::Colorize;

/// Print the whole board, one row per line
pub fn print_board(game: &Game) {
    let board = game.board();
    println!();
    for row in 0..board.rows() {
        let line: Vec<String> = board
            .row(row)
            .iter()
            .map(|cell| tile(cell.letter, cell.feedback).to_string())
            .collect();
        println!("  {}", line.join(" "));
    }
    println!();
}

/// Print the end-of-session banner
pub fn print_outcome(game: &Game) {
    match game.display_state() {
        DisplayState::Playing => return,
        DisplayState::Won => {
            println!("{}", "═".repeat(40).bright_cyan());
            println!("  {}", "Good Job!".bright_green().bold());
        }
        DisplayState::Revealed(answer) => {
            println!("{}", "═".repeat(40).bright_cyan());
            println!(
                "  The word was {}",
                answer.text().to_uppercase().bright_yellow().bold()
            );
        }
    }

    let board = game.board();
    let guesses = if game.display_state() == DisplayState::Won {
        board.committed_rows().to_string()
    } else {
        "X".to_string()
    };
    println!("\n  {guesses}/{}", board.rows());
    for line in share_grid(board).lines() {
        println!("  {line}");
    }
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Report a guess the dictionary rejected
pub fn print_rejected(word: &Word) {
    println!(
        "{}",
        format!("❌ {} is not in the word list", word.text().to_uppercase()).red()
    );
}

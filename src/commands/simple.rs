//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is typed into the board key by
//! key and then committed, so the text mode follows exactly the same rules as
//! the terminal UI.

use crate::board::CommitOutcome;
use crate::game::Game;
use crate::output::{print_board, print_outcome, print_rejected};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What happened to one submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    Accepted,
    Rejected,
    WrongLength(usize),
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_simple(game: &mut Game) -> io::Result<()> {
    let stdin = io::stdin();
    play_lines(game, stdin.lock())
}

/// Drive a game from any line source
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn play_lines<R: BufRead>(game: &mut Game, mut input: R) -> io::Result<()> {
    let board = game.board();
    println!("\n╔════════════════════════════════════════╗");
    println!("║                 WORDLE                 ║");
    println!("╚════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries. Type ':q' to quit.",
        board.cols(),
        board.rows()
    );

    while !game.is_over() {
        let turn = game.board().committed_rows() + 1;
        print!("Guess {turn}/{}: ", game.board().rows());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        match submit_line(game, &line) {
            LineResult::Quit => {
                println!("\n👋 The word was {}\n", game.answer().text().to_uppercase());
                return Ok(());
            }
            LineResult::WrongLength(cols) => {
                println!("Guesses must be {cols} letters");
            }
            LineResult::Rejected | LineResult::Accepted => print_board(game),
        }
    }

    print_outcome(game);
    Ok(())
}

/// Type one line into the game and commit it
///
/// A rejected word is erased again so the row is ready for the next attempt.
pub fn submit_line(game: &mut Game, line: &str) -> LineResult {
    let guess = line.trim();
    if matches!(guess, ":q" | "quit" | "exit") {
        return LineResult::Quit;
    }

    let cols = game.board().cols();
    if guess.chars().count() != cols || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        return LineResult::WrongLength(cols);
    }

    for ch in guess.chars() {
        game.type_char(ch);
    }

    match game.commit() {
        CommitOutcome::Accepted { .. } => LineResult::Accepted,
        outcome => {
            if let CommitOutcome::NotInDictionary(word) = &outcome {
                print_rejected(word);
            }
            debug!(?outcome, "clearing rejected row");
            while game.delete() {}
            LineResult::Rejected
        }
    }
}

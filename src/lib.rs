//! Wordle Board
//!
//! A Wordle-style word guessing game: a rules engine that turns keystrokes into
//! validated guesses and per-letter feedback, plus terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_board::game::{Game, GameConfig};
//! use wordle_board::input::TickInput;
//! use wordle_board::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::builtin(5).unwrap();
//! let config = GameConfig { seed: Some(1), ..GameConfig::default() };
//! let mut game = Game::new(config, dictionary).unwrap();
//!
//! for ch in "tesla".chars() {
//!     game.tick(&TickInput::typed(ch));
//! }
//! game.tick(&TickInput::commit());
//! assert_eq!(game.board().committed_rows(), 1);
//! ```

// Core domain types
pub mod core;

// Board state model
pub mod board;

// Game session
pub mod game;

// Input collaborator contract
pub mod input;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;

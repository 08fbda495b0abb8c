//! Wordle Board - CLI
//!
//! Word guessing game with a terminal UI and a plain text mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wordle_board::{
    commands::run_simple,
    game::{Game, GameConfig},
    interactive::run_tui,
    logging::init_tracing,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_board",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-separated word list; the built-in list is used if it is missing or invalid
    #[arg(short, long, global = true, default_value = "dict.txt")]
    dict: PathBuf,

    /// Number of guesses
    #[arg(long, global = true, default_value_t = 6)]
    rows: usize,

    /// Letters per word
    #[arg(long, global = true, default_value_t = 5)]
    cols: usize,

    /// Seed for picking the answer
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = GameConfig {
        rows: cli.rows,
        cols: cli.cols,
        seed: cli.seed,
    };
    let dictionary = Dictionary::load_or_builtin(&cli.dict, config.cols)
        .context("no usable word list")?;
    info!(
        words = dictionary.len(),
        builtin = dictionary.is_builtin(),
        "dictionary ready"
    );

    let mut game = Game::new(config, dictionary).context("failed to start game")?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(game),
        Commands::Simple => run_simple(&mut game).context("text mode failed"),
    }
}

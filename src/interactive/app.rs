//! TUI application state and logic

use crate::board::CommitOutcome;
use crate::game::{DisplayState, Game, TickOutcome};
use crate::input::{KeyRepeat, RepeatPolicy, TickInput};
use anyhow::Result;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// One game tick, roughly 60 per second
pub const TICK_RATE: Duration = Duration::from_millis(16);

/// Application state
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    keys: KeyboardInput,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Collects key events between ticks
#[derive(Debug)]
struct KeyboardInput {
    policy: RepeatPolicy,
    typed: Vec<char>,
    commit: KeyRepeat,
    delete: KeyRepeat,
}

impl KeyboardInput {
    fn new(track_release: bool) -> Self {
        Self {
            policy: RepeatPolicy::default(),
            typed: Vec::new(),
            commit: KeyRepeat::new(track_release),
            delete: KeyRepeat::new(track_release),
        }
    }

    fn key(&mut self, key: KeyEvent) {
        // Chords are shortcuts, not letters
        let chord = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match (key.code, key.kind) {
            (KeyCode::Char(c), KeyEventKind::Press | KeyEventKind::Repeat) if !chord => {
                self.typed.push(c);
            }
            (KeyCode::Enter, KeyEventKind::Press) => self.commit.press(),
            (KeyCode::Enter, KeyEventKind::Release) => self.commit.release(),
            (KeyCode::Backspace, KeyEventKind::Press) => self.delete.press(),
            (KeyCode::Backspace, KeyEventKind::Release) => self.delete.release(),
            _ => {}
        }
    }

    fn take_tick(&mut self) -> TickInput {
        TickInput {
            chars: std::mem::take(&mut self.typed),
            commit: self.commit.tick(self.policy),
            delete: self.delete.tick(self.policy),
        }
    }
}

impl App {
    #[must_use]
    pub fn new(game: Game, track_release: bool) -> Self {
        let board = game.board();
        let intro = format!(
            "Guess the {}-letter word in {} tries.",
            board.cols(),
            board.rows()
        );
        let source = if game.dictionary().is_builtin() {
            "Using the built-in word list."
        } else {
            "Dictionary loaded."
        };

        Self {
            messages: vec![
                Message {
                    text: intro,
                    style: MessageStyle::Info,
                },
                Message {
                    text: source.to_string(),
                    style: MessageStyle::Info,
                },
            ],
            game,
            should_quit: false,
            keys: KeyboardInput::new(track_release),
        }
    }

    /// Route one key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let pressed = key.kind == KeyEventKind::Press;
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc if pressed => {
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Char('q') if pressed && self.game.is_over() => {
                self.should_quit = true;
            }
            _ => self.keys.key(key),
        }
    }

    /// Feed the input gathered since the last tick into the game
    pub fn on_tick(&mut self) {
        let input = self.keys.take_tick();
        if input.is_empty() {
            return;
        }

        match self.game.tick(&input) {
            TickOutcome::Committed(CommitOutcome::NotInDictionary(word)) => {
                self.add_message(
                    &format!("{} is not in the word list", word.text().to_uppercase()),
                    MessageStyle::Error,
                );
            }
            TickOutcome::Committed(CommitOutcome::Accepted { .. }) => match self.game.display_state() {
                DisplayState::Won => {
                    self.add_message("Good Job!", MessageStyle::Success);
                    self.add_message("Press Enter or 'q' to quit.", MessageStyle::Info);
                }
                DisplayState::Revealed(answer) => {
                    self.add_message(
                        &format!("The word was {}", answer.text().to_uppercase()),
                        MessageStyle::Error,
                    );
                    self.add_message("Press Enter or 'q' to quit.", MessageStyle::Info);
                }
                DisplayState::Playing => {}
            },
            outcome => debug!(?outcome, "tick"),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored first.
pub fn run_tui(game: Game) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let track_release = supports_keyboard_enhancement().unwrap_or(false);
    execute!(stdout, EnterAlternateScreen)?;
    if track_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    debug!(track_release, "terminal ready");

    // Run app
    let res = run_app(&mut terminal, App::new(game, track_release));

    // Restore terminal
    if track_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    session_result(res)
}

/// Log a failed session and hand the error back to the caller
fn session_result(res: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        error!(%err, "terminal session failed");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! TUI application state and logic

use crate::core::{Game, GameStatus, SecretWord};
use crate::dictionary::DictionaryEntry;
use crate::effects::{EffectEvent, EffectRunner};
use crate::wordlists::{WordSource, fallback_word, pick_secret};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use std::time::Duration;

/// How often the event loop wakes up to drain effect results
const TICK: Duration = Duration::from_millis(100);

/// What the keyboard currently drives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

/// Application state
pub struct App {
    pub game: Game,
    pub lives: u8,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_dictionary: bool,
    pub should_quit: bool,
    runner: EffectRunner,
    source: Option<Box<dyn WordSource>>,
    // Lookup results keyed by the word they were fetched for. The panel
    // only ever reads the current game's key, so a response that arrives
    // after a restart can never leak into the new game's display.
    definitions: FxHashMap<String, Vec<DictionaryEntry>>,
}

impl App {
    #[must_use]
    pub fn new(lives: u8, source: Option<Box<dyn WordSource>>, runner: EffectRunner) -> Self {
        let word = next_word(source.as_deref());
        let mut app = Self {
            game: Game::with_lives(word, lives),
            lives,
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            show_dictionary: false,
            should_quit: false,
            runner,
            source,
            definitions: FxHashMap::default(),
        };
        app.add_message("Welcome! Type a letter and press Enter.", MessageStyle::Info);
        app
    }

    /// Throw away the old game and start fresh
    pub fn new_game(&mut self) {
        let word = next_word(self.source.as_deref());
        self.game = Game::with_lives(word, self.lives);
        self.input_mode = InputMode::Guessing;
        self.input_buffer.clear();
        self.show_dictionary = false;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Submit whatever is in the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let input = input.trim().to_lowercase();

        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => c,
            _ => {
                self.add_message("Enter a single letter.", MessageStyle::Error);
                return;
            }
        };

        if self.game.already_guessed(letter) {
            self.add_message(
                &format!("You already tried '{letter}'."),
                MessageStyle::Info,
            );
            return;
        }

        let was_hit = self.game.word().contains(letter);
        let (next, effects) = self.game.guess(letter);
        self.game = next;
        self.runner.dispatch(&effects);

        match self.game.status() {
            GameStatus::InProgress => {
                if was_hit {
                    self.add_message(&format!("'{letter}' is in the word!"), MessageStyle::Success);
                } else {
                    self.add_message(&format!("No '{letter}' in the word."), MessageStyle::Error);
                }
            }
            GameStatus::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.input_mode = InputMode::GameOver;
                self.show_dictionary = true;
                self.add_message("You won!", MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                self.show_dictionary = true;
                self.add_message(
                    &format!(
                        "You lost! The word was: {}",
                        self.game.word().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Drain pending effect results
    pub fn pump_effects(&mut self) {
        while let Some(event) = self.runner.poll() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: EffectEvent) {
        match event {
            EffectEvent::Definitions { word, entries } => {
                // Cache under the word it belongs to; stale responses for a
                // previous game land here too and are never displayed.
                self.definitions.insert(word, entries);
            }
        }
    }

    /// Dictionary entries for the current game's word, if they have arrived
    #[must_use]
    pub fn current_definitions(&self) -> Option<&[DictionaryEntry]> {
        self.definitions
            .get(self.game.word().text())
            .map(Vec::as_slice)
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

/// Pick the next secret word, going straight to the embedded list when no
/// source is configured (offline mode)
fn next_word(source: Option<&dyn WordSource>) -> SecretWord {
    let mut rng = rand::rng();
    match source {
        Some(source) => pick_secret(source, &mut rng),
        None => fallback_word(&mut rng),
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.pump_effects();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wake up regularly even without input so lookup results show up
        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char('d') => {
                        app.show_dictionary = !app.show_dictionary;
                    }
                    _ => {
                        // Nothing else matters once the game is over
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        if app.input_buffer.is_empty() && c.is_ascii_alphabetic() {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

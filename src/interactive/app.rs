//! TUI application state and logic

use crate::game::{REVEALED_ANSWERS, Rejection, Session, SubmitOutcome, TIME_BONUS_THRESHOLD};
use crate::generator::RandomSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Redraw interval while waiting for input, so the bonus timer moves
const TICK: Duration = Duration::from_millis(200);

/// Longest word the input box accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<'a, R: RandomSource> {
    pub session: Session<'a, R>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub show_stats: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letters hidden; waiting for the player to begin
    Ready,
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, R: RandomSource> App<'a, R> {
    #[must_use]
    pub fn new(session: Session<'a, R>) -> Self {
        Self {
            session,
            input_mode: InputMode::Ready,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Find words containing the three letters in order.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Press Enter to reveal the letters.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            show_stats: false,
            should_quit: false,
        }
    }

    /// Reveal the letters and start the clock
    pub fn begin_round(&mut self) {
        self.session.begin();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "Go! Bonus for answers in the first {}s.",
                TIME_BONUS_THRESHOLD.as_secs()
            ),
            MessageStyle::Info,
        );
    }

    /// Check the typed word and record the outcome
    pub fn submit_guess(&mut self, runtime: &Runtime) {
        let word = std::mem::take(&mut self.input_buffer);
        let outcome = runtime.block_on(self.session.submit(&word));

        match outcome {
            SubmitOutcome::Accepted { length, bonus } => {
                let text = if bonus > 0 {
                    format!("{} +{length} +{bonus}", word.to_uppercase())
                } else {
                    format!("{} +{length}", word.to_uppercase())
                };
                self.add_message(&text, MessageStyle::Success);
            }
            SubmitOutcome::Rejected(reason) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
            SubmitOutcome::AlreadyGuessed => {
                self.add_message("Already guessed", MessageStyle::Error);
            }
            SubmitOutcome::Empty => {
                self.add_message(&Rejection::Empty.to_string(), MessageStyle::Error);
            }
            SubmitOutcome::RoundOver => {}
        }

        if self.session.round().is_over() {
            self.round_over();
        }
    }

    /// Give up the remaining guesses
    pub fn end_round(&mut self) {
        self.session.end_early();
        self.round_over();
    }

    fn round_over(&mut self) {
        self.input_mode = InputMode::RoundOver;
        self.input_buffer.clear();
        self.add_message(
            &format!("Round over: {} points", self.session.round().score()),
            MessageStyle::Success,
        );

        let examples: Vec<String> = self
            .session
            .example_answers(REVEALED_ANSWERS)
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        if !examples.is_empty() {
            self.add_message(
                &format!("Possible answers: {}", examples.join(", ")),
                MessageStyle::Info,
            );
        }
        self.show_stats = true;
    }

    pub fn new_round(&mut self) {
        self.session.new_round();
        self.input_mode = InputMode::Ready;
        self.input_buffer.clear();
        self.show_stats = false;
        self.messages.clear();
        self.add_message(
            "New round! Press Enter to reveal the letters.",
            MessageStyle::Info,
        );
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

    /// Fraction of the bonus window left, 0.0 once it has passed
    #[must_use]
    pub fn bonus_remaining(&self) -> f64 {
        if self.input_mode != InputMode::Guessing {
            return 0.0;
        }
        let window = TIME_BONUS_THRESHOLD.as_secs_f64();
        ((window - self.session.elapsed().as_secs_f64()) / window).clamp(0.0, 1.0)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent, runtime: &Runtime) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Tab {
            self.show_stats = !self.show_stats;
            return;
        }

        match self.input_mode {
            InputMode::Ready => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.begin_round(),
                KeyCode::Char('n') => self.new_round(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_round();
                }
                KeyCode::Char(c) => {
                    if self.input_buffer.len() < MAX_INPUT_LEN
                        && (c.is_ascii_alphabetic() || c == '-')
                    {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(runtime),
                KeyCode::Esc => self.end_round(),
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Enter | KeyCode::Char('n') => self.new_round(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: RandomSource>(app: App<'_, R>, runtime: &Runtime) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, runtime);

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

fn run_app<B: ratatui::backend::Backend, R: RandomSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
    runtime: &Runtime,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key, runtime);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

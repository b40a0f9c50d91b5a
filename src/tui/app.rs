//! Calculator application state and key handling.

use crate::config::Config;
use crate::engine::Mode;
use crate::session::Session;
use crossterm::event::KeyCode;

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Digit, decimal point or operator.
    Token(char),
    Evaluate,
    Backspace,
    Clear,
    ToggleConvert,
    Binary,
    Fraction,
    ToggleHistory,
    Quit,
}

impl Action {
    /// Map a key press to an action.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char(c @ ('0'..='9' | '.' | '+' | '-' | '*' | '/')) => Some(Action::Token(c)),
            KeyCode::Char('=') | KeyCode::Enter => Some(Action::Evaluate),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Delete => Some(Action::Clear),
            KeyCode::Char('c') => Some(Action::ToggleConvert),
            KeyCode::Char('b') => Some(Action::Binary),
            KeyCode::Char('f') => Some(Action::Fraction),
            KeyCode::Char('h') => Some(Action::ToggleHistory),
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Calculator application state.
pub struct CalculatorApp {
    /// The calculator session (engine + convert timer).
    pub session: Session,
    /// Is the history panel open?
    pub show_history: bool,
    /// Should we quit?
    pub should_quit: bool,
    /// Status message to display.
    pub status: String,
}

impl CalculatorApp {
    /// Create a new calculator.
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(config),
            show_history: false,
            should_quit: false,
            status: "Ready. Enter to evaluate, 'c' to convert, Esc to quit.".into(),
        }
    }

    /// Apply one user action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Token(c) => {
                self.session.append_token(c);
            }
            Action::Evaluate => {
                self.status = match self.session.evaluate() {
                    Ok(Some(eval)) => format!("{} = {}", eval.display_equation, eval.formatted_result),
                    Ok(None) => "Nothing to evaluate.".into(),
                    Err(e) => format!("Error: {}", e),
                };
            }
            Action::Backspace => self.session.backspace(),
            Action::Clear => {
                self.session.clear();
                self.status = "Cleared.".into();
            }
            Action::ToggleConvert => {
                self.status = match self.session.toggle_convert_mode() {
                    Some(_) => "Convert mode: 'b' binary, 'f' fraction.".into(),
                    None => "Back to base mode.".into(),
                };
            }
            // Conversions are only on the convert keypad
            Action::Binary | Action::Fraction if self.mode() != Mode::Convert => {}
            Action::Binary => {
                let out = self.session.convert_to_binary();
                self.status = format!("Binary: {}", out);
            }
            Action::Fraction => {
                let out = self.session.convert_to_fraction();
                self.status = format!("Fraction: {}", out);
            }
            Action::ToggleHistory => self.show_history = !self.show_history,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Apply queued timer events.
    pub fn tick(&mut self) {
        if self.session.pump() > 0 {
            self.status = "Convert mode expired.".into();
        }
    }

    pub fn mode(&self) -> Mode {
        self.session.engine().mode()
    }
}

/// Run the calculator in the terminal.
pub fn run_calculator(config: &Config) -> std::io::Result<()> {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    };
    use ratatui::prelude::*;
    use std::io::stdout;
    use std::time::Duration;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = CalculatorApp::new(config);

    // Main loop
    loop {
        terminal.draw(|frame| {
            super::ui::draw(frame, &app);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = Action::from_key(key.code) {
                        app.apply(action);
                    }
                }
            }
        }

        // Timer events are applied here, on the loop that owns the session
        app.tick();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

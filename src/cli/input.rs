//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking key polling so pending transitions keep ticking
//! - Arrow/vim keys for answers, digits for category toggles
//! - Ctrl+C / Esc / q graceful exit

use crate::catalog::Category;
use crate::session::Outcome;
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// What a key press asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Flip,
    Answer(Outcome),
    Shuffle,
    Reset,
    Toggle(Category),
    Confirm,
    Decline,
    Quit,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Poll for a key press with timeout (non-blocking)
    /// `deadline` shortens the wait so a pending transition lands on time.
    /// Returns Some(KeyEvent) if a key was pressed, None on timeout
    pub fn read_key(&self, deadline: Option<Duration>) -> IoResult<Option<KeyEvent>> {
        let timeout = deadline.map_or(self.poll_timeout, |d| d.min(self.poll_timeout));
        if event::poll(timeout)? {
            match event::read()? {
                event::Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Map a key press to an action
    pub fn action(key: &KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Flip),
            KeyCode::Right | KeyCode::Up | KeyCode::Char('l') | KeyCode::Char('k') => {
                Some(Action::Answer(Outcome::Correct))
            }
            KeyCode::Left | KeyCode::Down | KeyCode::Char('h') | KeyCode::Char('j') => {
                Some(Action::Answer(Outcome::Incorrect))
            }
            KeyCode::Char('s') => Some(Action::Shuffle),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Confirm),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::Decline),
            KeyCode::Char(c) => Self::category_key(c).map(Action::Toggle),
            _ => None,
        }
    }

    /// Digits 1-6 pick a category in natural order
    fn category_key(c: char) -> Option<Category> {
        let digit = c.to_digit(10)? as usize;
        digit
            .checked_sub(1)
            .and_then(|i| Category::ALL.get(i).copied())
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

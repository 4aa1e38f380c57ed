//! Viewer application state and key handling
//!
//! The App owns the inputs, the cursor over the trace, and the auto-play
//! flag. The core produced the trace up front; everything here is replay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use retrace::TraceCursor;

/// The viewer application
pub struct App {
    /// The pattern as typed
    pub pattern: String,

    /// The subject string as typed
    pub subject: String,

    /// Cursor over the generated trace
    pub cursor: TraceCursor,

    /// Whether auto-play is running
    pub auto_play: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Generate the trace for the inputs and position the cursor at the start
    pub fn new(pattern: &str, subject: &str) -> Self {
        let trace = retrace::trace(pattern, subject);
        App {
            pattern: pattern.to_string(),
            subject: subject.to_string(),
            cursor: TraceCursor::new(trace),
            auto_play: false,
            should_quit: false,
        }
    }

    /// Handle a keyboard event
    ///
    /// Returns whether the state changed (needed for re-rendering)
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('n') | KeyCode::Right | KeyCode::Char(' ') => {
                self.auto_play = false;
                self.cursor.advance()
            }
            KeyCode::Char('p') | KeyCode::Left => {
                self.auto_play = false;
                self.cursor.retreat()
            }
            KeyCode::Char('a') => {
                if self.auto_play {
                    self.auto_play = false;
                } else {
                    if self.cursor.at_end() {
                        self.cursor.reset();
                    }
                    self.auto_play = true;
                }
                true
            }
            KeyCode::Char('r') => {
                self.auto_play = false;
                self.cursor.reset();
                true
            }
            _ => false,
        }
    }

    /// Advance one step of auto-play; stops at the end of the trace
    pub fn tick(&mut self) -> bool {
        let moved = self.cursor.advance();
        if !moved {
            self.auto_play = false;
        }
        moved
    }
}

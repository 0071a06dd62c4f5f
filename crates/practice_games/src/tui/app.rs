//! Application state and logic.

use practice_tictactoe::{AlertItem, GameEvent, MoveError, Position};
use tracing::debug;

/// UI-side state: cursor, status line, and the end-of-game prompt.
#[derive(Debug)]
pub struct App {
    cursor: Position,
    status_message: String,
    alert: Option<&'static AlertItem>,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            cursor: Position::Center,
            status_message: "Your move.".to_string(),
            alert: None,
        }
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The end-of-game prompt, while one is showing.
    pub fn alert(&self) -> Option<&'static AlertItem> {
        self.alert
    }

    /// Handles an event from the engine.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::MovePlaced(mv) => {
                self.status_message = format!("{} played {}", mv.player(), mv.position().label());
            }
            GameEvent::InputChanged(false) => {
                self.status_message = "Computer is thinking...".to_string();
            }
            GameEvent::InputChanged(true) => {
                self.status_message.push_str(". Your move.");
            }
            GameEvent::GameOver { alert, .. } => {
                self.status_message = format!("{} {}", alert.title, alert.message);
                self.alert = Some(alert);
            }
            GameEvent::Reset => {
                self.status_message = "New game. Your move.".to_string();
                self.alert = None;
            }
        }
    }

    /// Reports a refused move.
    pub fn handle_rejection(&mut self, error: &MoveError) {
        self.status_message = error.to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

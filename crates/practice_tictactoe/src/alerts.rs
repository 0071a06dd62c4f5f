//! End-of-game messages.

use super::GameStatus;
use serde::Serialize;

/// Text shown when a game ends, with the button that starts a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertItem {
    /// Headline.
    pub title: &'static str,
    /// Body text.
    pub message: &'static str,
    /// Label of the button that resets the game.
    pub button_text: &'static str,
}

/// Shown when the human completes a line.
pub const HUMAN_WIN: AlertItem = AlertItem {
    title: "You Win!",
    message: "Congratulations!",
    button_text: "Play Again",
};

/// Shown when the computer completes a line.
pub const COMPUTER_WIN: AlertItem = AlertItem {
    title: "Computer Wins!",
    message: "Better luck next time.",
    button_text: "Play Again",
};

/// Shown when the board fills without a line.
pub const DRAW: AlertItem = AlertItem {
    title: "Draw!",
    message: "Better luck next time.",
    button_text: "Play Again",
};

impl AlertItem {
    /// Alert for a terminal status; `None` while the game is in progress.
    pub fn for_status(status: GameStatus) -> Option<&'static AlertItem> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::HumanWon => Some(&HUMAN_WIN),
            GameStatus::ComputerWon => Some(&COMPUTER_WIN),
            GameStatus::Draw => Some(&DRAW),
        }
    }
}

impl std::fmt::Display for AlertItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.title, self.message)
    }
}

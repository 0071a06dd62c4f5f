//! Core domain types for tic-tac-toe.

use super::action::{Move, MoveError};
use super::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// The person at the keyboard (X).
    Human,
    /// The heuristic opponent (O).
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Name of the marker image drawn for this player.
    pub fn indicator(self) -> &'static str {
        match self {
            Player::Human => "xmark",
            Player::Computer => "circle",
        }
    }

    /// Single-character marker for text rendering.
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Slots only ever go from empty to occupied. The stored move at a
/// slot always carries that slot's position, since [`Board::place`]
/// is the sole mutator and builds the move itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: [Option<Move>; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the move at the given position.
    pub fn get(&self, pos: Position) -> Option<Move> {
        self.slots[pos.to_index()]
    }

    /// Checks if a square holds a move.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.slots[pos.to_index()].is_some()
    }

    /// Positions of every move made by `player`.
    pub fn positions_of(&self, player: Player) -> BTreeSet<Position> {
        self.slots
            .iter()
            .flatten()
            .filter(|m| m.player() == player)
            .map(|m| m.position())
            .collect()
    }

    /// Places a mark for `player`, refusing occupied squares.
    #[instrument(skip(self))]
    pub fn place(&mut self, player: Player, pos: Position) -> Result<Move, MoveError> {
        if self.is_occupied(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        let mv = Move::new(player, pos);
        self.slots[pos.to_index()] = Some(mv);
        Ok(mv)
    }

    /// True when all nine squares are occupied.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Unoccupied positions in index order.
    pub fn available(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// All slots in row-major order.
    pub fn slots(&self) -> &[Option<Move>; 9] {
        &self.slots
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.slots[pos] {
                    Some(mv) => result.push(mv.player().symbol()),
                    None => result.push_str(&(pos + 1).to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The human completed a line.
    HumanWon,
    /// The computer completed a line.
    ComputerWon,
    /// Board filled with no line.
    Draw,
}

impl GameStatus {
    /// True for every status that accepts no further moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The win status belonging to `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => GameStatus::HumanWon,
            Player::Computer => GameStatus::ComputerWon,
        }
    }
}

//! Moves and move errors.
//!
//! A move is an immutable record of a player claiming a cell.
//! Every way a move can be refused is a [`MoveError`]; the engine
//! returns these without touching its state.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A player's mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player who made this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the board index (0-8) of this move.
    pub fn board_index(&self) -> usize {
        self.position.to_index()
    }

    /// Renderable indicator name for the player's marker.
    pub fn indicator(&self) -> &'static str {
        self.player.indicator()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reasons a move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The index does not name a cell (must be 0-8).
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The board is not accepting input while the computer moves.
    #[display("Board input is disabled")]
    InputDisabled,
}

impl std::error::Error for MoveError {}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// Three cells that win the game when held by one player.
pub type WinPattern = [Position; 3];

/// Every winning line: rows, then columns, then diagonals.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `player` holds every cell of some winning line.
#[instrument(skip(board))]
pub fn has_won(player: Player, board: &Board) -> bool {
    winning_pattern(player, board).is_some()
}

/// First line in [`WIN_PATTERNS`] held entirely by `player`.
#[instrument(skip(board))]
pub fn winning_pattern(player: Player, board: &Board) -> Option<WinPattern> {
    let held = board.positions_of(player);
    WIN_PATTERNS
        .into_iter()
        .find(|pattern| pattern.iter().all(|pos| held.contains(pos)))
}

//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player};
use super::win::has_won;
use tracing::instrument;

/// A full board on which neither player has a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_won(Player::Human, board) && !has_won(Player::Computer, board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn board_from(human: &[usize], computer: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in human {
            board.place(Player::Human, Position::ALL[i]).unwrap();
        }
        for &i in computer {
            board.place(Player::Computer, Position::ALL[i]).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = board_from(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / X O O
        let board = board_from(&[0, 1, 2, 5, 6], &[3, 4, 7, 8]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}

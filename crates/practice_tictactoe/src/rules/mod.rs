//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Nothing here keeps
//! state between calls; every check is recomputed from the board.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{has_won, winning_pattern, WinPattern, WIN_PATTERNS};

//! Practice Tic-Tac-Toe - pure game logic
//!
//! A single human plays X against a heuristic computer opponent on
//! a fixed 3x3 board.
//!
//! # Architecture
//!
//! - **Board**: nine optional move slots, filled monotonically
//! - **Rules**: win and draw detection as pure functions
//! - **Selector**: the computer's tiered move heuristic
//! - **Engine**: the game state machine and its event stream
//!
//! # Example
//!
//! ```
//! use practice_tictactoe::{GameEngine, GameStatus, Submission};
//!
//! let mut game = GameEngine::with_seed(Some(7));
//! if let Ok(Submission::ComputerToMove(turn)) = game.submit_human_move(0) {
//!     let reply = game.complete_computer_turn(turn).unwrap();
//!     assert_eq!(reply.board_index(), 4);
//! }
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod alerts;
mod config;
mod engine;
mod position;
pub mod rules;
mod selector;
mod types;

pub use action::{Move, MoveError};
pub use alerts::{AlertItem, COMPUTER_WIN, DRAW, HUMAN_WIN};
pub use config::{ConfigError, GameConfig};
pub use engine::{ComputerTurn, GameEngine, GameEvent, Submission};
pub use position::Position;
pub use rules::{has_won, is_draw, winning_pattern, WinPattern, WIN_PATTERNS};
pub use selector::{select_move, HeuristicSelector, MoveSelector, Selection, Tier};
pub use types::{Board, GameStatus, Player};

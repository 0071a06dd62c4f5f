//! Practice Games - play tic-tac-toe against a heuristic computer
//!
//! Wraps the pure [`practice_tictactoe`] engine with the pieces that
//! need a runtime.
//!
//! # Architecture
//!
//! - **Scheduler**: delivers the computer's turn after its thinking delay
//! - **Session**: engine plus scheduler, with reset cancelling the timer
//! - **TUI**: ratatui front end driving a session from the keyboard

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod scheduler;
mod session;
pub mod tui;

pub use scheduler::MoveScheduler;
pub use session::GameSession;

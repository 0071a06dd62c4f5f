//! Game engine: the human-versus-computer state machine.
//!
//! The engine never sleeps. When the human's move leaves the game
//! open it hands back a [`ComputerTurn`] ticket and disables input;
//! whoever drives the engine waits out the thinking delay and then
//! redeems the ticket with [`GameEngine::complete_computer_turn`].
//! Tickets are stamped with the game generation, and
//! [`GameEngine::reset_game`] bumps the generation, so a ticket
//! issued before a reset never touches the new board.

use super::action::{Move, MoveError};
use super::alerts::AlertItem;
use super::rules::has_won;
use super::selector::{HeuristicSelector, MoveSelector, Selection};
use super::{Board, GameStatus, Player, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Permission to play the computer's reply in a specific game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputerTurn {
    generation: u64,
    ply: usize,
}

impl ComputerTurn {
    /// Generation of the game that issued this ticket.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of marks on the board when the ticket was issued.
    pub fn ply(&self) -> usize {
        self.ply
    }
}

/// Result of an accepted human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The human's move ended the game.
    Finished(GameStatus),
    /// The computer must reply; input stays disabled until it does.
    ComputerToMove(ComputerTurn),
}

/// Notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MovePlaced(Move),
    /// Board input was enabled or disabled.
    InputChanged(bool),
    /// The game reached a terminal status.
    GameOver {
        /// Final status.
        status: GameStatus,
        /// Message to show for it.
        alert: &'static AlertItem,
    },
    /// A fresh game started.
    Reset,
}

/// Tic-tac-toe against the heuristic opponent.
#[derive(Debug)]
pub struct GameEngine<S = HeuristicSelector> {
    board: Board,
    status: GameStatus,
    input_enabled: bool,
    generation: u64,
    pending: Option<ComputerTurn>,
    selector: S,
    subscribers: Vec<mpsc::UnboundedSender<GameEvent>>,
}

impl<S: MoveSelector> GameEngine<S> {
    /// Creates a new game using `selector` for the computer's moves.
    #[instrument(skip(selector))]
    pub fn new(selector: S) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            input_enabled: true,
            generation: 0,
            pending: None,
            selector,
            subscribers: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether a human move would currently be considered.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Number of resets since the engine was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The outstanding computer turn, if one was issued and not yet redeemed.
    pub fn pending_turn(&self) -> Option<ComputerTurn> {
        self.pending
    }

    /// Alert for the current status, if the game is over.
    pub fn alert(&self) -> Option<&'static AlertItem> {
        AlertItem::for_status(self.status)
    }

    /// Registers a listener for [`GameEvent`]s.
    ///
    /// Dropped receivers are pruned on the next event.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Plays the human's mark at board index `index` (0-8).
    ///
    /// On rejection nothing changes and the reason is returned.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<Submission, MoveError> {
        if self.status.is_terminal() {
            debug!(status = %self.status, "Rejecting move: game over");
            return Err(MoveError::GameOver);
        }
        if !self.input_enabled {
            debug!("Rejecting move: waiting on computer");
            return Err(MoveError::InputDisabled);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        let mv = self.board.place(Player::Human, pos).inspect_err(|e| {
            debug!(error = %e, "Rejecting move");
        })?;
        info!(position = %pos, "Human moved");
        self.emit(GameEvent::MovePlaced(mv));

        if let Some(status) = self.settle(Player::Human) {
            return Ok(Submission::Finished(status));
        }

        let turn = ComputerTurn {
            generation: self.generation,
            ply: self.board.occupied_count(),
        };
        self.pending = Some(turn);
        self.set_input_enabled(false);
        Ok(Submission::ComputerToMove(turn))
    }

    /// Plays the computer's reply for `turn`.
    ///
    /// Returns `None` without touching the board when the ticket is
    /// stale (issued before a reset) or was already redeemed.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn complete_computer_turn(&mut self, turn: ComputerTurn) -> Option<Move> {
        if self.pending != Some(turn) {
            debug!(
                ticket_generation = turn.generation,
                "Discarding stale computer turn"
            );
            return None;
        }
        self.pending = None;

        let Some(selection) = self.selector.select(&self.board) else {
            warn!("Computer turn issued on a full board");
            self.set_input_enabled(true);
            return None;
        };
        let mv = self.place_computer(selection)?;

        self.set_input_enabled(true);
        self.settle(Player::Computer);
        Some(mv)
    }

    /// Starts a fresh game from any state.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset_game(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::InProgress;
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
        info!(generation = self.generation, "Game reset");
        self.set_input_enabled(true);
        self.emit(GameEvent::Reset);
    }

    fn place_computer(&mut self, selection: Selection) -> Option<Move> {
        match self.board.place(Player::Computer, *selection.position()) {
            Ok(mv) => {
                info!(position = %mv.position(), tier = %selection.tier(), "Computer moved");
                self.emit(GameEvent::MovePlaced(mv));
                Some(mv)
            }
            Err(e) => {
                warn!(error = %e, "Selector chose an occupied square");
                self.set_input_enabled(true);
                None
            }
        }
    }

    /// Applies win/draw after `mover` placed a mark; returns the terminal status if reached.
    fn settle(&mut self, mover: Player) -> Option<GameStatus> {
        let status = if has_won(mover, &self.board) {
            GameStatus::won_by(mover)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            return None;
        };

        self.status = status;
        info!(%status, "Game over");
        if let Some(alert) = AlertItem::for_status(status) {
            self.emit(GameEvent::GameOver { status, alert });
        }
        Some(status)
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        if self.input_enabled != enabled {
            self.input_enabled = enabled;
            self.emit(GameEvent::InputChanged(enabled));
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl GameEngine<HeuristicSelector> {
    /// Creates a game with the standard heuristic opponent.
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self::new(HeuristicSelector::with_seed(seed))
    }
}

impl Default for GameEngine<HeuristicSelector> {
    fn default() -> Self {
        Self::with_seed(None)
    }
}

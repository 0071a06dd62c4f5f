//! A playable game: the engine plus its computer-move timer.

use crate::scheduler::MoveScheduler;
use practice_tictactoe::{
    ComputerTurn, GameConfig, GameEngine, GameEvent, GameStatus, HeuristicSelector, Move,
    MoveError, MoveSelector, Submission,
};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Owns a [`GameEngine`] and schedules its computer replies.
///
/// All calls happen on one task. The computer's reply arrives on
/// [`GameSession::next_turn`]; hand it back to
/// [`GameSession::apply_turn`] from the same loop that forwards
/// human input.
#[derive(Debug)]
pub struct GameSession<S = HeuristicSelector> {
    engine: GameEngine<S>,
    scheduler: MoveScheduler,
    turns: mpsc::UnboundedReceiver<ComputerTurn>,
}

impl GameSession<HeuristicSelector> {
    /// Creates a session from configuration.
    #[instrument(skip(config), fields(delay_ms = config.computer_delay_ms(), seed = ?config.seed()))]
    pub fn from_config(config: &GameConfig) -> Self {
        info!("Creating game session");
        let engine = GameEngine::with_seed(*config.seed());
        Self::with_engine(engine, config)
    }
}

impl<S: MoveSelector> GameSession<S> {
    /// Wraps an existing engine.
    pub fn with_engine(engine: GameEngine<S>, config: &GameConfig) -> Self {
        let (scheduler, turns) = MoveScheduler::new(config.computer_delay());
        Self {
            engine,
            scheduler,
            turns,
        }
    }

    /// Read access to the engine.
    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    /// Registers a listener for engine events.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        self.engine.subscribe()
    }

    /// Forwards a human move and starts the computer's timer if needed.
    #[instrument(skip(self))]
    pub fn submit(&mut self, index: usize) -> Result<Submission, MoveError> {
        let submission = self.engine.submit_human_move(index)?;
        if let Submission::ComputerToMove(turn) = submission {
            debug!(delay = ?self.scheduler.delay(), "Computer thinking");
            self.scheduler.schedule(turn);
        }
        Ok(submission)
    }

    /// Starts a new game, cancelling any pending computer turn.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.engine.reset_game();
    }

    /// Waits for the next computer turn to come due.
    pub async fn next_turn(&mut self) -> Option<ComputerTurn> {
        self.turns.recv().await
    }

    /// Returns a computer turn that has already come due, without waiting.
    pub fn try_next_turn(&mut self) -> Option<ComputerTurn> {
        self.turns.try_recv().ok()
    }

    /// Plays a due computer turn; stale turns are ignored.
    #[instrument(skip(self))]
    pub fn apply_turn(&mut self, turn: ComputerTurn) -> Option<Move> {
        self.engine.complete_computer_turn(turn)
    }

    /// Waits out the pending computer turn and plays it.
    ///
    /// Returns `None` immediately if no turn is pending.
    pub async fn settle_computer(&mut self) -> Option<Move> {
        while self.engine.pending_turn().is_some() {
            let turn = self.next_turn().await?;
            if let Some(mv) = self.apply_turn(turn) {
                return Some(mv);
            }
        }
        None
    }
}

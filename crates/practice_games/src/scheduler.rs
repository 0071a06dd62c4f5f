//! Deferred delivery of computer turns.

use practice_tictactoe::ComputerTurn;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Delivers [`ComputerTurn`] tickets after a fixed thinking delay.
///
/// At most one ticket is in flight; scheduling another aborts the
/// previous timer.
#[derive(Debug)]
pub struct MoveScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<ComputerTurn>,
    in_flight: Option<JoinHandle<()>>,
}

impl MoveScheduler {
    /// Creates a scheduler and the receiver its tickets arrive on.
    #[instrument]
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<ComputerTurn>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            delay,
            tx,
            in_flight: None,
        };
        (scheduler, rx)
    }

    /// The thinking delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sends `turn` once the delay elapses. Must be called inside a tokio runtime.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, turn: ComputerTurn) {
        self.cancel();
        let delay = self.delay;
        let tx = self.tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(turn).is_err() {
                debug!("Turn receiver dropped");
            }
        }));
    }

    /// Aborts the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            debug!("Cancelling pending computer turn");
            handle.abort();
        }
    }

    /// True while a timer is running.
    pub fn is_pending(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for MoveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

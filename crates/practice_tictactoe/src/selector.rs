//! Computer opponent move selection.
//!
//! The heuristic walks four tiers in a fixed order and stops at the
//! first one that produces a cell:
//!
//! 1. [`Tier::WinNow`] completes a computer line.
//! 2. [`Tier::Block`] fills the gap in a human line.
//! 3. [`Tier::Center`] takes the middle square.
//! 4. [`Tier::Random`] picks any empty square uniformly.

use super::rules::WIN_PATTERNS;
use super::{Board, Player, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Heuristic tier that produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Tier {
    /// Completes a line for the computer.
    WinNow,
    /// Blocks a human line.
    Block,
    /// Takes the center square.
    Center,
    /// Uniform choice among empty squares.
    Random,
}

/// A chosen cell and the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct Selection {
    position: Position,
    tier: Tier,
}

impl Selection {
    /// Creates a selection.
    pub fn new(position: Position, tier: Tier) -> Self {
        Self { position, tier }
    }
}

/// Source of computer moves.
pub trait MoveSelector {
    /// Picks the computer's next cell, `None` when the board is full.
    fn select(&mut self, board: &Board) -> Option<Selection>;
}

/// Production selector: the tiered heuristic over a seedable RNG.
#[derive(Debug, Clone)]
pub struct HeuristicSelector {
    rng: StdRng,
}

impl HeuristicSelector {
    /// Creates a selector with a deterministic seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a selector seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a selector from an optional seed.
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl MoveSelector for HeuristicSelector {
    fn select(&mut self, board: &Board) -> Option<Selection> {
        select_move(board, &mut self.rng)
    }
}

/// Runs the tiered heuristic against `board`.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Selection> {
    let selection = completing_cell(board, Player::Computer)
        .map(|pos| Selection::new(pos, Tier::WinNow))
        .or_else(|| {
            completing_cell(board, Player::Human).map(|pos| Selection::new(pos, Tier::Block))
        })
        .or_else(|| {
            (!board.is_occupied(Position::Center))
                .then(|| Selection::new(Position::Center, Tier::Center))
        })
        .or_else(|| {
            let open = board.available();
            if open.is_empty() {
                return None;
            }
            let pick = open[rng.random_range(0..open.len())];
            Some(Selection::new(pick, Tier::Random))
        });

    match &selection {
        Some(s) => debug!(position = %s.position, tier = %s.tier, "Computer selected move"),
        None => debug!("No move available"),
    }
    selection
}

/// Free cell that would give `player` a full line, if any.
///
/// Scans [`WIN_PATTERNS`] in order; the first qualifying pattern wins.
fn completing_cell(board: &Board, player: Player) -> Option<Position> {
    let held = board.positions_of(player);
    WIN_PATTERNS.into_iter().find_map(|pattern| {
        let missing: Vec<Position> = pattern
            .into_iter()
            .filter(|pos| !held.contains(pos))
            .collect();
        match missing.as_slice() {
            [gap] if !board.is_occupied(*gap) => Some(*gap),
            _ => None,
        }
    })
}

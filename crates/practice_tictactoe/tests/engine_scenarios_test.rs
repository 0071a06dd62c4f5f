//! End-to-end tests for the game state machine.

use practice_tictactoe::{
    Board, GameEngine, GameEvent, GameStatus, MoveError, MoveSelector, Player, Position,
    Selection, Submission, Tier, COMPUTER_WIN, DRAW, HUMAN_WIN,
};
use std::collections::VecDeque;

/// Computer that plays a fixed list of squares.
#[derive(Debug)]
struct Scripted(VecDeque<usize>);

impl Scripted {
    fn new(cells: &[usize]) -> Self {
        Self(cells.iter().copied().collect())
    }
}

impl MoveSelector for Scripted {
    fn select(&mut self, _board: &Board) -> Option<Selection> {
        self.0
            .pop_front()
            .and_then(Position::from_index)
            .map(|pos| Selection::new(pos, Tier::Random))
    }
}

/// Plays `human` moves, letting the computer answer each immediately.
fn play<S: MoveSelector>(game: &mut GameEngine<S>, human: &[usize]) {
    for &index in human {
        match game.submit_human_move(index).expect("legal move") {
            Submission::ComputerToMove(turn) => {
                game.complete_computer_turn(turn).expect("computer reply");
            }
            Submission::Finished(_) => {}
        }
    }
}

#[test]
fn test_scenario_a_computer_takes_center() {
    let mut game = GameEngine::with_seed(Some(3));
    let Submission::ComputerToMove(turn) = game.submit_human_move(0).unwrap() else {
        panic!("game should continue after one move");
    };
    let reply = game.complete_computer_turn(turn).unwrap();
    assert_eq!(reply.position(), Position::Center);
    assert_eq!(reply.player(), Player::Computer);
}

#[test]
fn test_scenario_d_draw_only_after_final_placement() {
    let mut game = GameEngine::new(Scripted::new(&[4, 1, 6, 5]));
    play(&mut game, &[0, 2, 7, 3]);
    assert_eq!(game.board().occupied_count(), 8);
    assert_eq!(game.status(), GameStatus::InProgress);

    let result = game.submit_human_move(8).unwrap();
    assert_eq!(result, Submission::Finished(GameStatus::Draw));
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.alert(), Some(&DRAW));
}

#[test]
fn test_human_win_ends_game() {
    let mut game = GameEngine::new(Scripted::new(&[3, 4]));
    play(&mut game, &[0, 1]);
    let result = game.submit_human_move(2).unwrap();
    assert_eq!(result, Submission::Finished(GameStatus::HumanWon));
    assert_eq!(game.alert(), Some(&HUMAN_WIN));
    assert_eq!(game.pending_turn(), None);
}

#[test]
fn test_computer_win_ends_game() {
    let mut game = GameEngine::new(Scripted::new(&[3, 4, 5]));
    play(&mut game, &[0, 1, 8]);
    assert_eq!(game.status(), GameStatus::ComputerWon);
    assert_eq!(game.alert(), Some(&COMPUTER_WIN));
    assert_eq!(game.submit_human_move(6), Err(MoveError::GameOver));
}

#[test]
fn test_occupied_submission_changes_nothing() {
    let mut game = GameEngine::with_seed(Some(11));
    play(&mut game, &[0]);

    let occupied: Vec<usize> = Position::ALL
        .iter()
        .filter(|pos| game.board().is_occupied(**pos))
        .map(|pos| pos.to_index())
        .collect();
    assert_eq!(occupied.len(), 2);

    for index in occupied {
        let before = game.board().clone();
        let err = game.submit_human_move(index).unwrap_err();
        assert!(matches!(err, MoveError::SquareOccupied(_)));
        assert_eq!(game.board(), &before);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.input_enabled());
    }
}

#[test]
fn test_reset_from_every_state() {
    // Pending computer turn.
    let mut pending = GameEngine::with_seed(Some(5));
    let _ = pending.submit_human_move(0).unwrap();

    // Human won.
    let mut human_won = GameEngine::new(Scripted::new(&[3, 4]));
    play(&mut human_won, &[0, 1, 2]);

    // Computer won.
    let mut computer_won = GameEngine::new(Scripted::new(&[3, 4, 5]));
    play(&mut computer_won, &[0, 1, 8]);

    // Draw.
    let mut draw = GameEngine::new(Scripted::new(&[4, 1, 6, 5]));
    play(&mut draw, &[0, 2, 7, 3, 8]);

    pending.reset_game();
    human_won.reset_game();
    computer_won.reset_game();
    draw.reset_game();

    assert_fresh(&pending);
    assert_fresh(&human_won);
    assert_fresh(&computer_won);
    assert_fresh(&draw);
}

fn assert_fresh<S: MoveSelector>(game: &GameEngine<S>) {
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.input_enabled());
    assert_eq!(game.pending_turn(), None);
}

#[test]
fn test_turn_issued_before_reset_is_discarded() {
    let mut game = GameEngine::with_seed(Some(5));
    let Submission::ComputerToMove(stale) = game.submit_human_move(0).unwrap() else {
        panic!("game should continue");
    };
    game.reset_game();

    let Submission::ComputerToMove(fresh) = game.submit_human_move(8).unwrap() else {
        panic!("game should continue");
    };
    assert_ne!(stale, fresh);
    assert_eq!(game.complete_computer_turn(stale), None);
    assert_eq!(game.board().occupied_count(), 1);

    let reply = game.complete_computer_turn(fresh).unwrap();
    assert_eq!(reply.position(), Position::Center);
}

#[test]
fn test_game_over_event_carries_alert() {
    let mut game = GameEngine::new(Scripted::new(&[3, 4]));
    let mut rx = game.subscribe();
    play(&mut game, &[0, 1, 2]);

    let events: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            status: GameStatus::HumanWon,
            alert: &HUMAN_WIN,
        })
    );

    game.reset_game();
    assert_eq!(rx.try_recv().ok(), Some(GameEvent::Reset));
}

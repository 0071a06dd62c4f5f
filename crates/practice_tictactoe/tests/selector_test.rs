//! Tests for the computer's move heuristic.

use practice_tictactoe::{select_move, Board, Player, Position, Tier};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

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
fn test_scenario_b_win_now() {
    let board = board_from(&[3, 6], &[0, 1]);
    let mut rng = StdRng::seed_from_u64(1);
    let selection = select_move(&board, &mut rng).unwrap();
    assert_eq!(*selection.position(), Position::TopRight);
    assert_eq!(*selection.tier(), Tier::WinNow);
}

#[test]
fn test_scenario_c_block() {
    let board = board_from(&[0, 1], &[4]);
    let mut rng = StdRng::seed_from_u64(1);
    let selection = select_move(&board, &mut rng).unwrap();
    assert_eq!(*selection.position(), Position::TopRight);
    assert_eq!(*selection.tier(), Tier::Block);
}

#[test]
fn test_win_preferred_over_block() {
    // Computer can finish the top row; human threatens the middle row.
    let board = board_from(&[3, 4], &[0, 1]);
    let mut rng = StdRng::seed_from_u64(1);
    let selection = select_move(&board, &mut rng).unwrap();
    assert_eq!(*selection.position(), Position::TopRight);
    assert_eq!(*selection.tier(), Tier::WinNow);
}

#[test]
fn test_win_preferred_over_center() {
    let board = board_from(&[1, 5], &[0, 6]);
    let mut rng = StdRng::seed_from_u64(1);
    let selection = select_move(&board, &mut rng).unwrap();
    assert_eq!(*selection.position(), Position::MiddleLeft);
    assert_eq!(*selection.tier(), Tier::WinNow);
}

#[test]
fn test_any_winning_cell_is_acceptable() {
    // Two open computer lines: column 0 via 3 and row 0 via 2.
    let board = board_from(&[5, 8], &[0, 1, 6]);
    let mut rng = StdRng::seed_from_u64(1);
    let selection = select_move(&board, &mut rng).unwrap();
    assert_eq!(*selection.tier(), Tier::WinNow);
    assert!(
        [Position::TopRight, Position::MiddleLeft].contains(selection.position()),
        "{selection:?}"
    );
}

#[test]
fn test_block_preferred_over_center() {
    let board = board_from(&[0, 8], &[2]);
    // Human holds the corners of the main diagonal; center blocks it.
    let mut rng = StdRng::seed_from_u64(1);
    let selection = select_move(&board, &mut rng).unwrap();
    assert_eq!(*selection.position(), Position::Center);
    assert_eq!(*selection.tier(), Tier::Block);
}

#[test]
fn test_random_tier_reaches_every_empty_cell() {
    let board = board_from(&[4], &[]);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts = [0usize; 9];

    for _ in 0..800 {
        let selection = select_move(&board, &mut rng).unwrap();
        assert_eq!(*selection.tier(), Tier::Random);
        counts[selection.position().to_index()] += 1;
    }

    assert_eq!(counts[4], 0);
    for (index, &count) in counts.iter().enumerate().filter(|(i, _)| *i != 4) {
        assert!(count >= 50, "cell {index} chosen {count} times of 800");
    }
}

#[test]
fn test_selection_is_always_unoccupied() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let mut board = Board::new();
        let marks = rng.random_range(0..9);
        let mut player = Player::Human;
        for _ in 0..marks {
            let open = board.available();
            let pos = open[rng.random_range(0..open.len())];
            board.place(player, pos).unwrap();
            player = player.opponent();
        }

        let selection = select_move(&board, &mut rng).expect("board has space");
        assert!(!board.is_occupied(*selection.position()), "{}", board.display());
    }
}

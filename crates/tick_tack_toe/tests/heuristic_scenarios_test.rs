//! Tests for the opponent's move heuristic.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tick_tack_toe::{
    Board, Diagonal, Line, Position, Value, Weight, next_move, tie_break_set, weight_for_line,
};

fn board_with(marks: &[(usize, usize, Value)]) -> Board {
    let mut board = Board::new(3);
    for &(row, column, value) in marks {
        board.set(row, column, value).unwrap();
    }
    board
}

#[test]
fn test_empty_board_lines_are_medium() {
    let board = Board::new(3);
    for i in 0..3 {
        assert_eq!(weight_for_line(Line::Row(i), &board), Weight::Medium);
        assert_eq!(weight_for_line(Line::Column(i), &board), Weight::Medium);
    }
    assert_eq!(
        weight_for_line(Line::Diagonal(Diagonal::Main), &board),
        Weight::Medium
    );
    assert_eq!(
        weight_for_line(Line::Diagonal(Diagonal::Anti), &board),
        Weight::Medium
    );
}

#[test]
fn test_blocks_player_near_win() {
    let board = board_with(&[(0, 0, Value::Player), (0, 1, Value::Player)]);

    let tie = tie_break_set(&board).unwrap();
    assert_eq!(tie.positions, vec![Position::new(0, 2)]);

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(next_move(&board, &mut rng), Some(Position::new(0, 2)));
}

#[test]
fn test_completes_own_line() {
    let board = board_with(&[(1, 0, Value::Opponent), (1, 2, Value::Opponent)]);

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(next_move(&board, &mut rng), Some(Position::new(1, 1)));
}

#[test]
fn test_own_win_takes_priority_over_block() {
    // The opponent could block the top row at (0, 2) but finishing the
    // middle row at (1, 1) scores higher. This asymmetry is intended.
    let board = board_with(&[
        (0, 0, Value::Player),
        (0, 1, Value::Player),
        (1, 0, Value::Opponent),
        (1, 2, Value::Opponent),
    ]);

    let tie = tie_break_set(&board).unwrap();
    assert_eq!(tie.positions, vec![Position::new(1, 1)]);
    assert!(tie.score >= Weight::Win.value());

    let mut rng = StdRng::seed_from_u64(99);
    assert_eq!(next_move(&board, &mut rng), Some(Position::new(1, 1)));
}

#[test]
fn test_tie_break_choice_is_member_of_set() {
    let board = board_with(&[(1, 1, Value::Player)]);
    let tie = tie_break_set(&board).unwrap();
    assert!(tie.positions.len() > 1);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let choice = next_move(&board, &mut rng).unwrap();
        assert!(tie.positions.contains(&choice), "{} not in tie set", choice);
    }
}

#[test]
fn test_next_move_never_targets_occupied_cell() {
    let board = board_with(&[
        (0, 0, Value::Player),
        (0, 2, Value::Opponent),
        (1, 1, Value::Player),
        (2, 1, Value::Opponent),
        (2, 2, Value::Player),
    ]);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let choice = next_move(&board, &mut rng).unwrap();
        assert_eq!(board.at(choice).unwrap(), Value::Empty);
    }
}

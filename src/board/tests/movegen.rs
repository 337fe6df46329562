//! Legal move generation tests.

use super::seq;
use crate::board::{Board, BoardBuilder, Color, MoveError, MoveSequence, Square, SquareError};

#[test]
fn test_starting_moves_white() {
    let board = Board::new();
    let moves = board.legal_moves(Color::White);
    let expected = vec![
        seq(&[(5, 0), (4, 1)]),
        seq(&[(5, 2), (4, 1)]),
        seq(&[(5, 2), (4, 3)]),
        seq(&[(5, 4), (4, 3)]),
        seq(&[(5, 4), (4, 5)]),
        seq(&[(5, 6), (4, 5)]),
        seq(&[(5, 6), (4, 7)]),
    ];
    assert_eq!(moves, expected);
}

#[test]
fn test_starting_moves_black() {
    let board = Board::new();
    let moves = board.legal_moves(Color::Black);
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|m| m.origin().row() == 2 && m.destination().row() == 3));
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn test_frontmost_man_has_two_forward_steps() {
    let board = Board::new();
    let moves = board.legal_moves_from(Color::White, Square(5, 2));
    assert_eq!(
        moves,
        vec![seq(&[(5, 2), (4, 1)]), seq(&[(5, 2), (4, 3)])]
    );
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn test_origin_query_empty_or_opponent() {
    let board = Board::new();
    assert!(board.legal_moves_from(Color::White, Square(4, 1)).is_empty());
    assert!(board.legal_moves_from(Color::White, Square(2, 1)).is_empty());
    assert!(board.legal_moves_from(Color::White, Square(7, 0)).is_empty());
}

#[test]
fn test_single_capture_is_forced() {
    let board = BoardBuilder::new()
        .man(Square(4, 4), Color::White)
        .man(Square(3, 3), Color::Black)
        .build();

    let moves = board.legal_moves_from(Color::White, Square(4, 4));
    assert_eq!(moves, vec![seq(&[(4, 4), (2, 2)])]);
    assert_eq!(board.legal_moves(Color::White), moves);
    assert!(board.has_capture(Color::White));
}

#[test]
fn test_double_jump_is_maximal() {
    let board = BoardBuilder::new()
        .man(Square(4, 4), Color::White)
        .man(Square(3, 3), Color::Black)
        .man(Square(1, 1), Color::Black)
        .build();

    let moves = board.legal_moves_from(Color::White, Square(4, 4));
    assert_eq!(moves, vec![seq(&[(4, 4), (2, 2), (0, 0)])]);
    assert_eq!(moves[0].captured_squares(), vec![Square(3, 3), Square(1, 1)]);
}

#[test]
fn test_branching_chains_are_all_listed() {
    // After the first jump to (3,4) the man can continue left or right.
    let board = BoardBuilder::new()
        .man(Square(5, 2), Color::White)
        .man(Square(4, 3), Color::Black)
        .man(Square(2, 3), Color::Black)
        .man(Square(2, 5), Color::Black)
        .build();

    let moves = board.legal_moves(Color::White);
    assert_eq!(
        moves,
        vec![
            seq(&[(5, 2), (3, 4), (1, 2)]),
            seq(&[(5, 2), (3, 4), (1, 6)]),
        ]
    );
}

#[test]
fn test_capture_elsewhere_blocks_simple_moves() {
    let board = BoardBuilder::new()
        .man(Square(5, 0), Color::White)
        .man(Square(5, 4), Color::White)
        .man(Square(4, 5), Color::Black)
        .build();

    // (5,0) could step, but (5,4) must capture.
    assert!(board.legal_moves_from(Color::White, Square(5, 0)).is_empty());
    assert_eq!(
        board.legal_moves(Color::White),
        vec![seq(&[(5, 4), (3, 6)])]
    );
}

#[test]
fn test_men_capture_forward_only() {
    let board = BoardBuilder::new()
        .man(Square(3, 2), Color::White)
        .man(Square(4, 3), Color::Black)
        .build();

    // The Black man sits behind the White man: no capture.
    assert!(!board.has_capture(Color::White));
    let moves = board.legal_moves(Color::White);
    assert!(moves.iter().all(|m| !m.is_capture()));
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_king_captures_backwards() {
    let board = BoardBuilder::new()
        .king(Square(3, 2), Color::White)
        .man(Square(4, 3), Color::Black)
        .build();

    assert_eq!(
        board.legal_moves(Color::White),
        vec![seq(&[(3, 2), (5, 4)])]
    );
}

#[test]
fn test_cannot_jump_own_piece_or_onto_occupied() {
    let board = BoardBuilder::new()
        .man(Square(5, 2), Color::White)
        .man(Square(4, 3), Color::White)
        .man(Square(4, 1), Color::Black)
        .man(Square(3, 0), Color::Black)
        .build();

    assert!(!board.has_capture(Color::White));
}

#[test]
fn test_captured_piece_not_jumped_twice() {
    // A king circling four men: each is taken once and the chain ends back
    // on the vacated origin.
    let board = BoardBuilder::new()
        .king(Square(5, 4), Color::White)
        .man(Square(4, 3), Color::Black)
        .man(Square(2, 3), Color::Black)
        .man(Square(2, 5), Color::Black)
        .man(Square(4, 5), Color::Black)
        .build();

    let moves = board.legal_moves(Color::White);
    assert_eq!(
        moves,
        vec![
            seq(&[(5, 4), (3, 2), (1, 4), (3, 6), (5, 4)]),
            seq(&[(5, 4), (3, 6), (1, 4), (3, 2), (5, 4)]),
        ]
    );
    for mv in &moves {
        let mut captured = mv.captured_squares();
        captured.sort();
        captured.dedup();
        assert_eq!(captured.len(), 4, "{mv} jumps a piece twice");
    }
}

#[test]
fn test_check_move_errors() {
    let board = Board::new();

    assert_eq!(
        board.check_move(Color::White, &seq(&[(4, 1), (3, 0)])),
        Err(MoveError::EmptyOrigin {
            square: Square(4, 1)
        })
    );
    assert_eq!(
        board.check_move(Color::White, &seq(&[(2, 1), (3, 0)])),
        Err(MoveError::WrongSideToMove {
            square: Square(2, 1),
            to_move: Color::White
        })
    );
    assert!(matches!(
        board.check_move(Color::White, &seq(&[(5, 0), (3, 2)])),
        Err(MoveError::IllegalSequence { .. })
    ));
    assert!(board.is_legal(Color::White, &seq(&[(5, 0), (4, 1)])));
}

#[test]
fn test_off_board_squares_are_rejected() {
    let board = Board::new();
    assert!(board.legal_moves_from(Color::White, Square(8, 1)).is_empty());
    assert!(board.legal_moves_from(Color::Black, Square(0, 9)).is_empty());
    assert_eq!(board.piece_at(Square(8, 1)), None);
    assert!(!board.is_empty(Square(8, 1)));

    assert_eq!(
        board.check_move(Color::White, &seq(&[(8, 1), (7, 0)])),
        Err(MoveError::InvalidSquare(SquareError::RowOutOfBounds { row: 8 }))
    );
    // A bad landing square is caught before the origin is looked at.
    assert_eq!(
        board.check_move(Color::White, &seq(&[(5, 0), (4, 8)])),
        Err(MoveError::InvalidSquare(SquareError::ColOutOfBounds { col: 8 }))
    );
}

#[test]
fn test_stopping_short_of_a_chain_is_illegal() {
    let board = BoardBuilder::new()
        .man(Square(4, 4), Color::White)
        .man(Square(3, 3), Color::Black)
        .man(Square(1, 1), Color::Black)
        .build();

    let short = MoveSequence::step(Square(4, 4), Square(2, 2));
    assert!(matches!(
        board.check_move(Color::White, &short),
        Err(MoveError::IllegalSequence { .. })
    ));
}

#[test]
fn test_has_legal_moves() {
    assert!(Board::new().has_legal_moves(Color::White));
    assert!(!Board::empty().has_legal_moves(Color::Black));
}

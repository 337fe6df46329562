#![cfg(feature = "serde")]

use draughts_engine::{Board, Color, MoveSequence, Piece, Square};

#[test]
fn board_serializes_as_code_matrix() {
    let json = serde_json::to_value(Board::new()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], serde_json::json!([0, -1, 0, -1, 0, -1, 0, -1]));
    assert_eq!(rows[5], serde_json::json!([1, 0, 1, 0, 1, 0, 1, 0]));

    let back: Board = serde_json::from_value(json).unwrap();
    assert_eq!(back, Board::new());
}

#[test]
fn board_deserialization_validates() {
    let mut rows = vec![vec![0i8; 8]; 8];
    rows[3][3] = 2;
    let json = serde_json::to_string(&rows).unwrap();
    assert!(serde_json::from_str::<Board>(&json).is_err());

    assert!(serde_json::from_str::<Board>("[[0,0,0]]").is_err());
}

#[test]
fn move_sequence_is_list_of_pairs() {
    let mv: MoveSequence = "5,2x3,4x1,2".parse().unwrap();
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(json, "[[5,2],[3,4],[1,2]]");

    let back: MoveSequence = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);

    assert!(serde_json::from_str::<MoveSequence>("[[5,2]]").is_err());
    assert!(serde_json::from_str::<MoveSequence>("[[5,2],[-1,0]]").is_err());
}

#[test]
fn square_rejects_out_of_range() {
    assert_eq!(serde_json::from_str::<Square>("[7,0]").unwrap(), Square(7, 0));
    assert!(serde_json::from_str::<Square>("[8,0]").is_err());
}

#[test]
fn pieces_and_colors() {
    let json = serde_json::to_string(&Piece::king(Color::Black)).unwrap();
    let back: Piece = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Piece::king(Color::Black));
    assert_eq!(serde_json::to_string(&Color::White).unwrap(), "\"White\"");
}

use super::*;

#[test]
fn test_color_opponent() {
    assert_eq!(Color::Dark.opponent(), Color::Light);
    assert_eq!(Color::Light.opponent(), Color::Dark);
}

#[test]
fn test_color_wire_values() {
    assert_eq!(Color::try_from(1).unwrap(), Color::Dark);
    assert_eq!(Color::try_from(2).unwrap(), Color::Light);
    assert!(matches!(Color::try_from(0), Err(OthelloError::InvalidColor(0))));
    assert_eq!(Color::Dark as u8, 1);
    assert_eq!(Color::Light as u8, 2);
}

#[test]
fn test_move_conversion() {
    let mv = Move::new(3, 4);
    assert_eq!(mv.to_index(), 3 * 8 + 4);
    assert_eq!(Move::from_index(28), mv);
}

#[test]
fn test_move_validity() {
    assert!(Move::is_valid(0, 0, 8));
    assert!(Move::is_valid(7, 7, 8));
    assert!(!Move::is_valid(-1, 0, 8));
    assert!(!Move::is_valid(0, 8, 8));
    assert!(!Move::is_valid(4, 0, 4));
}

#[test]
fn test_move_ordering() {
    assert!(Move::new(0, 0) < Move::new(0, 1));
    assert!(Move::new(0, 7) < Move::new(1, 0));
}

#[test]
fn test_standard_setup() {
    let board = Board::standard();
    assert_eq!(board.size(), BOARD_SIZE);
    assert_eq!(board.score(), (2, 2));
    assert_eq!(board.get(Move::new(3, 3)), Cell::Light);
    assert_eq!(board.get(Move::new(4, 4)), Cell::Light);
    assert_eq!(board.get(Move::new(3, 4)), Cell::Dark);
    assert_eq!(board.get(Move::new(4, 3)), Cell::Dark);
    assert_eq!(Board::new(8).unwrap(), board);
}

#[test]
fn test_small_setup() {
    let board = Board::new(4).unwrap();
    assert_eq!(board.size(), 4);
    assert_eq!(board.get(Move::new(1, 1)), Cell::Light);
    assert_eq!(board.get(Move::new(1, 2)), Cell::Dark);
    assert_eq!(board.empties().count(), 12);
}

#[test]
fn test_rejects_bad_sizes() {
    assert!(matches!(Board::new(0), Err(OthelloError::BoardSize(0))));
    assert!(matches!(Board::new(5), Err(OthelloError::BoardSize(5))));
    assert!(matches!(Board::new(10), Err(OthelloError::BoardSize(10))));
    assert!(Board::empty(9).is_err());
}

#[test]
fn test_from_rows_round_trip() {
    let rows = vec![
        vec![0, 1, 2, 0],
        vec![0, 0, 0, 0],
        vec![2, 2, 1, 0],
        vec![0, 0, 0, 1],
    ];
    let board = Board::from_rows(&rows).unwrap();
    assert_eq!(board.score(), (3, 3));
    assert_eq!(board.to_rows(), rows);
}

#[test]
fn test_from_rows_validation() {
    let ragged = vec![vec![0, 0], vec![0]];
    assert!(matches!(
        Board::from_rows(&ragged),
        Err(OthelloError::RaggedRow { row: 1, expected: 2, found: 1 })
    ));

    let bad_cell = vec![vec![0, 3], vec![0, 0]];
    assert!(matches!(Board::from_rows(&bad_cell), Err(OthelloError::InvalidCell(3))));

    let empty: Vec<Vec<u8>> = Vec::new();
    assert!(Board::from_rows(&empty).is_err());
}

#[test]
fn test_from_ascii_matches_display() {
    let board = Board::from_ascii(
        "
        . X . .
        O O X .
        . X O .
        . . . .
        ",
    )
    .unwrap();
    assert_eq!(board.to_string(), ".X..\nOOX.\n.XO.\n....\n");
    assert!(matches!(Board::from_ascii("?."), Err(OthelloError::InvalidSymbol('?'))));
}

#[test]
fn test_flip_and_place() {
    let mut board = Board::empty(4).unwrap();
    let mv = Move::new(2, 2);
    board.place_disc(mv, Color::Dark);
    board.flip(mv, Color::Light);
    assert_eq!(board.get(mv), Cell::Light);
    assert_eq!(board.score(), (0, 1));
    board.remove_disc(mv);
    assert!(board.is_empty(mv));
}

use gameboard::{AttackResult, Board, BoardError, Cell, MissedAttack, ShipType, BOARD_SIZE};

/// Attack `size + 1` consecutive cells to the right of (`x`, `y`).
fn sweep(board: &mut Board, size: i32, x: i32, y: i32) {
    for i in 0..=size {
        board.receive_attack(x + i, y);
    }
}

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert!(board.board().iter().flatten().all(Cell::is_empty));
    assert!(board.ships().is_empty());
    assert!(board.missed_hits().is_empty());
}

#[test]
fn placement_is_indexed_by_row_then_column() {
    let mut board = Board::new();
    board.place_ship("Carrier", [3, 5]).unwrap();
    let grid = board.board();
    assert_eq!(grid[5][3].ship_type(), Some(ShipType::Carrier));
    for x in 3..8 {
        assert_eq!(grid[5][x].ship_type(), Some(ShipType::Carrier));
    }
    assert!(grid[5][2].is_empty());
    assert!(grid[5][8].is_empty());
    assert!(grid[3][5].is_empty());
}

#[test]
fn attack_next_to_ship_misses() {
    let mut board = Board::new();
    board.place_ship("Carrier", [3, 5]).unwrap();
    assert_eq!(board.receive_attack(2, 5), AttackResult::Miss);
    assert_eq!(board.receive_attack(2, 5).to_string(), "Miss");
}

#[test]
fn attack_on_ship_hits() {
    let mut board = Board::new();
    board.place_ship("Carrier", [4, 5]).unwrap();
    let attack = board.receive_attack(4, 5);
    assert_eq!(attack, AttackResult::Hit);
    assert_eq!(attack.as_str(), "Hit");
    assert!(board.cell(4, 5).unwrap().is_hit());
    assert_eq!(board.ships()[0].hits(), 1);
}

#[test]
fn missed_attacks_are_logged_in_order() {
    let mut board = Board::new();
    board.place_ship("Carrier", [2, 8]).unwrap();
    board.receive_attack(4, 5);
    board.receive_attack(6, 6);
    assert_eq!(
        board.missed_hits(),
        &[
            MissedAttack { x_coord: 4, y_coord: 5 },
            MissedAttack { x_coord: 6, y_coord: 6 },
        ]
    );
    let json = serde_json::to_string(board.missed_hits()).unwrap();
    assert_eq!(json, r#"[{"xCoord":4,"yCoord":5},{"xCoord":6,"yCoord":6}]"#);
}

#[test]
fn all_ships_sunk() {
    let mut board = Board::new();
    board.place_ship("Carrier", [5, 6]).unwrap();
    board.place_ship("Battleship", [3, 2]).unwrap();
    board.place_ship("Cruiser", [0, 4]).unwrap();
    board.place_ship("Submarine", [5, 4]).unwrap();
    board.place_ship("Destroyer", [7, 9]).unwrap();
    sweep(&mut board, 5, 5, 6);
    sweep(&mut board, 4, 3, 2);
    sweep(&mut board, 3, 0, 4);
    sweep(&mut board, 3, 5, 4);
    sweep(&mut board, 2, 7, 9);
    assert!(board.all_sunk());
    assert_eq!(board.ships_afloat(), 0);
}

#[test]
fn ships_still_afloat() {
    let mut board = Board::new();
    board.place_ship("Carrier", [2, 8]).unwrap();
    board.place_ship("Destroyer", [6, 2]).unwrap();
    board.place_ship("Submarine", [4, 0]).unwrap();
    assert!(!board.all_sunk());
    assert_eq!(board.ships_afloat(), 3);
}

#[test]
fn empty_board_counts_as_sunk() {
    assert!(Board::new().all_sunk());
}

#[test]
fn occupied_space_is_not_available() {
    let mut board = Board::new();
    board.place_ship("Carrier", [2, 5]).unwrap();
    board.place_ship("Destroyer", [1, 8]).unwrap();
    assert!(!board.check_available_space(5, 5, ShipType::Carrier));
    assert!(!board.check_available_space(2, 8, ShipType::Destroyer));
    assert!(board.check_available_space(0, 0, ShipType::Carrier));
    assert!(board.check_available_space(7, 5, ShipType::Destroyer));
}

#[test]
fn board_edges_report_crossings() {
    let board = Board::new();
    assert!(board.check_board_edges(7, 1, ShipType::Carrier));
    assert!(board.check_board_edges(-1, 1, ShipType::Carrier));
    assert!(board.check_board_edges(0, 10, ShipType::Destroyer));
    assert!(board.check_board_edges(0, -1, ShipType::Destroyer));
    assert!(!board.check_board_edges(5, 1, ShipType::Carrier));
    assert!(!board.check_board_edges(0, 9, ShipType::Carrier));
}

#[test]
fn attacks_outside_the_board_are_invalid() {
    let mut board = Board::new();
    assert_eq!(board.receive_attack(10, 6), AttackResult::Invalid);
    assert_eq!(board.receive_attack(8, 14), AttackResult::Invalid);
    assert_eq!(board.receive_attack(-1, 0).to_string(), "Invalid coordinates");
    assert!(board.missed_hits().is_empty());
}

#[test]
fn rejected_placements_leave_board_untouched() {
    let mut board = Board::new();
    assert_eq!(
        board.place_ship("Carrier", [7, 1]),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place_ship("Carrier", [-1, 1]),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place_ship("Rowboat", [0, 0]),
        Err(BoardError::NameNotFound)
    );
    board.place_ship("Carrier", [2, 5]).unwrap();
    let before = board.clone();
    assert_eq!(
        board.place_ship("Cruiser", [0, 5]),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(board, before);
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn extreme_coordinates_are_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.place_ship("Carrier", [i32::MAX - 1, 0]),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place_ship("Destroyer", [i32::MIN, i32::MAX]),
        Err(BoardError::ShipOutOfBounds)
    );
    assert!(board.check_board_edges(i32::MAX, 0, ShipType::Destroyer));
    assert!(board.check_board_edges(i32::MAX - 3, 0, ShipType::Carrier));
    assert!(board.check_available_space(i32::MAX, 0, ShipType::Carrier));
    assert_eq!(board.receive_attack(i32::MAX, i32::MIN), AttackResult::Invalid);
    assert!(board.ships().is_empty());
}

#[test]
fn ship_may_touch_far_edge() {
    let mut board = Board::new();
    let last = BOARD_SIZE as i32 - 1;
    board.place(ShipType::Destroyer, last - 1, last).unwrap();
    assert_eq!(board.receive_attack(last, last), AttackResult::Hit);
}

#[test]
fn repeat_hits_do_not_double_count() {
    let mut board = Board::new();
    board.place(ShipType::Destroyer, 0, 0).unwrap();
    assert_eq!(board.receive_attack(0, 0), AttackResult::Hit);
    assert_eq!(board.receive_attack(0, 0), AttackResult::Hit);
    assert_eq!(board.ships()[0].hits(), 1);
    assert!(!board.all_sunk());
    assert_eq!(board.receive_attack(1, 0), AttackResult::Hit);
    assert!(board.all_sunk());
}

#[test]
fn repeat_misses_are_logged_again() {
    let mut board = Board::new();
    board.receive_attack(3, 3);
    board.receive_attack(3, 3);
    assert_eq!(board.missed_hits().len(), 2);
}

#[test]
fn boards_are_independent() {
    let mut first = Board::new();
    let second = Board::new();
    first.place_ship("Submarine", [0, 0]).unwrap();
    first.receive_attack(9, 9);
    assert!(second.ships().is_empty());
    assert!(second.missed_hits().is_empty());
    assert!(second.cell(0, 0).unwrap().is_empty());
}

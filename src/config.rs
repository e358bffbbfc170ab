use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::Carrier,
    ShipType::Battleship,
    ShipType::Cruiser,
    ShipType::Submarine,
    ShipType::Destroyer,
];

/// Total number of ship segments used in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Returns `true` when (`x`, `y`) lies on the board.
pub fn in_bounds(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}

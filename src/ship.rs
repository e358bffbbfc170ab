//! Ship types of the standard fleet and ships placed on a board.

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::config::SHIPS;

/// Type of ship: fixes its name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipType {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipType {
    /// Ship's name.
    pub const fn name(&self) -> &'static str {
        match self {
            ShipType::Carrier => "Carrier",
            ShipType::Battleship => "Battleship",
            ShipType::Cruiser => "Cruiser",
            ShipType::Submarine => "Submarine",
            ShipType::Destroyer => "Destroyer",
        }
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        match self {
            ShipType::Carrier => 5,
            ShipType::Battleship => 4,
            ShipType::Cruiser | ShipType::Submarine => 3,
            ShipType::Destroyer => 2,
        }
    }

    /// Look up a ship type by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        SHIPS.iter().copied().find(|def| def.name() == name)
    }
}

impl FromStr for ShipType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipType::from_name(s).ok_or(BoardError::NameNotFound)
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship placed horizontally on the board, starting at (`x`, `y`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    ship_type: ShipType,
    x: i32,
    y: i32,
    hits: usize,
}

impl Ship {
    /// New unhit ship. Bounds and overlap are the board's concern.
    pub fn new(ship_type: ShipType, x: i32, y: i32) -> Self {
        Ship {
            ship_type,
            x,
            y,
            hits: 0,
        }
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Origin of the ship (x, y).
    pub fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Number of distinct segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Cells covered by the ship, left to right.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x, y) = (self.x, self.y);
        (0..self.ship_type.length() as i32).map(move |i| (x + i, y))
    }

    /// Returns `true` if (`x`, `y`) is one of the ship's cells.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        y == self.y && x >= self.x && x < self.x + self.ship_type.length() as i32
    }

    /// Credit a hit to the ship. Saturates at the ship's length.
    pub fn register_hit(&mut self) {
        if self.hits < self.ship_type.length() {
            self.hits += 1;
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.ship_type.length()
    }
}

//! Common types for the board: attack outcomes, cells and errors.

use core::fmt;

use crate::ship::ShipType;

/// Result of an attack against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Attack landed on a ship segment.
    Hit,
    /// Attack landed on open water.
    Miss,
    /// Coordinates lie outside the board; nothing changed.
    Invalid,
}

impl AttackResult {
    /// Literal form reported to callers ("Hit", "Miss", "Invalid coordinates").
    pub const fn as_str(&self) -> &'static str {
        match self {
            AttackResult::Hit => "Hit",
            AttackResult::Miss => "Miss",
            AttackResult::Invalid => "Invalid coordinates",
        }
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coordinates of an attack that hit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct MissedAttack {
    pub x_coord: i32,
    pub y_coord: i32,
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied {
        ship: ShipType,
        /// Index of the ship in placement order.
        index: usize,
        hit: bool,
    },
}

impl Cell {
    /// Type of the occupying ship, if any.
    pub fn ship_type(&self) -> Option<ShipType> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { ship, .. } => Some(*ship),
        }
    }

    /// Returns `true` when no ship covers the cell.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns `true` for an occupied cell that has been hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, Cell::Occupied { hit: true, .. })
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Named ship not found in configuration.
    NameNotFound,
    /// Ship would extend past an edge of the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Random placement found no free spot.
    UnableToPlaceShip,
    /// Restored snapshot is inconsistent.
    InvalidState,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NameNotFound => write!(f, "Ship name not found in configuration"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::InvalidState => write!(f, "Board state is inconsistent"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

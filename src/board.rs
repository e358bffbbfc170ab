//! Game board state: the cell grid, placed ships and missed attacks.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::{debug, trace};
use rand::Rng;

use crate::common::{AttackResult, BoardError, Cell, MissedAttack};
use crate::config::{in_bounds, BOARD_SIZE, SHIPS};
use crate::ship::{Ship, ShipType};

/// Cell grid indexed as `grid[y][x]`.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

const PLACEMENT_ATTEMPTS: usize = 100;

/// Serializable board state for saving or restoring a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub grid: Grid,
    pub ships: Vec<Ship>,
    pub missed: Vec<MissedAttack>,
}

/// Main board state: ship placements, hits, misses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
    missed: Vec<MissedAttack>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            missed: Vec::new(),
        }
    }

    /// Read-only view of the grid, indexed `[y][x]`.
    pub fn board(&self) -> &Grid {
        &self.grid
    }

    /// Cell at (`x`, `y`), or `None` off the board.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if in_bounds(x, y) {
            Some(self.grid[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of placed ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Missed attacks, oldest first.
    pub fn missed_hits(&self) -> &[MissedAttack] {
        &self.missed
    }

    /// Returns `true` when every placed ship is sunk. An empty board counts
    /// as sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Returns `true` when `ship_type` placed at (`x`, `y`) would cross an
    /// edge of the board.
    pub fn check_board_edges(&self, x: i32, y: i32, ship_type: ShipType) -> bool {
        match x.checked_add(ship_type.length() as i32 - 1) {
            Some(last) => !(in_bounds(x, y) && in_bounds(last, y)),
            None => true,
        }
    }

    /// Returns `false` when any cell `ship_type` would cover from (`x`, `y`)
    /// already holds a ship.
    pub fn check_available_space(&self, x: i32, y: i32, ship_type: ShipType) -> bool {
        (0..ship_type.length() as i32)
            .map_while(|i| x.checked_add(i))
            .all(|cx| self.cell(cx, y).map_or(true, |c| c.is_empty()))
    }

    /// Place a ship by name, extending right from `[x, y]`.
    pub fn place_ship(&mut self, name: &str, [x, y]: [i32; 2]) -> Result<(), BoardError> {
        let ship_type: ShipType = name.parse()?;
        self.place(ship_type, x, y)
    }

    /// Place a ship of `ship_type` extending right from (`x`, `y`). The board
    /// is left untouched when the placement is rejected.
    pub fn place(&mut self, ship_type: ShipType, x: i32, y: i32) -> Result<(), BoardError> {
        if self.check_board_edges(x, y, ship_type) {
            debug!("rejected {} at ({}, {}): out of bounds", ship_type, x, y);
            return Err(BoardError::ShipOutOfBounds);
        }
        if !self.check_available_space(x, y, ship_type) {
            debug!("rejected {} at ({}, {}): overlap", ship_type, x, y);
            return Err(BoardError::ShipOverlaps);
        }

        let ship = Ship::new(ship_type, x, y);
        let index = self.ships.len();
        for (cx, cy) in ship.cells() {
            self.grid[cy as usize][cx as usize] = Cell::Occupied {
                ship: ship_type,
                index,
                hit: false,
            };
        }
        self.ships.push(ship);
        debug!("placed {} at ({}, {})", ship_type, x, y);
        Ok(())
    }

    /// Returns a random horizontal origin where `ship_type` fits without
    /// overlapping.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(i32, i32), BoardError> {
        let max_x = (BOARD_SIZE - ship_type.length()) as i32;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..BOARD_SIZE as i32);
            if self.check_available_space(x, y, ship_type) {
                return Ok((x, y));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place the full standard fleet at random.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for def in SHIPS {
            let (x, y) = self.random_placement(rng, def)?;
            self.place(def, x, y)?;
        }
        Ok(())
    }

    /// Process an attack at (`x`, `y`), marking hits or logging the miss.
    ///
    /// A repeat attack on a hit cell reports `Hit` again but does not credit
    /// the ship twice.
    pub fn receive_attack(&mut self, x: i32, y: i32) -> AttackResult {
        if !in_bounds(x, y) {
            trace!("attack at ({}, {}) is off the board", x, y);
            return AttackResult::Invalid;
        }
        match &mut self.grid[y as usize][x as usize] {
            Cell::Empty => {
                self.missed.push(MissedAttack {
                    x_coord: x,
                    y_coord: y,
                });
                trace!("miss at ({}, {})", x, y);
                AttackResult::Miss
            }
            Cell::Occupied { ship, index, hit } => {
                if !*hit {
                    *hit = true;
                    if let Some(placed) = self.ships.get_mut(*index) {
                        placed.register_hit();
                        if placed.is_sunk() {
                            debug!("{} sunk", ship);
                        }
                    }
                }
                trace!("hit at ({}, {})", x, y);
                AttackResult::Hit
            }
        }
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            grid: b.grid,
            ships: b.ships.clone(),
            missed: b.missed.clone(),
        }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = BoardError;

    /// Restore a board, rejecting snapshots whose grid and ship list
    /// disagree.
    fn try_from(state: BoardState) -> Result<Self, Self::Error> {
        let board = Board {
            grid: state.grid,
            ships: state.ships,
            missed: state.missed,
        };
        board.validate()?;
        Ok(board)
    }
}

impl Board {
    fn validate(&self) -> Result<(), BoardError> {
        let mut covered = 0usize;
        for (index, placed) in self.ships.iter().enumerate() {
            let ship_type = placed.ship_type();
            let (x, y) = placed.origin();
            if self.check_board_edges(x, y, ship_type) || placed.hits() > ship_type.length() {
                return Err(BoardError::InvalidState);
            }
            let mut hit_cells = 0;
            for (cx, cy) in placed.cells() {
                match self.grid[cy as usize][cx as usize] {
                    Cell::Occupied { ship, index: i, hit } if ship == ship_type && i == index => {
                        hit_cells += usize::from(hit);
                    }
                    _ => return Err(BoardError::InvalidState),
                }
            }
            if hit_cells != placed.hits() {
                return Err(BoardError::InvalidState);
            }
            covered += ship_type.length();
        }
        // every occupied cell must belong to one of the ships checked above
        let occupied = self.grid.iter().flatten().filter(|c| !c.is_empty()).count();
        if occupied != covered {
            return Err(BoardError::InvalidState);
        }
        if self.missed.iter().any(|m| !in_bounds(m.x_coord, m.y_coord)) {
            return Err(BoardError::InvalidState);
        }
        Ok(())
    }
}

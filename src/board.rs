//! Ship layout: placement validation and occupancy queries.

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::{GRID_SIZE, NUM_SHIPS};
use crate::ship::{Orientation, Ship, ShipKind};

type BB = BitBoard<u128, GRID_SIZE>;

/// Snapshot of the ship layout, one entry per cell.
pub type ShipGrid = [[Option<ShipKind>; GRID_SIZE]; GRID_SIZE];

/// Attempts per ship before random placement gives up. Unreachable with the
/// fixed catalog on a 10x10 grid; guards against a malformed catalog.
const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Ship placements and their combined occupancy mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    ships: [Option<Ship>; NUM_SHIPS],
    ship_map: BB,
}

impl Board {
    /// Empty board, no ships placed.
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: BB::new(),
        }
    }

    /// Combined occupancy mask of all placed ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Placed ships in catalog order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// The kind occupying (`row`, `col`), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<ShipKind> {
        self.ships().find(|s| s.contains(row, col)).map(|s| s.kind())
    }

    /// Place `kind` with its bow at (`row`, `col`). Rejects placements that
    /// leave the grid or overlap another ship, and placing the same catalog
    /// entry twice.
    pub fn place(
        &mut self,
        kind: ShipKind,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let slot = kind as usize;
        if self.ships[slot].is_some() {
            return Err(GameError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(kind, orientation, row, col)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(GameError::ShipOverlaps);
        }
        self.ship_map = self.ship_map | ship.mask();
        self.ships[slot] = Some(ship);
        log::debug!("placed {} at ({}, {}) {:?}", kind, row, col, orientation);
        Ok(())
    }

    /// Pick a random placement for `kind`: uniformly random bow cell and
    /// orientation, drawn from the in-bounds range and rejected on overlap
    /// until a candidate fits.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<(usize, usize, Orientation), GameError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (GRID_SIZE - 1, GRID_SIZE - kind.length()),
                Orientation::Vertical => (GRID_SIZE - kind.length(), GRID_SIZE - 1),
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            let candidate = Ship::new(kind, orientation, row, col)?;
            if (self.ship_map & candidate.mask()).is_empty() {
                return Ok((row, col, orientation));
            }
        }
        Err(GameError::PlacementFailed(kind))
    }

    /// Place the whole catalog in fixed order.
    pub fn place_all_random<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for kind in ShipKind::ALL {
            let (row, col, orientation) = self.random_placement(rng, kind)?;
            self.place(kind, row, col, orientation)?;
        }
        Ok(())
    }

    /// Per-cell snapshot of the layout.
    pub fn kind_grid(&self) -> ShipGrid {
        let mut grid: ShipGrid = [[None; GRID_SIZE]; GRID_SIZE];
        for ship in self.ships() {
            for (r, c) in ship.cells() {
                grid[r][c] = Some(ship.kind());
            }
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

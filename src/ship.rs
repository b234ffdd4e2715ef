//! Ship catalog and placement geometry.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::{GRID_SIZE, NUM_SHIPS};

type BB = BitBoard<u128, GRID_SIZE>;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The fixed catalog of ship kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Carrier,
    Battleship,
    Submarine,
    Destroyer,
    Patrol,
}

impl ShipKind {
    /// The catalog in placement order.
    pub const ALL: [ShipKind; NUM_SHIPS] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::Patrol,
    ];

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 3,
            ShipKind::Patrol => 2,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Patrol => "Patrol Boat",
        }
    }

    /// Single-letter marker used when rendering a revealed layout.
    pub const fn symbol(self) -> char {
        match self {
            ShipKind::Carrier => 'C',
            ShipKind::Battleship => 'B',
            ShipKind::Submarine => 'S',
            ShipKind::Destroyer => 'D',
            ShipKind::Patrol => 'P',
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A placed ship: kind, origin, orientation and its occupancy mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BB,
}

impl Ship {
    /// Build a ship with its bow at (`row`, `col`), extending right or down.
    /// Fails when any cell would leave the grid.
    pub fn new(
        kind: ShipKind,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, GameError> {
        let len = kind.length();
        let fits = match orientation {
            Orientation::Horizontal => row < GRID_SIZE && col + len <= GRID_SIZE,
            Orientation::Vertical => col < GRID_SIZE && row + len <= GRID_SIZE,
        };
        if !fits {
            return Err(GameError::ShipOutOfBounds);
        }

        let mut mask = BB::new();
        for i in 0..len {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            };
            mask.set(r, c)?;
        }

        Ok(Ship {
            kind,
            orientation,
            row,
            col,
            mask,
        })
    }

    /// Ship's kind.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Bow position (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation on the grid.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> BB {
        self.mask
    }

    /// Cells the ship occupies, bow first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = (self.row, self.col);
        let orientation = self.orientation;
        (0..self.kind.length()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Whether the ship occupies (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }
}

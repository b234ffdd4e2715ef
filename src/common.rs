//! Shared model types: cell states, guess outcomes, game status, errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::ship::ShipKind;

/// What the player knows about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Not guessed yet.
    #[default]
    Unknown,
    /// Guessed, struck a ship segment.
    Hit,
    /// Guessed, hit only water.
    Miss,
}

/// Outcome of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Struck a ship segment without finishing the ship.
    Hit,
    /// Hit only water.
    Miss,
    /// Struck the last intact segment of the named ship.
    Sunk(ShipKind),
}

impl GuessResult {
    /// `true` for any guess that struck a ship segment.
    pub fn is_hit(self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Win/loss view of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Errors returned by board and game operations.
///
/// `OutOfBounds` and `AlreadyGuessed` (and the placement variants) reject
/// bad input and leave all state untouched; `GameOver` and `GameInProgress`
/// reject operations submitted in the wrong game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess coordinates outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Cell was guessed before.
    AlreadyGuessed { row: usize, col: usize },
    /// Guess submitted after the game ended.
    GameOver,
    /// Ship layout requested while the game is still active.
    GameInProgress,
    /// Placement would leave the grid.
    ShipOutOfBounds,
    /// Placement overlaps an already-placed ship.
    ShipOverlaps,
    /// The same catalog entry was placed twice.
    ShipAlreadyPlaced,
    /// Random placement exhausted its retry cap.
    PlacementFailed(ShipKind),
    /// Out-of-range mask indexing in the backing bitboards.
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "coordinates out of bounds: ({}, {})", row, col)
            }
            GameError::AlreadyGuessed { row, col } => {
                write!(f, "cell already guessed: ({}, {})", row, col)
            }
            GameError::GameOver => write!(f, "the game is over"),
            GameError::GameInProgress => {
                write!(f, "ship layout is hidden until the game is over")
            }
            GameError::ShipOutOfBounds => write!(f, "ship placement leaves the grid"),
            GameError::ShipOverlaps => write!(f, "ship placement overlaps another ship"),
            GameError::ShipAlreadyPlaced => write!(f, "ship is already on the board"),
            GameError::PlacementFailed(kind) => {
                write!(f, "no valid placement found for the {}", kind)
            }
            GameError::BitBoard(e) => write!(f, "bitboard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

//! The game session: guess processing and win/loss determination.

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::board::{Board, ShipGrid};
use crate::common::{CellState, GameError, GameStatus, GuessResult};
use crate::config::{GRID_SIZE, MAX_GUESSES, TOTAL_SHIP_CELLS};

type BB = BitBoard<u128, GRID_SIZE>;

/// Snapshot of the player-visible grid, one entry per cell.
pub type CellGrid = [[CellState; GRID_SIZE]; GRID_SIZE];

/// A single-player session: the hidden ship layout, the player's hit/miss
/// record and the guess budget.
///
/// The random source is injected at construction and reused on every
/// restart, so a seeded generator gives fully reproducible games.
pub struct Game<R: Rng> {
    rng: R,
    board: Board,
    hits: BB,
    misses: BB,
    guess_count: u32,
}

impl<R: Rng> Game<R> {
    /// Session with an empty board. Call [`Game::start`] before guessing.
    pub fn new(rng: R) -> Self {
        Game {
            rng,
            board: Board::new(),
            hits: BB::new(),
            misses: BB::new(),
            guess_count: 0,
        }
    }

    /// Reset both grids and the counter, then place a fresh random layout
    /// in fixed catalog order. Any prior game is discarded.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.board = Board::new();
        self.hits = BB::new();
        self.misses = BB::new();
        self.guess_count = 0;
        self.board.place_all_random(&mut self.rng)?;
        log::info!("game started, {} cells to sink", TOTAL_SHIP_CELLS);
        Ok(())
    }

    /// Fire at (`row`, `col`).
    ///
    /// Rejected with [`GameError::GameOver`] once the game has ended, and
    /// with [`GameError::OutOfBounds`] or [`GameError::AlreadyGuessed`] for
    /// bad coordinates. A rejected guess leaves the session untouched; an
    /// accepted guess costs one unit of budget, hit or miss.
    pub fn guess(&mut self, row: usize, col: usize) -> Result<GuessResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(GameError::AlreadyGuessed { row, col });
        }

        self.guess_count += 1;
        let struck = self.board.ships().find(|s| s.contains(row, col)).copied();
        match struck {
            Some(ship) => {
                self.hits.set(row, col)?;
                if (ship.mask() & !self.hits).is_empty() {
                    log::debug!("{} sunk at ({}, {})", ship.kind(), row, col);
                    Ok(GuessResult::Sunk(ship.kind()))
                } else {
                    Ok(GuessResult::Hit)
                }
            }
            None => {
                self.misses.set(row, col)?;
                Ok(GuessResult::Miss)
            }
        }
    }

    /// `true` once every occupied cell has been hit. A board with no ships
    /// placed reports `false`.
    pub fn all_ships_sunk(&self) -> bool {
        let ship_map = self.board.ship_map();
        !ship_map.is_empty() && (ship_map & !self.hits).is_empty()
    }

    /// `true` once the fleet is sunk or the guess budget is spent.
    pub fn is_over(&self) -> bool {
        self.all_ships_sunk() || self.guess_count >= MAX_GUESSES
    }

    /// Win/loss view of the session. A budget-exhausting guess that also
    /// finishes the fleet counts as a win.
    pub fn status(&self) -> GameStatus {
        if self.all_ships_sunk() {
            GameStatus::Won
        } else if self.guess_count >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Defensive copy of the player-visible grid. Always available.
    pub fn cell_grid(&self) -> CellGrid {
        let mut grid: CellGrid = [[CellState::Unknown; GRID_SIZE]; GRID_SIZE];
        for (r, c) in self.hits.iter_set_bits() {
            grid[r][c] = CellState::Hit;
        }
        for (r, c) in self.misses.iter_set_bits() {
            grid[r][c] = CellState::Miss;
        }
        grid
    }

    /// Defensive copy of the ship layout, available once the game is over.
    /// Fails with [`GameError::GameInProgress`] while guesses are still
    /// accepted, so a front end cannot reveal the layout early.
    pub fn ship_grid(&self) -> Result<ShipGrid, GameError> {
        if !self.is_over() {
            return Err(GameError::GameInProgress);
        }
        Ok(self.board.kind_grid())
    }

    /// Layout without the game-over gate. Test-harness hook, not part of
    /// the playing contract.
    #[doc(hidden)]
    pub fn ship_grid_unchecked(&self) -> ShipGrid {
        self.board.kind_grid()
    }

    /// Guesses accepted so far.
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// Fixed guess budget.
    pub fn max_guesses(&self) -> u32 {
        MAX_GUESSES
    }
}

#![cfg(feature = "std")]

//! Text front end: coordinate parsing, grid rendering, the play loop.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::board::ShipGrid;
use crate::common::{CellState, GameStatus, GuessResult};
use crate::config::GRID_SIZE;
use crate::game::{CellGrid, Game};

/// Decode a guess like `A5`: row letter `A`-`J` followed by a column digit
/// `0`-`9`. Case-insensitive, surrounding whitespace ignored.
pub fn parse_guess(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != 2 {
        return Err("enter a row letter and a column digit (e.g., A5)".to_string());
    }
    let row_ch = chars[0].to_ascii_uppercase();
    if !('A'..='J').contains(&row_ch) {
        return Err(format!("row '{}' out of range - use letters A-J", chars[0]));
    }
    let col_ch = chars[1];
    if !col_ch.is_ascii_digit() {
        return Err(format!("column '{}' out of range - use digits 0-9", col_ch));
    }
    let row = (row_ch as u8 - b'A') as usize;
    let col = (col_ch as u8 - b'0') as usize;
    Ok((row, col))
}

fn cell_char(state: CellState) -> char {
    match state {
        CellState::Unknown => '.',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
    }
}

/// Print the player-visible grid with row letters and column digits.
pub fn render_cell_grid(out: &mut impl Write, grid: &CellGrid) -> io::Result<()> {
    write!(out, "   ")?;
    for c in 0..GRID_SIZE {
        write!(out, " {}", c)?;
    }
    writeln!(out)?;
    for r in 0..GRID_SIZE {
        write!(out, " {} ", (b'A' + r as u8) as char)?;
        for c in 0..GRID_SIZE {
            write!(out, " {}", cell_char(grid[r][c]))?;
        }
        writeln!(out)?;
    }
    writeln!(out, "   Legend: X=Hit  o=Miss  .=Unknown")
}

/// Print a revealed layout; ship cells show the kind's letter.
pub fn render_ship_grid(out: &mut impl Write, grid: &ShipGrid) -> io::Result<()> {
    write!(out, "   ")?;
    for c in 0..GRID_SIZE {
        write!(out, " {}", c)?;
    }
    writeln!(out)?;
    for r in 0..GRID_SIZE {
        write!(out, " {} ", (b'A' + r as u8) as char)?;
        for c in 0..GRID_SIZE {
            let ch = match grid[r][c] {
                Some(kind) => kind.symbol(),
                None => '.',
            };
            write!(out, " {}", ch)?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "   Legend: C=Carrier  B=Battleship  S=Submarine  D=Destroyer  P=Patrol Boat"
    )
}

fn show_state<R: Rng>(out: &mut impl Write, game: &Game<R>) -> io::Result<()> {
    writeln!(out, "Guesses: {}/{}", game.guess_count(), game.max_guesses())?;
    render_cell_grid(out, &game.cell_grid())
}

/// Drive a full game over the given reader and writer.
///
/// Starts the game, then reads one guess per line until the game is over or
/// the input is exhausted. Parse and model rejections are reported and
/// re-prompted, matching the recoverable-error contract of the model.
pub fn run<R: Rng>(
    game: &mut Game<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    game.start()?;

    writeln!(out, "Welcome to Battleship!")?;
    writeln!(
        out,
        "Sink all five ships before your {} guesses run out.",
        game.max_guesses()
    )?;
    show_state(out, game)?;

    while !game.is_over() {
        write!(out, "Enter your guess (row letter + column digit, e.g. A5): ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            log::warn!("input closed before the game ended");
            return Ok(());
        }
        let (row, col) = match parse_guess(&line) {
            Ok(coord) => coord,
            Err(msg) => {
                writeln!(out, "Invalid guess: {}", msg)?;
                continue;
            }
        };
        match game.guess(row, col) {
            Ok(GuessResult::Hit) => writeln!(out, "Hit!")?,
            Ok(GuessResult::Sunk(kind)) => writeln!(out, "Hit! You sank the {}!", kind)?,
            Ok(GuessResult::Miss) => writeln!(out, "Miss.")?,
            Err(e) => {
                writeln!(out, "Invalid guess: {}", e)?;
                continue;
            }
        }
        show_state(out, game)?;
    }

    match game.status() {
        GameStatus::Won => writeln!(
            out,
            "You sank the whole fleet in {} guesses!",
            game.guess_count()
        )?,
        GameStatus::Lost => writeln!(out, "Out of guesses. The fleet survives.")?,
        GameStatus::InProgress => {}
    }
    writeln!(out, "The fleet was deployed as follows:")?;
    render_ship_grid(out, &game.ship_grid()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_guess;

    #[test]
    fn parses_upper_and_lower_case() {
        assert_eq!(parse_guess("A0"), Ok((0, 0)));
        assert_eq!(parse_guess("j9"), Ok((9, 9)));
        assert_eq!(parse_guess("c7"), Ok((2, 7)));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_guess("  B3 \n"), Ok((1, 3)));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(parse_guess("").is_err());
        assert!(parse_guess("A").is_err());
        assert!(parse_guess("A55").is_err());
    }

    #[test]
    fn rejects_out_of_range_row_or_column() {
        assert!(parse_guess("K5").is_err());
        assert!(parse_guess("5A").is_err());
        assert!(parse_guess("A!").is_err());
    }
}

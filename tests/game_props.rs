use flotilla::{CellState, Game, GameStatus, GRID_SIZE, MAX_GUESSES, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Play a full game guessing uniformly random cells, ignoring rejections.
fn play_random_game(seed: u64) -> Game<SmallRng> {
    let mut game = Game::new(SmallRng::seed_from_u64(seed));
    game.start().unwrap();
    let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
    while !game.is_over() {
        let r = rng.random_range(0..GRID_SIZE);
        let c = rng.random_range(0..GRID_SIZE);
        let _ = game.guess(r, c);
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn games_end_within_budget(seed in any::<u64>()) {
        let game = play_random_game(seed);
        prop_assert!(game.is_over());
        prop_assert!(game.guess_count() <= MAX_GUESSES);
    }

    #[test]
    fn outcome_matches_the_cell_record(seed in any::<u64>()) {
        let game = play_random_game(seed);
        let cells = game.cell_grid();
        let hits = cells.iter().flatten().filter(|&&s| s == CellState::Hit).count();
        let misses = cells.iter().flatten().filter(|&&s| s == CellState::Miss).count();
        prop_assert_eq!(hits + misses, game.guess_count() as usize);

        match game.status() {
            GameStatus::Won => prop_assert_eq!(hits, TOTAL_SHIP_CELLS),
            GameStatus::Lost => {
                prop_assert_eq!(game.guess_count(), MAX_GUESSES);
                prop_assert!(hits < TOTAL_SHIP_CELLS);
            }
            GameStatus::InProgress => prop_assert!(false, "finished game still in progress"),
        }
    }

    #[test]
    fn revealed_layout_matches_recorded_hits(seed in any::<u64>()) {
        let game = play_random_game(seed);
        let layout = game.ship_grid().unwrap();
        let cells = game.cell_grid();
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                match cells[r][c] {
                    CellState::Hit => prop_assert!(layout[r][c].is_some()),
                    CellState::Miss => prop_assert!(layout[r][c].is_none()),
                    CellState::Unknown => {}
                }
            }
        }
    }
}

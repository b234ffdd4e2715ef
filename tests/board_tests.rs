use flotilla::{Board, GameError, Orientation, ShipKind, GRID_SIZE, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_place_marks_every_cell() {
    let mut board = Board::new();
    board
        .place(ShipKind::Carrier, 2, 3, Orientation::Horizontal)
        .unwrap();

    for c in 3..8 {
        assert_eq!(board.ship_at(2, c), Some(ShipKind::Carrier));
    }
    assert_eq!(board.ship_at(2, 2), None);
    assert_eq!(board.ship_map().count_ones(), ShipKind::Carrier.length());
}

#[test]
fn test_place_rejects_out_of_grid() {
    let mut board = Board::new();
    assert_eq!(
        board.place(ShipKind::Carrier, 0, 6, Orientation::Horizontal),
        Err(GameError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place(ShipKind::Patrol, 9, 0, Orientation::Vertical),
        Err(GameError::ShipOutOfBounds)
    );
    assert!(board.ship_map().is_empty());
}

#[test]
fn test_place_rejects_overlap_and_duplicates() {
    let mut board = Board::new();
    board
        .place(ShipKind::Carrier, 0, 0, Orientation::Horizontal)
        .unwrap();

    assert_eq!(
        board.place(ShipKind::Submarine, 0, 4, Orientation::Vertical),
        Err(GameError::ShipOverlaps)
    );
    assert_eq!(
        board.place(ShipKind::Carrier, 5, 0, Orientation::Horizontal),
        Err(GameError::ShipAlreadyPlaced)
    );
}

#[test]
fn test_random_layout_covers_exactly_the_catalog() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    board.place_all_random(&mut rng).unwrap();

    assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
    let grid = board.kind_grid();
    for kind in ShipKind::ALL {
        let cells = grid.iter().flatten().filter(|&&k| k == Some(kind)).count();
        assert_eq!(cells, kind.length(), "{} cell count", kind);
    }
}

#[test]
fn test_kind_grid_matches_ship_at() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new();
    board.place_all_random(&mut rng).unwrap();

    let grid = board.kind_grid();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            assert_eq!(grid[r][c], board.ship_at(r, c));
        }
    }
}

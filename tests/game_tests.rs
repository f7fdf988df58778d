use battleship_solo::{
    Board, CoordError, Fleet, GameEngine, GameError, GameStatus, GuessResult, Orientation,
    Placement, ShipKind,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Size-4 board with the small ship on A1-A2 and the large ship on C1-C3.
fn fixed_engine() -> GameEngine {
    let fleet = Fleet::for_size(4).unwrap();
    let mut board = Board::new(4);
    board
        .place(Placement::new(ShipKind::Large, 2, 0, Orientation::Horizontal))
        .unwrap();
    board
        .place(Placement::new(ShipKind::Small, 0, 0, Orientation::Horizontal))
        .unwrap();
    GameEngine::from_board(fleet, board)
}

#[test]
fn test_configure_table() {
    let expect = [(4, 1, 1), (5, 2, 1), (6, 2, 2)];
    for (size, small, large) in expect {
        let fleet = GameEngine::configure(&size.to_string()).unwrap();
        assert_eq!(fleet, Fleet { size, small, large });
    }
    assert_eq!(Fleet::for_size(4).unwrap().total_ship_cells(), 5);
    assert_eq!(Fleet::for_size(5).unwrap().total_ship_cells(), 7);
    assert_eq!(Fleet::for_size(6).unwrap().total_ship_cells(), 10);
}

#[test]
fn test_configure_rejects_unsupported_sizes() {
    for raw in ["3", "7", "0", "", "four", "-4", "4.0"] {
        assert_eq!(GameEngine::configure(raw), Err(GameError::InvalidSize), "{raw:?}");
    }
    assert_eq!(GameEngine::configure(" 5\n").unwrap().size, 5);
}

#[test]
fn test_fixed_board_scenario() {
    let mut engine = fixed_engine();
    assert_eq!(engine.status(), GameStatus::InProgress);

    let r = engine.submit_guess("A1").unwrap();
    assert_eq!((r.row, r.col), (0, 0));
    assert_eq!(r.result, GuessResult::Hit(ShipKind::Small));
    assert!(!r.all_sunk);

    let r = engine.submit_guess("a1").unwrap();
    assert_eq!(r.result, GuessResult::AlreadyGuessed);
    assert!(!r.all_sunk);

    assert_eq!(engine.submit_guess("B1").unwrap().result, GuessResult::Miss);

    for raw in ["A2", "C1", "C2"] {
        let r = engine.submit_guess(raw).unwrap();
        assert!(matches!(r.result, GuessResult::Hit(_)));
        assert!(!r.all_sunk);
    }
    let last = engine.submit_guess("C3").unwrap();
    assert_eq!(last.result, GuessResult::Hit(ShipKind::Large));
    assert!(last.all_sunk);
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.guess_count(), 7);

    assert_eq!(engine.submit_guess("D4"), Err(GameError::AlreadyEnded));
    assert_eq!(engine.guess_count(), 7);
}

#[test]
fn test_invalid_guess_leaves_board_untouched() {
    let mut engine = fixed_engine();
    let before = engine.board().clone();
    for (raw, reason) in [
        ("E1", CoordError::RowOutOfRange('E')),
        ("A5", CoordError::ColumnOutOfRange(5)),
        ("A0", CoordError::ColumnOutOfRange(0)),
        ("A", CoordError::MissingColumn),
        ("?", CoordError::InvalidRow('?')),
    ] {
        assert_eq!(
            engine.submit_guess(raw),
            Err(GameError::InvalidCoordinate(reason))
        );
    }
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.guess_count(), 0);
}

#[test]
fn test_start_places_configured_fleet() {
    let mut rng = SmallRng::seed_from_u64(12345);
    for size in [4, 5, 6] {
        let fleet = Fleet::for_size(size).unwrap();
        let engine = GameEngine::start(fleet, &mut rng).unwrap();
        assert_eq!(engine.fleet(), fleet);
        assert_eq!(engine.board().size(), size);
        assert_eq!(engine.board().ship_cells(), fleet.total_ship_cells());
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert!(engine
            .render(false)
            .iter()
            .flatten()
            .all(|g| *g == battleship_solo::BLANK_GLYPH));
    }
}

#[test]
fn test_same_seed_same_board() {
    let fleet = Fleet::for_size(6).unwrap();
    let a = GameEngine::start(fleet, &mut SmallRng::seed_from_u64(9)).unwrap();
    let b = GameEngine::start(fleet, &mut SmallRng::seed_from_u64(9)).unwrap();
    assert_eq!(a.board(), b.board());
}

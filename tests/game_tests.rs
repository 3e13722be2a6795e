use seabattle::{
    BoardError, Coord, Dimensions, Game, GameError, Phase, PlayerId, ShipType, Shot, TurnOutcome,
    TurnRules, STANDARD_FLEET,
};

static TINY_FLEET: [ShipType; 2] = [ShipType::new("cutter", 2), ShipType::new("dinghy", 1)];

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y)
}

fn tiny_game(rules: TurnRules) -> Game {
    let mut game = Game::new(Dimensions::STANDARD, &TINY_FLEET, rules);
    for player in PlayerId::BOTH {
        game.place_ship(player, c(0, 0), c(1, 0)).unwrap();
        game.place_ship(player, c(5, 5), c(5, 5)).unwrap();
    }
    game
}

#[test]
fn test_player_ids() {
    assert_eq!(PlayerId::First.opponent(), PlayerId::Second);
    assert_eq!(PlayerId::Second.opponent(), PlayerId::First);
    assert_eq!(PlayerId::Second.index(), 1);
}

#[test]
fn test_placing_until_both_fleets_done() {
    let mut game = Game::new(Dimensions::STANDARD, &TINY_FLEET, TurnRules::standard());
    assert_eq!(game.phase(), Phase::Placing);
    assert_eq!(game.next_ship(PlayerId::First), Some(TINY_FLEET[0]));

    game.place_ship(PlayerId::First, c(0, 0), c(1, 0)).unwrap();
    game.place_ship(PlayerId::First, c(9, 9), c(9, 9)).unwrap();
    assert_eq!(game.next_ship(PlayerId::First), None);
    assert_eq!(game.phase(), Phase::Placing);
    assert_eq!(
        game.fire(c(0, 0)).unwrap_err(),
        GameError::WrongPhase(Phase::Placing)
    );
    assert_eq!(
        game.place_ship(PlayerId::First, c(4, 4), c(4, 4)).unwrap_err(),
        GameError::FleetComplete(PlayerId::First)
    );

    game.place_ship(PlayerId::Second, c(3, 3), c(3, 4)).unwrap();
    game.place_ship(PlayerId::Second, c(7, 7), c(7, 7)).unwrap();
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.board(PlayerId::Second).ship_cells(), 3);
    assert_eq!(
        game.place_ship(PlayerId::Second, c(0, 9), c(0, 9)).unwrap_err(),
        GameError::WrongPhase(Phase::Playing)
    );
}

#[test]
fn test_wrong_length_and_rejected_placement_keep_the_entry() {
    let mut game = Game::new(Dimensions::STANDARD, &TINY_FLEET, TurnRules::standard());
    assert_eq!(
        game.place_ship(PlayerId::First, c(0, 0), c(2, 0)).unwrap_err(),
        GameError::WrongLength { expected: 2, got: 3 }
    );
    game.place_ship(PlayerId::First, c(0, 0), c(1, 0)).unwrap();
    assert_eq!(
        game.place_ship(PlayerId::First, c(2, 1), c(2, 1)).unwrap_err(),
        GameError::Board(BoardError::TooClose)
    );
    assert_eq!(game.next_ship(PlayerId::First), Some(TINY_FLEET[1]));
}

#[test]
fn test_standard_turns() {
    let mut game = tiny_game(TurnRules::standard());
    assert_eq!(game.current_turn(), PlayerId::First);

    // First hits the second player's fleet and goes again
    let report = game.fire(c(0, 0)).unwrap();
    assert_eq!(report.shot, Shot::Hit);
    assert_eq!(game.current_turn(), PlayerId::First);
    assert_eq!(game.board(PlayerId::Second).remaining_ship_cells(), 2);
    assert_eq!(game.board(PlayerId::First).remaining_ship_cells(), 3);

    // a miss hands over
    game.fire(c(9, 9)).unwrap();
    assert_eq!(game.current_turn(), PlayerId::Second);
    assert_eq!(game.target_board().remaining_ship_cells(), 3);
}

#[test]
fn test_win_moves_to_game_over() {
    let mut game = tiny_game(TurnRules::standard());
    game.fire(c(0, 0)).unwrap();
    game.fire(c(1, 0)).unwrap();
    let last = game.fire(c(5, 5)).unwrap();
    assert_eq!(last.outcome, TurnOutcome::GameOver);
    assert_eq!(
        game.phase(),
        Phase::GameOver {
            winner: PlayerId::First
        }
    );
    assert!(matches!(game.fire(c(9, 9)), Err(GameError::WrongPhase(_))));
}

#[test]
fn test_second_player_can_win() {
    let mut game = tiny_game(TurnRules::alternating());
    for (x, y) in [(9, 9), (0, 0), (9, 8), (1, 0), (9, 7), (5, 5)] {
        game.fire(c(x, y)).unwrap();
    }
    assert_eq!(
        game.phase(),
        Phase::GameOver {
            winner: PlayerId::Second
        }
    );
    assert_eq!(game.board(PlayerId::Second).remaining_ship_cells(), 3);
}

#[test]
fn test_solo_rules_keep_first_player() {
    let mut game = tiny_game(TurnRules::solo());
    assert_eq!(game.rules(), TurnRules::solo());
    for (x, y) in [(9, 9), (8, 8), (0, 0)] {
        game.fire(c(x, y)).unwrap();
        assert_eq!(game.current_turn(), PlayerId::First);
    }
}

#[test]
fn test_standard_fleet_totals() {
    assert_eq!(STANDARD_FLEET.len(), 10);
    assert_eq!(seabattle::fleet_cells(&STANDARD_FLEET), seabattle::TOTAL_SHIP_CELLS);
    assert_eq!(seabattle::TOTAL_SHIP_CELLS, 20);
    let count = |len| STANDARD_FLEET.iter().filter(|s| s.length() == len).count();
    assert_eq!((count(4), count(3), count(2), count(1)), (1, 2, 3, 4));
}

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{Board, Coord, Orientation, ShipType, STANDARD_FLEET, TOTAL_SHIP_CELLS};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    loop {
        let mut board = Board::standard();
        let complete = STANDARD_FLEET.iter().all(|&ship| {
            match board.random_placement(&mut rng, ship) {
                Ok((origin, orient)) => board.place_ship(ship, origin, orient).is_ok(),
                Err(_) => false,
            }
        });
        if complete {
            return board;
        }
    }
}

fn touches(a: (Coord, Coord), b: (Coord, Coord)) -> bool {
    let (a0, a1) = a;
    let (b0, b1) = b;
    a0.x <= b1.x + 1 && b0.x <= a1.x + 1 && a0.y <= b1.y + 1 && b0.y <= a1.y + 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn remaining_counts_first_hits_only(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..10usize, 0..10usize), 0..150),
    ) {
        let mut board = random_board(seed);
        prop_assert_eq!(board.remaining_ship_cells(), TOTAL_SHIP_CELLS);
        for (x, y) in shots {
            let at = Coord::new(x, y);
            let before = board.cell(at).unwrap();
            let remaining = board.remaining_ship_cells();
            board.fire(at).unwrap();
            let expected = if before.has_ship && !before.was_fired { remaining - 1 } else { remaining };
            prop_assert_eq!(board.remaining_ship_cells(), expected);
        }
    }

    #[test]
    fn all_sunk_iff_every_ship_cell_fired(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..10usize, 0..10usize), 0..300),
    ) {
        let mut board = random_board(seed);
        for (x, y) in shots {
            board.fire(Coord::new(x, y)).unwrap();
        }
        let every_ship_fired = board
            .ship_map()
            .iter_set_bits()
            .all(|(x, y)| board.fired_map().get(x, y).unwrap());
        prop_assert_eq!(board.all_sunk(), every_ship_fired);
    }

    #[test]
    fn rejected_placement_is_atomic(
        seed in any::<u64>(),
        x0 in 0..12usize, y0 in 0..12usize, x1 in 0..12usize, y1 in 0..12usize,
    ) {
        let mut board = random_board(seed);
        let before = board;
        if board.try_place_ship(Coord::new(x0, y0), Coord::new(x1, y1)).is_err() {
            prop_assert_eq!(board, before);
        } else {
            prop_assert!(board.ship_cells() > before.ship_cells());
        }
    }

    #[test]
    fn placed_ships_never_touch(
        attempts in prop::collection::vec((0..10usize, 0..10usize, any::<bool>(), 1..5usize), 1..60),
    ) {
        let mut board = Board::standard();
        let mut placed: Vec<(Coord, Coord)> = Vec::new();
        for (x, y, horizontal, len) in attempts {
            let orient = if horizontal { Orientation::Horizontal } else { Orientation::Vertical };
            let (start, end) = ShipType::new("probe", len).span(Coord::new(x, y), orient);
            if board.try_place_ship(start, end).is_ok() {
                for &other in &placed {
                    prop_assert!(!touches((start, end), other));
                }
                placed.push((start, end));
            }
        }
        let cells: usize = placed
            .iter()
            .map(|(s, e)| (e.x - s.x + 1) * (e.y - s.y + 1))
            .sum();
        prop_assert_eq!(board.ship_cells(), cells);
    }

    #[test]
    fn fire_twice_equals_fire_once(seed in any::<u64>(), x in 0..10usize, y in 0..10usize) {
        let mut once = random_board(seed);
        once.fire(Coord::new(x, y)).unwrap();
        let mut twice = once;
        twice.fire(Coord::new(x, y)).unwrap();
        prop_assert_eq!(once, twice);
    }
}

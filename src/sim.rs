#![cfg(feature = "std")]

//! Headless games between two random shooters.

use rand::Rng;

use crate::{
    common::{BoardError, Coord},
    config::Dimensions,
    game::{Game, GameError, Phase, PlayerId},
    ship::ShipType,
    turn::{Shot, TurnRules},
};

/// Outcome of a simulated game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SimSummary {
    pub winner: PlayerId,
    pub shots: [usize; 2],
    pub hits: [usize; 2],
}

/// Play a full game with random fleets and shots drawn from each target's unfired cells.
pub fn simulate<R: Rng>(
    dims: Dimensions,
    fleet: &'static [ShipType],
    rules: TurnRules,
    rng: &mut R,
) -> Result<SimSummary, GameError> {
    let mut game = random_setup(dims, fleet, rules, rng)?;

    let mut shots = [0usize; 2];
    let mut hits = [0usize; 2];
    loop {
        if let Phase::GameOver { winner } = game.phase() {
            log::info!("simulated game won by {:?} after {:?} shots", winner, shots);
            return Ok(SimSummary { winner, shots, hits });
        }
        let shooter = game.current_turn();
        let target = game.target_board();
        let open: Vec<Coord> = (!target.fired_map())
            .iter_set_bits()
            .map(Coord::from)
            .collect();
        // never empty: a target with every cell fired on is sunk
        let at = open[rng.random_range(0..open.len())];
        let report = game.fire(at)?;
        shots[shooter.index()] += 1;
        if report.shot == Shot::Hit {
            hits[shooter.index()] += 1;
        }
    }
}

/// Both fleets placed at random. A fleet that paints itself into a corner is started over.
pub fn random_setup<R: Rng>(
    dims: Dimensions,
    fleet: &'static [ShipType],
    rules: TurnRules,
    rng: &mut R,
) -> Result<Game, GameError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        let mut game = Game::new(dims, fleet, rules);
        match place_random_fleets(&mut game, rng) {
            Ok(()) => return Ok(game),
            Err(GameError::Board(BoardError::UnableToPlaceShip)) if attempt < SETUP_ATTEMPTS => {
                log::debug!("random setup attempt {} failed, retrying", attempt);
            }
            Err(e) => return Err(e),
        }
    }
}

const SETUP_ATTEMPTS: usize = 20;

fn place_random_fleets<R: Rng>(game: &mut Game, rng: &mut R) -> Result<(), GameError> {
    for player in PlayerId::BOTH {
        while let Some(ship) = game.next_ship(player) {
            let (origin, orientation) = game.board(player).random_placement(rng, ship)?;
            let (start, end) = ship.span(origin, orientation);
            game.place_ship(player, start, end)?;
        }
    }
    Ok(())
}

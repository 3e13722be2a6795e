use core::fmt;

use crate::{
    board::Board,
    common::{BoardError, Coord},
    config::Dimensions,
    ship::{run_length, ShipType},
    turn::{ShotReport, TurnEngine, TurnOutcome, TurnRules},
};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::First, PlayerId::Second];

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }
}

/// Current phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// At least one fleet is not fully placed.
    Placing,
    /// Both fleets are placed and shots are exchanged.
    Playing,
    /// `winner` sank the opponent's whole fleet.
    GameOver { winner: PlayerId },
}

/// Errors returned by [`Game`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// The operation does not belong to the current phase.
    WrongPhase(Phase),
    /// The player has already placed the whole fleet.
    FleetComplete(PlayerId),
    /// The run does not match the length of the ship being placed.
    WrongLength { expected: usize, got: usize },
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::WrongPhase(p) => write!(f, "Not allowed while {:?}", p),
            GameError::FleetComplete(p) => write!(f, "{:?} has already placed every ship", p),
            GameError::WrongLength { expected, got } => {
                write!(f, "Ship needs {} cells, run covers {}", expected, got)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// A two-player session: each player's own fleet board plus the turn flag.
#[derive(Debug, Clone)]
pub struct Game {
    fleet: &'static [ShipType],
    boards: [Board; 2],
    placed: [usize; 2],
    turn: PlayerId,
    engine: TurnEngine,
    phase: Phase,
}

impl Game {
    /// A fresh session in the `Placing` phase; `PlayerId::First` shoots first.
    pub fn new(dims: Dimensions, fleet: &'static [ShipType], rules: TurnRules) -> Self {
        let mut game = Self {
            fleet,
            boards: [Board::new(dims), Board::new(dims)],
            placed: [0; 2],
            turn: PlayerId::First,
            engine: TurnEngine::new(rules),
            phase: Phase::Placing,
        };
        game.check_fleets_complete();
        game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn fleet(&self) -> &'static [ShipType] {
        self.fleet
    }

    /// Player whose opponent board is the legal fire target.
    pub fn current_turn(&self) -> PlayerId {
        self.turn
    }

    pub fn rules(&self) -> TurnRules {
        self.engine.rules()
    }

    /// The board holding `player`'s own fleet.
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player.index()]
    }

    /// The board the current player fires at.
    pub fn target_board(&self) -> &Board {
        self.board(self.turn.opponent())
    }

    /// Next fleet entry `player` still has to place.
    pub fn next_ship(&self, player: PlayerId) -> Option<ShipType> {
        self.fleet.get(self.placed[player.index()]).copied()
    }

    /// Place `player`'s next fleet entry over the run `start..=end`.
    pub fn place_ship(
        &mut self,
        player: PlayerId,
        start: Coord,
        end: Coord,
    ) -> Result<ShipType, GameError> {
        if self.phase != Phase::Placing {
            return Err(GameError::WrongPhase(self.phase));
        }
        let ship = self
            .next_ship(player)
            .ok_or(GameError::FleetComplete(player))?;
        let got = run_length(start, end).ok_or(BoardError::NotStraight)?;
        if got != ship.length() {
            return Err(GameError::WrongLength {
                expected: ship.length(),
                got,
            });
        }
        self.boards[player.index()].try_place_ship(start, end)?;
        self.placed[player.index()] += 1;
        log::debug!("{:?} placed {} at {:?}..{:?}", player, ship.name(), start, end);
        self.check_fleets_complete();
        Ok(ship)
    }

    fn check_fleets_complete(&mut self) {
        if self.phase == Phase::Placing && self.placed.iter().all(|&n| n == self.fleet.len()) {
            log::info!("both fleets placed, firing starts");
            self.phase = Phase::Playing;
        }
    }

    /// Fire at `at` on the current player's target board.
    pub fn fire(&mut self, at: Coord) -> Result<ShotReport, GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::WrongPhase(self.phase));
        }
        let shooter = self.turn;
        let target = &mut self.boards[shooter.opponent().index()];
        let report = self.engine.resolve_shot(target, at)?;
        match report.outcome {
            TurnOutcome::GameOver => {
                log::info!("{:?} wins", shooter);
                self.phase = Phase::GameOver { winner: shooter };
            }
            TurnOutcome::PassTurn => self.turn = shooter.opponent(),
            TurnOutcome::KeepTurn => {}
        }
        Ok(report)
    }
}

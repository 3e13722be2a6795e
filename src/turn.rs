//! Shot resolution and the turn-passing rule.

use crate::board::Board;
use crate::common::{BoardError, Coord};

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shot {
    /// The cell holds a ship.
    Hit,
    /// The cell is water.
    Miss,
}

/// What happens after a shot has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    /// The shooter fires again.
    KeepTurn,
    /// Control passes to the opponent.
    PassTurn,
    /// The target board is fully sunk.
    GameOver,
}

/// Everything the driver needs to know about a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shot: Shot,
    /// The cell had already been fired on before this shot.
    pub repeated: bool,
    pub outcome: TurnOutcome,
}

impl ShotReport {
    pub fn game_ended(&self) -> bool {
        self.outcome == TurnOutcome::GameOver
    }
}

/// Turn-passing policy.
///
/// Flags are checked in order: `never_switch_turn`, `always_switch_turn`,
/// then `auto_replay_on_hit`. A shot that sinks the last ship always ends
/// the game regardless of the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRules {
    /// A hit lets the shooter fire again.
    pub auto_replay_on_hit: bool,
    /// Every shot passes the turn, hit or miss.
    pub always_switch_turn: bool,
    /// No shot ever passes the turn (single-player development play).
    pub never_switch_turn: bool,
}

impl TurnRules {
    /// Hit keeps the turn, miss passes it.
    pub const fn standard() -> Self {
        Self {
            auto_replay_on_hit: true,
            always_switch_turn: false,
            never_switch_turn: false,
        }
    }

    /// Players strictly alternate.
    pub const fn alternating() -> Self {
        Self {
            auto_replay_on_hit: false,
            always_switch_turn: true,
            never_switch_turn: false,
        }
    }

    /// The same player keeps shooting until the game ends.
    pub const fn solo() -> Self {
        Self {
            auto_replay_on_hit: true,
            always_switch_turn: false,
            never_switch_turn: true,
        }
    }

    fn after(&self, shot: Shot) -> TurnOutcome {
        if self.never_switch_turn {
            TurnOutcome::KeepTurn
        } else if self.always_switch_turn {
            TurnOutcome::PassTurn
        } else if shot == Shot::Hit && self.auto_replay_on_hit {
            TurnOutcome::KeepTurn
        } else {
            TurnOutcome::PassTurn
        }
    }
}

impl Default for TurnRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Stateless shot resolver parameterised by [`TurnRules`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnEngine {
    rules: TurnRules,
}

impl TurnEngine {
    pub fn new(rules: TurnRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> TurnRules {
        self.rules
    }

    /// Fire at `at` on `target` and decide what happens next.
    pub fn resolve_shot(&self, target: &mut Board, at: Coord) -> Result<ShotReport, BoardError> {
        let before = target.cell(at).ok_or(BoardError::OutOfBounds)?;
        target.fire(at)?;
        let shot = if before.has_ship { Shot::Hit } else { Shot::Miss };
        let outcome = if target.all_sunk() {
            TurnOutcome::GameOver
        } else {
            self.rules.after(shot)
        };
        log::debug!("shot at {:?}: {:?}, {:?}", at, shot, outcome);
        Ok(ShotReport {
            shot,
            repeated: before.was_fired,
            outcome,
        })
    }
}

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::ship::ShipType;

/// Width and height of a board in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// The classic 10×10 board.
    pub const STANDARD: Dimensions = Dimensions {
        width: 10,
        height: 10,
    };

    /// Validated dimensions; every cell must fit the `u128` cell storage.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let fits = width
            .checked_mul(height)
            .is_some_and(|cells| cells <= BitBoard::<u128>::CAPACITY);
        if width == 0 || height == 0 || !fits {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> usize {
        self.width * self.height
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

pub const NUM_SHIPS: usize = 10;
pub const STANDARD_FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("battleship", 4),
    ShipType::new("destroyer 1", 3),
    ShipType::new("destroyer 2", 3),
    ShipType::new("cruiser 1", 2),
    ShipType::new("cruiser 2", 2),
    ShipType::new("cruiser 3", 2),
    ShipType::new("sailboat 1", 1),
    ShipType::new("sailboat 2", 1),
    ShipType::new("sailboat 3", 1),
    ShipType::new("sailboat 4", 1),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Sum of the ship lengths of `fleet`.
pub fn fleet_cells(fleet: &[ShipType]) -> usize {
    fleet.iter().map(|s| s.length()).sum()
}

#[cfg(feature = "std")]
pub use session::*;

#[cfg(feature = "std")]
mod session {
    use core::fmt;
    use std::string::String;
    use std::time::Duration;

    use super::{Dimensions, STANDARD_FLEET};
    use crate::input::Alphabet;
    use crate::ship::ShipType;
    use crate::turn::TurnRules;

    /// Problems found by [`GameConfig::validate`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ConfigError {
        /// The alphabet has fewer column letters than the board is wide.
        AlphabetTooShort { alphabet: &'static str, letters: usize, width: usize },
        /// A ship cannot fit in either direction.
        ShipTooLong { ship: &'static str, length: usize },
        /// A player name is blank.
        EmptyName,
    }

    impl fmt::Display for ConfigError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                ConfigError::AlphabetTooShort { alphabet, letters, width } => write!(
                    f,
                    "alphabet {} has {} column letters but the board is {} wide",
                    alphabet, letters, width
                ),
                ConfigError::ShipTooLong { ship, length } => {
                    write!(f, "{} (length {}) does not fit on the board", ship, length)
                }
                ConfigError::EmptyName => write!(f, "player names must not be empty"),
            }
        }
    }

    impl std::error::Error for ConfigError {}

    /// Everything a session needs, passed explicitly into the driver.
    #[derive(Debug, Clone)]
    pub struct GameConfig {
        pub dims: Dimensions,
        pub fleet: &'static [ShipType],
        pub alphabet: Alphabet,
        /// Random placement, targets shown openly, turn never passes.
        pub dev_mode: bool,
        pub rules: TurnRules,
        pub names: [String; 2],
        /// Emit the terminal clear sequence before each frame.
        pub clear_screen: bool,
        /// How long notices such as `BAD INPUT` stay visible.
        pub notice_pause: Duration,
        pub seed: Option<u64>,
    }

    impl Default for GameConfig {
        fn default() -> Self {
            Self {
                dims: Dimensions::STANDARD,
                fleet: &STANDARD_FLEET,
                alphabet: Alphabet::LATIN,
                dev_mode: false,
                rules: TurnRules::standard(),
                names: [String::from("Player 1"), String::from("Player 2")],
                clear_screen: true,
                notice_pause: Duration::from_secs(1),
                seed: None,
            }
        }
    }

    impl GameConfig {
        /// Rules in effect: dev mode never passes the turn.
        pub fn turn_rules(&self) -> TurnRules {
            if self.dev_mode {
                TurnRules::solo()
            } else {
                self.rules
            }
        }

        pub fn name(&self, player: crate::game::PlayerId) -> &str {
            &self.names[player.index()]
        }

        /// Check that the pieces of the configuration agree with each other.
        pub fn validate(&self) -> Result<(), ConfigError> {
            let letters = self.alphabet.columns().len();
            if letters < self.dims.width() {
                return Err(ConfigError::AlphabetTooShort {
                    alphabet: self.alphabet.name(),
                    letters,
                    width: self.dims.width(),
                });
            }
            let longest_side = self.dims.width().max(self.dims.height());
            if let Some(ship) = self.fleet.iter().find(|s| s.length() > longest_side) {
                return Err(ConfigError::ShipTooLong {
                    ship: ship.name(),
                    length: ship.length(),
                });
            }
            if self.names.iter().any(|n| n.trim().is_empty()) {
                return Err(ConfigError::EmptyName);
            }
            Ok(())
        }
    }
}

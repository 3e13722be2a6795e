//! Common types for the game core: coordinates and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A cell on a board, `x` is the column and `y` the row, both zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Board dimensions are zero or do not fit the cell storage.
    InvalidDimensions { width: usize, height: usize },
    /// A cell of the run lies outside the board.
    OutOfBounds,
    /// A cell of the run already holds a ship.
    Overlap,
    /// The run touches another ship, including at a corner.
    TooClose,
    /// The run is wider than one cell in both axes.
    NotStraight,
    /// Random placement gave up without finding a legal position.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "Board dimensions {}x{} are not supported", width, height)
            }
            BoardError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::Overlap => write!(f, "Ship placement overlaps with another ship"),
            BoardError::TooClose => write!(f, "Ship placement touches another ship"),
            BoardError::NotStraight => write!(f, "Ship placement is not a straight line"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

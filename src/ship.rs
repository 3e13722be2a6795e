//! Ship definitions and the straight runs they occupy.

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends to the right of the origin.
    Horizontal,
    /// Extends downwards from the origin.
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type. Lengths below one are rounded up to one.
    pub const fn new(name: &'static str, length: usize) -> Self {
        let length = if length == 0 { 1 } else { length };
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// First and last cell of this ship laid out from `origin`.
    ///
    /// The end cell may fall off the board; the board rejects such runs.
    pub fn span(&self, origin: Coord, orientation: Orientation) -> (Coord, Coord) {
        let tail = self.length - 1;
        let end = match orientation {
            Orientation::Horizontal => Coord::new(origin.x.saturating_add(tail), origin.y),
            Orientation::Vertical => Coord::new(origin.x, origin.y.saturating_add(tail)),
        };
        (origin, end)
    }
}

/// Number of cells covered by the run `start..=end`, if it is straight.
pub fn run_length(start: Coord, end: Coord) -> Option<usize> {
    let dx = start.x.abs_diff(end.x);
    let dy = start.y.abs_diff(end.y);
    match (dx, dy) {
        (0, d) | (d, 0) => Some(d + 1),
        _ => None,
    }
}

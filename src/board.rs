//! One player's grid: ship cells, fired cells, placement and shot tracking.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coord};
use crate::config::Dimensions;
use crate::ship::{run_length, Orientation, ShipType};
use core::fmt;
use rand::Rng;

type BB = BitBoard<u128>;

/// The two independent facts recorded for every cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub has_ship: bool,
    pub was_fired: bool,
}

/// Grid state for one player.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    ships: BB,
    fired: BB,
}

impl Board {
    /// Create an empty board (no ships, nothing fired).
    pub fn new(dims: Dimensions) -> Self {
        let empty = BB::new(dims.width(), dims.height());
        Board {
            dims,
            ships: empty,
            fired: empty,
        }
    }

    /// An empty board of the standard 10×10 size.
    pub fn standard() -> Self {
        Self::new(Dimensions::STANDARD)
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Occupancy mask of all ship cells.
    pub fn ship_map(&self) -> BB {
        self.ships
    }

    /// Mask of every cell that has been fired on.
    pub fn fired_map(&self) -> BB {
        self.fired
    }

    /// Cell state at `at`, or `None` when off the board.
    pub fn cell(&self, at: Coord) -> Option<Cell> {
        Some(Cell {
            has_ship: self.ships.get(at.x, at.y).ok()?,
            was_fired: self.fired.get(at.x, at.y).ok()?,
        })
    }

    fn on_board(&self, x: i32, y: i32) -> Option<Coord> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.dims.width() && y < self.dims.height()).then_some(Coord::new(x, y))
    }

    /// `true` if the cell is off the board or holds no ship.
    pub fn is_water(&self, x: i32, y: i32) -> bool {
        !self.is_ship(x, y)
    }

    /// `true` only for an on-board cell holding a ship.
    pub fn is_ship(&self, x: i32, y: i32) -> bool {
        self.on_board(x, y)
            .and_then(|c| self.cell(c))
            .is_some_and(|c| c.has_ship)
    }

    /// `true` only for an on-board cell that has been fired on.
    pub fn was_fired(&self, x: i32, y: i32) -> bool {
        self.on_board(x, y)
            .and_then(|c| self.cell(c))
            .is_some_and(|c| c.was_fired)
    }

    /// Place a ship over the straight run `start..=end`.
    ///
    /// Every cell of the run must be on the board and free, and the run's
    /// one-cell halo (diagonals included) must be water. The board is only
    /// modified when all checks pass.
    pub fn try_place_ship(&mut self, start: Coord, end: Coord) -> Result<(), BoardError> {
        if run_length(start, end).is_none() {
            return Err(BoardError::NotStraight);
        }
        let (x0, x1) = (start.x.min(end.x), start.x.max(end.x));
        let (y0, y1) = (start.y.min(end.y), start.y.max(end.y));

        let mut run = BB::new(self.dims.width(), self.dims.height());
        for y in y0..=y1 {
            for x in x0..=x1 {
                if x >= self.dims.width() || y >= self.dims.height() {
                    return Err(BoardError::OutOfBounds);
                }
                if self.ships.get(x, y)? {
                    return Err(BoardError::Overlap);
                }
                run.set(x, y)?;
            }
        }

        // The halo may step one cell off the board; off-board counts as water.
        let (hx0, hx1) = (x0 as i32 - 1, x1 as i32 + 1);
        let (hy0, hy1) = (y0 as i32 - 1, y1 as i32 + 1);
        for y in hy0..=hy1 {
            for x in hx0..=hx1 {
                if !self.is_water(x, y) {
                    log::debug!("placement {:?}..{:?} touches ship at ({}, {})", start, end, x, y);
                    return Err(BoardError::TooClose);
                }
            }
        }

        self.ships = self.ships | run;
        Ok(())
    }

    /// Place `ship` from `origin` in the given orientation.
    pub fn place_ship(
        &mut self,
        ship: ShipType,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let (start, end) = ship.span(origin, orientation);
        self.try_place_ship(start, end)
    }

    /// Returns a random legal `(origin, orientation)` for `ship`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship: ShipType,
    ) -> Result<(Coord, Orientation), BoardError> {
        let (w, h) = (self.dims.width(), self.dims.height());
        for _ in 0..100 {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (span_w, span_h) = match orient {
                Orientation::Horizontal => (ship.length(), 1),
                Orientation::Vertical => (1, ship.length()),
            };
            if span_w > w || span_h > h {
                continue;
            }
            let x = rng.random_range(0..=w - span_w);
            let y = rng.random_range(0..=h - span_h);
            let origin = Coord::new(x, y);
            // dry run on a copy so the board itself stays untouched
            let mut candidate = *self;
            if candidate.place_ship(ship, origin, orient).is_ok() {
                return Ok((origin, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Mark the cell at `at` as fired on. Firing twice is a no-op.
    pub fn fire(&mut self, at: Coord) -> Result<(), BoardError> {
        if at.x >= self.dims.width() || at.y >= self.dims.height() {
            return Err(BoardError::OutOfBounds);
        }
        self.fired.set(at.x, at.y)?;
        Ok(())
    }

    /// Ship cells that have not been fired on yet.
    pub fn remaining_ship_cells(&self) -> usize {
        (self.ships & !self.fired).count_ones()
    }

    /// Total ship cells placed on the board.
    pub fn ship_cells(&self) -> usize {
        self.ships.count_ones()
    }

    /// Returns `true` when every ship cell has been fired on.
    pub fn all_sunk(&self) -> bool {
        self.remaining_ship_cells() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  dims: {:?},\n  ships: {:?},\n  fired: {:?}\n}}",
            self.dims, self.ships, self.fired
        )
    }
}

#![cfg(feature = "std")]

//! Fixed-size character screen and board rendering.

use std::io::{self, Write};
use std::fmt;
use std::string::String;

use crate::{board::Board, common::Coord, config::Dimensions, input::Alphabet};

/// Terminal sequence that homes the cursor and clears the screen.
pub const CLEAR_SEQUENCE: &str = "\x1b[H\x1b[2J";

/// What a single board cell looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Water,
    Miss,
    Hit,
    /// Unfired ship cell, only visible when ships are revealed.
    Ship,
    /// Unfired cell diagonally next to a hit ship cell.
    NearHit,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Water => ' ',
            Glyph::Miss => '.',
            Glyph::Hit => 'X',
            Glyph::Ship => 'B',
            Glyph::NearHit => '~',
        }
    }
}

/// Glyph for the cell at `at`; `reveal` shows unfired ship cells.
pub fn glyph(board: &Board, at: Coord, reveal: bool) -> Glyph {
    let cell = board.cell(at).unwrap_or_default();
    if cell.was_fired {
        return if cell.has_ship { Glyph::Hit } else { Glyph::Miss };
    }
    let (x, y) = (at.x as i32, at.y as i32);
    let near_hit = [(-1, -1), (1, 1), (-1, 1), (1, -1)]
        .iter()
        .any(|(dx, dy)| board.was_fired(x + dx, y + dy) && board.is_ship(x + dx, y + dy));
    if near_hit {
        Glyph::NearHit
    } else if reveal && cell.has_ship {
        Glyph::Ship
    } else {
        Glyph::Water
    }
}

/// A fixed-size grid of characters redrawn as a whole every frame.
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    cells: Vec<Vec<char>>,
}

impl Screen {
    pub const MIN_ROWS: usize = 25;
    pub const MIN_COLS: usize = 80;

    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![' '; cols]; rows],
        }
    }

    /// A screen large enough for `boards` boards of `dims` side by side.
    pub fn for_boards(dims: Dimensions, boards: usize) -> Self {
        let rows = (2 * dims.height() + 5).max(Self::MIN_ROWS);
        let cols = (boards * Self::board_stride(dims)).max(Self::MIN_COLS);
        Self::new(rows, cols)
    }

    /// Horizontal distance between two boards rendered side by side.
    pub fn board_stride(dims: Dimensions) -> usize {
        (dims.width() * 3 + 6).max(40)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(' ');
        }
    }

    /// Character at (x, y), `None` outside the screen.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y)?.get(x).copied()
    }

    /// Writes `ch` at (x, y); anything outside the screen is dropped.
    pub fn put(&mut self, x: usize, y: usize, ch: char) {
        if let Some(slot) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = ch;
        }
    }

    pub fn write_str(&mut self, x: usize, y: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i, y, ch);
        }
    }

    /// Draws `board` with its top-left corner at (`x_off`, `y_off`).
    ///
    /// Column letters run along the top, row numbers down the left, and a
    /// caption with the count of unhit ship cells sits two lines below.
    pub fn render_board(
        &mut self,
        board: &Board,
        alphabet: &Alphabet,
        x_off: usize,
        y_off: usize,
        reveal: bool,
        caption: &str,
    ) {
        let dims = board.dims();
        let mut last_y = y_off;
        for y in 0..dims.height() {
            let sy = y_off + y * 2 + 1;
            self.write_str(x_off, sy, &y.to_string());
            for x in 0..dims.width() {
                let sx = x_off + (x + 1) * 3;
                self.put(sx, y_off, alphabet.column_label(x).unwrap_or('?'));
                self.put(sx, sy, glyph(board, Coord::new(x, y), reveal).symbol());
                self.put(sx + 1, sy, '|');
                self.put(sx, sy + 1, '-');
                self.put(sx - 1, sy + 1, '-');
                self.put(sx + 1, sy + 1, '+');
            }
            last_y = sy + 1;
        }
        let status = format!(
            "{}: ship cells remaining: {}",
            caption,
            board.remaining_ship_cells()
        );
        self.write_str(x_off, last_y + 2, &status);
    }

    /// Writes the screen to `out`, optionally clearing the terminal first.
    pub fn print<W: Write>(&self, out: &mut W, clear: bool) -> io::Result<()> {
        if clear {
            out.write_all(CLEAR_SEQUENCE.as_bytes())?;
        }
        write!(out, "{}", self)?;
        out.flush()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Screen {}x{}:\n{}", self.cols(), self.rows(), self)
    }
}

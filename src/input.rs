//! Parsing of typed coordinate commands.
//!
//! A command is a column letter, a zero-based row number and, for ship
//! placement, an orientation symbol: `B3` targets column B row 3, `B3D`
//! places a ship from B3 downwards. Letters are matched case-insensitively
//! against the session's [`Alphabet`].

use core::fmt;

use crate::common::Coord;
use crate::config::Dimensions;
use crate::ship::{Orientation, ShipType};

/// Column letters and orientation symbols used for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    name: &'static str,
    columns: &'static [char],
    horizontal: char,
    vertical: char,
}

impl Alphabet {
    pub const LATIN: Alphabet = Alphabet {
        name: "latin",
        columns: &[
            'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
            'R', 'S', 'T',
        ],
        horizontal: 'R',
        vertical: 'D',
    };

    /// Traditional Russian columns (no Й), `П` for "вправо" and `В` for "вниз".
    pub const CYRILLIC: Alphabet = Alphabet {
        name: "cyrillic",
        columns: &[
            'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ж', 'З', 'И', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
            'Т', 'У', 'Ф',
        ],
        horizontal: 'П',
        vertical: 'В',
    };

    pub const fn new(
        name: &'static str,
        columns: &'static [char],
        horizontal: char,
        vertical: char,
    ) -> Self {
        Self {
            name,
            columns,
            horizontal,
            vertical,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn columns(&self) -> &'static [char] {
        self.columns
    }

    /// Letter shown above column `x`.
    pub fn column_label(&self, x: usize) -> Option<char> {
        self.columns.get(x).copied()
    }

    /// Column index of `letter`, ignoring case.
    pub fn column_index(&self, letter: char) -> Option<usize> {
        let letter = upper(letter);
        self.columns.iter().position(|&c| c == letter)
    }

    pub fn orientation_symbol(&self, orientation: Orientation) -> char {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::Vertical => self.vertical,
        }
    }

    pub fn orientation(&self, symbol: char) -> Option<Orientation> {
        let symbol = upper(symbol);
        if symbol == self.horizontal {
            Some(Orientation::Horizontal)
        } else if symbol == self.vertical {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }

    /// Display form of `at`, e.g. `C7`.
    pub fn format(&self, at: Coord) -> CoordLabel {
        CoordLabel {
            column: self.column_label(at.x).unwrap_or('?'),
            row: at.y,
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::LATIN
    }
}

fn upper(c: char) -> char {
    let mut up = c.to_uppercase();
    match (up.next(), up.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// A coordinate formatted the way players type it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordLabel {
    column: char,
    row: usize,
}

impl fmt::Display for CoordLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

/// Reasons a typed command is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    /// Not a column letter of the alphabet, or beyond the board width.
    BadColumn(char),
    /// Missing row number or beyond the board height.
    BadRow,
    /// A ship longer than one cell needs an orientation.
    MissingOrientation,
    BadOrientation(char),
    /// Extra characters after a complete command.
    TrailingInput,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::BadColumn(c) => write!(f, "unknown column {:?}", c),
            ParseError::BadRow => write!(f, "missing or invalid row"),
            ParseError::MissingOrientation => write!(f, "orientation required"),
            ParseError::BadOrientation(c) => write!(f, "unknown orientation {:?}", c),
            ParseError::TrailingInput => write!(f, "unexpected trailing input"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Splits a command into its cell and optional trailing symbol.
fn parse_cell(
    input: &str,
    alphabet: &Alphabet,
    dims: Dimensions,
) -> Result<(Coord, Option<char>), ParseError> {
    let mut chars = input.trim().chars().peekable();
    let letter = chars.next().ok_or(ParseError::Empty)?;
    let x = alphabet
        .column_index(letter)
        .filter(|&x| x < dims.width())
        .ok_or(ParseError::BadColumn(letter))?;

    let mut row: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let value = row
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|r| r.checked_add(d as usize))
            .ok_or(ParseError::BadRow)?;
        row = Some(value);
    }
    let y = row
        .filter(|&y| y < dims.height())
        .ok_or(ParseError::BadRow)?;

    let suffix = chars.next();
    if chars.next().is_some() {
        return Err(ParseError::TrailingInput);
    }
    Ok((Coord::new(x, y), suffix))
}

/// Parse a fire command such as `E4`.
pub fn parse_target(input: &str, alphabet: &Alphabet, dims: Dimensions) -> Result<Coord, ParseError> {
    match parse_cell(input, alphabet, dims)? {
        (at, None) => Ok(at),
        (_, Some(_)) => Err(ParseError::TrailingInput),
    }
}

/// Parse a placement command such as `E4D` for `ship`.
///
/// Single-cell ships may leave out the orientation.
pub fn parse_placement(
    input: &str,
    alphabet: &Alphabet,
    dims: Dimensions,
    ship: ShipType,
) -> Result<(Coord, Orientation), ParseError> {
    let (origin, suffix) = parse_cell(input, alphabet, dims)?;
    let orientation = match suffix {
        Some(s) => alphabet.orientation(s).ok_or(ParseError::BadOrientation(s))?,
        None if ship.length() == 1 => Orientation::Horizontal,
        None => return Err(ParseError::MissingOrientation),
    };
    Ok((origin, orientation))
}

/// A uniformly random placement command, used in place of typed input in dev mode.
#[cfg(feature = "std")]
pub fn random_placement_command<R: rand::Rng>(
    rng: &mut R,
    alphabet: &Alphabet,
    dims: Dimensions,
) -> std::string::String {
    let at = Coord::new(
        rng.random_range(0..dims.width()),
        rng.random_range(0..dims.height()),
    );
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    std::format!("{}{}", alphabet.format(at), alphabet.orientation_symbol(orientation))
}

//! A fixed-capacity bitboard for rectangular grids.
//!
//! The type is `no_std` friendly and avoids heap allocations. A `W×H` grid
//! is packed row-major into an unsigned integer `T`; the dimensions are
//! carried at runtime so one storage type serves every board size that fits.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested grid `width*height` exceeds the capacity of `T`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Column or row index is outside `[0, width) × [0, height)`.
    IndexOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: {} cells exceed capacity {}", cells, capacity)
            }
            BitBoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A `width×height` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    width: usize,
    height: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits available in `T`.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    #[inline]
    fn mask(&self) -> T {
        let cells = self.width * self.height;
        if cells == Self::CAPACITY {
            !T::zero()
        } else {
            (T::one() << cells) - T::one()
        }
    }

    /// Create an empty bitboard without checking the size against `T`.
    #[inline]
    pub fn new(width: usize, height: usize) -> Self {
        BitBoard {
            bits: T::zero(),
            width,
            height,
        }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if the grid does not fit in `T`.
    pub fn try_new(width: usize, height: usize) -> Result<Self, BitBoardError> {
        let cells = width * height;
        if cells > Self::CAPACITY {
            Err(BitBoardError::SizeTooLarge {
                cells,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(Self::new(width, height))
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<bool, BitBoardError> {
        let idx = self.index(x, y)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (x, y) to 1.
    pub fn set(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        let idx = self.index(x, y)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, BitBoardError> {
        if x >= self.width || y >= self.height {
            Err(BitBoardError::IndexOutOfBounds { x, y })
        } else {
            Ok(y * self.width + x)
        }
    }

    /// Builds a board of the same dimensions from an iterator over `(x, y)` positions.
    pub fn from_cells<I>(width: usize, height: usize, cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::try_new(width, height)?;
        for (x, y) in cells {
            board.set(x, y)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }

    #[inline]
    fn with_bits(&self, bits: T) -> Self {
        BitBoard {
            bits: bits & self.mask(),
            width: self.width,
            height: self.height,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard {}x{}:", self.width, self.height)?;
        for y in 0..self.height {
            for x in 0..self.width {
                let bit = if self.get(x, y).unwrap_or(false) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cells = self.board.width * self.board.height;
        while self.idx < cells {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx % self.board.width, idx / self.board.width));
            }
        }
        None
    }
}

// Binary operators assume both operands share dimensions; the left side's are kept.

impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.with_bits(self.bits & rhs.bits)
    }
}

impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.with_bits(self.bits | rhs.bits)
    }
}

/// Inverts the board within its bounds.
impl<T> Not for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        self.with_bits(!self.bits)
    }
}

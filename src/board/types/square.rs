//! Square type.
//!
//! Squares are indexed 0-63 starting at a8 (top-left from White's view),
//! increasing left-to-right along a rank and then downwards, so a1 = 56
//! and h1 = 63.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;
use crate::board::geometry::{coordinate_to_index, index_to_coordinate};

/// A square on the chess board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub(crate) u8);

impl Square {
    /// Create a square from an index, returning `None` outside 0-63
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from board coordinates (x = file 0-7, y = row 0-7 from the top)
    #[must_use]
    pub const fn from_xy(x: u8, y: u8) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Square(y * 8 + x))
        } else {
            None
        }
    }

    /// Get the square's index (0-63, a8=0, h1=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Column, 0 = a-file
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        self.0 % 8
    }

    /// Row counted from the top, 0 = rank 8
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        self.0 / 8
    }

    /// Conventional rank number, 1-8
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        8 - self.y()
    }

    /// Add a raw index delta. Callers check board edges with
    /// [`is_step_off_board`](crate::board::geometry::is_step_off_board) first.
    #[inline]
    #[must_use]
    pub(crate) const fn shifted(self, delta: i8) -> Square {
        Square((self.0 as i8 + delta) as u8)
    }

    /// Iterate all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&index_to_coordinate(*self))
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::IndexOutOfRange {
            index: index as usize,
        })
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < 64 {
            Ok(Square(index as u8))
        } else {
            Err(SquareError::IndexOutOfRange { index })
        }
    }
}

impl From<Square> for usize {
    fn from(sq: Square) -> usize {
        sq.index()
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        coordinate_to_index(s)
    }
}

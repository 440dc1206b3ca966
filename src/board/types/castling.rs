//! Castling rights and the castling square table.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// One of the four castling options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

/// Key squares of one castling option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingSquares {
    pub king_from: Square,
    /// The square the king crosses; also where the rook lands
    pub king_passes: Square,
    pub king_to: Square,
    pub rook_from: Square,
    /// The b-file square that must be empty for queenside castling
    pub rook_passes: Option<Square>,
}

impl CastlingSide {
    /// All castling options, in FEN order (K, Q, k, q)
    pub const ALL: [CastlingSide; 4] = [
        CastlingSide::WhiteKingside,
        CastlingSide::WhiteQueenside,
        CastlingSide::BlackKingside,
        CastlingSide::BlackQueenside,
    ];

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            CastlingSide::WhiteKingside | CastlingSide::WhiteQueenside => Color::White,
            CastlingSide::BlackKingside | CastlingSide::BlackQueenside => Color::Black,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_kingside(self) -> bool {
        matches!(self, CastlingSide::WhiteKingside | CastlingSide::BlackKingside)
    }

    /// FEN letter for this option
    #[must_use]
    pub const fn fen_char(self) -> char {
        match self {
            CastlingSide::WhiteKingside => 'K',
            CastlingSide::WhiteQueenside => 'Q',
            CastlingSide::BlackKingside => 'k',
            CastlingSide::BlackQueenside => 'q',
        }
    }

    #[must_use]
    pub const fn from_fen_char(c: char) -> Option<CastlingSide> {
        match c {
            'K' => Some(CastlingSide::WhiteKingside),
            'Q' => Some(CastlingSide::WhiteQueenside),
            'k' => Some(CastlingSide::BlackKingside),
            'q' => Some(CastlingSide::BlackQueenside),
            _ => None,
        }
    }

    /// Key squares from the static castling table
    #[inline]
    #[must_use]
    pub const fn squares(self) -> &'static CastlingSquares {
        &crate::board::offsets::CASTLING_SQUARES[self as usize]
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(0b1111)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, side: CastlingSide) -> bool {
        self.0 & side.bit() != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, side: CastlingSide) {
        self.0 |= side.bit();
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, side: CastlingSide) {
        self.0 &= !side.bit();
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the rights that are still set
    pub fn iter(self) -> impl Iterator<Item = CastlingSide> {
        CastlingSide::ALL.into_iter().filter(move |&side| self.has(side))
    }

    /// Clear every right whose king or rook home square is `sq`.
    pub(crate) fn touch(&mut self, sq: Square) {
        for side in CastlingSide::ALL {
            let squares = side.squares();
            if sq == squares.king_from || sq == squares.rook_from {
                self.remove(side);
            }
        }
    }
}

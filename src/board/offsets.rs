//! Static direction offsets and castling squares.

use super::{CastlingSquares, Color, Piece, PieceKind, Square};

pub(crate) const WHITE_PAWN: [i8; 3] = [-8, -7, -9];
pub(crate) const BLACK_PAWN: [i8; 3] = [8, 7, 9];
pub(crate) const ROOK: [i8; 4] = [1, -1, 8, -8];
pub(crate) const BISHOP: [i8; 4] = [7, -7, 9, -9];
pub(crate) const KNIGHT: [i8; 8] = [6, -6, 10, -10, 15, -15, 17, -17];
pub(crate) const QUEEN: [i8; 8] = [1, -1, 8, -8, 7, -7, 9, -9];
pub(crate) const KING: [i8; 8] = QUEEN;

/// Direction offsets of a piece. Pawn offsets depend on color: the push
/// comes first, followed by the two captures.
#[must_use]
pub(crate) const fn directions(piece: Piece) -> &'static [i8] {
    match piece.kind {
        PieceKind::Pawn => match piece.color {
            Color::White => &WHITE_PAWN,
            Color::Black => &BLACK_PAWN,
        },
        PieceKind::Knight => &KNIGHT,
        PieceKind::Bishop => &BISHOP,
        PieceKind::Rook => &ROOK,
        PieceKind::Queen => &QUEEN,
        PieceKind::King => &KING,
    }
}

/// Indexed by `CastlingSide as usize`.
pub(crate) const CASTLING_SQUARES: [CastlingSquares; 4] = [
    // White kingside
    CastlingSquares {
        king_from: Square(60),
        king_passes: Square(61),
        king_to: Square(62),
        rook_from: Square(63),
        rook_passes: None,
    },
    // White queenside
    CastlingSquares {
        king_from: Square(60),
        king_passes: Square(59),
        king_to: Square(58),
        rook_from: Square(56),
        rook_passes: Some(Square(57)),
    },
    // Black kingside
    CastlingSquares {
        king_from: Square(4),
        king_passes: Square(5),
        king_to: Square(6),
        rook_from: Square(7),
        rook_passes: None,
    },
    // Black queenside
    CastlingSquares {
        king_from: Square(4),
        king_passes: Square(3),
        king_to: Square(2),
        rook_from: Square(0),
        rook_passes: Some(Square(1)),
    },
];

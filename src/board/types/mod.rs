//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece`, `PieceKind` and `Color` - tagged piece representation
//! - `Square` - board square index (a8 = 0, h1 = 63)
//! - `SquareSet` - 64-bit square set for attacked squares, pin lines and checking paths
//! - `Move` and `MoveResult` - move representation and classification
//! - `CastlingRights` and `CastlingSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;
mod square_set;

pub use castling::{CastlingRights, CastlingSide, CastlingSquares};
pub use moves::{Move, MoveResult};
pub use piece::{Color, Piece, PieceKind, PROMOTION_KINDS};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};

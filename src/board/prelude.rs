//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use tracer_chess::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.status(), GameStatus::Ongoing);
//! ```

pub use super::{
    Color, FenError, Game, GameStatus, GenMode, Move, MoveParseError, MoveResult, Piece,
    PieceKind, Position, Square, SquareError,
};

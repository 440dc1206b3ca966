//! Chess position representation and legal move generation.
//!
//! The board is a 64-slot array indexed from a8 (0) to h1 (63). Legal moves
//! are computed eagerly by tracing every piece along its direction offsets,
//! first for the opponent (to find attacked squares, checks and pins) and
//! then for the side to move.
//!
//! # Example
//! ```
//! use tracer_chess::board::{MoveResult, Position};
//!
//! let mut position = Position::new();
//! let e2 = "e2".parse().unwrap();
//! let e4 = "e4".parse().unwrap();
//! assert_eq!(position.destinations(e2).len(), 2);
//! assert_eq!(position.move_piece(e2, e4, None), MoveResult::Moved);
//! ```

mod debug;
mod error;
mod fen;
mod game;
pub mod geometry;
mod legality;
mod make_unmake;
mod offsets;
pub mod prelude;
mod state;
mod tracer;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError, SquareError};
pub use game::{BoardObserver, Game, LogObserver};
pub use legality::GameStatus;
pub use make_unmake::Undo;
pub use state::{MoveTable, Pin, Position};
pub use tracer::GenMode;
pub use types::{
    CastlingRights, CastlingSide, CastlingSquares, Color, Move, MoveResult, Piece, PieceKind,
    Square, SquareSet, SquareSetIter, PROMOTION_KINDS,
};

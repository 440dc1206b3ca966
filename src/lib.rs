pub mod board;
pub mod perft;

pub use board::{Color, Game, Move, MoveResult, Piece, PieceKind, Position, Square};

//! Two-pass legal move computation and game status.

use log::trace;

use super::state::{Legality, MoveTable};
use super::tracer::GenMode;
use super::{CastlingSide, Piece, PieceKind, Position, SquareSet};

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl Position {
    /// Recompute the derived state: opponent control, checks, pins and the
    /// legal move table.
    ///
    /// The opponent is traced first because legal moves depend on what it
    /// attacks and pins. Calling this again without changing the board
    /// yields identical results.
    pub fn update_moves(&mut self) {
        let mover = self.side_to_move;

        let mut facts = Legality::default();
        let mut enemy_moves = MoveTable::new();
        let mut attacked = SquareSet::EMPTY;
        for (sq, _) in self.pieces_of(mover.opponent()) {
            let controlled = self.trace_piece(sq, GenMode::ControllingOnly, &mut facts);
            attacked.extend(controlled.iter().copied());
            enemy_moves.insert(sq, controlled);
        }
        self.enemy_moves = enemy_moves;
        self.attacked_squares = attacked;
        self.legality = facts;

        let mut scratch = Legality::default();
        let legal_moves: MoveTable = self
            .pieces_of(mover)
            .map(|(sq, _)| (sq, self.trace_piece(sq, GenMode::Legal, &mut scratch)))
            .collect();
        self.legal_moves = legal_moves;

        if self.legality.is_check() || !self.legality.pins.is_empty() {
            trace!(
                "{mover} to move: {} checker(s), {} pin(s)",
                self.legality.checkers,
                self.legality.pins.len()
            );
        }
    }

    /// Whether the side to move may castle on `side` right now.
    #[must_use]
    pub fn can_castle(&self, side: CastlingSide) -> bool {
        let color = side.color();
        if color != self.side_to_move || self.is_check() || !self.castling_rights.has(side) {
            return false;
        }

        let squares = side.squares();
        if self.piece_at(squares.king_from) != Some(Piece::new(PieceKind::King, color))
            || self.piece_at(squares.rook_from) != Some(Piece::new(PieceKind::Rook, color))
        {
            return false;
        }

        let between = [Some(squares.king_passes), Some(squares.king_to), squares.rook_passes];
        between.into_iter().flatten().all(|sq| self.piece_at(sq).is_none())
            && !self.attacked_squares.contains(squares.king_passes)
            && !self.attacked_squares.contains(squares.king_to)
    }

    /// True if the side to move has at least one legal move.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.legal_moves.values().any(|moves| !moves.is_empty())
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (self.has_legal_moves(), self.is_check()) {
            (true, _) => GameStatus::Ongoing,
            (false, true) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Stalemate
    }
}

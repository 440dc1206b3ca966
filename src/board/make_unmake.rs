//! Applying and reverting moves.

use super::{
    CastlingRights, CastlingSide, Color, Move, MoveResult, Piece, PieceKind, Position, Square,
    PROMOTION_KINDS,
};

/// Everything needed to take a move back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    pub(crate) mv: Move,
    pub(crate) moved: Piece,
    /// Captured piece and the square it stood on (differs from `mv.to` en passant)
    pub(crate) captured: Option<(Square, Piece)>,
    pub(crate) rook_move: Option<(Square, Square)>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) result: MoveResult,
}

impl Undo {
    /// The move as applied. `promotion` is cleared for non-promoting moves.
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    #[must_use]
    pub fn result(&self) -> MoveResult {
        self.result
    }

    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        self.captured.map(|(_, piece)| piece)
    }
}

impl Position {
    /// Move the piece on `from` to `to`, promoting to `promote_to` when a
    /// pawn reaches the last rank.
    ///
    /// The position is unchanged when the result is
    /// [`MoveResult::Illegal`] or [`MoveResult::PromptPromotion`].
    pub fn move_piece(
        &mut self,
        from: Square,
        to: Square,
        promote_to: Option<PieceKind>,
    ) -> MoveResult {
        let mv = Move {
            from,
            to,
            promotion: promote_to,
        };
        match self.try_move(mv) {
            Ok(undo) => undo.result,
            Err(result) => result,
        }
    }

    /// Apply a legal move and return its undo record, or `None` if the move
    /// is not legal or lacks a promotion kind.
    pub fn make_move(&mut self, mv: Move) -> Option<Undo> {
        self.try_move(mv).ok()
    }

    /// Revert the move recorded in `undo`. Undo records must be applied in
    /// reverse order of the moves that produced them.
    pub fn unmake_move(&mut self, undo: Undo) {
        let Undo {
            mv,
            moved,
            captured,
            rook_move,
            previous_castling_rights,
            previous_en_passant,
            previous_halfmove_clock,
            previous_fullmove_number,
            ..
        } = undo;

        self.board[mv.to.index()] = None;
        self.board[mv.from.index()] = Some(moved);
        if let Some((rook_from, rook_to)) = rook_move {
            self.board[rook_from.index()] = self.board[rook_to.index()].take();
        }
        if let Some((sq, piece)) = captured {
            self.board[sq.index()] = Some(piece);
        }

        self.side_to_move = moved.color;
        self.castling_rights = previous_castling_rights;
        self.en_passant = previous_en_passant;
        self.halfmove_clock = previous_halfmove_clock;
        self.fullmove_number = previous_fullmove_number;
        self.update_moves();
    }

    /// A copy of the position after `mv`, or `None` if it cannot be played.
    #[must_use]
    pub fn after_move(&self, mv: Move) -> Option<Position> {
        let mut next = self.clone();
        next.make_move(mv).map(|_| next)
    }

    /// Every legal move, with pawn moves to the last rank expanded into
    /// one move per promotion kind.
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for (&from, destinations) in &self.legal_moves {
            let promotes = self.is_promoting_pawn(from);
            for &to in destinations {
                if promotes {
                    moves.extend(PROMOTION_KINDS.iter().map(|&kind| Move::with_promotion(from, to, kind)));
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// Number of moves `generate_moves` would return, without allocating.
    #[must_use]
    pub fn count_moves(&self) -> u64 {
        self.legal_moves
            .iter()
            .map(|(&from, destinations)| {
                let per_move = if self.is_promoting_pawn(from) { PROMOTION_KINDS.len() } else { 1 };
                (destinations.len() * per_move) as u64
            })
            .sum()
    }

    /// A pawn one step from its promotion row; all its moves promote.
    fn is_promoting_pawn(&self, from: Square) -> bool {
        match self.board[from.index()] {
            Some(piece) if piece.kind == PieceKind::Pawn => {
                let next_row = from.y() as i8 + piece.color.pawn_push() / 8;
                next_row == piece.color.promotion_row() as i8
            }
            _ => false,
        }
    }

    pub(crate) fn try_move(&mut self, mv: Move) -> Result<Undo, MoveResult> {
        if !self.destinations(mv.from).contains(&mv.to) {
            return Err(MoveResult::Illegal);
        }
        let Some(piece) = self.board[mv.from.index()] else {
            return Err(MoveResult::Illegal);
        };

        let mut mv = mv;
        if piece.kind == PieceKind::Pawn && mv.to.y() == piece.color.promotion_row() {
            match mv.promotion {
                None => return Err(MoveResult::PromptPromotion),
                Some(kind) if !kind.is_promotion_target() => return Err(MoveResult::Illegal),
                Some(_) => {}
            }
        } else {
            mv.promotion = None;
        }

        Ok(self.apply(piece, mv))
    }

    fn apply(&mut self, piece: Piece, mv: Move) -> Undo {
        let color = piece.color;
        let previous_castling_rights = self.castling_rights;
        let previous_en_passant = self.en_passant;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        let mut captured = self.board[mv.to.index()].map(|victim| (mv.to, victim));
        let mut rook_move = None;
        let mut result = if captured.is_some() {
            MoveResult::Capture
        } else {
            MoveResult::Moved
        };

        self.board[mv.from.index()] = None;

        if piece.kind == PieceKind::Pawn && Some(mv.to) == self.en_passant {
            let victim = mv.to.shifted(-color.pawn_push());
            captured = self.board[victim.index()].take().map(|pawn| (victim, pawn));
            result = MoveResult::EnPassant;
        }

        let placed = match mv.promotion {
            Some(kind) => {
                result = MoveResult::Promotion;
                Piece::new(kind, color)
            }
            None => piece,
        };
        self.board[mv.to.index()] = Some(placed);

        if piece.kind == PieceKind::King {
            let castled = CastlingSide::ALL.into_iter().find(|side| {
                let squares = side.squares();
                squares.king_from == mv.from && squares.king_to == mv.to
            });
            if let Some(side) = castled {
                let squares = side.squares();
                self.board[squares.king_passes.index()] = self.board[squares.rook_from.index()].take();
                rook_move = Some((squares.rook_from, squares.king_passes));
                result = MoveResult::Castle;
            }
        }

        let double_push = piece.kind == PieceKind::Pawn && mv.from.y().abs_diff(mv.to.y()) == 2;
        self.en_passant = double_push.then(|| mv.from.shifted(color.pawn_push()));

        self.castling_rights.touch(mv.from);
        self.castling_rights.touch(mv.to);

        if piece.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = color.opponent();
        self.update_moves();

        Undo {
            mv,
            moved: piece,
            captured,
            rook_move,
            previous_castling_rights,
            previous_en_passant,
            previous_halfmove_clock,
            previous_fullmove_number,
            result,
        }
    }
}

//! Ray tracing move generation.
//!
//! Every piece is swept along each of its direction offsets, one square at
//! a time, up to its reach. The same sweep runs in two modes:
//!
//! - [`GenMode::ControllingOnly`] traces the pieces of the side that just
//!   moved. It records every square they attack or defend and, while doing
//!   so, discovers checks, pins and the two en passant special cases. Those
//!   facts are written into a [`Legality`] sink.
//! - [`GenMode::Legal`] traces the pieces of the side to move and keeps only
//!   the destinations that are legal given the facts gathered above.
//!
//! A sweep that passes the first enemy piece on a sliding ray continues as a
//! phantom. The phantom controls nothing. It only looks for the enemy king
//! behind that piece to prove a pin.

use super::geometry::is_step_off_board;
use super::offsets::directions;
use super::state::{Legality, Pin};
use super::{CastlingSide, Color, Piece, PieceKind, Position, Square, SquareSet};

/// What a sweep produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenMode {
    /// Legal destinations of a piece of the side to move
    Legal,
    /// Squares attacked or defended, ignoring legality; pawn pushes excluded
    ControllingOnly,
}

/// Phantom state after a sliding ray passes its first piece.
#[derive(Clone, Copy, Debug)]
enum PinCandidate {
    /// An enemy piece that is pinned if the enemy king is next
    Absolute { pinned: Square },
    /// Two adjacent pawns on a rank, one of them capturable en passant;
    /// `capturer` loses its en passant capture if the enemy king is next
    EnPassant { capturer: Square },
    /// Our own pawn capturable en passant, on a diagonal to the enemy king
    Shield,
}

#[inline]
const fn is_diagonal(offset: i8) -> bool {
    matches!(offset, 7 | -7 | 9 | -9)
}

impl Position {
    /// Trace the piece on `square` without touching the position's cached
    /// state. Returns an empty list for an empty square.
    ///
    /// [`GenMode::Legal`] results are only meaningful for pieces of the side
    /// to move.
    #[must_use]
    pub fn generate_piece_moves(&self, square: Square, mode: GenMode) -> Vec<Square> {
        let mut facts = Legality::default();
        self.trace_piece(square, mode, &mut facts)
    }

    /// Trace one piece. In `ControllingOnly` mode checks and pins found on
    /// the way are added to `facts`; `Legal` mode reads the cached facts of
    /// the position instead and leaves `facts` alone.
    pub(crate) fn trace_piece(
        &self,
        square: Square,
        mode: GenMode,
        facts: &mut Legality,
    ) -> Vec<Square> {
        let Some(piece) = self.board[square.index()] else {
            return Vec::new();
        };

        let mut found = Vec::new();
        for &offset in directions(piece) {
            let pawn_push = piece.kind == PieceKind::Pawn && offset == piece.color.pawn_push();
            let reach = match piece.kind {
                PieceKind::Knight | PieceKind::King => 1,
                PieceKind::Pawn if pawn_push && square.y() == piece.color.pawn_start_row() => 2,
                PieceKind::Pawn => 1,
                _ => 7,
            };

            match mode {
                GenMode::ControllingOnly if pawn_push => {}
                GenMode::ControllingOnly => {
                    self.trace_control(square, piece, offset, reach, facts, &mut found);
                }
                GenMode::Legal => {
                    self.trace_legal(square, piece, offset, reach, pawn_push, &mut found);
                }
            }
        }

        if mode == GenMode::Legal && piece.kind == PieceKind::King {
            for side in CastlingSide::ALL {
                if side.squares().king_from == square && self.can_castle(side) {
                    found.push(side.squares().king_to);
                }
            }
        }

        found
    }

    fn trace_control(
        &self,
        origin: Square,
        piece: Piece,
        offset: i8,
        reach: u8,
        facts: &mut Legality,
        found: &mut Vec<Square>,
    ) {
        let hostile = piece.color.opponent();
        let victim = self.en_passant_victim();

        // Squares reached by the real sweep, in order
        let mut path: Vec<Square> = Vec::new();
        // Squares the phantom passed
        let mut behind = SquareSet::EMPTY;
        let mut candidate: Option<PinCandidate> = None;
        let mut past_king = false;
        let mut cursor = origin;

        for _ in 0..reach {
            if is_step_off_board(cursor, offset) {
                break;
            }
            cursor = cursor.shifted(offset);

            let Some(target) = self.board[cursor.index()] else {
                match candidate {
                    Some(_) => behind.insert(cursor),
                    None => path.push(cursor),
                }
                continue;
            };

            if let Some(candidate) = candidate {
                if target.is(PieceKind::King, hostile) {
                    Self::record_pin(origin, &path, behind, candidate, facts);
                }
                break;
            }

            path.push(cursor);
            if past_king {
                break;
            }

            if target.is(PieceKind::King, hostile) {
                facts.checkers += 1;
                if facts.checkers == 1 {
                    facts.checking_piece = Some(origin);
                    facts.checking_path = path[..path.len() - 1].iter().copied().collect();
                } else {
                    facts.checking_piece = None;
                    facts.checking_path = SquareSet::EMPTY;
                }
                // The king cannot escape along the checking ray
                past_king = true;
                continue;
            }

            if !piece.kind.is_slider() {
                break;
            }

            // Rook or queen sweeping a rank into a pawn pair around the en
            // passant square: the capture would clear both squares at once
            if offset.abs() == 1 && target.kind == PieceKind::Pawn && !is_step_off_board(cursor, offset) {
                let next = cursor.shifted(offset);
                let pair = self.board[next.index()]
                    .filter(|other| other.kind == PieceKind::Pawn && other.color != target.color);
                if let (Some(_), Some(victim)) = (pair, victim) {
                    if cursor == victim || next == victim {
                        let capturer = if cursor == victim { next } else { cursor };
                        candidate = Some(PinCandidate::EnPassant { capturer });
                        cursor = next;
                        continue;
                    }
                }
            }

            if target.color == hostile {
                candidate = Some(PinCandidate::Absolute { pinned: cursor });
                continue;
            }

            if is_diagonal(offset) && Some(cursor) == victim {
                candidate = Some(PinCandidate::Shield);
                continue;
            }

            break;
        }

        found.extend(path);
    }

    fn record_pin(
        origin: Square,
        path: &[Square],
        behind: SquareSet,
        candidate: PinCandidate,
        facts: &mut Legality,
    ) {
        match candidate {
            PinCandidate::Absolute { pinned } => {
                let mut line: SquareSet = path.iter().copied().collect();
                line.insert(origin);
                line |= behind;
                facts.pins.push(Pin { pinned, line });
            }
            PinCandidate::EnPassant { capturer } => {
                facts.en_passant_pinned = Some(capturer);
            }
            PinCandidate::Shield => {
                facts.en_passant_shielded = true;
            }
        }
    }

    fn trace_legal(
        &self,
        origin: Square,
        piece: Piece,
        offset: i8,
        reach: u8,
        pawn_push: bool,
        found: &mut Vec<Square>,
    ) {
        let facts = &self.legality;
        let is_king = piece.kind == PieceKind::King;
        let pawn_capture = piece.kind == PieceKind::Pawn && !pawn_push;
        let pin_line = facts.pin_line(origin);
        let off_pin_line = |sq: Square| pin_line.is_some_and(|line| !line.contains(sq));
        let mut cursor = origin;

        for _ in 0..reach {
            if is_step_off_board(cursor, offset) {
                break;
            }
            cursor = cursor.shifted(offset);

            match self.board[cursor.index()] {
                Some(target) if target.color == piece.color => break,
                Some(_) if pawn_push => break,
                Some(target) => {
                    assert!(
                        target.kind != PieceKind::King,
                        "{} king on {cursor} is capturable",
                        target.color
                    );
                    let allowed = if off_pin_line(cursor) {
                        false
                    } else if is_king {
                        !self.attacked_squares.contains(cursor)
                    } else {
                        !facts.is_check() || facts.checking_piece == Some(cursor)
                    };
                    if allowed {
                        found.push(cursor);
                    }
                    break;
                }
                None if pawn_capture => {
                    if self.en_passant_allowed(origin, cursor, pin_line) {
                        found.push(cursor);
                    }
                    break;
                }
                None => {
                    if off_pin_line(cursor) {
                        break;
                    }
                    if is_king {
                        if !self.attacked_squares.contains(cursor) {
                            found.push(cursor);
                        }
                    } else if facts.is_check() {
                        // Only a block helps, and only one square per ray can block
                        if facts.checking_path.contains(cursor) {
                            found.push(cursor);
                            break;
                        }
                    } else {
                        found.push(cursor);
                    }
                }
            }
        }
    }

    fn en_passant_allowed(&self, capturer: Square, target: Square, pin_line: Option<SquareSet>) -> bool {
        let facts = &self.legality;
        if self.en_passant != Some(target)
            || facts.en_passant_pinned == Some(capturer)
            || facts.en_passant_shielded
            || pin_line.is_some_and(|line| !line.contains(target))
        {
            return false;
        }
        if !facts.is_check() {
            return true;
        }
        // Capturing the checking pawn, or landing on the checking path
        facts.checkers == 1
            && (facts.checking_piece == self.en_passant_victim()
                || facts.checking_path.contains(target))
    }

    /// Squares controlled by all pieces of `color`, regardless of whose turn it is.
    #[must_use]
    pub fn controlled_by(&self, color: Color) -> SquareSet {
        let mut scratch = Legality::default();
        self.pieces_of(color)
            .flat_map(|(sq, _)| self.trace_piece(sq, GenMode::ControllingOnly, &mut scratch))
            .collect()
    }
}

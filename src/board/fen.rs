use std::str::FromStr;

use log::debug;

use super::error::{FenError, MoveParseError};
use super::geometry::coordinate_to_index;
use super::{
    CastlingRights, CastlingSide, Color, Move, MoveResult, Piece, PieceKind, Position, Square,
};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required. Besides syntax, the position must have
    /// exactly one king per side and the side that just moved must not be
    /// left in check.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::FieldCount { found: parts.len() });
        }

        let mut position = Position::empty();

        // Piece placement, top row first
        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::RankCount { found: rows.len() });
        }
        for (y, row) in rows.iter().enumerate() {
            let mut x = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    x += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if x < 8 {
                    position.board[y * 8 + x] = Some(piece);
                }
                x += 1;
            }
            if x != 8 {
                return Err(FenError::RankLength {
                    rank: 8 - y,
                    squares: x,
                });
            }
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling_rights = parse_castling(parts[2])?;

        position.en_passant = if parts[3] == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let target = coordinate_to_index(parts[3]).map_err(|_| invalid())?;
            position.en_passant = Some(target);
            if !position.en_passant_is_consistent(target) {
                return Err(invalid());
            }
            Some(target)
        };

        position.halfmove_clock = parse_counter("halfmove clock", parts[4])?;
        position.fullmove_number = parse_counter("fullmove number", parts[5])?;

        for color in Color::BOTH {
            let found = position
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }

        let mover = position.side_to_move;
        let exposed_king = position.king_square(mover.opponent());
        if exposed_king.is_some_and(|king| position.controlled_by(mover).contains(king)) {
            return Err(FenError::OpponentInCheck);
        }

        position.update_moves();
        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Replace this position with the one described by `fen`. On error the
    /// position is left untouched.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        match Self::try_from_fen(fen) {
            Ok(position) => {
                *self = position;
                Ok(())
            }
            Err(err) => {
                debug!("rejected FEN {fen:?}: {err}");
                Err(err)
            }
        }
    }

    /// The target square must sit just behind a pawn of the side that moved.
    fn en_passant_is_consistent(&self, target: Square) -> bool {
        let behind_row = match self.side_to_move {
            Color::White => 2,
            Color::Black => 5,
        };
        let Some(victim) = self.en_passant_victim() else {
            return false;
        };
        target.y() == behind_row
            && self.piece_at(target).is_none()
            && self.piece_at(victim) == Some(Piece::new(PieceKind::Pawn, self.side_to_move.opponent()))
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row_squares in self.board.chunks(8) {
            let mut row = String::new();
            let mut empty = 0;
            for slot in row_squares {
                if let Some(piece) = slot {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling: String = self.castling_rights.iter().map(CastlingSide::fen_char).collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the move if it is legal in this position.
    ///
    /// # Example
    /// ```
    /// use tracer_chess::board::Position;
    ///
    /// let position = Position::new();
    /// let mv = position.parse_move("g1f3").unwrap();
    /// assert_eq!(mv.to_string(), "g1f3");
    /// ```
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = notation.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let square = |s: &[char]| {
            let coordinate: String = s.iter().collect();
            coordinate_to_index(&coordinate).map_err(|_| MoveParseError::InvalidSquare {
                notation: notation.to_string(),
            })
        };
        let from = square(&chars[0..2])?;
        let to = square(&chars[2..4])?;

        let promotion = match chars.get(4) {
            Some(&c) => match PieceKind::from_char(c) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
            None => None,
        };

        let mv = Move { from, to, promotion };
        if self.generate_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
        }
    }

    /// Parse a coordinate move and play it in one call.
    ///
    /// # Example
    /// ```
    /// use tracer_chess::board::{MoveResult, Position};
    ///
    /// let mut position = Position::new();
    /// assert_eq!(position.make_move_uci("e2e4"), Ok(MoveResult::Moved));
    /// assert_eq!(position.make_move_uci("e7e5"), Ok(MoveResult::Moved));
    /// ```
    pub fn make_move_uci(&mut self, notation: &str) -> Result<MoveResult, MoveParseError> {
        let mv = self.parse_move(notation)?;
        Ok(self.move_piece(mv.from, mv.to, mv.promotion))
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let side = CastlingSide::from_fen_char(c).ok_or(FenError::InvalidCastling { char: c })?;
        rights.set(side);
    }
    Ok(rights)
}

fn parse_counter(field: &'static str, text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidCounter {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

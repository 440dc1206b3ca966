use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::{CastlingRights, Color, Piece, PieceKind, Square, SquareSet};

/// Origin square to destination squares.
pub type MoveTable = BTreeMap<Square, Vec<Square>>;

/// An absolute pin: `pinned` may only move within `line`, which runs from
/// the pinning piece up to (but excluding) the king.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pin {
    pub pinned: Square,
    pub line: SquareSet,
}

/// Check and pin facts gathered while tracing the opponent's pieces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Legality {
    pub(crate) checkers: u8,
    /// Set only while exactly one piece gives check
    pub(crate) checking_piece: Option<Square>,
    pub(crate) checking_path: SquareSet,
    pub(crate) pins: Vec<Pin>,
    pub(crate) en_passant_pinned: Option<Square>,
    pub(crate) en_passant_shielded: bool,
}

impl Legality {
    #[inline]
    pub(crate) fn is_check(&self) -> bool {
        self.checkers > 0
    }

    pub(crate) fn pin_line(&self, sq: Square) -> Option<SquareSet> {
        self.pins.iter().find(|pin| pin.pinned == sq).map(|pin| pin.line)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    // Derived by `update_moves` after every change
    pub(crate) legal_moves: MoveTable,
    pub(crate) enemy_moves: MoveTable,
    pub(crate) attacked_squares: SquareSet,
    pub(crate) legality: Legality,
}

static STARTING_POSITION: Lazy<Position> = Lazy::new(|| {
    let mut position = Position::empty();
    let back_rank = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (x, kind) in back_rank.into_iter().enumerate() {
        position.board[x] = Some(Piece::new(kind, Color::Black));
        position.board[8 + x] = Some(Piece::new(PieceKind::Pawn, Color::Black));
        position.board[48 + x] = Some(Piece::new(PieceKind::Pawn, Color::White));
        position.board[56 + x] = Some(Piece::new(kind, Color::White));
    }
    position.castling_rights = CastlingRights::all();
    position.update_moves();
    position
});

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        STARTING_POSITION.clone()
    }

    pub(crate) fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            legal_moves: MoveTable::new(),
            enemy_moves: MoveTable::new(),
            attacked_squares: SquareSet::EMPTY,
            legality: Legality::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    /// The 64 board slots, index 0 = a8
    #[must_use]
    pub fn board(&self) -> &[Option<Piece>; 64] {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The square a pawn may capture onto en passant
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Legal destinations for every piece of the side to move
    #[must_use]
    pub fn legal_moves(&self) -> &MoveTable {
        &self.legal_moves
    }

    /// Legal destinations of the piece on `from` (empty if none)
    #[must_use]
    pub fn destinations(&self, from: Square) -> &[Square] {
        self.legal_moves.get(&from).map_or(&[], Vec::as_slice)
    }

    /// Squares controlled by each opponent piece
    #[must_use]
    pub fn enemy_moves(&self) -> &MoveTable {
        &self.enemy_moves
    }

    /// Every square the opponent attacks or defends
    #[must_use]
    pub fn attacked_squares(&self) -> SquareSet {
        self.attacked_squares
    }

    #[must_use]
    pub fn is_check(&self) -> bool {
        self.legality.is_check()
    }

    /// Number of pieces giving check (0, 1 or 2)
    #[must_use]
    pub fn checkers(&self) -> u8 {
        self.legality.checkers
    }

    /// The checking piece when exactly one piece gives check
    #[must_use]
    pub fn checking_piece(&self) -> Option<Square> {
        self.legality.checking_piece
    }

    /// Squares that block a single check
    #[must_use]
    pub fn checking_path(&self) -> SquareSet {
        self.legality.checking_path
    }

    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.legality.pins
    }

    pub fn pinned_pieces(&self) -> impl Iterator<Item = Square> + '_ {
        self.legality.pins.iter().map(|pin| pin.pinned)
    }

    /// The pawn that may not capture en passant because the capture would
    /// clear the rank between an enemy rook or queen and its king
    #[must_use]
    pub fn en_passant_pinned(&self) -> Option<Square> {
        self.legality.en_passant_pinned
    }

    /// True when the pawn capturable en passant is the last piece between
    /// an enemy bishop or queen and the king of the side to move
    #[must_use]
    pub fn en_passant_shielded(&self) -> bool {
        self.legality.en_passant_shielded
    }

    /// All pieces of one color with their squares
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.board[sq.index()] {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// The pawn that would be removed by an en passant capture
    pub(crate) fn en_passant_victim(&self) -> Option<Square> {
        self.en_passant
            .map(|target| target.shifted(-self.side_to_move.pawn_push()))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

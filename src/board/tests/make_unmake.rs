//! Make/unmake move tests.

use super::sq;
use crate::board::{CastlingSide, Color, Move, MoveResult, Piece, PieceKind, Position, Undo};
use rand::prelude::*;

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original = board.clone();

    let undo = board.make_move(Move::new(sq("e5"), sq("f6"))).unwrap();
    assert_eq!(undo.result(), MoveResult::EnPassant);
    assert_eq!(undo.captured(), Some(Piece::new(PieceKind::Pawn, Color::Black)));
    assert_eq!(board.piece_at(sq("f5")), None);

    board.unmake_move(undo);
    assert_eq!(board, original);
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let original = board.clone();

    let undo = board
        .make_move(Move::with_promotion(sq("a7"), sq("a8"), PieceKind::Queen))
        .unwrap();
    assert_eq!(undo.result(), MoveResult::Promotion);
    assert_eq!(
        board.piece_at(sq("a8")),
        Some(Piece::new(PieceKind::Queen, Color::White))
    );

    board.unmake_move(undo);
    assert_eq!(board, original);
    assert_eq!(
        board.piece_at(sq("a7")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
}

#[test]
fn test_castling_make_unmake() {
    let mut board = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let original = board.clone();

    let undo = board.make_move(Move::new(sq("e1"), sq("c1"))).unwrap();
    assert_eq!(undo.result(), MoveResult::Castle);
    assert_eq!(
        board.piece_at(sq("d1")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert_eq!(board.piece_at(sq("a1")), None);
    assert!(!board.castling_rights().has(CastlingSide::WhiteKingside));
    assert!(!board.castling_rights().has(CastlingSide::WhiteQueenside));
    assert!(board.castling_rights().has(CastlingSide::BlackKingside));

    board.unmake_move(undo);
    assert_eq!(board, original);
}

#[test]
fn test_promotion_without_kind_prompts() {
    let mut board = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let original = board.clone();
    assert_eq!(
        board.move_piece(sq("a7"), sq("a8"), None),
        MoveResult::PromptPromotion
    );
    assert_eq!(
        board.move_piece(sq("a7"), sq("a8"), Some(PieceKind::King)),
        MoveResult::Illegal
    );
    assert_eq!(board, original);

    assert_eq!(
        board.move_piece(sq("a7"), sq("a8"), Some(PieceKind::Knight)),
        MoveResult::Promotion
    );
}

#[test]
fn test_illegal_move_leaves_position_unchanged() {
    let mut board = Position::new();
    let original = board.clone();
    // a8 rook onto a black pawn's row: not even the side to move
    assert_eq!(board.move_piece(sq("a8"), sq("a7"), None), MoveResult::Illegal);
    assert_eq!(board.move_piece(sq("e2"), sq("e5"), None), MoveResult::Illegal);
    assert_eq!(board.move_piece(sq("e4"), sq("e5"), None), MoveResult::Illegal);
    assert!(board.make_move(Move::new(sq("g1"), sq("g3"))).is_none());
    assert!(board.after_move(Move::new(sq("g1"), sq("g3"))).is_none());
    assert_eq!(board, original);
}

#[test]
fn test_promotion_kind_ignored_on_quiet_move() {
    let mut board = Position::new();
    let undo = board
        .make_move(Move::with_promotion(sq("e2"), sq("e4"), PieceKind::Queen))
        .unwrap();
    assert_eq!(undo.mv(), Move::new(sq("e2"), sq("e4")));
    assert_eq!(
        board.piece_at(sq("e4")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
}

#[test]
fn test_clocks_and_en_passant_target() {
    let mut board = Position::new();
    assert_eq!(board.move_piece(sq("g1"), sq("f3"), None), MoveResult::Moved);
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.fullmove_number(), 1);
    assert_eq!(board.en_passant(), None);

    assert_eq!(board.move_piece(sq("d7"), sq("d5"), None), MoveResult::Moved);
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 2);
    assert_eq!(board.en_passant(), Some(sq("d6")));

    assert_eq!(board.move_piece(sq("f3"), sq("e5"), None), MoveResult::Moved);
    assert_eq!(board.en_passant(), None);
    assert_eq!(board.move_piece(sq("b8"), sq("c6"), None), MoveResult::Moved);
    assert_eq!(board.move_piece(sq("e5"), sq("c6"), None), MoveResult::Capture);
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_clocks_saturate_at_max() {
    let fen = "4k3/8/8/8/8/8/8/R3K3 b - - 4294967295 4294967295";
    let mut board = Position::from_fen(fen);
    let undo = board.make_move(Move::new(sq("e8"), sq("d8"))).unwrap();
    assert_eq!(board.halfmove_clock(), u32::MAX);
    assert_eq!(board.fullmove_number(), u32::MAX);

    board.unmake_move(undo);
    assert_eq!(board.to_fen(), fen);
}

#[test]
fn test_rook_capture_clears_castling_right() {
    let mut board = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert_eq!(board.move_piece(sq("a1"), sq("a8"), None), MoveResult::Capture);
    let rights = board.castling_rights();
    assert!(!rights.has(CastlingSide::WhiteQueenside));
    assert!(!rights.has(CastlingSide::BlackQueenside));
    assert!(rights.has(CastlingSide::WhiteKingside));
    assert!(rights.has(CastlingSide::BlackKingside));
}

#[test]
fn test_after_move_leaves_original() {
    let board = Position::new();
    let next = board.after_move(Move::new(sq("e2"), sq("e4"))).unwrap();
    assert_eq!(board, Position::new());
    assert_eq!(next.side_to_move(), Color::Black);
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    );
    let initial_moves = board.generate_moves();

    for mv in initial_moves.iter() {
        let undo = board.make_move(*mv).unwrap();
        board.unmake_move(undo);
    }

    assert_eq!(board.generate_moves(), initial_moves);
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut board = Position::new();
    let initial = board.clone();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut history: Vec<Undo> = Vec::new();

    for _ in 0..200 {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        history.push(board.make_move(mv).unwrap());

        // Incremental state agrees with a fresh parse
        assert_eq!(Position::from_fen(&board.to_fen()), board);
    }

    while let Some(undo) = history.pop() {
        board.unmake_move(undo);
    }

    assert_eq!(board, initial);
}

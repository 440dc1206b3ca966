//! Perft (performance test) for move generation correctness.

use super::sq;
use crate::board::Position;
use crate::perft::{parallel_search, search};
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197281)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039), (3, 97862)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43238)],
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264), (3, 9467)],
    },
    TestPosition {
        name: "Position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        depths: &[(1, 44), (2, 1486), (3, 62379)],
    },
    TestPosition {
        name: "Position 6 (Win at Chess)",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depths: &[(1, 46), (2, 2079), (3, 89890)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21637)],
    },
    TestPosition {
        name: "Promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 24), (2, 496), (3, 9483)],
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13744)],
    },
];

#[test]
fn test_all_perft_positions() {
    for position in TEST_POSITIONS {
        let board = Position::from_fen(position.fen);

        for &(depth, expected) in position.depths {
            let start = Instant::now();
            let nodes = search(&board, depth);
            let duration = start.elapsed();

            println!("  Depth {}: {} nodes in {:?}", depth, nodes, duration);

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
    }
}

#[test]
fn test_make_unmake_perft_matches_clone_perft() {
    for position in TEST_POSITIONS {
        let mut board = Position::from_fen(position.fen);
        let (depth, expected) = position.depths[1];
        assert_eq!(board.perft(depth), expected, "{}", position.name);
        assert_eq!(board, Position::from_fen(position.fen), "{}", position.name);
    }
}

#[test]
fn test_parallel_perft_matches_serial() {
    for position in TEST_POSITIONS {
        let board = Position::from_fen(position.fen);
        let (depth, expected) = position.depths[2];
        assert_eq!(parallel_search(&board, depth, 4), expected, "{}", position.name);
    }
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_initial_position_deep() {
    let board = Position::new();
    assert_eq!(parallel_search(&board, 5, 8), 4865609);
}

#[test]
fn test_king_in_front_of_pawn_during_search() {
    // Black king walks onto c6, straight in front of the white c5 pawn
    let fen = "3k4/3p4/8/K1P4r/8/8/8/8 b - - 0 1";
    let mut board = Position::from_fen(fen);
    assert_eq!(search(&board, 1), 18);

    let nodes = search(&board, 4);
    assert_eq!(board.perft(4), nodes);
    assert_eq!(parallel_search(&board, 4, 4), nodes);
    assert_eq!(board, Position::from_fen(fen));

    let reached = Position::from_fen("8/2kp4/8/2P4r/K7/8/8/8 b - - 2 2");
    let next = reached
        .after_move(reached.parse_move("c7c6").unwrap())
        .expect("king step is legal");
    assert!(next.destinations(sq("c5")).is_empty());
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_en_passant_pin_deep() {
    let board = Position::from_fen("3k4/3p4/8/K1P4r/8/8/8/8 b - - 0 1");
    assert_eq!(parallel_search(&board, 6, 8), 1134888);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_kiwipete_deep() {
    let board = Position::from_fen(TEST_POSITIONS[1].fen);
    assert_eq!(parallel_search(&board, 4, 8), 4085603);
}

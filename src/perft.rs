//! Perft node counting.
//!
//! Counts leaf nodes of the legal move tree to a fixed depth. Promotions
//! count once per promotion kind, so the totals match the published
//! reference numbers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use log::{debug, info};
use parking_lot::Mutex;

use crate::board::{Move, Position};

/// Count leaf nodes by cloning the position for every move.
#[must_use]
pub fn search(position: &Position, depth: u32) -> u64 {
    match depth {
        0 => 1,
        1 => position.count_moves(),
        _ => position
            .generate_moves()
            .into_iter()
            .filter_map(|mv| position.after_move(mv))
            .map(|next| search(&next, depth - 1))
            .sum(),
    }
}

/// Node count under each root move, in move generation order.
#[must_use]
pub fn divide(position: &Position, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    position
        .generate_moves()
        .into_iter()
        .filter_map(|mv| {
            let nodes = search(&position.after_move(mv)?, depth - 1);
            info!("{mv}: {nodes}");
            Some((mv, nodes))
        })
        .collect()
}

/// Split the root moves across `threads` workers.
///
/// Returns the same count as [`search`]. A `threads` value of zero is
/// treated as one.
#[must_use]
pub fn parallel_search(position: &Position, depth: u32, threads: usize) -> u64 {
    if depth <= 1 {
        return search(position, depth);
    }

    let queue = Mutex::new(position.generate_moves());
    let total_nodes = AtomicU64::new(0);
    let workers = threads.max(1);
    debug!("perft depth {depth} on {workers} thread(s)");

    thread::scope(|scope| {
        for worker_id in 0..workers {
            let queue = &queue;
            let total_nodes = &total_nodes;
            scope.spawn(move || loop {
                let Some(mv) = queue.lock().pop() else {
                    break;
                };
                let Some(next) = position.after_move(mv) else {
                    continue;
                };
                let nodes = search(&next, depth - 1);
                info!("worker {worker_id}: {mv} {nodes}");
                total_nodes.fetch_add(nodes, Ordering::Relaxed);
            });
        }
    });

    total_nodes.load(Ordering::Relaxed)
}

impl Position {
    /// Count leaf nodes using make/unmake on this position.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        if depth == 1 {
            return self.count_moves();
        }

        let mut nodes = 0;
        for mv in self.generate_moves() {
            if let Some(undo) = self.make_move(mv) {
                nodes += self.perft(depth - 1);
                self.unmake_move(undo);
            }
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shallow_start_counts() {
        let position = Position::new();
        assert_eq!(search(&position, 0), 1);
        assert_eq!(search(&position, 1), 20);
        assert_eq!(search(&position, 2), 400);
    }

    #[test]
    fn test_divide_sums_to_search() {
        let position = Position::new();
        let split = divide(&position, 3);
        assert_eq!(split.len(), 20);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 8902);
        assert!(divide(&position, 0).is_empty());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let position = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        );
        assert_eq!(parallel_search(&position, 2, 4), 2039);
        assert_eq!(parallel_search(&position, 2, 0), 2039);
        assert_eq!(parallel_search(&position, 1, 4), 48);
    }

    #[test]
    fn test_make_unmake_perft_restores_position() {
        let mut position = Position::new();
        let before = position.clone();
        assert_eq!(position.perft(3), 8902);
        assert_eq!(position, before);
    }
}

use crate::{Board, CELL_COUNT, PeerPolicy};
use crate::generator::Generator;

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

use std::collections::HashSet;

const ITERATIONS_PER_RUN: usize = 30;

fn run_solved_test(policy: PeerPolicy, iterations: usize) {
    let mut generator = Generator::new_default();

    for _ in 0..iterations {
        let board = generator.generate(policy).unwrap();

        assert!(board.is_solved(), "Generated board not solved.");
        assert!(board.serialize().chars().all(|c| c != '0'),
            "Solved board serialized with zeros.");
    }
}

#[test]
fn forward_scan_boards_are_solved() {
    run_solved_test(PeerPolicy::ForwardScan, ITERATIONS_PER_RUN)
}

#[test]
fn full_constraint_boards_are_solved() {
    run_solved_test(PeerPolicy::FullConstraint, ITERATIONS_PER_RUN)
}

#[test]
fn repeated_generation_yields_distinct_boards() {
    // Statistical, not strict: two out of 50 independently generated boards
    // colliding is overwhelmingly unlikely with a working shuffle.

    let mut generator = Generator::new_default();
    let mut codes = HashSet::new();

    for _ in 0..50 {
        codes.insert(generator.generate(PeerPolicy::ForwardScan)
            .unwrap()
            .serialize());
    }

    assert!(codes.len() >= 2, "All 50 generated boards were identical.");
}

#[test]
fn equally_seeded_generators_agree() {
    let mut first = Generator::new(ChaCha8Rng::seed_from_u64(0xC0FFEE));
    let mut second = Generator::new(ChaCha8Rng::seed_from_u64(0xC0FFEE));

    for _ in 0..5 {
        let first_board = first.generate(PeerPolicy::ForwardScan).unwrap();
        let second_board = second.generate(PeerPolicy::ForwardScan).unwrap();

        assert_eq!(first_board.serialize(), second_board.serialize());
    }
}

#[test]
fn reset_and_refill_produces_fresh_solutions() {
    let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(42));
    let mut board = Board::new();
    let mut codes = HashSet::new();

    for _ in 0..ITERATIONS_PER_RUN {
        board.reset();

        assert_eq!("0".repeat(CELL_COUNT), board.serialize());

        generator.fill(&mut board).unwrap();

        assert!(board.is_solved());
        codes.insert(board.serialize());
    }

    assert!(codes.len() >= 2,
        "Refilling the same board always gave the same solution.");
}

#[test]
fn serialized_batch_round_trips() {
    let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));
    let codes = generator
        .generate_serialized(10, PeerPolicy::ForwardScan)
        .unwrap();

    assert_eq!(10, codes.len());

    for code in codes {
        let board = Board::parse(&code).unwrap();

        assert!(board.is_solved());
        assert_eq!(code, board.serialize());
    }
}

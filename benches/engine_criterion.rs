use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bitchess::game_state::chess_types::Position;
use bitchess::move_generation::perft::perft;
use bitchess::search::alpha_beta::{SearchConfig, SearchEngine};
use bitchess::search::zobrist::ZobristHasher;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

// Depths where queen-only promotion still matches the published counts.
const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        fen: POSITION_3_FEN,
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        fen: POSITION_3_FEN,
        expected_nodes: &[14, 191, 2812, 43_238, 674_624],
    },
];

fn standard_suite() -> bool {
    matches!(
        std::env::var("BITCHESS_BENCH_SUITE"),
        Ok(value) if value.eq_ignore_ascii_case("standard")
    )
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = if standard_suite() {
        ("standard", CASES_STANDARD)
    } else {
        ("quick", CASES_QUICK)
    };

    let hasher = ZobristHasher::default();
    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in cases {
        let position = Position::from_fen(case.fen, &hasher).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup = position.clone();
            assert_eq!(
                perft(&mut warmup, &hasher, depth),
                *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name,
                depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let mut bench_position = position.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let nodes = perft(black_box(&mut bench_position), &hasher, black_box(depth));
                        assert_eq!(nodes, *expected);
                        black_box(nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let hasher = ZobristHasher::default();
    let mut group = c.benchmark_group("search_fixed_depth");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in [("startpos", STARTPOS_FEN), ("kiwipete", KIWIPETE_FEN)] {
        let position = Position::from_fen(fen, &hasher).expect("benchmark FEN should parse");

        for depth in [2u8, 3] {
            let config = SearchConfig {
                depth,
                ..SearchConfig::default()
            };

            // Correctness guard: the search commits exactly one move.
            let mut warmup = position.clone();
            let report = SearchEngine::new(config).choose_move(&mut warmup, &hasher);
            assert!(report.best_move.is_some(), "{name} should have a move");
            assert_eq!(warmup.hash_history.len(), 1);
            assert_eq!(warmup.hash, hasher.compute_initial_hash(&warmup));

            group.bench_function(BenchmarkId::new(name, depth + 1), |b| {
                b.iter(|| {
                    let mut engine = SearchEngine::new(config);
                    let mut board = position.clone();
                    let report = engine.choose_move(black_box(&mut board), &hasher);
                    black_box(report.score)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(engine_benches, bench_perft, bench_search);
criterion_main!(engine_benches);

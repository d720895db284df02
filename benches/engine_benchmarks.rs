//! Benchmarks for move generation, evaluation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use minimax_chess::board::{find_best_move, Board, Color, SearchLimits};
use minimax_chess::Difficulty;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut kiwipete = Board::from_fen(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [("middlegame", MIDDLEGAME), ("kiwipete", KIWIPETE)] {
        let mut board = Board::from_fen(fen);
        group.bench_function(name, |b| {
            b.iter(|| black_box(board.generate_all(Color::White)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for difficulty in [Difficulty::Beginner, Difficulty::Easy, Difficulty::Medium] {
        let depth = difficulty.depth();
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            let mut board = Board::from_fen(MIDDLEGAME);
            b.iter(|| find_best_move(&mut board, Color::White, depth, SearchLimits::default()))
        });
    }

    group.bench_function("node_budget_10k", |b| {
        let mut board = Board::from_fen(MIDDLEGAME);
        b.iter(|| find_best_move(&mut board, Color::White, 5, SearchLimits::nodes(10_000)))
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        ("middlegame", MIDDLEGAME),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1"),
    ];

    for (name, fen) in positions {
        let board = Board::from_fen(fen);
        group.bench_with_input(BenchmarkId::new("position", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);

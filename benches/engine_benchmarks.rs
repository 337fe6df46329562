//! Benchmarks for move generation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use draughts_engine::board::{find_best_move, Board, Color, SearchLimits};

const MIDDLEGAME: &str =
    ".b.b.b.b/b.b...b./...b.b.b/b.w...../.....b../w...w.w./.w.w...w/w.w.w.w. w";
const KING_RING: &str = "8/8/...b.b../8/...b.b../....W.../8/8 w";

fn parse(diagram: &str) -> (Board, Color) {
    Board::from_diagram(diagram).expect("valid diagram")
}

/// Leaf count of the legal move tree, a movegen throughput measure.
fn walk(board: &Board, turn: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for mv in board.legal_moves(turn) {
        let mut next = *board;
        if next.play(turn, &mv).is_ok() {
            nodes += walk(&next, turn.opponent(), depth - 1);
        }
    }
    nodes
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", (Board::new(), Color::White)),
        ("middlegame", parse(MIDDLEGAME)),
        ("king_ring", parse(KING_RING)),
    ];
    for (name, (board, turn)) in positions {
        group.bench_function(name, |b| b.iter(|| black_box(board.legal_moves(turn))));
    }

    let board = Board::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("walk", depth), &depth, |b, &depth| {
            b.iter(|| walk(&board, Color::White, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let board = Board::new();
    for depth in [2, 4, 6] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| find_best_move(&board, Color::White, &SearchLimits::depth(depth)))
        });
    }

    let (middlegame, turn) = parse(MIDDLEGAME);
    for depth in [4, 6] {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| find_best_move(&middlegame, turn, &SearchLimits::depth(depth)))
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    for (name, diagram) in [("middlegame", MIDDLEGAME), ("king_ring", KING_RING)] {
        let (board, turn) = parse(diagram);
        group.bench_with_input(BenchmarkId::new("position", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate(turn)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_search, bench_eval);
criterion_main!(benches);

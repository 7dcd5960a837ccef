use criterion::*;

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

use othello_engine::test_utils::perft;
use othello_engine::{engine, Board, Side};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(20);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| perft::run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_legal_moves(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("legal_moves/opening", |b| {
        b.iter(|| engine::legal_moves(black_box(&board), black_box(Side::Black)))
    });
}

#[cfg(unix)]
criterion_group! {
    name = perft;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_perft, criterion_legal_moves
}

#[cfg(not(unix))]
criterion_group! {
    name = perft;
    config = Criterion::default();
    targets = criterion_perft, criterion_legal_moves
}

criterion_main!(perft);

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use power_chess::move_generation::perft::{perft, perft_multi_threaded};
use power_chess::Engine;

fn bench_legal_moves(c: &mut Criterion) {
    let engine = Engine::new();
    let state = engine.initial_state();

    c.bench_function("legal_moves_startpos", |b| {
        b.iter(|| black_box(engine.legal_moves(black_box(&state))))
    });
    c.bench_function("group_legal_moves_by_from_startpos", |b| {
        b.iter(|| black_box(engine.group_legal_moves_by_from(black_box(&state))))
    });
}

fn bench_perft(c: &mut Criterion) {
    let engine = Engine::new();
    let state = engine.initial_state();

    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for (depth, nodes) in [(2u8, 186u64), (3, 2809), (4, 40_426)] {
        group.throughput(Throughput::Elements(nodes));
        group.bench_with_input(BenchmarkId::new("single", depth), &depth, |b, &depth| {
            b.iter(|| {
                let counts = perft(&engine, black_box(&state), depth);
                assert_eq!(counts.nodes as u64, nodes);
                counts
            })
        });
        group.bench_with_input(BenchmarkId::new("threaded", depth), &depth, |b, &depth| {
            b.iter(|| {
                perft_multi_threaded(&engine, black_box(&state), depth)
                    .expect("perft workers should not panic")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_legal_moves, bench_perft);
criterion_main!(benches);

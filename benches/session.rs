//! Deal and play throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pairs_engine::{Session, SessionConfig, SUPPORTED_PAIR_COUNTS};

fn bench_reset(c: &mut Criterion) {
    let mut group = c.benchmark_group("reset");
    for &pairs in &SUPPORTED_PAIR_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &pairs, |b, &pairs| {
            let mut session = Session::new(SessionConfig::new(pairs).with_seed(1)).unwrap();
            b.iter(|| session.reset(black_box(pairs)).unwrap());
        });
    }
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    // Tap every card left to right, flushing mismatches as they happen.
    c.bench_function("sweep_8_pairs", |b| {
        let base = Session::new(SessionConfig::new(8).with_seed(1)).unwrap();
        b.iter(|| {
            let mut session = base.clone();
            for i in 0..session.len() {
                let _ = session.tap(black_box(i));
                session.flush_reversions();
            }
            session.is_won()
        });
    });
}

criterion_group!(benches, bench_reset, bench_sweep);
criterion_main!(benches);

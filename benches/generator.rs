use criterion::{criterion_group, criterion_main, Criterion};

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

use sudoku_gen::PeerPolicy;
use sudoku_gen::generator::Generator;

// The RNG is seeded so runs are comparable; the search itself is the same
// deterministic backtracking either way.

fn generate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("forward scan", |b| {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(0));
        b.iter(|| generator.generate(PeerPolicy::ForwardScan).unwrap())
    });

    group.bench_function("full constraint", |b| {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(0));
        b.iter(|| generator.generate(PeerPolicy::FullConstraint).unwrap())
    });

    group.finish();
}

fn batch_benchmark(c: &mut Criterion) {
    c.bench_function("serialized batch of 100", |b| {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(0));
        b.iter(|| generator
            .generate_serialized(100, PeerPolicy::ForwardScan)
            .unwrap())
    });
}

criterion_group!(benches, generate_benchmark, batch_benchmark);
criterion_main!(benches);

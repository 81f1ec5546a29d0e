//! Benchmarks for the weighted sampler's cumulative-table lookup.

use aether_core::{Rng, WeightedSampler};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_sampler");

    for &n in &[16usize, 1024, 65_536] {
        let mut sampler = WeightedSampler::new();
        let mut rng = Rng::from_seed(1);
        for i in 0..n {
            sampler.add(i, 0.5 + rng.uniform()).unwrap();
        }

        group.bench_function(format!("sample_{n}"), |b| {
            let mut rng = Rng::from_seed(2);
            b.iter(|| {
                let u = rng.uniform();
                black_box(sampler.sample_index(black_box(u)));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);

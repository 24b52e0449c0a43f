use criterion::{criterion_group, criterion_main, Criterion};
use minado_core::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::hint::black_box;

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
        let name = match difficulty {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        };
        let config = difficulty.config();
        group.bench_function(name, |b| {
            let mut rng = SmallRng::seed_from_u64(1234);
            b.iter(|| generate_mine_positions(black_box(&config), (0, 0), &mut rng))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);

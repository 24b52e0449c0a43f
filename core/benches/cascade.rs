use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use minado_core::*;
use std::hint::black_box;

fn bench_cascade(c: &mut Criterion) {
    c.bench_function("cascade/full_board", |b| {
        // single corner mine, so the far-corner open floods the whole board
        let game = Game::with_mines((16, 30), &[(0, 0)]).unwrap();
        b.iter_batched(
            || game.clone(),
            |mut game| {
                let outcome = game.open((15, 29), &mut ()) | game.resolve_cascade(&mut ());
                black_box(outcome)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_cascade);
criterion_main!(benches);

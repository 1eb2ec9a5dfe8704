use criterion::{Criterion, criterion_group, criterion_main};
use life_sim::Engine;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn generation_step(c: &mut Criterion) {
    let mut plain = Engine::new(256, 256).unwrap();
    plain.random_generate_with(&mut StdRng::seed_from_u64(7), 10_000);

    c.bench_function("next_generation/256x256", |b| {
        b.iter(|| {
            plain.next_generation();
        });
    });

    let mut aging = Engine::new(256, 256).unwrap();
    aging.set_aging(true, 5, 2).unwrap();
    aging.random_generate_with(&mut StdRng::seed_from_u64(7), 10_000);

    c.bench_function("next_generation/256x256-aging", |b| {
        b.iter(|| {
            aging.next_generation();
        });
    });
}

criterion_group!(benches, generation_step);
criterion_main!(benches);

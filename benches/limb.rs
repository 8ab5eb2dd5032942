use criterion::{
    BatchSize, BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use crypto_limbs::Limb;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use std::hint::black_box;
use subtle::{ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

fn bench_cmp<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    group.bench_function("ct_lt", |b| {
        b.iter_batched(
            || (Limb::random(&mut rng), Limb::random(&mut rng)),
            |(x, y)| black_box(x.ct_lt(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("ct_eq", |b| {
        b.iter_batched(
            || (Limb::random(&mut rng), Limb::random(&mut rng)),
            |(x, y)| black_box(x.ct_eq(&y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("ct_gt", |b| {
        b.iter_batched(
            || (Limb::random(&mut rng), Limb::random(&mut rng)),
            |(x, y)| black_box(x.ct_gt(&y)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_carry_chain<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    group.bench_function("carrying_add", |b| {
        b.iter_batched(
            || (Limb::random(&mut rng), Limb::random(&mut rng)),
            |(x, y)| black_box(x.carrying_add(y, Limb::ONE)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("borrowing_sub", |b| {
        b.iter_batched(
            || (Limb::random(&mut rng), Limb::random(&mut rng)),
            |(x, y)| black_box(x.borrowing_sub(y, Limb::ONE)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops");
    bench_cmp(&mut group);
    bench_carry_chain(&mut group);
    group.finish();
}

criterion_group!(benches, bench_ops);

criterion_main!(benches);

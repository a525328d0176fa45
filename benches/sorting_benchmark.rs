use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use lexsift::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_random_u64(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random u64");
    group.sample_size(20);

    let mut rng = rand::rng();
    let count = 10_000;
    let random_values: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("sort_by (quicksort)", |b| {
        b.iter_batched(
            || random_values.clone(),
            |mut data| sort_by(black_box(&mut data), |a, b| a.cmp(b)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sort_indices", |b| {
        b.iter(|| sort_indices(black_box(&random_values), |a, b| a.cmp(b)))
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_values.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_selection_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Selection Sort (small n)");
    group.sample_size(20);

    // Quadratic, so keep the input small.
    let mut rng = rand::rng();
    let count = 1_000;
    let random_values: Vec<f32> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("selection_sort", |b| {
        b.iter_batched(
            || random_values.clone(),
            |mut data| selection_sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sort_by (quicksort)", |b| {
        b.iter_batched(
            || random_values.clone(),
            |mut data| sort_by(black_box(&mut data), default_cmp),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Sort");
    group.sample_size(20);

    let mut rng = rand::rng();
    let count = 10_000;
    let random_strings: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect();

    group.bench_function("sort_by (quicksort)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| sort_by(black_box(&mut data), |a, b| a.cmp(b)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sort_indices (no data movement)", |b| {
        b.iter(|| sort_indices(black_box(&random_strings), |a, b| a.cmp(b)))
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_random_u64,
    bench_selection_sort,
    bench_strings
);
criterion_main!(benches);

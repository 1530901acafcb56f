//! Compares the pipeline and loop forms of the threshold filter.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pricefilter::{compute_over_threshold, compute_over_threshold_imperative, Product};
use std::hint::black_box;

fn create_products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            let base_price = (i % 17) as f64;
            let tax = (i % 5) as f64 * 0.5;
            Product::new(format!("p{}", i % (count / 2 + 1)), base_price, tax)
        })
        .collect()
}

fn bench_filter_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_forms");

    for size in [10, 1_000, 100_000] {
        let products = create_products(size);

        group.bench_with_input(BenchmarkId::new("pipeline", size), &products, |b, products| {
            b.iter(|| compute_over_threshold(black_box(products)))
        });

        group.bench_with_input(BenchmarkId::new("loop", size), &products, |b, products| {
            b.iter(|| compute_over_threshold_imperative(black_box(products)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_forms);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use savora_catalog::{ConversionEdge, Product, ProductId};
use savora_core::AggregateId;
use savora_units::{convert, validate_conversions};

/// A product with a chain of `n` units: u0 -> u1 -> ... -> u{n-1}.
fn chain_product(n: usize) -> Product {
    let conversions = (0..n - 1)
        .map(|i| ConversionEdge {
            from_unit: format!("u{i}"),
            to_unit: format!("u{}", i + 1),
            conversion_rate: 2.0,
        })
        .collect();
    Product::new(ProductId::new(AggregateId::new()), "bench", "u0", "u1")
        .unwrap()
        .with_conversions(conversions)
}

fn bench_direct_resolution(c: &mut Criterion) {
    let product = chain_product(8);
    c.bench_function("convert_direct_edge", |b| {
        b.iter(|| convert(black_box(&product), "u0", "u1", black_box(3.0)))
    });
}

fn bench_graph_search_resolution(c: &mut Criterion) {
    let product = chain_product(24);
    c.bench_function("convert_graph_search_23_hops", |b| {
        b.iter(|| convert(black_box(&product), "u0", "u23", black_box(3.0)))
    });
}

fn bench_validation(c: &mut Criterion) {
    let product = chain_product(16);
    c.bench_function("validate_conversions_16_units", |b| {
        b.iter(|| validate_conversions(black_box(&product)))
    });
}

criterion_group!(
    benches,
    bench_direct_resolution,
    bench_graph_search_resolution,
    bench_validation
);
criterion_main!(benches);

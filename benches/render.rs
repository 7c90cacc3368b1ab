use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use readable::{to_readable, to_string, Value, ValueMap};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn benchmark_render_scalars(c: &mut Criterion) {
    let values = [
        Value::from(true),
        Value::Null,
        Value::from(18u8),
        Value::from('\n'),
        Value::from(-200),
        Value::from(0.3333333333333333),
        Value::from("English"),
    ];

    c.bench_function("render_scalars", |b| b.iter(|| to_string(black_box(&values))));
}

fn benchmark_render_primitive_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_primitive_array");

    for size in [10, 100, 1000].iter() {
        let bytes = Value::from((0..*size).map(|i| i as u8).collect::<Vec<u8>>());
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| to_string(std::slice::from_ref(black_box(bytes))))
        });
    }
    group.finish();
}

fn benchmark_render_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_map");

    for size in [10, 100, 500].iter() {
        let map: ValueMap = (0..*size).map(|i| (i, format!("value-{}", i))).collect();
        let value = Value::from(map);
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| black_box(value).to_string())
        });
    }
    group.finish();
}

fn benchmark_render_serde_struct(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("render_serde_struct", |b| b.iter(|| to_readable(black_box(&user))));
}

fn benchmark_render_serde_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_serde_array");

    for size in [10, 50, 100].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU-{:04}", i),
                name: format!("Product {}", i),
                price: 19.99 + i as f64,
                quantity: i,
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| to_readable(black_box(products)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_render_scalars,
    benchmark_render_primitive_array,
    benchmark_render_map,
    benchmark_render_serde_struct,
    benchmark_render_serde_array
);
criterion_main!(benches);

//! Path access benchmarks
//!
//! Measures reads, writes and flattening against trees of growing width.
//!
//! Run benchmarks: `cargo bench --bench path_access`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use keyget::{Path, Segment, Value};
use serde_json::json;
use std::hint::black_box;

/// A tree with `width` records, each three levels deep.
fn build_tree(width: usize) -> Value {
    let records: Vec<serde_json::Value> = (0..width)
        .map(|i| {
            json!({
                "id": i,
                "profile": { "name": format!("user-{}", i), "tags": ["a", "b", "c"] },
            })
        })
        .collect();
    Value::from(json!({ "records": records }))
}

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("reads");
    for width in [10usize, 100, 1000] {
        let tree = build_tree(width);
        let dotted = format!("records.{}.profile.name", width - 1);
        let explicit = Path::new(vec![
            Segment::key("records"),
            Segment::index(width - 1),
            Segment::key("profile"),
            Segment::key("name"),
        ]);

        group.bench_with_input(BenchmarkId::new("get_dotted", width), &tree, |b, tree| {
            b.iter(|| keyget::get(black_box(tree), black_box(dotted.as_str())))
        });
        group.bench_with_input(BenchmarkId::new("get_explicit", width), &tree, |b, tree| {
            b.iter(|| keyget::get(black_box(tree), black_box(&explicit)))
        });
        group.bench_with_input(BenchmarkId::new("has_missing", width), &tree, |b, tree| {
            b.iter(|| keyget::has(black_box(tree), black_box("records.missing.name")))
        });
    }
    group.finish();
}

fn bench_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("writes");
    group.bench_function("set_into_empty", |b| {
        b.iter(|| keyget::set(Value::Null, black_box("a.b.c.d.e"), Value::from(1)))
    });
    group.bench_function("push_repeated", |b| {
        b.iter(|| {
            let mut tree = Value::object();
            for i in 0..100 {
                tree = match keyget::push(tree, "list.items", Value::from(i)) {
                    Ok(tree) => tree,
                    Err(_) => Value::Null,
                };
            }
            tree
        })
    });
    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("structure");
    for width in [10usize, 100, 1000] {
        let tree = build_tree(width);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &tree, |b, tree| {
            b.iter(|| keyget::structure(black_box(tree)).len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reads, bench_writes, bench_structure);
criterion_main!(benches);

//! Benchmarks for streamtally accumulators
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use streamtally::traits::Accumulate;
use streamtally::{Accumulator, Collection, NumericAccumulator, Value};

// ============================================================================
// Numeric Accumulator Benchmarks
// ============================================================================

fn bench_numeric(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric");
    group.throughput(Throughput::Elements(1));

    group.bench_function("append", |b| {
        let mut acc = NumericAccumulator::new();
        let mut x = 0.0f64;
        b.iter(|| {
            acc.append(black_box(x));
            x += 0.5;
        });
    });

    group.bench_function("display", |b| {
        let acc: NumericAccumulator = (0..10_000).map(|i| i as f64 * 0.37).collect();
        b.iter(|| black_box(acc.to_string()));
    });

    group.bench_function("merge", |b| {
        let a: NumericAccumulator = (0..10_000).map(|i| i as f64).collect();
        let other: NumericAccumulator = (10_000..20_000).map(|i| i as f64).collect();
        b.iter(|| {
            let mut merged = a.clone();
            merged.merge(black_box(&other));
            black_box(merged)
        });
    });

    group.finish();
}

// ============================================================================
// Generic Accumulator Benchmarks
// ============================================================================

fn bench_generic(c: &mut Criterion) {
    let mut group = c.benchmark_group("generic");
    group.throughput(Throughput::Elements(1));

    group.bench_function("append", |b| {
        let mut acc = Accumulator::new();
        let mut i = 0i64;
        b.iter(|| {
            acc.append(Value::from(black_box(i)));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("replay_10k", |b| {
        let acc: Accumulator<Value> = (0..10_000i64).map(Value::from).collect();
        b.iter(|| black_box(acc.iter().count()));
    });

    group.finish();
}

// ============================================================================
// Collection Benchmarks
// ============================================================================

fn bench_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection");
    group.throughput(Throughput::Elements(1));

    group.bench_function("record_numeric", |b| {
        let mut collect = Collection::new();
        let mut x = 0.0f64;
        b.iter(|| {
            collect.record(black_box("latency"), x).unwrap();
            x += 1.0;
        });
    });

    group.bench_function("record_many_keys", |b| {
        let keys: Vec<String> = (0..64).map(|i| format!("key_{}", i)).collect();
        let mut collect = Collection::new();
        let mut i = 0usize;
        b.iter(|| {
            collect.record(&keys[i % keys.len()], i).unwrap();
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("report", |b| {
        let mut collect = Collection::new();
        for k in 0..32 {
            collect.record_all(&format!("key_{}", k), 0..100).unwrap();
        }
        b.iter(|| black_box(collect.report().to_string()));
    });

    group.finish();
}

criterion_group!(benches, bench_numeric, bench_generic, bench_collection);
criterion_main!(benches);

//! # Heap Performance Benchmark
//!
//! The allocator sits under every dynamic structure in the engine, so its
//! costs are measured directly:
//! - allocate/release round trips (the hot path)
//! - allocation into a fragmented sector list (next-fit worst case)
//! - the full-list validate walk
//!
//! Run with: `cargo bench --package cinder_core`

// Benchmarks don't need docs and may have intentionally unused results
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cinder_core::{Heap, MEGABYTE};

/// Benchmark: allocate and immediately release, the tightest possible churn.
fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    for size in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut heap = Heap::new(MEGABYTE);
            b.iter(|| {
                let block = heap.allocate(size).unwrap();
                heap.release(black_box(block));
            });
        });
    }

    group.finish();
}

/// Benchmark: allocation against a checkerboard of used and free sectors,
/// forcing the rover to walk.
fn bench_fragmented_allocate(c: &mut Criterion) {
    c.bench_function("fragmented_allocate", |b| {
        let mut heap = Heap::new(MEGABYTE);

        // carve the heap into alternating 64-byte holes
        let blocks: Vec<_> = (0..2048)
            .map(|_| heap.allocate(64).unwrap())
            .collect();
        for block in blocks.iter().step_by(2) {
            heap.release(*block);
        }

        // each 32-byte request claims one hole whole (no split), so the
        // rover marches around the checkerboard
        b.iter(|| {
            let block = heap.allocate(32).unwrap();
            heap.release(black_box(block));
        });
    });
}

/// Benchmark: integrity walk over a long sector list.
fn bench_validate_walk(c: &mut Criterion) {
    c.bench_function("validate_walk", |b| {
        let mut heap = Heap::new(MEGABYTE);
        let blocks: Vec<_> = (0..4096)
            .map(|_| heap.allocate(128).unwrap())
            .collect();
        for block in blocks.iter().step_by(2) {
            heap.release(*block);
        }

        b.iter(|| black_box(heap.validate()));
    });
}

/// Benchmark: the used() accounting walk, which visits every sector.
fn bench_used_walk(c: &mut Criterion) {
    c.bench_function("used_walk", |b| {
        let mut heap = Heap::new(MEGABYTE);
        for _ in 0..1024 {
            let _ = heap.allocate(256).unwrap();
        }

        b.iter(|| black_box(heap.used()));
    });
}

criterion_group!(
    benches,
    bench_round_trip,
    bench_fragmented_allocate,
    bench_validate_walk,
    bench_used_walk
);
criterion_main!(benches);

// ============================================================================
// Q31 Square Root Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Scalar - single calls across input magnitudes (normalization shift varies)
// 2. Rejection - the non-positive early-out path
// 3. Slice - the slice driver across buffer lengths
//
// The scalar routine has no data-dependent loop, so timings across
// magnitudes should be flat.
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use q31_sqrt::prelude::*;
use std::hint::black_box;

// ============================================================================
// Scalar Benchmarks
// ============================================================================

fn benchmark_scalar_magnitudes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt_q31_scalar");

    let inputs = [
        ("tiny", 0x0000_0003),
        ("small", 0x0001_2345),
        ("quarter", 0x2000_0000),
        ("half", 0x4000_0000),
        ("max", i32::MAX),
    ];

    for (label, raw) in inputs.iter() {
        let input = Q31::from_raw(*raw);
        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, &input| {
            b.iter(|| black_box(sqrt_q31(black_box(input))));
        });
    }

    group.finish();
}

fn benchmark_rejection(c: &mut Criterion) {
    c.bench_function("sqrt_q31_rejected", |b| {
        b.iter(|| black_box(sqrt_q31(black_box(Q31::MIN))));
    });
}

// ============================================================================
// Slice Benchmarks
// ============================================================================

fn benchmark_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt_q31_slice");

    for len in [16usize, 256, 4096].iter() {
        // Spread inputs across the whole positive range
        let step = (i32::MAX as usize / *len) as i32;
        let src: Vec<Q31> = (1..=*len as i32).map(|i| Q31::from_raw(i * step)).collect();
        let mut dst = vec![Q31::ZERO; *len];

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &src, |b, src| {
            b.iter(|| black_box(sqrt_q31_slice(src, &mut dst)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_scalar_magnitudes,
    benchmark_rejection,
    benchmark_slice,
);
criterion_main!(benches);

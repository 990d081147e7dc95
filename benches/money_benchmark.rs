// ============================================================================
// Money Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Text to smallest units
// 2. Arithmetic - Checked add, divide, decimal factor multiply
// 3. Allocation - Ratio and equal splits at different widths
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use money_value::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

fn usd() -> Currency {
    Currency::new("USD").unwrap()
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for input in ["7", "-12.5", "1234567,89"] {
        group.bench_with_input(BenchmarkId::new("string_to_units", input), input, |b, s| {
            b.iter(|| black_box(Money::string_to_units(black_box(s))))
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let a = Money::parse("1234.56", usd()).unwrap();
    let b = Money::parse("78.90", usd()).unwrap();
    let rate = Decimal::new(91234, 5);

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(black_box(a).add(black_box(&b))))
    });

    group.bench_function("divide", |bench| {
        bench.iter(|| black_box(black_box(a).divide(black_box(7))))
    });

    group.bench_function("convert", |bench| {
        bench.iter(|| black_box(black_box(a).convert(usd(), black_box(rate))))
    });

    group.finish();
}

// ============================================================================
// Allocation Benchmarks
// ============================================================================

fn benchmark_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation");
    let amount = Money::parse("1000000.01", usd()).unwrap();

    for parts in [3usize, 16, 256].iter() {
        let ratios: Vec<i64> = (1..=*parts as i64).collect();

        group.bench_with_input(BenchmarkId::new("allocate", parts), &ratios, |b, ratios| {
            b.iter(|| black_box(amount.allocate(black_box(ratios.as_slice()))))
        });

        group.bench_with_input(BenchmarkId::new("allocate_to", parts), parts, |b, parts| {
            b.iter(|| black_box(amount.allocate_to(black_box(*parts as i64))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_arithmetic,
    benchmark_allocation
);
criterion_main!(benches);

//! Cleaning and output benchmarks over synthetic exchange rows.
//!
//! Run with: `cargo bench --package quotewire-bench`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quotewire_bench::synthetic_rows;
use quotewire_format::{DelimitedFormatter, Formatter};
use quotewire_series::{CleanOptions, clean};
use std::hint::black_box;

/// Row counts: one month, one year, ten years of trading days.
const SIZES: [usize; 3] = [21, 250, 2_500];

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
}

fn clean_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");
    let options = CleanOptions::default();

    for days in SIZES {
        let rows = synthetic_rows(start(), days, 10);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &rows, |b, rows| {
            b.iter(|| clean(black_box(rows), &options));
        });
    }

    group.finish();
}

fn tsv_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_tsv");
    let formatter = DelimitedFormatter::tsv();

    for days in SIZES {
        let table = clean(&synthetic_rows(start(), days, 0), &CleanOptions::default());
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &table, |b, table| {
            b.iter(|| {
                let mut out = Vec::with_capacity(days * 96);
                formatter.write_series(black_box(table), &mut out).unwrap();
                out
            });
        });
    }

    group.finish();
}

criterion_group!(benches, clean_benchmark, tsv_benchmark);
criterion_main!(benches);

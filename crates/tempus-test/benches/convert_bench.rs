//! Benchmarks for converter operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tempus_convert::{to_date_string, to_epoch_seconds};
use tempus_core::EpochSeconds;

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_epoch_to_date", |b| {
        b.iter(|| to_date_string(black_box(EpochSeconds::new(1451613802))))
    });

    c.bench_function("format_pre_epoch", |b| {
        b.iter(|| to_date_string(black_box(EpochSeconds::new(-1_000_000_000))))
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_canonical_date", |b| {
        b.iter(|| to_epoch_seconds(black_box("2016-01-01 02:03:22")))
    });

    c.bench_function("parse_rfc3339_date", |b| {
        b.iter(|| to_epoch_seconds(black_box("2016-01-01T02:03:22+02:00")))
    });

    c.bench_function("parse_reject_garbage", |b| {
        b.iter(|| to_epoch_seconds(black_box("invalid")).is_err())
    });
}

criterion_group!(benches, bench_format, bench_parse);
criterion_main!(benches);

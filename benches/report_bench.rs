/// Criterion benchmarks for speedup-report.
///
/// Benchmark groups:
///   • parse      – whitespace table parsing
///   • analyze    – aggregation, baseline split and speedups
///   • write_csv  – CSV serialisation of the augmented table
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use speedup_report::{
    analyze, config::ReportConfig, export::write_csv, table::Table,
    utils::generate_benchmark_table,
};
use std::hint::black_box;

const DIFFICULTIES: [&str; 4] = ["easy", "medium", "hard", "extreme"];

fn harness_table(threads: usize) -> Table {
    let threads: Vec<i64> = (1..=threads as i64).collect();
    generate_benchmark_table(&["ws", "bsp"], &DIFFICULTIES, &threads, 9999)
}

fn to_text(table: &Table) -> String {
    std::iter::once(table.columns.join(" "))
        .chain(table.rows.iter().map(|r| r.join(" ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &threads in &[8usize, 64, 512] {
        let text = to_text(&harness_table(threads));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &text, |b, text| {
            b.iter(|| Table::parse(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let config = ReportConfig::builder().verbose(false).build();
    let mut group = c.benchmark_group("analyze");
    for &threads in &[8usize, 64, 512] {
        let table = harness_table(threads);
        group.bench_with_input(BenchmarkId::from_parameter(threads), &table, |b, table| {
            b.iter(|| analyze(black_box(table), &config).unwrap())
        });
    }
    group.finish();
}

fn bench_write_csv(c: &mut Criterion) {
    let config = ReportConfig::builder().verbose(false).build();
    let augmented = analyze(&harness_table(64), &config).unwrap();
    c.bench_function("write_csv", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            write_csv(black_box(&augmented), &mut out).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_parse, bench_analyze, bench_write_csv);
criterion_main!(benches);

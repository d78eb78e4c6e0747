//! Benchmarks for the deal table and overview analytics
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mortgage_desk::analytics::{Histogram, Overview};
use mortgage_desk::deals::{ColumnMapping, DealTable};
use mortgage_desk::lookup::{lookup, LookupRequest};

fn create_csv(rows: usize) -> String {
    let mut csv = String::from("__price_predict,__churn_prob,__priority\n");
    for i in 0..rows {
        let price = 5.0 + (i % 97) as f64 * 0.37;
        let churn = (i % 1000) as f64 / 1000.0;
        let priority = ((i * 7919) % 10007) as f64 / 100.0;
        csv.push_str(&format!("{:.4},{:.4},{:.2}\n", price, churn, priority));
    }
    csv
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [1_000, 10_000, 100_000] {
        let csv = create_csv(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("from_reader_{}", size), |b| {
            b.iter(|| {
                DealTable::from_reader(black_box(csv.as_bytes()), &ColumnMapping::default(), "bench")
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_overview(c: &mut Criterion) {
    let csv = create_csv(100_000);
    let table = DealTable::from_reader(csv.as_bytes(), &ColumnMapping::default(), "bench").unwrap();
    let prices = table.prices();

    let mut group = c.benchmark_group("overview");

    group.bench_function("histogram_100k", |b| {
        b.iter(|| Histogram::compute(black_box(&prices), None))
    });

    group.bench_function("overview_100k", |b| {
        b.iter(|| Overview::compute(black_box(&table), Some(50)))
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let csv = create_csv(100_000);
    let table = DealTable::from_reader(csv.as_bytes(), &ColumnMapping::default(), "bench").unwrap();

    c.bench_function("lookup_found", |b| {
        b.iter(|| lookup(&table, black_box(&LookupRequest::triggered(54_321))))
    });

    c.bench_function("lookup_missing", |b| {
        b.iter(|| lookup(&table, black_box(&LookupRequest::triggered(1_000_000))))
    });
}

criterion_group!(benches, bench_load, bench_overview, bench_lookup);
criterion_main!(benches);

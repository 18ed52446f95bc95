//! Classifier and dry-run throughput benchmarks.

use std::path::PathBuf;

use contact_audit::{Classifier, Dataset, Loader, SourceMetadata, TransformEngine};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Generate a synthetic contact export with a mix of clean and broken rows.
fn generate_contacts(rows: usize) -> String {
    let mut data =
        String::from("id\tfacilityId\tcontactName\tphone\taddress\tcreatedAt\tcreatedBy\n");

    for row in 0..rows {
        match row % 5 {
            0 => data.push_str(&format!("{}\t{}\tuser{}@example.com\t\t\t2023\tadmin\n", row, row, row)),
            1 => data.push_str(&format!("{}\tF{}\tContact {}\n", row, row % 50, row % 50)),
            2 => data.push_str(&format!("{}\n", row)),
            _ => data.push_str(&format!(
                "{}\tF{}\tContact {}\t555-0100\tMain St\t2023-01-01\tadmin\n",
                row, row, row
            )),
        }
    }

    data
}

fn dataset(text: &str) -> Dataset {
    let rows = Loader::new().parse_str(text);
    let source = SourceMetadata::new(PathBuf::from("bench.tsv"), String::new(), text.len() as u64, rows.len());
    Dataset::new(rows, source)
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for rows in [1_000, 10_000, 100_000].iter() {
        let data = dataset(&generate_contacts(*rows));
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let classifier = Classifier::new();
            b.iter(|| black_box(classifier.classify(data)));
        });
    }

    group.finish();
}

fn bench_dry_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("dry_run");

    for rows in [1_000, 10_000, 100_000].iter() {
        let data = dataset(&generate_contacts(*rows));
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let engine = TransformEngine::from_dataset(data).unwrap();
            b.iter(|| black_box(engine.run(data.data_rows())));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let text = generate_contacts(10_000);
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("10k_rows", |b| {
        let loader = Loader::new();
        b.iter(|| black_box(loader.parse_str(&text)));
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_classify, bench_dry_run);
criterion_main!(benches);

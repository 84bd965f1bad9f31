use std::hint::black_box;
use std::io::Cursor;

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use markdown_journal::build_journal;
use markdown_journal::indexer::build_journal_from_tags;
use markdown_journal::tags::{TagRecord, TagWriter};

const LABELS: [&str; 8] =
    ["recipe", "groceries", "travel", "work", "family", "reading", "garden", "health"];

/// Generate synthetic tags: one title and three labels per daily entry
fn generate_records(num_entries: usize) -> Vec<TagRecord> {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

    (0..num_entries)
        .flat_map(|i| {
            let date = start.checked_add_days(Days::new(i as u64)).unwrap();
            let file = format!("diary/{}.md", date.format("%Y-%m-%d"));
            let title = TagRecord::new(format!("Entry {}", i), &file, "1")
                .with_field("line", "1")
                .with_field("kind", "title");

            let labels = (0..3).map(move |j| {
                let line = (j * 4 + 3).to_string();
                TagRecord::new(LABELS[(i + j) % LABELS.len()], &file, &line)
                    .with_field("line", &line)
                    .with_field("kind", "label")
                    .with_field("heading", format!("Entry {}", i))
            });

            std::iter::once(title).chain(labels).collect::<Vec<_>>()
        })
        .collect()
}

fn bench_build_journal(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_journal");

    for size in [100, 1_000, 10_000].iter() {
        let records = generate_records(*size);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| build_journal(black_box(records.clone())));
        });
    }

    group.finish();
}

fn bench_build_journal_from_tags(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_journal_from_tags");

    for size in [100, 1_000, 10_000].iter() {
        let mut tag_file = Vec::new();
        TagWriter::new(&mut tag_file).write_all(&generate_records(*size)).unwrap();

        group.throughput(Throughput::Bytes(tag_file.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tag_file, |b, tag_file| {
            b.iter(|| build_journal_from_tags(Cursor::new(black_box(tag_file))).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_journal, bench_build_journal_from_tags);
criterion_main!(benches);

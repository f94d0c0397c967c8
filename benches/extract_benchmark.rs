//! Benchmarks for untable extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks build synthetic documents with many pages of titled
//! tables and measure the full extraction pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use untable::extract::{ExtractOptions, TableExtractor};
use untable::model::{BoundingPoly, Document, Page, Paragraph, Table, TableCell, TableRow, TextAnchor};

/// Appends a line of ASCII text and returns its anchor.
fn push(doc: &mut Document, s: &str) -> TextAnchor {
    let start = doc.text.len() as i64;
    doc.text.push_str(s);
    doc.text.push('\n');
    TextAnchor::from_range(start, start + s.len() as i64)
}

/// Creates a document with `page_count` pages, each holding a few
/// paragraphs and one table of `rows` x 4 cells.
fn create_test_document(page_count: usize, rows: usize) -> Document {
    let mut doc = Document::new("");

    for p in 0..page_count {
        let mut page = Page::new(p as u32 + 1);
        for i in 0..5 {
            let anchor = push(&mut doc, &format!("Paragraph {} on page {}", i, p + 1));
            let top = 0.05 + i as f32 * 0.02;
            page.add_paragraph(Paragraph::new(
                anchor,
                BoundingPoly::from_rect(0.1, top, 0.9, top + 0.015),
            ));
        }

        let mut table = Table::new(BoundingPoly::from_rect(0.1, 0.2, 0.9, 0.9));
        let header = (0..4)
            .map(|c| TableCell::new(push(&mut doc, &format!("Column {}", c))))
            .collect();
        table.add_header_row(TableRow::new(header));
        for r in 0..rows {
            let cells = (0..4)
                .map(|c| TableCell::new(push(&mut doc, &format!("r{}c{}\nwrapped", r, c))))
                .collect();
            table.add_body_row(TableRow::new(cells));
        }
        page.add_table(table);
        doc.add_page(page);
    }

    doc
}

fn bench_extract_small(c: &mut Criterion) {
    let doc = create_test_document(1, 20);
    let extractor = TableExtractor::new();

    c.bench_function("extract_1_page", |b| {
        b.iter(|| extractor.extract(black_box(&doc)))
    });
}

fn bench_extract_sequential(c: &mut Criterion) {
    let doc = create_test_document(50, 40);
    let extractor = TableExtractor::with_options(ExtractOptions::new().sequential());

    c.bench_function("extract_50_pages_sequential", |b| {
        b.iter(|| extractor.extract(black_box(&doc)))
    });
}

fn bench_extract_parallel(c: &mut Criterion) {
    let doc = create_test_document(50, 40);
    let extractor = TableExtractor::new();

    c.bench_function("extract_50_pages_parallel", |b| {
        b.iter(|| extractor.extract(black_box(&doc)))
    });
}

criterion_group!(
    benches,
    bench_extract_small,
    bench_extract_sequential,
    bench_extract_parallel
);
criterion_main!(benches);

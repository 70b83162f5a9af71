//! Benchmarks for laying out parsed documents into terminal lines.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use starmark::markup::parse;
use starmark::practices::practices_document;
use starmark::ui::style::Theme;
use starmark::ui::text::{LayoutOptions, document_lines};

fn bench_layout_practices(c: &mut Criterion) {
    let doc = practices_document();
    let theme = Theme::default();
    let options = LayoutOptions {
        width: Some(78),
        strip_heading_breaks: false,
    };
    c.bench_function("layout_practices_78", |b| {
        b.iter(|| document_lines(black_box(&doc), options, &theme));
    });
}

fn bench_layout_long_paragraph(c: &mut Criterion) {
    let source = "word **bold** *it* ".repeat(2000);
    let doc = parse(&source);
    let theme = Theme::default();
    let options = LayoutOptions {
        width: Some(40),
        strip_heading_breaks: true,
    };
    c.bench_function("layout_long_paragraph_40", |b| {
        b.iter(|| document_lines(black_box(&doc), options, &theme));
    });
}

criterion_group!(benches, bench_layout_practices, bench_layout_long_paragraph);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sealscan::{
    CanonicalizeConfig, DocumentAnalyzer, MatchConfig, MatchEngine, PageText, SectionResolver,
    canonicalize, split_pages,
};

const SPEC_SECTION: &str = include_str!("../tests/fixtures/section_033000.txt");

/// Synthetic section with `articles` numbered articles, each carrying a
/// full paragraph/subparagraph/item ladder and some certification text.
fn synthetic_page(articles: usize) -> String {
    let mut text = String::new();
    for n in 1..=articles {
        text.push_str(&format!("1.{n:02} ARTICLE TITLE\n"));
        text.push_str("A. Submittals\n");
        text.push_str("1. Shop drawings shall be sealed by a Professional Engineer.\n");
        text.push_str("a. Calculations stamped by the Engineer of Record.\n");
        text.push_str("b. Delegated design is not required unless otherwise noted.\n");
    }
    text
}

fn bench_canonicalize(c: &mut Criterion) {
    let cfg = CanonicalizeConfig::default();
    let mut group = c.benchmark_group("canonicalize");
    group.throughput(Throughput::Bytes(SPEC_SECTION.len() as u64));
    group.bench_function("fixture", |b| {
        b.iter(|| black_box(canonicalize(black_box(SPEC_SECTION), &cfg)));
    });
    group.finish();
}

fn bench_match_engine(c: &mut Criterion) {
    let engine = MatchEngine::new(&MatchConfig::default()).expect("default vocabulary");
    let cfg = CanonicalizeConfig::default();
    let mut group = c.benchmark_group("match_engine");

    for articles in [4usize, 32, 128] {
        let normalized = canonicalize(&synthetic_page(articles), &cfg).normalized;
        group.throughput(Throughput::Bytes(normalized.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(articles),
            &normalized,
            |b, text| b.iter(|| black_box(engine.find_matches(black_box(text)))),
        );
    }
    group.finish();
}

fn bench_section_resolver(c: &mut Criterion) {
    let text = synthetic_page(128);
    c.bench_function("section_resolver_128_articles", |b| {
        b.iter(|| {
            let resolver = SectionResolver::new(black_box(&text), None);
            black_box(resolver.resolve(text.len() / 2))
        });
    });
}

fn bench_analyze_document(c: &mut Criterion) {
    let analyzer = DocumentAnalyzer::with_defaults().expect("default analyzer");
    let fixture = split_pages(SPEC_SECTION);
    let long: Vec<PageText> = (1..=20)
        .map(|page| PageText::new(page, synthetic_page(8)))
        .collect();

    let mut group = c.benchmark_group("analyze_document");
    group.bench_function("fixture", |b| {
        b.iter(|| black_box(analyzer.analyze_document(black_box(&fixture))));
    });
    group.bench_function("twenty_pages", |b| {
        b.iter(|| black_box(analyzer.analyze_document(black_box(&long))));
    });
    group.finish();
}

fn bench_analyze_documents(c: &mut Criterion) {
    let analyzer = DocumentAnalyzer::with_defaults().expect("default analyzer");
    let batch: Vec<Vec<PageText>> = (0..64).map(|_| split_pages(SPEC_SECTION)).collect();

    let mut group = c.benchmark_group("analyze_documents");
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function("batch_64", |b| {
        b.iter(|| black_box(analyzer.analyze_documents(black_box(&batch))));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_canonicalize,
    bench_match_engine,
    bench_section_resolver,
    bench_analyze_document,
    bench_analyze_documents
);
criterion_main!(benches);

//! Performance benchmarks for keyword scoring.
//!
//! These benchmarks measure the scoring pipeline on synthetic filing text:
//! - Normalization of a large document
//! - Index construction for the built-in vocabulary
//! - Scanning pre-normalized tokens at different document sizes

use ai_intensity::filings::extract_text_content;
use ai_intensity::intensity::{default_keywords, scan, IntensityEngine, KeywordIndex, Normalizer};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const PARAGRAPH: &str = "<P><FONT>The Company continues to invest in artificial \
    intelligence, machine-learning and A.I. driven analytics. Our large language \
    models, computer vision and recommendation systems support customers while \
    supply chain, revenue recognition and lease accounting remain unchanged. \
    Neural networks power anomaly detection &amp; predictive analytics.</FONT></P>\n";

/// Build a synthetic full submission with `paragraphs` paragraphs of prose and
/// a binary attachment of similar size.
fn synthetic_submission(paragraphs: usize) -> String {
    let body = PARAGRAPH.repeat(paragraphs);
    let binary = "M9V5N97)A=&EV92!A:0M9V5N97)A=&EV92!A:0\n".repeat(paragraphs * 4);
    format!(
        "FILED AS OF DATE: 20230215\n<DOCUMENT>\n<TYPE>10-K\n<TEXT>{}</TEXT>\n</DOCUMENT>\n\
         <DOCUMENT>\n<TYPE>GRAPHIC\n{}</DOCUMENT>\n",
        body, binary
    )
}

fn bench_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    let text = PARAGRAPH.repeat(1_000);

    c.bench_function("normalize_1000_paragraphs", |b| {
        b.iter(|| normalizer.normalize(black_box(&text)));
    });
}

fn bench_build_index(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    let keywords = default_keywords();

    c.bench_function("build_default_index", |b| {
        b.iter(|| KeywordIndex::build(&normalizer, black_box(&keywords)));
    });
}

fn bench_scan(c: &mut Criterion) {
    let engine = IntensityEngine::new(default_keywords());
    let mut group = c.benchmark_group("scan_tokens");

    for size in [100, 1_000, 10_000].iter() {
        let tokens = engine.normalize(&PARAGRAPH.repeat(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tokens, |b, tokens| {
            b.iter(|| scan(black_box(tokens), engine.index()));
        });
    }

    group.finish();
}

fn bench_score_submission(c: &mut Criterion) {
    let engine = IntensityEngine::new(default_keywords());
    let raw = synthetic_submission(2_000);

    c.bench_function("score_full_submission", |b| {
        b.iter(|| engine.score(&extract_text_content(black_box(&raw))));
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_build_index,
    bench_scan,
    bench_score_submission
);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use trieseek_core::SearchEngine;

const TEXT: &str = "Search engines use inverted indexes and prefix tries. \
    An inverted index maps every normalized token to the documents containing it, \
    while the trie stores the vocabulary for autocompletion and word segmentation.";

fn build_engine(docs: usize) -> SearchEngine {
    let mut e = SearchEngine::new();
    for i in 0..docs {
        e.ingest(&format!("https://example.com/{i}"), &format!("{TEXT} document{i} entries{}", i % 7));
    }
    e
}

fn bench_normalize(c: &mut Criterion) {
    let e = SearchEngine::new();
    c.bench_function("normalize_paragraph", |b| b.iter(|| e.normalizer().normalize(TEXT)));
}

fn bench_search(c: &mut Criterion) {
    let e = build_engine(1_000);
    c.bench_function("search_two_terms", |b| b.iter(|| e.search("inverted tries")));
    c.bench_function("autocomplete_prefix", |b| b.iter(|| e.autocomplete("doc")));
    c.bench_function("word_break", |b| b.iter(|| e.word_break("searchenginesuseinvertedindexes")));
}

criterion_group!(benches, bench_normalize, bench_search);
criterion_main!(benches);

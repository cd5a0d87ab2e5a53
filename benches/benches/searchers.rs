//! Benchmark matcher construction and search time.

use criterion::{criterion_group, criterion_main, Criterion};

use benches::corpus::{self, Corpus};
use benches::{BoyerMoore, KnuthMorrisPratt, Memmem, Naive, Searcher};

criterion_main! { benches }
criterion_group! {
    benches,
    bench_build,
    bench_search_english,
    bench_search_dna,
    bench_search_absent
}

/// Benchmarks the time taken to construct a searcher for a pattern.
fn bench_build(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");

    let Corpus { pattern, .. } = corpus::english(24, 1 << 10);

    macro_rules! bench {
        ($S:ty) => {{
            g.bench_function(<$S as Searcher>::name(), |b| {
                b.iter(|| <$S as Searcher>::build(&pattern));
            });
        }};
    }

    bench!(BoyerMoore);
    bench!(KnuthMorrisPratt);
    bench!(Memmem);
    bench!(Naive);
}

/// Benchmarks searching prose-like text for a pattern taken from it.
fn bench_search_english(c: &mut Criterion) {
    bench_search(c, "search_english", corpus::english(16, 1 << 16));
}

/// Benchmarks searching a small alphabet where windows rarely skip far.
fn bench_search_dna(c: &mut Criterion) {
    bench_search(c, "search_dna", corpus::dna(10, 1 << 16));
}

/// Benchmarks searching text that shares no bytes with the pattern.
fn bench_search_absent(c: &mut Criterion) {
    bench_search(c, "search_absent", corpus::absent(16, 1 << 16));
}

fn bench_search(c: &mut Criterion, name: &str, corpus: Corpus) {
    let mut g = c.benchmark_group(name);

    macro_rules! bench {
        ($S:ty) => {{
            let searcher = <$S as Searcher>::build(&corpus.pattern);
            g.bench_function(<$S as Searcher>::name(), |b| {
                b.iter(|| <$S as Searcher>::search(&searcher, &corpus.text));
            });
        }};
    }

    bench!(BoyerMoore);
    bench!(KnuthMorrisPratt);
    bench!(Memmem);
    bench!(Naive);
}

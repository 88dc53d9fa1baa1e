//! Benchmarks for the `fluentkit` builders and evaluator
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fluentkit::{Case, StringBuilder, evaluate};

/// A deterministic haystack of `len` chars with a marker near the end.
fn make_haystack(len: usize) -> String {
    let mut s: String = "abcdefghij".chars().cycle().take(len).collect();
    s.push_str("MARKER");
    s
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for len in [64, 1_024, 16_384] {
        let builder = StringBuilder::new(make_haystack(len));
        for case in [Case::Sensitive, Case::Insensitive] {
            group.bench_with_input(
                BenchmarkId::new(format!("index_of/{case:?}"), len),
                &builder,
                |b, builder| b.iter(|| builder.index_of(black_box("marker"), case, None)),
            );
        }
    }
    group.finish();
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("append_1k", |b| {
        b.iter(|| {
            let mut builder = StringBuilder::default();
            for _ in 0..1_000 {
                let _ = builder.append(black_box("chunk"));
            }
            builder.len()
        });
    });
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate", |b| b.iter(|| evaluate(black_box("123456*789"))));
}

criterion_group!(benches, bench_search, bench_append, bench_evaluate);
criterion_main!(benches);

#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Merge benchmarks: qparams policies vs url crate's `query_pairs_mut`
use criterion::{Criterion, criterion_group, criterion_main};
use qparams::{Policy, QueryMerge};
use std::hint::black_box;

// Rust url crate
use url::Url as UrlCrate;

const SHORT: &str = "http://example.com/search?q=rust&page=2";
const LONG: &str = "https://example.com/a/b/c?utm_source=news&utm_medium=email&utm_campaign=spring\
    &id=42&id=43&tag=a&tag=b&tag=c&flag&sort=desc&lang=en#results";

fn params() -> [(&'static str, &'static str); 4] {
    [("page", "3"), ("tag", "b"), ("lang", "de"), ("new", "value with spaces")]
}

fn bench_append_short(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_short");

    group.bench_function("qparams", |b| {
        b.iter(|| QueryMerge::new(black_box(SHORT)).params(params()).apply());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let mut url = UrlCrate::parse(black_box(SHORT)).unwrap();
            url.query_pairs_mut().extend_pairs(params());
            url.to_string()
        });
    });

    group.finish();
}

fn bench_policies_long(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies_long");

    for policy in [Policy::Append, Policy::DedupeGroup, Policy::Override] {
        group.bench_function(policy.as_str(), |b| {
            b.iter(|| {
                QueryMerge::new(black_box(LONG))
                    .policy(policy)
                    .params(params())
                    .apply()
            });
        });
    }

    group.finish();
}

fn bench_noop(c: &mut Criterion) {
    c.bench_function("noop", |b| {
        b.iter(|| QueryMerge::new(black_box(LONG)).apply());
    });
}

criterion_group!(benches, bench_append_short, bench_policies_long, bench_noop);

criterion_main!(benches);

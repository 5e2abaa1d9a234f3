use std::hint::black_box;

use canonical::{canonicalize, CanonicalizeConfig};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

fn bench_canonicalize(c: &mut Criterion) {
    let config = CanonicalizeConfig::default();
    let mut group = c.benchmark_group("canonicalize");

    let line = "  A.  Shop drawings shall be sealed by a\r\n      licensed Professional Engineer.\n";
    for size in [64, 512, 4096, 32768].iter() {
        let text = line.repeat((*size / line.len()).max(1));
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| canonicalize(black_box(&text), black_box(&config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_canonicalize);
criterion_main!(benches);

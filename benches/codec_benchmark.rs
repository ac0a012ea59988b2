use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use devutils_rs::base64::{self as b64, ConversionOptions};
use devutils_rs::hash::{self, HashAlgorithm, HashEncoding};

/// Create printable test text of the given size.
fn make_test_text(size: usize) -> String {
    (0..size).map(|i| (b' ' + (i % 95) as u8) as char).collect()
}

fn label(size: usize) -> String {
    if size >= 1024 * 1024 {
        format!("{}MB", size / (1024 * 1024))
    } else {
        format!("{}KB", size / 1024)
    }
}

fn bench_base64(c: &mut Criterion) {
    let sizes = [1024, 64 * 1024, 1024 * 1024];
    let plain = ConversionOptions::default();
    let wrapped = ConversionOptions {
        chunk_output: true,
        ..Default::default()
    };

    let mut group = c.benchmark_group("base64");
    for &size in &sizes {
        let text = make_test_text(size);
        let encoded = b64::encode(&text, &wrapped).unwrap();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encode", label(size)), &text, |b, t| {
            b.iter(|| b64::encode(t, &plain).unwrap());
        });
        group.bench_with_input(
            BenchmarkId::new("encode_wrapped", label(size)),
            &text,
            |b, t| {
                b.iter(|| b64::encode(t, &wrapped).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("decode_wrapped", label(size)),
            &encoded,
            |b, e| {
                b.iter(|| b64::decode(e, &plain).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let sizes = [1024, 64 * 1024, 1024 * 1024];

    let mut group = c.benchmark_group("hash");
    for &size in &sizes {
        let text = make_test_text(size);
        group.throughput(Throughput::Bytes(size as u64));

        for algo in HashAlgorithm::SUPPORTED {
            group.bench_with_input(
                BenchmarkId::new(algo.name(), label(size)),
                &text,
                |b, t| {
                    b.iter(|| hash::digest(t, algo, HashEncoding::Hex, false));
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("all", label(size)), &text, |b, t| {
            b.iter(|| hash::digest_all(t, HashEncoding::Hex, false));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_base64, bench_hash);
criterion_main!(benches);

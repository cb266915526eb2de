use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gzip_core::{
    compression::CompressionLevel,
    config::GzipConfig,
    facade::Gzip,
    module::VuHandle,
};

fn payload(len: usize) -> Vec<u8> {
    b"{\"user\":42,\"items\":[1,2,3],\"note\":\"load test payload\"}"
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_bytes");
    for level in [CompressionLevel::Fast, CompressionLevel::Default, CompressionLevel::Best] {
        let gzip = Gzip::new(VuHandle::new(0), &GzipConfig::new(Some(level), None));
        for len in [1024usize, 64 * 1024] {
            let data = payload(len);
            group.throughput(Throughput::Bytes(len as u64));
            group.bench_with_input(BenchmarkId::new(level.to_string(), len), &data, |b, data| {
                b.iter(|| gzip.compress_bytes(black_box(data)))
            });
        }
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let gzip = Gzip::for_vu(VuHandle::new(0));
    let mut group = c.benchmark_group("decompress_bytes");
    for len in [1024usize, 64 * 1024] {
        let Ok(compressed) = gzip.compress_bytes(&payload(len)) else {
            continue;
        };
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &compressed, |b, data| {
            b.iter(|| gzip.decompress_bytes(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);

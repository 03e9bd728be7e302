//! Container writer benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use transcode_riff::{Container, FourCC};

fn generate_payload(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_append_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_chunk");

    for size in &[1023usize, 65536, 1048576] {
        let payload = generate_payload(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(format!("{}B", size)), &payload, |b, payload| {
            b.iter(|| {
                let mut riff = Container::riff(FourCC::new(*b"TEST"));
                riff.append_chunk(FourCC::new(*b"data"), payload);
                black_box(riff)
            });
        });
    }

    group.finish();
}

fn bench_nested_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_lists");
    let payload = generate_payload(4097);

    for depth in &[1usize, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter(|| {
                let mut list = Container::list(FourCC::new(*b"leaf"));
                list.append_chunk(FourCC::new(*b"data"), &payload);
                for _ in 1..depth {
                    let mut parent = Container::list(FourCC::new(*b"node"));
                    parent.append_list(&list);
                    list = parent;
                }

                let mut riff = Container::riff(FourCC::new(*b"TEST"));
                riff.append_list(&list);
                black_box(riff.bytes())
            });
        });
    }

    group.finish();
}

fn bench_write_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_to");

    let mut riff = Container::riff(FourCC::new(*b"TEST"));
    for _ in 0..64 {
        riff.append_chunk(FourCC::new(*b"blob"), &generate_payload(16383));
    }
    group.throughput(Throughput::Bytes(riff.encoded_len() as u64));

    group.bench_function("64_chunks", |b| {
        let mut sink = Vec::with_capacity(riff.encoded_len());
        b.iter(|| {
            sink.clear();
            riff.write_to(&mut sink).unwrap();
            black_box(sink.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_append_chunk, bench_nested_lists, bench_write_to);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use diffcompress::{decode, encode, encoded_len, Encoder};

/// Quality-string-like line: slow walk over printable scores with dropouts
fn quality_line(len: usize, seed: u32) -> Vec<u8> {
    let mut q = 70i32;
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            q = (q + (state >> 16) as i32 % 3 - 1).clamp(35, 74);
            if (state >> 8) % 97 == 0 { 35 } else { q as u8 }
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for len in [100, 1000, 10000] {
        let line = quality_line(len, 7);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("{len}_bytes"), |b| {
            let mut enc = Encoder::new();
            b.iter(|| black_box(enc.encode_line(black_box(&line)).unwrap().bytes.len()))
        });
    }
    group.finish();
}

fn bench_encoded_len(c: &mut Criterion) {
    let line = quality_line(10000, 11);
    let mut group = c.benchmark_group("encoded_len");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("10000_bytes", |b| b.iter(|| black_box(encoded_len(black_box(&line)))));
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let line = quality_line(10000, 3);
    let bytes = encode(&line).unwrap();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("10000_bytes", |b| b.iter(|| black_box(decode(black_box(&bytes)).unwrap())));
    group.finish();
}

criterion_group!(benches, bench_encode, bench_encoded_len, bench_decode);
criterion_main!(benches);

//! Criterion benchmark untuk Ring Buffer
//!
//! Run dengan: cargo bench

use std::io::{Read, Write};

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use splitring::Ring;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_buffer");
    group.throughput(Throughput::Elements(1));

    // Benchmark push
    group.bench_function("push", |b| {
        let mut rb: Ring<u64> = Ring::new(65536);
        let mut i = 0u64;
        b.iter(|| {
            if !rb.push_back(black_box(i)) {
                rb.pop_front();
                rb.push_back(black_box(i));
            }
            i = i.wrapping_add(1);
        });
    });

    // Benchmark pop
    group.bench_function("pop", |b| {
        let mut rb: Ring<u64> = Ring::new(65536);
        // Pre-fill
        for i in 0..32768 {
            rb.push_back(i);
        }
        b.iter(|| {
            if let Some(v) = rb.pop_front() {
                rb.push_back(black_box(v));
            }
        });
    });

    // Benchmark push+pop cycle
    group.bench_function("push_pop_cycle", |b| {
        let mut rb: Ring<u64> = Ring::new(65536);
        let mut i = 0u64;
        b.iter(|| {
            rb.push_back(black_box(i));
            let _ = rb.pop_front();
            i = i.wrapping_add(1);
        });
    });

    // Benchmark pop_index di tengah (worst case geser ~len/2)
    group.bench_function("pop_index_middle", |b| {
        let mut rb: Ring<u64> = Ring::new(1024);
        for i in 0..1024 {
            rb.push_back(i);
        }
        b.iter(|| {
            let v = rb.pop_index(black_box(512));
            rb.push_back(v.unwrap_or_default());
        });
    });

    group.finish();
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    // Batch operations
    for batch_size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_function(format!("batch_{}", batch_size), |b| {
            let mut rb: Ring<u64> = Ring::new(65536);
            let items: Vec<u64> = (0..*batch_size as u64).collect();
            let mut out = vec![0u64; *batch_size];
            b.iter(|| {
                rb.push_batch(black_box(&items));
                black_box(rb.read_slice(&mut out).ok());
            });
        });
    }

    // Byte stream: io::Write lalu io::Read
    group.throughput(Throughput::Bytes(128));
    group.bench_function("stream_64b", |b| {
        let mut rb: Ring<u8> = Ring::new(1024);
        let data: Vec<u8> = (0..64u8).collect();
        let mut buf = [0u8; 64];
        b.iter(|| {
            rb.write_all(black_box(&data)).ok();
            rb.read_exact(&mut buf).ok();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_throughput);
criterion_main!(benches);

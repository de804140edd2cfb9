use cryptography::hash::streebog::{streebog256, streebog512};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_streebog256(c: &mut Criterion) {
    c.bench_function("streebog256 64 bytes", |b| {
        b.iter(|| streebog256(black_box(&[0u8; 64])))
    });
}

pub fn bench_streebog512(c: &mut Criterion) {
    c.bench_function("streebog512 64 bytes", |b| {
        b.iter(|| streebog512(black_box(&[0u8; 64])))
    });
}

pub fn bench_streebog512_multiblock(c: &mut Criterion) {
    c.bench_function("streebog512 4096 bytes", |b| {
        b.iter(|| streebog512(black_box(&[0u8; 4096])))
    });
}

criterion_group!(
    benches,
    bench_streebog256,
    bench_streebog512,
    bench_streebog512_multiblock
);
criterion_main!(benches);

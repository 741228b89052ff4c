use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pvec::PersistentVector;

const SIZES: &[usize] = &[100, 10_000, 1_000_000];

fn append_one(c: &mut Criterion) {
    for &size in SIZES {
        let base: PersistentVector<u64> = (0..size as u64).collect();
        c.bench_function(&format!("append one onto {size}"), |b| {
            b.iter(|| black_box(&base).push_back(black_box(size as u64)));
        });
    }
}

fn append_many(c: &mut Criterion) {
    c.bench_function("append 10_000 from empty", |b| {
        b.iter(|| {
            let mut v = PersistentVector::new();
            for i in 0..black_box(10_000u64) {
                v = v.push_back(i);
            }
            v
        });
    });
}

criterion_group!(benches, append_one, append_many);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pvec::PersistentVector;

const SIZES: &[usize] = &[100, 10_000, 1_000_000];

fn set_first(c: &mut Criterion) {
    for &size in SIZES {
        let v: PersistentVector<u64> = (0..size as u64).collect();
        c.bench_function(&format!("set index 0 of {size}"), |b| {
            b.iter(|| v.set(black_box(0), black_box(1)).unwrap());
        });
    }
}

fn set_last(c: &mut Criterion) {
    for &size in SIZES {
        let v: PersistentVector<u64> = (0..size as u64).collect();
        c.bench_function(&format!("set last index of {size}"), |b| {
            b.iter(|| v.set(black_box(size - 1), black_box(1)).unwrap());
        });
    }
}

criterion_group!(benches, set_first, set_last);
criterion_main!(benches);

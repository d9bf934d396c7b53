use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rangesync_core::{Bound, Storage, Vector};
use rangesync_testkit::fixtures::{random_items, sealed_vector, shuffled};

fn bench_seal(c: &mut Criterion) {
    let mut group = c.benchmark_group("seal");
    for size in [1_000usize, 10_000, 100_000] {
        let items = shuffled(&random_items(size, 1), 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| {
                let mut v = Vector::new();
                for it in items {
                    v.insert_item(*it).unwrap();
                }
                v.seal().unwrap();
                black_box(v)
            })
        });
    }
    group.finish();
}

fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");
    let v = sealed_vector(&random_items(100_000, 3));
    for len in [16usize, 1_024, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| black_box(v.fingerprint(0, len).unwrap()))
        });
    }
    group.finish();
}

fn bench_lower_bound(c: &mut Criterion) {
    let items = random_items(100_000, 4);
    let v = sealed_vector(&items);
    let key = Bound::from_item(&items[items.len() / 3]);
    c.bench_function("find_lower_bound/100000", |b| {
        b.iter(|| black_box(v.find_lower_bound(0, v.size(), &key).unwrap()))
    });
}

criterion_group!(benches, bench_seal, bench_fingerprint, bench_lower_bound);
criterion_main!(benches);

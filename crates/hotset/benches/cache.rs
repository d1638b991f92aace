use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hotset::LruCache;

fn bench_hot_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("hot_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_cached", |b| {
        let mut cache = LruCache::new(1000).unwrap();

        // Pre-populate; every lookup below is a hit
        for key in 0..1000u64 {
            cache.put(key, key * 10);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 1000)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_evicting_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("evicting_put");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_at_capacity", |b| {
        let mut cache = LruCache::new(100).unwrap();

        // Fill to capacity so every fresh key below evicts
        for key in 0..100u64 {
            cache.put(key, key);
        }

        let mut counter = 100u64;
        b.iter(|| {
            cache.put(black_box(counter), counter);
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let mut cache = LruCache::new(1000).unwrap();

        for key in 0..1000u64 {
            cache.put(key, key);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 1000)));
            } else {
                cache.put(counter % 1000, counter);
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_hot_get, bench_evicting_put, bench_mixed_50_50);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hotcache::LruCache;

fn bench_hot_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("hot_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_resident", |b| {
        let mut cache = LruCache::new(1000);

        // Pre-populate; everything stays resident
        for key in 0u64..100 {
            cache.put(key, key * 7);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction_churn");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_fresh_keys", |b| {
        let mut cache = LruCache::new(10); // Small cache, every put evicts

        for key in 0u64..10 {
            cache.put(key, key);
        }

        let mut counter = 10u64;
        b.iter(|| {
            black_box(cache.put(counter, counter));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_get_50_put", |b| {
        let mut cache = LruCache::new(100);

        for key in 0u64..100 {
            cache.put(key, key);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 150)));
            } else {
                black_box(cache.put(counter % 150, counter));
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hot_get,
    bench_eviction_churn,
    bench_mixed_50_50
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lrucache::{IntLruCache, LruCache, SharedLruCache};

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_hit", |b| {
        let mut cache = LruCache::new(1000).unwrap();
        for i in 0..100u64 {
            cache.put(i, vec![b'x'; 64]);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)));
            counter += 1;
        });
    });

    group.bench_function("int_get_hit", |b| {
        let mut cache = IntLruCache::new(1000).unwrap();
        for i in 0..100 {
            cache.put(i, i);
        }

        let mut counter = 0i64;
        b.iter(|| {
            black_box(cache.get(counter % 100));
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
        let mut cache = IntLruCache::new(1000).unwrap();
        for i in 0..1000 {
            cache.put(i, i);
        }

        let mut counter = 0i64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(counter % 1000));
            } else {
                cache.put(counter, counter);
            }
            counter += 1;
        });
    });

    group.bench_function("50_read_50_write_shared", |b| {
        let cache = SharedLruCache::new(1000).unwrap();
        for i in 0..1000u64 {
            cache.put(i, i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 1000)));
            } else {
                black_box(cache.put(counter, counter));
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_cache_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_evict", |b| {
        let mut cache = IntLruCache::new(10).unwrap(); // Small cache

        let mut counter = 0i64;
        b.iter(|| {
            // Every put is a new key, so every put past warmup evicts
            cache.put(counter, counter);
            black_box(cache.get(counter - 10));
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_get,
    bench_mixed_50_50,
    bench_cache_miss
);
criterion_main!(benches);

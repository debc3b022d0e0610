use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use substring_index::{CachePolicy, IndexConfig, IndexService};

/// Numeric terms plus one "last item" entry, mirroring the CLI bench command
fn generate_index(num_items: usize) -> IndexService<String> {
    let mut index = IndexService::with_config(IndexConfig::with_cache_policy(CachePolicy::Retain));
    for i in 0..num_items {
        index.add_item(&i.to_string(), i.to_string());
    }
    index.add_item("last item", "last item value".to_string());
    index
}

fn bench_uncached_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_uncached");

    for size in [1_000, 10_000, 100_000].iter() {
        let mut index = generate_index(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                // Clearing forces a full scan on every iteration
                index.clear_cache();
                index.search(black_box("last")).len()
            });
        });
    }

    group.finish();
}

fn bench_cached_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_cached");

    for size in [1_000, 10_000, 100_000].iter() {
        let mut index = generate_index(*size);
        index.search("last");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| index.search(black_box("last")).len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_uncached_search, bench_cached_search);
criterion_main!(benches);

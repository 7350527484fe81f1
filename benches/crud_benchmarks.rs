use avl_tree::{AvlTreeMap, AvlTreeSet};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::{BTreeMap, BTreeSet};
use std::hint::black_box;

const N: usize = 10_000;

// ─── Key sequences ──────────────────────────────────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Deterministic LCG so runs are comparable.
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn key_orders() -> [(&'static str, Vec<i64>); 3] {
    [("ordered", ordered_keys(N)), ("reverse", reverse_ordered_keys(N)), ("random", random_keys(N))]
}

// ─── Map ────────────────────────────────────────────────────────────────────

fn bench_map_insert(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("map_insert_{order}"));

        group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
            b.iter(|| {
                let mut map = AvlTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.finish();
    }
}

fn bench_map_get(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let avl_map: AvlTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let mut group = c.benchmark_group(format!("map_get_{order}"));

        group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
            b.iter(|| keys.iter().filter_map(|k| avl_map.get(k)).sum::<i64>());
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| keys.iter().filter_map(|k| bt_map.get(k)).sum::<i64>());
        });

        group.finish();
    }
}

fn bench_map_remove(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let avl_map: AvlTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let mut group = c.benchmark_group(format!("map_remove_{order}"));

        group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
            b.iter_batched(
                || avl_map.clone(),
                |mut map| {
                    for k in &keys {
                        black_box(map.remove(k));
                    }
                    map
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter_batched(
                || bt_map.clone(),
                |mut map| {
                    for k in &keys {
                        black_box(map.remove(k));
                    }
                    map
                },
                BatchSize::LargeInput,
            );
        });

        group.finish();
    }
}

// ─── Set ────────────────────────────────────────────────────────────────────

fn bench_set_insert(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("set_insert_{order}"));

        group.bench_function(BenchmarkId::new("AvlTreeSet", N), |b| {
            b.iter(|| keys.iter().copied().collect::<AvlTreeSet<i64>>());
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| keys.iter().copied().collect::<BTreeSet<i64>>());
        });

        group.finish();
    }
}

fn bench_set_contains(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let avl_set: AvlTreeSet<i64> = keys.iter().copied().collect();
        let bt_set: BTreeSet<i64> = keys.iter().copied().collect();
        let mut group = c.benchmark_group(format!("set_contains_{order}"));

        group.bench_function(BenchmarkId::new("AvlTreeSet", N), |b| {
            b.iter(|| keys.iter().filter(|&k| avl_set.contains(k)).count());
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| keys.iter().filter(|&k| bt_set.contains(k)).count());
        });

        group.finish();
    }
}

fn bench_set_remove_miss(c: &mut Criterion) {
    let keys = random_keys(N);
    let avl_set: AvlTreeSet<i64> = keys.iter().copied().collect();
    let misses: Vec<i64> = keys.iter().map(|k| -k - 1).collect();

    c.bench_function("set_remove_miss/AvlTreeSet", |b| {
        b.iter_batched(
            || avl_set.clone(),
            |mut set| {
                for k in &misses {
                    black_box(set.remove(k));
                }
                set
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(map_benches, bench_map_insert, bench_map_get, bench_map_remove);
criterion_group!(set_benches, bench_set_insert, bench_set_contains, bench_set_remove_miss);
criterion_main!(map_benches, set_benches);

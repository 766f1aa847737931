use criterion::{black_box, criterion_group, criterion_main, Criterion};
use probemap::ProbeMap;
use rand::{distr::Alphanumeric, Rng};
use std::collections::HashMap;

/// Generates a vector of random string keys with u64 values.
fn generate_data(size: usize) -> Vec<(String, u64)> {
    let mut rng = rand::rng();
    (0..size)
        .map(|i| {
            let key_len = rng.random_range(4..=24);
            let key: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(key_len)
                .map(char::from)
                .collect();
            (key, i as u64)
        })
        .collect()
}

fn benchmark_hash_map_comparison(c: &mut Criterion) {
    for &size in &[10_000, 100_000] {
        let mut group = c.benchmark_group(format!("size={size}"));
        let data = generate_data(size);

        group.bench_function("ProbeMap - insert", |b| {
            b.iter_with_setup(
                || ProbeMap::with_capacity(16),
                |mut map: ProbeMap<String, u64>| {
                    for (k, v) in data.iter() {
                        map.insert_or_assign(black_box(k.clone()), black_box(*v))
                            .unwrap();
                    }
                },
            );
        });

        let mut probe_map: ProbeMap<String, u64> = ProbeMap::new();
        for (k, v) in data.iter() {
            probe_map.insert_or_assign(k.clone(), *v).unwrap();
        }
        group.bench_function("ProbeMap - get", |b| {
            b.iter(|| {
                for (k, _) in data.iter() {
                    black_box(probe_map.get(black_box(k.as_str())));
                }
            })
        });

        group.bench_function("std::HashMap - insert", |b| {
            b.iter_with_setup(HashMap::new, |mut map: HashMap<String, u64>| {
                for (k, v) in data.iter() {
                    map.insert(black_box(k.clone()), black_box(*v));
                }
            });
        });

        let mut std_map: HashMap<String, u64> = HashMap::new();
        for (k, v) in data.iter() {
            std_map.insert(k.clone(), *v);
        }
        group.bench_function("std::HashMap - get", |b| {
            b.iter(|| {
                for (k, _) in data.iter() {
                    black_box(std_map.get(black_box(k.as_str())));
                }
            })
        });

        group.finish();
    }
}

criterion_group!(benches, benchmark_hash_map_comparison);
criterion_main!(benches);

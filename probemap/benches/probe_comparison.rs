use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use probemap::{DoubleHashing, LinearProbing, ProbeMap, ProbeSequence, QuadraticProbing};
use rand::Rng;

const SIZE: usize = 50_000;
// Prime and large enough that the double-hashing table never grows, so
// every probe step stays coprime to the capacity.
const DOUBLE_HASH_CAPACITY: usize = 100_003;

fn generate_keys(size: usize) -> Vec<u64> {
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random::<u64>()).collect()
}

fn bench_strategy<P: ProbeSequence + Clone>(
    c: &mut Criterion,
    name: &str,
    capacity: usize,
    probing: P,
    keys: &[u64],
) {
    let mut group = c.benchmark_group("probe_strategy");

    group.bench_with_input(BenchmarkId::new("insert", name), keys, |b, keys| {
        b.iter_with_setup(
            || ProbeMap::with_capacity_and_probe(capacity, probing.clone()),
            |mut map: ProbeMap<u64, u64, _, P>| {
                for &k in keys {
                    map.insert(black_box(k), k).unwrap();
                }
            },
        );
    });

    let mut map: ProbeMap<u64, u64, _, P> = ProbeMap::with_capacity_and_probe(capacity, probing);
    for &k in keys {
        map.insert(k, k).unwrap();
    }
    group.bench_with_input(BenchmarkId::new("get", name), keys, |b, keys| {
        b.iter(|| {
            for k in keys {
                black_box(map.get(black_box(k)));
            }
        })
    });

    group.finish();
}

fn benchmark_probe_strategies(c: &mut Criterion) {
    let keys = generate_keys(SIZE);

    bench_strategy(c, "linear", 16, LinearProbing, &keys);
    bench_strategy(c, "quadratic", 16, QuadraticProbing::new(1, 2), &keys);
    bench_strategy(
        c,
        "double_hashing",
        DOUBLE_HASH_CAPACITY,
        DoubleHashing::new(97),
        &keys,
    );
}

criterion_group!(benches, benchmark_probe_strategies);
criterion_main!(benches);

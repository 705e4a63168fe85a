#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chained_map::ChainedHashMap;
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut chained_map = ChainedHashMap::new();
    let mut rust_map = HashMap::new();
    group.bench_function("chained set", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                chained_map.set(key, value).unwrap();
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("chained get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chained_map.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.bench_function("chained keys", |b| {
        b.iter(|| chained_map.keys());
    });
    group.finish();
}

fn growth_benches(c: &mut Criterion) {
    let keys: Vec<String> = (0..ITEMS_AMOUNT).map(|i| format!("key-{i}")).collect();

    let mut group = c.benchmark_group("Growth from default capacity");
    group.sample_size(SAMPLE_SIZE);
    group.bench_function("chained fill", |b| {
        b.iter(|| {
            let mut map = ChainedHashMap::new();
            for (i, key) in keys.iter().enumerate() {
                map.set(key, i).unwrap();
            }
            map
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches, growth_benches);

criterion_main!(benches);

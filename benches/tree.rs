extern crate rbindex;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

fn insert(c: &mut Criterion) {
    c.bench_function("rbindex_insert_sequential", |b| {
        b.iter(|| {
            let mut tree = rbindex::Tree::<usize, ()>::with_capacity(1000);
            for k in 0..1000 {
                tree.insert(k, ());
            }
            tree
        })
    });
    c.bench_function("rbtree_insert_sequential", |b| {
        b.iter(|| {
            let mut tree = rbtree::RBTree::<usize, ()>::new();
            for k in 0..1000 {
                tree.insert(k, ());
            }
            tree
        })
    });

    let mut keys: Vec<usize> = (0..1000).collect();
    keys.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    c.bench_function("rbindex_insert_shuffled", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut tree = rbindex::Tree::<usize, ()>::with_capacity(keys.len());
                for k in keys {
                    tree.insert(k, ());
                }
                tree
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("rbtree_insert_shuffled", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut tree = rbtree::RBTree::<usize, ()>::new();
                for k in keys {
                    tree.insert(k, ());
                }
                tree
            },
            BatchSize::SmallInput,
        )
    });
}

fn traverse(c: &mut Criterion) {
    let tree: rbindex::Tree<usize, ()> = (0..10_000).map(|k| (k, ())).collect();
    c.bench_function("rbindex_in_order", |b| b.iter(|| tree.keys().sum::<usize>()));
}

criterion_group!(benches, insert, traverse);
criterion_main!(benches);

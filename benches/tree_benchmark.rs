use avl_range_tree::AvlTree;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

fn bench_insert_ascending(c: &mut Criterion) {
    c.bench_function("insert ascending 10k", |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for key in 0..10_000 {
                tree.insert(black_box(key));
            }
            tree
        })
    });
}

fn bench_insert_random(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let keys: Vec<i32> = (0..10_000).map(|_| rng.gen()).collect();

    c.bench_function("insert random 10k", |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for &key in &keys {
                tree.insert(black_box(key));
            }
            tree
        })
    });
}

fn bench_range_query(c: &mut Criterion) {
    let tree: AvlTree<i32> = (0..100_000).collect();
    let mut rng = rand::thread_rng();

    c.bench_function("range query", |b| {
        b.iter(|| {
            let a: i32 = rng.gen_range(0..100_000);
            let z: i32 = rng.gen_range(0..100_000);
            tree.range_query(black_box(&a.min(z)), black_box(&a.max(z)))
        })
    });
}

criterion_group!(benches, bench_insert_ascending, bench_insert_random, bench_range_query);
criterion_main!(benches);

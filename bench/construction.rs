use criterion::{black_box, criterion_group, criterion_main, Criterion};
use merkle_forest::{MerkleMountainRange, MerkleTree, SparseMerkleTree};
use sha2::Sha256;

pub fn generate_random_items(count: usize) -> Vec<[u8; 32]> {
    (0..count).map(|_| rand::random()).collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Construction");
    let items = generate_random_items(1000);

    group.bench_function("Merkle Tree", |b| {
        b.iter(|| black_box(MerkleTree::<32, Sha256>::new(&items)))
    });

    group.bench_function("Mountain Range", |b| {
        b.iter(|| black_box(MerkleMountainRange::<32, Sha256>::new(&items)))
    });

    group.bench_function("Sparse Tree", |b| {
        b.iter(|| black_box(SparseMerkleTree::<32, Sha256>::new(&items)))
    });

    group.finish();
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mountain Range Insertion");
    let items = generate_random_items(1000);

    // one item at a time
    group.bench_function("Single Items", |b| {
        b.iter(|| {
            let mut mmr = MerkleMountainRange::<32, Sha256>::default();
            for item in &items {
                mmr.insert(&[item]);
            }
            black_box(mmr)
        })
    });

    group.bench_function("Batches of 10", |b| {
        b.iter(|| {
            let mut mmr = MerkleMountainRange::<32, Sha256>::default();
            for batch in items.chunks(10) {
                mmr.insert(batch);
            }
            black_box(mmr)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_insertion);
criterion_main!(benches);

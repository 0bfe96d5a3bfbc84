use criterion::{black_box, criterion_group, criterion_main, Criterion};
use merkle_forest::{MerkleMountainRange, MerkleTree, SparseMerkleTree};
use sha2::Sha256;

pub fn generate_random_items(count: usize) -> Vec<[u8; 32]> {
    (0..count).map(|_| rand::random()).collect()
}

fn bench_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Proof Generation");

    // Setup structures with 100 items
    let items = generate_random_items(100);
    let tree = MerkleTree::<32, Sha256>::new(&items).unwrap();
    let mmr = MerkleMountainRange::<32, Sha256>::new(&items);
    let smt = SparseMerkleTree::<32, Sha256>::new(&items);
    let absent = generate_random_items(100);

    group.bench_function("Merkle Tree", |b| {
        b.iter(|| {
            for item in &items {
                black_box(tree.prove(item)).unwrap();
            }
        })
    });

    group.bench_function("Mountain Range", |b| {
        b.iter(|| {
            for item in &items {
                black_box(mmr.prove(item)).unwrap();
            }
        })
    });

    group.bench_function("Sparse Tree Inclusion", |b| {
        b.iter(|| {
            for item in &items {
                black_box(smt.prove(item)).unwrap();
            }
        })
    });

    group.bench_function("Sparse Tree Non-Inclusion", |b| {
        b.iter(|| {
            for item in &absent {
                black_box(smt.prove_non_inclusion(item)).unwrap();
            }
        })
    });

    group.finish();
}

fn bench_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("Proof Verification");

    let items = generate_random_items(100);
    let tree = MerkleTree::<32, Sha256>::new(&items).unwrap();
    let mmr = MerkleMountainRange::<32, Sha256>::new(&items);
    let smt = SparseMerkleTree::<32, Sha256>::new(&items);

    let tree_root = tree.root();
    let tree_proofs: Vec<_> = items.iter().map(|item| tree.prove(item).unwrap()).collect();
    let peaks = mmr.peaks();
    let mmr_proofs: Vec<_> = items.iter().map(|item| mmr.prove(item).unwrap()).collect();
    let smt_root = smt.root();
    let smt_proofs: Vec<_> = items.iter().map(|item| smt.prove(item).unwrap()).collect();

    group.bench_function("Merkle Tree", |b| {
        b.iter(|| {
            for (item, proof) in items.iter().zip(&tree_proofs) {
                assert!(black_box(MerkleTree::verify(proof, &tree_root, item)));
            }
        })
    });

    group.bench_function("Mountain Range", |b| {
        b.iter(|| {
            for (item, proof) in items.iter().zip(&mmr_proofs) {
                assert!(black_box(MerkleMountainRange::verify(proof, &peaks, item)));
            }
        })
    });

    group.bench_function("Sparse Tree", |b| {
        b.iter(|| {
            for (item, proof) in items.iter().zip(&smt_proofs) {
                assert!(black_box(SparseMerkleTree::verify(proof, &smt_root, item)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_proof_generation, bench_proof_verification);
criterion_main!(benches);

//! Any change to a proof must make it fail.

use bitvec::vec::BitVec;
use sha2::Sha256;

use crate::{MerkleMountainRange, MerkleTree, Proof, SparseMerkleTree};

/// Every proof obtained by flipping one bit of one sibling digest.
fn with_flipped_sibling_bits(proof: &Proof<32, Sha256>) -> Vec<Proof<32, Sha256>> {
    let mut tampered = Vec::new();
    for step in 0..proof.len() {
        for byte in 0..32 {
            let mut siblings = proof.siblings().to_vec();
            siblings[step][byte] ^= 1 << (byte % 8);
            tampered.push(Proof::from_parts(siblings, proof.sides().to_bitvec()).unwrap());
        }
    }
    tampered
}

/// Every proof obtained by flipping one side bit.
fn with_flipped_sides(proof: &Proof<32, Sha256>) -> Vec<Proof<32, Sha256>> {
    (0..proof.len())
        .map(|step| {
            let mut sides: BitVec<u8> = proof.sides().to_bitvec();
            let flipped = !sides[step];
            sides.set(step, flipped);
            Proof::from_parts(proof.siblings().to_vec(), sides).unwrap()
        })
        .collect()
}

#[test]
fn test_merkle_tree_rejects_tampered_proofs() {
    let items = (0..8).map(|i| i.to_string()).collect::<Vec<_>>();
    let tree = MerkleTree::<32, Sha256>::new(&items).unwrap();
    let root = tree.root();
    for item in &items {
        let proof = tree.prove(item.as_bytes()).unwrap();
        assert!(MerkleTree::verify(&proof, &root, item.as_bytes()));
        for tampered in with_flipped_sibling_bits(&proof) {
            assert!(!MerkleTree::verify(&tampered, &root, item.as_bytes()));
        }
        for tampered in with_flipped_sides(&proof) {
            assert!(!MerkleTree::verify(&tampered, &root, item.as_bytes()));
        }
        for other in items.iter().filter(|other| *other != item) {
            assert!(!MerkleTree::verify(&proof, &root, other.as_bytes()));
        }
    }
}

#[test]
fn test_mountain_range_rejects_tampered_proofs() {
    let items = (0..13).map(|i| i.to_string()).collect::<Vec<_>>();
    let mmr = MerkleMountainRange::<32, Sha256>::new(&items);
    let peaks = mmr.peaks();
    let proof = mmr.prove(b"9").unwrap();
    assert!(MerkleMountainRange::verify(&proof, &peaks, b"9"));
    for tampered in with_flipped_sibling_bits(&proof) {
        assert!(!MerkleMountainRange::verify(&tampered, &peaks, b"9"));
    }
    for tampered in with_flipped_sides(&proof) {
        assert!(!MerkleMountainRange::verify(&tampered, &peaks, b"9"));
    }
    assert!(!MerkleMountainRange::verify(&proof, &peaks, b"8"));
}

#[test]
fn test_sparse_tree_rejects_tampered_proofs() {
    let items = (0..16).map(|i| i.to_string()).collect::<Vec<_>>();
    let tree = SparseMerkleTree::<32, Sha256>::new(&items);
    let root = tree.root();

    let proof = tree.prove(b"3").unwrap();
    for tampered in with_flipped_sibling_bits(&proof) {
        assert!(!SparseMerkleTree::verify(&tampered, &root, b"3"));
    }
    for tampered in with_flipped_sides(&proof) {
        assert!(!SparseMerkleTree::verify(&tampered, &root, b"3"));
    }

    let proof = tree.prove_non_inclusion(b"absent").unwrap();
    for tampered in with_flipped_sibling_bits(&proof) {
        assert!(!SparseMerkleTree::verify_non_inclusion(&tampered, &root, b"absent"));
    }
    for tampered in with_flipped_sides(&proof) {
        assert!(!SparseMerkleTree::verify_non_inclusion(&tampered, &root, b"absent"));
    }
    assert!(!SparseMerkleTree::verify_non_inclusion(&proof, &root, b"missing"));
}

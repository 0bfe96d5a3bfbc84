use proptest::prelude::*;
use sha2::Sha256;

use crate::{MerkleMountainRange, MerkleTree, SparseMerkleTree};

/// Non-empty items: the empty item hashes to the empty slot digest, see
/// `test_empty_item_is_an_empty_slot` in the sparse tree tests.
fn arb_items(max: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 1..16), 1..max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every item of a tree has a proof verifying against the root.
    #[test]
    fn prop_merkle_tree_round_trip(items in arb_items(64)) {
        let tree = MerkleTree::<32, Sha256>::new(&items).unwrap();
        let root = tree.root();
        prop_assert_eq!(tree.size(), items.len());
        for item in &items {
            let proof = tree.prove(item).unwrap();
            prop_assert!(proof.len() <= usize::BITS as usize);
            prop_assert!(MerkleTree::verify(&proof, &root, item));
        }
    }

    /// After any sequence of insertions, peak sizes are distinct powers of two
    /// adding up to the number of items, and every item can be proven.
    #[test]
    fn prop_mountain_range_insertions(batches in prop::collection::vec(1usize..9, 1..12)) {
        let mut mmr = MerkleMountainRange::<32, Sha256>::default();
        let mut next = 0usize;
        for batch in batches {
            let items = (next..next + batch).map(|i| i.to_string()).collect::<Vec<_>>();
            mmr.insert(&items);
            next += batch;
        }
        let mut sizes = mmr.peak_sizes();
        prop_assert_eq!(sizes.iter().sum::<usize>(), next);
        prop_assert_eq!(mmr.leaf_count(), next);
        sizes.sort_unstable();
        sizes.dedup();
        prop_assert_eq!(sizes.len(), mmr.len());
        let peaks = mmr.peaks();
        for i in 0..next {
            let item = i.to_string();
            let proof = mmr.prove(item.as_bytes()).unwrap();
            prop_assert!(MerkleMountainRange::verify(&proof, &peaks, item.as_bytes()));
        }
    }

    /// A range built at once has one peak per set bit of the item count.
    #[test]
    fn prop_mountain_range_shape(count in 0usize..300) {
        let items = (0..count).map(|i| i.to_string()).collect::<Vec<_>>();
        let mmr = MerkleMountainRange::<32, Sha256>::new(&items);
        prop_assert_eq!(mmr.len(), count.count_ones() as usize);
        prop_assert!(mmr.peak_sizes().iter().all(|size| size.is_power_of_two()));
        prop_assert!(mmr.peak_sizes().windows(2).all(|pair| pair[0] > pair[1]));
    }

    /// The root only depends on the set of items.
    #[test]
    fn prop_sparse_tree_history_independent(items in arb_items(24)) {
        let mut reversed = items.clone();
        reversed.reverse();
        let mut doubled = items.clone();
        doubled.extend(items.iter().cloned());
        let root = SparseMerkleTree::<32, Sha256>::new(&items).root();
        prop_assert_eq!(SparseMerkleTree::<32, Sha256>::new(&reversed).root(), root);
        prop_assert_eq!(SparseMerkleTree::<32, Sha256>::new(&doubled).root(), root);
    }

    /// Members get inclusion proofs only, non members get non-inclusion proofs only.
    #[test]
    fn prop_sparse_tree_membership(
        items in arb_items(24),
        absent in prop::collection::vec(any::<u8>(), 16..24),
    ) {
        let tree = SparseMerkleTree::<32, Sha256>::new(&items);
        let root = tree.root();
        for item in &items {
            let proof = tree.prove(item).unwrap();
            prop_assert!(SparseMerkleTree::verify(&proof, &root, item));
            prop_assert!(!SparseMerkleTree::verify_non_inclusion(&proof, &root, item));
            prop_assert!(tree.prove_non_inclusion(item).is_none());
        }
        prop_assert!(tree.prove(&absent).is_none());
        let proof = tree.prove_non_inclusion(&absent).unwrap();
        prop_assert!(SparseMerkleTree::verify_non_inclusion(&proof, &root, &absent));
        prop_assert!(!SparseMerkleTree::verify(&proof, &root, &absent));
    }
}

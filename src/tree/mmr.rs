//! Merkle Mountain Range made of balanced Merkle trees.
//!
//! The peaks mirror the binary representation of the item count: a range over 7 items
//! holds trees of 4, 2 and 1 leaves. Inserting works like incrementing a binary counter,
//! equal sized peaks are merged the way carries propagate.

use std::collections::{hash_map::Entry, HashMap};

use log::debug;

use crate::{node::Hasher, MerkleTree, Proof};

/// Merkle Mountain Range.
/// * `HASH_SIZE` - size of the hash digest in bytes.
/// * `H` - Hasher that will be used to hash nodes.
#[derive(Debug, Clone)]
pub struct MerkleMountainRange<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    peaks: Vec<MerkleTree<HASH_SIZE, H>>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Default
    for MerkleMountainRange<HASH_SIZE, H>
{
    fn default() -> Self {
        Self { peaks: Vec::new() }
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> MerkleMountainRange<HASH_SIZE, H> {
    /// Builds the range. For every set bit `i` of the item count, from the most significant
    /// one down, the next `2^i` items become one peak.
    pub fn new<T: AsRef<[u8]>>(items: &[T]) -> Self {
        let count = items.len();
        let mut peaks = Vec::with_capacity(count.count_ones() as usize);
        let mut remaining = items;
        for bit in (0..usize::BITS).rev() {
            let width = 1usize << bit;
            if count & width == 0 {
                continue;
            }
            let (chunk, rest) = remaining.split_at(width);
            peaks.extend(MerkleTree::new(chunk));
            remaining = rest;
        }
        debug!("built mountain range over {} items with {} peaks", count, peaks.len());
        Self { peaks }
    }

    /// Appends the items as a new peak then merges equal sized peaks until none are left.
    /// An empty batch leaves the range untouched.
    pub fn insert<T: AsRef<[u8]>>(&mut self, items: &[T]) {
        let Some(tree) = MerkleTree::new(items) else {
            return;
        };
        self.peaks.push(tree);
        while self.merge_peaks() {}
    }

    /// Merges the first two peaks of equal size found, the earlier one on the left.
    /// The merged peak goes to the end of the list. Returns whether a merge happened.
    fn merge_peaks(&mut self) -> bool {
        let mut seen = HashMap::new();
        let pair = self
            .peaks
            .iter()
            .enumerate()
            .find_map(|(index, peak)| match seen.entry(peak.size()) {
                Entry::Occupied(first) => Some((*first.get(), index)),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                    None
                }
            });
        let Some((first, second)) = pair else {
            return false;
        };
        // `second` is removed first so `first` keeps its index
        let right = self.peaks.remove(second);
        let left = self.peaks.remove(first);
        debug!("merging two peaks of {} leaves", left.size());
        self.peaks.push(MerkleTree::merge(left, right));
        true
    }

    /// Builds an inclusion proof for `item` from the first peak holding it.
    /// The proof does not say which peak it belongs to.
    pub fn prove(&self, item: &[u8]) -> Option<Proof<HASH_SIZE, H>> {
        self.peaks.iter().find_map(|peak| peak.prove(item))
    }

    /// Verifies an inclusion proof against a snapshot of the peaks.
    pub fn verify(proof: &Proof<HASH_SIZE, H>, peaks: &[[u8; HASH_SIZE]], item: &[u8]) -> bool {
        proof.verify_any(peaks, item)
    }

    /// Root digests of the peaks.
    pub fn peaks(&self) -> Vec<[u8; HASH_SIZE]> {
        self.peaks.iter().map(MerkleTree::root).collect()
    }

    /// Leaf count of each peak, in peak order.
    pub fn peak_sizes(&self) -> Vec<usize> {
        self.peaks.iter().map(MerkleTree::size).collect()
    }

    /// Total number of items.
    pub fn leaf_count(&self) -> usize {
        self.peaks.iter().map(MerkleTree::size).sum()
    }

    /// Number of peaks.
    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }
}

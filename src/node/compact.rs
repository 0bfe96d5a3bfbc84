use std::fmt::Display;
use std::marker::PhantomData;

use super::Hasher;
use crate::tree::{bit_index, DefaultDigests};

/// A sparse subtree that holds exactly one item.
///
/// Instead of materializing the chain of branches between the subtree root and the leaf,
/// only the item digest (its key) is kept. The node hash is identical to the hash of the
/// fully materialized subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactLeaf<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    height: usize,
    key: [u8; HASH_SIZE],
    node_hash: [u8; HASH_SIZE],
    _phantom: PhantomData<H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone + 'static> CompactLeaf<HASH_SIZE, H> {
    /// Creates a compact subtree of the given height holding `key`. This performs `height` hashes.
    pub fn new(height: usize, key: [u8; HASH_SIZE], defaults: &DefaultDigests<HASH_SIZE, H>) -> Self {
        Self {
            height,
            key,
            node_hash: Self::subtree_hash(&key, height, defaults),
            _phantom: PhantomData,
        }
    }

    /// Hash of the subtree of `height` whose only item is `key`, every other slot being empty.
    pub fn subtree_hash(
        key: &[u8; HASH_SIZE],
        height: usize,
        defaults: &DefaultDigests<HASH_SIZE, H>,
    ) -> [u8; HASH_SIZE] {
        let max_height = DefaultDigests::<HASH_SIZE, H>::max_height();
        (1..=height).fold(*key, |current, level| {
            let sibling = defaults.at(level - 1);
            // the parent at `level` picks its child with the bit at depth `max_height - level`
            if bit_index(max_height - level, key) {
                H::hash_pair(&sibling, &current)
            } else {
                H::hash_pair(&current, &sibling)
            }
        })
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> CompactLeaf<HASH_SIZE, H> {
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        self.node_hash
    }
    pub fn key(&self) -> &[u8; HASH_SIZE] {
        &self.key
    }
    pub fn height(&self) -> usize {
        self.height
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Display for CompactLeaf<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Compact {{ height: {}, hash: {}, key: {} }}",
            self.height(),
            hex::encode(self.hash().as_slice()),
            hex::encode(self.key().as_slice()),
        )
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;
    use sha2::Sha256;

    use super::CompactLeaf;
    use crate::DefaultDigests;

    #[test]
    fn test_compact_leaf_height_zero_is_the_key() {
        let defaults = DefaultDigests::<32, Sha256>::get();
        let key = hex!("ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb");
        let compact = CompactLeaf::<32, Sha256>::new(0, key, &defaults);
        assert_eq!(compact.hash(), key);
    }

    #[test]
    fn test_compact_leaf_new() {
        let defaults = DefaultDigests::<32, Sha256>::get();
        let compact = CompactLeaf::<32, Sha256>::new(2, [0; 32], &defaults);
        assert_eq!(
            compact.hash(),
            hex!("aeddac50baf4e86ffc92ce0dd1a5b9ed29cbc7756d94b2f26d959c1b0c8c0e55")
        );
        assert_eq!(compact.height(), 2);
        assert_eq!(compact.key(), &[0; 32]);
    }

    #[test]
    fn test_compact_leaf_full_height() {
        let defaults = DefaultDigests::<32, Sha256>::get();
        let mut key = [0; 32];
        key[0] = 0x80;
        let compact = CompactLeaf::<32, Sha256>::new(255, key, &defaults);
        assert_eq!(
            compact.hash(),
            hex!("b01e09ec6a7e1618ab3f105fb4b82336ffeab1b2eafbede1db3d7c98ebcaa807")
        );
    }
}

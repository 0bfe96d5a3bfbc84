use std::{fmt::Display, marker::PhantomData};

use super::Hasher;

/// A Leaf is a node that has no children and simply holds the digest of one item.
/// They are the last row of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    node_hash: [u8; HASH_SIZE],
    _phantom: PhantomData<H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Leaf<HASH_SIZE, H> {
    /// Creates a new [`Leaf`]. This function performs a hash.
    pub fn new(item: &[u8]) -> Self {
        Self::from_hash(H::hash(item))
    }

    /// Creates a leaf from an item digest that was already computed.
    pub fn from_hash(node_hash: [u8; HASH_SIZE]) -> Self {
        Self {
            node_hash,
            _phantom: PhantomData,
        }
    }

    /// Returns the hash of the node. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        self.node_hash
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Display for Leaf<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Leaf {{ hash: {} }}", hex::encode(self.hash().as_slice()))
    }
}

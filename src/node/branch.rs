use std::{fmt::Display, marker::PhantomData};

use super::Hasher;
use super::Node;

/// A branch is a node that has exactly 2 children.
/// Branches own their children and cache the number of items below them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    left: Box<Node<HASH_SIZE, H>>,
    right: Box<Node<HASH_SIZE, H>>,
    size: usize,
    node_hash: [u8; HASH_SIZE],
    _phantom: PhantomData<H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Branch<HASH_SIZE, H> {
    /// Creates a new [`Branch`]. This function performs a hash and an addition.
    /// Both children are moved into the branch.
    pub fn new(left: Node<HASH_SIZE, H>, right: Node<HASH_SIZE, H>) -> Self {
        let node_hash = H::hash_pair(&left.hash(), &right.hash());
        Self {
            size: left.size() + right.size(),
            left: Box::new(left),
            right: Box::new(right),
            node_hash,
            _phantom: PhantomData,
        }
    }

    /// Returns the hash of the node. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        self.node_hash
    }

    /// Number of items (leaves) below this branch.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the left and right children of this branch.
    pub fn children(&self) -> (&Node<HASH_SIZE, H>, &Node<HASH_SIZE, H>) {
        (&self.left, &self.right)
    }

    /// Returns the left children of this branch.
    pub fn left(&self) -> &Node<HASH_SIZE, H> {
        &self.left
    }

    /// Returns the right children of this branch.
    pub fn right(&self) -> &Node<HASH_SIZE, H> {
        &self.right
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Display for Branch<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Branch {{ size: {}, hash: {} }}",
            self.size(),
            hex::encode(self.hash().as_slice())
        )
    }
}

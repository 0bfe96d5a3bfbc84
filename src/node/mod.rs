mod branch;
mod compact;
mod empty;
mod leaf;

use sha2::{Digest, Sha256};
use std::fmt::Display;

pub use branch::Branch;
pub use compact::CompactLeaf;
pub use empty::EmptyNode;
pub use leaf::Leaf;

impl Hasher<32> for Sha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Simple hash trait required to hash the nodes in the trees
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
pub trait Hasher<const HASH_SIZE: usize> {
    fn hash(data: &[u8]) -> [u8; HASH_SIZE];

    /// Hashes `left ‖ right`, the parent digest of two children.
    fn hash_pair(left: &[u8; HASH_SIZE], right: &[u8; HASH_SIZE]) -> [u8; HASH_SIZE] {
        Self::hash([left.as_slice(), right.as_slice()].concat().as_slice())
    }
}

/// All possible nodes in the trees.
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
/// * `H` - The hasher implementation used for this node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    /// A leaf holding the digest of one item
    Leaf(Leaf<HASH_SIZE, H>),
    /// A branch node with two children
    Branch(Branch<HASH_SIZE, H>),
    /// A sparse subtree that holds no item at all
    Empty(EmptyNode<HASH_SIZE>),
    /// A sparse subtree that holds exactly one item
    Compact(CompactLeaf<HASH_SIZE, H>),
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Display for Node<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(leaf) => write!(f, "{}", leaf),
            Self::Branch(branch) => write!(f, "{}", branch),
            Self::Empty(empty) => write!(f, "{}", empty),
            Self::Compact(compact) => write!(f, "{}", compact),
        }
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Node<HASH_SIZE, H> {
    /// Creates a [`Node::Branch`] from 2 [`Node`]
    pub fn new_branch(left: Node<HASH_SIZE, H>, right: Node<HASH_SIZE, H>) -> Self {
        Self::Branch(Branch::<HASH_SIZE, H>::new(left, right))
    }

    /// Creates a [`Node::Leaf`] from an item. This function performs a hash.
    pub fn new_leaf(item: &[u8]) -> Self {
        Self::Leaf(Leaf::<HASH_SIZE, H>::new(item))
    }

    /// Returns the hash of the node. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        match self {
            Self::Leaf(leaf) => leaf.hash(),
            Self::Branch(branch) => branch.hash(),
            Self::Empty(empty) => empty.hash(),
            Self::Compact(compact) => compact.hash(),
        }
    }

    /// Returns the number of items below this node. NO TRAVERSAL IS DONE HERE.
    pub fn size(&self) -> usize {
        match self {
            Self::Leaf(_) | Self::Compact(_) => 1,
            Self::Branch(branch) => branch.size(),
            Self::Empty(_) => 0,
        }
    }
}

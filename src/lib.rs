//! Authenticated data structures built on cryptographic hashing
//!
//! This crate provides three structures committing a list of items to a single root digest:
//! - [`MerkleTree`]: a balanced binary Merkle tree over an ordered list of items
//! - [`MerkleMountainRange`]: a forest of perfect Merkle trees supporting amortized insertion
//! - [`SparseMerkleTree`]: a tree spanning the whole digest domain, supporting both inclusion
//!   and non-inclusion proofs
//!
//! All of them share the same [`Node`] and [`Proof`] representation. Proofs are verified
//! without access to the tree, from the root digest and the item alone.
//!
//! The digest size and hash function are chosen through the [`Hasher`] trait, implemented
//! for `sha2::Sha256`.

mod error;
mod node;
mod proof;
mod tree;

pub use error::TreeError;
pub use node::{Branch, CompactLeaf, EmptyNode, Hasher, Leaf, Node};
pub use proof::{CompressedProof, Proof, Side};
pub use tree::{
    bit_index, DefaultDigests, MerkleMountainRange, MerkleTree, SparseMerkleTree,
    DEFAULT_LEAF_VALUE,
};

#[cfg(test)]
mod tests;

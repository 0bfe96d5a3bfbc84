//! Sparse Merkle tree spanning the whole digest domain.
//!
//! Every item sits in the leaf slot addressed by its own hash. Subtrees holding no item
//! collapse to the default digest of their height and subtrees holding a single item are
//! kept compact, so only the branches above two or more items are materialized.

use std::sync::Arc;

use bitvec::{order::Lsb0, vec::BitVec};
use log::{debug, warn};

use crate::{
    node::{CompactLeaf, EmptyNode, Hasher, Leaf, Node},
    proof::Side,
    tree::bit_index,
    DefaultDigests, Proof, TreeError,
};

/// Sparse merkle tree.
/// * `HASH_SIZE` - size of the hash digest in bytes.
/// * `H` - Hasher that will be used to hash nodes.
#[derive(Clone)]
pub struct SparseMerkleTree<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone + 'static> {
    root: Node<HASH_SIZE, H>,
    defaults: Arc<DefaultDigests<HASH_SIZE, H>>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone + 'static> SparseMerkleTree<HASH_SIZE, H> {
    /// Height of the root, which is also the length of every proof.
    pub const fn max_height() -> usize {
        DefaultDigests::<HASH_SIZE, H>::max_height()
    }

    /// Builds the tree. Duplicate items occupy a single slot.
    ///
    /// Two distinct items whose hashes share the first `max_height` bits cannot both be
    /// stored: the smaller hash keeps the slot and a warning is logged.
    pub fn new<T: AsRef<[u8]>>(items: &[T]) -> Self {
        let mut keys = items
            .iter()
            .map(|item| H::hash(item.as_ref()))
            .collect::<Vec<_>>();
        // byte-wise order is the numeric order of big-endian keys
        keys.sort_unstable();
        keys.dedup();
        let defaults = DefaultDigests::<HASH_SIZE, H>::get();
        let root = Self::build(&keys, 0, &defaults);
        debug!("built sparse merkle tree over {} keys", keys.len());
        Self { root, defaults }
    }

    /// Builds the subtree at `depth` holding the sorted `keys`.
    fn build(
        keys: &[[u8; HASH_SIZE]],
        depth: usize,
        defaults: &DefaultDigests<HASH_SIZE, H>,
    ) -> Node<HASH_SIZE, H> {
        let height = Self::max_height() - depth;
        match keys {
            [] => Node::Empty(EmptyNode::new(height, defaults.at(height))),
            [key] if height == 0 => Node::Leaf(Leaf::from_hash(*key)),
            [key] => Node::Compact(CompactLeaf::new(height, *key, defaults)),
            [key, ..] if height == 0 => {
                warn!(
                    "{} keys collide in the slot of {}, keeping the first one",
                    keys.len(),
                    hex::encode(key)
                );
                Node::Leaf(Leaf::from_hash(*key))
            }
            _ => {
                // keys are sorted and share their first `depth` bits, so the ones
                // going left (bit unset, below the midpoint) come first
                let split = keys.partition_point(|key| !bit_index(depth, key));
                let (left, right) = keys.split_at(split);
                Node::new_branch(
                    Self::build(left, depth + 1, defaults),
                    Self::build(right, depth + 1, defaults),
                )
            }
        }
    }

    /// Root digest of the tree.
    pub fn root(&self) -> [u8; HASH_SIZE] {
        self.root.hash()
    }

    /// Root node of the tree.
    pub fn root_node(&self) -> &Node<HASH_SIZE, H> {
        &self.root
    }

    /// Default digests the tree was built with.
    pub fn defaults(&self) -> &DefaultDigests<HASH_SIZE, H> {
        &self.defaults
    }

    /// Walk down the tree from the root following the bits of `key`.
    ///
    /// Collects the sibling of every node on the path, expanding empty and compact subtrees
    /// on the fly. Returns the proof, ordered leaf first, and the key stored in the slot
    /// reached, if any.
    fn walk_down(&self, key: &[u8; HASH_SIZE]) -> (Proof<HASH_SIZE, H>, Option<[u8; HASH_SIZE]>) {
        let max_height = Self::max_height();
        let mut proof = Proof::with_capacity(max_height);
        let mut current = &self.root;
        let mut depth = 0;
        let occupant = loop {
            match current {
                Node::Branch(branch) => {
                    let (next, sibling, side) = if bit_index(depth, key) {
                        (branch.right(), branch.left(), Side::Left)
                    } else {
                        (branch.left(), branch.right(), Side::Right)
                    };
                    proof.push(sibling.hash(), side);
                    current = next;
                    depth += 1;
                }
                Node::Leaf(leaf) => break Some(leaf.hash()),
                Node::Empty(_) => {
                    self.walk_virtual(key, depth, None, &mut proof);
                    break None;
                }
                Node::Compact(compact) => {
                    let stored = compact.key();
                    // first depth where the path of `key` leaves the one of the stored key
                    let fork = (depth..max_height).find(|&d| bit_index(d, key) != bit_index(d, stored));
                    self.walk_virtual(key, depth, fork.map(|d| (d, stored)), &mut proof);
                    break match fork {
                        Some(_) => None,
                        None => Some(*stored),
                    };
                }
            }
        };
        proof.reverse();
        (proof, occupant)
    }

    /// Pushes the siblings of a walk going through a subtree that is not materialized,
    /// from `depth` down to the leaves. Every sibling is a default digest, except at
    /// the fork with a stored key where the sibling is the compact subtree of that key.
    fn walk_virtual(
        &self,
        key: &[u8; HASH_SIZE],
        depth: usize,
        fork: Option<(usize, &[u8; HASH_SIZE])>,
        proof: &mut Proof<HASH_SIZE, H>,
    ) {
        let max_height = Self::max_height();
        for d in depth..max_height {
            let sibling_height = max_height - d - 1;
            let sibling = match fork {
                Some((fork_depth, stored)) if fork_depth == d => {
                    CompactLeaf::subtree_hash(stored, sibling_height, &self.defaults)
                }
                _ => self.defaults.at(sibling_height),
            };
            let side = if bit_index(d, key) {
                Side::Left
            } else {
                Side::Right
            };
            proof.push(sibling, side);
        }
    }

    /// Builds an inclusion proof for `item`. Returns `None` if the item is not in the tree.
    pub fn prove(&self, item: &[u8]) -> Option<Proof<HASH_SIZE, H>> {
        let key = H::hash(item);
        let (proof, occupant) = self.walk_down(&key);
        (occupant == Some(key)).then_some(proof)
    }

    /// Builds a proof that the slot of `item` is empty.
    /// Returns `None` if the slot is occupied, which is the case when the item is in the tree.
    pub fn prove_non_inclusion(&self, item: &[u8]) -> Option<Proof<HASH_SIZE, H>> {
        let key = H::hash(item);
        let (proof, occupant) = self.walk_down(&key);
        occupant.is_none().then_some(proof)
    }

    /// Verifies an inclusion proof.
    pub fn verify(proof: &Proof<HASH_SIZE, H>, root: &[u8; HASH_SIZE], item: &[u8]) -> bool {
        Self::verify_inclusion_proof(proof, root, item).is_ok()
    }

    /// Verifies a non-inclusion proof.
    pub fn verify_non_inclusion(
        proof: &Proof<HASH_SIZE, H>,
        root: &[u8; HASH_SIZE],
        item: &[u8],
    ) -> bool {
        Self::verify_non_inclusion_proof(proof, root, item).is_ok()
    }

    /// Verifies an inclusion proof, telling why it is rejected.
    pub fn verify_inclusion_proof(
        proof: &Proof<HASH_SIZE, H>,
        root: &[u8; HASH_SIZE],
        item: &[u8],
    ) -> Result<(), TreeError> {
        let key = H::hash(item);
        Self::check_proof(proof, root, &key, key)
    }

    /// Verifies a non-inclusion proof, telling why it is rejected.
    /// The walk starts from the empty leaf digest instead of the item hash.
    pub fn verify_non_inclusion_proof(
        proof: &Proof<HASH_SIZE, H>,
        root: &[u8; HASH_SIZE],
        item: &[u8],
    ) -> Result<(), TreeError> {
        let key = H::hash(item);
        let empty_leaf = DefaultDigests::<HASH_SIZE, H>::get().empty_leaf();
        Self::check_proof(proof, root, &key, empty_leaf)
    }

    /// Checks that the proof follows the path of `key` and leads from `start` to `root`.
    fn check_proof(
        proof: &Proof<HASH_SIZE, H>,
        root: &[u8; HASH_SIZE],
        key: &[u8; HASH_SIZE],
        start: [u8; HASH_SIZE],
    ) -> Result<(), TreeError> {
        let max_height = Self::max_height();
        if proof.len() != max_height {
            return Err(TreeError::ProofLengthMismatch {
                expected: max_height,
                got: proof.len(),
            });
        }
        // step `index` is the sibling at height `index`, chosen by the bit at depth `max_height - 1 - index`
        if let Some(index) = proof
            .sides()
            .iter()
            .by_vals()
            .enumerate()
            .position(|(index, left)| left != bit_index(max_height - 1 - index, key))
        {
            return Err(TreeError::PathMismatch { index });
        }
        if proof.root_from(start) == *root {
            Ok(())
        } else {
            Err(TreeError::InvalidMerkleProof)
        }
    }

    /// Expected side bits of a proof for `item`, leaf first.
    pub fn path(item: &[u8]) -> BitVec<u8, Lsb0> {
        let key = H::hash(item);
        let max_height = Self::max_height();
        (0..max_height)
            .rev()
            .map(|depth| bit_index(depth, &key))
            .collect()
    }
}

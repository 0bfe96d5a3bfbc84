//! Balanced binary Merkle tree over an ordered list of items

use std::fmt::Display;

use crate::{
    node::{Hasher, Node},
    proof::Side,
    Proof,
};

/// Balanced binary Merkle tree.
/// * `HASH_SIZE` - size of the hash digest in bytes.
/// * `H` - Hasher that will be used to hash nodes.
///
/// The shape of the tree only depends on the number of items: the list is split at its
/// midpoint, recursively. Item positions are therefore committed along with the items.
#[derive(Debug, Clone)]
pub struct MerkleTree<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    root: Node<HASH_SIZE, H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> MerkleTree<HASH_SIZE, H> {
    /// Builds the tree. Returns `None` when there is no item.
    pub fn new<T: AsRef<[u8]>>(items: &[T]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            root: Self::build(items),
        })
    }

    fn build<T: AsRef<[u8]>>(items: &[T]) -> Node<HASH_SIZE, H> {
        if let [item] = items {
            return Node::new_leaf(item.as_ref());
        }
        let (left, right) = items.split_at(items.len() / 2);
        Node::new_branch(Self::build(left), Self::build(right))
    }

    /// Joins two trees under a new root, moving both of them.
    pub(crate) fn merge(left: Self, right: Self) -> Self {
        Self {
            root: Node::new_branch(left.root, right.root),
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

    /// Number of leaves.
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Builds an inclusion proof for `item`.
    ///
    /// The leaves are searched depth first, left subtree first. When the item appears more
    /// than once, the proof is for its first occurrence. Returns `None` if no leaf holds the item.
    pub fn prove(&self, item: &[u8]) -> Option<Proof<HASH_SIZE, H>> {
        let target = H::hash(item);
        let mut proof = Proof::default();
        Self::search(&self.root, &target, &mut proof).then_some(proof)
    }

    /// Depth first search for the leaf holding `target`.
    /// Siblings are pushed while unwinding, so the proof ends up ordered from the leaf upward.
    fn search(
        node: &Node<HASH_SIZE, H>,
        target: &[u8; HASH_SIZE],
        proof: &mut Proof<HASH_SIZE, H>,
    ) -> bool {
        match node {
            Node::Branch(branch) => {
                let (left, right) = branch.children();
                if Self::search(left, target, proof) {
                    proof.push(right.hash(), Side::Right);
                    true
                } else if Self::search(right, target, proof) {
                    proof.push(left.hash(), Side::Left);
                    true
                } else {
                    false
                }
            }
            Node::Leaf(leaf) => leaf.hash() == *target,
            Node::Empty(_) | Node::Compact(_) => false,
        }
    }

    /// Verifies an inclusion proof. This never touches a tree.
    pub fn verify(proof: &Proof<HASH_SIZE, H>, root: &[u8; HASH_SIZE], item: &[u8]) -> bool {
        proof.verify(root, item)
    }

    fn fmt_node(
        node: &Node<HASH_SIZE, H>,
        depth: usize,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        if let Node::Branch(branch) = node {
            Self::fmt_node(branch.left(), depth + 1, f)?;
            writeln!(f, "{}{}", "    ".repeat(depth), hex::encode(node.hash()))?;
            Self::fmt_node(branch.right(), depth + 1, f)
        } else {
            writeln!(f, "{}{}", "    ".repeat(depth), hex::encode(node.hash()))
        }
    }
}

/// In-order listing of the node digests, indented by depth.
impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Display for MerkleTree<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Self::fmt_node(&self.root, 0, f)
    }
}

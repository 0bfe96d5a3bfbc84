//! Proofs link an item to a root digest.
//!
//! A proof is the list of sibling digests met on the way from a leaf up to the root,
//! together with the side each sibling sits on. Verifying a proof only needs the
//! claimed root and the item, never the tree.
//!
//! Sparse tree proofs are mostly made of default digests and can be compressed into a bitvector.
use std::marker::PhantomData;

use bitvec::order::Lsb0;
use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;

use crate::{DefaultDigests, Hasher, TreeError};

/// Which operand of the next hash step a sibling is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `hash(sibling ‖ current)`
    Left,
    /// `hash(current ‖ sibling)`
    Right,
}

impl Side {
    fn from_bit(bit: bool) -> Self {
        if bit {
            Self::Left
        } else {
            Self::Right
        }
    }
    fn bit(self) -> bool {
        self == Self::Left
    }
}

/// An inclusion or non-inclusion proof, ordered from the leaf up to the root.
#[derive(Debug, Clone)]
pub struct Proof<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    siblings: Vec<[u8; HASH_SIZE]>,
    /// A set bit means the sibling is on the left.
    sides: BitVec<u8, Lsb0>,
    _phantom: PhantomData<H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Default for Proof<HASH_SIZE, H> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Proof<HASH_SIZE, H> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            siblings: Vec::with_capacity(capacity),
            sides: BitVec::with_capacity(capacity),
            _phantom: PhantomData,
        }
    }

    /// Creates a proof from its sibling digests and side bits (set bit = sibling on the left).
    pub fn from_parts(
        siblings: Vec<[u8; HASH_SIZE]>,
        sides: BitVec<u8, Lsb0>,
    ) -> Result<Self, TreeError> {
        if siblings.len() != sides.len() {
            return Err(TreeError::ProofLengthMismatch {
                expected: siblings.len(),
                got: sides.len(),
            });
        }
        Ok(Self {
            siblings,
            sides,
            _phantom: PhantomData,
        })
    }

    /// Appends the next step towards the root.
    pub(crate) fn push(&mut self, sibling: [u8; HASH_SIZE], side: Side) {
        self.siblings.push(sibling);
        self.sides.push(side.bit());
    }

    /// Flips the order of the steps, for proofs collected from the root downwards.
    pub(crate) fn reverse(&mut self) {
        self.siblings.reverse();
        self.sides.reverse();
    }

    /// Number of hash steps.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Returns the sibling digests, leaf first.
    pub fn siblings(&self) -> &[[u8; HASH_SIZE]] {
        &self.siblings
    }

    /// Returns the side bits, leaf first.
    pub fn sides(&self) -> &BitSlice<u8, Lsb0> {
        &self.sides
    }

    /// Iterates over the steps, leaf first.
    pub fn steps(&self) -> impl Iterator<Item = (&[u8; HASH_SIZE], Side)> + '_ {
        self.siblings
            .iter()
            .zip(self.sides.iter().by_vals().map(Side::from_bit))
    }

    /// Recomputes the root reached from the leaf digest `start`.
    pub fn root_from(&self, start: [u8; HASH_SIZE]) -> [u8; HASH_SIZE] {
        self.steps().fold(start, |current, (sibling, side)| match side {
            Side::Left => H::hash_pair(sibling, &current),
            Side::Right => H::hash_pair(&current, sibling),
        })
    }

    /// Verifies that `item` is committed under `root`.
    pub fn verify(&self, root: &[u8; HASH_SIZE], item: &[u8]) -> bool {
        self.verify_merkle_proof(root, item).is_ok()
    }

    /// Verify a merkle proof for a given item.
    ///
    /// # Arguments
    ///
    /// * `root` - The expected root of the tree
    /// * `item` - The item the proof was generated for
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the proof is valid, otherwise returns an error.
    pub fn verify_merkle_proof(&self, root: &[u8; HASH_SIZE], item: &[u8]) -> Result<(), TreeError> {
        if self.root_from(H::hash(item)) == *root {
            Ok(())
        } else {
            Err(TreeError::InvalidMerkleProof)
        }
    }

    /// Verifies the proof against each root in turn, succeeding on the first match.
    pub fn verify_any(&self, roots: &[[u8; HASH_SIZE]], item: &[u8]) -> bool {
        let computed = self.root_from(H::hash(item));
        roots.iter().any(|root| *root == computed)
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone + 'static> Proof<HASH_SIZE, H> {
    /// Compresses the proof by dropping every sibling equal to the default digest of its height.
    pub fn compress(&self) -> CompressedProof<HASH_SIZE, H> {
        let defaults = DefaultDigests::<HASH_SIZE, H>::get();
        let mut elided = BitVec::with_capacity(self.len());
        let mut siblings = Vec::new();
        for (height, sibling) in self.siblings.iter().enumerate() {
            if defaults.get_height(height) == Some(sibling) {
                elided.push(true);
            } else {
                elided.push(false);
                siblings.push(*sibling);
            }
        }
        CompressedProof {
            siblings,
            sides: self.sides.clone(),
            elided,
            _phantom: PhantomData,
        }
    }
}

/// A compressed proof.
/// We don't store the siblings that are default digests.
#[derive(Debug, Clone)]
pub struct CompressedProof<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    siblings: Vec<[u8; HASH_SIZE]>,
    sides: BitVec<u8, Lsb0>,
    elided: BitVec<u8, Lsb0>,
    _phantom: PhantomData<H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone + 'static> CompressedProof<HASH_SIZE, H> {
    /// Creates a compressed proof from the kept siblings, the side bits and the elision mask.
    pub fn new(
        siblings: Vec<[u8; HASH_SIZE]>,
        sides: BitVec<u8, Lsb0>,
        elided: BitVec<u8, Lsb0>,
    ) -> Self {
        Self {
            siblings,
            sides,
            elided,
            _phantom: PhantomData,
        }
    }

    /// Siblings that could not be elided.
    pub fn siblings(&self) -> &[[u8; HASH_SIZE]] {
        &self.siblings
    }

    /// Set bits mark the heights whose sibling is the default digest.
    pub fn elided(&self) -> &BitSlice<u8, Lsb0> {
        &self.elided
    }

    /// Decompresses the proof into a proof.
    pub fn decompress(&self) -> Result<Proof<HASH_SIZE, H>, TreeError> {
        if self.siblings.len() != self.elided.count_zeros() || self.sides.len() != self.elided.len() {
            return Err(TreeError::InvalidCompressedProof);
        }
        let defaults = DefaultDigests::<HASH_SIZE, H>::get();
        let mut kept = self.siblings.iter();
        let siblings = self
            .elided
            .iter()
            .by_vals()
            .enumerate()
            .map(|(height, elided)| {
                let sibling = if elided {
                    defaults.get_height(height).copied()
                } else {
                    kept.next().copied()
                };
                sibling.ok_or(TreeError::InvalidCompressedProof)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Proof::from_parts(siblings, self.sides.clone())
    }
}

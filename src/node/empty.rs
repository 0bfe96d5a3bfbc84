use std::fmt::Display;

/// A virtual node standing for a sparse subtree that holds no item.
/// Its hash is the default digest of its height; no children are materialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyNode<const HASH_SIZE: usize> {
    height: usize,
    node_hash: [u8; HASH_SIZE],
}

impl<const HASH_SIZE: usize> EmptyNode<HASH_SIZE> {
    pub fn new(height: usize, node_hash: [u8; HASH_SIZE]) -> Self {
        Self { height, node_hash }
    }

    /// Returns the hash of the node. No hash happening in this function.
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        self.node_hash
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

impl<const HASH_SIZE: usize> Display for EmptyNode<HASH_SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Empty {{ height: {}, hash: {} }}",
            self.height(),
            hex::encode(self.hash().as_slice())
        )
    }
}

//! Error types for proof verification

use std::error::Error;
use std::fmt::Display;

/// Error type returned by the `Result` flavoured verification helpers.
///
/// Absence (no proof for an item) is reported through `Option`, not through this type.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TreeError {
    /// The recomputed root does not match the expected root
    InvalidMerkleProof,
    /// The proof does not have the number of steps the tree requires
    ProofLengthMismatch { expected: usize, got: usize },
    /// A proof step sits on the wrong side for the key being verified
    PathMismatch { index: usize },
    /// A compressed proof mask is inconsistent with its stored siblings
    InvalidCompressedProof,
}

impl Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::InvalidMerkleProof => write!(f, "Invalid merkle proof"),
            TreeError::ProofLengthMismatch { expected, got } => {
                write!(f, "Proof has {} steps, expected {}", got, expected)
            }
            TreeError::PathMismatch { index } => {
                write!(f, "Proof step {} does not follow the key path", index)
            }
            TreeError::InvalidCompressedProof => write!(f, "Invalid compressed proof"),
        }
    }
}

impl Error for TreeError {}

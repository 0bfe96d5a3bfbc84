mod defaults;
mod merkle;
mod mmr;
mod sparse;

use bitvec::{order::Msb0, view::BitView};

pub use defaults::{DefaultDigests, DEFAULT_LEAF_VALUE};
pub use merkle::MerkleTree;
pub use mmr::MerkleMountainRange;
pub use sparse::SparseMerkleTree;

/// Get the bit at the given index in the key, most significant bit first.
///
/// Reading bits big-endian makes a walk on the bits agree with the numeric order of keys:
/// bit `i` is 0 exactly when the key falls in the lower half of the range at depth `i`.
///
/// # Panics
///
/// Panics if `index` is not below `key.len() * 8`.
pub fn bit_index(index: usize, key: &[u8]) -> bool {
    key.view_bits::<Msb0>()[index]
}

#[cfg(test)]
mod test {
    use super::bit_index;

    #[test]
    #[should_panic]
    fn test_bit_index_out_of_range() {
        bit_index(16, &[0xff, 0xff]);
    }

    #[test]
    fn test_bit_index_is_big_endian() {
        let key = [0b1000_0001, 0b0100_0000];
        assert!(bit_index(0, &key));
        assert!(!bit_index(1, &key));
        assert!(bit_index(7, &key));
        assert!(!bit_index(8, &key));
        assert!(bit_index(9, &key));
    }
}

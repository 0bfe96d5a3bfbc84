use hex_literal::hex;
use sha2::{Digest, Sha512};

use crate::{DefaultDigests, Hasher, MerkleMountainRange, MerkleTree, SparseMerkleTree};

impl Hasher<64> for Sha512 {
    fn hash(data: &[u8]) -> [u8; 64] {
        let mut hasher = Sha512::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

#[test]
fn test_default_digests() {
    let defaults = DefaultDigests::<64, Sha512>::get();
    assert_eq!(DefaultDigests::<64, Sha512>::max_height(), 511);
    assert!(defaults.get_height(511).is_some());
    assert!(defaults.get_height(512).is_none());
    assert_eq!(
        defaults.empty_leaf(),
        hex!("cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e")
    );
}

#[test]
fn test_empty_tree() {
    let tree = SparseMerkleTree::<64, Sha512>::new::<&str>(&[]);
    assert_eq!(
        tree.root(),
        hex!("371e7ea3037d547849dc2d4ae310c0cc8f3a888f0bf2acfe56a06fe425e87bda859a74e03e75d3ac35e331d88c36aa7cd6e50330dafed5c904992e011abdab25")
    );
    assert_eq!(tree.root(), tree.defaults().empty_root());
}

#[test]
fn test_sparse_tree() {
    let tree = SparseMerkleTree::<64, Sha512>::new(&["a", "b", "c"]);
    assert_eq!(
        tree.root(),
        hex!("28491e1a30ea57f29cf1249a08790a21c914d9a8fdba4e148d111df6dabccbe2150484ce62c2d046aa36ec47f1185f6bcbf4efccc37c8dd4f7091a061237516f")
    );
    let proof = tree.prove(b"b").unwrap();
    assert_eq!(proof.len(), 511);
    assert!(SparseMerkleTree::verify(&proof, &tree.root(), b"b"));
    let proof = tree.prove_non_inclusion(b"d").unwrap();
    assert!(SparseMerkleTree::verify_non_inclusion(&proof, &tree.root(), b"d"));
    assert!(tree.prove_non_inclusion(b"c").is_none());
}

#[test]
fn test_merkle_tree() {
    let tree = MerkleTree::<64, Sha512>::new(&["a", "b", "c"]).unwrap();
    assert_eq!(
        tree.root(),
        hex!("00dacdb9ececf322a64b4044d828fbbfed55963822866a34e0d5a8bf6ff9c2eb984aa618e4ef5832b1739e02e40b28fa4d76ca2d3c473486a694c160b9466642")
    );
    let proof = tree.prove(b"c").unwrap();
    assert!(MerkleTree::verify(&proof, &tree.root(), b"c"));
}

#[test]
fn test_mountain_range() {
    let mut mmr = MerkleMountainRange::<64, Sha512>::new(&["a"]);
    mmr.insert(&["b"]);
    assert_eq!(
        mmr.peaks(),
        vec![hex!("a40fb6247bf9aa223348eb8c99dcea9d198694b805ae85bcbfd5ffd33f8ef42c07dd4946ffa68654fd19026ee2723d7ecb2868c3134ce960981156b2120ef62c")]
    );
}

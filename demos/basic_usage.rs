use merkle_forest::{MerkleMountainRange, MerkleTree, SparseMerkleTree};
use sha2::Sha256;

fn main() {
    env_logger::init();

    let items = ["alice", "bob", "carol", "dave", "erin"];

    // Merkle tree
    let Some(tree) = MerkleTree::<32, Sha256>::new(&items) else {
        return;
    };
    println!("merkle tree root: {}", hex::encode(tree.root()));
    print!("{}", tree);
    if let Some(proof) = tree.prove(b"carol") {
        println!(
            "proof for carol: {} steps, valid: {}",
            proof.len(),
            MerkleTree::verify(&proof, &tree.root(), b"carol")
        );
    }

    // Mountain range, grown one batch at a time
    let mut mmr = MerkleMountainRange::<32, Sha256>::new(&items);
    println!("mountain range peaks: {:?}", mmr.peak_sizes());
    mmr.insert(&["frank", "grace", "heidi"]);
    println!("after insertion: {:?}", mmr.peak_sizes());
    for peak in mmr.peaks() {
        println!("  {}", hex::encode(peak));
    }
    if let Some(proof) = mmr.prove(b"grace") {
        println!(
            "proof for grace valid: {}",
            MerkleMountainRange::verify(&proof, &mmr.peaks(), b"grace")
        );
    }

    // Sparse tree, proving both membership and non-membership
    let smt = SparseMerkleTree::<32, Sha256>::new(&items);
    let root = smt.root();
    println!("sparse tree root: {}", hex::encode(root));
    if let Some(proof) = smt.prove(b"dave") {
        println!(
            "dave is a member: {}",
            SparseMerkleTree::verify(&proof, &root, b"dave")
        );
    }
    if let Some(proof) = smt.prove_non_inclusion(b"mallory") {
        let compressed = proof.compress();
        println!(
            "mallory is not a member: {} ({} of {} siblings kept after compression)",
            SparseMerkleTree::verify_non_inclusion(&proof, &root, b"mallory"),
            compressed.siblings().len(),
            proof.len()
        );
    }
}

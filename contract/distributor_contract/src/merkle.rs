use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

/// Versioned prefix of every leaf preimage.
pub const LEAF_DOMAIN: &[u8] = b"SOROBAN_AIRDROP_LEAF_V1";

/// Longest proof accepted, enough for 2^32 leaves.
pub const MAX_PROOF_DEPTH: u32 = 32;

/// Hash one `(recipient, amount)` allocation into a leaf.
///
/// `sha256(LEAF_DOMAIN || xdr(recipient) || amount as 16 big-endian bytes)`.
/// Off-chain tree builders must produce leaves with exactly this encoding.
pub fn hash_leaf(env: &Env, recipient: &Address, amount: i128) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(env, LEAF_DOMAIN);
    preimage.append(&recipient.clone().to_xdr(env));
    preimage.extend_from_array(&amount.to_be_bytes());
    env.crypto().sha256(&preimage).to_bytes()
}

/// Hash two sibling nodes. The pair is sorted first, so the proof does not
/// need to carry left/right positions.
pub fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let a = a.to_array();
    let b = b.to_array();
    let mut data = [0u8; 64];
    if a < b {
        data[..32].copy_from_slice(&a);
        data[32..].copy_from_slice(&b);
    } else {
        data[..32].copy_from_slice(&b);
        data[32..].copy_from_slice(&a);
    }
    env.crypto().sha256(&Bytes::from_array(env, &data)).to_bytes()
}

/// Verify that `leaf` belongs to the tree committed to by `root`.
///
/// `proof` is ordered from the leaf level up. An empty proof only verifies a
/// single-leaf tree where `leaf == root`.
pub fn verify(env: &Env, root: &BytesN<32>, leaf: &BytesN<32>, proof: &Vec<BytesN<32>>) -> bool {
    if proof.len() > MAX_PROOF_DEPTH {
        return false;
    }

    let mut computed_hash = leaf.clone();
    for node in proof.iter() {
        computed_hash = hash_pair(env, &computed_hash, &node);
    }

    computed_hash == *root
}

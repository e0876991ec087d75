use sha2::{Digest, Sha256};
use solana_pubkey::Pubkey;

use crate::{constants::INTERNAL_PREFIX, ClaimLeaf};

/// Hash two sibling nodes into their parent: SHA256(0x01 || min(a, b) || max(a, b)).
///
/// Children are ordered lexicographically before concatenation, so a proof only needs
/// the sibling hashes and never their left/right position.
pub fn hash_internal_node(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };

    let mut hasher = Sha256::new();
    hasher.update([INTERNAL_PREFIX]); // Internal node prefix - domain separation from leaf nodes (0x00)
    hasher.update(first);
    hasher.update(second);
    hasher.finalize().into()
}

/// Upper bound on the number of siblings in a proof for a tree with `leaf_count` leaves.
///
/// Equals `ceil(log2(leaf_count))`. Unpaired nodes are carried up a level without
/// hashing, so leaves on a carried path get shorter proofs, never longer ones.
pub fn max_proof_len(leaf_count: u64) -> usize {
    if leaf_count <= 1 {
        return 0;
    }
    (u64::BITS - (leaf_count - 1).leading_zeros()) as usize
}

/// Binary merkle proof: the sibling hashes from a leaf up to the root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimProof(pub Vec<[u8; 32]>);

impl ClaimProof {
    pub fn new(proof: Vec<[u8; 32]>) -> Self {
        Self(proof)
    }

    pub fn as_slice(&self) -> &[[u8; 32]] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<[u8; 32]> {
        self.0
    }

    /// Fold the siblings over `leaf_hash` and return the resulting root.
    pub fn compute_root(&self, leaf_hash: &[u8; 32]) -> [u8; 32] {
        compute_root(&self.0, leaf_hash)
    }

    /// Verify a binary merkle tree proof using SHA256 hashing with domain separation.
    ///
    /// - Leaf nodes are hashed as: SHA256(0x00 || encoded_leaf)
    /// - Internal nodes are hashed as: SHA256(0x01 || min(L, R) || max(L, R))
    pub fn verify(&self, root: &[u8; 32], leaf: &ClaimLeaf) -> bool {
        self.compute_root(&leaf.to_hash()) == *root
    }
}

impl From<Vec<[u8; 32]>> for ClaimProof {
    fn from(proof: Vec<[u8; 32]>) -> Self {
        Self(proof)
    }
}

/// Stateless claim check: does `(claimant, entitlement)` belong to the tree rooted at `root`?
pub fn verify_claim(
    claimant: &Pubkey,
    entitlement: u64,
    proof: &[[u8; 32]],
    root: &[u8; 32],
) -> bool {
    let leaf = ClaimLeaf::new(*claimant, entitlement);
    compute_root(proof, &leaf.to_hash()) == *root
}

/// Fold `proof` over `leaf_hash` with the sorted-pair node hash.
fn compute_root(proof: &[[u8; 32]], leaf_hash: &[u8; 32]) -> [u8; 32] {
    proof.iter().fold(*leaf_hash, |computed, sibling| {
        hash_internal_node(&computed, sibling)
    })
}

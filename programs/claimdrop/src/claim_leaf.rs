use borsh::BorshSerialize;
use sha2::{Digest, Sha256};
use solana_pubkey::Pubkey;

use crate::constants::LEAF_PREFIX;

/// Size in bytes of an encoded `ClaimLeaf`.
pub const CLAIM_LEAF_ENCODED_LEN: usize = 40;

/// Represents the data that is hashed to form a leaf in the Merkle tree.
/// Each leaf corresponds to one whitelisted claimant and the amount they may claim.
///
/// ## ⚠️ CRITICAL: Encoding Stability
///
/// **The byte encoding produced by [`ClaimLeaf::encode`] MUST NEVER CHANGE** once a root
/// has been published. Any modification to field order, width or endianness will:
/// - Break all existing merkle trees
/// - Invalidate all distributed proofs
/// - Require a new `LEAF_ENCODING_VERSION`
///
/// ### Current Layout (Version 1 - IMMUTABLE):
/// ```text
/// claimant:    Pubkey  // 32 bytes, offset 0
/// entitlement: u64     //  8 bytes, offset 32, little-endian
/// // Total: 40 bytes (Borsh serialization of this struct)
/// ```
#[derive(BorshSerialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClaimLeaf {
    /// The public key of the recipient.
    pub claimant: Pubkey,
    /// Amount the claimant may claim, in the ledger's smallest unit.
    pub entitlement: u64,
}

impl ClaimLeaf {
    pub fn new(claimant: Pubkey, entitlement: u64) -> Self {
        Self {
            claimant,
            entitlement,
        }
    }

    /// Canonical leaf encoding: the Borsh bytes of `claimant ‖ entitlement_le`.
    pub fn encode(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("Failed to serialize ClaimLeaf")
    }

    /// Hash this ClaimLeaf to produce a 32-byte hash suitable for Merkle tree construction.
    /// This follows our merkle tree hashing scheme: SHA256(0x00 || encoded_leaf).
    pub fn to_hash(&self) -> [u8; 32] {
        hash_leaf_data(&self.encode())
    }
}

/// SHA256(0x00 || data). The prefix keeps leaf hashes out of the internal-node domain.
pub fn hash_leaf_data(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_PREFIX]);
    hasher.update(data);
    hasher.finalize().into()
}

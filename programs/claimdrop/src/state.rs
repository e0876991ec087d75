use solana_pubkey::Pubkey;

/// How a new root relates to the one it replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootUpdateKind {
    /// Start a new distribution round. Receipts are keyed by epoch, so every recipient
    /// may claim again under the new root.
    NewEpoch,
    /// Patch the current round (wrong amount, missing recipient). The epoch is kept, so
    /// recipients who already claimed in this epoch stay claimed.
    Correction,
}

/// The merkle commitment claims are currently verified against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionRoot {
    /// Claim round this root belongs to. Starts at `FIRST_EPOCH`.
    pub epoch: u64,

    /// The Merkle root hash for this round's distribution.
    pub merkle_root: [u8; 32],

    /// Number of leaves in the tree, used to reject proofs of impossible length.
    pub leaf_count: u64,

    /// Timestamp of when this root was published.
    pub published_at_timestamp: i64,
}

/// Record of a successful claim. Its existence for `(epoch, claimant)` means Claimed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    /// The claimant who received the tokens.
    pub claimant: Pubkey,

    /// Epoch the claim was made in.
    pub epoch: u64,

    /// Root the proof was verified against.
    pub merkle_root: [u8; 32],

    /// Amount transferred to the claimant.
    pub amount: u64,

    /// Timestamp of when the claim was successfully processed.
    pub claimed_at_timestamp: i64,
}

/// Everything a claimant submits: who, how much, and the path proving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimRequest {
    pub claimant: Pubkey,
    pub entitlement: u64,
    pub proof: Vec<[u8; 32]>,
}

impl ClaimRequest {
    pub fn new(claimant: Pubkey, entitlement: u64, proof: Vec<[u8; 32]>) -> Self {
        Self {
            claimant,
            entitlement,
            proof,
        }
    }
}

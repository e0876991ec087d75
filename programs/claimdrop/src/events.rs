use solana_pubkey::Pubkey;

/// State changes observable by off-chain indexers and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DistributorEvent {
    RootUpdated {
        epoch: u64,
        merkle_root: [u8; 32],
        leaf_count: u64,
        new_epoch: bool,
    },
    Claimed {
        epoch: u64,
        claimant: Pubkey,
        amount: u64,
    },
    BatchDistributed {
        recipient_count: usize,
        total_amount: u64,
    },
    WhitelistUpdated {
        addresses: Vec<Pubkey>,
        whitelisted: bool,
    },
    ActiveStatusChanged {
        is_active: bool,
    },
    TokensReclaimed {
        destination: Pubkey,
        amount: u64,
    },
}

use std::collections::HashMap;

use solana_pubkey::Pubkey;

use crate::TestFixture;

/// Distributor and ledger state for before/after comparisons
///
/// **Use cases:**
/// - Verify a rejected operation changed nothing
/// - Verify a claim only moved value between the vault and the claimant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributorSnapshot {
    pub vault_balance: u64,
    pub total_supply: u128,
    pub receipt_count: usize,
    pub current_root: Option<[u8; 32]>,
    pub current_epoch: Option<u64>,
    pub is_active: bool,
    pub event_count: usize,
    /// Optional: specific claimant balances to track
    pub tracked_claimants: HashMap<Pubkey, u64>,
}

impl DistributorSnapshot {
    pub fn capture_all(test: &TestFixture) -> Self {
        let distributor = &test.distributor;

        Self {
            vault_balance: distributor.vault_balance(),
            total_supply: distributor.ledger().total_supply(),
            receipt_count: distributor.receipt_count(),
            current_root: distributor.current_root(),
            current_epoch: distributor.current_epoch(),
            is_active: distributor.is_active(),
            event_count: distributor.events().len(),
            tracked_claimants: HashMap::new(),
        }
    }

    /// Capture state for specific claimants
    pub fn capture_with_claimants(test: &TestFixture, claimants: &[Pubkey]) -> Self {
        let mut snapshot = Self::capture_all(test);

        for claimant in claimants {
            snapshot
                .tracked_claimants
                .insert(*claimant, test.balance_of(claimant));
        }

        snapshot
    }

    /// Assert that every listed balance moved by exactly its delta.
    pub fn assert_changes(&self, other: &Self, expected_changes: &[AccountChange]) {
        for change in expected_changes {
            match change {
                AccountChange::Vault { delta } => {
                    let actual_delta = other.vault_balance as i128 - self.vault_balance as i128;
                    assert_eq!(actual_delta, *delta as i128, "Vault delta mismatch");
                }
                AccountChange::Claimant { pubkey, delta } => {
                    let before = self.tracked_claimants.get(pubkey).copied().unwrap_or(0);
                    let after = other.tracked_claimants.get(pubkey).copied().unwrap_or(0);
                    let actual_delta = after as i128 - before as i128;
                    assert_eq!(
                        actual_delta, *delta as i128,
                        "Claimant {} delta mismatch",
                        pubkey
                    );
                }
            }
        }

        assert_eq!(
            self.total_supply, other.total_supply,
            "The distributor must never create or destroy value"
        );
    }
}

/// Expected balance changes for surgical verification
#[derive(Clone, Debug)]
pub enum AccountChange {
    Vault { delta: i64 },
    Claimant { pubkey: Pubkey, delta: i64 },
}

use std::collections::HashMap;

use solana_pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance: need {required}, have {available}")]
    InsufficientBalance { required: u64, available: u64 },

    #[error("Balance overflow for account {0}")]
    BalanceOverflow(Pubkey),

    #[error("Transfer amount overflow")]
    AmountOverflow,
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

/// The balance-holding collaborator that actually moves value.
///
/// The distributor never mints: it only moves what has been deposited into its vault.
/// Implementations must leave every balance untouched when a call returns an error,
/// including `transfer_batch`, which is all-or-nothing.
pub trait Ledger {
    fn balance_of(&self, owner: &Pubkey) -> u64;

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> LedgerResult<()>;

    fn transfer_batch(&mut self, from: &Pubkey, transfers: &[(Pubkey, u64)]) -> LedgerResult<()>;
}

/// Simple map-backed ledger used by tests, the fixture and `simulate-claims`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    balances: HashMap<Pubkey, u64>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deposit `amount` into `owner` from outside the ledger (funding a vault, seeding a test).
    pub fn credit(&mut self, owner: &Pubkey, amount: u64) -> LedgerResult<()> {
        let balance = self.balance_of(owner);
        let new_balance = balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow(*owner))?;
        self.balances.insert(*owner, new_balance);
        Ok(())
    }

    /// Sum of every balance held in this ledger.
    pub fn total_supply(&self) -> u128 {
        self.balances.values().map(|b| *b as u128).sum()
    }
}

impl Ledger for InMemoryLedger {
    fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> LedgerResult<()> {
        self.transfer_batch(from, &[(*to, amount)])
    }

    fn transfer_batch(&mut self, from: &Pubkey, transfers: &[(Pubkey, u64)]) -> LedgerResult<()> {
        let total = transfers
            .iter()
            .try_fold(0u64, |acc, (_, amount)| acc.checked_add(*amount))
            .ok_or(LedgerError::AmountOverflow)?;

        let available = self.balance_of(from);
        if available < total {
            return Err(LedgerError::InsufficientBalance {
                required: total,
                available,
            });
        }

        // Stage every touched balance first; nothing is written unless all transfers fit.
        let mut staged: HashMap<Pubkey, u64> = HashMap::new();
        for (to, amount) in transfers {
            let from_balance = staged
                .get(from)
                .copied()
                .unwrap_or_else(|| self.balance_of(from));
            staged.insert(*from, from_balance - amount);

            let to_balance = staged
                .get(to)
                .copied()
                .unwrap_or_else(|| self.balance_of(to));
            let new_to_balance = to_balance
                .checked_add(*amount)
                .ok_or(LedgerError::BalanceOverflow(*to))?;
            staged.insert(*to, new_to_balance);
        }

        self.balances.extend(staged);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    #[test]
    fn test_transfer_moves_balance() {
        let mut ledger = InMemoryLedger::new();
        ledger.credit(&key(1), 500).unwrap();

        ledger.transfer(&key(1), &key(2), 200).unwrap();

        assert_eq!(ledger.balance_of(&key(1)), 300);
        assert_eq!(ledger.balance_of(&key(2)), 200);
        assert_eq!(ledger.total_supply(), 500);
    }

    #[test]
    fn test_transfer_insufficient_balance_leaves_state() {
        let mut ledger = InMemoryLedger::new();
        ledger.credit(&key(1), 99).unwrap();
        let before = ledger.clone();

        let err = ledger.transfer(&key(1), &key(2), 100).unwrap_err();

        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                required: 100,
                available: 99
            }
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_transfer_batch_is_all_or_nothing() {
        let mut ledger = InMemoryLedger::new();
        ledger.credit(&key(1), 1_000).unwrap();
        ledger.credit(&key(3), u64::MAX - 10).unwrap();
        let before = ledger.clone();

        // second transfer would overflow key(3)
        let err = ledger
            .transfer_batch(&key(1), &[(key(2), 100), (key(3), 11)])
            .unwrap_err();

        assert_eq!(err, LedgerError::BalanceOverflow(key(3)));
        assert_eq!(ledger, before);

        ledger
            .transfer_batch(&key(1), &[(key(2), 100), (key(2), 50), (key(3), 10)])
            .unwrap();
        assert_eq!(ledger.balance_of(&key(1)), 840);
        assert_eq!(ledger.balance_of(&key(2)), 150);
        assert_eq!(ledger.balance_of(&key(3)), u64::MAX);
    }

    #[test]
    fn test_self_transfer_keeps_balance() {
        let mut ledger = InMemoryLedger::new();
        ledger.credit(&key(1), 10).unwrap();

        ledger.transfer(&key(1), &key(1), 10).unwrap();

        assert_eq!(ledger.balance_of(&key(1)), 10);
    }
}

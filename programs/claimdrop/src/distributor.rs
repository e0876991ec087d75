use std::collections::{HashMap, HashSet};

use solana_pubkey::Pubkey;
use tracing::warn;

use crate::{
    error::{ErrorCode, Result},
    events::DistributorEvent,
    instructions,
    ledger::Ledger,
    state::{ClaimReceipt, ClaimRequest, DistributionRoot, RootUpdateKind},
};

/// Merkle claim registry bound to one vault on a `Ledger`.
///
/// Every mutating entry point takes `&mut self`, so operations are serialized and each
/// one either completes or returns an error having changed nothing.
#[derive(Debug)]
pub struct Distributor<L: Ledger> {
    pub(crate) admin: Pubkey,
    pub(crate) vault: Pubkey,
    pub(crate) ledger: L,
    pub(crate) is_active: bool,
    pub(crate) active_root: Option<DistributionRoot>,
    pub(crate) claim_receipts: HashMap<(u64, Pubkey), ClaimReceipt>,
    pub(crate) whitelist: HashSet<Pubkey>,
    pub(crate) events: Vec<DistributorEvent>,
}

impl<L: Ledger> Distributor<L> {
    /// Create an active distributor with no published root. Claims are refused until
    /// the admin publishes one.
    pub fn new(admin: Pubkey, vault: Pubkey, ledger: L) -> Self {
        Self {
            admin,
            vault,
            ledger,
            is_active: true,
            active_root: None,
            claim_receipts: HashMap::new(),
            whitelist: HashSet::new(),
            events: Vec::new(),
        }
    }

    // admin
    pub fn update_root(
        &mut self,
        caller: &Pubkey,
        merkle_root: [u8; 32],
        leaf_count: u64,
        kind: RootUpdateKind,
    ) -> Result<DistributionRoot> {
        instructions::handle_update_root(self, caller, merkle_root, leaf_count, kind)
    }

    // admin
    pub fn set_active_status(&mut self, caller: &Pubkey, is_active: bool) -> Result<()> {
        instructions::handle_set_active_status(self, caller, is_active)
    }

    // admin
    pub fn set_whitelist_status(
        &mut self,
        caller: &Pubkey,
        addresses: &[Pubkey],
        whitelisted: bool,
    ) -> Result<()> {
        instructions::handle_set_whitelist_status(self, caller, addresses, whitelisted)
    }

    // admin
    pub fn batch_distribute(
        &mut self,
        caller: &Pubkey,
        recipients: &[Pubkey],
        amounts: &[u64],
    ) -> Result<u64> {
        instructions::handle_batch_distribute(self, caller, recipients, amounts)
    }

    // admin
    pub fn reclaim_tokens(&mut self, caller: &Pubkey, destination: &Pubkey) -> Result<u64> {
        instructions::handle_reclaim_tokens(self, caller, destination)
    }

    // claimant
    pub fn claim_tokens(&mut self, caller: &Pubkey, request: ClaimRequest) -> Result<ClaimReceipt> {
        instructions::handle_claim_tokens(self, caller, request)
    }

    /// Read-only eligibility pre-check, answering `true` exactly when `claim_tokens`
    /// submitted by `claimant` would pass every check before the ledger transfer.
    pub fn can_claim(&self, claimant: &Pubkey, entitlement: u64, proof: &[[u8; 32]]) -> bool {
        instructions::claim_tokens::validate_claim(self, claimant, claimant, entitlement, proof)
            .is_ok()
    }

    /// Whether `claimant` has claimed in the current epoch.
    pub fn has_claimed(&self, claimant: &Pubkey) -> bool {
        self.active_root
            .as_ref()
            .is_some_and(|root| self.claim_receipts.contains_key(&(root.epoch, *claimant)))
    }

    pub fn current_root(&self) -> Option<[u8; 32]> {
        self.active_root.map(|root| root.merkle_root)
    }

    pub fn active_root(&self) -> Option<&DistributionRoot> {
        self.active_root.as_ref()
    }

    pub fn current_epoch(&self) -> Option<u64> {
        self.active_root.map(|root| root.epoch)
    }

    pub fn receipt(&self, epoch: u64, claimant: &Pubkey) -> Option<&ClaimReceipt> {
        self.claim_receipts.get(&(epoch, *claimant))
    }

    pub fn receipt_count(&self) -> usize {
        self.claim_receipts.len()
    }

    pub fn is_whitelisted(&self, address: &Pubkey) -> bool {
        self.whitelist.contains(address)
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn admin(&self) -> &Pubkey {
        &self.admin
    }

    pub fn vault(&self) -> &Pubkey {
        &self.vault
    }

    pub fn vault_balance(&self) -> u64 {
        self.ledger.balance_of(&self.vault)
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Direct ledger access for funding the vault and for inspecting balances.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn events(&self) -> &[DistributorEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<DistributorEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        if *caller != self.admin {
            warn!(%caller, admin = %self.admin, "rejected admin action from non-admin caller");
            return Err(ErrorCode::Unauthorized);
        }
        Ok(())
    }

    pub(crate) fn emit(&mut self, event: DistributorEvent) {
        self.events.push(event);
    }
}

use {
    crate::{
        default_whitelist, deterministic_pubkey, FixtureStage, TEST_DISTRIBUTION_NAME,
        TEST_VAULT_SURPLUS,
    },
    claimdrop::{
        ClaimReceipt, ClaimRequest, DistributionRoot, Distributor, ErrorCode, InMemoryLedger,
        Ledger, RootUpdateKind,
    },
    claimdrop_sdk::{compile_distribution, CompiledClaim, CompiledDistribution, WhitelistEntry},
    solana_pubkey::Pubkey,
};

/// A distributor over an in-memory ledger plus the compiled whitelist it serves.
///
/// Fresh fixtures sit at `FixtureStage::DistributionCompiled`; use `jump_to` to reach the
/// stage a scenario starts from.
pub struct TestFixture {
    pub stage: FixtureStage,
    pub admin: Pubkey,
    pub vault: Pubkey,
    pub distribution: CompiledDistribution,
    pub distributor: Distributor<InMemoryLedger>,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Fixture over `DEFAULT_WHITELIST`.
    pub fn new() -> Self {
        Self::with_whitelist(&default_whitelist())
    }

    pub fn with_whitelist(whitelist: &[WhitelistEntry]) -> Self {
        let distribution = compile_distribution(TEST_DISTRIBUTION_NAME, whitelist)
            .unwrap_or_else(|e| panic!("Failed to compile test whitelist: {e}"));

        let admin = deterministic_pubkey("test_admin");
        let vault = deterministic_pubkey("test_vault");
        let distributor = Distributor::new(admin, vault, InMemoryLedger::new());

        Self {
            stage: FixtureStage::default(),
            admin,
            vault,
            distribution,
            distributor,
        }
    }

    pub fn jump_to(&mut self, target_stage: FixtureStage) {
        let stages_to_step = FixtureStage::all()
            .iter()
            .copied()
            .filter(|s| *s > self.stage && *s <= target_stage)
            .collect::<Vec<_>>();

        for stage in stages_to_step {
            self.step_to(stage);
        }
    }

    pub fn step_to(&mut self, stage: FixtureStage) {
        match stage {
            FixtureStage::DistributionCompiled => return,
            FixtureStage::VaultFunded => {
                let amount = self.distribution.total_entitlement + TEST_VAULT_SURPLUS;
                self.fund_vault(amount);
            }
            FixtureStage::RootPublished => {
                self.try_publish_root(RootUpdateKind::NewEpoch)
                    .unwrap_or_else(|e| panic!("Failed to publish root: {e}"));
            }
        }
        self.stage = stage;
    }

    /// Deposit `amount` into the vault from outside the distributor.
    pub fn fund_vault(&mut self, amount: u64) {
        let vault = self.vault;
        self.distributor
            .ledger_mut()
            .credit(&vault, amount)
            .unwrap_or_else(|e| panic!("Failed to fund vault with {amount}: {e}"));
    }

    /// Publish the compiled distribution's root as the admin.
    pub fn try_publish_root(&mut self, kind: RootUpdateKind) -> Result<DistributionRoot, ErrorCode> {
        self.distributor.update_root(
            &self.admin,
            self.distribution.merkle_root,
            self.distribution.leaf_count,
            kind,
        )
    }

    /// Replace the compiled whitelist and publish its root.
    pub fn try_republish(
        &mut self,
        whitelist: &[WhitelistEntry],
        kind: RootUpdateKind,
    ) -> Result<DistributionRoot, ErrorCode> {
        self.distribution = compile_distribution(TEST_DISTRIBUTION_NAME, whitelist)
            .unwrap_or_else(|e| panic!("Failed to compile test whitelist: {e}"));
        self.try_publish_root(kind)
    }

    pub fn compiled_claim(&self, claimant: &Pubkey) -> CompiledClaim {
        self.distribution
            .claim_for(claimant)
            .unwrap_or_else(|e| panic!("No compiled claim: {e}"))
            .clone()
    }

    /// Claim as `claimant` using the proof from the compiled distribution.
    pub fn try_claim_tokens(&mut self, claimant: &Pubkey) -> Result<ClaimReceipt, ErrorCode> {
        let request = self.compiled_claim(claimant).to_request();
        self.distributor.claim_tokens(claimant, request)
    }

    /// Submit an arbitrary request, with the claimant as caller.
    pub fn try_claim_with(&mut self, request: ClaimRequest) -> Result<ClaimReceipt, ErrorCode> {
        let caller = request.claimant;
        self.distributor.claim_tokens(&caller, request)
    }

    pub fn try_pause(&mut self) -> Result<(), ErrorCode> {
        self.distributor.set_active_status(&self.admin, false)
    }

    pub fn try_resume(&mut self) -> Result<(), ErrorCode> {
        self.distributor.set_active_status(&self.admin, true)
    }

    pub fn try_reclaim_tokens(&mut self, destination: &Pubkey) -> Result<u64, ErrorCode> {
        self.distributor.reclaim_tokens(&self.admin, destination)
    }

    pub fn try_whitelist(&mut self, addresses: &[Pubkey]) -> Result<(), ErrorCode> {
        self.distributor
            .set_whitelist_status(&self.admin, addresses, true)
    }

    pub fn try_batch_distribute(
        &mut self,
        recipients: &[Pubkey],
        amounts: &[u64],
    ) -> Result<u64, ErrorCode> {
        self.distributor
            .batch_distribute(&self.admin, recipients, amounts)
    }

    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.distributor.ledger().balance_of(owner)
    }

    pub fn vault_balance(&self) -> u64 {
        self.distributor.vault_balance()
    }

    /// Every claimant in the compiled distribution, in leaf order.
    pub fn claimants(&self) -> Vec<Pubkey> {
        self.distribution
            .claims
            .iter()
            .map(|claim| claim.claimant)
            .collect()
    }
}

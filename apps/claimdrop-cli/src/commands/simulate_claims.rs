use crate::error::CliResult;
use claimdrop::{Distributor, ErrorCode, InMemoryLedger, Ledger, RootUpdateKind};
use claimdrop_sdk::CompiledDistribution;
use solana_pubkey::Pubkey;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub claimed: usize,
    pub failed: usize,
    pub total_claimed: u64,
    pub vault_remaining: u64,
    pub duplicate_rejected: bool,
}

/// Dry-run a compiled distribution: publish its root on an in-memory distributor, fund
/// the vault, submit every claim, then replay the first one to confirm it is refused.
pub fn execute(distribution_in: PathBuf, fund: Option<u64>) -> CliResult<()> {
    let distribution = CompiledDistribution::load(&distribution_in)?;
    let funding = fund.unwrap_or(distribution.total_entitlement);

    println!(
        "🧪 Simulating {} claims for '{}' with vault funding {}",
        distribution.claims.len(),
        distribution.name,
        funding
    );

    let report = simulate(&distribution, funding)?;

    println!("\n📊 Simulation results:");
    println!("  - Successful claims: {}", report.claimed);
    println!("  - Failed claims: {}", report.failed);
    println!("  - Total claimed: {}", report.total_claimed);
    println!("  - Vault remaining: {}", report.vault_remaining);
    if report.duplicate_rejected {
        println!("✅ Replayed claim was rejected as AlreadyClaimed");
    }
    if report.failed == 0 {
        println!("🎉 Every claimant could claim");
    } else {
        println!("⚠️  {} claims failed; check the vault funding", report.failed);
    }

    Ok(())
}

pub fn simulate(distribution: &CompiledDistribution, funding: u64) -> CliResult<SimulationReport> {
    let admin = Pubkey::new_unique();
    let vault = Pubkey::new_unique();

    let mut ledger = InMemoryLedger::new();
    ledger
        .credit(&vault, funding)
        .map_err(ErrorCode::TransferFailed)?;

    let mut distributor = Distributor::new(admin, vault, ledger);
    distributor.update_root(
        &admin,
        distribution.merkle_root,
        distribution.leaf_count,
        RootUpdateKind::NewEpoch,
    )?;

    let mut report = SimulationReport::default();
    for claim in &distribution.claims {
        match distributor.claim_tokens(&claim.claimant, claim.to_request()) {
            Ok(receipt) => {
                report.claimed += 1;
                report.total_claimed += receipt.amount;
            }
            Err(e) => {
                warn!(claimant = %claim.claimant, error = %e, "simulated claim failed");
                report.failed += 1;
            }
        }
    }

    if let Some(first) = distribution.claims.first() {
        if distributor.has_claimed(&first.claimant) {
            let replay = distributor.claim_tokens(&first.claimant, first.to_request());
            report.duplicate_rejected = replay == Err(ErrorCode::AlreadyClaimed);
        }
    }

    report.vault_remaining = distributor.ledger().balance_of(&vault);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimdrop_sdk::{compile_distribution, WhitelistEntry};

    fn distribution() -> CompiledDistribution {
        let entries: Vec<WhitelistEntry> = (1..=6u8)
            .map(|i| WhitelistEntry::new(Pubkey::new_from_array([i; 32]), i as u64 * 100))
            .collect();
        compile_distribution("sim", &entries).unwrap()
    }

    #[test]
    fn test_fully_funded_simulation() {
        let distribution = distribution();
        let report = simulate(&distribution, distribution.total_entitlement).unwrap();

        assert_eq!(
            report,
            SimulationReport {
                claimed: 6,
                failed: 0,
                total_claimed: 2_100,
                vault_remaining: 0,
                duplicate_rejected: true,
            }
        );
    }

    #[test]
    fn test_underfunded_simulation() {
        let distribution = distribution();
        // enough for the first three claimants only (100 + 200 + 300)
        let report = simulate(&distribution, 600).unwrap();

        assert_eq!(report.claimed, 3);
        assert_eq!(report.failed, 3);
        assert_eq!(report.vault_remaining, 0);
    }
}

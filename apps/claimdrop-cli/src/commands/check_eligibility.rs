use crate::commands::parse_pubkey;
use crate::error::CliResult;
use claimdrop_sdk::{CompiledDistribution, CompilerError};
use std::path::PathBuf;

pub fn execute(distribution_in: PathBuf, claimant: String) -> CliResult<()> {
    let claimant = parse_pubkey(&claimant)?;

    println!("🔍 Checking eligibility for claimant: {}", claimant);
    let distribution = CompiledDistribution::load(&distribution_in)?;
    println!(
        "📊 Distribution '{}' (root {})",
        distribution.name,
        distribution.merkle_root_hex()
    );

    let claim = match distribution.claim_for(&claimant) {
        Ok(claim) => claim,
        Err(CompilerError::ClaimantNotFound(_)) => {
            println!("❌ No eligibility found for claimant {}", claimant);
            println!("   This claimant is not part of this distribution.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("✅ Eligible for {}", claim.entitlement);
    println!("   Proof ({} siblings):", claim.proof.len());
    for sibling in &claim.proof {
        println!("     {}", hex::encode(sibling));
    }

    if distribution.verify(claim) {
        println!("✅ Proof verifies against the distribution root");
    } else {
        println!("❌ Proof does NOT verify; the distribution file may be corrupt");
    }

    Ok(())
}

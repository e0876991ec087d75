use crate::commands::{parse_hash, parse_pubkey};
use crate::error::{CliError, CliResult};
use claimdrop::verify_claim;

pub fn execute(claimant: String, entitlement: u64, root: String, proof: Vec<String>) -> CliResult<()> {
    let claimant = parse_pubkey(&claimant)?;
    let root = parse_hash(&root)?;
    let proof = proof
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_hash(s))
        .collect::<CliResult<Vec<_>>>()?;

    println!("🔍 Verifying claim of {} for {}", entitlement, claimant);
    println!("   Root: {}", hex::encode(root));
    println!("   Proof length: {}", proof.len());

    if verify_claim(&claimant, entitlement, &proof, &root) {
        println!("✅ Proof is valid");
        if proof.is_empty() {
            println!("   (single-leaf tree: the root is the leaf hash)");
        }
        Ok(())
    } else {
        println!("❌ Proof is invalid");
        Err(CliError::CommandExecution(
            "proof does not verify against the given root".to_string(),
        ))
    }
}

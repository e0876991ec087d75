use crate::error::{CliError, CliResult};
use claimdrop_sdk::{write_whitelist, WhitelistEntry};
use rand::{rngs::StdRng, Rng, SeedableRng};
use solana_pubkey::Pubkey;
use std::collections::HashSet;
use std::path::PathBuf;

/// Generate a deterministic random whitelist
pub fn execute(
    count: usize,
    seed: u64,
    output: PathBuf,
    min_amount: u64,
    max_amount: u64,
) -> CliResult<()> {
    if count == 0 {
        return Err(CliError::InvalidConfig(
            "count must be greater than zero".to_string(),
        ));
    }
    if min_amount == 0 || min_amount > max_amount {
        return Err(CliError::InvalidConfig(format!(
            "amount range {min_amount}..={max_amount} must be non-empty and start above zero"
        )));
    }

    println!("Generating {} claimants with seed {}", count, seed);
    println!("Amount range: {} - {}", min_amount, max_amount);

    let entries = generate_entries(count, seed, min_amount, max_amount);
    write_whitelist(&output, &entries)?;

    let total: u128 = entries.iter().map(|e| e.amount as u128).sum();
    println!("\n✅ Generated whitelist: {}", output.display());
    println!("📊 Summary:");
    println!("  - {} claimants", entries.len());
    println!("  - Total entitlement: {}", total);

    Ok(())
}

fn generate_entries(count: usize, seed: u64, min_amount: u64, max_amount: u64) -> Vec<WhitelistEntry> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(count);
    let mut entries = Vec::with_capacity(count);

    while entries.len() < count {
        let address = Pubkey::new_from_array(rng.gen());
        if !seen.insert(address) {
            continue;
        }
        entries.push(WhitelistEntry::new(
            address,
            rng.gen_range(min_amount..=max_amount),
        ));
    }

    entries
}

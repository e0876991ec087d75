use crate::config::{DistributionConfig, DistributionOverrides};
use crate::error::CliResult;
use claimdrop_csvs::write_summary_csv;
use claimdrop_sdk::compile_distribution_from_file;
use std::path::PathBuf;

pub fn execute(config: Option<PathBuf>, overrides: DistributionOverrides) -> CliResult<()> {
    let config = DistributionConfig::resolve(config.as_deref(), overrides)?;

    println!("🚀 Compiling distribution '{}'", config.distribution_name);
    println!("📋 Reading whitelist: {}", config.whitelist_file.display());

    let distribution =
        compile_distribution_from_file(&config.distribution_name, &config.whitelist_file)?;
    distribution.save(&config.output_file)?;

    println!("✅ Wrote {}", config.output_file.display());

    if let Some(summary_file) = &config.summary_file {
        write_summary_csv(summary_file, &[distribution.summary_row()])?;
        println!("✅ Wrote {}", summary_file.display());
    }

    println!("\n📊 Summary:");
    println!("  - Merkle root: {}", distribution.merkle_root_hex());
    println!("  - Leaves: {}", distribution.leaf_count);
    println!("  - Total entitlement: {}", distribution.total_entitlement);
    println!("  - Max proof length: {}", distribution.max_proof_len);
    println!(
        "\n💡 Fund the vault with at least {} before publishing the root",
        distribution.total_entitlement
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimdrop_sdk::{write_whitelist, CompiledDistribution, Pubkey, WhitelistEntry};
    use tempfile::TempDir;

    #[test]
    fn test_compile_from_flags() {
        let dir = TempDir::new().unwrap();
        let whitelist = dir.path().join("whitelist.json");
        let output = dir.path().join("distribution.json");
        let summary = dir.path().join("summary.csv");
        write_whitelist(
            &whitelist,
            &[
                WhitelistEntry::new(Pubkey::new_from_array([1u8; 32]), 10),
                WhitelistEntry::new(Pubkey::new_from_array([2u8; 32]), 20),
            ],
        )
        .unwrap();

        execute(
            None,
            DistributionOverrides {
                distribution_name: Some("cli".to_string()),
                whitelist_file: Some(whitelist),
                output_file: Some(output.clone()),
                summary_file: Some(summary.clone()),
            },
        )
        .unwrap();

        let compiled = CompiledDistribution::load(&output).unwrap();
        assert_eq!(compiled.total_entitlement, 30);
        assert_eq!(
            claimdrop_csvs::read_summary_csv(&summary).unwrap()[0],
            compiled.summary_row()
        );
    }
}

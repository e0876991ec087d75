/*!
# CSV Schema Definitions

Row types and header contracts for whitelist and summary files.
*/

use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

/// Current schema version for all CSV formats
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

/// Schema version header that should appear in CSV metadata
pub const VERSION_HEADER: &str = "# claimdrop-csv-version";

// ================================================================================================
// Whitelist CSV Schema
// ================================================================================================

/// Expected headers for whitelist.csv in exact order
pub const WHITELIST_CSV_HEADERS: &[&str] = &["claimant", "entitlement"];

/// Row structure for whitelist.csv
///
/// **File**: `whitelist.csv`
/// **Purpose**: Who may claim, and how much
/// **Producer**: `generate-fixtures` command, operators
/// **Consumers**: `compile-distribution` command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WhitelistRow {
    /// Claimant's public key in base58 format
    #[serde(with = "crate::serde_helpers::pubkey")]
    pub claimant: Pubkey,

    /// Amount this claimant may claim
    pub entitlement: u64,
}

// ================================================================================================
// Summary CSV Schema
// ================================================================================================

/// Expected headers for summary.csv in exact order
pub const SUMMARY_CSV_HEADERS: &[&str] =
    &["distribution", "merkle_root", "leaf_count", "total_entitlement"];

/// Row structure for summary.csv
///
/// **File**: `summary.csv`
/// **Purpose**: What the admin publishes and how much the vault must hold
/// **Producer**: `compile-distribution` command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRow {
    pub distribution: String,

    /// Merkle root hash in hex format (without 0x prefix)
    #[serde(with = "crate::serde_helpers::hash")]
    pub merkle_root: [u8; 32],

    pub leaf_count: u64,

    /// Sum of all entitlements; the vault must be funded with at least this much
    pub total_entitlement: u64,
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_whitelist_csv_row_serialization() {
        let row = WhitelistRow {
            claimant: Pubkey::from_str("11111111111111111111111111111112").unwrap(),
            entitlement: 100,
        };

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(&row).unwrap();
        let csv_data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert!(csv_data.starts_with("claimant,entitlement\n"));

        let mut rdr = csv::Reader::from_reader(csv_data.as_bytes());
        let deserialized: WhitelistRow = rdr.deserialize().next().unwrap().unwrap();

        assert_eq!(row, deserialized);
    }

    #[test]
    fn test_summary_csv_row_uses_hex_root() {
        let row = SummaryRow {
            distribution: "genesis".to_string(),
            merkle_root: [0xab; 32],
            leaf_count: 3,
            total_entitlement: 600,
        };

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(&row).unwrap();
        let csv_data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert!(csv_data.contains(&"ab".repeat(32)));

        let mut rdr = csv::Reader::from_reader(csv_data.as_bytes());
        let deserialized: SummaryRow = rdr.deserialize().next().unwrap().unwrap();
        assert_eq!(row, deserialized);
    }

    #[test]
    fn test_short_hex_root_is_rejected() {
        let csv_data = "distribution,merkle_root,leaf_count,total_entitlement\ngenesis,abcd,1,1\n";
        let mut rdr = csv::Reader::from_reader(csv_data.as_bytes());
        let result: Result<SummaryRow, _> = rdr.deserialize().next().unwrap();
        assert!(result.is_err());
    }
}

/*!
# Claimdrop CSV Schema Definitions

This crate provides the **authoritative CSV schemas** for claimdrop distributions.

## Purpose

This crate is the data contract between:

- **`generate-fixtures`** (producer) → Creates whitelist CSV files
- **`compile-distribution`** (consumer) → Reads the whitelist, writes the summary
- **CLI Commands** (consumers) → Check eligibility against compiled data

## Schema Files

### Whitelist CSV (`whitelist.csv`)
One row per eligible recipient:
- `claimant`: public key (base58)
- `entitlement`: amount claimable, in the ledger's smallest unit (u64)

### Summary CSV (`summary.csv`)
One row per compiled distribution:
- `distribution`: distribution name
- `merkle_root`: root hash (hex, no `0x` prefix)
- `leaf_count`: number of whitelist entries
- `total_entitlement`: sum of all entitlements

## Versioning

Files written here start with a version line:
- Current version: `1.0`
- Version header: `# claimdrop-csv-version: 1.0`

Files without the line are read as the current version.

## Usage

```rust,no_run
use claimdrop_csvs::{read_whitelist_csv, validate_whitelist_rows, CsvResult};

fn example() -> CsvResult<()> {
    let rows = read_whitelist_csv("whitelist.csv")?;
    validate_whitelist_rows(&rows)?;
    Ok(())
}
```
*/

pub mod errors;
pub mod schemas;
pub mod serde_helpers;
pub mod validation;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use schemas::{SummaryRow, WhitelistRow, CURRENT_SCHEMA_VERSION, VERSION_HEADER};
pub use serde_helpers::decode_hash;
pub use validation::{
    read_summary_csv, read_whitelist_csv, validate_summary_consistency, validate_whitelist_rows,
    write_summary_csv, write_whitelist_csv,
};

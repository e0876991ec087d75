/*!
# Whitelist Input

A whitelist is the list of `(address, amount)` pairs a distribution is compiled from.
Two on-disk forms are accepted:

- CSV with `claimant,entitlement` headers (see `claimdrop_csvs`)
- JSON array: `[{ "address": "<base58>", "amount": 100 }, ...]`
*/

use crate::{CompilerError, CompilerResult};
use claimdrop::Pubkey;
use claimdrop_csvs::{read_whitelist_csv, write_whitelist_csv, WhitelistRow};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WhitelistEntry {
    #[serde(with = "claimdrop_csvs::serde_helpers::pubkey")]
    pub address: Pubkey,
    pub amount: u64,
}

impl WhitelistEntry {
    pub fn new(address: Pubkey, amount: u64) -> Self {
        Self { address, amount }
    }
}

impl From<WhitelistRow> for WhitelistEntry {
    fn from(row: WhitelistRow) -> Self {
        Self::new(row.claimant, row.entitlement)
    }
}

impl From<&WhitelistEntry> for WhitelistRow {
    fn from(entry: &WhitelistEntry) -> Self {
        WhitelistRow {
            claimant: entry.address,
            entitlement: entry.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitelistFormat {
    Csv,
    Json,
}

impl WhitelistFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> CompilerResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Self::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(CompilerError::UnsupportedWhitelistFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Read a whitelist from a `.csv` or `.json` file.
pub fn read_whitelist<P: AsRef<Path>>(path: P) -> CompilerResult<Vec<WhitelistEntry>> {
    let path = path.as_ref();
    match WhitelistFormat::from_path(path)? {
        WhitelistFormat::Csv => Ok(read_whitelist_csv(path)?
            .into_iter()
            .map(WhitelistEntry::from)
            .collect()),
        WhitelistFormat::Json => read_whitelist_json(path),
    }
}

/// Write a whitelist in the format implied by the file extension.
pub fn write_whitelist<P: AsRef<Path>>(path: P, entries: &[WhitelistEntry]) -> CompilerResult<()> {
    let path = path.as_ref();
    match WhitelistFormat::from_path(path)? {
        WhitelistFormat::Csv => {
            let rows: Vec<WhitelistRow> = entries.iter().map(WhitelistRow::from).collect();
            write_whitelist_csv(path, &rows)?;
        }
        WhitelistFormat::Json => write_whitelist_json(path, entries)?,
    }
    Ok(())
}

pub fn read_whitelist_json<P: AsRef<Path>>(path: P) -> CompilerResult<Vec<WhitelistEntry>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub fn write_whitelist_json<P: AsRef<Path>>(
    path: P,
    entries: &[WhitelistEntry],
) -> CompilerResult<()> {
    fs::write(path, serde_json::to_string_pretty(entries)?)?;
    Ok(())
}

/*!
# CSV Validation & I/O

Readers check the version line and the exact header order before deserializing any row.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{
        SummaryRow, WhitelistRow, CURRENT_SCHEMA_VERSION, SUMMARY_CSV_HEADERS, VERSION_HEADER,
        WHITELIST_CSV_HEADERS,
    },
};
use csv::{ReaderBuilder, Writer};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

// ================================================================================================
// CSV Reading with Validation
// ================================================================================================

/// Read and validate a whitelist CSV file
pub fn read_whitelist_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<WhitelistRow>> {
    read_rows(path.as_ref(), WHITELIST_CSV_HEADERS, "whitelist.csv")
}

/// Read and validate a summary CSV file
pub fn read_summary_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<SummaryRow>> {
    read_rows(path.as_ref(), SUMMARY_CSV_HEADERS, "summary.csv")
}

fn read_rows<T: DeserializeOwned>(
    path: &Path,
    expected_headers: &[&str],
    file_type: &str,
) -> CsvResult<Vec<T>> {
    let content = fs::read_to_string(path)?;
    validate_version(&content)?;

    let mut rdr = ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    // Validate headers
    let headers = rdr.headers()?;
    validate_headers(headers.iter(), expected_headers, file_type)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: T = result?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(format!(
            "{file_type} contains no rows"
        )));
    }

    Ok(rows)
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write whitelist CSV with the version line and headers
pub fn write_whitelist_csv<P: AsRef<Path>>(path: P, rows: &[WhitelistRow]) -> CsvResult<()> {
    write_rows(path.as_ref(), rows)
}

/// Write summary CSV with the version line and headers
pub fn write_summary_csv<P: AsRef<Path>>(path: P, rows: &[SummaryRow]) -> CsvResult<()> {
    write_rows(path.as_ref(), rows)
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> CsvResult<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{VERSION_HEADER}: {CURRENT_SCHEMA_VERSION}")?;

    let mut wtr = Writer::from_writer(file);
    // csv crate writes headers from the first serialized row
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Row Validation
// ================================================================================================

/// Validate whitelist rows before a tree is built from them
///
/// Ensures:
/// - Every entitlement is greater than zero
/// - No claimant appears twice
pub fn validate_whitelist_rows(rows: &[WhitelistRow]) -> CsvResult<()> {
    let mut seen = HashSet::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        // 1-based data row number
        let row_number = i + 1;

        if row.entitlement == 0 {
            return Err(CsvError::InvalidRow {
                row: row_number,
                reason: format!("claimant {} has a zero entitlement", row.claimant),
            });
        }
        if !seen.insert(row.claimant) {
            return Err(CsvError::InvalidRow {
                row: row_number,
                reason: format!("claimant {} is listed more than once", row.claimant),
            });
        }
    }

    Ok(())
}

/// Validate that a summary describes the given whitelist
pub fn validate_summary_consistency(
    whitelist_rows: &[WhitelistRow],
    summary: &SummaryRow,
) -> CsvResult<()> {
    if summary.leaf_count != whitelist_rows.len() as u64 {
        return Err(CsvError::DataInconsistency(format!(
            "summary '{}' lists {} leaves but whitelist.csv has {} rows",
            summary.distribution,
            summary.leaf_count,
            whitelist_rows.len()
        )));
    }

    let total = whitelist_rows
        .iter()
        .try_fold(0u64, |acc, row| acc.checked_add(row.entitlement))
        .ok_or_else(|| {
            CsvError::DataInconsistency("whitelist entitlements overflow u64".to_string())
        })?;
    if summary.total_entitlement != total {
        return Err(CsvError::DataInconsistency(format!(
            "summary '{}' totals {} but whitelist.csv sums to {}",
            summary.distribution, summary.total_entitlement, total
        )));
    }

    Ok(())
}

// ================================================================================================
// Header Validation
// ================================================================================================

fn validate_version(content: &str) -> CsvResult<()> {
    let Some(first_line) = content.lines().next() else {
        return Ok(());
    };
    let Some(version) = first_line.strip_prefix(VERSION_HEADER) else {
        return Ok(());
    };

    let found = version.trim_start_matches(':').trim();
    if found != CURRENT_SCHEMA_VERSION {
        return Err(CsvError::VersionMismatch {
            expected: CURRENT_SCHEMA_VERSION.to_string(),
            found: found.to_string(),
        });
    }

    Ok(())
}

fn validate_headers<'a, I>(actual: I, expected: &[&str], file_type: &str) -> CsvResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let actual_headers: Vec<&str> = actual.collect();

    if actual_headers.len() != expected.len() {
        return Err(CsvError::SchemaValidation(format!(
            "{}: expected {} headers, found {}",
            file_type,
            expected.len(),
            actual_headers.len()
        )));
    }

    for (i, (actual, expected)) in actual_headers.iter().zip(expected.iter()).enumerate() {
        if actual != expected {
            return Err(CsvError::SchemaValidation(format!(
                "{}: header {} should be '{}', found '{}'",
                file_type,
                i + 1,
                expected,
                actual
            )));
        }
    }

    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================

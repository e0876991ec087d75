pub mod check_eligibility;
pub mod compile_distribution;
pub mod generate_fixtures;
pub mod simulate_claims;
pub mod verify_proof;

use crate::error::{CliError, CliResult};
use solana_pubkey::Pubkey;
use std::str::FromStr;

pub(crate) fn parse_pubkey(value: &str) -> CliResult<Pubkey> {
    Pubkey::from_str(value.trim())
        .map_err(|e| CliError::InvalidPubkey(format!("'{value}': {e}")))
}

pub(crate) fn parse_hash(value: &str) -> CliResult<[u8; 32]> {
    claimdrop_sdk::decode_hash(value).map_err(|e| CliError::InvalidHex(format!("'{value}': {e}")))
}

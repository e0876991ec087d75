mod distributor_snapshot;
mod fixture_stage;
mod test_fixture;

pub use distributor_snapshot::{AccountChange, DistributorSnapshot};
pub use fixture_stage::FixtureStage;
pub use test_fixture::TestFixture;

use claimdrop_sdk::WhitelistEntry;
use rand::Rng;
use sha2::{Digest, Sha256};
use solana_pubkey::Pubkey;

/// Standard test constants
pub const TEST_DISTRIBUTION_NAME: &str = "test-distribution";
pub const TEST_VAULT_SURPLUS: u64 = 1_000;

/// Claimant names and entitlements of the default fixture whitelist
pub const DEFAULT_WHITELIST: &[(&str, u64)] = &[
    ("early_adopter_1", 1_000),
    ("early_adopter_2", 1_500),
    ("early_adopter_3", 2_000),
    ("power_user_1", 5_000),
    ("power_user_2", 7_500),
];

/// Stable address derived from a human-readable name: `SHA256(name)`.
pub fn deterministic_pubkey(identifier: &str) -> Pubkey {
    let seed: [u8; 32] = Sha256::digest(identifier.as_bytes()).into();
    Pubkey::new_from_array(seed)
}

pub fn default_whitelist() -> Vec<WhitelistEntry> {
    DEFAULT_WHITELIST
        .iter()
        .map(|(name, amount)| WhitelistEntry::new(deterministic_pubkey(name), *amount))
        .collect()
}

/// `count` entries with random addresses and amounts in `1..=max_amount`.
pub fn random_whitelist<R: Rng>(rng: &mut R, count: usize, max_amount: u64) -> Vec<WhitelistEntry> {
    (0..count)
        .map(|_| {
            let address = Pubkey::new_from_array(rng.gen());
            WhitelistEntry::new(address, rng.gen_range(1..=max_amount))
        })
        .collect()
}

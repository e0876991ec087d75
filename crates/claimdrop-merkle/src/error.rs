use claimdrop::Pubkey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Whitelist is empty; a merkle tree needs at least one entry")]
    EmptyWhitelist,

    #[error("Duplicate claimant found: {0}")]
    DuplicateClaimant(Pubkey),

    #[error("Claimant {0} has a zero entitlement")]
    ZeroEntitlement(Pubkey),

    #[error("Claimant not found in tree: {0}")]
    ClaimantNotFound(Pubkey),

    #[error("Missing merkle root")]
    MissingMerkleRoot,
}

pub type MerkleResult<T> = std::result::Result<T, MerkleError>;
